//! Syntax token and restriction parsing.

use tracing::debug;

use vnframes_foundation::{Error, Logic, PosKind, Result, SelrestrSet};
use vnframes_model::{NounPhraseRule, ThematicRole, Token};

use crate::xml::Element;

/// Builds a restriction label from the `Value` and `type` attributes.
fn label(element: &Element) -> Result<String> {
    let value = element.require_attr("Value")?;
    let kind = element.require_attr("type")?;
    Ok(format!("{value}{kind}"))
}

/// Reads the labels of the direct `item` children of a restriction group.
fn direct_labels(group: &Element, item: &str) -> Result<Vec<String>> {
    let mut labels = Vec::new();
    for child in group.children() {
        if child.name() == item {
            labels.push(label(child)?);
        } else {
            debug!(group = group.name(), child = child.name(), "skipping nested restriction");
        }
    }
    Ok(labels)
}

/// Reads the first `SELRESTRS` group under a token.
fn token_selrestrs(node: &Element) -> Result<SelrestrSet> {
    match node.descendant("SELRESTRS") {
        Some(group) => {
            let logic = Logic::from_attr(group.attr("logic"))?;
            Ok(SelrestrSet::new(direct_labels(group, "SELRESTR")?, logic))
        }
        None => Ok(SelrestrSet::empty()),
    }
}

/// Reads the first `SYNRESTRS` group under a token.
fn token_synrestrs(node: &Element) -> Result<Vec<String>> {
    match node.descendant("SYNRESTRS") {
        Some(group) => direct_labels(group, "SYNRESTR"),
        None => Ok(Vec::new()),
    }
}

/// Parses one child of a frame's `SYNTAX` element.
///
/// # Errors
///
/// Returns a structural error for unknown elements or `logic` values, and an
/// invalid token error if the fields do not fit the token kind.
pub fn parse_token(node: &Element, rule: NounPhraseRule) -> Result<Token> {
    let pos = PosKind::from_element(node.name()).ok_or_else(|| {
        Error::structural(node.name(), "unknown syntax element")
    })?;
    let value = node.attr("value").map(str::to_string);
    match pos {
        PosKind::Verb | PosKind::Adjective | PosKind::Adverb => {
            Token::new(pos, None, SelrestrSet::empty(), Vec::new())
        }
        PosKind::Lexical => Token::new(pos, value, SelrestrSet::empty(), Vec::new()),
        PosKind::NounPhrase | PosKind::Preposition => {
            let selrestrs = token_selrestrs(node)?;
            let synrestrs = token_synrestrs(node)?;
            Token::with_rule(pos, value, selrestrs, synrestrs, rule)
        }
    }
}

/// Parses every child of a `SYNTAX` element, in order.
///
/// # Errors
///
/// Returns the first token error.
pub fn parse_syntax(syntax: &Element, rule: NounPhraseRule) -> Result<Vec<Token>> {
    syntax
        .children()
        .iter()
        .map(|node| parse_token(node, rule))
        .collect()
}

/// Parses a `THEMROLE` element.
///
/// Every `SELRESTRS` group below the role, nested ones included, becomes one
/// restriction set built from all `SELRESTR` elements below that group.
/// Groups without restrictions are dropped.
///
/// # Errors
///
/// Returns a structural error for a missing `type` or a bad `logic` value.
pub fn parse_role(node: &Element) -> Result<ThematicRole> {
    let role_type = node.require_attr("type")?;
    let mut sets = Vec::new();
    for group in node.descendants("SELRESTRS") {
        let logic = Logic::from_attr(group.attr("logic"))?;
        let labels = group
            .descendants("SELRESTR")
            .into_iter()
            .map(label)
            .collect::<Result<Vec<_>>>()?;
        if !labels.is_empty() {
            sets.push(SelrestrSet::new(labels, logic));
        }
    }
    Ok(ThematicRole::new(role_type, sets))
}
