//! Class nodes and inheritance.
//!
//! A resource file holds one `VNCLASS` whose `SUBCLASSES` nest
//! `VNSUBCLASS` nodes to any depth. Subclasses inherit the roles and frames
//! of every ancestor.

use tracing::debug;

use vnframes_foundation::{DataQualityWarning, Diagnostics, Result, WarningKind};
use vnframes_model::{Frame, NounPhraseRule, ThematicRole, Token, VerbEntry};

use crate::syntax::{parse_role, parse_syntax};
use crate::xml::Element;

/// A frame as written in a class, before roles are attached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameSpec {
    /// The raw `primary` attribute of the frame description.
    pub description: String,
    /// The parsed syntax tokens.
    pub syntax: Vec<Token>,
}

/// One class or subclass, with only what it declares itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassNode {
    /// The class id.
    pub id: String,
    /// Member verbs declared on this node.
    pub members: Vec<VerbEntry>,
    /// Roles declared on this node.
    pub roles: Vec<ThematicRole>,
    /// Frames declared on this node.
    pub frames: Vec<FrameSpec>,
    /// Direct subclasses.
    pub children: Vec<ClassNode>,
}

/// The members of one node and every frame that applies to them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassFrames {
    /// The class id.
    pub class_id: String,
    /// Member verbs of this node.
    pub members: Vec<VerbEntry>,
    /// Inherited frames followed by the node's own frames.
    pub frames: Vec<Frame>,
}

/// Roles and frames accumulated along the path from the root.
#[derive(Clone, Debug, Default)]
struct Inherited {
    roles: Vec<ThematicRole>,
    frames: Vec<Frame>,
}

impl ClassNode {
    /// Reads a `VNCLASS` or `VNSUBCLASS` element and its subtree.
    ///
    /// # Errors
    ///
    /// Returns a structural error, scoped to the innermost class, if required
    /// structure is missing or a token is invalid.
    pub fn from_element(element: &Element, rule: NounPhraseRule) -> Result<Self> {
        let id = element.require_attr("ID")?.to_string();
        Self::read_body(element, &id, rule).map_err(|e| e.in_class(&id))
    }

    fn read_body(element: &Element, id: &str, rule: NounPhraseRule) -> Result<Self> {
        let mut members = Vec::new();
        for member in element.require_child("MEMBERS")?.children_named("MEMBER") {
            let mut entry = VerbEntry::new(member.require_attr("name")?, id)
                .with_wordnet(member.attr("wn").unwrap_or_default().split_whitespace());
            if let Some(grouping) = member.attr("grouping") {
                entry = entry.with_grouping(grouping);
            }
            members.push(entry);
        }

        let roles = match element.child("THEMROLES") {
            Some(themroles) => themroles
                .children_named("THEMROLE")
                .map(parse_role)
                .collect::<Result<Vec<_>>>()?,
            None => Vec::new(),
        };

        let mut frames = Vec::new();
        for frame in element.require_child("FRAMES")?.children_named("FRAME") {
            let description = frame.require_child("DESCRIPTION")?.require_attr("primary")?;
            let syntax = parse_syntax(frame.require_child("SYNTAX")?, rule)
                .map_err(|e| e.in_frame(description))?;
            frames.push(FrameSpec {
                description: description.to_string(),
                syntax,
            });
        }

        let children = match element.child("SUBCLASSES") {
            Some(subclasses) => subclasses
                .children_named("VNSUBCLASS")
                .map(|sub| Self::from_element(sub, rule))
                .collect::<Result<Vec<_>>>()?,
            None => Vec::new(),
        };

        Ok(Self {
            id: id.to_string(),
            members,
            roles,
            frames,
            children,
        })
    }

    /// Returns the number of nodes in this subtree.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }

    /// Flattens the subtree into one [`ClassFrames`] per node, parents first.
    pub fn flatten(&self, diagnostics: &mut Diagnostics) -> Vec<ClassFrames> {
        let mut out = Vec::with_capacity(self.node_count());
        self.flatten_into(&Inherited::default(), &mut out, diagnostics);
        out
    }

    fn flatten_into(
        &self,
        inherited: &Inherited,
        out: &mut Vec<ClassFrames>,
        diagnostics: &mut Diagnostics,
    ) {
        let roles = ThematicRole::merge_all(
            inherited.roles.iter().chain(&self.roles).cloned(),
        );

        let mut frames = inherited.frames.clone();
        frames.extend(self.frames.iter().map(|spec| {
            Frame::from_description(
                &spec.description,
                spec.syntax.clone(),
                roles.clone(),
                Some(self.id.as_str()),
            )
        }));

        self.check_quality(&frames, diagnostics);
        debug!(
            class_id = %self.id,
            members = self.members.len(),
            frames = frames.len(),
            "flattened class"
        );

        out.push(ClassFrames {
            class_id: self.id.clone(),
            members: self.members.clone(),
            frames: frames.clone(),
        });

        let passed = Inherited { roles, frames };
        for child in &self.children {
            child.flatten_into(&passed, out, diagnostics);
        }
    }

    fn check_quality(&self, frames: &[Frame], diagnostics: &mut Diagnostics) {
        let warning = match (self.members.is_empty(), frames.is_empty()) {
            (true, true) => Some((WarningKind::EmptyClass, "class has no members and no frames")),
            (true, false) => Some((WarningKind::MemberlessClass, "class has frames but no members")),
            (false, true) => Some((WarningKind::FramelessClass, "class has members but no frames")),
            (false, false) => None,
        };
        if let Some((kind, message)) = warning {
            diagnostics.push(DataQualityWarning::new(kind, message).with_class(&self.id));
        }
    }
}
