//! A minimal owned element tree over `quick-xml` events.
//!
//! Class files are small and are walked several times (members, roles,
//! frames, subclasses), so they are read into a tree once instead of being
//! processed as a stream.

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use vnframes_foundation::{Error, Result};

/// An XML element with its attributes, text, and child elements.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    /// Parses a document and returns its root element.
    ///
    /// # Errors
    ///
    /// Returns an XML error if the document is not well formed or has no root.
    pub fn parse_str(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            let event = reader.read_event().map_err(|e| {
                Error::xml(format!("{e} at byte {}", reader.error_position()))
            })?;
            match event {
                Event::Start(start) => stack.push(Self::open(&start)?),
                Event::Empty(start) => {
                    let element = Self::open(&start)?;
                    Self::close(element, &mut stack, &mut root)?;
                }
                Event::End(_) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| Error::xml("unbalanced closing tag"))?;
                    Self::close(element, &mut stack, &mut root)?;
                }
                Event::Text(text) => {
                    if let Some(current) = stack.last_mut() {
                        let unescaped = text.unescape().map_err(Error::xml)?;
                        current.text.push_str(&unescaped);
                    }
                }
                Event::CData(data) => {
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(&String::from_utf8_lossy(&data));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !stack.is_empty() {
            return Err(Error::xml("unexpected end of document"));
        }
        root.ok_or_else(|| Error::xml("document has no root element"))
    }

    fn open(start: &BytesStart<'_>) -> Result<Self> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(Error::xml)?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value().map_err(Error::xml)?.into_owned();
            attributes.push((key, value));
        }
        Ok(Self {
            name,
            attributes,
            ..Self::default()
        })
    }

    fn close(element: Self, stack: &mut [Self], root: &mut Option<Self>) -> Result<()> {
        match stack.last_mut() {
            Some(parent) => parent.children.push(element),
            None if root.is_none() => *root = Some(element),
            None => return Err(Error::xml("more than one root element")),
        }
        Ok(())
    }

    /// Returns the element name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value of an attribute.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the value of a required attribute.
    ///
    /// # Errors
    ///
    /// Returns a structural error naming this element if it is missing.
    pub fn require_attr(&self, name: &str) -> Result<&str> {
        self.attr(name).ok_or_else(|| {
            Error::structural(&self.name, format!("missing '{name}' attribute"))
        })
    }

    /// Returns the text directly inside the element, trimmed.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the child elements.
    #[must_use]
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Returns the first direct child with the given name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Returns the first direct child with the given name.
    ///
    /// # Errors
    ///
    /// Returns a structural error naming this element if there is none.
    pub fn require_child(&self, name: &str) -> Result<&Element> {
        self.child(name).ok_or_else(|| {
            Error::structural(&self.name, format!("missing <{name}> child"))
        })
    }

    /// Iterates over the direct children with the given name.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Returns the first descendant with the given name, in document order.
    #[must_use]
    pub fn descendant(&self, name: &str) -> Option<&Element> {
        for child in &self.children {
            if child.name == name {
                return Some(child);
            }
            if let Some(found) = child.descendant(name) {
                return Some(found);
            }
        }
        None
    }

    /// Returns every descendant with the given name, in document order.
    #[must_use]
    pub fn descendants(&self, name: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_descendants(name, &mut found);
        found
    }

    fn collect_descendants<'a>(&'a self, name: &str, found: &mut Vec<&'a Element>) {
        for child in &self.children {
            if child.name == name {
                found.push(child);
            }
            child.collect_descendants(name, found);
        }
    }
}
