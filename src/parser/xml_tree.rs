//! Minimal element tree over `quick-xml` events.
//!
//! Only elements and their attributes are kept. Text, comments and
//! processing instructions are dropped, and whitespace-only text never
//! reaches the tree because the reader trims it.

use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::ParseError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of attribute `name`, unescaped.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Like [`attribute`](Self::attribute) but a missing value is a parse error.
    pub fn required_attribute(&self, name: &str, path: &Path) -> Result<&str, ParseError> {
        self.attribute(name).ok_or_else(|| ParseError::MissingAttribute {
            path: path.to_path_buf(),
            element: self.name.clone(),
            attribute: name.to_string(),
        })
    }

    pub fn children(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter()
    }

    /// All elements below this one in document order, excluding itself.
    pub fn descendants(&self) -> Vec<&XmlElement> {
        let mut out = Vec::new();
        let mut stack: Vec<&XmlElement> = self.children.iter().rev().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children.iter().rev());
        }
        out
    }

    /// Descendants named `tag`, in document order.
    pub fn descendants_named<'a>(&'a self, tag: &str) -> Vec<&'a XmlElement> {
        self.descendants()
            .into_iter()
            .filter(|e| e.name == tag)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDocument {
    root: XmlElement,
}

impl XmlDocument {
    /// Builds the element tree for `bytes`. `path` is only used in errors.
    pub fn parse(bytes: &[u8], path: &Path) -> Result<Self, ParseError> {
        let malformed = |source: quick_xml::Error| ParseError::Malformed {
            path: path.to_path_buf(),
            source,
        };
        let unbalanced = |detail: &str| ParseError::Unbalanced {
            path: path.to_path_buf(),
            detail: detail.to_string(),
        };

        let mut reader = Reader::from_reader(bytes);
        reader.trim_text(true);

        let mut buf = Vec::new();
        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            match reader.read_event_into(&mut buf).map_err(malformed)? {
                Event::Start(start) => {
                    stack.push(element_from_start(&start).map_err(malformed)?);
                }
                Event::Empty(start) => {
                    let element = element_from_start(&start).map_err(malformed)?;
                    attach(&mut stack, &mut root, element).map_err(unbalanced)?;
                }
                Event::End(_) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| unbalanced("closing tag without an open element"))?;
                    attach(&mut stack, &mut root, element).map_err(unbalanced)?;
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if let Some(open) = stack.last() {
            return Err(unbalanced(&format!("<{}> is never closed", open.name)));
        }

        root.map(|root| Self { root })
            .ok_or_else(|| unbalanced("document has no root element"))
    }

    pub fn root(&self) -> &XmlElement {
        &self.root
    }

    /// Elements named `child` whose parent is named `parent`, anywhere in
    /// the document, in document order.
    pub fn select_children_of(&self, parent: &str, child: &str) -> Vec<&XmlElement> {
        std::iter::once(&self.root)
            .chain(self.root.descendants())
            .filter(|e| e.name == parent)
            .flat_map(|e| e.children().filter(move |c| c.name == child))
            .collect()
    }
}

fn element_from_start(start: &BytesStart<'_>) -> Result<XmlElement, quick_xml::Error> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        attributes.push((key, value));
    }
    Ok(XmlElement {
        name,
        attributes,
        children: Vec::new(),
    })
}

/// Hangs a completed element under the open parent, or makes it the root.
fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> Result<(), &'static str> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(element);
            Ok(())
        }
        None if root.is_none() => {
            *root = Some(element);
            Ok(())
        }
        None => Err("document has more than one root element"),
    }
}
