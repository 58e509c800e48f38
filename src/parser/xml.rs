use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Result, TrialError};

/// A parsed XML element with its direct text and children, in document order.
#[derive(Debug, Clone, Default)]
pub struct Element {
    pub name: String,
    text: String,
    children: Vec<Element>,
}

impl Element {
    fn from_start(e: &BytesStart) -> Self {
        Element {
            name: String::from_utf8_lossy(e.local_name().as_ref()).into_owned(),
            ..Default::default()
        }
    }

    /// Direct text content with whitespace runs collapsed.
    pub fn text(&self) -> String {
        self.text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// All elements reached by a slash-separated path of child names.
    pub fn find_all(&self, path: &str) -> Vec<&Element> {
        let mut current = vec![self];
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            current = current
                .into_iter()
                .flat_map(|e| e.children.iter().filter(move |c| c.name == segment))
                .collect();
        }
        current
    }

    /// First element reached by `path`, if any.
    pub fn find(&self, path: &str) -> Option<&Element> {
        self.find_all(path).into_iter().next()
    }

    /// Text of the first element reached by `path`, if it exists and is non-empty.
    pub fn find_text(&self, path: &str) -> Option<String> {
        self.find(path).map(Element::text).filter(|t| !t.is_empty())
    }

    /// Non-empty texts of every element reached by `path`.
    pub fn find_all_text(&self, path: &str) -> Vec<String> {
        self.find_all(path)
            .into_iter()
            .map(Element::text)
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Every element named `name` anywhere below this one, depth-first.
    pub fn descendants(&self, name: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect_descendants(name, &mut out);
        out
    }

    fn collect_descendants<'a>(&'a self, name: &str, out: &mut Vec<&'a Element>) {
        for child in &self.children {
            if child.name == name {
                out.push(child);
            }
            child.collect_descendants(name, out);
        }
    }
}

/// Parse an XML document into its root element.
///
/// Unbalanced tags, a missing root, or any reader error make the document
/// malformed.
pub fn parse(xml: &str) -> Result<Element> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => stack.push(Element::from_start(&e)),
            Ok(Event::Empty(e)) => attach(&mut stack, &mut root, Element::from_start(&e))?,
            Ok(Event::Text(e)) => {
                if let Some(top) = stack.last_mut() {
                    let text = e
                        .unescape()
                        .map_err(|err| TrialError::Malformed(err.to_string()))?;
                    top.text.push_str(&text);
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Ok(Event::End(_)) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| TrialError::Malformed("unexpected closing tag".into()))?;
                attach(&mut stack, &mut root, element)?;
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(e.into()),
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(TrialError::Malformed(format!("unclosed element <{}>", open.name)));
    }
    root.ok_or_else(|| TrialError::Malformed("document has no root element".into()))
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => {
            return Err(TrialError::Malformed(format!(
                "second root element <{}>",
                element.name
            )))
        }
    }
    Ok(())
}

// ── Tests ──
