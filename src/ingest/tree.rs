//! Minimal element tree built from `quick-xml` events.
//!
//! Only what ingestion needs survives: tag names, attributes in declaration
//! order, raw text, and child elements in document order. Comments,
//! processing instructions and the XML declaration are dropped.

use crate::error::IngestError;
use crate::model::Attribute;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    /// Own text followed by all descendant text, trimmed once at the ends.
    /// `None` when nothing but whitespace remains.
    pub fn inner_text(&self) -> Option<String> {
        let mut out = String::new();
        self.collect_text(&mut out);
        let trimmed = out.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    fn collect_text(&self, out: &mut String) {
        out.push_str(&self.text);
        for child in &self.children {
            child.collect_text(out);
        }
    }
}

/// Parse raw bytes into the root element. `Ok(None)` means the input held
/// no element at all.
pub fn parse_document(bytes: &[u8]) -> Result<Option<Element>, IngestError> {
    // Untrimmed so whitespace between mixed-content fragments survives.
    let mut reader = Reader::from_reader(bytes);
    reader.trim_text(false);

    let mut buf = Vec::new();
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => stack.push(open_element(&reader, &e)?),
            Event::Empty(e) => {
                let el = open_element(&reader, &e)?;
                attach(el, &mut stack, &mut root)?;
            }
            Event::End(_) => {
                let el = stack
                    .pop()
                    .ok_or_else(|| IngestError::Malformed("unbalanced end tag".to_string()))?;
                attach(el, &mut stack, &mut root)?;
            }
            Event::Text(t) => {
                let text = t.unescape()?;
                append_text(&mut stack, &text)?;
            }
            Event::CData(c) => {
                let text = reader.decoder().decode(&c)?;
                append_text(&mut stack, &text)?;
            }
            Event::Eof => break,
            _ => (),
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(IngestError::Malformed(format!(
            "element <{}> is never closed",
            open.name
        )));
    }

    Ok(root)
}

fn open_element<R>(reader: &Reader<R>, start: &BytesStart<'_>) -> Result<Element, IngestError> {
    let decoder = reader.decoder();
    let name = decoder.decode(start.name().as_ref())?.into_owned();

    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr?;
        let key = decoder.decode(attr.key.as_ref())?.into_owned();
        let value = attr.unescape_value()?.into_owned();
        attributes.push(Attribute::new(key, value));
    }

    Ok(Element {
        name,
        attributes,
        ..Element::default()
    })
}

fn attach(
    el: Element,
    stack: &mut [Element],
    root: &mut Option<Element>,
) -> Result<(), IngestError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(el),
        None if root.is_some() => {
            return Err(IngestError::Malformed(format!(
                "second root element <{}>",
                el.name
            )));
        }
        None => *root = Some(el),
    }
    Ok(())
}

fn append_text(stack: &mut [Element], text: &str) -> Result<(), IngestError> {
    match stack.last_mut() {
        Some(top) => {
            top.text.push_str(text);
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(IngestError::Malformed(
            "text outside of the root element".to_string(),
        )),
    }
}
