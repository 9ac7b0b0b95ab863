// SPDX-License-Identifier: MPL-2.0
//! The gallery document: declarative markup that configures the widget and
//! declares its links.
//!
//! A document is a small XML-ish page whose root `<gallery>` element may
//! carry a presence-style `loop` attribute and a `selector` attribute.
//! Descendant elements matched by the selector (all anchors by default)
//! become gallery links, in document order. Link extraction walks the
//! parsed elements on every call instead of caching a list, so the widget
//! always sees the document's current state.

use crate::content::ContentKind;
use crate::error::{Error, Result};
use crate::selector::Selector;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::path::Path;

/// One gallery link, resolved from a matched element.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    /// Target of the link.
    pub href: String,
    /// Declared content kind, `image` when undeclared.
    pub kind: ContentKind,
    /// Text content of the element, for the tile caption.
    pub label: Option<String>,
}

#[derive(Debug, Clone)]
struct ElementRecord {
    tag: String,
    classes: String,
    href: Option<String>,
    kind: ContentKind,
    label: String,
}

/// A parsed gallery document.
#[derive(Debug, Clone)]
pub struct Document {
    loop_enabled: bool,
    selector: Selector,
    elements: Vec<ElementRecord>,
}

const GALLERY_TAG: &str = "gallery";

impl Document {
    /// Parses a gallery document from markup.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Markup`] for malformed markup and
    /// [`Error::Selector`] when the root declares an unsupported selector.
    pub fn parse(markup: &str) -> Result<Self> {
        let mut reader = Reader::from_str(markup);
        reader.config_mut().trim_text(true);

        let mut loop_enabled = false;
        let mut selector = Selector::default();
        let mut root_seen = false;

        let mut elements: Vec<ElementRecord> = Vec::new();
        // Indices into `elements` for the open ancestors. Text contributes
        // to every open element, matching text-content semantics for links
        // with nested markup.
        let mut open: Vec<Option<usize>> = Vec::new();

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) => {
                    if !root_seen && decode_name(e).eq_ignore_ascii_case(GALLERY_TAG) {
                        root_seen = true;
                        loop_enabled = attribute(e, "loop")?.is_some();
                        if let Some(raw) = attribute(e, "selector")? {
                            selector = Selector::parse(&raw)?;
                        }
                        open.push(None);
                        continue;
                    }
                    elements.push(record_element(e)?);
                    open.push(Some(elements.len() - 1));
                }
                Ok(Event::Empty(ref e)) => {
                    if !root_seen && decode_name(e).eq_ignore_ascii_case(GALLERY_TAG) {
                        root_seen = true;
                        loop_enabled = attribute(e, "loop")?.is_some();
                        if let Some(raw) = attribute(e, "selector")? {
                            selector = Selector::parse(&raw)?;
                        }
                        continue;
                    }
                    // Empty elements never receive text.
                    elements.push(record_element(e)?);
                }
                Ok(Event::Text(ref e)) => {
                    let text = e
                        .unescape()
                        .map_err(|err| Error::Markup(err.to_string()))?;
                    let text = text.trim();
                    if text.is_empty() {
                        continue;
                    }
                    for idx in open.iter().flatten() {
                        let label = &mut elements[*idx].label;
                        if !label.is_empty() {
                            label.push(' ');
                        }
                        label.push_str(text);
                    }
                }
                Ok(Event::End(_)) => {
                    open.pop();
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(err) => return Err(Error::Markup(err.to_string())),
            }
        }

        Ok(Self {
            loop_enabled,
            selector,
            elements,
        })
    }

    /// Reads and parses the document at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let markup = std::fs::read_to_string(path)?;
        Self::parse(&markup)
    }

    /// Whether navigation wraps past the ends.
    pub fn loop_enabled(&self) -> bool {
        self.loop_enabled
    }

    /// The active link selector.
    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Extracts the links matched by the document's own selector, in
    /// document order. Elements without an `href` are not links.
    pub fn links(&self) -> Vec<Link> {
        self.links_matching(&self.selector)
    }

    /// Extracts the links matched by an arbitrary selector.
    pub fn links_matching(&self, selector: &Selector) -> Vec<Link> {
        self.elements
            .iter()
            .filter(|el| selector.matches(&el.tag, &el.classes))
            .filter_map(|el| {
                let href = el.href.clone()?;
                Some(Link {
                    href,
                    kind: el.kind,
                    label: (!el.label.is_empty()).then(|| el.label.clone()),
                })
            })
            .collect()
    }
}

fn record_element(e: &BytesStart<'_>) -> Result<ElementRecord> {
    Ok(ElementRecord {
        tag: decode_name(e),
        classes: attribute(e, "class")?.unwrap_or_default(),
        href: attribute(e, "href")?,
        kind: ContentKind::from_attr(attribute(e, "data-type")?.as_deref()),
        label: String::new(),
    })
}

fn decode_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.name().as_ref()).to_ascii_lowercase()
}

fn attribute(e: &BytesStart<'_>, name: &str) -> Result<Option<String>> {
    match e.try_get_attribute(name) {
        Ok(Some(attr)) => {
            let value = attr
                .unescape_value()
                .map_err(|err| Error::Markup(err.to_string()))?;
            Ok(Some(value.into_owned()))
        }
        Ok(None) => Ok(None),
        Err(err) => Err(Error::Markup(err.to_string())),
    }
}
