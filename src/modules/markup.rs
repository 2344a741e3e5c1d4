//! The small set of document queries result extraction relies on.
//!
//! Extraction only ever asks for "the first / every `tag` whose attributes
//! match", so it is written against [`Markup`] and [`MarkupNode`] instead of a
//! parser. [`HtmlDocument`] backs both with `scraper`.

use log::warn;
use scraper::{ElementRef, Html, Selector};

/// Attribute filters as `(name, value)` pairs. A `class` filter matches one
/// class token, every other attribute must match exactly.
pub type Attrs<'a> = [(&'a str, &'a str)];

pub trait MarkupNode: Sized {
    /// all text below this element, concatenated
    fn text(&self) -> String;
    fn find_first(&self, tag: &str, attrs: &Attrs) -> Option<Self>;
    fn find_all(&self, tag: &str, attrs: &Attrs) -> Vec<Self>;
}

pub trait Markup {
    type Node<'a>: MarkupNode
    where
        Self: 'a;

    fn find_first(&self, tag: &str, attrs: &Attrs) -> Option<Self::Node<'_>>;
    fn find_all(&self, tag: &str, attrs: &Attrs) -> Vec<Self::Node<'_>>;
}

pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(body: &str) -> HtmlDocument {
        HtmlDocument {
            html: Html::parse_document(body),
        }
    }
}

impl Markup for HtmlDocument {
    type Node<'a> = ElementRef<'a>;

    fn find_first(&self, tag: &str, attrs: &Attrs) -> Option<ElementRef<'_>> {
        let selector = build_selector(tag, attrs)?;
        self.html.select(&selector).next()
    }

    fn find_all(&self, tag: &str, attrs: &Attrs) -> Vec<ElementRef<'_>> {
        match build_selector(tag, attrs) {
            Some(selector) => self.html.select(&selector).collect(),
            None => Vec::new(),
        }
    }
}

impl<'a> MarkupNode for ElementRef<'a> {
    fn text(&self) -> String {
        ElementRef::text(self).collect()
    }

    fn find_first(&self, tag: &str, attrs: &Attrs) -> Option<ElementRef<'a>> {
        let selector = build_selector(tag, attrs)?;
        self.select(&selector).next()
    }

    fn find_all(&self, tag: &str, attrs: &Attrs) -> Vec<ElementRef<'a>> {
        match build_selector(tag, attrs) {
            Some(selector) => self.select(&selector).collect(),
            None => Vec::new(),
        }
    }
}

/// # build selector
/// turn a tag and attribute filters into a css selector, e.g.
/// `td[data-title="Laps Led"]`. an unusable tag or attribute name is logged
/// and yields `None`, which callers treat as "nothing found"
fn build_selector(tag: &str, attrs: &Attrs) -> Option<Selector> {
    let mut css = tag.to_string();
    for (name, value) in attrs {
        let operator = if *name == "class" { "~=" } else { "=" };
        let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
        css.push_str(&format!("[{}{}\"{}\"]", name, operator, escaped));
    }

    let selector = match Selector::parse(&css) {
        Ok(selector) => Some(selector),
        Err(error) => {
            warn!(target: "markup", "Invalid selector '{}': {:?}", css, error);
            None
        }
    };
    selector
}
