use std::sync::atomic::{AtomicU64, Ordering};

use super::{Content, Tag};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: Tag,

    // Attributes in insertion order (serialized as written)
    pub attributes: Vec<(String, String)>,

    // Content
    pub content: Content,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            id: generate_id(tag.name()),
            tag,
            attributes: Vec::new(),
            content: Content::None,
        }
    }

    pub fn table() -> Self {
        Self::new(Tag::Table)
    }

    pub fn thead() -> Self {
        Self::new(Tag::THead)
    }

    pub fn tbody() -> Self {
        Self::new(Tag::TBody)
    }

    pub fn tfoot() -> Self {
        Self::new(Tag::TFoot)
    }

    pub fn tr() -> Self {
        Self::new(Tag::Tr)
    }

    /// Header cell with text content.
    pub fn th(text: impl Into<String>) -> Self {
        Self::new(Tag::Th).text(text)
    }

    /// Data cell with text content.
    pub fn td(text: impl Into<String>) -> Self {
        Self::new(Tag::Td).text(text)
    }

    pub fn span(text: impl Into<String>) -> Self {
        Self::new(Tag::Span).text(text)
    }

    pub fn div() -> Self {
        Self::new(Tag::Div)
    }

    /// Build a `tr` of `td` cells from plain strings.
    pub fn row_of<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::tr().children(cells.into_iter().map(Self::td))
    }

    /// Build a `tr` of `th` cells from plain strings.
    pub fn header_row_of<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::tr().children(cells.into_iter().map(Self::th))
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Attributes
    /// Set an attribute, replacing an earlier value with the same name.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == name) {
            Some((_, v)) => *v = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Hidden elements contribute nothing to visible text.
    pub fn hidden(mut self, hidden: bool) -> Self {
        if hidden {
            self.set_attr("hidden", "");
        } else {
            self.attributes.retain(|(k, _)| k != "hidden");
        }
        self
    }

    pub fn is_hidden(&self) -> bool {
        self.get_attr("hidden").is_some()
    }

    // Content
    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.content = Content::Text(content.into());
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => {
                // Replace text or empty content with children
                self.content = Content::Children(vec![child]);
            }
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => {
                self.content = Content::Children(new_children.into_iter().collect());
            }
        }
        self
    }

    /// Child elements in order; empty for text or empty content.
    pub fn child_nodes(&self) -> &[Element] {
        self.content.children()
    }

    /// Mutable access to the child list, if this element holds children.
    pub fn child_nodes_mut(&mut self) -> Option<&mut Vec<Element>> {
        match &mut self.content {
            Content::Children(children) => Some(children),
            _ => None,
        }
    }

    pub fn is(&self, tag: &Tag) -> bool {
        self.tag == *tag
    }
}
