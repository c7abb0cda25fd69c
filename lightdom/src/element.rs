use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// The kind of node an element renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Div,
    List,
    Item,
    Input,
    Select,
    Option,
    Label,
}

impl Tag {
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::List => "ul",
            Tag::Item => "li",
            Tag::Input => "input",
            Tag::Select => "select",
            Tag::Option => "option",
            Tag::Label => "label",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<Element>),
}

/// A node in the headless document tree.
///
/// Attributes and data entries live in ordered maps so serialized output
/// is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: String,
    pub tag: Tag,
    pub classes: Vec<String>,
    pub attrs: BTreeMap<String, String>,
    /// Custom data storage (dispatch roles, identifying keys, etc.).
    pub data: BTreeMap<String, String>,
    pub clickable: bool,
    pub content: Content,
}

impl Element {
    fn with_tag(tag: Tag, prefix: &str) -> Self {
        Self {
            id: generate_id(prefix),
            tag,
            classes: Vec::new(),
            attrs: BTreeMap::new(),
            data: BTreeMap::new(),
            clickable: false,
            content: Content::None,
        }
    }

    pub fn div() -> Self {
        Self::with_tag(Tag::Div, "div")
    }

    pub fn list() -> Self {
        Self::with_tag(Tag::List, "ul")
    }

    pub fn item() -> Self {
        Self::with_tag(Tag::Item, "li")
    }

    pub fn input() -> Self {
        Self::with_tag(Tag::Input, "input")
    }

    pub fn select() -> Self {
        Self::with_tag(Tag::Select, "select")
    }

    pub fn option_() -> Self {
        Self::with_tag(Tag::Option, "option")
    }

    pub fn label() -> Self {
        Self::with_tag(Tag::Label, "label")
    }

    /// Create a list item holding plain text.
    pub fn text(content: impl Into<String>) -> Self {
        let mut el = Self::with_tag(Tag::Item, "text");
        el.content = Content::Text(content.into());
        el
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Classes
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn classes(mut self, classes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.classes.extend(classes.into_iter().map(Into::into));
        self
    }

    // Attributes
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn value(self, value: impl Into<String>) -> Self {
        self.attr("value", value)
    }

    pub fn checked(mut self, checked: bool) -> Self {
        if checked {
            self.attrs.insert("checked".into(), "checked".into());
        } else {
            self.attrs.remove("checked");
        }
        self
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    // Interaction
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    // Content
    pub fn inner_text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    // Accessors

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    pub fn get_data(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    pub fn is_checked(&self) -> bool {
        self.attrs.contains_key("checked")
    }

    /// Child elements, or an empty slice for text/empty content.
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children.as_slice(),
            _ => &[],
        }
    }

    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    // In-place mutation (used for targeted updates of an attached tree)

    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    pub fn set_checked(&mut self, checked: bool) {
        if checked {
            self.attrs.insert("checked".into(), "checked".into());
        } else {
            self.attrs.remove("checked");
        }
    }

    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Remove every class starting with the given prefix.
    pub fn remove_class_prefix(&mut self, prefix: &str) {
        self.classes.retain(|c| !c.starts_with(prefix));
    }

    /// Replace all children, dropping any previous content.
    pub fn set_children(&mut self, children: Vec<Element>) {
        self.content = Content::Children(children);
    }
}

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}
