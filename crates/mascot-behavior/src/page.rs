//! What the mascot can see of the page it lives on.

use mascot_core::Rect;

/// Kinds of interactive element the Observe behavior looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ElementKind {
    Link,
    Button,
    /// Any element carrying `role="button"`.
    RoleButton,
    TextInput,
    EmailInput,
    SubmitInput,
    /// Inputs of any other type (checkbox, range, ...).
    OtherInput,
    TextArea,
    Select,
}

impl ElementKind {
    /// Dialogue context for a comment on this kind, or `None` if the mascot
    /// has nothing to say about it.
    pub fn comment_context(self) -> Option<&'static str> {
        match self {
            ElementKind::Link => Some("link"),
            ElementKind::Button | ElementKind::RoleButton => Some("button"),
            ElementKind::TextInput
            | ElementKind::EmailInput
            | ElementKind::SubmitInput
            | ElementKind::TextArea => Some("input"),
            ElementKind::OtherInput | ElementKind::Select => None,
        }
    }
}

/// One interactive element and its client rect.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageElement {
    pub kind:   ElementKind,
    pub bounds: Rect,
}

impl PageElement {
    pub fn new(kind: ElementKind, bounds: Rect) -> Self {
        Self { kind, bounds }
    }
}

/// Host seam: enumerate the page's interactive elements.
pub trait PageProbe {
    fn interactive_elements(&self) -> Vec<PageElement>;
}

/// A page with nothing on it.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyPage;

impl PageProbe for EmptyPage {
    fn interactive_elements(&self) -> Vec<PageElement> {
        Vec::new()
    }
}

/// A fixed list of elements, for headless runs and tests.
#[derive(Debug, Default, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StaticPage {
    elements: Vec<PageElement>,
}

impl StaticPage {
    pub fn new(elements: Vec<PageElement>) -> Self {
        Self { elements }
    }

    pub fn push(&mut self, element: PageElement) {
        self.elements.push(element);
    }
}

impl PageProbe for StaticPage {
    fn interactive_elements(&self) -> Vec<PageElement> {
        self.elements.clone()
    }
}
