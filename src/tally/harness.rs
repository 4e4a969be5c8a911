use core::fmt;
use std::cell::RefCell;
use std::rc::Rc;

use crate::app::Component;
use crate::dom::{self, Document};
use crate::pattern::{self, PatternError};

type Result<T> = std::result::Result<T, QueryError>;

/// Element lookup failure. Surfaced by the harness, never by the component;
/// a click itself cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    Pattern(PatternError),
    NotFound { pattern: String },
    Ambiguous { pattern: String, matches: usize },
}

impl From<PatternError> for QueryError {
    fn from(error: PatternError) -> Self {
        QueryError::Pattern(error)
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::Pattern(_) => write!(f, "malformed text pattern"),
            QueryError::NotFound { pattern } => {
                write!(f, "no element with text matching {:?}", pattern)
            }
            QueryError::Ambiguous { pattern, matches } => {
                write!(f, "{} elements with text matching {:?}", matches, pattern)
            }
        }
    }
}

struct MountInner<C: Component> {
    state: C::State,
    document: Document<C::Event>,
}

/// One mounted component instance. Each mount owns its state and tree;
/// nothing crosses mount boundaries, so scenarios are isolated.
pub struct Mount<C: Component> {
    inner: Rc<RefCell<MountInner<C>>>,
}

/// Mounts a fresh instance of `C`: initial state, one synchronous render.
pub fn render<C: Component>() -> Mount<C> {
    let state = C::init();
    let document = C::view(&state);
    Mount {
        inner: Rc::new(RefCell::new(MountInner { state, document })),
    }
}

impl<C: Component> Mount<C> {
    /// Finds the single element whose own text matches `text` (a literal for
    /// exact matching, or a `/…/` matcher, see [`crate::pattern`]). Zero
    /// matches and multiple matches are distinct errors. Only an element's
    /// immediate text children count here, so a wrapper whose text all comes
    /// from nested elements never shadows the element that carries the text.
    pub fn get_by_text(&self, text: &str) -> Result<ElementHandle<C>> {
        let pattern = pattern::parse(text)?;
        let inner = self.inner.borrow();
        let mut matches = Vec::new();
        for path in inner.document.element_paths() {
            let Some(element) = inner.document.resolve(&path) else {
                continue;
            };
            let rendered = dom::normalize(&inner.document.direct_text(element));
            if pattern.is_match(&rendered) {
                matches.push(path);
            }
        }
        match matches.len() {
            1 => Ok(ElementHandle {
                inner: Rc::clone(&self.inner),
                path: matches.remove(0),
            }),
            0 => Err(QueryError::NotFound {
                pattern: text.to_string(),
            }),
            n => Err(QueryError::Ambiguous {
                pattern: text.to_string(),
                matches: n,
            }),
        }
    }
}

impl<C: Component> fmt::Display for Mount<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner.borrow().document)
    }
}

/// Path-addressed reference into a mount's current tree. Like a DOM node
/// held across a React update it observes re-renders in place: the path is
/// re-resolved against the current tree on every read.
pub struct ElementHandle<C: Component> {
    inner: Rc<RefCell<MountInner<C>>>,
    path: Vec<usize>,
}

impl<C: Component> ElementHandle<C> {
    /// Whether the element is still present in the current render.
    pub fn in_document(&self) -> bool {
        self.inner.borrow().document.resolve(&self.path).is_some()
    }

    pub fn tag(&self) -> String {
        let inner = self.inner.borrow();
        match inner.document.resolve(&self.path) {
            Some(element) => inner.document.tag(element).to_string(),
            None => String::new(),
        }
    }

    /// Normalized text of the element and all its descendants.
    pub fn text_content(&self) -> String {
        let inner = self.inner.borrow();
        match inner.document.resolve(&self.path) {
            Some(element) => dom::normalize(&inner.document.text_content(element)),
            None => String::new(),
        }
    }

    /// Whether the element's text content contains `expected`, both sides
    /// whitespace-normalized.
    pub fn has_text_content(&self, expected: &str) -> bool {
        self.text_content().contains(&dom::normalize(expected))
    }
}

impl<C: Component> fmt::Debug for ElementHandle<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementHandle")
            .field("path", &self.path)
            .finish()
    }
}

pub mod fire_event {
    use super::{Component, ElementHandle};

    /// Synchronously simulates a user click on the element. The nearest
    /// click handler on the element's ancestor chain receives the event, the
    /// component's transition runs, and the tree is re-rendered before this
    /// returns. Clicks are always accepted: with no handler in scope the
    /// click is a no-op.
    pub fn click<C: Component>(element: &ElementHandle<C>) {
        let mut inner = element.inner.borrow_mut();
        let Some(message) = inner.document.click_target(&element.path) else {
            return;
        };
        let state = C::update(inner.state.clone(), message);
        inner.document = C::view(&state);
        inner.state = state;
    }
}
