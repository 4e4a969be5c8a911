use core::fmt;
use id_arena::{Arena, Id};

type NodeId<M> = Id<Node<M>>;

/// Handle to a node that is known to be an element. Only `Document` hands
/// these out, so child insertion through one cannot fail.
#[derive(Debug, PartialEq, Eq)]
pub struct ElementId<M>(NodeId<M>);

impl<M> Clone for ElementId<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for ElementId<M> {}

#[derive(Debug, Clone)]
enum Node<M> {
    Element(Element<M>),
    Text(String),
}

#[derive(Debug, Clone)]
struct Element<M> {
    tag: String,
    children: Vec<NodeId<M>>,
    on_click: Option<M>,
}

/// One rendered tree. A view function builds a fresh `Document` from state;
/// re-rendering replaces the whole tree rather than mutating it, so the tree
/// is always a projection of exactly one state value.
#[derive(Debug, Clone)]
pub struct Document<M> {
    nodes: Arena<Node<M>>,
    root: NodeId<M>,
}

/// Collapses runs of whitespace and trims, the normalization applied to text
/// before any comparison.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<&str>>().join(" ")
}

impl<M> Document<M> {
    pub fn new(root_tag: &str) -> Self {
        let mut nodes = Arena::new();
        let root = nodes.alloc(Node::Element(Element {
            tag: root_tag.to_string(),
            children: Vec::new(),
            on_click: None,
        }));
        Document { nodes, root }
    }

    pub fn root(&self) -> ElementId<M> {
        ElementId(self.root)
    }

    pub fn element(&mut self, parent: ElementId<M>, tag: &str) -> ElementId<M> {
        let id = self.nodes.alloc(Node::Element(Element {
            tag: tag.to_string(),
            children: Vec::new(),
            on_click: None,
        }));
        self.push_child(parent, id);
        ElementId(id)
    }

    pub fn text(&mut self, parent: ElementId<M>, text: &str) {
        let id = self.nodes.alloc(Node::Text(text.to_string()));
        self.push_child(parent, id);
    }

    pub fn set_on_click(&mut self, element: ElementId<M>, message: M) {
        if let Node::Element(e) = &mut self.nodes[element.0] {
            e.on_click = Some(message);
        }
    }

    fn push_child(&mut self, parent: ElementId<M>, child: NodeId<M>) {
        if let Node::Element(e) = &mut self.nodes[parent.0] {
            e.children.push(child);
        }
    }

    pub fn tag(&self, element: ElementId<M>) -> &str {
        match &self.nodes[element.0] {
            Node::Element(e) => &e.tag,
            Node::Text(_) => "",
        }
    }

    /// Child-index paths of every element, in document order. The root is the
    /// empty path.
    pub fn element_paths(&self) -> Vec<Vec<usize>> {
        let mut paths = Vec::new();
        let mut pending = vec![(Vec::new(), self.root)];
        while let Some((path, id)) = pending.pop() {
            if let Node::Element(e) = &self.nodes[id] {
                for (i, child) in e.children.iter().enumerate().rev() {
                    let mut child_path = path.clone();
                    child_path.push(i);
                    pending.push((child_path, *child));
                }
                paths.push(path);
            }
        }
        paths
    }

    /// Follows child indices from the root; `None` if the path runs off the
    /// tree or lands on a text node.
    pub fn resolve(&self, path: &[usize]) -> Option<ElementId<M>> {
        let mut id = self.root;
        for index in path {
            let Node::Element(e) = &self.nodes[id] else {
                return None;
            };
            id = *e.children.get(*index)?;
        }
        match &self.nodes[id] {
            Node::Element(_) => Some(ElementId(id)),
            Node::Text(_) => None,
        }
    }

    /// Concatenation of the element's immediate text children only. This is
    /// what element lookup matches against: an element whose text all comes
    /// from nested elements is not itself matchable.
    pub fn direct_text(&self, element: ElementId<M>) -> String {
        let mut out = String::new();
        if let Node::Element(e) = &self.nodes[element.0] {
            for child in &e.children {
                if let Node::Text(text) = &self.nodes[*child] {
                    out.push_str(text);
                }
            }
        }
        out
    }

    /// Concatenation of all descendant text, the `textContent` of the
    /// element.
    pub fn text_content(&self, element: ElementId<M>) -> String {
        let mut out = String::new();
        self.collect_text(element.0, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId<M>, out: &mut String) {
        match &self.nodes[id] {
            Node::Text(text) => out.push_str(text),
            Node::Element(e) => {
                for child in &e.children {
                    self.collect_text(*child, out);
                }
            }
        }
    }

    fn fmt_node(&self, id: NodeId<M>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.nodes[id] {
            Node::Text(text) => write!(f, "{}", text),
            Node::Element(e) => {
                write!(f, "<{}>", e.tag)?;
                for child in &e.children {
                    self.fmt_node(*child, f)?;
                }
                write!(f, "</{}>", e.tag)
            }
        }
    }
}

impl<M: Clone> Document<M> {
    /// Message of the click handler closest to the element at `path`,
    /// bubbling from the element up through its ancestors.
    pub fn click_target(&self, path: &[usize]) -> Option<M> {
        for len in (0..=path.len()).rev() {
            let Some(element) = self.resolve(&path[..len]) else {
                continue;
            };
            if let Node::Element(e) = &self.nodes[element.0] {
                if let Some(message) = &e.on_click {
                    return Some(message.clone());
                }
            }
        }
        None
    }
}

impl<M> fmt::Display for Document<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_node(self.root, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document<u8> {
        let mut doc = Document::new("div");
        let heading = doc.element(doc.root(), "h1");
        doc.text(heading, "Hello");
        let button = doc.element(doc.root(), "button");
        doc.set_on_click(button, 7);
        doc.text(button, "press");
        doc
    }

    #[test]
    fn text0() {
        let doc = sample();
        assert_eq!(doc.direct_text(doc.root()), "");
        assert_eq!(doc.text_content(doc.root()), "Hellopress");

        let heading = doc.resolve(&[0]).unwrap();
        assert_eq!(doc.direct_text(heading), "Hello");
        assert_eq!(doc.text_content(heading), "Hello");
    }

    #[test]
    fn resolve0() {
        let doc = sample();
        assert_eq!(doc.resolve(&[]), Some(doc.root()));
        assert_eq!(doc.tag(doc.resolve(&[1]).unwrap()), "button");
        // text child, not an element
        assert_eq!(doc.resolve(&[0, 0]), None);
        assert_eq!(doc.resolve(&[5]), None);
    }

    #[test]
    fn paths0() {
        let doc = sample();
        let paths = doc.element_paths();
        assert_eq!(paths, vec![Vec::new(), vec![0], vec![1]]);
    }

    #[test]
    fn click0() {
        let doc = sample();
        assert_eq!(doc.click_target(&[1]), Some(7));
        // bubbles through text-free ancestors only when a handler exists
        assert_eq!(doc.click_target(&[0]), None);
        assert_eq!(doc.click_target(&[]), None);
    }

    #[test]
    fn click1() {
        let mut doc: Document<u8> = Document::new("div");
        doc.set_on_click(doc.root(), 1);
        let inner = doc.element(doc.root(), "span");
        // no handler of its own, click bubbles to the root
        assert_eq!(doc.click_target(&[0]), Some(1));
        let _ = inner;
    }

    #[test]
    fn display0() {
        let doc = sample();
        assert_eq!(
            format!("{}", doc),
            "<div><h1>Hello</h1><button>press</button></div>"
        );
    }

    #[test]
    fn normalize0() {
        assert_eq!(normalize("  count   is\n0 "), "count is 0");
    }
}
