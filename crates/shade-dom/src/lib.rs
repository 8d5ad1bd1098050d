//! DOM tree data structures and the node-lookup/class-mutation surface.

/// ID used to address nodes in the DOM arena.
pub type NodeId = u64;

/// Inline display state a node can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    None,
    Block,
    Inline,
    Flex,
}

/// A single addressable node: tag, optional element identifier, class set,
/// and an optional inline display override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub tag: String,
    pub element_id: Option<String>,
    classes: Vec<String>,
    style_display: Option<Display>,
}

impl Node {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            element_id: None,
            classes: Vec::new(),
            style_display: None,
        }
    }

    pub fn with_element_id(mut self, element_id: impl Into<String>) -> Self {
        self.element_id = Some(element_id.into());
        self
    }

    /// Seeds the class list from a whitespace-separated attribute value.
    pub fn with_class_attr(mut self, attr: &str) -> Self {
        for class_name in attr.split_whitespace() {
            self.add_class(class_name);
        }
        self
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class_name: &str) -> bool {
        self.classes.iter().any(|candidate| candidate == class_name)
    }

    /// Adds a class; no-op if already present. The class list never holds
    /// duplicates.
    pub fn add_class(&mut self, class_name: &str) {
        if class_name.is_empty() || self.has_class(class_name) {
            return;
        }
        self.classes.push(class_name.to_owned());
    }

    /// Removes a class; no-op if absent.
    pub fn remove_class(&mut self, class_name: &str) {
        self.classes.retain(|candidate| candidate != class_name);
    }

    pub fn style_display(&self) -> Option<Display> {
        self.style_display
    }

    pub fn set_style_display(&mut self, display: Display) {
        self.style_display = Some(display);
    }
}

/// Document model: an arena of nodes in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    pub fn empty() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn insert(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        self.nodes.len().saturating_sub(1) as NodeId
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id as usize)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id as usize)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Resolves an element identifier to the first matching node in document
    /// order. Matching is exact and case-sensitive; nodes without an element
    /// identifier are unreachable here.
    pub fn find_by_element_id(&self, element_id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|node| node.element_id.as_deref() == Some(element_id))
            .map(|index| index as NodeId)
    }
}

/// Explicit handle to a document's node-lookup and class-mutation capability.
///
/// UI actions take this instead of reaching for an ambient document, so they
/// can run against a fake surface in tests. Every operation reports whether
/// the element identifier resolved; mutations on a resolved node are
/// idempotent.
pub trait DocumentSurface {
    fn contains(&self, element_id: &str) -> bool;
    fn set_display(&mut self, element_id: &str, display: Display) -> bool;
    fn has_class(&self, element_id: &str, class_name: &str) -> bool;
    fn add_class(&mut self, element_id: &str, class_name: &str) -> bool;
    fn remove_class(&mut self, element_id: &str, class_name: &str) -> bool;
}

impl DocumentSurface for Document {
    fn contains(&self, element_id: &str) -> bool {
        self.find_by_element_id(element_id).is_some()
    }

    fn set_display(&mut self, element_id: &str, display: Display) -> bool {
        let Some(id) = self.find_by_element_id(element_id) else {
            return false;
        };
        if let Some(node) = self.node_mut(id) {
            node.set_style_display(display);
        }
        true
    }

    fn has_class(&self, element_id: &str, class_name: &str) -> bool {
        self.find_by_element_id(element_id)
            .and_then(|id| self.node(id))
            .is_some_and(|node| node.has_class(class_name))
    }

    fn add_class(&mut self, element_id: &str, class_name: &str) -> bool {
        let Some(id) = self.find_by_element_id(element_id) else {
            return false;
        };
        if let Some(node) = self.node_mut(id) {
            node.add_class(class_name);
        }
        true
    }

    fn remove_class(&mut self, element_id: &str, class_name: &str) -> bool {
        let Some(id) = self.find_by_element_id(element_id) else {
            return false;
        };
        if let Some(node) = self.node_mut(id) {
            node.remove_class(class_name);
        }
        true
    }
}
