use crate::expression::Node;

/// Distinct single-block expressions, in enumeration order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BaseSet {
    entries: Vec<Node>,
}

impl BaseSet {
    pub fn from_nodes(entries: Vec<Node>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[Node] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a BaseSet {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
