use crate::graph::node::Node;
use std::cmp::Ordering;
use std::fmt;

/// Directed, labeled connection `source -> target`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Edge<T, L> {
    source: Node<T>,
    target: Node<T>,
    label: L,
}

impl<T, L> Edge<T, L> {
    pub fn new(source: Node<T>, target: Node<T>, label: L) -> Self {
        Self {
            source,
            target,
            label,
        }
    }

    pub fn source(&self) -> &Node<T> {
        &self.source
    }

    pub fn target(&self) -> &Node<T> {
        &self.target
    }

    pub fn label(&self) -> &L {
        &self.label
    }
}

// Edges sort by where they lead, then by label. The source only breaks
// ties, keeping `Equal` consistent with `==`.
impl<T: PartialOrd, L: PartialOrd> PartialOrd for Edge<T, L> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.target.partial_cmp(&other.target)? {
            Ordering::Equal => match self.label.partial_cmp(&other.label)? {
                Ordering::Equal => self.source.partial_cmp(&other.source),
                ord => Some(ord),
            },
            ord => Some(ord),
        }
    }
}

impl<T: Ord, L: Ord> Ord for Edge<T, L> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.target
            .cmp(&other.target)
            .then_with(|| self.label.cmp(&other.label))
            .then_with(|| self.source.cmp(&other.source))
    }
}

impl<T: fmt::Display, L> fmt::Display for Edge<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{},{}>", self.source, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(from: &str, to: &str, label: u32) -> Edge<String, u32> {
        Edge::new(Node::new(from.into()), Node::new(to.into()), label)
    }

    #[test]
    fn test_ordering_by_target_then_label() {
        let mut edges = vec![
            edge("a", "c", 1),
            edge("z", "b", 7),
            edge("a", "b", 3),
            edge("q", "c", 0),
        ];
        edges.sort();

        assert_eq!(edge("a", "b", 3), edges[0]);
        assert_eq!(edge("z", "b", 7), edges[1]);
        assert_eq!(edge("q", "c", 0), edges[2]);
        assert_eq!(edge("a", "c", 1), edges[3]);
    }

    #[test]
    fn test_source_breaks_ties() {
        let from_a = edge("a", "t", 1);
        let from_b = edge("b", "t", 1);

        assert_ne!(from_a, from_b);
        assert_eq!(Ordering::Less, from_a.cmp(&from_b));
        assert_eq!(Some(Ordering::Greater), from_b.partial_cmp(&from_a));
        assert_eq!(Ordering::Equal, from_a.cmp(&edge("a", "t", 1)));
    }

    #[test]
    fn test_equality_over_whole_triple() {
        assert_eq!(edge("a", "b", 1), edge("a", "b", 1));
        assert_ne!(edge("a", "b", 1), edge("a", "b", 2));
        assert_ne!(edge("a", "b", 1), edge("b", "a", 1));
    }

    #[test]
    fn test_float_labels_compare_partially() {
        let short = Edge::new(Node::new(1), Node::new(2), 1.5);
        let long = Edge::new(Node::new(0), Node::new(2), 4.0);
        assert!(short < long);
        assert_eq!("<1,2>", short.to_string());
    }
}
