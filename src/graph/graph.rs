use crate::graph::edge::Edge;
use crate::graph::node::Node;
use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;

/// Directed labeled graph keyed by node value.
///
/// Each vertex owns its outgoing adjacency in insertion order. There is at
/// most one label per ordered `(source, target)` pair: adding the pair again
/// replaces the label.
#[derive(Clone, Debug)]
pub struct Graph<T, L> {
    adjacency: HashMap<Node<T>, Vec<(Node<T>, L)>>,
}

impl<T, L> Default for Graph<T, L> {
    fn default() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }
}

impl<T: Eq + Hash + Clone, L> Graph<T, L> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, value: T) {
        self.adjacency.entry(Node::new(value)).or_default();
    }

    /// Removes the vertex together with every edge leading into it.
    pub fn remove_node(&mut self, value: &T) -> bool {
        let existed = self.adjacency.remove(value).is_some();
        self.adjacency
            .values_mut()
            .for_each(|children| children.retain(|(child, _)| child.data() != value));
        existed
    }

    /// `target` does not have to be a vertex for the edge to be stored.
    pub fn add_edge(&mut self, source: T, target: T, label: L) {
        let children = self.adjacency.entry(Node::new(source)).or_default();
        match children.iter_mut().find(|(child, _)| *child.data() == target) {
            Some((_, existing)) => *existing = label,
            None => children.push((Node::new(target), label)),
        }
    }

    pub fn contains_node(&self, value: &T) -> bool {
        self.adjacency.contains_key(value)
    }

    pub fn vertex(&self, value: &T) -> Option<&Node<T>> {
        self.adjacency.get_key_value(value).map(|(node, _)| node)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node<T>> {
        self.adjacency.keys()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Outgoing `(target, label)` pairs of `value`, empty for unknown values.
    pub fn outgoing(&self, value: &T) -> &[(Node<T>, L)] {
        self.adjacency
            .get(value)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn list_children(&self, value: &T) -> Vec<&Node<T>> {
        self.outgoing(value).iter().map(|(child, _)| child).collect()
    }

    pub fn edge_label(&self, source: &T, target: &T) -> Option<&L> {
        self.outgoing(source)
            .iter()
            .find(|(child, _)| child.data() == target)
            .map(|(_, label)| label)
    }

    pub fn edges_from(&self, value: &T) -> Vec<Edge<T, L>>
    where
        L: Clone,
    {
        self.vertex(value)
            .map(|source| {
                self.outgoing(value)
                    .iter()
                    .map(|(target, label)| Edge::new(source.clone(), target.clone(), label.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Fewest-hop path from `source` to `target`, both included.
    ///
    /// Children are explored in insertion order and each node keeps the
    /// parent it was first discovered from. `None` when `target` cannot be
    /// reached or `source` is not a vertex.
    pub fn find_path(&self, source: &T, target: &T) -> Option<Vec<Node<T>>> {
        let start = self.vertex(source)?.data();

        let mut queue = VecDeque::from([start]);
        let mut visited = HashSet::from([start]);
        let mut parents: HashMap<&T, &T> = HashMap::new();

        while let Some(current) = queue.pop_front() {
            if current == target {
                return Some(reconstruct_path(current, &parents));
            }
            for (child, _) in self.outgoing(current) {
                let child = child.data();
                if visited.insert(child) {
                    parents.insert(child, current);
                    queue.push_back(child);
                }
            }
        }
        None
    }
}

impl<T: Eq + Hash + Clone, L: PartialEq> Graph<T, L> {
    /// Removes the edge only when its current label equals `label`.
    pub fn remove_edge(&mut self, source: &T, target: &T, label: &L) -> bool {
        let Some(children) = self.adjacency.get_mut(source) else {
            return false;
        };
        match children
            .iter()
            .position(|(child, l)| child.data() == target && l == label)
        {
            Some(i) => {
                children.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn contains_edge(&self, source: &T, target: &T, label: &L) -> bool {
        self.edge_label(source, target) == Some(label)
    }
}

fn reconstruct_path<T: Eq + Hash + Clone>(end: &T, parents: &HashMap<&T, &T>) -> Vec<Node<T>> {
    let mut path = vec![Node::new(end.clone())];
    let mut current = end;
    while let Some(parent) = parents.get(current) {
        path.push(Node::new((*parent).clone()));
        current = *parent;
    }
    path.reverse();
    path
}
