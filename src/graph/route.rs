use crate::graph::edge::Edge;
use crate::graph::graph::Graph;
use crate::graph::node::Node;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::hash::Hash;
use std::iter;

/// A walk from `start` along consecutive edges. Labels are traversal costs.
#[derive(Clone, Debug, PartialEq)]
pub struct Route<T> {
    start: Node<T>,
    edges: Vec<Edge<T, f64>>,
}

impl<T> Route<T> {
    pub fn start(&self) -> &Node<T> {
        &self.start
    }

    pub fn end(&self) -> &Node<T> {
        self.edges.last().map_or(&self.start, |e| e.target())
    }

    pub fn edges(&self) -> &[Edge<T, f64>] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// A route that never leaves its start.
    pub fn is_trivial(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn total_cost(&self) -> f64 {
        self.edges.iter().map(|e| *e.label()).sum()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node<T>> {
        iter::once(&self.start).chain(self.edges.iter().map(|e| e.target()))
    }
}

struct Candidate<'a, T> {
    cost: f64,
    node: &'a T,
}

impl<T> PartialEq for Candidate<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cost.total_cmp(&other.cost) == Ordering::Equal
    }
}

impl<T> Eq for Candidate<'_, T> {}

// Reversed so the max-heap pops the cheapest candidate first.
impl<T> Ord for Candidate<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.total_cmp(&self.cost)
    }
}

impl<T> PartialOrd for Candidate<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Cheapest route from `start` to `dest` by total label sum.
///
/// Labels must be non-negative. Returns `None` when `start` is not a vertex
/// or `dest` cannot be reached; `start == dest` yields a trivial route.
/// Which of several equally cheap routes is returned is unspecified.
pub fn shortest_route<T: Eq + Hash + Clone>(
    start: &Node<T>,
    dest: &Node<T>,
    graph: &Graph<T, f64>,
) -> Option<Route<T>> {
    let start = graph.vertex(start.data())?;

    let mut best: HashMap<&T, f64> = HashMap::from([(start.data(), 0.0)]);
    let mut parents: HashMap<&T, (&T, f64)> = HashMap::new();
    let mut finished: HashSet<&T> = HashSet::new();
    let mut heap = BinaryHeap::from([Candidate {
        cost: 0.0,
        node: start.data(),
    }]);

    while let Some(Candidate { cost, node }) = heap.pop() {
        if node == dest.data() {
            return Some(reconstruct_route(start, node, &parents));
        }
        if !finished.insert(node) {
            continue;
        }
        for (child, label) in graph.outgoing(node) {
            let child = child.data();
            if finished.contains(child) {
                continue;
            }
            let next = cost + label;
            if best.get(child).is_none_or(|known| next < *known) {
                best.insert(child, next);
                parents.insert(child, (node, *label));
                heap.push(Candidate { cost: next, node: child });
            }
        }
    }
    None
}

fn reconstruct_route<T: Eq + Hash + Clone>(
    start: &Node<T>,
    end: &T,
    parents: &HashMap<&T, (&T, f64)>,
) -> Route<T> {
    let mut edges = Vec::new();
    let mut current = end;
    while let Some(&(parent, label)) = parents.get(current) {
        edges.push(Edge::new(
            Node::new(parent.clone()),
            Node::new(current.clone()),
            label,
        ));
        current = parent;
    }
    edges.reverse();
    Route {
        start: start.clone(),
        edges,
    }
}
