use std::borrow::Borrow;
use std::fmt;

/// A graph vertex addressed by the value it wraps.
///
/// Equality, hashing and ordering all come from `T`, so two nodes built from
/// equal values are the same vertex.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Node<T>(T);

impl<T> Node<T> {
    pub fn new(data: T) -> Self {
        Self(data)
    }

    pub fn data(&self) -> &T {
        &self.0
    }

    pub fn into_data(self) -> T {
        self.0
    }
}

impl<T> From<T> for Node<T> {
    fn from(data: T) -> Self {
        Self::new(data)
    }
}

// Lets maps keyed by `Node<T>` be queried with a plain `&T`.
impl<T> Borrow<T> for Node<T> {
    fn borrow(&self) -> &T {
        &self.0
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_identity_follows_wrapped_value() {
        let a = Node::new("library".to_string());
        let b = Node::from("library".to_string());
        assert_eq!(a, b);

        let set: HashSet<Node<String>> = [a.clone(), b].into_iter().collect();
        assert_eq!(1, set.len());
        assert!(a < Node::new("museum".to_string()));
    }
}
