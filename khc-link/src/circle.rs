use std::collections::BTreeSet;
use std::fmt::Display;

use itertools::Itertools;

use crate::Edge;

/// A circle in a resolved diagram, identified by the set of edges it traverses.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Circle {
    edges: BTreeSet<Edge>
}

impl Circle {
    pub fn new<I>(edges: I) -> Self
    where I: IntoIterator<Item = Edge> {
        let edges = edges.into_iter().collect::<BTreeSet<_>>();
        assert!(!edges.is_empty());
        Circle { edges }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn contains(&self, e: Edge) -> bool {
        self.edges.contains(&e)
    }

    pub fn min_edge(&self) -> Edge {
        *self.edges.first().unwrap()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }
}

impl Display for Circle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({})", self.edges.iter().join("-"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init() {
        let c = Circle::new([3, 1, 2, 1]);

        assert_eq!(c.len(), 3);
        assert_eq!(c.min_edge(), 1);
        assert!(c.contains(2));
        assert!(!c.contains(4));
    }

    #[test]
    fn ord() {
        let c1 = Circle::new([1, 2]);
        let c2 = Circle::new([3, 4]);

        assert!(c1 < c2);
    }

    #[test]
    fn display() {
        let c = Circle::new([2, 1, 5]);
        assert_eq!(c.to_string(), "(1-2-5)");
    }
}
