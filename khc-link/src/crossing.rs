use std::fmt::Display;

use khc::bitseq::Bit;

use crate::Edge;

// A 4-valent crossing, edges listed counter-clockwise:
//
//     3   2
//      \ /
//       \      = (0, 1, 2, 3)
//      / \
//     0   1
//
// The 0-resolution pairs the ends (0,1) and (2,3),
// the 1-resolution pairs (0,3) and (1,2).

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Crossing {
    edges: [Edge; 4]
}

impl Crossing {
    pub fn new(edges: [Edge; 4]) -> Self {
        Crossing { edges }
    }

    pub fn edge(&self, i: usize) -> Edge {
        assert!(i < 4);
        self.edges[i]
    }

    pub fn edges(&self) -> &[Edge; 4] {
        &self.edges
    }

    pub fn contains(&self, e: Edge) -> bool {
        self.edges.contains(&e)
    }

    /// The two strand segments obtained by resolving with `r`.
    pub fn arcs(&self, r: Bit) -> [(Edge, Edge); 2] {
        let [e0, e1, e2, e3] = self.edges;
        match r {
            Bit::Bit0 => [(e0, e1), (e2, e3)],
            Bit::Bit1 => [(e0, e3), (e1, e2)]
        }
    }
}

impl Display for Crossing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X{:?}", self.edges)
    }
}
