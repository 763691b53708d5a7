use std::fmt::Display;
use std::fs;
use std::path::Path;

use itertools::Itertools;
use khc::bitseq::BitSeq;
use khc::union_find::KeyedUnionFind;

use crate::{Circle, Crossing};

pub type Edge = usize;
pub type State = BitSeq;
pub type XCode = [Edge; 4];

/// A planar link diagram given by its crossings in PD-code form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagram {
    data: Vec<Crossing>
}

impl Diagram {
    pub fn new(data: Vec<Crossing>) -> Self {
        Diagram { data }
    }

    pub fn from_pd_code<I>(pd_code: I) -> Self
    where I: IntoIterator<Item = XCode> {
        let data = pd_code.into_iter().map(Crossing::new).collect();
        Self::new(data)
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let json = fs::read_to_string(path)?;
        let pd_code: Vec<XCode> = serde_json::from_str(&json)?;
        Ok(Self::from_pd_code(pd_code))
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn crossing_num(&self) -> usize {
        self.data.len()
    }

    pub fn data(&self) -> &[Crossing] {
        &self.data
    }

    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.data.iter().flat_map(|x| x.edges()).copied().unique()
    }

    pub fn min_edge(&self) -> Option<Edge> {
        self.edges().min()
    }

    /// Traces the circles of the resolution given by `s`.
    /// The result is sorted by the minimal edge of each circle.
    pub fn circles(&self, s: &State) -> Vec<Circle> {
        assert_eq!(s.len(), self.crossing_num());

        let mut u = KeyedUnionFind::new();

        for (x, r) in self.data.iter().zip(s.iter()) {
            for (e1, e2) in x.arcs(r) {
                u.insert(e1);
                u.insert(e2);
                u.union(&e1, &e2);
            }
        }

        u.into_group().into_iter().map(Circle::new).sorted().collect()
    }

    // -- common examples --

    pub fn kinked_unknot() -> Self {
        Self::from_pd_code([[1, 2, 1, 2]])
    }

    pub fn hopf_link() -> Self {
        Self::from_pd_code([[4, 1, 3, 2], [2, 3, 1, 4]])
    }

    pub fn two_braid_closure() -> Self {
        Self::from_pd_code([[1, 2, 3, 4], [3, 4, 1, 2]])
    }

    pub fn trefoil() -> Self {
        Self::from_pd_code([[1, 4, 2, 5], [3, 6, 4, 1], [5, 2, 6, 3]])
    }
}

impl Display for Diagram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "D[{}]", self.data.iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges() {
        let d = Diagram::trefoil();
        assert_eq!(d.edges().sorted().collect_vec(), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(d.min_edge(), Some(1));
    }

    #[test]
    fn circles_kinked_unknot() {
        let d = Diagram::kinked_unknot();

        let c0 = d.circles(&State::from([0]));
        let c1 = d.circles(&State::from([1]));

        assert_eq!(c0, vec![Circle::new([1, 2])]);
        assert_eq!(c1, vec![Circle::new([1, 2])]);
    }

    #[test]
    fn circles_two_braid() {
        let d = Diagram::two_braid_closure();

        let c00 = d.circles(&State::from([0, 0]));
        let c10 = d.circles(&State::from([1, 0]));
        let c01 = d.circles(&State::from([0, 1]));
        let c11 = d.circles(&State::from([1, 1]));

        assert_eq!(c00, vec![Circle::new([1, 2]), Circle::new([3, 4])]);
        assert_eq!(c10, vec![Circle::new([1, 2, 3, 4])]);
        assert_eq!(c01, vec![Circle::new([1, 2, 3, 4])]);
        assert_eq!(c11, vec![Circle::new([1, 4]), Circle::new([2, 3])]);
    }

    #[test]
    fn circles_trefoil() {
        let d = Diagram::trefoil();

        let c000 = d.circles(&State::from([0, 0, 0]));
        let c111 = d.circles(&State::from([1, 1, 1]));

        assert_eq!(c000.len(), 3);
        assert_eq!(c111.len(), 2);
    }

    #[test]
    fn load_json() {
        let json = "[[1,2,1,2]]";
        let pd_code: Vec<XCode> = serde_json::from_str(json).unwrap();
        let d = Diagram::from_pd_code(pd_code);
        assert_eq!(d.crossing_num(), 1);
    }
}
