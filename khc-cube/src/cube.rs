use log::info;
use rayon::prelude::*;

use khc::bitseq::BitSeq;
use khc_link::{Circle, Diagram, State};

use crate::alg::Label;

/// A vertex of the resolution cube: one state together with the circles
/// it resolves into. Generators are indexed by subsets of the free
/// circles, bit `i` set meaning circle `i` is labelled `+`.
///
/// In the reduced theory the first circle (the one containing the
/// smallest edge) is marked and carries no free bit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KhCubeVertex {
    state: State,
    circles: Vec<Circle>,
    reduced: bool,
    ord: usize,
    offset: usize
}

impl KhCubeVertex {
    fn new(d: &Diagram, state: State, reduced: bool) -> Self {
        let circles = d.circles(&state);
        Self { state, circles, reduced, ord: 0, offset: 0 }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub fn marked(&self) -> Option<&Circle> {
        if self.reduced {
            self.circles.first()
        } else {
            None
        }
    }

    pub fn free_circles(&self) -> &[Circle] {
        if self.reduced && !self.circles.is_empty() {
            &self.circles[1..]
        } else {
            &self.circles
        }
    }

    pub fn free_count(&self) -> usize {
        self.free_circles().len()
    }

    pub fn local_dim(&self) -> usize {
        1 << self.free_count()
    }

    /// Zero-based rank among the vertices of the same degree,
    /// enumerated in ascending state value.
    pub fn ord(&self) -> usize {
        self.ord
    }

    /// Starting index of this vertex within its degree block.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Converts a position in `circles` to a position among the free
    /// circles. `None` for the marked circle.
    pub fn free_pos(&self, i: usize) -> Option<usize> {
        if self.reduced {
            if i == 0 { None } else { Some(i - 1) }
        } else {
            Some(i)
        }
    }

    pub fn free_index_of(&self, c: &Circle) -> Option<usize> {
        let i = self.circles.binary_search(c).ok()?;
        self.free_pos(i)
    }

    /// The label of the `i`-th free circle in the generator `sub`.
    pub fn label_at(&self, sub: usize, i: usize) -> Label {
        debug_assert!(i < self.free_count());
        Label::from_bit((sub >> i) & 1 == 1)
    }
}

/// An edge of the cube, recording which circles vanish and which appear
/// when one coordinate flips from 0 to 1. Positions refer to the sorted
/// circle lists of the two endpoint vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KhCubeEdge {
    from: State,
    to: State,
    old_only: Vec<usize>,
    new_only: Vec<usize>
}

impl KhCubeEdge {
    pub fn between(v: &KhCubeVertex, w: &KhCubeVertex) -> Self {
        use std::cmp::Ordering::*;

        let (a, b) = (v.circles(), w.circles());
        let mut old_only = vec![];
        let mut new_only = vec![];
        let (mut i, mut j) = (0, 0);

        while i < a.len() && j < b.len() {
            match a[i].cmp(&b[j]) {
                Less    => { old_only.push(i); i += 1 }
                Greater => { new_only.push(j); j += 1 }
                Equal   => { i += 1; j += 1 }
            }
        }
        old_only.extend(i..a.len());
        new_only.extend(j..b.len());

        Self { from: *v.state(), to: *w.state(), old_only, new_only }
    }

    pub fn from(&self) -> &State {
        &self.from
    }

    pub fn to(&self) -> &State {
        &self.to
    }

    pub fn old_only(&self) -> &[usize] {
        &self.old_only
    }

    pub fn new_only(&self) -> &[usize] {
        &self.new_only
    }
}

/// Carries the labels of the surviving free circles of `v` over to the
/// free indexing of `w`. Bits of vanished circles are dropped.
pub(crate) fn carried_bits(v: &KhCubeVertex, w: &KhCubeVertex, sub: usize) -> usize {
    let mut bits = 0;
    for (i, c) in v.free_circles().iter().enumerate() {
        if (sub >> i) & 1 == 0 {
            continue;
        }
        if let Some(j) = w.free_index_of(c) {
            bits |= 1 << j;
        }
    }
    bits
}

/// The full cube of resolutions of a diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KhCube {
    dim: usize,
    reduced: bool,
    vertices: Vec<KhCubeVertex>,
    dims: Vec<usize>
}

impl KhCube {
    pub fn new(d: &Diagram, reduced: bool) -> Self {
        let n = d.crossing_num();
        assert!(n <= BitSeq::MAX_LEN);

        info!("trace cube: n = {n}, {} vertices, reduced = {reduced}.", 1u64 << n);

        let mut vertices: Vec<_> = (0 .. 1u64 << n).into_par_iter().map(|val| {
            let s = State::new(val, n);
            KhCubeVertex::new(d, s, reduced)
        }).collect();

        // offsets must follow ascending state value, hence sequential.
        let mut dims = vec![0; n + 1];
        let mut counts = vec![0; n + 1];
        for v in vertices.iter_mut() {
            let k = v.state.weight();
            v.ord = counts[k];
            v.offset = dims[k];
            counts[k] += 1;
            dims[k] += v.local_dim();
        }

        Self { dim: n, reduced, vertices, dims }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn is_reduced(&self) -> bool {
        self.reduced
    }

    /// Total number of generators of degree `k`.
    pub fn rank(&self, k: usize) -> usize {
        self.dims[k]
    }

    pub fn vertices(&self) -> &[KhCubeVertex] {
        &self.vertices
    }

    pub fn vertex(&self, s: &State) -> &KhCubeVertex {
        &self.vertices[s.as_u64() as usize]
    }

    pub fn vertices_of_weight(&self, k: usize) -> impl Iterator<Item = &KhCubeVertex> {
        self.vertices.iter().filter(move |v| v.state.weight() == k)
    }

    pub fn targets(&self, s: &State) -> Vec<State> {
        (0..self.dim).filter(|&i| s[i].is_zero()).map(|i|
            s.edit(|b| b.set_1(i))
        ).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_circles() {
        let d = Diagram::two_braid_closure();
        let c = KhCube::new(&d, false);

        let v = c.vertex(&State::from([0, 0]));
        assert_eq!(v.circles().len(), 2);
        assert_eq!(v.free_count(), 2);
        assert_eq!(v.local_dim(), 4);
        assert!(v.marked().is_none());

        let w = c.vertex(&State::from([1, 0]));
        assert_eq!(w.circles().len(), 1);
        assert_eq!(w.local_dim(), 2);
    }

    #[test]
    fn vertex_marked() {
        let d = Diagram::two_braid_closure();
        let c = KhCube::new(&d, true);

        let v = c.vertex(&State::from([0, 0]));
        assert_eq!(v.marked(), Some(&Circle::new([1, 2])));
        assert_eq!(v.free_circles(), &[Circle::new([3, 4])]);
        assert_eq!(v.free_count(), 1);
        assert_eq!(v.local_dim(), 2);

        assert_eq!(v.free_pos(0), None);
        assert_eq!(v.free_pos(1), Some(0));
    }

    #[test]
    fn dims() {
        let d = Diagram::trefoil();

        let c = KhCube::new(&d, false);

        // the all-ones resolution traces to 2 circles, so rank(3) = 4.
        let v = c.vertex(&State::from([1, 1, 1]));
        assert_eq!(v.circles().len(), 2);

        assert_eq!((0..=3).map(|k| c.rank(k)).collect::<Vec<_>>(), vec![8, 12, 6, 4]);

        let c = KhCube::new(&d, true);
        assert_eq!((0..=3).map(|k| c.rank(k)).collect::<Vec<_>>(), vec![4, 6, 3, 2]);
    }

    #[test]
    fn dims_empty() {
        let d = Diagram::empty();
        let c = KhCube::new(&d, false);

        assert_eq!(c.dim(), 0);
        assert_eq!(c.rank(0), 1);
    }

    #[test]
    fn ord_and_offset() {
        let d = Diagram::trefoil();
        let c = KhCube::new(&d, false);

        // weight 1 states in ascending value: 001, 010, 100.
        let v1 = c.vertex(&State::from([1, 0, 0]));
        let v2 = c.vertex(&State::from([0, 1, 0]));
        let v4 = c.vertex(&State::from([0, 0, 1]));

        assert_eq!((v1.ord(), v1.offset()), (0, 0));
        assert_eq!((v2.ord(), v2.offset()), (1, 4));
        assert_eq!((v4.ord(), v4.offset()), (2, 8));
    }

    #[test]
    fn targets() {
        let d = Diagram::trefoil();
        let c = KhCube::new(&d, false);

        let ts = c.targets(&State::from([0, 1, 0]));
        assert_eq!(ts, vec![
            State::from([1, 1, 0]),
            State::from([0, 1, 1]),
        ]);
    }

    #[test]
    fn edge_merge() {
        let d = Diagram::two_braid_closure();
        let c = KhCube::new(&d, false);

        let v = c.vertex(&State::from([0, 0]));
        let w = c.vertex(&State::from([1, 0]));
        let e = KhCubeEdge::between(v, w);

        assert_eq!(e.old_only(), &[0, 1]);
        assert_eq!(e.new_only(), &[0]);
    }

    #[test]
    fn edge_split() {
        let d = Diagram::two_braid_closure();
        let c = KhCube::new(&d, false);

        let v = c.vertex(&State::from([1, 0]));
        let w = c.vertex(&State::from([1, 1]));
        let e = KhCubeEdge::between(v, w);

        assert_eq!(e.old_only(), &[0]);
        assert_eq!(e.new_only(), &[0, 1]);
    }

    #[test]
    fn edge_identical() {
        let d = Diagram::kinked_unknot();
        let c = KhCube::new(&d, false);

        let v = c.vertex(&State::from([0]));
        let w = c.vertex(&State::from([1]));
        let e = KhCubeEdge::between(v, w);

        assert!(e.old_only().is_empty());
        assert!(e.new_only().is_empty());
    }

    #[test]
    fn carry() {
        let d = Diagram::trefoil();
        let c = KhCube::new(&d, false);

        // (1,4) survives into the target, (2,5),(3,6) merge away.
        let v = c.vertex(&State::from([0, 0, 0]));
        let w = c.vertex(&State::from([0, 0, 1]));

        assert_eq!(v.circles(), &[
            Circle::new([1, 4]), Circle::new([2, 5]), Circle::new([3, 6])
        ]);
        assert_eq!(w.circles(), &[
            Circle::new([1, 4]), Circle::new([2, 3, 5, 6])
        ]);

        assert_eq!(carried_bits(v, w, 0b001), 0b01);
        assert_eq!(carried_bits(v, w, 0b110), 0b00);
        assert_eq!(carried_bits(v, w, 0b111), 0b01);
    }
}
