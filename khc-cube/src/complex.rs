use log::debug;

use khc::F2;
use khc_matrix::Mat;
use num_traits::One;

use crate::alg::{merge_label, split_labels};
use crate::cube::{carried_bits, KhCube, KhCubeEdge, KhCubeVertex};

impl KhCube {
    /// All differentials of the cube, `d[k]` mapping degree `k` to
    /// degree `k + 1`. Entries are accumulated over every coordinate
    /// flip out of every vertex.
    pub fn differentials(&self) -> Vec<Mat<F2>> {
        (0..self.dim()).map(|k| self.differential(k)).collect()
    }

    fn differential(&self, k: usize) -> Mat<F2> {
        debug!("assemble d[{k}]: {} -> {}.", self.rank(k), self.rank(k + 1));

        let mut d = Mat::zero((self.rank(k + 1), self.rank(k)));
        for v in self.vertices_of_weight(k) {
            for t in self.targets(v.state()) {
                let w = self.vertex(&t);
                let e = KhCubeEdge::between(v, w);
                self.add_entries(&mut d, v, w, &e);
            }
        }
        d
    }

    fn add_entries(&self, d: &mut Mat<F2>, v: &KhCubeVertex, w: &KhCubeVertex, e: &KhCubeEdge) {
        match (e.old_only(), e.new_only()) {
            (&[a, b], &[m])   => self.add_merge(d, v, w, a, b, m),
            (&[a], &[m1, m2]) => self.add_split(d, v, w, a, m1, m2),
            (&[], &[])        => {} // circle set unchanged, zero transition
            _ => panic!("degenerate transition {} -> {}", e.from(), e.to())
        }
    }

    fn add_merge(&self, d: &mut Mat<F2>, v: &KhCubeVertex, w: &KhCubeVertex, a: usize, b: usize, m: usize) {
        // the marked circle, when involved, is always the first one.
        let marked = self.is_reduced() && a == 0;

        for sub in 0..v.local_dim() {
            let col = v.offset() + sub;
            let carried = carried_bits(v, w, sub);

            let row = if marked {
                // the free partner's label is dropped
                w.offset() + carried
            } else {
                let la = v.label_at(sub, v.free_pos(a).unwrap());
                let lb = v.label_at(sub, v.free_pos(b).unwrap());
                let lm = merge_label(la, lb);
                let fm = w.free_pos(m).unwrap();
                w.offset() + carried + if lm.is_pos() { 1 << fm } else { 0 }
            };
            d[(row, col)] = F2::one();
        }
    }

    fn add_split(&self, d: &mut Mat<F2>, v: &KhCubeVertex, w: &KhCubeVertex, a: usize, m1: usize, m2: usize) {
        let marked = self.is_reduced() && a == 0;

        for sub in 0..v.local_dim() {
            let col = v.offset() + sub;
            let carried = carried_bits(v, w, sub);

            if marked {
                // the successor with the base edge stays marked,
                // the free successor takes both labels.
                debug_assert!(w.free_pos(m1).is_none());
                let f2 = w.free_pos(m2).unwrap();
                d[(w.offset() + carried, col)] = F2::one();
                d[(w.offset() + carried + (1 << f2), col)] = F2::one();
            } else {
                let la = v.label_at(sub, v.free_pos(a).unwrap());
                let f1 = w.free_pos(m1).unwrap();
                let f2 = w.free_pos(m2).unwrap();
                for (l1, l2) in split_labels(la) {
                    let mut t = carried;
                    if l1.is_pos() { t += 1 << f1 }
                    if l2.is_pos() { t += 1 << f2 }
                    d[(w.offset() + t, col)] = F2::one();
                }
            }
        }
    }
}
