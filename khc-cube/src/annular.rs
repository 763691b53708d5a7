use log::info;

use khc::F2;
use khc_link::{Circle, Diagram, Edge, State};
use khc_matrix::Mat;
use num_traits::One;

use crate::alg::{annular_merge, annular_split};
use crate::cube::{carried_bits, KhCube, KhCubeEdge, KhCubeVertex};
use crate::KhError;

const MAX_EDGE: usize = 64;

/// XOR-reduction basis over GF(2). Row `i`, when occupied, has bit `i`
/// as its lowest set bit.
#[derive(Debug, Clone)]
struct LinBasis {
    rows: [u64; MAX_EDGE]
}

impl LinBasis {
    fn new() -> Self {
        Self { rows: [0; MAX_EDGE] }
    }

    fn insert(&mut self, mut mask: u64) {
        for i in 0..MAX_EDGE {
            if (mask >> i) & 1 == 0 {
                continue;
            }
            if self.rows[i] == 0 {
                self.rows[i] = mask;
                return;
            }
            mask ^= self.rows[i];
        }
    }

    fn spans(&self, mut mask: u64) -> bool {
        for i in 0..MAX_EDGE {
            if (mask >> i) & 1 == 0 {
                continue;
            }
            if self.rows[i] == 0 {
                return false;
            }
            mask ^= self.rows[i];
        }
        true
    }
}

fn circle_mask(c: &Circle) -> u64 {
    c.edges().fold(0, |mask, &e| mask | 1 << (e - 1))
}

/// The bounded faces of an annular diagram, the first one being the
/// special face adjacent to the inner boundary circle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceSet {
    special: u64,
    others: Vec<u64>
}

impl FaceSet {
    pub fn new<I, F>(faces: I) -> Result<Self, KhError>
    where I: IntoIterator<Item = F>, F: AsRef<[Edge]> {
        let masks = faces.into_iter().map(|f|
            Self::mask(f.as_ref())
        ).collect::<Result<Vec<_>, _>>()?;

        let Some((&special, others)) = masks.split_first() else {
            return Err(KhError::NoFaces);
        };
        Ok(Self { special, others: others.to_vec() })
    }

    fn mask(face: &[Edge]) -> Result<u64, KhError> {
        let mut mask = 0;
        for &e in face {
            if e == 0 || e > MAX_EDGE {
                return Err(KhError::EdgeOutOfRange(e));
            }
            mask |= 1 << (e - 1);
        }
        Ok(mask)
    }
}

/// The resolution cube of an annular diagram, with every circle of
/// every vertex classified as punctured or not against the face
/// lattice.
#[derive(Debug, Clone)]
pub struct AnnCube {
    cube: KhCube,
    punctured: Vec<Vec<bool>>
}

impl AnnCube {
    pub fn new(d: &Diagram, faces: &FaceSet) -> Result<Self, KhError> {
        for e in d.edges() {
            if e == 0 || e > MAX_EDGE {
                return Err(KhError::EdgeOutOfRange(e));
            }
        }

        // the basis pair is fully built before any circle is tested.
        let mut basis1 = LinBasis::new();
        for &m in faces.others.iter() {
            basis1.insert(m);
        }
        let mut basis2 = basis1.clone();
        basis2.insert(faces.special);

        let cube = KhCube::new(d, false);

        let punctured = cube.vertices().iter().map(|v|
            v.circles().iter().map(|c|
                Self::classify(c, &basis1, &basis2)
            ).collect::<Result<Vec<_>, _>>()
        ).collect::<Result<Vec<_>, _>>()?;

        info!("classified {} vertices against {} faces.",
            cube.vertices().len(), faces.others.len() + 1);

        Ok(Self { cube, punctured })
    }

    /// A circle winds around the puncture iff its edge mask lies
    /// outside the span of the non-special faces. A mask outside the
    /// span of all faces cannot come from a closed curve of the
    /// diagram.
    fn classify(c: &Circle, basis1: &LinBasis, basis2: &LinBasis) -> Result<bool, KhError> {
        let mask = circle_mask(c);
        if !basis2.spans(mask) {
            return Err(KhError::InconsistentFaces(c.clone()));
        }
        Ok(!basis1.spans(mask))
    }

    pub fn cube(&self) -> &KhCube {
        &self.cube
    }

    pub fn is_punctured(&self, s: &State, i: usize) -> bool {
        self.punctured[s.as_u64() as usize][i]
    }

    pub fn differentials(&self) -> Result<Vec<Mat<F2>>, KhError> {
        (0..self.cube.dim()).map(|k| self.differential(k)).collect()
    }

    fn differential(&self, k: usize) -> Result<Mat<F2>, KhError> {
        let c = &self.cube;
        let mut d = Mat::zero((c.rank(k + 1), c.rank(k)));

        for v in c.vertices_of_weight(k) {
            for t in c.targets(v.state()) {
                let w = c.vertex(&t);
                let e = KhCubeEdge::between(v, w);
                self.add_entries(&mut d, v, w, &e)?;
            }
        }
        Ok(d)
    }

    fn add_entries(&self, d: &mut Mat<F2>, v: &KhCubeVertex, w: &KhCubeVertex, e: &KhCubeEdge) -> Result<(), KhError> {
        match (e.old_only(), e.new_only()) {
            (&[a, b], &[m])   => { self.add_merge(d, v, w, a, b, m); Ok(()) }
            (&[a], &[m1, m2]) => self.add_split(d, v, w, a, m1, m2),
            (&[], &[])        => Ok(()),
            _ => panic!("degenerate transition {} -> {}", e.from(), e.to())
        }
    }

    fn add_merge(&self, d: &mut Mat<F2>, v: &KhCubeVertex, w: &KhCubeVertex, a: usize, b: usize, m: usize) {
        let pa = self.is_punctured(v.state(), a);
        let pb = self.is_punctured(v.state(), b);

        for sub in 0..v.local_dim() {
            let col = v.offset() + sub;
            let carried = carried_bits(v, w, sub);
            let la = v.label_at(sub, a);
            let lb = v.label_at(sub, b);

            for lm in annular_merge(la, pa, lb, pb) {
                let row = w.offset() + carried + if lm.is_pos() { 1 << m } else { 0 };
                d[(row, col)] = F2::one();
            }
        }
    }

    fn add_split(&self, d: &mut Mat<F2>, v: &KhCubeVertex, w: &KhCubeVertex, a: usize, m1: usize, m2: usize) -> Result<(), KhError> {
        let p0 = self.is_punctured(v.state(), a);
        let p1 = self.is_punctured(w.state(), m1);
        let p2 = self.is_punctured(w.state(), m2);

        for sub in 0..v.local_dim() {
            let col = v.offset() + sub;
            let carried = carried_bits(v, w, sub);
            let la = v.label_at(sub, a);

            for (l1, l2) in annular_split(la, p0, p1, p2)? {
                let mut t = carried;
                if l1.is_pos() { t += 1 << m1 }
                if l2.is_pos() { t += 1 << m2 }
                d[(w.offset() + t, col)] = F2::one();
            }
        }
        Ok(())
    }

    /// The annular grading of a generator: punctured circles count
    /// `+1` when labelled `+` and `-1` when labelled `-`.
    fn grading(&self, v: &KhCubeVertex, sub: usize) -> i64 {
        let flags = &self.punctured[v.state().as_u64() as usize];
        flags.iter().enumerate().filter(|(_, &p)| p).map(|(i, _)|
            if (sub >> i) & 1 == 1 { 1 } else { -1 }
        ).sum()
    }

    /// Generator indices of annular grading `g`, ascending per degree.
    pub fn keep_indices(&self, g: i64) -> Vec<Vec<usize>> {
        let n = self.cube.dim();
        let mut keep = vec![vec![]; n + 1];

        for v in self.cube.vertices() {
            let k = v.state().weight();
            for sub in 0..v.local_dim() {
                if self.grading(v, sub) == g {
                    keep[k].push(v.offset() + sub);
                }
            }
        }
        keep
    }

    /// The differentials restricted to the grading `g` subcomplex.
    pub fn subcomplex(&self, g: i64) -> Result<Vec<Mat<F2>>, KhError> {
        let keep = self.keep_indices(g);
        let full = self.differentials()?;

        Ok(full.into_iter().enumerate().map(|(k, d)|
            d.submat(&keep[k + 1], &keep[k])
        ).collect())
    }
}
