use std::fmt::Display;
use std::ops::{Index, IndexMut, Mul};

use delegate::delegate;
use nalgebra::{ClosedAddAssign, ClosedMulAssign, DMatrix, Scalar};
use num_traits::{One, Zero};

/// A dense matrix backed by `nalgebra::DMatrix`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mat<R>
where R: Scalar {
    inner: DMatrix<R>
}

impl<R> Mat<R>
where R: Scalar {
    pub fn from_inner(inner: DMatrix<R>) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &DMatrix<R> {
        &self.inner
    }

    pub fn from_fn<F>(shape: (usize, usize), f: F) -> Self
    where F: FnMut(usize, usize) -> R {
        Self::from_inner(DMatrix::from_fn(shape.0, shape.1, f))
    }

    delegate! {
        to self.inner {
            pub fn nrows(&self) -> usize;
            pub fn ncols(&self) -> usize;
            pub fn shape(&self) -> (usize, usize);
        }
    }

    /// The restriction to the given rows and columns, in the given order.
    pub fn submat(&self, rows: &[usize], cols: &[usize]) -> Self {
        Self::from_fn((rows.len(), cols.len()), |i, j|
            self.inner[(rows[i], cols[j])].clone()
        )
    }
}

impl<R> Mat<R>
where R: Scalar + Zero {
    pub fn zero(shape: (usize, usize)) -> Self {
        Self::from_inner(DMatrix::zeros(shape.0, shape.1))
    }

    pub fn is_zero(&self) -> bool {
        self.inner.iter().all(|a| a.is_zero())
    }
}

impl<R> Mat<R>
where R: Scalar + Zero + One {
    pub fn id(n: usize) -> Self {
        Self::from_inner(DMatrix::identity(n, n))
    }
}

impl<R> Index<(usize, usize)> for Mat<R>
where R: Scalar {
    type Output = R;

    fn index(&self, idx: (usize, usize)) -> &R {
        &self.inner[idx]
    }
}

impl<R> IndexMut<(usize, usize)> for Mat<R>
where R: Scalar {
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut R {
        &mut self.inner[idx]
    }
}

impl<'a, R> Mul for &'a Mat<R>
where R: Scalar + Zero + One + ClosedAddAssign + ClosedMulAssign {
    type Output = Mat<R>;

    fn mul(self, rhs: Self) -> Self::Output {
        assert_eq!(self.ncols(), rhs.nrows());
        Mat::from_inner(&self.inner * &rhs.inner)
    }
}

impl<R> Mul for Mat<R>
where R: Scalar + Zero + One + ClosedAddAssign + ClosedMulAssign {
    type Output = Mat<R>;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl<R> Display for Mat<R>
where R: Scalar + Display {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.inner, f)
    }
}
