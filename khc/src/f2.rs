use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};
use auto_impl_ops::auto_ops;

/// The field with two elements, the only coefficient ring
/// the differential maps are ever taken over.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct F2(bool);

impl<I> From<I> for F2
where I: ToPrimitive {
    fn from(a: I) -> Self {
        let b = a.to_i64().unwrap().is_odd();
        Self(b)
    }
}

impl Display for F2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 {
            write!(f, "1")
        } else {
            write!(f, "0")
        }
    }
}

impl Debug for F2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Zero for F2 {
    fn zero() -> Self {
        Self(false)
    }

    fn is_zero(&self) -> bool {
        !self.0
    }
}

impl One for F2 {
    fn one() -> Self {
        Self(true)
    }

    fn is_one(&self) -> bool {
        self.0
    }
}

impl Neg for F2 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self
    }
}

impl Neg for &F2 {
    type Output = F2;
    fn neg(self) -> Self::Output {
        *self
    }
}

#[auto_ops]
impl<'a, 'b> Add<&'b F2> for &'a F2 {
    type Output = F2;
    fn add(self, rhs: &'b F2) -> Self::Output {
        F2(self.0 != rhs.0)
    }
}

#[auto_ops]
impl<'a, 'b> Sub<&'b F2> for &'a F2 {
    type Output = F2;
    fn sub(self, rhs: &'b F2) -> Self::Output {
        Add::add(self, rhs)
    }
}

#[auto_ops]
impl<'a, 'b> Mul<&'b F2> for &'a F2 {
    type Output = F2;
    fn mul(self, rhs: &'b F2) -> Self::Output {
        F2(self.0 && rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init() {
        assert!(F2::from(0).is_zero());
        assert!(F2::from(1).is_one());
        assert!(F2::from(2).is_zero());
        assert!(F2::from(-1).is_one());
    }

    #[test]
    fn display() {
        assert_eq!(F2::zero().to_string(), "0");
        assert_eq!(F2::one().to_string(), "1");
    }

    #[test]
    fn add() {
        assert_eq!(F2::from(2) + F2::from(4), F2::from(0));
        assert_eq!(F2::from(3) + F2::from(4), F2::from(1));
        assert_eq!(F2::from(3) + F2::from(5), F2::from(0));
    }

    #[test]
    fn add_assign() {
        let mut a = F2::from(3);
        a += F2::from(4);
        assert_eq!(a, F2::from(1));
    }

    #[test]
    fn neg() {
        let a = F2::from(3);
        assert_eq!(-a, a);
    }

    #[test]
    fn sub() {
        assert_eq!(F2::from(3) - F2::from(5), F2::from(0));
        assert_eq!(F2::from(3) - F2::from(4), F2::from(1));
    }

    #[test]
    fn mul() {
        assert_eq!(F2::from(3) * F2::from(4), F2::from(0));
        assert_eq!(F2::from(1) * F2::from(5), F2::from(1));
    }

    #[test]
    fn mul_assign() {
        let mut a = F2::from(3);
        a *= F2::from(4);
        assert_eq!(a, F2::from(0));
    }
}
