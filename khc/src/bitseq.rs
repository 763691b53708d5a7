use core::fmt;
use std::fmt::{Debug, Display};
use std::ops::Index;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Bit {
    #[default]
    Bit0,
    Bit1
}

impl Bit {
    pub fn is_zero(&self) -> bool {
        self == &Bit::Bit0
    }

    pub fn is_one(&self) -> bool {
        self == &Bit::Bit1
    }

    pub fn as_u64(&self) -> u64 {
        if self.is_zero() { 0 } else { 1 }
    }
}

impl From<bool> for Bit {
    fn from(b: bool) -> Self {
        if b {
            Bit::Bit1
        } else {
            Bit::Bit0
        }
    }
}

macro_rules! impl_bit_from_int {
    ($t:ty) => {
        impl From<$t> for Bit {
            fn from(val: $t) -> Self {
                match val {
                    0 => Bit::Bit0,
                    1 => Bit::Bit1,
                    _ => panic!()
                }
            }
        }
    };
}

impl_bit_from_int!(u8);
impl_bit_from_int!(u32);
impl_bit_from_int!(u64);
impl_bit_from_int!(usize);
impl_bit_from_int!(i32);
impl_bit_from_int!(i64);

impl Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bit::Bit0 => f.write_str("0"),
            Bit::Bit1 => f.write_str("1")
        }
    }
}

impl Debug for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

// A fixed-length word of bits, bit i stored at `val >> i`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BitSeq {
    val: u64,
    len: usize
}

impl BitSeq {
    // one short of u64 so that `1 << len` never overflows.
    pub const MAX_LEN: usize = 63;

    pub fn new(val: u64, len: usize) -> Self {
        assert!(len <= Self::MAX_LEN);
        assert!(val < (1 << len));
        Self { val, len }
    }

    pub fn empty() -> Self {
        Self::new(0, 0)
    }

    pub fn zeros(len: usize) -> Self {
        Self::new(0, len)
    }

    pub fn ones(len: usize) -> Self {
        let val = (1 << len) - 1;
        Self::new(val, len)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_u64(&self) -> u64 {
        self.val
    }

    pub fn weight(&self) -> usize {
        self.val.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = Bit> {
        let val = self.val;
        (0..self.len).map(move |i|
            Bit::from((val >> i) & 1)
        )
    }

    pub fn set(&mut self, i: usize, b: Bit) {
        assert!(i < self.len);
        if b.is_zero() {
            self.val &= !(1 << i);
        } else {
            self.val |= 1 << i;
        }
    }

    pub fn set_0(&mut self, i: usize) {
        self.set(i, Bit::Bit0)
    }

    pub fn set_1(&mut self, i: usize) {
        self.set(i, Bit::Bit1)
    }

    pub fn push(&mut self, b: Bit) {
        assert!(self.len < Self::MAX_LEN);
        if b.is_one() {
            self.val |= 1 << self.len;
        }
        self.len += 1;
    }

    pub fn edit<F>(&self, f: F) -> Self
    where F: FnOnce(&mut BitSeq) {
        let mut copy = *self;
        f(&mut copy);
        copy
    }

    pub fn generate(len: usize) -> Vec<BitSeq> {
        assert!(len <= Self::MAX_LEN);
        (0 .. 1 << len).map(|v| Self::new(v, len)).collect()
    }
}

impl<T, const N: usize> From<[T; N]> for BitSeq
where Bit: From<T> {
    fn from(value: [T; N]) -> Self {
        Self::from_iter(value)
    }
}

impl<T> FromIterator<T> for BitSeq
where Bit: From<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut val = 0;
        let mut len = 0;
        for b in iter.into_iter() {
            if Bit::from(b).is_one() {
                val |= 1 << len;
            }
            len += 1;
        }
        Self::new(val, len)
    }
}

impl Index<usize> for BitSeq {
    type Output = Bit;

    fn index(&self, i: usize) -> &Self::Output {
        assert!(i < self.len);
        if (self.val >> i) & 1 == 0 {
            &Bit::Bit0
        } else {
            &Bit::Bit1
        }
    }
}

impl Display for BitSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.iter() {
            Display::fmt(&b, f)?;
        }
        Ok(())
    }
}

impl Debug for BitSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl PartialOrd for BitSeq {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// order priority: len > weight > val.
impl Ord for BitSeq {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.len.cmp(&other.len).then_with(||
            self.weight().cmp(&other.weight())
        ).then_with(||
            self.val.cmp(&other.val)
        )
    }
}

#[cfg(test)]
mod tests {
    use Bit::*;
    use itertools::Itertools;
    use super::*;

    #[test]
    fn new() {
        let b = BitSeq::new(0b10110, 5);
        assert_eq!(b.val, 22);
        assert_eq!(b.len, 5);
    }

    #[test]
    fn from_arr() {
        let b = BitSeq::from([1,0,1,1,0]);
        assert_eq!(b, BitSeq::new(0b01101, 5));
    }

    #[test]
    fn weight() {
        let b = BitSeq::new(0b10110, 5);
        assert_eq!(b.weight(), 3);

        let b = BitSeq::zeros(5);
        assert_eq!(b.weight(), 0);

        let b = BitSeq::ones(5);
        assert_eq!(b.weight(), 5);
    }

    #[test]
    fn index() {
        let b = BitSeq::new(0b01101, 5);
        assert_eq!(b.len(), 5);
        assert_eq!(b[0], Bit1);
        assert_eq!(b[1], Bit0);
        assert_eq!(b[2], Bit1);
        assert_eq!(b[3], Bit1);
        assert_eq!(b[4], Bit0);
    }

    #[test]
    fn iter() {
        let b = BitSeq::new(0b01101, 5);
        let v = b.iter().collect_vec();
        assert_eq!(v, vec![Bit1, Bit0, Bit1, Bit1, Bit0])
    }

    #[test]
    fn to_string() {
        let b = BitSeq::new(0b01101, 5);
        assert_eq!(b.to_string(), "10110");
    }

    #[test]
    fn set() {
        let mut b = BitSeq::new(0b01101, 5);

        b.set(1, Bit1);
        assert_eq!(b, BitSeq::new(0b01111, 5));

        b.set(0, Bit0);
        assert_eq!(b, BitSeq::new(0b01110, 5));
    }

    #[test]
    fn push() {
        let mut b = BitSeq::new(0b01101, 5);

        b.push(Bit0);
        assert_eq!(b, BitSeq::new(0b001101, 6));

        b.push(Bit1);
        assert_eq!(b, BitSeq::new(0b1001101, 7));
    }

    #[test]
    fn edit() {
        let b = BitSeq::new(0b10110, 5);
        let c = b.edit(|b| b.set_1(0));
        assert_eq!(c, BitSeq::new(0b10111, 5))
    }

    #[test]
    fn generate() {
        let v = BitSeq::generate(2);
        assert_eq!(v, vec![
            BitSeq::new(0b00, 2),
            BitSeq::new(0b01, 2),
            BitSeq::new(0b10, 2),
            BitSeq::new(0b11, 2),
        ]);
    }

    #[test]
    fn ord() {
        let b0 = BitSeq::new(0b0,  1);
        let b1 = BitSeq::new(0b00, 2);

        assert!(b0 < b1);

        let b0 = BitSeq::new(0b110, 3);
        let b1 = BitSeq::new(0b100, 3);
        let b2 = BitSeq::new(0b011, 3);

        assert!(b0 > b1);
        assert!(b1 < b2);
        assert!(b0 > b2);
    }
}
