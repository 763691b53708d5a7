mod f2;

pub use f2::F2;

pub mod bitseq;
pub mod union_find;
pub mod util;
