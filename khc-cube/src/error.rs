use derive_more::Display;
use khc_link::Circle;

/// Failures caused by invalid diagram or face input.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum KhError {
    #[display("edge {_0} is out of the supported range 1..=64")]
    EdgeOutOfRange(usize),

    #[display("at least the special face is required")]
    NoFaces,

    #[display("circle {_0} does not bound a region of the face lattice, check the face input")]
    InconsistentFaces(Circle),

    #[display("no annular split rule for puncture pattern ({_0}, {_1}, {_2})")]
    InvalidSplit(bool, bool, bool),
}

impl std::error::Error for KhError {}
