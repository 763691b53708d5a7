mod alg;
mod annular;
mod complex;
mod cube;
mod error;

pub use alg::{annular_merge, annular_split, merge_label, split_labels, Label};
pub use annular::{AnnCube, FaceSet};
pub use cube::{KhCube, KhCubeEdge, KhCubeVertex};
pub use error::KhError;
