mod diagram;
mod crossing;
mod circle;

pub use diagram::{Diagram, Edge, State, XCode};
pub use crossing::Crossing;
pub use circle::Circle;
