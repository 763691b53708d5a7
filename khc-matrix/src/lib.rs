mod dense;
pub use dense::Mat;
