// Text cleanup shared by every matching pipeline.

pub mod normalize;

pub use normalize::Normalizer;
