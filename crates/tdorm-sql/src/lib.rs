mod interpolate;
pub use interpolate::interpolate;

pub mod serializer;
pub use serializer::Serializer;

pub mod stmt;
pub use stmt::{Count, Insert, Statement};
