pub mod coerce;

mod json;
pub use json::Json;

mod num;

mod primitive;
pub use primitive::Primitive;

mod value;
pub use value::Value;

mod value_chrono;
