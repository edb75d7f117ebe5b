mod count;
pub use count::Count;

mod insert;
pub use insert::{Insert, InsertRow, Using};

/// A statement the serializer knows how to render.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Count(Count),
    Insert(Insert),
}

impl From<Count> for Statement {
    fn from(value: Count) -> Self {
        Self::Count(value)
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
