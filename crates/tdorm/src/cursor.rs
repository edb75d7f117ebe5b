use crate::{Columns, FromRow, Result};

use tdorm_core::driver::Rows;

use std::marker::PhantomData;

/// Forward-only iteration over a query result, loading each row as `T`.
pub struct Cursor<T> {
    columns: Columns,
    rows: Rows,
    _p: PhantomData<fn() -> T>,
}

pub trait FromCursor<A>: Extend<A> + Default {}

impl<A, T: Extend<A> + Default> FromCursor<A> for T {}

impl<T: FromRow> Cursor<T> {
    pub(crate) fn new(rows: Rows) -> Self {
        Self {
            columns: Columns::new(rows.columns().to_vec()),
            rows,
            _p: PhantomData,
        }
    }

    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    pub fn next(&mut self) -> Option<Result<T>> {
        Some(match self.rows.next()? {
            Ok(row) => Ok(T::from_row(&self.columns, row)),
            Err(e) => Err(e),
        })
    }

    /// Collect all values
    pub fn collect<B>(mut self) -> Result<B>
    where
        B: FromCursor<T>,
    {
        let mut ret = B::default();

        while let Some(res) = self.next() {
            ret.extend(Some(res?));
        }

        Ok(ret)
    }
}

impl<T> std::fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("columns", &self.columns.names())
            .finish_non_exhaustive()
    }
}
