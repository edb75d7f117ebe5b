use super::{Comma, Formatter, ToSql};

use crate::stmt::{Count, Insert, InsertRow, Statement};

impl ToSql for &Statement {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Statement::Count(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &Insert {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "INSERT INTO");

        for row in &self.rows {
            fmt!(f, " " row);
        }
    }
}

impl ToSql for &InsertRow {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, self.table.as_str());

        if let Some(using) = &self.using {
            fmt!(f, " USING " using.super_table.as_str() " TAGS (" Comma(&using.tags) ")");
        }

        fmt!(f, " VALUES (" Comma(&self.values) ")");
    }
}

impl ToSql for &Count {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(
            f,
            "SELECT COUNT(*) AS " Count::COLUMN
            " FROM (" self.query.as_str() ") AS " Count::ALIAS
        );
    }
}
