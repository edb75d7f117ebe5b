use super::{Formatter, ToSql};

/// A single-quoted string literal. Backslashes and single quotes are
/// backslash-escaped.
pub(super) struct Quoted<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Quoted<S> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push('\'');
        for ch in self.0.as_ref().chars() {
            if matches!(ch, '\\' | '\'') {
                f.dst.push('\\');
            }
            f.dst.push(ch);
        }
        f.dst.push('\'');
    }
}
