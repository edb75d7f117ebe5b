use crate::Serializer;

use tdorm_core::{stmt::Value, Error, Result};

/// Substitutes each `?` placeholder in `sql` with the literal rendering of
/// the corresponding argument.
///
/// Placeholders inside single- or double-quoted text are left alone. With no
/// arguments the statement is returned as is.
///
/// ```
/// use tdorm_core::stmt::Value;
///
/// let sql = tdorm_sql::interpolate(
///     "SELECT * FROM meters WHERE location = ? AND voltage > ?",
///     &[Value::from("north"), Value::from(200)],
/// )
/// .unwrap();
///
/// assert_eq!(sql, "SELECT * FROM meters WHERE location = 'north' AND voltage > 200");
/// ```
pub fn interpolate(sql: &str, args: &[Value]) -> Result<String> {
    if args.is_empty() {
        return Ok(sql.to_string());
    }

    let placeholders = placeholders(sql);
    if placeholders.len() != args.len() {
        return Err(Error::argument_count(placeholders.len(), args.len()));
    }

    let serializer = Serializer::tdengine();
    let mut ret = String::with_capacity(sql.len());
    let mut last = 0;

    for (pos, arg) in placeholders.into_iter().zip(args) {
        ret.push_str(&sql[last..pos]);
        ret.push_str(&serializer.literal(arg));
        last = pos + 1;
    }

    ret.push_str(&sql[last..]);
    Ok(ret)
}

/// Byte offsets of every `?` outside quoted text.
fn placeholders(sql: &str) -> Vec<usize> {
    let mut ret = vec![];
    let mut quote = None;
    let mut escaped = false;

    for (pos, ch) in sql.char_indices() {
        match quote {
            Some(_) if escaped => escaped = false,
            Some(_) if ch == '\\' => escaped = true,
            Some(q) if ch == q => quote = None,
            Some(_) => {}
            None => match ch {
                '\'' | '"' => quote = Some(ch),
                '?' => ret.push(pos),
                _ => {}
            },
        }
    }

    ret
}
