use std::str::FromStr;

use rusqlite::types::Type;
use rusqlite::Row;

/// Read a TEXT column and parse it, reporting parse failures as conversion errors.
pub(crate) fn parse_text<T>(row: &Row<'_>, column: &str) -> rusqlite::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw: String = row.get(column)?;
    let idx = row.as_ref().column_index(column)?;
    raw.parse()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
