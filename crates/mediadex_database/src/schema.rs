//! Shard table bootstrap.

use diesel::pg::PgConnection;
use diesel::prelude::*;
use mediadex_error::{StoreError, StoreErrorKind};

/// Check that `name` can be spliced into SQL as a table identifier.
///
/// Accepts ASCII letters, digits and underscores, not starting with a digit,
/// at most 63 bytes (the PostgreSQL identifier limit).
///
/// # Examples
///
/// ```
/// use mediadex_database::validate_table_name;
///
/// assert!(validate_table_name("telegram_files").is_ok());
/// assert!(validate_table_name("files; DROP TABLE x").is_err());
/// ```
pub fn validate_table_name(name: &str) -> Result<(), StoreError> {
    let valid = !name.is_empty()
        && name.len() <= 63
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');

    if valid {
        Ok(())
    } else {
        Err(StoreError::new(StoreErrorKind::InvalidConfig(format!(
            "Invalid table name: {:?}",
            name
        ))))
    }
}

/// Create the shard table and its name index if they do not exist.
#[tracing::instrument(skip(conn))]
pub fn ensure_schema(conn: &mut PgConnection, table: &str) -> Result<(), StoreError> {
    validate_table_name(table)?;

    let create_table = format!(
        "CREATE TABLE IF NOT EXISTS {table} (
            seq BIGSERIAL NOT NULL,
            file_id TEXT PRIMARY KEY,
            file_ref TEXT,
            file_name TEXT NOT NULL,
            file_size BIGINT NOT NULL,
            file_type TEXT,
            mime_type TEXT,
            caption TEXT
        )"
    );
    diesel::sql_query(&create_table).execute(conn)?;

    let create_index =
        format!("CREATE INDEX IF NOT EXISTS {table}_file_name_idx ON {table} (file_name)");
    diesel::sql_query(&create_index).execute(conn)?;

    tracing::debug!(table, "Shard schema ready");
    Ok(())
}
