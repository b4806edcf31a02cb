//! Numeral repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the `numerals` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - The stored `value` column always matches the stored numeral text.
//! - Rows whose text no longer validates, or whose value disagrees with the
//!   text, are reported as `InvalidData` instead of being repaired.

use crate::db::DbError;
use crate::model::error::NumeralError;
use crate::model::numeral::RomanNumeral;
use log::warn;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of one stored numeral.
pub type NumeralId = Uuid;

const NUMERAL_SELECT_SQL: &str = "SELECT uuid, numeral, value FROM numerals";

pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(NumeralId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "numeral not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted numeral data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// A numeral together with its store identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumeralRecord {
    pub id: NumeralId,
    pub numeral: RomanNumeral,
}

/// Repository interface for numeral CRUD operations.
pub trait NumeralRepository {
    fn create_numeral(&self, numeral: &RomanNumeral) -> RepoResult<NumeralId>;
    fn update_numeral(&self, id: NumeralId, numeral: &RomanNumeral) -> RepoResult<()>;
    fn get_numeral(&self, id: NumeralId) -> RepoResult<Option<NumeralRecord>>;
    /// Lists stored numerals by ascending value, ties by id.
    fn list_numerals(&self) -> RepoResult<Vec<NumeralRecord>>;
    fn delete_numeral(&self, id: NumeralId) -> RepoResult<()>;
}

/// SQLite-backed numeral repository.
pub struct SqliteNumeralRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNumeralRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl NumeralRepository for SqliteNumeralRepository<'_> {
    fn create_numeral(&self, numeral: &RomanNumeral) -> RepoResult<NumeralId> {
        let id = Uuid::new_v4();
        self.conn.execute(
            "INSERT INTO numerals (uuid, numeral, value) VALUES (?1, ?2, ?3);",
            params![id.to_string(), numeral.numeral(), numeral.value()],
        )?;
        Ok(id)
    }

    fn update_numeral(&self, id: NumeralId, numeral: &RomanNumeral) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE numerals
             SET
                numeral = ?1,
                value = ?2,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE uuid = ?3;",
            params![numeral.numeral(), numeral.value(), id.to_string()],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }

    fn get_numeral(&self, id: NumeralId) -> RepoResult<Option<NumeralRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NUMERAL_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_numeral_row(row)?));
        }
        Ok(None)
    }

    fn list_numerals(&self) -> RepoResult<Vec<NumeralRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NUMERAL_SELECT_SQL} ORDER BY value ASC, uuid ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(parse_numeral_row(row)?);
        }
        Ok(records)
    }

    fn delete_numeral(&self, id: NumeralId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM numerals WHERE uuid = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }
}

fn parse_numeral_row(row: &Row<'_>) -> RepoResult<NumeralRecord> {
    let uuid_text: String = row.get("uuid")?;
    let id = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{uuid_text}` in numerals.uuid"))
    })?;

    let text: String = row.get("numeral")?;
    let numeral = RomanNumeral::parse(&text).map_err(|err: NumeralError| {
        warn!("event=numeral_row_rejected module=repo status=error uuid={id} error={err}");
        RepoError::InvalidData(format!("numerals.numeral for {id}: {err}"))
    })?;

    let stored_value: i64 = row.get("value")?;
    if stored_value != i64::from(numeral.value()) {
        warn!("event=numeral_row_rejected module=repo status=error uuid={id} error=value_mismatch");
        return Err(RepoError::InvalidData(format!(
            "numerals.value {stored_value} does not match `{}` ({}) for {id}",
            numeral.numeral(),
            numeral.value()
        )));
    }

    Ok(NumeralRecord { id, numeral })
}
