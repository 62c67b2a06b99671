use crate::domain::{EstateType, Listing, NewListing};
use crate::errors::ServerError;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::{params, Connection};

impl ToSql for EstateType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for EstateType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let raw = value.as_str()?;
        raw.parse()
            .map_err(|e: String| FromSqlError::Other(e.into()))
    }
}

/// Inserts one listing in its own transaction. If the insert fails (for example
/// the type CHECK rejects it) the transaction is rolled back on drop and nothing
/// from this call is kept.
pub fn insert_listing(conn: &mut Connection, listing: &NewListing) -> Result<i64, ServerError> {
    let tx = conn.transaction()?;

    tx.execute(
        "INSERT INTO ads (title, address, price, image_url, type) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            listing.title,
            listing.address,
            listing.price,
            listing.image_url,
            listing.estate_type,
        ],
    )?;
    let id = tx.last_insert_rowid();

    tx.commit()?;
    Ok(id)
}

/// All rows, in whatever order the store returns them.
pub fn all_listings(conn: &Connection) -> Result<Vec<Listing>, ServerError> {
    let mut stmt = conn.prepare("SELECT id, title, address, price, image_url, type FROM ads")?;

    let rows = stmt.query_map([], |row| {
        Ok(Listing {
            id: row.get(0)?,
            title: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            address: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            price: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            image_url: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
            estate_type: row.get(5)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
