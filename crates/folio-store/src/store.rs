use std::path::Path;

use rusqlite::{Connection, params};

use folio_core::Theme;

use crate::error::Result;
use crate::schema;

const THEME_KEY: &str = "theme";

/// SQLite-backed preference store.
///
/// The only state the portfolio persists anywhere is what lives here: a
/// small key/value table, currently holding the theme flag and the schema
/// version. Callers hold the store by reference; nothing reads ambient
/// globals.
pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        schema::initialize(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        schema::initialize(&conn)?;
        Ok(Self { conn })
    }

    // --- Raw preferences ---

    pub fn get_preference(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM preferences WHERE key = ?1")?;
        let result = stmt.query_row([key], |row| row.get(0)).ok();
        Ok(result)
    }

    pub fn set_preference(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO preferences (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        tracing::debug!("preference set: {key} = {value}");
        Ok(())
    }

    // --- Theme ---

    /// The persisted theme, or `default` when nothing (or something
    /// unrecognized) is stored. `default` is the host's system preference.
    pub fn theme(&self, default: Theme) -> Result<Theme> {
        Ok(match self.get_preference(THEME_KEY)? {
            Some(value) => Theme::parse_or(&value, default),
            None => default,
        })
    }

    pub fn set_theme(&self, theme: Theme) -> Result<()> {
        self.set_preference(THEME_KEY, theme.as_str())
    }

    /// Flip the current theme and persist the result.
    pub fn toggle_theme(&self, default: Theme) -> Result<Theme> {
        let next = self.theme(default)?.toggled();
        self.set_theme(next)?;
        Ok(next)
    }
}
