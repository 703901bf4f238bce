use crate::collection::Collection;
use crate::error::StoreResult;
use rusqlite::Connection;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Handle to a SQLite-backed document store.
///
/// Cheap to clone; all clones share one connection behind a mutex. SQLite
/// serializes writers anyway, so a single guarded connection keeps the
/// concurrency story simple without losing anything this workload needs.
#[derive(Clone)]
pub struct DocumentStore {
    conn: Arc<Mutex<Connection>>,
}

impl DocumentStore {
    /// Open (or create) a document store at the given path.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        debug!(path = %path.display(), "opened document store");
        Ok(Self::from_connection(conn))
    }

    /// Open an in-memory store. Contents vanish when the last clone drops.
    pub fn open_in_memory() -> StoreResult<Self> {
        Ok(Self::from_connection(Connection::open_in_memory()?))
    }

    fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Access a named collection, creating its backing table if needed.
    ///
    /// `key_field` names the document field whose string value is the unique
    /// key of the collection (e.g. `isbn` for books).
    pub fn collection<T>(&self, name: &str, key_field: &str) -> StoreResult<Collection<T>>
    where
        T: Serialize + DeserializeOwned,
    {
        {
            let conn = self.conn.lock().expect("store connection mutex poisoned");
            conn.execute(
                &format!(
                    "CREATE TABLE IF NOT EXISTS {name} (
                         id   INTEGER PRIMARY KEY AUTOINCREMENT,
                         key  TEXT NOT NULL UNIQUE,
                         data TEXT NOT NULL
                     )"
                ),
                [],
            )?;
        }
        debug!(collection = name, key_field, "collection ready");
        Ok(Collection::new(Arc::clone(&self.conn), name, key_field))
    }
}
