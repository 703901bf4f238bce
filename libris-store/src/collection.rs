use crate::error::{StoreError, StoreResult};
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex, MutexGuard};

/// Direction of a field sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn keyword(self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

/// A sort over one document field.
///
/// Ties are always broken by insertion order, so equal field values keep
/// their native sequence in either direction (stable sort).
#[derive(Debug, Clone)]
pub struct Sort {
    pub field: String,
    pub direction: SortDirection,
}

impl Sort {
    #[must_use]
    pub fn by(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }
}

/// A typed view over one collection table.
///
/// Documents are serialized to JSON on insert and deserialized on read.
/// Field arguments refer to top-level JSON field names of the serialized
/// form (`title`, `isbn`, `authors`, ...).
pub struct Collection<T> {
    conn: Arc<Mutex<Connection>>,
    name: String,
    key_field: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            conn: Arc::clone(&self.conn),
            name: self.name.clone(),
            key_field: self.key_field.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned,
{
    pub(crate) fn new(conn: Arc<Mutex<Connection>>, name: &str, key_field: &str) -> Self {
        Self {
            conn,
            name: name.to_string(),
            key_field: key_field.to_string(),
            _marker: PhantomData,
        }
    }

    /// Name of this collection.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().expect("store connection mutex poisoned")
    }

    /// Insert a document, returning the stored value.
    ///
    /// Fails with [`StoreError::DuplicateKey`] when the collection already
    /// holds a document with the same key-field value.
    pub fn insert(&self, entity: &T) -> StoreResult<T>
    where
        T: Clone,
    {
        let doc = serde_json::to_value(entity)?;
        let key = doc
            .get(&self.key_field)
            .and_then(|v| v.as_str())
            .ok_or_else(|| StoreError::MissingKeyField {
                collection: self.name.clone(),
                field: self.key_field.clone(),
            })?
            .to_string();

        let result = self.conn().execute(
            &format!("INSERT INTO {} (key, data) VALUES (?1, ?2)", self.name),
            params![key, doc.to_string()],
        );
        match result {
            Ok(_) => Ok(entity.clone()),
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Err(StoreError::DuplicateKey {
                    collection: self.name.clone(),
                    key,
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Return every document, in insertion order or sorted by a field.
    pub fn find_all(&self, sort: Option<&Sort>) -> StoreResult<Vec<T>> {
        let sql = match sort {
            None => format!("SELECT data FROM {} ORDER BY id ASC", self.name),
            Some(sort) => format!(
                "SELECT data FROM {} ORDER BY json_extract(data, ?1) {}, id ASC",
                self.name,
                sort.direction.keyword()
            ),
        };
        let field_path = sort.map(|sort| format!("$.{}", sort.field));
        let conn = self.conn();
        let mut stmt = conn.prepare(&sql)?;
        let mut rows = match &field_path {
            None => stmt.query([])?,
            Some(path) => stmt.query(params![path])?,
        };
        let mut entities = Vec::new();
        while let Some(row) = rows.next()? {
            let data: String = row.get(0)?;
            entities.push(serde_json::from_str(&data)?);
        }
        Ok(entities)
    }

    /// Return the single document whose field equals `value` exactly.
    pub fn find_one_by_field(&self, field: &str, value: &str) -> StoreResult<Option<T>> {
        let conn = self.conn();
        let data: Option<String> = conn
            .query_row(
                &format!(
                    "SELECT data FROM {} WHERE json_extract(data, ?1) = ?2 LIMIT 1",
                    self.name
                ),
                params![format!("$.{field}"), value],
                |row| row.get(0),
            )
            .optional()?;
        match data {
            Some(data) => Ok(Some(serde_json::from_str(&data)?)),
            None => Ok(None),
        }
    }

    /// Return every document whose array field contains `token` as an exact
    /// element. This is element equality, not substring search.
    pub fn find_all_by_field_containing(&self, field: &str, token: &str) -> StoreResult<Vec<T>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(&format!(
            "SELECT data FROM {name}
             WHERE EXISTS (
                 SELECT 1 FROM json_each({name}.data, ?1) AS element
                 WHERE element.value = ?2
             )
             ORDER BY id ASC",
            name = self.name
        ))?;
        let rows = stmt.query_map(params![format!("$.{field}"), token], |row| {
            row.get::<_, String>(0)
        })?;
        let mut entities = Vec::new();
        for row in rows {
            entities.push(serde_json::from_str(&row?)?);
        }
        Ok(entities)
    }

    /// Remove every document, returning the number removed.
    pub fn delete_all(&self) -> StoreResult<usize> {
        let removed = self
            .conn()
            .execute(&format!("DELETE FROM {}", self.name), [])?;
        Ok(removed)
    }
}
