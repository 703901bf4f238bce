use libris_model::Order;
use libris_store::{Collection, Sort, SortDirection, StoreResult};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Query operations over one catalog collection.
///
/// Generic over the entity kind: `T` must serialize with `isbn`, `authors`
/// and `title` fields, which both [`Book`](libris_model::Book) and
/// [`Magazine`](libris_model::Magazine) do. The service adds no caching,
/// pagination or filtering of its own; membership and ordering semantics
/// are the store's.
#[derive(Clone)]
pub struct CatalogService<T> {
    collection: Collection<T>,
}

impl<T> CatalogService<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    #[must_use]
    pub fn new(collection: Collection<T>) -> Self {
        Self { collection }
    }

    /// Insert a new entity, returning the stored value.
    ///
    /// A duplicate ISBN propagates as
    /// [`StoreError::DuplicateKey`](libris_store::StoreError::DuplicateKey);
    /// it is never swallowed or retried here.
    pub fn create(&self, entity: &T) -> StoreResult<T> {
        self.collection.insert(entity)
    }

    /// Every entity, in the store's native order.
    pub fn find_all(&self) -> StoreResult<Vec<T>> {
        self.collection.find_all(None)
    }

    /// The entity with exactly this ISBN, if any.
    pub fn find_by_isbn(&self, isbn: &str) -> StoreResult<Option<T>> {
        self.collection.find_one_by_field("isbn", isbn)
    }

    /// Every entity whose author list contains the token verbatim.
    pub fn find_by_author(&self, author: &str) -> StoreResult<Vec<T>> {
        self.collection.find_all_by_field_containing("authors", author)
    }

    /// Every entity, sorted by title in the requested direction.
    pub fn find_ordered_by_title(&self, order: Order) -> StoreResult<Vec<T>> {
        let direction = match order {
            Order::Ascending => SortDirection::Ascending,
            Order::Descending => SortDirection::Descending,
        };
        self.collection.find_all(Some(&Sort::by("title", direction)))
    }
}
