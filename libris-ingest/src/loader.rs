use crate::mappers;
use crate::records::{CATALOG_DELIMITER, Record, read_records};
use libris_model::{Author, Book, Magazine};
use libris_store::Collection;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Fixed file names of the three catalog sources inside the data directory.
pub const AUTHORS_SOURCE: &str = "autoren.csv";
pub const BOOKS_SOURCE: &str = "buecher.csv";
pub const MAGAZINES_SOURCE: &str = "zeitschriften.csv";

/// Paths of the three delimited source files.
#[derive(Debug, Clone)]
pub struct CatalogSources {
    pub authors: PathBuf,
    pub books: PathBuf,
    pub magazines: PathBuf,
}

impl CatalogSources {
    /// Resolve the fixed source file names inside a data directory.
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            authors: dir.join(AUTHORS_SOURCE),
            books: dir.join(BOOKS_SOURCE),
            magazines: dir.join(MAGAZINES_SOURCE),
        }
    }
}

/// Entities loaded per kind; `None` marks a kind whose load failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub authors: Option<usize>,
    pub books: Option<usize>,
    pub magazines: Option<usize>,
}

/// Batch loader that refreshes one collection per entity kind.
///
/// Each kind is loaded as wipe, parse, map, reinsert in parse order. The
/// sequence is not transactional: a crash mid-load leaves that kind
/// partially populated and the next startup reload is the recovery path.
pub struct CatalogLoader {
    authors: Collection<Author>,
    books: Collection<Book>,
    magazines: Collection<Magazine>,
    sources: CatalogSources,
}

impl CatalogLoader {
    #[must_use]
    pub fn new(
        authors: Collection<Author>,
        books: Collection<Book>,
        magazines: Collection<Magazine>,
        sources: CatalogSources,
    ) -> Self {
        Self {
            authors,
            books,
            magazines,
            sources,
        }
    }

    /// Load all three kinds, in the fixed order authors, books, magazines.
    ///
    /// A failure for one kind is logged and does not abort the others.
    pub fn load_all(&self) -> LoadReport {
        info!("loading catalog data from delimited sources");
        let report = LoadReport {
            authors: self.load_kind(&self.authors, &self.sources.authors, mappers::author_from_record),
            books: self.load_kind(&self.books, &self.sources.books, mappers::book_from_record),
            magazines: self.load_kind(
                &self.magazines,
                &self.sources.magazines,
                mappers::magazine_from_record,
            ),
        };
        info!("catalog load complete");
        report
    }

    fn load_kind<T>(
        &self,
        collection: &Collection<T>,
        source: &Path,
        map: impl Fn(&Record) -> T,
    ) -> Option<usize>
    where
        T: Serialize + DeserializeOwned + Clone,
    {
        let kind = collection.name();
        if let Err(e) = collection.delete_all() {
            error!(kind, error = %e, "failed to clear collection, skipping load");
            return None;
        }
        let records = match read_records(source, CATALOG_DELIMITER) {
            Ok(records) => records,
            Err(e) => {
                error!(kind, source = %source.display(), error = %e, "failed to parse source, skipping load");
                return None;
            }
        };
        let mut inserted = 0;
        for record in &records {
            if let Err(e) = collection.insert(&map(record)) {
                error!(kind, error = %e, "failed to insert entity, aborting load for this kind");
                return None;
            }
            inserted += 1;
        }
        info!(kind, count = inserted, "collection loaded");
        Some(inserted)
    }
}
