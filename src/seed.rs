// Idempotent seeding: read what the API already stores, then submit only
// the samples whose natural key is not present yet. Users and books go
// through the same procedure; `SeedTarget` supplies the endpoint, the key
// and the display text for each collection.

use std::collections::HashSet;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::api::{ApiError, LibraryApi, BOOKS_PATH, USERS_PATH};
use crate::models::{Book, NewBook, NewUser, User};

/// A collection the seeder knows how to populate.
pub trait SeedTarget {
    /// Body submitted for creation.
    type Sample: Serialize;
    /// Record the API returns, both when listing and after creation.
    type Record: DeserializeOwned;

    const PATH: &'static str;
    /// Heading printed before the collection is seeded.
    const HEADING: &'static str;
    /// Plural noun used in the closing count line.
    const LABEL: &'static str;

    fn sample_key(sample: &Self::Sample) -> &str;
    fn sample_name(sample: &Self::Sample) -> &str;
    fn record_key(record: &Self::Record) -> &str;

    /// One-line description of a freshly created record.
    fn describe(record: &Self::Record) -> String;
}

/// Library users, keyed by identification document.
pub struct Users;

impl SeedTarget for Users {
    type Sample = NewUser;
    type Record = User;

    const PATH: &'static str = USERS_PATH;
    const HEADING: &'static str = "👤  Insertando usuarios …";
    const LABEL: &'static str = "usuarios";

    fn sample_key(sample: &NewUser) -> &str {
        sample.identification_document
    }

    fn sample_name(sample: &NewUser) -> &str {
        sample.name
    }

    fn record_key(record: &User) -> &str {
        &record.identification_document
    }

    fn describe(record: &User) -> String {
        format!("[{:>3}] {}", record.id, record.name)
    }
}

/// Catalogue books, keyed by ISBN.
pub struct Books;

impl SeedTarget for Books {
    type Sample = NewBook;
    type Record = Book;

    const PATH: &'static str = BOOKS_PATH;
    const HEADING: &'static str = "📚  Insertando libros …";
    const LABEL: &'static str = "libros";

    fn sample_key(sample: &NewBook) -> &str {
        sample.isbn
    }

    fn sample_name(sample: &NewBook) -> &str {
        sample.title
    }

    fn record_key(record: &Book) -> &str {
        &record.isbn
    }

    fn describe(record: &Book) -> String {
        format!(
            "[{:>3}] {}  ({} disp.)",
            record.id, record.title, record.available_quantity
        )
    }
}

/// What happened to one sample record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<R> {
    Created(R),
    /// A record with the same key already existed.
    Skipped,
    /// The API rejected the record; holds the reported reason.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedEntry<R> {
    pub name: String,
    pub key: String,
    pub outcome: Outcome<R>,
}

/// Per-record outcomes of one seeding pass, in sample order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport<R> {
    pub entries: Vec<SeedEntry<R>>,
}

impl<R> SeedReport<R> {
    /// Records the API created during this pass.
    pub fn created(&self) -> impl Iterator<Item = &R> {
        self.entries.iter().filter_map(|e| match &e.outcome {
            Outcome::Created(record) => Some(record),
            _ => None,
        })
    }

    pub fn created_count(&self) -> usize {
        self.created().count()
    }

    pub fn skipped_count(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Skipped))
    }

    pub fn failed_count(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed(_)))
    }

    fn count(&self, pred: impl Fn(&Outcome<R>) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.outcome)).count()
    }
}

/// Seed `samples` into collection `T`.
///
/// A creation the API rejects (any non-success status) is recorded as
/// `Outcome::Failed` and the remaining samples are still attempted. Losing
/// the connection or getting an unreadable body, whether while listing or
/// creating, ends the pass with that error.
pub fn seed<T, A>(api: &A, samples: &[T::Sample]) -> Result<SeedReport<T::Record>, ApiError>
where
    T: SeedTarget,
    A: LibraryApi,
{
    let existing: Vec<T::Record> = api.fetch_all(T::PATH)?;
    let mut known: HashSet<String> = existing
        .iter()
        .map(|record| T::record_key(record).to_string())
        .collect();
    debug!(path = T::PATH, existing = known.len(), "loaded existing keys");

    let mut entries = Vec::with_capacity(samples.len());
    for sample in samples {
        let key = T::sample_key(sample);
        let name = T::sample_name(sample);

        let outcome = if known.contains(key) {
            debug!(path = T::PATH, %key, "already present, skipping");
            Outcome::Skipped
        } else {
            match api.create::<_, T::Record>(T::PATH, sample) {
                Ok(record) => {
                    info!(path = T::PATH, %key, %name, "created");
                    known.insert(key.to_string());
                    Outcome::Created(record)
                }
                Err(err @ ApiError::Status { .. }) => {
                    warn!(path = T::PATH, %key, %name, error = %err, "create rejected");
                    Outcome::Failed(err.to_string())
                }
                Err(err) => return Err(err),
            }
        };

        entries.push(SeedEntry {
            name: name.to_string(),
            key: key.to_string(),
            outcome,
        });
    }

    Ok(SeedReport { entries })
}
