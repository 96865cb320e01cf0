// Read-only snapshot of how much data the library holds after seeding.

use serde::de::IgnoredAny;

use crate::api::{ApiError, LibraryApi, BOOKS_PATH, LOANS_PATH, USERS_PATH};
use crate::models::Loan;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub users: usize,
    pub books: usize,
    pub loans: usize,
    pub active_loans: usize,
}

impl Summary {
    /// Fetch the three collections and count them. Any request failure is
    /// returned as is.
    pub fn fetch<A: LibraryApi>(api: &A) -> Result<Self, ApiError> {
        let users = api.fetch_all::<IgnoredAny>(USERS_PATH)?.len();
        let books = api.fetch_all::<IgnoredAny>(BOOKS_PATH)?.len();
        let loans: Vec<Loan> = api.fetch_all(LOANS_PATH)?;
        Ok(Summary {
            users,
            books,
            loans: loans.len(),
            active_loans: loans.iter().filter(|loan| loan.is_active()).count(),
        })
    }
}
