// Wire records exchanged with the library API. Field names follow the
// backend's camelCase JSON; anything the backend omits falls back to its
// default so older or newer backends still decode.

use serde::{Deserialize, Serialize};

/// User as returned by `GET/POST /api/users`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub identification_document: String,
    pub email: String,
    pub active_loans: i32,
}

/// Book as returned by `GET/POST /api/books`. `available_quantity` is
/// derived by the backend from the active loans.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub total_quantity: i32,
    pub available_quantity: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoanStatus {
    Active,
    Returned,
}

/// Loan as returned by `GET /api/loans`. Dates are not needed here and
/// are left undecoded.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Loan {
    pub id: i64,
    pub user_id: Option<i64>,
    pub book_id: Option<i64>,
    pub user_name: Option<String>,
    pub book_title: Option<String>,
    pub status: Option<LoanStatus>,
}

impl Loan {
    pub fn is_active(&self) -> bool {
        self.status == Some(LoanStatus::Active)
    }
}

/// Body of `POST /api/users`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: &'static str,
    pub identification_document: &'static str,
    pub email: &'static str,
}

/// Body of `POST /api/books`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    pub title: &'static str,
    pub author: &'static str,
    pub isbn: &'static str,
    pub total_quantity: i32,
}
