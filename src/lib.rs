// Library root
// -----------
// This crate loads sample users and books into the library API. The
// binary (`main.rs`) only parses flags, sets up logging and calls
// `cli::run`.
//
// Module responsibilities:
// - `api`: blocking HTTP client for the library backend and the
//   `LibraryApi` trait the rest of the crate talks to.
// - `models`: JSON records exchanged with the backend.
// - `samples`: the fixed sample users and books.
// - `seed`: generic idempotent seeding keyed by a natural identifier.
// - `probe`: waits for the API to come up.
// - `summary`: counts what the library holds after seeding.
// - `ui`: human-readable output.
// - `cli`: flags and the end-to-end run.
pub mod api;
pub mod cli;
pub mod models;
pub mod probe;
pub mod samples;
pub mod seed;
pub mod summary;
pub mod ui;
