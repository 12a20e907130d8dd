#![deny(clippy::semicolon_if_nothing_returned)]
#![deny(clippy::unnecessary_semicolon)]
#![deny(clippy::explicit_iter_loop)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::unwrap_or_default)]

pub mod database;
pub mod engine;
pub mod params;
pub mod query;
pub mod repo;
pub mod types;
pub mod utils;

pub use database::Database;

#[cfg(test)]
pub(crate) mod testing;
