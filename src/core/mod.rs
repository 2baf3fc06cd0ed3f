//! Core library modules for bridge-triage
//!
//! Query layer, dispatch heuristic and mutation operations over an
//! in-memory bridge table, plus the ingestion that builds it.

pub mod assign;
pub mod config;
pub mod error;
pub mod geo;
pub mod ingest;
pub mod query;
pub mod record;
pub mod table;

#[cfg(test)]
pub(crate) mod test_data;
