// Job Board Dashboard - API Core
//
// Reads job postings from a Firestore collection, cleans and filters them,
// and serves them as a card grid (HTML) and as JSON.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
