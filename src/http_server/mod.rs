//! # HTTP Server Module
//!
//! Axum-based transport layer for the mountain store.
//!
//! All semantics live in [`crate::store`]; this module only parses
//! method/path/query into store calls and translates store outcomes into
//! status codes:
//!
//! | Store outcome | Status |
//! |---|---|
//! | Insert: empty batch | 400 |
//! | Insert: batch overlaps stored data | 409 |
//! | Insert: success | 200, no body |
//! | Query: invalid filter | 200, `[]` |
//! | Query: valid, zero matches | 204 |
//! | Query: valid, matches | 200, JSON array |
//! | Update: invalid payload | 400 |
//! | Update/Delete: unknown id | 404 |
//! | Update/Delete: success | 200, no body |

pub mod config;
pub mod errors;
pub mod mountain_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::ApiError;
pub use server::HttpServer;
