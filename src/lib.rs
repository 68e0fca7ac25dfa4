//! massif - a small, strict, in-memory mountain catalogue service
//!
//! One HTTP resource (mountains), one lock around the whole collection,
//! no persistence. The crate ships the service, a companion HTTP client,
//! and a CLI that runs either.

pub mod cli;
pub mod client;
pub mod http_server;
pub mod model;
pub mod store;
pub mod validation;
