//! # Mountain Client
//!
//! Companion HTTP client for the mountain service. A thin caller: it issues
//! the service's requests and hands back status plus decoded records, with
//! transport failures surfaced as errors and never retried.

mod connector;
mod errors;

pub use connector::{ClientResponse, MountainConnector};
pub use errors::{ClientError, ClientResult};
