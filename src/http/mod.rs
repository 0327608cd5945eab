//! HTTP layer: default headers, query serialization and the reqwest-backed
//! transport.

pub mod headers;
pub mod query;
pub mod transport;

pub use transport::{HttpTransport, RawResponse};
