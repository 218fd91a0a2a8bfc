//! Built-in HTTP-backed providers
//!
//! Each provider issues a single request to its endpoint and returns the
//! short URL from the response: `isgd` and `tinyurl` read the trimmed plain
//! body, `ulvis` and `zws` extract it from a JSON body. No retries; the
//! shared client's timeout bounds every call. Endpoints are overridable so
//! tests can point a provider at a local mock server.

mod isgd;
mod tinyurl;
mod ulvis;
mod zws;

pub use isgd::IsGd;
pub use tinyurl::TinyUrl;
pub use ulvis::Ulvis;
pub use zws::Zws;
