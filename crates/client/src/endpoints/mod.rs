//! Raw REST calls.
//!
//! These functions perform one authenticated request each and return the
//! response body as bytes. Entity-level decoding lives on
//! [`crate::SumologicClient`].

mod request;

pub use request::{RawResponse, delete, get, post, put, resolve_url};
