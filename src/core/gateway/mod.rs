//! Request gateway to the CKMT search API.
//!
//! Tools describe what to fetch as an [`ApiRequest`]; the [`ApiGateway`]
//! performs the single authenticated GET and returns either the decoded JSON
//! payload or a [`GatewayError`]. The error is collapsed into the
//! `{"error": message}` shape only at the tool boundary.

mod client;
mod error;
mod request;

pub use client::ApiGateway;
pub use error::{GatewayError, into_result_value};
pub use request::{ApiRequest, QueryParams, QueryValue};
