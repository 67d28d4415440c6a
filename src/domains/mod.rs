//! Domains module containing business logic organized by bounded contexts.
//!
//! The server exposes a single domain, tools, backed by the CKMT search API.

pub mod tools;
