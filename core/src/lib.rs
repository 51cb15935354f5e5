//! Synchronous client for NASA's Astronomy Picture of the Day API.
//!
//! # Overview
//! One endpoint, one verb: build a query URL from an API key, a date, and
//! a concept-tags flag, issue a blocking GET, and map the JSON body to
//! either an [`Apod`] or a typed [`ApodError`]. The branch is decided
//! solely by the presence of an `"error"` key in the decoded body.
//!
//! # Design
//! - `ApodClient` holds configuration only; each call is an independent
//!   round trip with no session state, retries, or caching.
//! - Request building (`search_url`) and response interpretation
//!   (`parse_search`) are split around the I/O boundary, so both are
//!   testable without a network.
//! - Date inputs are an explicit tagged union (`DateInput`) instead of
//!   dynamic dispatch on value shape; raw strings pass through unvalidated.
//! - `random_post` draws from a client-owned generator that can be seeded
//!   through `ClientConfig`, keeping draws reproducible in tests.
//! - DTOs are defined independently from the mock-server crate; the
//!   integration tests catch schema drift.

pub mod client;
pub mod date;
pub mod error;
pub mod http;
pub mod types;

pub use client::{ApodClient, ClientConfig, SearchOptions, DEFAULT_URL, DEMO_KEY};
pub use date::DateInput;
pub use error::{ApodError, UpstreamError};
pub use http::HttpResponse;
pub use types::{Apod, ConceptTags};
