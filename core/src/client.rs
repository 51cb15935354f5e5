//! Configuration holder, request builder, and response parser for the
//! APOD API.
//!
//! # Design
//! `ApodClient` stores the effective configuration (key, date, concept
//! tags) and splits every call into `search_url` (produces the request
//! URL) and `parse_search` (consumes an `HttpResponse`), with `search`
//! composing the two around one blocking GET. Keeping build and parse
//! public means both halves stay testable without a network.
//!
//! Search overrides are written back into the stored configuration before
//! the request, so `date()` reflects the last call — `random_post` relies
//! on this. An override is a `Some`; passing `Some(ConceptTags::Flag(false))`
//! genuinely switches concept tags off rather than being dropped as falsy.
//!
//! The client is not a session: each call is an independent round trip.
//! `search` takes `&mut self` (overrides and the random generator mutate
//! it), so concurrent use requires external synchronization.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::date::{self, DateInput};
use crate::error::{ApodError, UpstreamError};
use crate::http::{self, HttpResponse};
use crate::types::{Apod, ConceptTags};

/// Production endpoint for the Astronomy Picture of the Day API.
pub const DEFAULT_URL: &str = "https://api.nasa.gov/planetary/apod";

/// Shared, rate-limited key usable without registration.
pub const DEMO_KEY: &str = "DEMO_KEY";

/// Construction options for [`ApodClient`]. All fields are optional;
/// `Default` gives the demo key, today's date, and concept tags off.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    pub api_key: Option<String>,
    pub date: Option<DateInput>,
    pub concept_tags: Option<ConceptTags>,
    /// Seed for `random_post` draws; unseeded clients draw from entropy.
    pub seed: Option<u64>,
}

/// Options for one [`ApodClient::search`] call. `None` means "use the
/// stored value"; `Some` overrides it and persists.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub date: Option<DateInput>,
    pub concept_tags: Option<ConceptTags>,
}

/// Synchronous client for the APOD API.
#[derive(Debug)]
pub struct ApodClient {
    base_url: String,
    api_key: String,
    date: String,
    concept_tags: ConceptTags,
    rng: StdRng,
}

impl ApodClient {
    /// Client bound to the production endpoint.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_base_url(DEFAULT_URL, config)
    }

    /// Client bound to an alternate endpoint, e.g. a local mock server.
    pub fn with_base_url(base_url: &str, config: ClientConfig) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.unwrap_or_else(|| DEMO_KEY.to_string()),
            date: date::normalize(config.date),
            concept_tags: ConceptTags::normalize(config.concept_tags),
            rng: match config.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            },
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The stored date, always in `YYYY-MM-DD` form unless set from a raw
    /// string.
    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn concept_tags(&self) -> &ConceptTags {
        &self.concept_tags
    }

    /// Store a date; absent input resolves to today.
    pub fn set_date(&mut self, input: Option<DateInput>) {
        self.date = date::normalize(input);
    }

    /// Store a concept-tags value; absent or empty input switches it off.
    pub fn set_concept_tags(&mut self, value: Option<ConceptTags>) {
        self.concept_tags = ConceptTags::normalize(value);
    }

    /// The URL one `search` call would request right now.
    ///
    /// Parameters are interpolated in a fixed order, falsy values
    /// included, matching the upstream's lenient query parsing.
    pub fn search_url(&self) -> String {
        format!(
            "{}?api_key={}&date={}&concept_tags={}",
            self.base_url, self.api_key, self.date, self.concept_tags
        )
    }

    /// Interpret a decoded APOD response.
    ///
    /// A body carrying an `"error"` key — whatever its shape, whatever
    /// else is present — is an upstream error; anything else maps onto
    /// [`Apod`], with missing fields empty or absent.
    pub fn parse_search(&self, response: HttpResponse) -> Result<Apod, ApodError> {
        let body: serde_json::Value = serde_json::from_str(&response.body)
            .map_err(|e| ApodError::Deserialization(e.to_string()))?;
        if body.get("error").is_some() {
            return Err(ApodError::Upstream(UpstreamError::from_body(
                response.status,
                body,
            )));
        }
        serde_json::from_value(body).map_err(|e| ApodError::Deserialization(e.to_string()))
    }

    /// Fetch the picture for the configured (or overridden) day.
    ///
    /// One blocking GET, no retries. Upstream rejections come back as
    /// `ApodError::Upstream`; network and JSON failures as the other
    /// variants.
    pub fn search(&mut self, options: SearchOptions) -> Result<Apod, ApodError> {
        if let Some(input) = options.date {
            self.set_date(Some(input));
        }
        if let Some(value) = options.concept_tags {
            self.set_concept_tags(Some(value));
        }
        let response = http::get(&self.search_url())?;
        self.parse_search(response)
    }

    /// Fetch the picture for a uniformly random day between the first
    /// APOD post (1995-06-16) and today, inclusive.
    pub fn random_post(&mut self) -> Result<Apod, ApodError> {
        let day = date::random(&mut self.rng);
        self.search(SearchOptions {
            date: Some(DateInput::Day(day)),
            concept_tags: None,
        })
    }

    /// Alias for [`random_post`](Self::random_post).
    pub fn wormhole(&mut self) -> Result<Apod, ApodError> {
        self.random_post()
    }
}
