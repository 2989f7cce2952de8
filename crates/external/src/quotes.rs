//! Quote-of-the-moment client with a local fallback collection.
//!
//! Configured APIs are tried in order. Two payload shapes are understood:
//!
//! - a flat object with a `content` field (`{"content", "author", "tags"}`)
//! - a nested `{"contents": {"quotes": [{"quote", "author", "tags"}]}}`
//!
//! Any failure moves on to the next API. When every API fails, a quote is
//! drawn uniformly at random from [`FALLBACK_QUOTES`].

use std::time::Duration;

use rand::Rng;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::ClientBuildError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// APIs tried when none are configured, in order.
pub const DEFAULT_QUOTE_API_URLS: &[&str] =
    &["https://api.quotable.io/random", "https://quotes.rest/qod"];

/// `source` label for the flat `content` payload.
pub const QUOTABLE_SOURCE: &str = "Quotable API";

/// `source` label for the nested `contents.quotes` payload.
pub const QUOTE_OF_THE_DAY_SOURCE: &str = "Quote of the Day API";

/// `source` label when no API answered.
pub const FALLBACK_SOURCE: &str = "Fallback Quote Collection";

pub const LIVE_MESSAGE: &str = "Successfully fetched data from external API";
pub const FALLBACK_MESSAGE: &str = "Using local quote (external APIs unavailable)";

/// A quote bundled with the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackQuote {
    pub content: &'static str,
    pub author: &'static str,
    pub tags: &'static [&'static str],
}

/// Quotes served when every API fails.
pub const FALLBACK_QUOTES: [FallbackQuote; 5] = [
    FallbackQuote {
        content: "The only way to do great work is to love what you do.",
        author: "Steve Jobs",
        tags: &["inspiration", "work", "passion"],
    },
    FallbackQuote {
        content: "Innovation distinguishes between a leader and a follower.",
        author: "Steve Jobs",
        tags: &["innovation", "leadership"],
    },
    FallbackQuote {
        content: "Success is not final, failure is not fatal: it is the courage to continue that counts.",
        author: "Winston Churchill",
        tags: &["success", "courage", "perseverance"],
    },
    FallbackQuote {
        content: "The future belongs to those who believe in the beauty of their dreams.",
        author: "Eleanor Roosevelt",
        tags: &["dreams", "future", "inspiration"],
    },
    FallbackQuote {
        content: "Code is like humor. When you have to explain it, it's bad.",
        author: "Cory House",
        tags: &["programming", "humor", "code"],
    },
];

/// Pick one of [`FALLBACK_QUOTES`] uniformly at random.
pub fn choose_fallback<R: Rng>(rng: &mut R) -> &'static FallbackQuote {
    &FALLBACK_QUOTES[rng.random_range(0..FALLBACK_QUOTES.len())]
}

// ---------------------------------------------------------------------------
// Normalized output
// ---------------------------------------------------------------------------

/// A quote in the shape returned to API callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub quote: String,
    pub author: Option<String>,
    pub tags: Vec<String>,
}

impl From<&FallbackQuote> for Quote {
    fn from(fallback: &FallbackQuote) -> Self {
        Self {
            quote: fallback.content.to_string(),
            author: Some(fallback.author.to_string()),
            tags: fallback.tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// The quote served for one request and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteOutcome {
    pub source: &'static str,
    pub message: &'static str,
    pub quote: Quote,
}

impl QuoteOutcome {
    /// Outcome built from a random entry of the fallback collection.
    pub fn fallback<R: Rng>(rng: &mut R) -> Self {
        Self {
            source: FALLBACK_SOURCE,
            message: FALLBACK_MESSAGE,
            quote: Quote::from(choose_fallback(rng)),
        }
    }

    /// Whether the quote came from a live API.
    pub fn is_live(&self) -> bool {
        self.source != FALLBACK_SOURCE
    }
}

// ---------------------------------------------------------------------------
// Provider payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct FlatQuote {
    content: String,
    author: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct NestedQuote {
    quote: String,
    author: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct NestedContents {
    quotes: Vec<NestedQuote>,
}

/// Either accepted payload shape. The flat shape is tried first.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum QuotePayload {
    Flat(FlatQuote),
    Nested { contents: NestedContents },
}

impl QuotePayload {
    /// Normalize into a source label and a [`Quote`]; `None` when the
    /// nested shape carries no quotes.
    fn normalize(self) -> Option<(&'static str, Quote)> {
        match self {
            QuotePayload::Flat(q) => Some((
                QUOTABLE_SOURCE,
                Quote {
                    quote: q.content,
                    author: q.author,
                    tags: q.tags,
                },
            )),
            QuotePayload::Nested { contents } => {
                let q = contents.quotes.into_iter().next()?;
                Some((
                    QUOTE_OF_THE_DAY_SOURCE,
                    Quote {
                        quote: q.quote,
                        author: q.author,
                        tags: q.tags,
                    },
                ))
            }
        }
    }
}

/// Parse a JSON body from any quote API.
pub fn parse_quote(body: &[u8]) -> Result<(&'static str, Quote), QuoteApiError> {
    let payload: QuotePayload = serde_json::from_slice(body)?;
    payload.normalize().ok_or(QuoteApiError::UnknownShape)
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Why a single quote API attempt failed.
#[derive(Debug, thiserror::Error)]
pub enum QuoteApiError {
    /// Network, DNS, TLS or timeout failure.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with something other than 200.
    #[error("Quote API returned HTTP {0}")]
    HttpStatus(u16),

    /// The body was not JSON in either accepted shape.
    #[error("Unparseable quote payload: {0}")]
    Parse(#[from] serde_json::Error),

    /// The body parsed but contained no quote.
    #[error("Quote payload contained no quotes")]
    UnknownShape,
}

/// Client trying a list of quote APIs in order.
pub struct QuoteClient {
    client: reqwest::Client,
    api_urls: Vec<String>,
}

impl QuoteClient {
    /// Build a client for `api_urls` (tried in order).
    ///
    /// `accept_invalid_certs` disables TLS certificate verification for
    /// providers with broken certificate chains.
    pub fn new(
        api_urls: Vec<String>,
        timeout: Duration,
        accept_invalid_certs: bool,
    ) -> Result<Self, ClientBuildError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()?;
        Ok(Self { client, api_urls })
    }

    /// The APIs this client tries, in order.
    pub fn api_urls(&self) -> &[String] {
        &self.api_urls
    }

    /// Return the first quote any API delivers, or a random fallback.
    pub async fn fetch<R: Rng>(&self, rng: &mut R) -> QuoteOutcome {
        match self.fetch_live().await {
            Some(outcome) => outcome,
            None => {
                tracing::info!("All quote APIs unavailable, serving fallback quote");
                QuoteOutcome::fallback(rng)
            }
        }
    }

    /// Try each API in order; `None` if all of them failed.
    pub async fn fetch_live(&self) -> Option<QuoteOutcome> {
        for url in &self.api_urls {
            match self.try_fetch(url).await {
                Ok((source, quote)) => {
                    tracing::debug!(url = %url, source, "Fetched quote");
                    return Some(QuoteOutcome {
                        source,
                        message: LIVE_MESSAGE,
                        quote,
                    });
                }
                Err(e) => {
                    tracing::warn!(url = %url, error = %e, "Quote API attempt failed, trying next");
                }
            }
        }
        None
    }

    async fn try_fetch(&self, url: &str) -> Result<(&'static str, Quote), QuoteApiError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(QuoteApiError::HttpStatus(status.as_u16()));
        }
        let body = response.bytes().await?;
        parse_quote(&body)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
