//! Asynchronous client core for the Jikan anime/manga metadata API.
//!
//! # Overview
//! Turns typed endpoint descriptions into HTTP requests against a fixed
//! origin and returns every outcome as a `CallResult`: either the JSON
//! payload of a 200 response or a human-readable failure description.
//!
//! # Design
//! - `query` renders an ordered `ParameterSet` into a percent-encoded query
//!   suffix. Empty values are omitted; presence flags render as `name=`.
//! - `JikanClient` splits each call into `build_request` (pure),
//!   `transport::execute` (the only I/O) and `parse_response` (pure).
//! - `catalog::Endpoint` lists the remote operations as data; `fetch` sends
//!   any of them.
//! - Nothing is cached, retried or rate limited. Payloads are passed through
//!   as `serde_json::Value`.

pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod query;
mod transport;
pub mod types;

pub use catalog::{
    AnimeResource, AnimeSearch, BasicSearch, CharacterResource, ClubResource, ClubSearch,
    Endpoint, GenreQuery, MangaResource, MangaSearch, MediaKind, Page, PersonResource,
    ProducerResource, RandomKind, ReviewQuery, ScheduleQuery, Season, SeasonQuery, ToParams,
    TopQuery, TopReviewsQuery, UserResource, UserSearch,
};
pub use client::JikanClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use query::{encode, encode_component, ParamValue, ParameterSet};
pub use types::CallResult;
