//! # internmatch API
//!
//! HTTP transport for the recommender.
//!
//! - `GET /` health message
//! - `POST /recommend` candidate query in, `{"recommendations": [...]}` out

pub mod rest;

pub use rest::{configure, RestApi, HEALTH_MESSAGE};
