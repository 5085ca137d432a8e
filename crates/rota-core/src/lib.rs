//! Core types for the Rota course catalog.
//!
//! Models course sections scraped from the registrar and answers the one
//! question in the domain with real rules in it: do two sections' meeting
//! times collide? Scraping, persistence, and rendering are other layers'
//! problems; this crate is pure, synchronous, and free of I/O.
//!
//! Entities are built once from a fully-deserialized snapshot and treated
//! as immutable values afterwards. Construction resolves the defaults
//! (scrape timestamp, display colors, core-curriculum codes) and repairs a
//! historical data-entry defect in Summer section identifiers; replacement
//! is by re-construction, never by mutation.

pub mod colors;
pub mod commitment;
pub mod conflict;
pub mod course;
pub mod error;
pub mod instructor;
pub mod meeting;
pub mod normalize;
pub mod schedule;
pub mod semester;

pub use error::{Error, Result};
