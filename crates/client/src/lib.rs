//! Client library for the Helix Swarm code review API.
//!
//! Every operation maps 1:1 to an HTTP call: it validates its arguments
//! against the API version negotiated from the configured URL, marshals
//! them into query parameters or a form/JSON payload, performs one request
//! through the shared [`Swarm`] context, and returns the decoded JSON
//! response body unchanged. Request-shape rules live in the pure
//! `swarm_core` crate; this crate owns the I/O.
//!
//! # Example
//!
//! ```rust,ignore
//! use swarm_client::{Swarm, SwarmConfig};
//! use swarm_client::endpoints::reviews::ListReviewsParams;
//!
//! let swarm = Swarm::new(SwarmConfig::new(
//!     "https://swarm.example.com/api/v9",
//!     "bruno",
//!     "EC6F2346E3C7F38F52A1A2A2E2D492",
//! ))?;
//!
//! let reviews = swarm
//!     .reviews()
//!     .list(&ListReviewsParams {
//!         states: vec!["needsReview".to_string()],
//!         passes_tests: Some(true),
//!         ..Default::default()
//!     })
//!     .await?;
//! ```
//!
//! Failures split into two caller-preventable kinds raised before any
//! request is sent ([`ValidationError`], [`CompatibilityError`]) and
//! transport-level failures surfaced unchanged (see [`SwarmError`]).

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;

pub use client::{Swarm, VersionInfo};
pub use config::SwarmConfig;
pub use error::SwarmError;
pub use swarm_core::error::{CompatibilityError, ValidationError};
