//! Functional core for the Swarm API client
//!
//! This crate holds the pure half of the client, following the Functional
//! Core - Imperative Shell architectural pattern:
//!
//! - **`swarm_core`** (this crate): request-shape logic with zero I/O:
//!   parameter marshalling, version gating, and the caller-preventable
//!   error types
//! - **`swarm_client`**: the imperative shell that owns the HTTP client
//!   and sends what this crate builds
//!
//! Everything here is deterministic and testable with plain fixture data,
//! no mocking required. The shell never builds wire keys or decides field
//! inclusion on its own; every such rule lives in [`params`] so it can be
//! enumerated and tested in one place.
//!
//! # Module Organization
//!
//! - [`params`]: the ordered parameter mapping built per request
//! - [`version`]: API version preconditions
//! - [`error`]: [`error::ValidationError`] and [`error::CompatibilityError`]

pub mod error;
pub mod params;
pub mod version;
