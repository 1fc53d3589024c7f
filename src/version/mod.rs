//! Version lookup and comparison layer
//!
//! This module fetches the versions the check needs and decides how risky an
//! upgrade is.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐
//! │ PackageIndex │     │  Component   │
//! │    (npm)     │     │   Registry   │
//! └──────────────┘     └──────────────┘
//!        │                    │
//!        ▼                    ▼
//! ┌──────────────────────────────────┐
//! │ Checker (assess latest/current)  │
//! └──────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`checker`]: Upgrade risk assessment
//! - [`error`]: Error type for registry operations
//! - [`registry`]: Traits for the package index and component registries
//! - [`registries`]: HTTP implementations (npm index, OC registry)
//! - [`semver`]: Strict parsing and version diff classification
//! - [`types`]: Registry and component response records

pub mod checker;
pub mod error;
pub mod registries;
pub mod registry;
pub mod semver;
pub mod types;
