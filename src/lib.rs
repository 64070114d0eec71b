//! # Vibefy - prioritization scoring for product backlogs
//!
//! Vibefy scores backlog items (features, issues, initiatives) and keeps them
//! in a stable, deterministic ranking. Two scoring methods are first class:
//!
//! - **RICE**: `(reach x impact x confidence) / effort`, rounded to 2 decimals
//! - **Value/Effort**: value and effort bands that place an item in one of
//!   four quadrants (quick wins, major projects, fill-ins, questionable)
//!
//! Items may also carry an opaque custom score.
//!
//! ## Quick Start
//!
//! ```
//! use vibefy::engine::PrioritizationEngine;
//! use vibefy::model::{ItemType, ScoreInput, ScoringMethod};
//!
//! let mut engine = PrioritizationEngine::default();
//! let item = engine
//!     .score_item(
//!         "onboarding-tour",
//!         ItemType::Feature,
//!         ScoringMethod::Rice,
//!         ScoreInput::Rice { reach: 8.0, impact: 3.0, confidence: 80.0, effort: 5.0 },
//!     )
//!     .unwrap();
//! assert_eq!(item.rice().unwrap().score, 384.0);
//! assert_eq!(item.rank, 1);
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading and management
//! - [`engine`]: The scoring session and its ranking
//! - [`error`]: Error types and result aliases
//! - [`model`]: Scores, quadrants and scored items
//! - [`storage`]: Session snapshots on disk
//! - [`validation`]: Input validation utilities

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.vibefy.toml` configuration files and project discovery.
pub mod config;

/// The prioritization engine.
pub mod engine;

/// Error types and result aliases.
///
/// Defines `VibefyError` enum and `Result<T>` type alias.
pub mod error;

/// Data models for prioritization.
pub mod model;

/// Session persistence.
///
/// Saves and restores an engine's items as JSON with atomic writes.
pub mod storage;

/// Input validation utilities.
pub mod validation;

/// Batch scoring from JSON records.
pub mod import;

pub mod logging;

/// Undo functionality for reverting session changes.
///
/// Tracks recent mutations and allows undoing them.
pub mod undo;
