//! Session persistence for the prioritization engine.
//!
//! A project keeps one scoring session in `<data>/session.json`:
//!
//! ```json
//! {
//!   "saved_at": "2026-10-16T09:30:00Z",
//!   "items": [
//!     {
//!       "id": "onboarding-tour",
//!       "type": "feature",
//!       "score": {
//!         "method": "rice",
//!         "payload": { "reach": 8.0, "impact": 3.0, "confidence": 80.0, "effort": 5.0, "score": 384.0 }
//!       },
//!       "rank": 1
//!     }
//!   ]
//! }
//! ```
//!
//! Items are stored in insertion order. Ranks are written for readers of
//! the file but recomputed on load.

mod session;

pub use session::{SESSION_FILE_NAME, SessionSnapshot, SessionStore};
