//! Document-style writers over PostgreSQL (server only).
//!
//! Both writers are merge upserts keyed by a fixed identifier, so re-running
//! them never duplicates rows and never resets `created_at`.

#[cfg(feature = "server")]
pub mod challenge;
#[cfg(feature = "server")]
pub mod profile;
