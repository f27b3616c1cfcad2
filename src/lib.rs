//! Readiness assessment toolkit for Microsoft Copilot adoption in
//! GxP-regulated organizations.
//!
//! The [`assessment`] module carries the questionnaire catalog, the pure
//! scoring/ROI/roadmap engines, the persistence adapter, and the export
//! assembler. [`config`], [`telemetry`], and [`error`] are the application
//! shell used by the CLI binary.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
