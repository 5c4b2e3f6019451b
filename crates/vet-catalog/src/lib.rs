//! # vet-catalog — Reference Catalog Access
//!
//! Read-only reference data the verification engine evaluates against:
//! regulations with their requirement lists, sanctions/watchlist entries,
//! fraud indicator patterns, and document field schemas.
//!
//! ## Data Model
//!
//! - [`Regulation`] / [`RegulationRequirement`]: mandatory-field
//!   requirements plus identity-critical fields per regulation.
//! - [`SanctionsEntry`] / [`SanctionsListType`]: watchlist entries with
//!   aliases and official identifiers.
//! - [`FraudPattern`] / [`Indicator`] / [`IndicatorCondition`]: fraud
//!   rules expressed as data — tagged condition descriptors interpreted
//!   by a small closed evaluator, never executable snippets.
//! - [`DocumentSchema`] / [`FieldFormat`]: expected structure per
//!   document type for forensics checks.
//!
//! ## Access Contract
//!
//! The [`Catalog`] trait is the engine's only collaborator seam. Every
//! lookup fails distinctly between "not found" (`Ok(None)` / empty list)
//! and "temporarily unavailable" ([`CatalogError::Unavailable`]) so the
//! engine can degrade the affected category to `review` instead of
//! failing the whole decision.

pub mod access;
pub mod document;
pub mod error;
pub mod fraud;
pub mod memory;
pub mod regulation;
pub mod sanctions;

pub use access::Catalog;
pub use document::{DocumentField, DocumentSchema, FieldFormat};
pub use error::CatalogError;
pub use fraud::{FraudPattern, Indicator, IndicatorCondition};
pub use memory::InMemoryCatalog;
pub use regulation::{Regulation, RegulationRequirement};
pub use sanctions::{SanctionsEntry, SanctionsListType};
