//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business logic and the in-memory stores so route
//! handlers can stay focused on request parsing and status mapping. The
//! term extractor, precedent matcher and guidance tracker are pure; the
//! rest read and write `AppState`.

pub mod case;
pub mod chat;
pub mod guidance;
pub mod legal_terms;
pub mod media;
pub mod precedent;
pub mod translate;
