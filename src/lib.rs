//! In-memory registry of versioned documents.
//!
//! `doc-registry` loads a document manifest into an immutable registry
//! snapshot, derives filtered, searched and sorted views over it, computes
//! per-department counts, and builds new documents with a seed version.
//! Every mutation yields a new snapshot; views are pure functions of the
//! snapshot and the view parameters.

pub mod document;
pub mod query;
pub mod registry;
pub mod session;
pub mod types;
pub mod upload;
