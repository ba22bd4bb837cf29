//! Data model for the AtomSpace hypergraph.
//!
//! Atoms are the fundamental units of knowledge. They come in two kinds:
//!
//! - **Node**: a labeled vertex, unique by `(type, name)`
//! - **Link**: an ordered hyperedge over existing atoms, unique by `(type, outgoing)`
//!
//! Every atom carries an optional [`TruthValue`] (uncertain belief) and an
//! optional [`AttentionValue`] (importance metadata).
//!
//! ## Example
//!
//! ```rust,ignore
//! use atomspace_core::atoms::{NodeType, TruthValue};
//!
//! let tv = TruthValue::new(0.9, 0.8);
//! let merged = tv.merge(&TruthValue::new(0.5, 0.2));
//! assert!(merged.confidence <= 1.0);
//! assert_eq!(NodeType::Concept.to_string(), "ConceptNode");
//! ```

mod atom;
mod types;
mod values;

pub use atom::{Atom, AtomId, Link, Node};
pub use types::{AtomType, LinkType, NodeType};
pub use values::{AttentionValue, NodeValue, TruthValue};
