//! # atomspace-core
//!
//! An in-memory hypergraph knowledge store in the OpenCog AtomSpace style,
//! with a structural pattern matcher on top.
//!
//! ## Core Components
//!
//! - **Atoms**: typed nodes and links carrying truth and attention values
//! - **Space**: the deduplicating store with name, structural and incoming indices
//! - **Pattern**: variable-binding pattern matching and derived graph queries
//!
//! ## Example
//!
//! ```rust,ignore
//! use atomspace_core::{AtomSpace, LinkType, NodeType, PatternMatcher, TruthValue};
//!
//! let mut space = AtomSpace::new();
//! let john = space.add_node(NodeType::Concept, "John", None, None).id;
//! let mary = space.add_node(NodeType::Concept, "Mary", None, None).id;
//! let likes = space.add_node(NodeType::Predicate, "likes", None, None).id;
//!
//! // (Evaluation likes (List John Mary))
//! let args = space.add_link(LinkType::List, vec![john, mary], None)?.id;
//! space.add_link(LinkType::Evaluation, vec![likes, args], Some(TruthValue::new(0.9, 0.8)))?;
//!
//! let matcher = PatternMatcher::new(&space);
//! let eval = matcher.evaluate_predicate("likes", &[john, mary]);
//! assert!(eval.found);
//! ```

pub mod atoms;
pub mod error;
pub mod pattern;
pub mod space;

// Re-exports for convenience
pub use atoms::{
    Atom, AtomId, AtomType, AttentionValue, Link, LinkType, Node, NodeType, NodeValue, TruthValue,
};
pub use error::{Error, Result};
pub use pattern::{
    Binding, Bindings, MatchResult, Pattern, PatternLink, PatternMatcher, PatternNode,
    PredicateApplication, PredicateEvaluation,
};
pub use space::{AtomQuery, AtomSpace, AtomSpaceConfig, AtomSpaceStats, SharedAtomSpace};
