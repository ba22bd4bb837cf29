//! Pattern engine over an [`AtomSpace`](crate::space::AtomSpace).
//!
//! A [`Pattern`] is a template atom whose leaves may be variables. The
//! [`PatternMatcher`] tries the pattern against every atom in the store and
//! reports the variable bindings of each successful candidate. On top of the
//! matcher sit a few derived queries: inheritance closure in both directions,
//! predicate lookup and "which predicates mention this entity".
//!
//! ## Example
//!
//! ```rust,ignore
//! use atomspace_core::atoms::{LinkType, NodeType};
//! use atomspace_core::pattern::{Pattern, PatternMatcher};
//! use atomspace_core::space::AtomSpace;
//!
//! let mut space = AtomSpace::new();
//! let cat = space.add_node(NodeType::Concept, "Cat", None, None).id;
//! let mammal = space.add_node(NodeType::Concept, "Mammal", None, None).id;
//! space.add_link(LinkType::Inheritance, vec![cat, mammal], None)?;
//!
//! let matcher = PatternMatcher::new(&space);
//!
//! // (Inheritance $X Mammal)
//! let pattern = Pattern::link(
//!     LinkType::Inheritance,
//!     vec![Pattern::variable("$X"), Pattern::node(NodeType::Concept, "Mammal")],
//! );
//! let results = matcher.match_pattern(&pattern);
//! assert_eq!(results[0].get("$X"), Some(cat));
//!
//! let supers = matcher.find_all_superclasses(cat);
//! assert_eq!(supers[0].name, "Mammal");
//! ```

mod matcher;
mod traversal;
mod types;

pub use matcher::PatternMatcher;
pub use types::{
    Binding, Bindings, MatchResult, Pattern, PatternLink, PatternNode, PredicateApplication,
    PredicateEvaluation,
};
