//! Hypergraph store.
//!
//! The [`AtomSpace`] owns the atom table and its derived indices (name,
//! structural and incoming-adjacency). It deduplicates on insert, merging
//! truth values of repeated atoms, and tolerates dangling references left
//! behind by non-cascading deletes.
//!
//! ## Example
//!
//! ```rust,ignore
//! use atomspace_core::atoms::{LinkType, NodeType, TruthValue};
//! use atomspace_core::space::{AtomQuery, AtomSpace};
//!
//! let mut space = AtomSpace::new();
//! let cat = space.add_node(NodeType::Concept, "cat", None, None).id;
//! let animal = space.add_node(NodeType::Concept, "animal", None, None).id;
//!
//! // (Inheritance cat animal)
//! space.add_link(LinkType::Inheritance, vec![cat, animal], Some(TruthValue::new(0.95, 0.9)))?;
//!
//! assert_eq!(space.get_incoming(cat).len(), 1);
//! assert_eq!(space.query(&AtomQuery::new().atom_type(NodeType::Concept)).len(), 2);
//! ```

mod config;
mod proptest;
mod query;
mod shared;
mod store;

pub use config::AtomSpaceConfig;
pub use query::AtomQuery;
pub use shared::SharedAtomSpace;
pub use store::{AtomSpace, AtomSpaceStats};
