//! Pattern and match result types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::atoms::{AtomId, LinkType, Node, NodeType, TruthValue};

/// Leaf of a pattern: either a concrete node or a free variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternNode {
    /// Required node type; [`NodeType::Node`] accepts any node
    pub node_type: NodeType,
    /// Node name, or the variable name when `is_variable`
    pub name: String,
    pub is_variable: bool,
}

/// Interior of a pattern: a link whose positions are themselves patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternLink {
    /// Required link type; [`LinkType::Link`] accepts any link
    pub link_type: LinkType,
    pub outgoing: Vec<Pattern>,
}

/// A template atom where some leaves are free variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Pattern {
    Node(PatternNode),
    Link(PatternLink),
}

impl Pattern {
    /// A variable that binds to any node.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::typed_variable(NodeType::Node, name)
    }

    /// A variable that binds only to nodes of `node_type`.
    pub fn typed_variable(node_type: NodeType, name: impl Into<String>) -> Self {
        Self::Node(PatternNode {
            node_type,
            name: name.into(),
            is_variable: true,
        })
    }

    /// A concrete node, matched by type and exact name.
    pub fn node(node_type: NodeType, name: impl Into<String>) -> Self {
        Self::Node(PatternNode {
            node_type,
            name: name.into(),
            is_variable: false,
        })
    }

    /// A link over sub-patterns, matched by type and exact arity.
    pub fn link(link_type: LinkType, outgoing: Vec<Pattern>) -> Self {
        Self::Link(PatternLink {
            link_type,
            outgoing,
        })
    }

    /// Names of the variables in this pattern, in first-occurrence order.
    pub fn variables(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Self::Node(node) => {
                if node.is_variable && !names.contains(&node.name.as_str()) {
                    names.push(&node.name);
                }
            }
            Self::Link(link) => {
                for sub in &link.outgoing {
                    sub.collect_variables(names);
                }
            }
        }
    }
}

/// Variable name to bound atom id.
pub type Bindings = HashMap<String, AtomId>;

/// One variable binding from a successful match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    /// Variable name (e.g. `$X`)
    pub variable: String,
    /// Bound atom id
    pub atom_id: AtomId,
}

/// Result of matching a pattern against one candidate atom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub bindings: Bindings,
    pub matched: bool,
}

impl MatchResult {
    /// A successful match with the given bindings.
    pub fn success(bindings: Bindings) -> Self {
        Self {
            bindings,
            matched: true,
        }
    }

    /// The atom bound to `variable`, if any.
    pub fn get(&self, variable: &str) -> Option<AtomId> {
        self.bindings.get(variable).copied()
    }

    /// Bindings as a list sorted by variable name.
    pub fn bindings_list(&self) -> Vec<Binding> {
        let mut list: Vec<Binding> = self
            .bindings
            .iter()
            .map(|(variable, atom_id)| Binding {
                variable: variable.clone(),
                atom_id: *atom_id,
            })
            .collect();
        list.sort_by(|a, b| a.variable.cmp(&b.variable));
        list
    }
}

/// Outcome of [`PatternMatcher::evaluate_predicate`](super::PatternMatcher::evaluate_predicate).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PredicateEvaluation {
    pub found: bool,
    /// Truth value of the evaluation link, when found
    pub truth_value: Option<TruthValue>,
}

impl PredicateEvaluation {
    pub fn not_found() -> Self {
        Self::default()
    }

    pub fn found(truth_value: Option<TruthValue>) -> Self {
        Self {
            found: true,
            truth_value,
        }
    }
}

/// A predicate applied to an entity, as found by
/// [`PatternMatcher::find_predicates_for`](super::PatternMatcher::find_predicates_for).
#[derive(Debug, Clone, PartialEq)]
pub struct PredicateApplication<'a> {
    pub predicate: &'a Node,
    /// Resolved node members of the argument list, in order
    pub args: Vec<&'a Node>,
    pub truth_value: Option<TruthValue>,
}
