//! Atom type tags.
//!
//! The type enumeration is closed. Node kinds and link kinds are separate
//! enums so that a node can never be tagged with a link type (and vice versa);
//! [`AtomType`] joins them for queries that span both kinds.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::Error;

/// Kind of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NodeType {
    /// Generic node. Acts as a wildcard in patterns.
    #[serde(rename = "Node")]
    Node,

    /// A concept or entity.
    #[serde(rename = "ConceptNode")]
    Concept,

    /// A named predicate, evaluated over a list of arguments.
    #[serde(rename = "PredicateNode")]
    Predicate,

    /// A variable stored as knowledge (not a pattern variable).
    #[serde(rename = "VariableNode")]
    Variable,

    /// A numeric literal.
    #[serde(rename = "NumberNode")]
    Number,

    /// A named schema (procedure).
    #[serde(rename = "SchemaNode")]
    Schema,
}

impl NodeType {
    /// All node kinds, generic first.
    pub const ALL: [NodeType; 6] = [
        Self::Node,
        Self::Concept,
        Self::Predicate,
        Self::Variable,
        Self::Number,
        Self::Schema,
    ];

    /// Canonical type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Node => "Node",
            Self::Concept => "ConceptNode",
            Self::Predicate => "PredicateNode",
            Self::Variable => "VariableNode",
            Self::Number => "NumberNode",
            Self::Schema => "SchemaNode",
        }
    }

    /// Whether this is the generic kind that matches any node in a pattern.
    pub fn is_generic(&self) -> bool {
        matches!(self, Self::Node)
    }

    /// Pattern type check: generic matches everything, otherwise exact.
    pub fn accepts(&self, other: NodeType) -> bool {
        self.is_generic() || *self == other
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::UnknownAtomType(s.to_string()))
    }
}

/// Kind of a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LinkType {
    /// Generic link. Acts as a wildcard in patterns.
    #[serde(rename = "Link")]
    Link,

    /// `A` is a kind of `B`.
    #[serde(rename = "InheritanceLink")]
    Inheritance,

    #[serde(rename = "SimilarityLink")]
    Similarity,

    #[serde(rename = "MemberLink")]
    Member,

    /// Predicate applied to a list of arguments: `(Evaluation P (List ...))`.
    #[serde(rename = "EvaluationLink")]
    Evaluation,

    /// Ordered argument list.
    #[serde(rename = "ListLink")]
    List,

    #[serde(rename = "AndLink")]
    And,

    #[serde(rename = "OrLink")]
    Or,

    #[serde(rename = "NotLink")]
    Not,

    #[serde(rename = "ImplicationLink")]
    Implication,

    #[serde(rename = "EquivalenceLink")]
    Equivalence,

    #[serde(rename = "ExecutionLink")]
    Execution,
}

impl LinkType {
    /// All link kinds, generic first.
    pub const ALL: [LinkType; 12] = [
        Self::Link,
        Self::Inheritance,
        Self::Similarity,
        Self::Member,
        Self::Evaluation,
        Self::List,
        Self::And,
        Self::Or,
        Self::Not,
        Self::Implication,
        Self::Equivalence,
        Self::Execution,
    ];

    /// Canonical type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Link => "Link",
            Self::Inheritance => "InheritanceLink",
            Self::Similarity => "SimilarityLink",
            Self::Member => "MemberLink",
            Self::Evaluation => "EvaluationLink",
            Self::List => "ListLink",
            Self::And => "AndLink",
            Self::Or => "OrLink",
            Self::Not => "NotLink",
            Self::Implication => "ImplicationLink",
            Self::Equivalence => "EquivalenceLink",
            Self::Execution => "ExecutionLink",
        }
    }

    /// Whether this is the generic kind that matches any link in a pattern.
    pub fn is_generic(&self) -> bool {
        matches!(self, Self::Link)
    }

    /// Pattern type check: generic matches everything, otherwise exact.
    pub fn accepts(&self, other: LinkType) -> bool {
        self.is_generic() || *self == other
    }
}

impl std::fmt::Display for LinkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LinkType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::UnknownAtomType(s.to_string()))
    }
}

/// Type tag of any atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AtomType {
    Node(NodeType),
    Link(LinkType),
}

impl AtomType {
    /// Canonical type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Node(t) => t.as_str(),
            Self::Link(t) => t.as_str(),
        }
    }

    pub fn is_node(&self) -> bool {
        matches!(self, Self::Node(_))
    }

    pub fn is_link(&self) -> bool {
        matches!(self, Self::Link(_))
    }
}

impl From<NodeType> for AtomType {
    fn from(t: NodeType) -> Self {
        Self::Node(t)
    }
}

impl From<LinkType> for AtomType {
    fn from(t: LinkType) -> Self {
        Self::Link(t)
    }
}

impl std::fmt::Display for AtomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AtomType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<NodeType>()
            .map(Self::Node)
            .or_else(|_| s.parse::<LinkType>().map(Self::Link))
    }
}
