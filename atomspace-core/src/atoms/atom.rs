//! Atoms: nodes and links.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::types::{AtomType, LinkType, NodeType};
use super::values::{AttentionValue, NodeValue, TruthValue};

/// Opaque handle of an atom within one store.
///
/// Handles are allocated from a monotonically increasing counter and never
/// reused, so a stale handle held by a dangling link can never resolve to a
/// different atom. Ordering follows creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AtomId(u64);

impl AtomId {
    /// Create from a raw value.
    ///
    /// Only handles handed out by a store resolve to anything; this exists for
    /// tests and for callers that round-trip handles through their own storage.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for AtomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A labeled vertex. Unique per `(node_type, name)` within a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: AtomId,
    pub node_type: NodeType,
    pub name: String,
    pub value: Option<NodeValue>,
    pub truth_value: Option<TruthValue>,
    pub attention_value: Option<AttentionValue>,
    /// Creation or last-write time
    pub timestamp: DateTime<Utc>,
}

/// An ordered hyperedge. Unique per `(link_type, outgoing)` within a store.
///
/// `outgoing` is order-significant and may repeat ids, including the link's
/// own targets referenced more than once. It never changes after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub id: AtomId,
    pub link_type: LinkType,
    pub outgoing: Vec<AtomId>,
    pub truth_value: Option<TruthValue>,
    pub attention_value: Option<AttentionValue>,
    /// Creation or last-write time
    pub timestamp: DateTime<Utc>,
}

impl Link {
    /// Number of outgoing positions.
    pub fn arity(&self) -> usize {
        self.outgoing.len()
    }
}

/// Either a node or a link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Atom {
    Node(Node),
    Link(Link),
}

impl Atom {
    pub fn id(&self) -> AtomId {
        match self {
            Self::Node(n) => n.id,
            Self::Link(l) => l.id,
        }
    }

    pub fn atom_type(&self) -> AtomType {
        match self {
            Self::Node(n) => AtomType::Node(n.node_type),
            Self::Link(l) => AtomType::Link(l.link_type),
        }
    }

    pub fn truth_value(&self) -> Option<TruthValue> {
        match self {
            Self::Node(n) => n.truth_value,
            Self::Link(l) => l.truth_value,
        }
    }

    pub fn attention_value(&self) -> Option<AttentionValue> {
        match self {
            Self::Node(n) => n.attention_value,
            Self::Link(l) => l.attention_value,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::Node(n) => n.timestamp,
            Self::Link(l) => l.timestamp,
        }
    }

    pub fn is_node(&self) -> bool {
        matches!(self, Self::Node(_))
    }

    pub fn is_link(&self) -> bool {
        matches!(self, Self::Link(_))
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Self::Node(n) => Some(n),
            Self::Link(_) => None,
        }
    }

    pub fn as_link(&self) -> Option<&Link> {
        match self {
            Self::Node(_) => None,
            Self::Link(l) => Some(l),
        }
    }

    /// Overwrite the truth value, clamped into `[0, 1]`, and refresh the timestamp.
    pub(crate) fn set_truth_value(&mut self, tv: TruthValue) {
        let tv = tv.normalized();
        let now = Utc::now();
        match self {
            Self::Node(n) => {
                n.truth_value = Some(tv);
                n.timestamp = now;
            }
            Self::Link(l) => {
                l.truth_value = Some(tv);
                l.timestamp = now;
            }
        }
    }

    /// Overwrite the attention value and refresh the timestamp.
    pub(crate) fn set_attention_value(&mut self, av: AttentionValue) {
        let now = Utc::now();
        match self {
            Self::Node(n) => {
                n.attention_value = Some(av);
                n.timestamp = now;
            }
            Self::Link(l) => {
                l.attention_value = Some(av);
                l.timestamp = now;
            }
        }
    }

    /// Fold a re-inserted truth value into the stored one.
    ///
    /// Both defined: confidence-weighted merge. Only the incoming one defined:
    /// take it. Nothing incoming: unchanged.
    pub(crate) fn merge_truth_value(&mut self, incoming: Option<TruthValue>) {
        let Some(incoming) = incoming else {
            return;
        };
        let merged = match self.truth_value() {
            Some(existing) => existing.merge(&incoming),
            None => incoming,
        };
        self.set_truth_value(merged);
    }
}

impl From<Node> for Atom {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<Link> for Atom {
    fn from(link: Link) -> Self {
        Self::Link(link)
    }
}
