//! Criteria for scanning the atom table.

use crate::atoms::{Atom, AtomId, AtomType};

/// Query builder for finding atoms.
///
/// Each filter is independent and optional; an atom matches when it satisfies
/// every filter that is set. An empty query matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AtomQuery {
    /// Filter by exact type.
    pub by_type: Option<AtomType>,

    /// Filter by node name. Links never match when this is set.
    pub by_name: Option<String>,

    /// Filter by exact outgoing sequence. Nodes never match when this is set.
    pub by_outgoing: Option<Vec<AtomId>>,
}

impl AtomQuery {
    /// Create a new empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by type.
    pub fn atom_type(mut self, atom_type: impl Into<AtomType>) -> Self {
        self.by_type = Some(atom_type.into());
        self
    }

    /// Filter by node name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.by_name = Some(name.into());
        self
    }

    /// Filter by outgoing sequence.
    pub fn outgoing(mut self, outgoing: impl Into<Vec<AtomId>>) -> Self {
        self.by_outgoing = Some(outgoing.into());
        self
    }

    /// Check if an atom satisfies every filter.
    pub fn matches(&self, atom: &Atom) -> bool {
        if let Some(t) = self.by_type {
            if atom.atom_type() != t {
                return false;
            }
        }

        if let Some(ref name) = self.by_name {
            match atom {
                Atom::Node(n) if &n.name == name => {}
                _ => return false,
            }
        }

        if let Some(ref outgoing) = self.by_outgoing {
            match atom {
                Atom::Link(l) if &l.outgoing == outgoing => {}
                _ => return false,
            }
        }

        true
    }
}
