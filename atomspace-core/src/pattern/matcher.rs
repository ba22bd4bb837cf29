//! Structural pattern matching with variable unification.

use tracing::trace;

use crate::atoms::{Atom, Link, Node};
use crate::pattern::types::*;
use crate::space::AtomSpace;

/// Stateless query layer over an [`AtomSpace`].
///
/// Matching is single-pass: a variable binds on first occurrence and every
/// later occurrence must resolve to the identical atom. There is no
/// backtracking to try alternative candidates for an inner position.
#[derive(Debug, Clone, Copy)]
pub struct PatternMatcher<'a> {
    space: &'a AtomSpace,
}

impl<'a> PatternMatcher<'a> {
    pub fn new(space: &'a AtomSpace) -> Self {
        Self { space }
    }

    /// The store this matcher reads from.
    pub fn space(&self) -> &'a AtomSpace {
        self.space
    }

    /// Match a pattern against every atom in the store.
    ///
    /// Each atom is tried as a candidate for the top level of the pattern with
    /// a fresh, empty set of bindings. One result is returned per successful
    /// candidate, in creation order.
    pub fn match_pattern(&self, pattern: &Pattern) -> Vec<MatchResult> {
        let mut results = Vec::new();

        for atom in self.space.get_all_atoms() {
            let mut bindings = Bindings::new();
            if self.match_atom(pattern, atom, &mut bindings) {
                trace!(candidate = %atom.id(), "Pattern matched");
                results.push(MatchResult::success(bindings));
            }
        }

        results
    }

    /// Whether `pattern` matches one specific atom, starting from `bindings`.
    ///
    /// On success the bindings made during the match are added to `bindings`.
    /// On failure `bindings` may hold partial bindings from a top-level
    /// variable; callers that reuse the map should pass a copy.
    pub fn match_atom(&self, pattern: &Pattern, atom: &Atom, bindings: &mut Bindings) -> bool {
        match (pattern, atom) {
            (Pattern::Node(p), Atom::Node(node)) => Self::match_node(p, node, bindings),
            (Pattern::Link(p), Atom::Link(link)) => self.match_link(p, link, bindings),
            _ => false,
        }
    }

    fn match_node(pattern: &PatternNode, node: &Node, bindings: &mut Bindings) -> bool {
        if !pattern.node_type.accepts(node.node_type) {
            return false;
        }

        if !pattern.is_variable {
            return node.name == pattern.name;
        }

        match bindings.get(&pattern.name) {
            Some(bound) => *bound == node.id,
            None => {
                bindings.insert(pattern.name.clone(), node.id);
                true
            }
        }
    }

    fn match_link(&self, pattern: &PatternLink, link: &Link, bindings: &mut Bindings) -> bool {
        if !pattern.link_type.accepts(link.link_type) {
            return false;
        }

        if pattern.outgoing.len() != link.outgoing.len() {
            return false;
        }

        // Bindings made below this link are only committed if every position matches.
        let mut scoped = bindings.clone();

        for (sub_pattern, target_id) in pattern.outgoing.iter().zip(&link.outgoing) {
            let Some(target) = self.space.get_atom(*target_id) else {
                trace!(link = %link.id, target = %target_id, "Unresolved outgoing reference");
                return false;
            };

            if !self.match_atom(sub_pattern, target, &mut scoped) {
                return false;
            }
        }

        *bindings = scoped;
        true
    }
}
