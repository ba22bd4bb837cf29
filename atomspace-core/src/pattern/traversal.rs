//! Convenience queries built from the store's read API: inheritance
//! closure and predicate evaluation.

use std::collections::HashSet;

use crate::atoms::{Atom, AtomId, LinkType, Node, NodeType};
use crate::pattern::matcher::PatternMatcher;
use crate::pattern::types::{PredicateApplication, PredicateEvaluation};

/// Which end of an inheritance link a traversal walks towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    /// `(Inheritance id X)`: X is a superclass
    Up,
    /// `(Inheritance X id)`: X is a subclass
    Down,
}

impl<'a> PatternMatcher<'a> {
    /// Direct superclasses: nodes `p` with `(Inheritance id p)`.
    pub fn find_inheritance_targets(&self, id: AtomId) -> Vec<&'a Node> {
        self.direct_neighbours(id, Direction::Up)
    }

    /// Direct subclasses: nodes `c` with `(Inheritance c id)`.
    pub fn find_inheritance_sources(&self, id: AtomId) -> Vec<&'a Node> {
        self.direct_neighbours(id, Direction::Down)
    }

    fn direct_neighbours(&self, id: AtomId, direction: Direction) -> Vec<&'a Node> {
        let (this_end, other_end) = match direction {
            Direction::Up => (0, 1),
            Direction::Down => (1, 0),
        };

        self.space()
            .get_incoming(id)
            .into_iter()
            .filter(|link| link.link_type == LinkType::Inheritance && link.arity() == 2)
            .filter(|link| link.outgoing[this_end] == id)
            .filter_map(|link| self.space().get_atom(link.outgoing[other_end]))
            .filter_map(Atom::as_node)
            .collect()
    }

    /// All superclasses reachable through inheritance, depth-first.
    ///
    /// Every edge walked appends its target, so a node reachable along
    /// several paths or through a cycle (the start included) can appear more
    /// than once; each node is expanded at most once.
    pub fn find_all_superclasses(&self, id: AtomId) -> Vec<&'a Node> {
        self.closure(id, Direction::Up)
    }

    /// All subclasses reachable through inheritance, depth-first.
    ///
    /// Same visiting rules as [`find_all_superclasses`](Self::find_all_superclasses).
    pub fn find_all_subclasses(&self, id: AtomId) -> Vec<&'a Node> {
        self.closure(id, Direction::Down)
    }

    /// Pre-order DFS with an explicit stack. Equivalent to the recursive walk
    /// `visit(x) = if unvisited(x) { mark(x); for n in neighbours(x) { emit(n); visit(n) } }`.
    fn closure(&self, start: AtomId, direction: Direction) -> Vec<&'a Node> {
        let mut visited: HashSet<AtomId> = HashSet::new();
        let mut result = Vec::new();

        visited.insert(start);
        let mut stack = vec![(self.direct_neighbours(start, direction), 0usize)];

        while let Some((neighbours, next)) = stack.last_mut() {
            let Some(&node) = neighbours.get(*next) else {
                stack.pop();
                continue;
            };
            *next += 1;

            result.push(node);
            if visited.insert(node.id) {
                stack.push((self.direct_neighbours(node.id, direction), 0));
            }
        }

        result
    }

    /// Look up `(Evaluation (Predicate name) (List args...))`.
    pub fn evaluate_predicate(&self, name: &str, args: &[AtomId]) -> PredicateEvaluation {
        let space = self.space();

        let Some(predicate) = space.get_node(NodeType::Predicate, name) else {
            return PredicateEvaluation::not_found();
        };
        let Some(list) = space.get_link(LinkType::List, args) else {
            return PredicateEvaluation::not_found();
        };

        match space.get_link(LinkType::Evaluation, &[predicate.id, list.id]) {
            Some(evaluation) => PredicateEvaluation::found(evaluation.truth_value),
            None => PredicateEvaluation::not_found(),
        }
    }

    /// Every predicate applied to an argument list containing `entity`, at
    /// any position.
    ///
    /// One entry per evaluation link, so a list referenced by several
    /// evaluations yields several entries.
    pub fn find_predicates_for(&self, entity: AtomId) -> Vec<PredicateApplication<'a>> {
        let space = self.space();
        let mut results = Vec::new();

        if !space.contains(entity) {
            return results;
        }

        for list in space.get_incoming(entity) {
            if list.link_type != LinkType::List {
                continue;
            }

            for evaluation in space.get_incoming(list.id) {
                if evaluation.link_type != LinkType::Evaluation || evaluation.arity() != 2 {
                    continue;
                }

                let Some(predicate) = space
                    .get_atom(evaluation.outgoing[0])
                    .and_then(Atom::as_node)
                else {
                    continue;
                };

                let args = space
                    .get_outgoing(list.id)
                    .into_iter()
                    .filter_map(Atom::as_node)
                    .collect();

                results.push(PredicateApplication {
                    predicate,
                    args,
                    truth_value: evaluation.truth_value,
                });
            }
        }

        results
    }
}
