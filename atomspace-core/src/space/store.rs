//! In-memory hypergraph store.

use chrono::Utc;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::{debug, info, warn};

use crate::atoms::*;
use crate::error::{Error, Result};
use crate::space::config::AtomSpaceConfig;
use crate::space::query::AtomQuery;

/// In-memory hypergraph of typed, deduplicated atoms.
///
/// The atom table is kept alongside three derived indices:
///
/// - name index: `(node type, name)` to node id
/// - structural index: `(link type, outgoing)` to link id
/// - incoming index: atom id to the set of links whose outgoing contains it
///
/// Every mutating method takes `&mut self` and updates the table and all
/// affected indices before returning, so no caller can observe them out of
/// step. For sharing across threads see [`SharedAtomSpace`](super::SharedAtomSpace).
#[derive(Debug, Clone)]
pub struct AtomSpace {
    atoms: BTreeMap<AtomId, Atom>,
    node_index: HashMap<NodeType, HashMap<String, AtomId>>,
    link_index: HashMap<LinkType, HashMap<Vec<AtomId>, AtomId>>,
    incoming_index: HashMap<AtomId, BTreeSet<AtomId>>,
    next_id: u64,
    config: AtomSpaceConfig,
}

impl Default for AtomSpace {
    fn default() -> Self {
        Self::new()
    }
}

impl AtomSpace {
    /// Create an empty store with the default configuration.
    pub fn new() -> Self {
        Self::with_config(AtomSpaceConfig::default())
    }

    /// Create an empty store with the given configuration.
    pub fn with_config(config: AtomSpaceConfig) -> Self {
        Self {
            atoms: BTreeMap::new(),
            node_index: HashMap::new(),
            link_index: HashMap::new(),
            incoming_index: HashMap::new(),
            next_id: 0,
            config,
        }
    }

    /// The configuration this store was created with.
    pub fn config(&self) -> &AtomSpaceConfig {
        &self.config
    }

    fn allocate_id(&mut self) -> AtomId {
        let id = AtomId::from_raw(self.next_id);
        self.next_id += 1;
        id
    }

    fn default_attention(&self) -> Option<AttentionValue> {
        self.config
            .enable_attention
            .then(AttentionValue::default)
    }

    /// Warns each time an insert takes the store from `max_size` to `max_size + 1`.
    fn check_capacity(&self) {
        if self.config.max_size.checked_add(1) == Some(self.atoms.len()) {
            warn!(
                size = self.atoms.len(),
                max_size = self.config.max_size,
                "AtomSpace grew past its advisory size cap"
            );
        }
    }

    // ==================== Node Operations ====================

    /// Add a node, or merge into the existing node with the same type and name.
    ///
    /// On merge the truth values are combined (see [`TruthValue::merge`]) and a
    /// supplied `value` overwrites the stored one. A new node gets
    /// [`TruthValue::unknown`] when none is supplied.
    pub fn add_node(
        &mut self,
        node_type: NodeType,
        name: impl Into<String>,
        truth_value: Option<TruthValue>,
        value: Option<NodeValue>,
    ) -> &Node {
        let name = name.into();

        if let Some(existing_id) = self.node_index_lookup(node_type, &name) {
            debug!(id = %existing_id, node_type = %node_type, "Merging into existing node");
            if let Some(atom) = self.atoms.get_mut(&existing_id) {
                atom.merge_truth_value(truth_value);
                if let (Atom::Node(node), Some(value)) = (atom, value) {
                    node.value = Some(value);
                    node.timestamp = Utc::now();
                }
            }
            return self.node_ref(existing_id);
        }

        let id = self.allocate_id();
        let node = Node {
            id,
            node_type,
            name: name.clone(),
            value,
            truth_value: Some(truth_value.unwrap_or_default().normalized()),
            attention_value: self.default_attention(),
            timestamp: Utc::now(),
        };

        self.atoms.insert(id, Atom::Node(node));
        self.node_index.entry(node_type).or_default().insert(name, id);
        self.incoming_index.insert(id, BTreeSet::new());
        debug!(id = %id, node_type = %node_type, "Added node");
        self.check_capacity();

        self.node_ref(id)
    }

    fn node_ref(&self, id: AtomId) -> &Node {
        self.atoms
            .get(&id)
            .and_then(Atom::as_node)
            .expect("node index points at a live node")
    }

    /// Get a node by type and name.
    pub fn get_node(&self, node_type: NodeType, name: &str) -> Option<&Node> {
        let id = self.node_index_lookup(node_type, name)?;
        self.atoms.get(&id).and_then(Atom::as_node)
    }

    fn node_index_lookup(&self, node_type: NodeType, name: &str) -> Option<AtomId> {
        self.node_index.get(&node_type)?.get(name).copied()
    }

    // ==================== Link Operations ====================

    /// Add a link, or merge into the existing link with the same type and
    /// outgoing sequence.
    ///
    /// Every id in `outgoing` must exist. If one does not, the insertion is
    /// rejected with [`Error::DanglingReference`] and the store is unchanged.
    pub fn add_link(
        &mut self,
        link_type: LinkType,
        outgoing: impl Into<Vec<AtomId>>,
        truth_value: Option<TruthValue>,
    ) -> Result<&Link> {
        let outgoing = outgoing.into();

        if let Some(&missing) = outgoing.iter().find(|id| !self.atoms.contains_key(*id)) {
            warn!(missing = %missing, link_type = %link_type, "Rejected link with dangling reference");
            return Err(Error::dangling_reference(missing));
        }

        if let Some(existing_id) = self.link_index_lookup(link_type, &outgoing) {
            debug!(id = %existing_id, link_type = %link_type, "Merging into existing link");
            if let Some(atom) = self.atoms.get_mut(&existing_id) {
                atom.merge_truth_value(truth_value);
            }
            return Ok(self.link_ref(existing_id));
        }

        let id = self.allocate_id();
        let link = Link {
            id,
            link_type,
            outgoing: outgoing.clone(),
            truth_value: Some(truth_value.unwrap_or_default().normalized()),
            attention_value: self.default_attention(),
            timestamp: Utc::now(),
        };

        for target in &link.outgoing {
            self.incoming_index.entry(*target).or_default().insert(id);
        }
        self.incoming_index.entry(id).or_default();
        self.link_index.entry(link_type).or_default().insert(outgoing, id);
        self.atoms.insert(id, Atom::Link(link));
        debug!(id = %id, link_type = %link_type, "Added link");
        self.check_capacity();

        Ok(self.link_ref(id))
    }

    fn link_ref(&self, id: AtomId) -> &Link {
        self.atoms
            .get(&id)
            .and_then(Atom::as_link)
            .expect("link index points at a live link")
    }

    /// Get a link by type and exact outgoing sequence.
    pub fn get_link(&self, link_type: LinkType, outgoing: &[AtomId]) -> Option<&Link> {
        let id = self.link_index_lookup(link_type, outgoing)?;
        self.atoms.get(&id).and_then(Atom::as_link)
    }

    fn link_index_lookup(&self, link_type: LinkType, outgoing: &[AtomId]) -> Option<AtomId> {
        self.link_index.get(&link_type)?.get(outgoing).copied()
    }

    // ==================== Lookup & Traversal ====================

    /// Get an atom by id.
    pub fn get_atom(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(&id)
    }

    /// Whether an atom with this id exists.
    pub fn contains(&self, id: AtomId) -> bool {
        self.atoms.contains_key(&id)
    }

    /// All links whose outgoing sequence contains `id`, in creation order.
    ///
    /// A link that references `id` several times is returned once.
    pub fn get_incoming(&self, id: AtomId) -> Vec<&Link> {
        self.incoming_index
            .get(&id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|link_id| self.atoms.get(link_id))
                    .filter_map(Atom::as_link)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The resolved outgoing atoms of a link, in order.
    ///
    /// Empty when `link_id` is unknown or not a link. Positions whose target no
    /// longer exists are skipped.
    pub fn get_outgoing(&self, link_id: AtomId) -> Vec<&Atom> {
        match self.atoms.get(&link_id) {
            Some(Atom::Link(link)) => link
                .outgoing
                .iter()
                .filter_map(|id| self.atoms.get(id))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// All atoms satisfying every filter of `query`, in creation order.
    pub fn query(&self, query: &AtomQuery) -> Vec<&Atom> {
        self.atoms.values().filter(|atom| query.matches(atom)).collect()
    }

    /// Every atom in creation order.
    pub fn get_all_atoms(&self) -> Vec<&Atom> {
        self.atoms.values().collect()
    }

    /// Iterate over all nodes in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.atoms.values().filter_map(Atom::as_node)
    }

    /// Iterate over all links in creation order.
    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.atoms.values().filter_map(Atom::as_link)
    }

    /// Number of atoms.
    pub fn size(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Whether the store holds more atoms than its advisory cap.
    pub fn is_over_capacity(&self) -> bool {
        self.atoms.len() > self.config.max_size
    }

    // ==================== Mutation ====================

    /// Overwrite an atom's truth value. Returns false if the atom is unknown.
    pub fn update_truth_value(&mut self, id: AtomId, truth_value: TruthValue) -> bool {
        match self.atoms.get_mut(&id) {
            Some(atom) => {
                atom.set_truth_value(truth_value);
                true
            }
            None => false,
        }
    }

    /// Overwrite an atom's attention value. Returns false if the atom is unknown.
    pub fn update_attention(&mut self, id: AtomId, attention_value: AttentionValue) -> bool {
        match self.atoms.get_mut(&id) {
            Some(atom) => {
                atom.set_attention_value(attention_value);
                true
            }
            None => false,
        }
    }

    /// Delete an atom. Returns false if it does not exist.
    ///
    /// Deletion does not cascade: links that reference the deleted atom keep
    /// its id in their outgoing sequence and become dangling.
    pub fn delete_atom(&mut self, id: AtomId) -> bool {
        let Some(atom) = self.atoms.remove(&id) else {
            return false;
        };

        match &atom {
            Atom::Node(node) => {
                if let Some(names) = self.node_index.get_mut(&node.node_type) {
                    names.remove(&node.name);
                }
            }
            Atom::Link(link) => {
                if let Some(sequences) = self.link_index.get_mut(&link.link_type) {
                    sequences.remove(&link.outgoing);
                }
                for target in &link.outgoing {
                    if let Some(incoming) = self.incoming_index.get_mut(target) {
                        incoming.remove(&id);
                    }
                }
            }
        }
        self.incoming_index.remove(&id);

        debug!(id = %id, atom_type = %atom.atom_type(), "Deleted atom");
        true
    }

    /// Remove every atom and index entry. Ids are not reused afterwards.
    pub fn clear(&mut self) {
        let removed = self.atoms.len();
        self.atoms.clear();
        self.node_index.clear();
        self.link_index.clear();
        self.incoming_index.clear();
        info!(removed, "Cleared AtomSpace");
    }

    // ==================== Statistics ====================

    /// Get statistics about the store.
    pub fn stats(&self) -> AtomSpaceStats {
        let mut stats = AtomSpaceStats {
            total_atoms: self.atoms.len(),
            ..Default::default()
        };

        for atom in self.atoms.values() {
            *stats.atoms_by_type.entry(atom.atom_type()).or_insert(0) += 1;
            match atom {
                Atom::Node(_) => stats.node_count += 1,
                Atom::Link(link) => {
                    stats.link_count += 1;
                    if link.outgoing.iter().any(|id| !self.atoms.contains_key(id)) {
                        stats.dangling_links += 1;
                    }
                }
            }
        }

        stats
    }
}

/// Statistics about an AtomSpace.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AtomSpaceStats {
    pub total_atoms: usize,
    pub node_count: usize,
    pub link_count: usize,
    pub atoms_by_type: HashMap<AtomType, usize>,
    /// Links with at least one outgoing id that no longer resolves
    pub dangling_links: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn concept(space: &mut AtomSpace, name: &str) -> AtomId {
        space.add_node(NodeType::Concept, name, None, None).id
    }

    #[test]
    fn test_add_concept_node() {
        let mut space = AtomSpace::new();
        let node = space.add_node(NodeType::Concept, "cat", None, None);

        assert_eq!(node.node_type, NodeType::Concept);
        assert_eq!(node.name, "cat");
        assert_eq!(node.truth_value, Some(TruthValue::unknown()));
        assert_eq!(node.attention_value, Some(AttentionValue::default()));
    }

    #[test]
    fn test_attention_disabled() {
        let mut space = AtomSpace::with_config(AtomSpaceConfig::new().with_attention(false));
        let node = space.add_node(NodeType::Concept, "cat", None, None);
        assert_eq!(node.attention_value, None);
    }

    #[test]
    fn test_duplicate_node_is_deduplicated() {
        let mut space = AtomSpace::new();
        let first = concept(&mut space, "animal");
        let second = concept(&mut space, "animal");

        assert_eq!(first, second);
        assert_eq!(space.size(), 1);
    }

    #[test]
    fn test_same_name_different_type_is_distinct() {
        let mut space = AtomSpace::new();
        let concept_id = concept(&mut space, "likes");
        let predicate_id = space.add_node(NodeType::Predicate, "likes", None, None).id;

        assert_ne!(concept_id, predicate_id);
        assert_eq!(space.size(), 2);
    }

    #[test]
    fn test_node_merge_combines_truth_values() {
        let mut space = AtomSpace::new();
        space.add_node(NodeType::Concept, "test", Some(TruthValue::new(0.8, 0.5)), None);
        let node = space.add_node(NodeType::Concept, "test", Some(TruthValue::new(0.6, 0.7)), None);

        let tv = node.truth_value.unwrap();
        assert_eq!(tv.confidence, 1.0);
        assert!((tv.strength - (0.8 * 0.5 + 0.6 * 0.7) / 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_node_merge_without_truth_value_keeps_existing() {
        let mut space = AtomSpace::new();
        space.add_node(NodeType::Concept, "test", Some(TruthValue::new(0.9, 0.4)), None);
        let node = space.add_node(NodeType::Concept, "test", None, None);
        assert_eq!(node.truth_value, Some(TruthValue::new(0.9, 0.4)));
    }

    #[test]
    fn test_node_value_is_stored_and_overwritten() {
        let mut space = AtomSpace::new();
        let node = space.add_node(NodeType::Number, "42", None, Some(42i64.into()));
        assert_eq!(node.value, Some(NodeValue::Number(42.0)));

        let node = space.add_node(NodeType::Number, "42", None, Some("forty-two".into()));
        assert_eq!(node.value, Some(NodeValue::Text("forty-two".to_string())));

        let node = space.add_node(NodeType::Number, "42", None, None);
        assert_eq!(node.value, Some(NodeValue::Text("forty-two".to_string())));
    }

    #[test]
    fn test_add_and_get_link() {
        let mut space = AtomSpace::new();
        let a = concept(&mut space, "a");
        let b = concept(&mut space, "b");

        let link_id = space.add_link(LinkType::Similarity, vec![a, b], None).unwrap().id;
        let retrieved = space.get_link(LinkType::Similarity, &[a, b]).unwrap();

        assert_eq!(retrieved.id, link_id);
        assert_eq!(retrieved.outgoing, vec![a, b]);
        assert!(space.get_link(LinkType::Inheritance, &[a, b]).is_none());
    }

    #[test]
    fn test_duplicate_link_is_deduplicated() {
        let mut space = AtomSpace::new();
        let x = concept(&mut space, "x");
        let y = concept(&mut space, "y");

        let first = space.add_link(LinkType::Member, vec![x, y], None).unwrap().id;
        let second = space.add_link(LinkType::Member, vec![x, y], None).unwrap().id;

        assert_eq!(first, second);
        assert_eq!(space.size(), 3);
    }

    #[test]
    fn test_link_order_is_significant() {
        let mut space = AtomSpace::new();
        let x = concept(&mut space, "x");
        let y = concept(&mut space, "y");

        let forward = space.add_link(LinkType::List, vec![x, y], None).unwrap().id;
        let backward = space.add_link(LinkType::List, vec![y, x], None).unwrap().id;

        assert_ne!(forward, backward);
        assert_eq!(space.size(), 4);
    }

    #[test]
    fn test_link_merge_combines_truth_values() {
        let mut space = AtomSpace::new();
        let x = concept(&mut space, "x");
        let y = concept(&mut space, "y");

        space
            .add_link(LinkType::Inheritance, vec![x, y], Some(TruthValue::new(1.0, 0.4)))
            .unwrap();
        let link = space
            .add_link(LinkType::Inheritance, vec![x, y], Some(TruthValue::new(0.0, 0.4)))
            .unwrap();

        let tv = link.truth_value.unwrap();
        assert!((tv.strength - 0.5).abs() < 1e-9);
        assert!((tv.confidence - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_dangling_link_is_rejected_without_side_effects() {
        let mut space = AtomSpace::new();
        let cat = concept(&mut space, "cat");
        let missing = AtomId::from_raw(999);

        let err = space
            .add_link(LinkType::Inheritance, vec![cat, missing], None)
            .unwrap_err();

        assert!(matches!(err, Error::DanglingReference { missing: m } if m == missing));
        assert_eq!(space.size(), 1);
        assert!(space.get_incoming(cat).is_empty());
    }

    #[test]
    fn test_incoming_links() {
        let mut space = AtomSpace::new();
        let cat = concept(&mut space, "cat");
        let animal = concept(&mut space, "animal");
        let mammal = concept(&mut space, "mammal");

        let first = space.add_link(LinkType::Inheritance, vec![cat, animal], None).unwrap().id;
        let second = space.add_link(LinkType::Inheritance, vec![cat, mammal], None).unwrap().id;

        let incoming: Vec<AtomId> = space.get_incoming(cat).iter().map(|l| l.id).collect();
        assert_eq!(incoming, vec![first, second]);
        assert_eq!(space.get_incoming(animal).len(), 1);
        assert!(space.get_incoming(AtomId::from_raw(999)).is_empty());
    }

    #[test]
    fn test_repeated_target_registers_link_once() {
        let mut space = AtomSpace::new();
        let a = concept(&mut space, "a");

        let link = space.add_link(LinkType::List, vec![a, a, a], None).unwrap().id;

        let incoming: Vec<AtomId> = space.get_incoming(a).iter().map(|l| l.id).collect();
        assert_eq!(incoming, vec![link]);

        assert!(space.delete_atom(link));
        assert!(space.get_incoming(a).is_empty());
    }

    #[test]
    fn test_outgoing_atoms_in_order() {
        let mut space = AtomSpace::new();
        let likes = space.add_node(NodeType::Predicate, "likes", None, None).id;
        let john = concept(&mut space, "John");
        let mary = concept(&mut space, "Mary");

        let list = space.add_link(LinkType::List, vec![john, mary], None).unwrap().id;
        let eval = space.add_link(LinkType::Evaluation, vec![likes, list], None).unwrap().id;

        let outgoing: Vec<AtomId> = space.get_outgoing(eval).iter().map(|a| a.id()).collect();
        assert_eq!(outgoing, vec![likes, list]);

        assert!(space.get_outgoing(john).is_empty());
        assert!(space.get_outgoing(AtomId::from_raw(999)).is_empty());
    }

    #[test]
    fn test_outgoing_skips_deleted_targets() {
        let mut space = AtomSpace::new();
        let a = concept(&mut space, "a");
        let b = concept(&mut space, "b");
        let c = concept(&mut space, "c");
        let list = space.add_link(LinkType::List, vec![a, b, c], None).unwrap().id;

        assert!(space.delete_atom(b));

        let outgoing: Vec<AtomId> = space.get_outgoing(list).iter().map(|a| a.id()).collect();
        assert_eq!(outgoing, vec![a, c]);
        assert_eq!(space.get_atom(list).and_then(Atom::as_link).unwrap().outgoing, vec![a, b, c]);
        assert_eq!(space.stats().dangling_links, 1);
    }

    #[test]
    fn test_query_by_type_and_name() {
        let mut space = AtomSpace::new();
        concept(&mut space, "cat");
        concept(&mut space, "dog");
        space.add_node(NodeType::Predicate, "likes", None, None);

        let concepts = space.query(&AtomQuery::new().atom_type(NodeType::Concept));
        assert_eq!(concepts.len(), 2);
        assert!(concepts.iter().all(|a| a.is_node()));

        let cats = space.query(&AtomQuery::new().name("cat"));
        assert_eq!(cats.len(), 1);
        assert_eq!(cats[0].as_node().unwrap().name, "cat");

        assert_eq!(space.query(&AtomQuery::new()).len(), 3);
    }

    #[test]
    fn test_query_by_outgoing() {
        let mut space = AtomSpace::new();
        let a = concept(&mut space, "a");
        let b = concept(&mut space, "b");
        let sim = space.add_link(LinkType::Similarity, vec![a, b], None).unwrap().id;
        space.add_link(LinkType::Similarity, vec![b, a], None).unwrap();
        let list = space.add_link(LinkType::List, vec![a, b], None).unwrap().id;

        let ids: Vec<AtomId> = space
            .query(&AtomQuery::new().outgoing(vec![a, b]))
            .iter()
            .map(|atom| atom.id())
            .collect();
        assert_eq!(ids, vec![sim, list]);

        let typed = space.query(&AtomQuery::new().atom_type(LinkType::List).outgoing(vec![a, b]));
        assert_eq!(typed.len(), 1);
    }

    #[test]
    fn test_delete_node_removes_name_index() {
        let mut space = AtomSpace::new();
        let cat = concept(&mut space, "cat");

        assert!(space.delete_atom(cat));
        assert!(space.get_node(NodeType::Concept, "cat").is_none());
        assert!(space.get_atom(cat).is_none());

        let again = concept(&mut space, "cat");
        assert_ne!(again, cat);
    }

    #[test]
    fn test_delete_link_removes_incoming_entries() {
        let mut space = AtomSpace::new();
        let cat = concept(&mut space, "cat");
        let animal = concept(&mut space, "animal");
        let link = space.add_link(LinkType::Inheritance, vec![cat, animal], None).unwrap().id;

        assert!(space.delete_atom(link));
        assert!(space.get_incoming(cat).is_empty());
        assert!(space.get_incoming(animal).is_empty());
        assert!(space.get_link(LinkType::Inheritance, &[cat, animal]).is_none());

        let recreated = space.add_link(LinkType::Inheritance, vec![cat, animal], None).unwrap().id;
        assert_ne!(recreated, link);
    }

    #[test]
    fn test_delete_unknown_atom() {
        let mut space = AtomSpace::new();
        concept(&mut space, "cat");

        assert!(!space.delete_atom(AtomId::from_raw(999)));
        assert_eq!(space.size(), 1);
    }

    #[test]
    fn test_deleting_node_leaves_links_dangling() {
        let mut space = AtomSpace::new();
        let cat = concept(&mut space, "cat");
        let animal = concept(&mut space, "animal");
        let link = space.add_link(LinkType::Inheritance, vec![cat, animal], None).unwrap().id;

        assert!(space.delete_atom(cat));

        assert!(space.contains(link));
        assert_eq!(space.get_incoming(animal).len(), 1);
        assert!(space
            .add_link(LinkType::Inheritance, vec![cat, animal], None)
            .unwrap_err()
            .is_dangling_reference());
    }

    #[test]
    fn test_clear() {
        let mut space = AtomSpace::new();
        let a = concept(&mut space, "a");
        let b = concept(&mut space, "b");
        space.add_link(LinkType::List, vec![a, b], None).unwrap();

        space.clear();

        assert!(space.is_empty());
        assert!(space.get_node(NodeType::Concept, "a").is_none());
        assert!(space.get_link(LinkType::List, &[a, b]).is_none());
        assert!(space.get_incoming(a).is_empty());

        let fresh = concept(&mut space, "a");
        assert!(fresh > b);
    }

    #[test]
    fn test_update_truth_value_and_attention() {
        let mut space = AtomSpace::new();
        let cat = concept(&mut space, "cat");

        assert!(space.update_truth_value(cat, TruthValue::new(0.9, 0.9)));
        assert!(space.update_attention(cat, AttentionValue::new(10.0, 2.0, true)));

        let atom = space.get_atom(cat).unwrap();
        assert_eq!(atom.truth_value(), Some(TruthValue::new(0.9, 0.9)));
        assert_eq!(atom.attention_value(), Some(AttentionValue::new(10.0, 2.0, true)));

        let missing = AtomId::from_raw(999);
        assert!(!space.update_truth_value(missing, TruthValue::certain()));
        assert!(!space.update_attention(missing, AttentionValue::default()));
    }

    #[test]
    fn test_update_truth_value_overwrites_without_merge() {
        let mut space = AtomSpace::new();
        let cat = space
            .add_node(NodeType::Concept, "cat", Some(TruthValue::new(0.9, 0.9)), None)
            .id;

        space.update_truth_value(cat, TruthValue::new(0.1, 0.2));
        assert_eq!(space.get_atom(cat).unwrap().truth_value(), Some(TruthValue::new(0.1, 0.2)));
    }

    #[test]
    fn test_max_size_is_advisory() {
        let mut space = AtomSpace::with_config(AtomSpaceConfig::new().with_max_size(2));
        concept(&mut space, "a");
        concept(&mut space, "b");
        assert!(!space.is_over_capacity());

        concept(&mut space, "c");
        assert_eq!(space.size(), 3);
        assert!(space.is_over_capacity());
    }

    #[test]
    fn test_unbounded_max_size_does_not_overflow() {
        let mut space = AtomSpace::with_config(AtomSpaceConfig::new().with_max_size(usize::MAX));
        let cat = concept(&mut space, "cat");
        let dog = concept(&mut space, "dog");
        space.add_link(LinkType::Similarity, vec![cat, dog], None).unwrap();

        assert_eq!(space.size(), 3);
        assert!(!space.is_over_capacity());
    }

    #[test]
    fn test_capacity_is_crossed_again_after_deletes() {
        let mut space = AtomSpace::with_config(AtomSpaceConfig::new().with_max_size(1));
        concept(&mut space, "a");
        let b = concept(&mut space, "b");
        assert!(space.is_over_capacity());

        space.delete_atom(b);
        assert!(!space.is_over_capacity());

        concept(&mut space, "c");
        assert!(space.is_over_capacity());
    }

    #[test]
    fn test_stored_truth_values_stay_in_unit_range() {
        let mut space = AtomSpace::new();
        let raw = |strength, confidence| TruthValue {
            strength,
            confidence,
        };

        let cat = space
            .add_node(NodeType::Concept, "cat", Some(raw(1.0, 0.3)), None)
            .id;
        space.add_node(NodeType::Concept, "cat", Some(raw(1.0, -0.5)), None);
        let merged = space.get_atom(cat).unwrap().truth_value().unwrap();
        assert!((0.0..=1.0).contains(&merged.confidence));
        assert!((0.0..=1.0).contains(&merged.strength));

        let dog = space
            .add_node(NodeType::Concept, "dog", Some(raw(2.0, -1.0)), None)
            .id;
        assert_eq!(space.get_atom(dog).unwrap().truth_value(), Some(TruthValue::new(1.0, 0.0)));

        let link = space
            .add_link(LinkType::List, vec![cat, dog], Some(raw(-0.3, 1.5)))
            .unwrap()
            .id;
        assert_eq!(space.get_atom(link).unwrap().truth_value(), Some(TruthValue::new(0.0, 1.0)));

        space.update_truth_value(cat, raw(1.2, 7.0));
        assert_eq!(space.get_atom(cat).unwrap().truth_value(), Some(TruthValue::certain()));
    }

    #[test]
    fn test_lookups_after_delete_and_reinsert() {
        let mut space = AtomSpace::new();
        let a = concept(&mut space, "a");
        let b = concept(&mut space, "b");
        let first = space.add_link(LinkType::List, vec![a, b], None).unwrap().id;

        assert!(space.delete_atom(first));
        assert!(space.get_link(LinkType::List, &[a, b]).is_none());

        let second = space.add_link(LinkType::List, vec![a, b], None).unwrap().id;
        assert_ne!(first, second);
        assert_eq!(space.get_link(LinkType::List, &[a, b]).map(|l| l.id), Some(second));
        assert!(space.get_link(LinkType::Similarity, &[a, b]).is_none());

        assert!(space.delete_atom(a));
        assert!(space.get_node(NodeType::Concept, "a").is_none());
        assert_eq!(space.get_node(NodeType::Concept, "b").map(|n| n.id), Some(b));
        assert!(space.get_node(NodeType::Predicate, "b").is_none());
    }

    #[test]
    fn test_stats() {
        let mut space = AtomSpace::new();
        let a = concept(&mut space, "a");
        let b = concept(&mut space, "b");
        space.add_node(NodeType::Predicate, "p", None, None);
        space.add_link(LinkType::List, vec![a, b], None).unwrap();

        let stats = space.stats();
        assert_eq!(stats.total_atoms, 4);
        assert_eq!(stats.node_count, 3);
        assert_eq!(stats.link_count, 1);
        assert_eq!(stats.atoms_by_type.get(&AtomType::from(NodeType::Concept)), Some(&2));
        assert_eq!(stats.atoms_by_type.get(&AtomType::from(LinkType::List)), Some(&1));
        assert_eq!(stats.dangling_links, 0);
    }

    #[test]
    fn test_all_atoms_in_creation_order() {
        let mut space = AtomSpace::new();
        let ids: Vec<AtomId> = ["c", "a", "b"]
            .iter()
            .map(|name| concept(&mut space, name))
            .collect();

        let all: Vec<AtomId> = space.get_all_atoms().iter().map(|a| a.id()).collect();
        assert_eq!(all, ids);
        assert_eq!(space.nodes().count(), 3);
        assert_eq!(space.links().count(), 0);
    }
}
