//! Property-based tests for the AtomSpace using proptest.
//!
//! These tests verify the invariants the store promises under arbitrary
//! sequences of operations:
//!
//! - Insertion is idempotent on the identity key of nodes and links
//! - Truth-value merging caps confidence and ignores zero-evidence values
//! - Rejected link insertions leave the store untouched
//! - Derived indices always agree with the atom table
