//! Public library API for dumping typed values into a hierarchical node store and loading them back.

/// Type-tag registry, encode/decode dispatch, payload model, and the reference store.
pub mod store;
