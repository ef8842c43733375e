//! Catalog store and circulation engine.

/// Id-keyed book and member collections.
pub mod catalog;
/// Loan issue/return rules and append-only history.
pub mod circulation;
