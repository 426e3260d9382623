//! chained-hashtable: a string-keyed hash table built from scratch over a
//! fixed bucket array, fixed djb2 hashing, and singly-linked collision
//! chains, with growth only through an explicit doubling resize.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: make every structural step of a chained hash table — hashing,
//!   bucket dispatch, chain splice/unlink, relocation on resize — explicit
//!   and independently testable, instead of delegating to a ready-made map.
//! - Layers:
//!   - hash: the fixed djb2 accumulator and the bucket projection. Leaf
//!     module, pure functions, bit-exact by contract so bucket layouts are
//!     deterministic and pinnable in tests.
//!   - HashTable: bucket heads over an entry arena; chains link entries by
//!     slot handle. Insert, lookup, remove, iterate, and a consuming resize
//!     that transfers the arena and relinks every entry against the doubled
//!     capacity.
//!   - BasicHashTable: the degenerate one-slot-per-bucket baseline with a
//!     documented data-loss policy on collision, kept for comparison.
//!
//! Constraints
//! - Single-threaded: operations take `&self`/`&mut self`/`self`; exclusive
//!   access per call is the borrow checker's problem, not a lock's.
//! - Exactly one hash function, not pluggable; every entry caches its full
//!   64-bit accumulator so relocation never re-reads key bytes.
//! - No load-factor policy: capacity is fixed until the caller trades the
//!   table in via `resize`, which consumes it and returns the doubled one.
//! - Entries have a single owner at all times: each is reachable from
//!   exactly one chain, and resize moves entries rather than cloning them.
//!
//! Why this split?
//! - Localize invariants: the hasher has a bit-exactness contract, the
//!   table has structural chain invariants, and each is testable alone.
//! - No unsafe anywhere: chains link generational arena handles, so a stale
//!   link is a loud panic, never a dangling pointer.
//! - The basic variant isolates exactly what chaining buys: the collision
//!   test that passes on `HashTable` demonstrably fails on
//!   `BasicHashTable`.
//!
//! Notes and non-goals
//! - Keys and values are `String`s; no generic keys or pluggable hashers.
//! - No automatic growth, no shrink, no persistence, no concurrency.
//! - Overwrite replaces the entry (old strings dropped, fresh entry spliced
//!   into the same chain position); there is no in-place `get_mut`.
//! - Teardown is `Drop`: the buckets and the arena own everything, so
//!   dropping the table releases every entry exactly once.

mod basic;
mod chained;
mod chained_proptest;
mod error;
pub mod hash;

// Public surface
pub use basic::BasicHashTable;
pub use chained::{HashTable, Iter};
pub use error::TableError;
