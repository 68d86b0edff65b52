//! railpost/crates/rp-store/src/lib.rs
//!
//! In-memory publication store and its derived views. State lives for the
//! process lifetime only; there is no persistence layer behind this crate.

pub mod store;
pub mod views;
pub mod seed;

pub use seed::seed_publications;
pub use store::PublicationStore;
