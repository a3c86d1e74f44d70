//! Parcel domain model.
//!
//! # Invariants
//! - Every parcel is identified by a storage-assigned `ParcelNumber`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod parcel;
