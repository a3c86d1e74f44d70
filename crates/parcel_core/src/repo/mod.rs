//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Status-gated writes are single conditional statements, never
//!   read-then-write.
//! - Repository APIs return semantic errors (`NotFound`, `Precondition`) in
//!   addition to DB transport errors.

pub mod parcel_repo;
