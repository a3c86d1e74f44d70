//! Parcel record and lifecycle status.
//!
//! # Responsibility
//! - Define the canonical parcel shape shared by store, service and CLI.
//! - Map lifecycle statuses to their stored string literals.
//!
//! # Invariants
//! - `number` is assigned by storage exactly once and never reused.
//! - `client` and `created_at` never change after creation.
//! - `status` is stored as free text; only the store gates read it.

use serde::{Deserialize, Serialize};

/// Storage-assigned parcel identifier.
pub type ParcelNumber = i64;

/// Owning client identifier. Used only as a filter key.
pub type ClientId = i64;

/// Conventional parcel lifecycle: `registered -> sent -> delivered`.
///
/// The store does not enforce this ordering; any string can be written
/// through `set_status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParcelStatus {
    /// Initial status. Address change and deletion are allowed only here.
    Registered,
    /// Handed over to the carrier.
    Sent,
    /// Terminal by convention.
    Delivered,
}

impl ParcelStatus {
    /// Returns the exact literal persisted in `parcel.status`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Registered => "registered",
            Self::Sent => "sent",
            Self::Delivered => "delivered",
        }
    }

    /// Parses a stored status literal. Unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "registered" => Some(Self::Registered),
            "sent" => Some(Self::Sent),
            "delivered" => Some(Self::Delivered),
            _ => None,
        }
    }

    /// Returns the following status, or `None` for `Delivered`.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Registered => Some(Self::Sent),
            Self::Sent => Some(Self::Delivered),
            Self::Delivered => None,
        }
    }
}

impl std::fmt::Display for ParcelStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One persisted row of the `parcel` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parcel {
    /// Zero until storage assigns a number on insert.
    pub number: ParcelNumber,
    pub client: ClientId,
    /// Free-form status text; see [`ParcelStatus`] for known values.
    pub status: String,
    /// Free-form delivery address. Not validated.
    pub address: String,
    /// RFC3339 creation timestamp.
    pub created_at: String,
}

impl Parcel {
    /// Creates an unsaved parcel in the `registered` status.
    pub fn new(
        client: ClientId,
        address: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            number: 0,
            client,
            status: ParcelStatus::Registered.as_str().to_string(),
            address: address.into(),
            created_at: created_at.into(),
        }
    }

    /// Interprets `status` as a known lifecycle value.
    pub fn known_status(&self) -> Option<ParcelStatus> {
        ParcelStatus::parse(&self.status)
    }

    /// Returns whether address change and deletion are currently allowed.
    pub fn is_registered(&self) -> bool {
        self.known_status() == Some(ParcelStatus::Registered)
    }
}
