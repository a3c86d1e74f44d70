//! Parcel use-case service.
//!
//! # Responsibility
//! - Provide tracker entry points: register, list, advance, re-address, drop.
//! - Delegate persistence and status gates to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository gates.
//! - Service layer remains storage-agnostic.
//! - Logs carry parcel metadata only, never addresses.

use crate::model::parcel::{ClientId, Parcel, ParcelNumber, ParcelStatus};
use crate::repo::parcel_repo::{ParcelRepository, RepoError, RepoResult};
use chrono::{SecondsFormat, Utc};
use log::info;

/// Use-case service wrapper for parcel tracking.
pub struct ParcelService<R: ParcelRepository> {
    repo: R,
}

impl<R: ParcelRepository> ParcelService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new parcel for `client` stamped with the current UTC time.
    ///
    /// # Contract
    /// - Status is `registered`.
    /// - Returns the stored parcel including its assigned number.
    pub fn register(&self, client: ClientId, address: impl Into<String>) -> RepoResult<Parcel> {
        let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        let mut parcel = Parcel::new(client, address, created_at);
        parcel.number = self.repo.add_parcel(&parcel)?;

        info!(
            "event=parcel_register module=service status=ok number={} client={}",
            parcel.number, parcel.client
        );
        Ok(parcel)
    }

    /// Gets one parcel by number.
    pub fn get(&self, number: ParcelNumber) -> RepoResult<Parcel> {
        self.repo.get_parcel(number)
    }

    /// Lists all parcels of one client. Order is unspecified.
    pub fn client_parcels(&self, client: ClientId) -> RepoResult<Vec<Parcel>> {
        self.repo.get_parcels_by_client(client)
    }

    /// Moves a parcel one step along `registered -> sent -> delivered`.
    ///
    /// A delivered parcel is left untouched. Returns the resulting status.
    ///
    /// The write only lands if the status is still the one that was read;
    /// a concurrent change makes it fail instead of moving the parcel back.
    ///
    /// # Errors
    /// - `NotFound` when the parcel does not exist.
    /// - `Precondition(StatusTransition)` when the status changed (or the
    ///   parcel was deleted) after it was read.
    /// - `InvalidData` when the stored status is not a known lifecycle value.
    pub fn next_status(&self, number: ParcelNumber) -> RepoResult<ParcelStatus> {
        let parcel = self.repo.get_parcel(number)?;
        let current = parcel.known_status().ok_or_else(|| {
            RepoError::InvalidData(format!(
                "unknown status `{}` for parcel {number}",
                parcel.status
            ))
        })?;

        let Some(next) = current.next() else {
            return Ok(current);
        };

        self.repo.advance_status(number, current, next)?;
        info!(
            "event=parcel_status module=service status=ok number={number} from={current} to={next}"
        );
        Ok(next)
    }

    /// Replaces the delivery address of a `registered` parcel.
    pub fn change_address(&self, number: ParcelNumber, address: &str) -> RepoResult<()> {
        self.repo.set_address(number, address)?;
        info!("event=parcel_address module=service status=ok number={number}");
        Ok(())
    }

    /// Deletes a `registered` parcel.
    pub fn delete(&self, number: ParcelNumber) -> RepoResult<()> {
        self.repo.delete_parcel(number)?;
        info!("event=parcel_delete module=service status=ok number={number}");
        Ok(())
    }
}
