//! Coordinator for the attach/detach workflow.
//!
//! The attach endpoint does not return the updated device, so the only way to
//! observe the new relationship is a follow-up `get(device_id)`. The
//! coordinator ties that mutation and its confirming re-fetch into one
//! observable transition: a chain either completes with a fresh device to
//! swap into the view, or fails without touching prior state.
//!
//! Chains are identified by monotonically increasing tickets. Only the latest
//! issued ticket may resolve; anything older is dropped, so a slow re-fetch
//! from an earlier invocation can never overwrite the result of a later one.

use crate::model::device::Device;
use crate::sync::ApiError;

/// Errors surfaced by an attach/detach chain.
#[derive(Debug, Clone, PartialEq)]
pub enum RelationError {
    /// No battery was selected; no backend call was made.
    SelectionRequired,
    /// The attach (or detach) call itself was rejected. Prior view state is
    /// left untouched so the user can retry.
    AttachFailed(ApiError),
    /// The mutation succeeded but the confirming re-fetch failed (for example
    /// the device was deleted concurrently). The viewer should be routed back
    /// to the list.
    StaleResource(ApiError),
}

/// A claimed chain: the ticket to resolve it with and the battery it targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelationAttempt {
    pub ticket: u64,
    pub battery_id: i64,
}

/// What the backend said, reported back to the coordinator by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum RelationOutcome {
    /// The mutation call failed; the re-fetch was never issued.
    Rejected(ApiError),
    /// The mutation succeeded and the mandatory re-fetch returned the device.
    Refetched(Device),
    /// The mutation succeeded but the re-fetch failed.
    RefetchFailed(ApiError),
}

/// The view-facing result of a resolved chain.
#[derive(Debug, Clone, PartialEq)]
pub enum RelationResolution {
    /// Replace the cached device with this value, clear the pending selection
    /// and any prior error.
    Completed(Device),
    /// Surface the error; on `StaleResource` navigate back to the list.
    Failed(RelationError),
}

/// Serializes attach and detach chains for one device view.
///
/// Attach and detach share the ticket sequence, so an attach resolution that
/// arrives after a newer detach was issued is dropped like any other stale
/// chain.
#[derive(Debug, Default)]
pub struct RelationCoordinator {
    last_ticket: u64,
    outstanding: Option<u64>,
}

impl RelationCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a chain has been claimed but not resolved. Views disable
    /// the attach/detach controls during this window.
    pub fn in_flight(&self) -> bool {
        self.outstanding.is_some()
    }

    /// Claim a chain to attach the selected battery.
    ///
    /// Fails with `SelectionRequired` when nothing is selected, before any
    /// backend call is issued.
    pub fn begin_attach(
        &mut self,
        selection: Option<i64>,
    ) -> Result<RelationAttempt, RelationError> {
        match selection {
            Some(battery_id) => Ok(self.claim(battery_id)),
            None => Err(RelationError::SelectionRequired),
        }
    }

    /// Claim a chain to detach an attached battery. Detaching has no
    /// selection precondition: the target comes from the rendered collection.
    pub fn begin_detach(&mut self, battery_id: i64) -> RelationAttempt {
        self.claim(battery_id)
    }

    /// Resolve a chain. Returns `None` when `ticket` is not the outstanding
    /// one (an older chain resolving late, or a chain that already resolved)
    /// and the stale result is dropped without touching view state.
    pub fn resolve(
        &mut self,
        ticket: u64,
        outcome: RelationOutcome,
    ) -> Option<RelationResolution> {
        if self.outstanding != Some(ticket) {
            return None;
        }
        self.outstanding = None;
        Some(match outcome {
            RelationOutcome::Refetched(device) => RelationResolution::Completed(device),
            RelationOutcome::Rejected(err) => {
                RelationResolution::Failed(RelationError::AttachFailed(err))
            }
            RelationOutcome::RefetchFailed(err) => {
                RelationResolution::Failed(RelationError::StaleResource(err))
            }
        })
    }

    fn claim(&mut self, battery_id: i64) -> RelationAttempt {
        self.last_ticket += 1;
        self.outstanding = Some(self.last_ticket);
        RelationAttempt {
            ticket: self.last_ticket,
            battery_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(id: i64) -> Device {
        Device {
            id,
            name: format!("device-{}", id),
            batteries: Vec::new(),
        }
    }

    #[test]
    fn attach_without_selection_is_refused_before_any_call() {
        let mut coordinator = RelationCoordinator::new();
        let result = coordinator.begin_attach(None);
        assert_eq!(result, Err(RelationError::SelectionRequired));
        assert!(!coordinator.in_flight());
    }

    #[test]
    fn successful_chain_completes_with_the_refetched_device() {
        let mut coordinator = RelationCoordinator::new();
        let attempt = coordinator.begin_attach(Some(3)).unwrap();
        assert_eq!(attempt.battery_id, 3);
        assert!(coordinator.in_flight());

        let resolution =
            coordinator.resolve(attempt.ticket, RelationOutcome::Refetched(device(1)));
        assert_eq!(resolution, Some(RelationResolution::Completed(device(1))));
        assert!(!coordinator.in_flight());
    }

    #[test]
    fn rejected_mutation_fails_without_a_device() {
        let mut coordinator = RelationCoordinator::new();
        let attempt = coordinator.begin_attach(Some(3)).unwrap();

        let resolution = coordinator.resolve(
            attempt.ticket,
            RelationOutcome::Rejected(ApiError::NotFound),
        );
        assert_eq!(
            resolution,
            Some(RelationResolution::Failed(RelationError::AttachFailed(
                ApiError::NotFound
            )))
        );
    }

    #[test]
    fn failed_refetch_resolves_to_stale_resource() {
        let mut coordinator = RelationCoordinator::new();
        let attempt = coordinator.begin_attach(Some(3)).unwrap();

        let resolution = coordinator.resolve(
            attempt.ticket,
            RelationOutcome::RefetchFailed(ApiError::NotFound),
        );
        assert_eq!(
            resolution,
            Some(RelationResolution::Failed(RelationError::StaleResource(
                ApiError::NotFound
            )))
        );
    }

    #[test]
    fn stale_chain_never_overwrites_a_newer_one() {
        let mut coordinator = RelationCoordinator::new();
        let first = coordinator.begin_attach(Some(3)).unwrap();
        let second = coordinator.begin_attach(Some(4)).unwrap();

        // The older chain resolves late; it must be dropped.
        let stale = coordinator.resolve(first.ticket, RelationOutcome::Refetched(device(1)));
        assert_eq!(stale, None);
        assert!(coordinator.in_flight());

        let current =
            coordinator.resolve(second.ticket, RelationOutcome::Refetched(device(2)));
        assert_eq!(current, Some(RelationResolution::Completed(device(2))));
    }

    #[test]
    fn detach_shares_the_ticket_order_with_attach() {
        let mut coordinator = RelationCoordinator::new();
        let attach = coordinator.begin_attach(Some(3)).unwrap();
        let detach = coordinator.begin_detach(5);
        assert!(detach.ticket > attach.ticket);

        assert_eq!(
            coordinator.resolve(attach.ticket, RelationOutcome::Refetched(device(1))),
            None
        );
        assert_eq!(
            coordinator.resolve(detach.ticket, RelationOutcome::Refetched(device(2))),
            Some(RelationResolution::Completed(device(2)))
        );
    }

    #[test]
    fn a_resolved_ticket_cannot_resolve_twice() {
        let mut coordinator = RelationCoordinator::new();
        let attempt = coordinator.begin_attach(Some(3)).unwrap();
        coordinator
            .resolve(attempt.ticket, RelationOutcome::Refetched(device(1)))
            .unwrap();

        let again = coordinator.resolve(attempt.ticket, RelationOutcome::Refetched(device(9)));
        assert_eq!(again, None);
        assert!(!coordinator.in_flight());
    }
}
