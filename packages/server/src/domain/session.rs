//! Session tracker: per-connection edit history and the rate / identity policy.

use std::{collections::HashMap, time::Duration};

use super::{
    error::RejectReason,
    value_object::{ClientAgent, ConnectionId, OriginAddress, Timestamp},
};

/// Minimum time between accepted edits of one identity, and between edits of
/// different identities sharing an origin
pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(2_500);

/// Metadata of the last accepted edit of a connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub last_edit_at: Timestamp,
    pub origin: OriginAddress,
    pub agent: ClientAgent,
}

/// Table of session records keyed by connection id.
///
/// Records are inserted or replaced on accepted edits and removed on disconnect.
#[derive(Debug, Clone)]
pub struct SessionTracker {
    records: HashMap<ConnectionId, SessionRecord>,
    cooldown_millis: i64,
}

impl SessionTracker {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            records: HashMap::new(),
            cooldown_millis: i64::try_from(cooldown.as_millis()).unwrap_or(i64::MAX),
        }
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_millis.max(0) as u64)
    }

    /// Decide whether `connection_id` may edit at `now`.
    ///
    /// Rules, in order:
    /// 1. another identity from the same origin edited within the cooldown → rejected
    /// 2. no record for this identity → allowed
    /// 3. recorded origin or agent differs from the current one → rejected
    /// 4. own last edit within the cooldown → rejected
    /// 5. otherwise → allowed
    pub fn check_eligibility(
        &self,
        connection_id: &ConnectionId,
        origin: &OriginAddress,
        agent: &ClientAgent,
        now: Timestamp,
    ) -> Result<(), RejectReason> {
        let origin_busy = self.records.iter().any(|(id, record)| {
            id != connection_id && &record.origin == origin && self.within_cooldown(record, now)
        });
        if origin_busy {
            return Err(RejectReason::OriginThrottled);
        }

        let Some(record) = self.records.get(connection_id) else {
            return Ok(());
        };

        if &record.origin != origin || &record.agent != agent {
            return Err(RejectReason::IdentityMismatch);
        }

        if self.within_cooldown(record, now) {
            return Err(RejectReason::CooldownActive {
                remaining_millis: self
                    .cooldown_millis
                    .saturating_sub(now.millis_since(record.last_edit_at)),
            });
        }

        Ok(())
    }

    /// Store a fresh record for `connection_id`, replacing any previous one
    pub fn record(
        &mut self,
        connection_id: ConnectionId,
        origin: OriginAddress,
        agent: ClientAgent,
        now: Timestamp,
    ) {
        self.records.insert(
            connection_id,
            SessionRecord {
                last_edit_at: now,
                origin,
                agent,
            },
        );
    }

    pub fn remove(&mut self, connection_id: &ConnectionId) -> Option<SessionRecord> {
        self.records.remove(connection_id)
    }

    pub fn get(&self, connection_id: &ConnectionId) -> Option<&SessionRecord> {
        self.records.get(connection_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn within_cooldown(&self, record: &SessionRecord, now: Timestamp) -> bool {
        now.millis_since(record.last_edit_at) < self.cooldown_millis
    }
}

impl Default for SessionTracker {
    fn default() -> Self {
        Self::new(DEFAULT_COOLDOWN)
    }
}
