use super::SplitState;
use crate::config::LockFallback;
use crate::roster::LockAssignment;
use tracing::{info, warn};

impl SplitState<'_> {
    /// Place locked characters before any automatic distribution. A lock that
    /// cannot be honored is reported; the character is either dropped from
    /// distribution entirely or released back into the pools, per policy.
    pub(crate) fn resolve_locks(&mut self, locks: &[LockAssignment]) {
        if locks.is_empty() {
            return;
        }
        info!("🔒 Applying {} character locks", locks.len());

        for lock in locks {
            self.locks_requested += 1;

            let Some(idx) = self
                .records
                .iter()
                .position(|r| r.name == lock.character_name)
            else {
                warn!(
                    "⚠️ Lock for unknown character '{}' ignored",
                    lock.character_name
                );
                self.locks_failed += 1;
                continue;
            };

            if self.assigned[idx] || self.dropped[idx] {
                warn!("⚠️ Duplicate lock for {} ignored", lock.character_name);
                self.locks_failed += 1;
                continue;
            }

            if lock.group_id == 0 || lock.group_id > self.groups.len() {
                warn!(
                    "⚠️ Lock for {} targets Group {} which does not exist",
                    lock.character_name, lock.group_id
                );
                self.locks_failed += 1;
                self.reject_lock(idx);
                continue;
            }

            self.locked_to[idx] = Some(lock.group_id);
            let record = &self.records[idx];
            if self.groups[lock.group_id - 1].add(idx, record, Some(lock.group_id)) {
                self.assigned[idx] = true;
                self.locks_placed += 1;
                info!("🔒 {} locked to Group {}", record.name, lock.group_id);
            } else {
                warn!(
                    "⚠️ Could not lock {} to Group {}",
                    record.name, lock.group_id
                );
                self.locks_failed += 1;
                self.reject_lock(idx);
            }
        }
    }

    fn reject_lock(&mut self, idx: usize) {
        match self.params.lock_fallback {
            LockFallback::Drop => self.dropped[idx] = true,
            LockFallback::Redistribute => self.locked_to[idx] = None,
        }
    }
}
