use super::SplitState;
use crate::report::BuffGap;
use tracing::{info, warn};

impl SplitState<'_> {
    /// Best-effort coverage: for every group, pull the first eligible
    /// provider of each missing required buff from the unassigned pool.
    /// Gaps are recorded, never fatal.
    pub(crate) fn backfill_buffs(&mut self, required: &[String]) {
        if required.is_empty() {
            return;
        }
        let records = self.records;

        for g in 0..self.groups.len() {
            let mut covered = self.groups[g].buffs_provided(records);

            for buff in required {
                if covered.contains(buff) {
                    continue;
                }
                // No room left in this group; skip its remaining gaps.
                if self.groups[g].is_full() {
                    break;
                }

                let provider = (0..records.len()).find(|&i| {
                    self.eligible(i)
                        && records[i].buffs.iter().any(|b| b == buff)
                        && self.groups[g].can_add(&records[i], self.locked_to[i])
                });

                match provider {
                    Some(idx) => {
                        if self.groups[g].add(idx, &records[idx], self.locked_to[idx]) {
                            self.assigned[idx] = true;
                            // One provider may close several gaps at once.
                            for b in &records[idx].buffs {
                                covered.insert(b.clone());
                            }
                            info!(
                                "Assigned {} to Group {} for {}",
                                records[idx].name,
                                g + 1,
                                buff
                            );
                        }
                    }
                    None => {
                        warn!("⚠️ Could not find provider for {} in Group {}", buff, g + 1);
                        self.buff_gaps.push(BuffGap {
                            group_id: g + 1,
                            buff: buff.clone(),
                        });
                    }
                }
            }
        }
    }
}
