// ===== raidforge/src/splitter/mod.rs =====
pub mod balance;
mod backfill;
mod distribute;
mod locks;

use crate::config::SplitParams;
use crate::error::{RaidForgeError, RfResult};
use crate::group::Group;
use crate::report::{
    BuffGap, GroupReport, RoleShortfall, SplitReport, SplitSummary, UnassignedReason,
    UnassignedReport,
};
use crate::roster::{CharacterRecord, LockAssignment, Tier};
use tracing::info;

/// The group-assignment engine. Holds the computation parameters and the
/// required-buff list; each `compute` call runs on fresh state, so one
/// `Splitter` can serve concurrent computations.
pub struct Splitter {
    params: SplitParams,
    required_buffs: Vec<String>,
}

impl Splitter {
    pub fn new(params: SplitParams) -> Self {
        Self {
            params,
            required_buffs: Vec::new(),
        }
    }

    pub fn with_required_buffs(mut self, buffs: Vec<String>) -> Self {
        self.required_buffs = buffs;
        self
    }

    pub fn params(&self) -> &SplitParams {
        &self.params
    }

    /// Partition `records` into `num_groups` groups. The stages run in a
    /// fixed order: locks, role seeding or tiered distribution, buff
    /// backfill, capacity fill, balance pass, serialization.
    pub fn compute(
        &self,
        records: &[CharacterRecord],
        locks: &[LockAssignment],
    ) -> RfResult<SplitReport> {
        if self.params.num_groups == 0 {
            return Err(RaidForgeError::Request(
                "num_groups must be at least 1".to_string(),
            ));
        }
        if self.params.group_size == 0 {
            return Err(RaidForgeError::Request(
                "group_size must be at least 1".to_string(),
            ));
        }
        if records.is_empty() {
            return Err(RaidForgeError::EmptyRoster);
        }

        info!(
            "🎯 Creating {} groups with max {} characters each",
            self.params.num_groups, self.params.group_size
        );

        let mut state = SplitState::new(records, &self.params);
        state.resolve_locks(locks);

        // With role quotas the distributor only seeds the targeted roles and
        // leaves the rest to backfill + capacity fill; without quotas the
        // tiered round robin places everyone.
        let has_targets =
            self.params.tanks_per_group.is_some() || self.params.healers_per_group.is_some();
        if has_targets {
            state.seed_role_targets();
        } else {
            state.distribute_tiers();
        }

        if self.params.buff_backfill {
            state.backfill_buffs(&self.required_buffs);
        }

        state.fill_remaining();

        if self.params.balance {
            state.optimize_balance();
        }

        Ok(state.finalize())
    }
}

/// Per-computation working state. Groups hold indices into `records`;
/// the parallel flag vectors track lock marks and placement progress.
pub(crate) struct SplitState<'a> {
    records: &'a [CharacterRecord],
    params: &'a SplitParams,
    groups: Vec<Group>,
    locked_to: Vec<Option<usize>>,
    assigned: Vec<bool>,
    dropped: Vec<bool>,
    rng: fastrand::Rng,

    locks_requested: usize,
    locks_placed: usize,
    locks_failed: usize,
    shortfalls: Vec<RoleShortfall>,
    buff_gaps: Vec<BuffGap>,
}

impl<'a> SplitState<'a> {
    fn new(records: &'a [CharacterRecord], params: &'a SplitParams) -> Self {
        let rng = match params.seed {
            Some(s) => fastrand::Rng::with_seed(s),
            None => fastrand::Rng::new(),
        };

        Self {
            records,
            params,
            groups: (1..=params.num_groups)
                .map(|g| Group::new(g, params.group_size))
                .collect(),
            locked_to: vec![None; records.len()],
            assigned: vec![false; records.len()],
            dropped: vec![false; records.len()],
            rng,
            locks_requested: 0,
            locks_placed: 0,
            locks_failed: 0,
            shortfalls: Vec::new(),
            buff_gaps: Vec::new(),
        }
    }

    /// Still a candidate for automatic placement.
    fn eligible(&self, idx: usize) -> bool {
        !self.assigned[idx]
            && !self.dropped[idx]
            && !(self.params.skip_inactive && self.records[idx].tier == Tier::Inactive)
    }

    fn finalize(self) -> SplitReport {
        let records = self.records;

        let mut unassigned = Vec::new();
        for (idx, rec) in records.iter().enumerate() {
            if self.assigned[idx] {
                continue;
            }
            let reason = if self.dropped[idx] {
                UnassignedReason::LockRejected
            } else if self.params.skip_inactive && rec.tier == Tier::Inactive {
                UnassignedReason::NotEligible
            } else if self.groups.iter().all(|g| g.is_full()) {
                UnassignedReason::CapacityExhausted
            } else if self
                .groups
                .iter()
                .filter(|g| !g.is_full())
                .all(|g| g.players_used.contains(&rec.player))
            {
                UnassignedReason::PlayerConflict
            } else {
                UnassignedReason::CapacityExhausted
            };
            unassigned.push(UnassignedReport {
                name: rec.name.clone(),
                player: rec.player.clone(),
                role: rec.role,
                tier: rec.tier,
                reason,
            });
        }

        let assigned_count = self.assigned.iter().filter(|&&a| a).count();
        for group in &self.groups {
            info!(
                "Group {}: {}/{} members ({}T/{}H/{}D), priority score {}",
                group.group_id,
                group.len(),
                group.capacity,
                group.bucket_count(crate::roster::Bucket::Tank),
                group.bucket_count(crate::roster::Bucket::Healer),
                group.bucket_count(crate::roster::Bucket::Dps),
                group.priority_score()
            );
        }
        info!(
            "✅ Distributed {} of {} characters across {} groups",
            assigned_count,
            records.len(),
            self.groups.len()
        );

        let balance_variance: f32 = self.groups.iter().map(balance::group_mains_variance).sum();

        let groups = self
            .groups
            .iter()
            .map(|g| GroupReport::from_group(g, records, &self.locked_to))
            .collect();

        SplitReport {
            groups,
            unassigned,
            summary: SplitSummary {
                total_characters: records.len(),
                assigned: assigned_count,
                unassigned: records.len() - assigned_count,
                locks_requested: self.locks_requested,
                locks_placed: self.locks_placed,
                locks_failed: self.locks_failed,
                role_shortfalls: self.shortfalls,
                buff_gaps: self.buff_gaps,
                balance_variance,
            },
        }
    }
}
