use super::SplitState;
use crate::report::RoleShortfall;
use crate::roster::{Bucket, Role, Tier};
use strum::IntoEnumIterator;
use tracing::{info, warn};

impl SplitState<'_> {
    /// Seed roles that carry an explicit per-group quota, tanks before
    /// healers, highest-priority characters first. Characters are dealt in
    /// per-group chunks until every group has its quota or the pool runs dry.
    pub(crate) fn seed_role_targets(&mut self) {
        if let Some(per_group) = self.params.tanks_per_group {
            self.seed_role(Bucket::Tank, per_group);
        }
        if let Some(per_group) = self.params.healers_per_group {
            self.seed_role(Bucket::Healer, per_group);
        }
    }

    fn seed_role(&mut self, bucket: Bucket, per_group: usize) {
        if per_group == 0 {
            return;
        }
        let records = self.records;
        let needed = self.groups.len() * per_group;

        let mut pool: Vec<usize> = (0..records.len())
            .filter(|&i| self.eligible(i) && records[i].bucket() == bucket)
            .collect();
        pool.sort_by_key(|&i| records[i].tier.precedence());

        if pool.len() < needed {
            warn!(
                "⚠️ Not enough {}s! Need {}, have {}",
                bucket,
                needed,
                pool.len()
            );
            self.shortfalls.push(RoleShortfall {
                role: bucket,
                needed,
                available: pool.len(),
            });
        }

        for (slot, &idx) in pool.iter().take(needed).enumerate() {
            let g = slot / per_group;
            let record = &records[idx];
            if self.groups[g].add(idx, record, self.locked_to[idx]) {
                self.assigned[idx] = true;
                info!("Assigned {} {} to Group {}", bucket, record.name, g + 1);
            } else {
                warn!(
                    "⚠️ Could not seed {} {} into Group {}",
                    bucket,
                    record.name,
                    g + 1
                );
            }
        }
    }

    /// The primary allocation pass: tier by tier in precedence order, role by
    /// role within each tier, each bucket dealt out with the randomized
    /// least-loaded round robin.
    pub(crate) fn distribute_tiers(&mut self) {
        let records = self.records;
        for tier in Tier::iter() {
            if tier == Tier::Inactive && self.params.skip_inactive {
                continue;
            }
            info!("📋 Distributing {} characters", tier);
            for role in Role::iter() {
                let bucket: Vec<usize> = (0..records.len())
                    .filter(|&i| {
                        self.eligible(i) && records[i].tier == tier && records[i].role == role
                    })
                    .collect();
                if !bucket.is_empty() {
                    self.distribute_round_robin(bucket, role);
                }
            }
        }
    }

    /// Shuffled characters walk a least-loaded group rotation (random
    /// tie-break), trying at most `num_groups` groups each before giving up
    /// for this pass.
    fn distribute_round_robin(&mut self, mut bucket: Vec<usize>, role: Role) {
        let records = self.records;
        let total = bucket.len();
        info!("   Distributing {} {} characters", total, role);

        self.rng.shuffle(&mut bucket);

        let mut keyed: Vec<(usize, u32, usize)> = Vec::with_capacity(self.groups.len());
        for (g, group) in self.groups.iter().enumerate() {
            keyed.push((group.len(), self.rng.u32(..), g));
        }
        keyed.sort_unstable();
        let order: Vec<usize> = keyed.into_iter().map(|(_, _, g)| g).collect();

        let mut cursor = 0;
        let mut placed_count = 0;
        for &idx in &bucket {
            let record = &records[idx];
            let mut attempts = 0;
            let mut placed = false;
            while attempts < order.len() && !placed {
                let g = order[cursor];
                if self.groups[g].add(idx, record, self.locked_to[idx]) {
                    self.assigned[idx] = true;
                    placed = true;
                    placed_count += 1;
                }
                cursor = (cursor + 1) % order.len();
                attempts += 1;
            }
            if !placed {
                warn!(
                    "⚠️ Could not assign {} - groups may be full",
                    record.name
                );
            }
        }

        info!(
            "   📊 Assigned {}/{} {} characters",
            placed_count, total, role
        );
    }

    /// Final sweep: place every remaining eligible character into the
    /// least-loaded group that accepts it, highest priority first.
    pub(crate) fn fill_remaining(&mut self) {
        let records = self.records;

        let mut pool: Vec<usize> = (0..records.len()).filter(|&i| self.eligible(i)).collect();
        if pool.is_empty() {
            return;
        }
        pool.sort_by_key(|&i| records[i].tier.precedence());

        for idx in pool {
            let record = &records[idx];
            let mut best: Option<usize> = None;
            let mut min_size = usize::MAX;
            for (g, group) in self.groups.iter().enumerate() {
                if group.can_add(record, self.locked_to[idx]) && group.len() < min_size {
                    min_size = group.len();
                    best = Some(g);
                }
            }
            if let Some(g) = best {
                if self.groups[g].add(idx, record, self.locked_to[idx]) {
                    self.assigned[idx] = true;
                    info!("Assigned {} to Group {}", record.name, g + 1);
                }
            }
        }
    }
}
