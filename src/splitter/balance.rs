use super::SplitState;
use crate::group::Group;
use crate::roster::{CharacterRecord, Tier};
use tracing::info;

/// Hard cap on balance iterations; the pass usually converges earlier.
pub const MAX_BALANCE_PASSES: usize = 10;

impl SplitState<'_> {
    /// Bounded local search: swap same-role main-tier characters between
    /// group pairs whenever the swap strictly reduces combined armor+token
    /// variance. Membership counts never change, only composition.
    pub(crate) fn optimize_balance(&mut self) {
        info!("Optimizing armor and token balance...");

        for _ in 0..MAX_BALANCE_PASSES {
            let mut improved = false;
            for i in 0..self.groups.len() {
                for j in (i + 1)..self.groups.len() {
                    if self.try_balance_swap(i, j) {
                        improved = true;
                    }
                }
            }
            if !improved {
                break;
            }
        }
    }

    /// At most one swap per group pair per iteration, matching the bounded
    /// sweep shape of the pass.
    fn try_balance_swap(&mut self, gi: usize, gj: usize) -> bool {
        let records = self.records;
        let before = group_mains_variance(&self.groups[gi]) + group_mains_variance(&self.groups[gj]);

        let mains_i: Vec<usize> = self.groups[gi]
            .members
            .iter()
            .copied()
            .filter(|&m| records[m].tier == Tier::Main)
            .collect();
        let mains_j: Vec<usize> = self.groups[gj]
            .members
            .iter()
            .copied()
            .filter(|&m| records[m].tier == Tier::Main)
            .collect();

        for &a in &mains_i {
            for &b in &mains_j {
                let ra = &records[a];
                let rb = &records[b];

                if ra.role != rb.role {
                    continue;
                }
                if ra.armor == rb.armor && ra.token == rb.token {
                    continue;
                }
                // Locked characters stay where their lock put them.
                if self.locked_to[a].is_some() || self.locked_to[b].is_some() {
                    continue;
                }

                let after = swapped_pair_variance(&self.groups[gi], &self.groups[gj], ra, rb);
                if after < before && self.perform_swap(gi, gj, a, b) {
                    return true;
                }
            }
        }
        false
    }

    fn perform_swap(&mut self, gi: usize, gj: usize, a: usize, b: usize) -> bool {
        let records = self.records;
        let ra = &records[a];
        let rb = &records[b];

        self.groups[gi].remove(a, ra);
        self.groups[gj].remove(b, rb);

        if self.groups[gi].add(b, rb, self.locked_to[b])
            && self.groups[gj].add(a, ra, self.locked_to[a])
        {
            info!("Swapped {} and {} for balance", ra.name, rb.name);
            true
        } else {
            // Player conflict on re-add; put both back where they were.
            self.groups[gi].remove(b, rb);
            self.groups[gj].remove(a, ra);
            self.groups[gi].add(a, ra, self.locked_to[a]);
            self.groups[gj].add(b, rb, self.locked_to[b]);
            false
        }
    }
}

/// Sum of squared deviations from a perfectly even 25%-per-category split,
/// normalized by the counted total. Zero when no mains are present.
pub fn mains_variance(counts: [usize; 4]) -> f32 {
    let total: usize = counts.iter().sum();
    if total == 0 {
        return 0.0;
    }
    let target = total as f32 / 4.0;
    let sum: f32 = counts.iter().map(|&c| (c as f32 - target).powi(2)).sum();
    sum / total as f32
}

/// Armor + token variance of a group's main-tier members.
pub fn group_mains_variance(group: &Group) -> f32 {
    mains_variance(group.armor_mains) + mains_variance(group.token_mains)
}

fn swapped_pair_variance(
    g1: &Group,
    g2: &Group,
    ra: &CharacterRecord,
    rb: &CharacterRecord,
) -> f32 {
    let mut a1 = g1.armor_mains;
    let mut t1 = g1.token_mains;
    let mut a2 = g2.armor_mains;
    let mut t2 = g2.token_mains;

    a1[ra.armor as usize] -= 1;
    a1[rb.armor as usize] += 1;
    t1[ra.token as usize] -= 1;
    t1[rb.token as usize] += 1;

    a2[rb.armor as usize] -= 1;
    a2[ra.armor as usize] += 1;
    t2[rb.token as usize] -= 1;
    t2[ra.token as usize] += 1;

    mains_variance(a1) + mains_variance(t1) + mains_variance(a2) + mains_variance(t2)
}
