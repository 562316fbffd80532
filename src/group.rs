use crate::roster::{Bucket, CharacterRecord, Role, Tier};
use std::collections::{BTreeSet, HashSet};

/// One group under construction. Members are indices into the roster slice
/// owned by the computation; tallies are maintained incrementally so the
/// balance pass can score hypothetical swaps without rescanning members.
///
/// Invariants: `players_used.len() == members.len()` and
/// `members.len() <= capacity`, upheld by routing every mutation through
/// `add` / `remove`.
#[derive(Debug, Clone)]
pub struct Group {
    pub group_id: usize,
    pub capacity: usize,
    pub members: Vec<usize>,
    pub players_used: HashSet<String>,

    pub role_counts: [usize; 4],
    pub tier_counts: [usize; 4],
    pub armor_counts: [usize; 4],
    pub armor_mains: [usize; 4],
    pub token_counts: [usize; 4],
    pub token_mains: [usize; 4],
}

impl Group {
    pub fn new(group_id: usize, capacity: usize) -> Self {
        Self {
            group_id,
            capacity,
            members: Vec::new(),
            players_used: HashSet::new(),
            role_counts: [0; 4],
            tier_counts: [0; 4],
            armor_counts: [0; 4],
            armor_mains: [0; 4],
            token_counts: [0; 4],
            token_mains: [0; 4],
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= self.capacity
    }

    /// False when the group is full, the owning player is already present, or
    /// the character is locked to a different group.
    pub fn can_add(&self, record: &CharacterRecord, locked_to: Option<usize>) -> bool {
        if self.is_full() {
            return false;
        }
        if self.players_used.contains(&record.player) {
            return false;
        }
        if let Some(target) = locked_to {
            if target != self.group_id {
                return false;
            }
        }
        true
    }

    /// Checked append. Returns false without mutation when `can_add` fails.
    pub fn add(&mut self, idx: usize, record: &CharacterRecord, locked_to: Option<usize>) -> bool {
        if !self.can_add(record, locked_to) {
            return false;
        }

        self.members.push(idx);
        self.players_used.insert(record.player.clone());

        self.role_counts[record.role as usize] += 1;
        self.tier_counts[record.tier as usize] += 1;
        self.armor_counts[record.armor as usize] += 1;
        self.token_counts[record.token as usize] += 1;
        if record.tier == Tier::Main {
            self.armor_mains[record.armor as usize] += 1;
            self.token_mains[record.token as usize] += 1;
        }
        true
    }

    /// Used only by the balance pass. Returns false if `idx` is not a member.
    pub fn remove(&mut self, idx: usize, record: &CharacterRecord) -> bool {
        let Some(pos) = self.members.iter().position(|&m| m == idx) else {
            return false;
        };

        self.members.remove(pos);
        self.players_used.remove(&record.player);

        self.role_counts[record.role as usize] -= 1;
        self.tier_counts[record.tier as usize] -= 1;
        self.armor_counts[record.armor as usize] -= 1;
        self.token_counts[record.token as usize] -= 1;
        if record.tier == Tier::Main {
            self.armor_mains[record.armor as usize] -= 1;
            self.token_mains[record.token as usize] -= 1;
        }
        true
    }

    pub fn role_count(&self, role: Role) -> usize {
        self.role_counts[role as usize]
    }

    pub fn bucket_count(&self, bucket: Bucket) -> usize {
        match bucket {
            Bucket::Tank => self.role_count(Role::Tank),
            Bucket::Healer => self.role_count(Role::Healer),
            Bucket::Dps => self.role_count(Role::RangedDps) + self.role_count(Role::MeleeDps),
        }
    }

    pub fn tier_count(&self, tier: Tier) -> usize {
        self.tier_counts[tier as usize]
    }

    pub fn armor_distribution(&self, mains_only: bool) -> [usize; 4] {
        if mains_only {
            self.armor_mains
        } else {
            self.armor_counts
        }
    }

    pub fn token_distribution(&self, mains_only: bool) -> [usize; 4] {
        if mains_only {
            self.token_mains
        } else {
            self.token_counts
        }
    }

    /// Union of buffs provided by all members, in sorted order.
    pub fn buffs_provided(&self, records: &[CharacterRecord]) -> BTreeSet<String> {
        self.members
            .iter()
            .flat_map(|&i| records[i].buffs.iter().cloned())
            .collect()
    }

    /// Composition weight for reporting: 3x mains + 2x alts + 1x helpers.
    pub fn priority_score(&self) -> u32 {
        (self.tier_count(Tier::Main) * 3
            + self.tier_count(Tier::Alt) * 2
            + self.tier_count(Tier::Helper)) as u32
    }
}
