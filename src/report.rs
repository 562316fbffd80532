// ===== raidforge/src/report.rs =====
use crate::group::Group;
use crate::roster::{ArmorType, Bucket, CharacterRecord, Role, Tier, TierToken};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;
use strum_macros::Display;

/// One member of a finished group, fully denormalized for the caller.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MemberReport {
    pub name: String,
    pub player: String,
    pub class_name: String,
    pub spec_name: String,
    pub role: Role,
    pub tier: Tier,
    pub armor: ArmorType,
    pub token: TierToken,
    pub buffs: Vec<String>,
    pub is_locked: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GroupReport {
    pub group_id: usize,
    pub total_members: usize,
    pub tanks: usize,
    pub healers: usize,
    pub dps: usize,
    pub melee_dps: usize,
    pub ranged_dps: usize,
    pub priority_counts: BTreeMap<Tier, usize>,
    pub armor_distribution: BTreeMap<ArmorType, usize>,
    pub armor_distribution_mains: BTreeMap<ArmorType, usize>,
    pub token_distribution: BTreeMap<TierToken, usize>,
    pub token_distribution_mains: BTreeMap<TierToken, usize>,
    pub buffs_provided: Vec<String>,
    pub priority_score: u32,
    pub armor_balance_score: f32,
    pub token_balance_score: f32,
    pub characters: Vec<MemberReport>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UnassignedReason {
    LockRejected,
    CapacityExhausted,
    PlayerConflict,
    NotEligible,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UnassignedReport {
    pub name: String,
    pub player: String,
    pub role: Role,
    pub tier: Tier,
    pub reason: UnassignedReason,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RoleShortfall {
    pub role: Bucket,
    pub needed: usize,
    pub available: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BuffGap {
    pub group_id: usize,
    pub buff: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SplitSummary {
    pub total_characters: usize,
    pub assigned: usize,
    pub unassigned: usize,
    pub locks_requested: usize,
    pub locks_placed: usize,
    pub locks_failed: usize,
    pub role_shortfalls: Vec<RoleShortfall>,
    pub buff_gaps: Vec<BuffGap>,
    /// Final mains armor+token variance summed across groups. Lower is more
    /// even; used to rank multi-trial runs.
    pub balance_variance: f32,
}

/// The engine's sole output shape. Carries no references back into engine
/// state; serializing it twice yields identical content.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SplitReport {
    pub groups: Vec<GroupReport>,
    pub unassigned: Vec<UnassignedReport>,
    pub summary: SplitSummary,
}

impl MemberReport {
    pub fn from_record(record: &CharacterRecord, is_locked: bool) -> Self {
        Self {
            name: record.name.clone(),
            player: record.player.clone(),
            class_name: record.class_name.clone(),
            spec_name: record.spec_name.clone(),
            role: record.role,
            tier: record.tier,
            armor: record.armor,
            token: record.token,
            buffs: record.buffs.clone(),
            is_locked,
        }
    }
}

impl GroupReport {
    pub fn from_group(
        group: &Group,
        records: &[CharacterRecord],
        locked_to: &[Option<usize>],
    ) -> Self {
        let characters = group
            .members
            .iter()
            .map(|&i| MemberReport::from_record(&records[i], locked_to[i].is_some()))
            .collect();

        Self {
            group_id: group.group_id,
            total_members: group.len(),
            tanks: group.bucket_count(Bucket::Tank),
            healers: group.bucket_count(Bucket::Healer),
            dps: group.bucket_count(Bucket::Dps),
            melee_dps: group.role_count(Role::MeleeDps),
            ranged_dps: group.role_count(Role::RangedDps),
            priority_counts: dist_map::<Tier>(group.tier_counts),
            armor_distribution: dist_map::<ArmorType>(group.armor_distribution(false)),
            armor_distribution_mains: dist_map::<ArmorType>(group.armor_distribution(true)),
            token_distribution: dist_map::<TierToken>(group.token_distribution(false)),
            token_distribution_mains: dist_map::<TierToken>(group.token_distribution(true)),
            buffs_provided: group.buffs_provided(records).into_iter().collect(),
            priority_score: group.priority_score(),
            armor_balance_score: balance_score(group.armor_distribution(true)),
            token_balance_score: balance_score(group.token_distribution(true)),
            characters,
        }
    }
}

/// 0-100 evenness score over the four fixed categories; 100 means a perfect
/// 25% split of the counted members.
pub fn balance_score(counts: [usize; 4]) -> f32 {
    let total: usize = counts.iter().sum();
    if total == 0 {
        return 100.0;
    }
    let target = total as f32 / 4.0;
    let variance: f32 = counts.iter().map(|&c| (c as f32 - target).powi(2)).sum();
    let max_variance = target * target * 4.0;
    let score = (100.0 - (variance / max_variance) * 100.0).max(0.0);
    (score * 10.0).round() / 10.0
}

fn dist_map<T>(counts: [usize; 4]) -> BTreeMap<T, usize>
where
    T: IntoEnumIterator + Ord,
{
    T::iter().zip(counts).filter(|(_, c)| *c > 0).collect()
}
