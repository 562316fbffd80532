use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use tracing::warn;

/// Combat function of a character. Declaration order is distribution order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumString, Display,
    Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Tank,
    Healer,
    #[strum(to_string = "ranged_dps", serialize = "rdps", serialize = "dps")]
    #[serde(alias = "rdps", alias = "dps")]
    RangedDps,
    #[strum(to_string = "melee_dps", serialize = "mdps")]
    #[serde(alias = "mdps")]
    MeleeDps,
}

/// Coarse role bucket. Melee and ranged dps collapse wherever only the
/// tank/healer/dps split matters.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumString, Display,
    Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    Tank,
    Healer,
    Dps,
}

/// Priority tier. Declaration order is descending assignment precedence.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumString, Display,
    Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Main,
    Alt,
    Helper,
    Inactive,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumString, Display,
    Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum ArmorType {
    Cloth,
    Leather,
    Mail,
    Plate,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumString, Display,
    Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum TierToken {
    #[serde(alias = "Mystic")]
    Mystic,
    #[serde(alias = "Venerated")]
    Venerated,
    #[serde(alias = "Zenith")]
    Zenith,
    #[serde(alias = "Dreadful")]
    Dreadful,
}

impl Role {
    pub fn bucket(self) -> Bucket {
        match self {
            Role::Tank => Bucket::Tank,
            Role::Healer => Bucket::Healer,
            Role::RangedDps | Role::MeleeDps => Bucket::Dps,
        }
    }

    /// Boundary normalization: unrecognized role strings land in the generic
    /// dps bucket instead of being rejected.
    pub fn parse_lenient(raw: &str, character: &str) -> Self {
        raw.parse().unwrap_or_else(|_| {
            warn!(
                "Unknown role '{}' for character {}, treating as dps",
                raw, character
            );
            Role::RangedDps
        })
    }
}

impl Tier {
    /// 0 = highest precedence.
    pub fn precedence(self) -> usize {
        self as usize
    }

    /// Boundary normalization: unrecognized tier strings rank below helper.
    pub fn parse_lenient(raw: &str, character: &str) -> Self {
        raw.parse().unwrap_or_else(|_| {
            warn!(
                "Unknown priority tier '{}' for character {}, treating as inactive",
                raw, character
            );
            Tier::Inactive
        })
    }
}

/// One assignable unit: a character joined with its class/spec metadata and
/// owning player. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub name: String,
    pub player: String,
    #[serde(default)]
    pub class_name: String,
    #[serde(default)]
    pub spec_name: String,
    pub role: Role,
    pub tier: Tier,
    pub armor: ArmorType,
    pub token: TierToken,
    #[serde(default)]
    pub buffs: Vec<String>,
}

impl CharacterRecord {
    pub fn bucket(&self) -> Bucket {
        self.role.bucket()
    }
}

/// A forced character -> group pre-assignment, applied before automatic
/// distribution. Group numbers are 1-indexed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockAssignment {
    pub character_name: String,
    pub group_id: usize,
}
