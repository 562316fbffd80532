use crate::error::{RaidForgeError, RfResult};
use crate::roster::{ArmorType, TierToken};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassDef {
    pub class_id: String,
    pub name: String,
    pub armor: ArmorType,
    pub token: TierToken,
    #[serde(default)]
    pub buffs: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecDef {
    pub spec_id: String,
    pub name: String,
    pub class_id: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuffDef {
    pub buff_id: String,
    pub name: String,
    pub required: bool,
}

/// Static game data: classes, specs and the raid-buff table. Loaded once and
/// passed around as a read-only value; the engine itself only ever sees the
/// required-buff list.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GameRegistry {
    pub classes: Vec<ClassDef>,
    pub specs: Vec<SpecDef>,
    pub buffs: Vec<BuffDef>,

    #[serde(skip)]
    class_index: HashMap<String, usize>,

    #[serde(skip)]
    spec_index: HashMap<String, usize>,
}

impl GameRegistry {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> RfResult<Self> {
        let content = fs::read_to_string(&path)?;
        let mut reg: GameRegistry = serde_json::from_str(&content)?;
        reg.validate()?;
        reg.rebuild_indices();
        Ok(reg)
    }

    pub fn new_with_defaults() -> Self {
        let classes = vec![
            class("death_knight", "Death Knight", ArmorType::Plate, TierToken::Dreadful, &[]),
            class("demon_hunter", "Demon Hunter", ArmorType::Leather, TierToken::Venerated, &["chaos_brand"]),
            class("druid", "Druid", ArmorType::Leather, TierToken::Venerated, &["mark_of_the_wild"]),
            class("evoker", "Evoker", ArmorType::Mail, TierToken::Zenith, &["blessing_of_the_bronze"]),
            class("hunter", "Hunter", ArmorType::Mail, TierToken::Zenith, &["hunters_mark"]),
            class("mage", "Mage", ArmorType::Cloth, TierToken::Mystic, &["arcane_intellect"]),
            class("monk", "Monk", ArmorType::Leather, TierToken::Venerated, &["mystic_touch"]),
            class("paladin", "Paladin", ArmorType::Plate, TierToken::Dreadful, &[]),
            class("priest", "Priest", ArmorType::Cloth, TierToken::Mystic, &["power_word_fortitude"]),
            class("rogue", "Rogue", ArmorType::Leather, TierToken::Venerated, &["atrophic_poison"]),
            class("shaman", "Shaman", ArmorType::Mail, TierToken::Zenith, &["windfury_totem", "skyfury"]),
            class("warlock", "Warlock", ArmorType::Cloth, TierToken::Mystic, &[]),
            class("warrior", "Warrior", ArmorType::Plate, TierToken::Dreadful, &["battle_shout"]),
        ];

        let specs = vec![
            spec("blood", "Blood", "death_knight", "tank"),
            spec("frost_dk", "Frost", "death_knight", "mdps"),
            spec("unholy", "Unholy", "death_knight", "mdps"),
            spec("havoc", "Havoc", "demon_hunter", "mdps"),
            spec("vengeance", "Vengeance", "demon_hunter", "tank"),
            spec("balance", "Balance", "druid", "rdps"),
            spec("feral", "Feral", "druid", "mdps"),
            spec("guardian", "Guardian", "druid", "tank"),
            spec("restoration_druid", "Restoration", "druid", "healer"),
            spec("devastation", "Devastation", "evoker", "rdps"),
            spec("preservation", "Preservation", "evoker", "healer"),
            spec("augmentation", "Augmentation", "evoker", "rdps"),
            spec("beast_mastery", "Beast Mastery", "hunter", "rdps"),
            spec("marksmanship", "Marksmanship", "hunter", "rdps"),
            spec("survival", "Survival", "hunter", "mdps"),
            spec("arcane", "Arcane", "mage", "rdps"),
            spec("fire", "Fire", "mage", "rdps"),
            spec("frost_mage", "Frost", "mage", "rdps"),
            spec("brewmaster", "Brewmaster", "monk", "tank"),
            spec("mistweaver", "Mistweaver", "monk", "healer"),
            spec("windwalker", "Windwalker", "monk", "mdps"),
            spec("holy_paladin", "Holy", "paladin", "healer"),
            spec("protection_paladin", "Protection", "paladin", "tank"),
            spec("retribution", "Retribution", "paladin", "mdps"),
            spec("discipline", "Discipline", "priest", "healer"),
            spec("holy_priest", "Holy", "priest", "healer"),
            spec("shadow", "Shadow", "priest", "rdps"),
            spec("assassination", "Assassination", "rogue", "mdps"),
            spec("outlaw", "Outlaw", "rogue", "mdps"),
            spec("subtlety", "Subtlety", "rogue", "mdps"),
            spec("elemental", "Elemental", "shaman", "rdps"),
            spec("enhancement", "Enhancement", "shaman", "mdps"),
            spec("restoration_shaman", "Restoration", "shaman", "healer"),
            spec("affliction", "Affliction", "warlock", "rdps"),
            spec("demonology", "Demonology", "warlock", "rdps"),
            spec("destruction", "Destruction", "warlock", "rdps"),
            spec("arms", "Arms", "warrior", "mdps"),
            spec("fury", "Fury", "warrior", "mdps"),
            spec("protection_warrior", "Protection", "warrior", "tank"),
        ];

        let buffs = vec![
            buff("arcane_intellect", "Arcane Intellect", true),
            buff("battle_shout", "Battle Shout", true),
            buff("mark_of_the_wild", "Mark of the Wild", true),
            buff("power_word_fortitude", "Power Word: Fortitude", true),
            buff("mystic_touch", "Mystic Touch", true),
            buff("chaos_brand", "Chaos Brand", true),
            buff("hunters_mark", "Hunter's Mark", true),
            buff("atrophic_poison", "Atrophic Poison", true),
            buff("windfury_totem", "Windfury Totem", false),
            buff("blessing_of_the_bronze", "Blessing of the Bronze", false),
            buff("skyfury", "Skyfury", true),
        ];

        let mut reg = Self {
            classes,
            specs,
            buffs,
            class_index: HashMap::new(),
            spec_index: HashMap::new(),
        };
        reg.rebuild_indices();
        reg
    }

    pub fn class(&self, class_id: &str) -> Option<&ClassDef> {
        self.class_index.get(class_id).map(|&i| &self.classes[i])
    }

    pub fn spec(&self, spec_id: &str) -> Option<&SpecDef> {
        self.spec_index.get(spec_id).map(|&i| &self.specs[i])
    }

    /// Buff identifiers the backfill stage treats as coverage targets, in
    /// table order.
    pub fn required_buffs(&self) -> Vec<String> {
        self.buffs
            .iter()
            .filter(|b| b.required)
            .map(|b| b.buff_id.clone())
            .collect()
    }

    fn validate(&self) -> RfResult<()> {
        for s in &self.specs {
            if !self.classes.iter().any(|c| c.class_id == s.class_id) {
                return Err(RaidForgeError::Validation(format!(
                    "spec '{}' references unknown class '{}'",
                    s.spec_id, s.class_id
                )));
            }
        }
        Ok(())
    }

    fn rebuild_indices(&mut self) {
        self.class_index = self
            .classes
            .iter()
            .enumerate()
            .map(|(i, c)| (c.class_id.clone(), i))
            .collect();
        self.spec_index = self
            .specs
            .iter()
            .enumerate()
            .map(|(i, s)| (s.spec_id.clone(), i))
            .collect();
    }
}

fn class(id: &str, name: &str, armor: ArmorType, token: TierToken, buffs: &[&str]) -> ClassDef {
    ClassDef {
        class_id: id.to_string(),
        name: name.to_string(),
        armor,
        token,
        buffs: buffs.iter().map(|b| b.to_string()).collect(),
    }
}

fn spec(id: &str, name: &str, class_id: &str, role: &str) -> SpecDef {
    SpecDef {
        spec_id: id.to_string(),
        name: name.to_string(),
        class_id: class_id.to_string(),
        role: role.to_string(),
    }
}

fn buff(id: &str, name: &str, required: bool) -> BuffDef {
    BuffDef {
        buff_id: id.to_string(),
        name: name.to_string(),
        required,
    }
}
