use raidforge::roster::{ArmorType, CharacterRecord, Role, Tier, TierToken};

pub fn character(name: &str, player: &str, role: Role, tier: Tier) -> CharacterRecord {
    CharacterRecord {
        name: name.to_string(),
        player: player.to_string(),
        class_name: String::new(),
        spec_name: String::new(),
        role,
        tier,
        armor: ArmorType::Plate,
        token: TierToken::Dreadful,
        buffs: Vec::new(),
    }
}

#[allow(dead_code)]
pub fn with_gear(
    mut record: CharacterRecord,
    armor: ArmorType,
    token: TierToken,
) -> CharacterRecord {
    record.armor = armor;
    record.token = token;
    record
}

#[allow(dead_code)]
pub fn with_buffs(mut record: CharacterRecord, buffs: &[&str]) -> CharacterRecord {
    record.buffs = buffs.iter().map(|b| b.to_string()).collect();
    record
}
