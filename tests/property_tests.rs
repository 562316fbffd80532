use proptest::prelude::*;
use raidforge::config::SplitParams;
use raidforge::roster::{ArmorType, CharacterRecord, Role, Tier, TierToken};
use raidforge::splitter::Splitter;
use std::collections::HashSet;

const ROLES: [Role; 4] = [Role::Tank, Role::Healer, Role::RangedDps, Role::MeleeDps];
const TIERS: [Tier; 4] = [Tier::Main, Tier::Alt, Tier::Helper, Tier::Inactive];
const ARMOR: [ArmorType; 4] = [
    ArmorType::Cloth,
    ArmorType::Leather,
    ArmorType::Mail,
    ArmorType::Plate,
];
const TOKENS: [TierToken; 4] = [
    TierToken::Mystic,
    TierToken::Venerated,
    TierToken::Zenith,
    TierToken::Dreadful,
];

prop_compose! {
    fn arb_roster()(
        rows in proptest::collection::vec(
            (0usize..10, 0usize..4, 0usize..4, 0usize..4, 0usize..4),
            1..60,
        )
    ) -> Vec<CharacterRecord> {
        rows.into_iter()
            .enumerate()
            .map(|(i, (player, role, tier, armor, token))| CharacterRecord {
                name: format!("c{}", i),
                player: format!("p{}", player),
                class_name: String::new(),
                spec_name: String::new(),
                role: ROLES[role],
                tier: TIERS[tier],
                armor: ARMOR[armor],
                token: TOKENS[token],
                buffs: Vec::new(),
            })
            .collect()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn test_split_invariants(
        records in arb_roster(),
        num_groups in 1usize..5,
        group_size in 1usize..8,
        seed in any::<u64>(),
        optimized in any::<bool>(),
    ) {
        let params = if optimized {
            SplitParams::optimized(num_groups, group_size)
        } else {
            SplitParams::simple(num_groups, group_size)
        }
        .with_seed(seed);

        let report = Splitter::new(params)
            .compute(&records, &[])
            .expect("non-empty roster must not fail");

        prop_assert_eq!(report.groups.len(), num_groups);

        // Capacity and ownership per group.
        let mut seen_names = HashSet::new();
        for group in &report.groups {
            prop_assert!(group.total_members <= group_size);
            prop_assert_eq!(group.total_members, group.characters.len());

            let players: HashSet<_> =
                group.characters.iter().map(|m| m.player.as_str()).collect();
            prop_assert_eq!(players.len(), group.total_members);

            for member in &group.characters {
                prop_assert!(
                    seen_names.insert(member.name.clone()),
                    "character {} appears twice",
                    member.name
                );
            }
        }

        // Conservation: every input is either placed once or reported.
        let placed: usize = report.groups.iter().map(|g| g.total_members).sum();
        prop_assert_eq!(placed + report.unassigned.len(), records.len());
        prop_assert_eq!(report.summary.assigned, placed);
        prop_assert_eq!(report.summary.unassigned, report.unassigned.len());
        prop_assert_eq!(report.summary.total_characters, records.len());
    }
}
