use criterion::{criterion_group, criterion_main, Criterion};
use raidforge::config::SplitParams;
use raidforge::roster::{ArmorType, CharacterRecord, Role, Tier, TierToken};
use raidforge::splitter::Splitter;
use std::hint::black_box;

fn synthetic_roster(size: usize) -> Vec<CharacterRecord> {
    let roles = [
        Role::Tank,
        Role::Healer,
        Role::RangedDps,
        Role::RangedDps,
        Role::MeleeDps,
        Role::MeleeDps,
    ];
    let tiers = [Tier::Main, Tier::Main, Tier::Alt, Tier::Helper];
    let armor = [
        ArmorType::Cloth,
        ArmorType::Leather,
        ArmorType::Mail,
        ArmorType::Plate,
    ];
    let tokens = [
        TierToken::Mystic,
        TierToken::Venerated,
        TierToken::Zenith,
        TierToken::Dreadful,
    ];

    (0..size)
        .map(|i| CharacterRecord {
            name: format!("bench{}", i),
            player: format!("p{}", i / 3),
            class_name: String::new(),
            spec_name: String::new(),
            role: roles[i % roles.len()],
            tier: tiers[i % tiers.len()],
            armor: armor[i % 4],
            token: tokens[(i / 4) % 4],
            buffs: if i % 7 == 0 {
                vec!["arcane_intellect".to_string()]
            } else {
                Vec::new()
            },
        })
        .collect()
}

fn bench_split(c: &mut Criterion) {
    let records = synthetic_roster(90);

    let simple = Splitter::new(SplitParams::simple(3, 30).with_seed(42));
    c.bench_function("split_simple_90", |b| {
        b.iter(|| simple.compute(black_box(&records), &[]).unwrap())
    });

    let optimized = Splitter::new(SplitParams::optimized(3, 30).with_seed(42))
        .with_required_buffs(vec!["arcane_intellect".to_string()]);
    c.bench_function("split_optimized_90", |b| {
        b.iter(|| optimized.compute(black_box(&records), &[]).unwrap())
    });
}

criterion_group!(benches, bench_split);
criterion_main!(benches);
