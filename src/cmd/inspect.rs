use clap::Args;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, Table};
use raidforge::roster::{ArmorType, CharacterRecord, Role, Tier, TierToken};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    /// Also list per-player character counts.
    #[arg(long, default_value_t = false)]
    pub players: bool,
}

pub fn run(args: InspectArgs, records: &[CharacterRecord]) {
    println!("\n📊 Roster: {} characters", records.len());

    print_counts(
        "Roles",
        Role::iter().map(|r| {
            let count = records.iter().filter(|c| c.role == r).count();
            (r.to_string(), count)
        }),
    );
    print_counts(
        "Tiers",
        Tier::iter().map(|t| {
            let count = records.iter().filter(|c| c.tier == t).count();
            (t.to_string(), count)
        }),
    );
    print_counts(
        "Armor",
        ArmorType::iter().map(|a| {
            let count = records.iter().filter(|c| c.armor == a).count();
            (a.to_string(), count)
        }),
    );
    print_counts(
        "Tokens",
        TierToken::iter().map(|t| {
            let count = records.iter().filter(|c| c.token == t).count();
            (t.to_string(), count)
        }),
    );

    if args.players {
        let mut by_player: BTreeMap<&str, usize> = BTreeMap::new();
        for c in records {
            *by_player.entry(c.player.as_str()).or_insert(0) += 1;
        }

        let mut table = Table::new();
        table.load_preset(ASCII_FULL);
        table.add_row(vec![
            Cell::new("Player").add_attribute(Attribute::Bold),
            Cell::new("Characters"),
        ]);
        for (player, count) in by_player {
            table.add_row(vec![Cell::new(player), Cell::new(count)]);
        }
        println!("\n{}", table);
    }
}

fn print_counts(title: &str, counts: impl Iterator<Item = (String, usize)>) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let mut header = vec![Cell::new(title).add_attribute(Attribute::Bold)];
    let mut values = vec![Cell::new("count")];
    for (label, count) in counts {
        header.push(Cell::new(label));
        values.push(Cell::new(count));
    }
    table.add_row(header);
    table.add_row(values);
    println!("\n{}", table);
}
