// ===== raidforge/src/display.rs =====
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use raidforge::report::{GroupReport, SplitReport};
use raidforge::roster::Tier;

pub fn print_split_report(report: &SplitReport) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Group").add_attribute(Attribute::Bold),
        Cell::new("Members").fg(Color::Cyan),
        Cell::new("Tanks"),
        Cell::new("Healers"),
        Cell::new("DPS"),
        Cell::new("Mains"),
        Cell::new("Alts"),
        Cell::new("Helpers"),
        Cell::new("Priority").fg(Color::Cyan),
        Cell::new("Armor").fg(Color::Green),
        Cell::new("Token").fg(Color::Green),
    ]);

    for i in 1..=10 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for group in &report.groups {
        let tier = |t: Tier| group.priority_counts.get(&t).copied().unwrap_or(0);
        table.add_row(vec![
            Cell::new(group.group_id),
            Cell::new(group.total_members),
            Cell::new(group.tanks),
            Cell::new(group.healers),
            Cell::new(group.dps),
            Cell::new(tier(Tier::Main)),
            Cell::new(tier(Tier::Alt)),
            Cell::new(tier(Tier::Helper)),
            Cell::new(group.priority_score),
            Cell::new(format!("{:.1}", group.armor_balance_score)),
            Cell::new(format!("{:.1}", group.token_balance_score)),
        ]);
    }

    println!("\n📊 Group Composition:");
    println!("{}", table);

    for group in &report.groups {
        print_group_members(group);
    }

    if !report.unassigned.is_empty() {
        let mut table = Table::new();
        table.load_preset(ASCII_FULL);
        table.add_row(vec![
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("Player"),
            Cell::new("Role"),
            Cell::new("Tier"),
            Cell::new("Reason").fg(Color::Red),
        ]);
        for u in &report.unassigned {
            table.add_row(vec![
                Cell::new(&u.name),
                Cell::new(&u.player),
                Cell::new(u.role.to_string()),
                Cell::new(u.tier.to_string()),
                Cell::new(u.reason.to_string()),
            ]);
        }
        println!("\n⚠️  Unassigned characters:");
        println!("{}", table);
    }

    let s = &report.summary;
    println!(
        "\n✅ {}/{} characters assigned ({} unassigned)",
        s.assigned, s.total_characters, s.unassigned
    );
    if s.locks_requested > 0 {
        println!(
            "🔒 Locks: {} requested, {} placed, {} failed",
            s.locks_requested, s.locks_placed, s.locks_failed
        );
    }
    for shortfall in &s.role_shortfalls {
        println!(
            "⚠️  Short on {}s: need {}, have {}",
            shortfall.role, shortfall.needed, shortfall.available
        );
    }
    for gap in &s.buff_gaps {
        println!("⚠️  Group {} has no provider for {}", gap.group_id, gap.buff);
    }
}

fn print_group_members(group: &GroupReport) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Name").add_attribute(Attribute::Bold),
        Cell::new("Player"),
        Cell::new("Class"),
        Cell::new("Spec"),
        Cell::new("Role"),
        Cell::new("Tier"),
        Cell::new("Armor"),
        Cell::new("Token"),
        Cell::new(""),
    ]);

    for member in &group.characters {
        table.add_row(vec![
            Cell::new(&member.name),
            Cell::new(&member.player),
            Cell::new(&member.class_name),
            Cell::new(&member.spec_name),
            Cell::new(member.role.to_string()),
            Cell::new(member.tier.to_string()),
            Cell::new(member.armor.to_string()),
            Cell::new(member.token.to_string()),
            Cell::new(if member.is_locked { "🔒" } else { "" }),
        ]);
    }

    println!("\nGroup {} ({} members):", group.group_id, group.total_members);
    println!("{}", table);
}
