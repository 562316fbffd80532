// ===== raidforge/src/loader.rs =====
use crate::error::RfResult;
use crate::registry::GameRegistry;
use crate::roster::{CharacterRecord, LockAssignment, Role, Tier};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

/// One roster row as it appears on disk, before the class/spec join.
#[derive(Debug, Deserialize)]
struct RawCharacterRow {
    name: String,
    #[serde(alias = "player_id")]
    player: String,
    class_id: String,
    spec_id: String,
    #[serde(alias = "tier")]
    role_group: String,
}

/// Load a roster file, resolving class/spec ids through the registry. The
/// format is picked by extension: `.csv`, otherwise JSON.
pub fn load_roster<P: AsRef<Path>>(
    path: P,
    registry: &GameRegistry,
) -> RfResult<Vec<CharacterRecord>> {
    let path = path.as_ref();
    let file = File::open(path)?;

    let is_csv = path
        .extension()
        .map(|e| e.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if is_csv {
        load_roster_csv(file, registry)
    } else {
        load_roster_json(file, registry)
    }
}

pub fn load_roster_json<R: Read>(
    reader: R,
    registry: &GameRegistry,
) -> RfResult<Vec<CharacterRecord>> {
    let rows: Vec<RawCharacterRow> = serde_json::from_reader(reader)?;
    Ok(resolve_rows(rows, registry))
}

pub fn load_roster_csv<R: Read>(
    reader: R,
    registry: &GameRegistry,
) -> RfResult<Vec<CharacterRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    let mut skipped = 0;
    for result in rdr.deserialize::<RawCharacterRow>() {
        match result {
            Ok(row) => rows.push(row),
            Err(e) => {
                warn!("⚠️ Skipping invalid roster row: {}", e);
                skipped += 1;
            }
        }
    }
    if skipped > 0 {
        warn!("⚠️ Skipped {} invalid rows in roster file", skipped);
    }

    Ok(resolve_rows(rows, registry))
}

/// Load a lock list: a JSON array of `{"characterName": .., "groupId": ..}`.
pub fn load_locks<P: AsRef<Path>>(path: P) -> RfResult<Vec<LockAssignment>> {
    let file = File::open(path)?;
    let locks: Vec<LockAssignment> = serde_json::from_reader(file)?;
    Ok(locks)
}

fn resolve_rows(rows: Vec<RawCharacterRow>, registry: &GameRegistry) -> Vec<CharacterRecord> {
    let total = rows.len();
    let mut records = Vec::with_capacity(total);

    for row in rows {
        let Some(class) = registry.class(&row.class_id) else {
            warn!(
                "⚠️ Character {} references unknown class '{}', skipping",
                row.name, row.class_id
            );
            continue;
        };
        let Some(spec) = registry.spec(&row.spec_id) else {
            warn!(
                "⚠️ Character {} references unknown spec '{}', skipping",
                row.name, row.spec_id
            );
            continue;
        };

        let role = Role::parse_lenient(&spec.role, &row.name);
        let tier = Tier::parse_lenient(&row.role_group, &row.name);

        records.push(CharacterRecord {
            name: row.name,
            player: row.player,
            class_name: class.name.clone(),
            spec_name: spec.name.clone(),
            role,
            tier,
            armor: class.armor,
            token: class.token,
            buffs: class.buffs.clone(),
        });
    }

    info!("Loaded {} of {} roster rows", records.len(), total);
    records
}
