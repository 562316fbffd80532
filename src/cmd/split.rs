use crate::display;
use clap::Args;
use raidforge::config::SplitParams;
use raidforge::registry::GameRegistry;
use raidforge::report::SplitReport;
use raidforge::roster::{CharacterRecord, LockAssignment};
use raidforge::splitter::Splitter;
use rayon::prelude::*;
use std::fs;
use std::process;
use tracing::{error, info};

#[derive(Args, Debug, Clone)]
pub struct SplitArgs {
    #[command(flatten)]
    pub params: SplitParams,

    /// Run several seeded computations in parallel and keep the most even
    /// result.
    #[arg(short = 'a', long, default_value_t = 1)]
    pub trials: usize,

    /// Also write the JSON report to this path.
    #[arg(short = 'o', long)]
    pub out: Option<String>,
}

pub fn run(
    args: SplitArgs,
    records: &[CharacterRecord],
    locks: &[LockAssignment],
    registry: &GameRegistry,
) {
    let required = registry.required_buffs();
    let trials = args.trials.max(1);

    let results: Vec<_> = if trials == 1 {
        vec![Splitter::new(args.params.clone())
            .with_required_buffs(required)
            .compute(records, locks)]
    } else {
        info!("🔥 Running {} split trials in parallel", trials);
        (0..trials)
            .into_par_iter()
            .map(|i| {
                let mut params = args.params.clone();
                params.seed = params.seed.map(|s| s + i as u64);
                Splitter::new(params)
                    .with_required_buffs(required.clone())
                    .compute(records, locks)
            })
            .collect()
    };

    let mut reports: Vec<SplitReport> = Vec::with_capacity(results.len());
    for result in results {
        match result {
            Ok(report) => reports.push(report),
            Err(e) => {
                error!("❌ {}", e);
                process::exit(1);
            }
        }
    }

    let report = reports
        .into_iter()
        .min_by(|a, b| {
            a.summary
                .balance_variance
                .partial_cmp(&b.summary.balance_variance)
                .unwrap()
        })
        .unwrap();

    if trials > 1 {
        info!(
            "🏆 Best of {} trials: balance variance {:.3}",
            trials, report.summary.balance_variance
        );
    }

    display::print_split_report(&report);

    if let Some(path) = &args.out {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => match fs::write(path, json) {
                Ok(()) => info!("💾 Report written to {}", path),
                Err(e) => {
                    error!("❌ Could not write report to '{}': {}", path, e);
                    process::exit(1);
                }
            },
            Err(e) => {
                error!("❌ Could not serialize report: {}", e);
                process::exit(1);
            }
        }
    }
}
