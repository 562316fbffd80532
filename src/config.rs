use clap::{Args, ValueEnum};

/// What happens to a character whose lock cannot be honored.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockFallback {
    /// Leave the character unassigned and report it.
    Drop,
    /// Release the character back into automatic distribution.
    Redistribute,
}

impl std::fmt::Display for LockFallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            LockFallback::Drop => "drop",
            LockFallback::Redistribute => "redistribute",
        })
    }
}

#[derive(Args, Debug, Clone)]
pub struct SplitParams {
    #[arg(long, default_value_t = 3)]
    pub num_groups: usize,

    /// Hard per-group member cap.
    #[arg(long, default_value_t = 30)]
    pub group_size: usize,

    #[arg(long)]
    pub tanks_per_group: Option<usize>,

    #[arg(long)]
    pub healers_per_group: Option<usize>,

    /// After role seeding, pull buff providers into groups missing a
    /// required buff.
    #[arg(long, default_value_t = false)]
    pub buff_backfill: bool,

    /// Run the bounded swap pass that evens out armor/token spread among
    /// main-tier characters.
    #[arg(long, default_value_t = false)]
    pub balance: bool,

    /// Exclude inactive-tier characters from distribution entirely.
    #[arg(long, default_value_t = false)]
    pub skip_inactive: bool,

    #[arg(long, value_enum, default_value_t = LockFallback::Drop)]
    pub lock_fallback: LockFallback,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,
}

impl SplitParams {
    /// The plain tier-by-tier splitter: no role quotas, no backfill, no
    /// balance pass.
    pub fn simple(num_groups: usize, group_size: usize) -> Self {
        Self {
            num_groups,
            group_size,
            tanks_per_group: None,
            healers_per_group: None,
            buff_backfill: false,
            balance: false,
            skip_inactive: false,
            lock_fallback: LockFallback::Drop,
            seed: None,
        }
    }

    /// The full pipeline: role quotas, buff backfill and the balance pass.
    pub fn optimized(num_groups: usize, group_size: usize) -> Self {
        Self {
            tanks_per_group: Some(2),
            healers_per_group: Some(5),
            buff_backfill: true,
            balance: true,
            ..Self::simple(num_groups, group_size)
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for SplitParams {
    fn default() -> Self {
        Self::simple(3, 30)
    }
}
