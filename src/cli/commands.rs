use crate::model::{ItemType, Quadrant, RawScoreFields, ScoringMethod};
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "vibefy")]
#[command(
    author,
    version,
    about = "Prioritize a product backlog with RICE scores and value/effort quadrants"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .vibefy.toml by default)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true, env = "VIBEFY_LOG_FILE")]
    pub log_file: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new vibefy project
    Init {
        /// Data directory for the scoring session
        #[arg(long, default_value = ".vibefy")]
        path: String,

        /// Ranking used for value/effort items
        #[arg(long, value_enum, default_value = "ratio")]
        ranking: RankingArg,
    },

    /// Score an item (creates it, or replaces its previous score)
    #[command(visible_alias = "s", allow_negative_numbers = true)]
    Score {
        /// Item ID
        id: String,

        /// Item type (defaults to the configured type)
        #[arg(short = 't', long, value_enum)]
        r#type: Option<ItemTypeArg>,

        /// Scoring method
        #[arg(short, long, value_enum)]
        method: MethodArg,

        #[command(flatten)]
        fields: ScoreFieldArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compute a RICE score without storing anything
    #[command(allow_negative_numbers = true)]
    Rice {
        reach: f64,
        impact: f64,
        confidence: f64,
        effort: f64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Classify a value/effort pair without storing anything
    #[command(allow_negative_numbers = true)]
    Matrix {
        value: f64,
        effort: f64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Move an item into a value/effort quadrant
    #[command(visible_alias = "mv")]
    Move {
        /// Item ID
        id: String,

        /// Target quadrant
        #[arg(value_enum)]
        quadrant: QuadrantArg,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the highest ranked items
    Top {
        /// Number of items to show (defaults to the configured limit)
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List value/effort items in one quadrant
    #[command(visible_alias = "q")]
    Quadrant {
        #[arg(value_enum)]
        quadrant: QuadrantArg,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all items in rank order
    #[command(visible_alias = "ls")]
    List {
        /// Filter by type
        #[arg(short = 't', long, value_enum)]
        r#type: Option<ItemTypeArg>,

        /// Filter by scoring method
        #[arg(short, long, value_enum)]
        method: Option<MethodArg>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show an item's score details
    Show {
        /// Item ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove an item from the session
    #[command(visible_alias = "rm")]
    Remove {
        /// Item ID
        id: String,

        /// Skip confirmation
        #[arg(short, long)]
        force: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score a batch of items from a JSON file
    Import {
        /// Path to a JSON array of score records
        file: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Undo the last change to the session
    Undo {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Numeric inputs for `score`. Which ones are required depends on the method.
#[derive(Args, Clone, Copy, Default)]
pub struct ScoreFieldArgs {
    /// People or events reached per period (rice)
    #[arg(long)]
    pub reach: Option<f64>,

    /// Impact per reached unit, 1-3 (rice)
    #[arg(long)]
    pub impact: Option<f64>,

    /// Confidence in percent, 0-100 (rice)
    #[arg(long)]
    pub confidence: Option<f64>,

    /// Effort (rice, value-effort)
    #[arg(long)]
    pub effort: Option<f64>,

    /// Value, 1-10 (value-effort)
    #[arg(long)]
    pub value: Option<f64>,

    /// Opaque score (custom)
    #[arg(long)]
    pub custom: Option<f64>,
}

impl From<ScoreFieldArgs> for RawScoreFields {
    fn from(args: ScoreFieldArgs) -> Self {
        RawScoreFields {
            reach: args.reach,
            impact: args.impact,
            confidence: args.confidence,
            effort: args.effort,
            value: args.value,
            custom: args.custom,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ItemTypeArg {
    Feature,
    Issue,
    Initiative,
}

impl From<ItemTypeArg> for ItemType {
    fn from(arg: ItemTypeArg) -> Self {
        match arg {
            ItemTypeArg::Feature => ItemType::Feature,
            ItemTypeArg::Issue => ItemType::Issue,
            ItemTypeArg::Initiative => ItemType::Initiative,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum MethodArg {
    Rice,
    ValueEffort,
    Custom,
}

impl From<MethodArg> for ScoringMethod {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Rice => ScoringMethod::Rice,
            MethodArg::ValueEffort => ScoringMethod::ValueEffort,
            MethodArg::Custom => ScoringMethod::Custom,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum QuadrantArg {
    QuickWins,
    MajorProjects,
    FillIns,
    Questionable,
}

impl From<QuadrantArg> for Quadrant {
    fn from(arg: QuadrantArg) -> Self {
        match arg {
            QuadrantArg::QuickWins => Quadrant::QuickWins,
            QuadrantArg::MajorProjects => Quadrant::MajorProjects,
            QuadrantArg::FillIns => Quadrant::FillIns,
            QuadrantArg::Questionable => Quadrant::Questionable,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RankingArg {
    Ratio,
    Zero,
}

impl From<RankingArg> for crate::engine::RankingStrategy {
    fn from(arg: RankingArg) -> Self {
        match arg {
            RankingArg::Ratio => crate::engine::RankingStrategy::Ratio,
            RankingArg::Zero => crate::engine::RankingStrategy::Zero,
        }
    }
}
