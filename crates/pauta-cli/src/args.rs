//! Command-line argument definitions using clap
//!
//! This module defines the CLI structure with clap's derive API, following
//! the parameter wrapper pattern: each command gets a CLI-specific Args
//! struct with clap attributes, converted into the framework-free core
//! parameter types via `From`. Core types stay interface-agnostic and the
//! conversion is verified at compile time.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use jiff::civil::Date;
use pauta_core::params::{
    AddPost, ListPosts, MarkExecuted, PostRef, RestoreBackup, UpdateMetrics, WeekRef,
};
use pauta_core::{ContentType, GenerationContext, Metrics, Pillar, PostStatus, WeekId};

/// Weekly Instagram content planner for the Jet Chicken restaurant
///
/// Pauta manages weekly post agendas: it generates a starting plan for
/// each week, tracks posts from planned to posted, records engagement
/// metrics, exports weeks as CSV, and generates content ideas with AI
/// assistance (falling back to built-in demo content when no API key is
/// configured).
#[derive(Parser)]
#[command(version, about, name = "pauta")]
pub struct Args {
    /// Directory for the JSON data files. Defaults to
    /// $XDG_DATA_HOME/pauta
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Pauta CLI
///
/// Running with no command shows the current week's agenda.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage weekly agendas
    #[command(alias = "w")]
    Week {
        #[command(subcommand)]
        command: WeekCommands,
    },
    /// Manage posts within a week
    #[command(alias = "p")]
    Post {
        #[command(subcommand)]
        command: PostCommands,
    },
    /// Generate and track content ideas
    #[command(alias = "i")]
    Ideas {
        #[command(subcommand)]
        command: IdeaCommands,
    },
    /// Inspect and restore snapshot backups
    #[command(alias = "b")]
    Backup {
        #[command(subcommand)]
        command: BackupCommands,
    },
    /// Adjust display preferences
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

// ============================================================================
// Week commands
// ============================================================================

/// Reference to a week, shared by several commands.
#[derive(ClapArgs)]
pub struct WeekRefArgs {
    /// Week identifier like 2024-W10; defaults to the current week
    #[arg(short, long)]
    pub week: Option<WeekId>,
}

impl From<WeekRefArgs> for WeekRef {
    fn from(val: WeekRefArgs) -> Self {
        WeekRef { week: val.week }
    }
}

/// Show a week's agenda
#[derive(ClapArgs)]
pub struct ShowWeekArgs {
    /// Week identifier like 2024-W10; defaults to the current week
    #[arg(short, long)]
    pub week: Option<WeekId>,

    /// One line per post, regardless of the stored preference
    #[arg(long)]
    pub compact: bool,
}

/// Export a week's agenda as CSV
#[derive(ClapArgs)]
pub struct ExportWeekArgs {
    /// Week identifier like 2024-W10; defaults to the current week
    #[arg(short, long)]
    pub week: Option<WeekId>,

    /// Directory to write the CSV file into; defaults to the current
    /// directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum WeekCommands {
    /// Show the agenda, creating it on first access
    #[command(alias = "s")]
    Show(ShowWeekArgs),
    /// Replace the agenda's posts and tips with fresh content
    #[command(alias = "r")]
    Regenerate(WeekRefArgs),
    /// List all stored weeks
    #[command(aliases = ["l", "ls"])]
    List,
    /// Export the agenda as a CSV file
    #[command(alias = "e")]
    Export(ExportWeekArgs),
}

// ============================================================================
// Post commands
// ============================================================================

/// Add a post manually to a week's agenda
#[derive(ClapArgs)]
pub struct AddPostArgs {
    /// Week to add to; defaults to the current week
    #[arg(short, long)]
    pub week: Option<WeekId>,

    /// Instagram format of the post
    #[arg(short = 't', long = "type", value_enum)]
    pub content_type: ContentTypeArg,

    /// Content pillar
    #[arg(short, long, value_enum)]
    pub pillar: PillarArg,

    /// Scheduled date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Date,

    /// Caption text (at most 2200 characters)
    pub caption: String,

    /// Hashtags as a comma-separated list (1-30 entries)
    #[arg(long, value_delimiter = ',')]
    pub hashtags: Vec<String>,

    /// Free-form organizational tags as a comma-separated list
    #[arg(long, value_delimiter = ',')]
    pub tags: Vec<String>,
}

impl From<AddPostArgs> for AddPost {
    fn from(val: AddPostArgs) -> Self {
        AddPost {
            week: val.week,
            content_type: val.content_type.into(),
            pillar: val.pillar.into(),
            date: val.date,
            caption: val.caption,
            hashtags: val.hashtags,
            tags: val.tags,
        }
    }
}

/// Reference one post within a week
#[derive(ClapArgs)]
pub struct PostRefArgs {
    /// Identifier of the post
    pub post_id: String,

    /// Week the post lives in; defaults to the current week
    #[arg(short, long)]
    pub week: Option<WeekId>,
}

impl From<PostRefArgs> for PostRef {
    fn from(val: PostRefArgs) -> Self {
        PostRef {
            week: val.week,
            post_id: val.post_id,
        }
    }
}

/// Replace a post's engagement metrics
#[derive(ClapArgs)]
pub struct MetricsArgs {
    /// Identifier of the post
    pub post_id: String,

    /// Week the post lives in; defaults to the current week
    #[arg(short, long)]
    pub week: Option<WeekId>,

    /// Views recorded on the post
    #[arg(long)]
    pub views: Option<u64>,

    /// Likes recorded on the post
    #[arg(long)]
    pub likes: Option<u64>,

    /// Comments recorded on the post
    #[arg(long)]
    pub comments: Option<u64>,
}

impl From<MetricsArgs> for UpdateMetrics {
    fn from(val: MetricsArgs) -> Self {
        UpdateMetrics {
            week: val.week,
            post_id: val.post_id,
            metrics: Metrics {
                views: val.views,
                likes: val.likes,
                comments: val.comments,
            },
        }
    }
}

/// List posts within a week, optionally filtered
#[derive(ClapArgs)]
pub struct ListPostsArgs {
    /// Week to query; defaults to the current week
    #[arg(short, long)]
    pub week: Option<WeekId>,

    /// Free-text match against caption or hashtags
    #[arg(short, long)]
    pub query: Option<String>,

    /// Filter by content pillar
    #[arg(short, long, value_enum)]
    pub pillar: Option<PillarArg>,

    /// Filter by content type
    #[arg(short = 't', long = "type", value_enum)]
    pub content_type: Option<ContentTypeArg>,

    /// Filter by lifecycle status
    #[arg(short, long, value_enum)]
    pub status: Option<StatusArg>,
}

impl From<ListPostsArgs> for ListPosts {
    fn from(val: ListPostsArgs) -> Self {
        ListPosts {
            week: val.week,
            query: val.query,
            pillar: val.pillar.map(Into::into),
            content_type: val.content_type.map(Into::into),
            status: val.status.map(Into::into),
        }
    }
}

#[derive(Subcommand)]
pub enum PostCommands {
    /// Add a post manually
    #[command(alias = "a")]
    Add(AddPostArgs),
    /// Mark a post as posted
    Posted(PostRefArgs),
    /// Record engagement metrics on a post (replaces previous values)
    #[command(alias = "m")]
    Metrics(MetricsArgs),
    /// List posts, optionally filtered
    #[command(aliases = ["l", "ls"])]
    List(ListPostsArgs),
}

// ============================================================================
// Idea commands
// ============================================================================

/// Generate a batch of content ideas
#[derive(ClapArgs)]
pub struct GenerateIdeasArgs {
    /// Season to theme the ideas around; defaults to the current season
    #[arg(long)]
    pub season: Option<String>,

    /// Special events to mention (e.g. "Dia das Mães")
    #[arg(long)]
    pub events: Option<String>,

    /// Free-text note about previous content performance
    #[arg(long)]
    pub performance: Option<String>,
}

/// Mark an idea batch as executed
#[derive(ClapArgs)]
pub struct MarkExecutedArgs {
    /// Identifier of the batch, as shown in the history
    pub batch_id: i64,

    /// Likes the executed content received
    #[arg(long)]
    pub likes: Option<u64>,

    /// Comments the executed content received
    #[arg(long)]
    pub comments: Option<u64>,
}

impl From<MarkExecutedArgs> for MarkExecuted {
    fn from(val: MarkExecutedArgs) -> Self {
        MarkExecuted {
            batch_id: val.batch_id,
            likes: val.likes,
            comments: val.comments,
        }
    }
}

#[derive(Subcommand)]
pub enum IdeaCommands {
    /// Generate a new batch of ideas
    #[command(alias = "g")]
    Generate(GenerateIdeasArgs),
    /// Show the batch history, most recent first
    #[command(alias = "h")]
    History,
    /// Mark a batch as executed and record its engagement
    #[command(alias = "x")]
    Executed(MarkExecutedArgs),
    /// Show performance statistics over executed batches
    Stats,
}

// ============================================================================
// Backup commands
// ============================================================================

/// Restore the store from a snapshot backup
#[derive(ClapArgs)]
pub struct RestoreBackupArgs {
    /// 1-based backup index as shown by `backup list` (1 = most recent)
    pub index: usize,

    /// Confirm the restore (required: it overwrites all current agendas)
    #[arg(long)]
    pub confirm: bool,
}

impl From<RestoreBackupArgs> for RestoreBackup {
    fn from(val: RestoreBackupArgs) -> Self {
        RestoreBackup {
            index: val.index,
            confirmed: val.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum BackupCommands {
    /// List the rolling snapshot backups, most recent first
    #[command(aliases = ["l", "ls"])]
    List,
    /// Restore a snapshot, overwriting all current agendas
    #[command(alias = "r")]
    Restore(RestoreBackupArgs),
}

// ============================================================================
// Config commands
// ============================================================================

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Use the one-line-per-post week view by default
    Compact {
        /// true to enable, false to return to the full view
        #[arg(action = clap::ArgAction::Set)]
        enabled: bool,
    },
    /// Show the stored preferences
    Show,
}

// ============================================================================
// Value enums
// ============================================================================

/// Command-line representation of the Instagram content formats
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ContentTypeArg {
    Reel,
    Feed,
    Story,
    Live,
}

impl From<ContentTypeArg> for ContentType {
    fn from(val: ContentTypeArg) -> Self {
        match val {
            ContentTypeArg::Reel => ContentType::Reel,
            ContentTypeArg::Feed => ContentType::Feed,
            ContentTypeArg::Story => ContentType::Story,
            ContentTypeArg::Live => ContentType::Live,
        }
    }
}

/// Command-line representation of the content pillars
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PillarArg {
    /// Produto/Serviço
    Product,
    /// Prova Social
    SocialProof,
    /// Institucional
    Institutional,
    /// Engajamento Local
    LocalEngagement,
}

impl From<PillarArg> for Pillar {
    fn from(val: PillarArg) -> Self {
        match val {
            PillarArg::Product => Pillar::Product,
            PillarArg::SocialProof => Pillar::SocialProof,
            PillarArg::Institutional => Pillar::Institutional,
            PillarArg::LocalEngagement => Pillar::LocalEngagement,
        }
    }
}

/// Command-line representation of the post lifecycle states
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Planned,
    Posted,
}

impl From<StatusArg> for PostStatus {
    fn from(val: StatusArg) -> Self {
        match val {
            StatusArg::Planned => PostStatus::Planned,
            StatusArg::Posted => PostStatus::Posted,
        }
    }
}

impl GenerateIdeasArgs {
    /// Build the generation context, filling season and events from the
    /// calendar when not given explicitly.
    pub fn into_context(self, today: Date) -> GenerationContext {
        GenerationContext {
            season: self
                .season
                .or_else(|| Some(pauta_core::ideas::current_season(today).to_string())),
            special_events: self
                .events
                .or_else(|| pauta_core::ideas::upcoming_event(today).map(str::to_string)),
            previous_performance: self.performance,
        }
    }
}
