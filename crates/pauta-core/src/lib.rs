//! Core library for the Pauta Instagram content planner.
//!
//! This crate provides the business logic for planning a restaurant's
//! weekly Instagram agendas: post generation and lifecycle, engagement
//! metrics, JSON snapshot persistence with rolling backups, CSV export,
//! and AI-assisted content idea generation with an offline demo fallback.
//!
//! # Display Architecture
//!
//! The crate implements a Display-based architecture for formatting output:
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for
//!   direct markdown formatting
//! - **Display Wrappers** ([`display`]): Provide contextual formatting for
//!   collections and operation results
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pauta_core::{params::WeekRef, ContentPlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a planner instance over the default data directory
//! let planner = ContentPlannerBuilder::new().build().await?;
//!
//! // Show (and lazily create) the current week's agenda
//! let agenda = planner.get_or_create(&WeekRef::default()).await?;
//! println!("{agenda}");
//!
//! // Export it as CSV
//! let csv = pauta_core::export::week_to_csv(&agenda);
//! println!("{csv}");
//! # Ok(())
//! # }
//! ```

pub mod calendar;
pub mod catalog;
pub mod display;
pub mod error;
pub mod export;
pub mod generator;
pub mod ideas;
pub mod models;
pub mod params;
pub mod planner;
pub mod store;

// Re-export commonly used types
pub use calendar::WeekId;
pub use display::{
    Backups, Batches, CompactAgenda, CreateResult, ExportResult, LocalDateTime, OperationStatus,
    Posts, UpdateResult,
};
pub use error::{PautaError, Result};
pub use ideas::{ApiConfig, IdeaGenerator};
pub use models::{
    ContentType, GenerationContext, Idea, IdeaBatch, IdeaStats, Metrics, Pillar, Post, PostFilter,
    PostStatus, WeekAgenda,
};
pub use params::{
    AddPost, ListPosts, MarkExecuted, PostRef, RestoreBackup, UpdateMetrics, WeekRef,
};
pub use planner::{ContentPlanner, ContentPlannerBuilder};
pub use store::Preferences;
