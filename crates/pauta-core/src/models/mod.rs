//! Data models for weekly agendas, posts and content ideas.
//!
//! This module contains the core domain models of the content planner.
//! Display implementations live in [`crate::display::models`] to keep data
//! structures separate from presentation logic.

pub mod agenda;
pub mod filters;
pub mod idea;
pub mod post;
pub mod status;


// Re-export all public types at the models level
pub use agenda::WeekAgenda;
pub use filters::PostFilter;
pub use idea::{
    BatchStatus, EngagementTier, GenerationContext, Idea, IdeaBatch, IdeaPerformance, IdeaStats,
    ParsedReply,
};
pub use post::{Metrics, Post};
pub use status::{ContentType, Pillar, PostStatus, PILLARS};
