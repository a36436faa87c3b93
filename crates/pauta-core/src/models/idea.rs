//! Content-idea history models.
//!
//! Idea batches are produced by the AI-assist feature (or its demo
//! fallback) and live in their own append-only history, independent of
//! the weekly agendas.

use std::str::FromStr;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Estimated engagement tier for a content idea.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum EngagementTier {
    #[serde(rename = "baixo")]
    Low,
    #[default]
    #[serde(rename = "médio")]
    Medium,
    #[serde(rename = "alto")]
    High,
}

impl FromStr for EngagementTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" | "baixo" => Ok(EngagementTier::Low),
            "medium" | "médio" | "medio" => Ok(EngagementTier::Medium),
            "high" | "alto" => Ok(EngagementTier::High),
            _ => Err(format!("Invalid engagement tier: {s}")),
        }
    }
}

impl EngagementTier {
    /// Convert to the stored string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            EngagementTier::Low => "baixo",
            EngagementTier::Medium => "médio",
            EngagementTier::High => "alto",
        }
    }
}

/// A single post idea inside a batch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Idea {
    /// Short attention-grabbing title
    pub title: String,

    /// What the post should show or say
    #[serde(default)]
    pub description: String,

    /// Suggested format ("foto", "vídeo", "carrossel", "stories" or
    /// whatever the generator returned)
    #[serde(default, rename = "type")]
    pub format: String,

    /// Suggested hashtags
    #[serde(default)]
    pub hashtags: Vec<String>,

    /// Suggested call-to-action line
    #[serde(default, rename = "callToAction", alias = "call_to_action")]
    pub call_to_action: String,

    /// Estimated engagement tier
    #[serde(default, rename = "engagement")]
    pub engagement: EngagementTier,
}

/// Execution status of an idea batch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BatchStatus {
    /// Ideas generated but not yet acted on
    #[default]
    Pending,

    /// At least one idea was turned into a real post
    Executed,
}

/// Engagement recorded after a batch's ideas were executed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct IdeaPerformance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<u64>,
}

impl IdeaPerformance {
    /// Total recorded engagement (likes + comments).
    pub fn engagement(&self) -> u64 {
        self.likes.unwrap_or(0) + self.comments.unwrap_or(0)
    }
}

/// Context supplied to idea generation.
///
/// All fields are optional free text; `season` is conventionally one of
/// Verão, Outono, Inverno or Primavera.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GenerationContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_events: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_performance: Option<String>,
}

/// One generated batch of content ideas.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IdeaBatch {
    /// Identifier derived from the creation timestamp (milliseconds)
    pub id: i64,

    /// Timestamp when the batch was generated (UTC)
    pub created_at: Timestamp,

    /// Generated ideas, in reply order
    pub ideas: Vec<Idea>,

    /// Context the batch was generated under
    #[serde(default)]
    pub context: GenerationContext,

    /// Whether the batch was executed
    #[serde(default)]
    pub status: BatchStatus,

    /// Engagement recorded when the batch was marked executed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance: Option<IdeaPerformance>,

    /// Timestamp when the batch was marked executed (UTC)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executed_at: Option<Timestamp>,

    /// True when the batch came from the fixed demo catalog rather than
    /// an API call
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_demo: bool,
}

impl IdeaBatch {
    /// Total recorded engagement for the batch, zero when none recorded.
    pub fn engagement(&self) -> u64 {
        self.performance.map(|p| p.engagement()).unwrap_or(0)
    }
}

/// Tagged outcome of parsing a model reply into ideas.
///
/// Structured decode is attempted first, then the line-oriented
/// field-marker heuristic, and finally the whole reply is wrapped as a
/// single catch-all idea.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedReply {
    /// The reply contained a directly parseable JSON array
    Json(Vec<Idea>),

    /// Ideas were recovered from numbered items and field markers
    Heuristic(Vec<Idea>),

    /// Nothing parseable; the raw reply text wrapped as one idea
    Raw(Idea),
}

impl ParsedReply {
    /// Unwraps the parsed ideas regardless of how they were recovered.
    pub fn into_ideas(self) -> Vec<Idea> {
        match self {
            ParsedReply::Json(ideas) | ParsedReply::Heuristic(ideas) => ideas,
            ParsedReply::Raw(idea) => vec![idea],
        }
    }
}

/// Aggregated performance statistics over the idea history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IdeaStats {
    /// Total ideas across executed batches
    pub total_ideas: usize,

    /// Number of executed batches
    pub executed_count: usize,

    /// Mean likes+comments over executed batches with recorded
    /// performance, rounded to the nearest integer
    pub average_engagement: u64,

    /// Up to five executed batches, best engagement first
    pub top_performing: Vec<IdeaBatch>,
}
