//! Status and category enumerations for posts.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of post lifecycle states.
///
/// The only transition is Planned -> Posted (one-way). Serialized forms
/// match the Portuguese strings used in the stored JSON documents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PostStatus {
    /// Post is scheduled but not yet published
    #[default]
    #[serde(rename = "planejado")]
    Planned,

    /// Post has been published to Instagram
    #[serde(rename = "postado")]
    Posted,
}

impl FromStr for PostStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "planned" | "planejado" => Ok(PostStatus::Planned),
            "posted" | "postado" => Ok(PostStatus::Posted),
            _ => Err(format!("Invalid post status: {s}")),
        }
    }
}

impl PostStatus {
    /// Convert to the stored string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Planned => "planejado",
            PostStatus::Posted => "postado",
        }
    }

    /// Get status with consistent icon formatting for display.
    pub fn with_icon(&self) -> &'static str {
        match self {
            PostStatus::Planned => "○ Planejado",
            PostStatus::Posted => "✓ Postado",
        }
    }
}

/// Instagram content format of a post.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ContentType {
    Reel,
    Feed,
    Story,
    Live,
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reel" => Ok(ContentType::Reel),
            "feed" => Ok(ContentType::Feed),
            "story" => Ok(ContentType::Story),
            "live" => Ok(ContentType::Live),
            _ => Err(format!("Invalid content type: {s}")),
        }
    }
}

impl ContentType {
    /// Convert to the stored string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Reel => "Reel",
            ContentType::Feed => "Feed",
            ContentType::Story => "Story",
            ContentType::Live => "Live",
        }
    }
}

/// The four fixed content pillars posts are planned around.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Pillar {
    /// Dishes, combos and services offered
    #[serde(rename = "Produto/Serviço")]
    Product,

    /// Customer testimonials and social proof
    #[serde(rename = "Prova Social")]
    SocialProof,

    /// The restaurant itself: team, history, behind the scenes
    #[serde(rename = "Institucional")]
    Institutional,

    /// Local community engagement around Londrina
    #[serde(rename = "Engajamento Local")]
    LocalEngagement,
}

/// All pillars in catalog order.
pub const PILLARS: [Pillar; 4] = [
    Pillar::Product,
    Pillar::SocialProof,
    Pillar::Institutional,
    Pillar::LocalEngagement,
];

impl FromStr for Pillar {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "product" | "produto/serviço" | "produto" => Ok(Pillar::Product),
            "social-proof" | "prova social" => Ok(Pillar::SocialProof),
            "institutional" | "institucional" => Ok(Pillar::Institutional),
            "local-engagement" | "engajamento local" => Ok(Pillar::LocalEngagement),
            _ => Err(format!("Invalid pillar: {s}")),
        }
    }
}

impl Pillar {
    /// Convert to the stored string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Pillar::Product => "Produto/Serviço",
            Pillar::SocialProof => "Prova Social",
            Pillar::Institutional => "Institucional",
            Pillar::LocalEngagement => "Engajamento Local",
        }
    }
}
