//! Display implementations for domain models.
//!
//! All implementations produce markdown suitable for rich terminal
//! rendering. Data definitions stay in [`crate::models`]; only
//! presentation lives here.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{
    ContentType, EngagementTier, Idea, IdeaBatch, IdeaStats, Pillar, Post, PostStatus, WeekAgenda,
};

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for EngagementTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Post {
    fn fmt_post(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {} — {} ({})",
            self.date.strftime("%a %d/%m"),
            self.content_type,
            self.status.with_icon()
        )?;
        writeln!(f)?;
        writeln!(f, "- Id: {}", self.id)?;
        writeln!(f, "- Pilar: {}", self.pillar)?;
        writeln!(f, "- Local: {}", self.location)?;
        if !self.tags.is_empty() {
            writeln!(f, "- Tags: {}", self.tags.join(", "))?;
        }
        if let Some(posted_at) = &self.posted_at {
            writeln!(f, "- Postado em: {}", LocalDateTime(posted_at))?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.caption)?;
        writeln!(f)?;
        writeln!(f, "{}", self.hashtags.join(" "))?;

        if let Some(metrics) = &self.metrics {
            writeln!(f)?;
            writeln!(
                f,
                "Views: {} | Likes: {} | Comments: {}",
                metrics.views.unwrap_or(0),
                metrics.likes.unwrap_or(0),
                metrics.comments.unwrap_or(0)
            )?;
        }
        writeln!(f)
    }

    /// One-line rendering used by the compact week view and post lists.
    fn fmt_line(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- {} [{}] {} — {} ({})",
            self.date.strftime("%a %d/%m"),
            self.id,
            self.content_type,
            truncate(&self.caption, 60),
            self.status.with_icon()
        )
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_post(f)
    }
}

impl fmt::Display for WeekAgenda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_agenda_header(self, f)?;

        if self.posts.is_empty() {
            writeln!(f, "\nNenhum post nesta semana.")?;
        } else {
            writeln!(f, "\n## Posts")?;
            writeln!(f)?;
            for post in &self.posts {
                write!(f, "{post}")?;
            }
        }

        if !self.tips.is_empty() {
            writeln!(f, "## Dicas da semana")?;
            writeln!(f)?;
            for tip in &self.tips {
                writeln!(f, "- {tip}")?;
            }
        }

        Ok(())
    }
}

/// Compact rendering of an agenda: one line per post, tips omitted.
/// Used when the `compact_week_view` preference is enabled.
pub struct CompactAgenda<'a>(pub &'a WeekAgenda);

impl fmt::Display for CompactAgenda<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_agenda_header(self.0, f)?;
        writeln!(f)?;
        if self.0.posts.is_empty() {
            writeln!(f, "Nenhum post nesta semana.")?;
        }
        for post in &self.0.posts {
            post.fmt_line(f)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

fn fmt_agenda_header(agenda: &WeekAgenda, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "# Semana {}", agenda.week)?;
    writeln!(f)?;
    writeln!(
        f,
        "- Início: {} | Posts: {} | Planejados: {}",
        agenda.week_start.strftime("%d/%m/%Y"),
        agenda.posts.len(),
        agenda.planned_count()
    )?;
    writeln!(f, "- Criada em: {}", LocalDateTime(&agenda.created_at))
}

impl fmt::Display for Idea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} ({})", self.title, self.format)?;
        writeln!(f)?;
        if !self.description.is_empty() {
            writeln!(f, "{}", self.description)?;
            writeln!(f)?;
        }
        if !self.hashtags.is_empty() {
            writeln!(f, "{}", self.hashtags.join(" "))?;
        }
        if !self.call_to_action.is_empty() {
            writeln!(f, "CTA: {}", self.call_to_action)?;
        }
        writeln!(f, "Engajamento estimado: {}", self.engagement)
    }
}

impl fmt::Display for IdeaBatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "## Lote {}", self.id)?;
        if self.is_demo {
            write!(f, " (demo)")?;
        }
        writeln!(f)?;
        writeln!(f)?;
        writeln!(f, "- Gerado em: {}", LocalDateTime(&self.created_at))?;
        if let Some(executed_at) = &self.executed_at {
            writeln!(f, "- Executado em: {}", LocalDateTime(executed_at))?;
        }
        if let Some(performance) = &self.performance {
            writeln!(
                f,
                "- Desempenho: {} likes, {} comments",
                performance.likes.unwrap_or(0),
                performance.comments.unwrap_or(0)
            )?;
        }
        writeln!(f)?;
        for idea in &self.ideas {
            writeln!(f, "{idea}")?;
        }
        Ok(())
    }
}

impl fmt::Display for IdeaStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Estatísticas de ideias")?;
        writeln!(f)?;
        writeln!(f, "- Lotes executados: {}", self.executed_count)?;
        writeln!(f, "- Ideias executadas: {}", self.total_ideas)?;
        writeln!(f, "- Engajamento médio: {}", self.average_engagement)?;

        if !self.top_performing.is_empty() {
            writeln!(f)?;
            writeln!(f, "## Melhores lotes")?;
            writeln!(f)?;
            for batch in &self.top_performing {
                writeln!(
                    f,
                    "- Lote {} — engajamento {}",
                    batch.id,
                    batch.engagement()
                )?;
            }
        }
        Ok(())
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("curto", 60), "curto");
        let long = "promoção de frango crocante".repeat(4);
        let cut = truncate(&long, 10);
        assert_eq!(cut.chars().count(), 10);
        assert!(cut.ends_with('…'));
    }
}
