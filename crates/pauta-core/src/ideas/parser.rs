//! Reply parsing with layered fallbacks.
//!
//! Model output is unreliable: sometimes a clean JSON array, sometimes a
//! numbered Portuguese list with labelled fields, sometimes prose. Each
//! stage handles one of those shapes so a reply never hard-fails.

use std::str::FromStr;

use crate::models::{EngagementTier, Idea, ParsedReply};

/// Parses a model reply into ideas, trying structured JSON first, then
/// the numbered-list heuristic, then wrapping the raw text.
pub fn parse_reply(content: &str) -> ParsedReply {
    if let Some(ideas) = try_json(content) {
        return ParsedReply::Json(ideas);
    }
    let ideas = try_numbered_list(content);
    if !ideas.is_empty() {
        return ParsedReply::Heuristic(ideas);
    }
    ParsedReply::Raw(wrap_raw(content))
}

/// Extracts the outermost JSON array from the reply and decodes it.
/// Models frequently wrap the array in prose or code fences, so the
/// slice runs from the first `[` to the last `]`.
fn try_json(content: &str) -> Option<Vec<Idea>> {
    let start = content.find('[')?;
    let end = content.rfind(']')?;
    if end <= start {
        return None;
    }
    let ideas: Vec<Idea> = serde_json::from_str(&content[start..=end]).ok()?;
    if ideas.is_empty() {
        None
    } else {
        Some(ideas)
    }
}

/// Recovers ideas from a numbered list with labelled fields, e.g.
///
/// ```text
/// 1. Frango no Balde
/// Descrição: mostre o balde aberto
/// Tipo: foto
/// Hashtags: #frango #balde
/// CTA: Peça o seu!
/// ```
fn try_numbered_list(content: &str) -> Vec<Idea> {
    let mut ideas: Vec<Idea> = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(title) = numbered_title(line) {
            ideas.push(Idea {
                title: title.to_string(),
                description: String::new(),
                format: String::new(),
                hashtags: Vec::new(),
                call_to_action: String::new(),
                engagement: EngagementTier::default(),
            });
            continue;
        }

        let Some(current) = ideas.last_mut() else {
            continue;
        };
        if let Some(value) = field_value(line, &["Descrição:", "Descricao:", "Description:"]) {
            current.description = value.to_string();
        } else if let Some(value) = field_value(line, &["Tipo:", "Formato:", "Type:"]) {
            current.format = value.to_string();
        } else if let Some(value) = field_value(line, &["Hashtags:"]) {
            current.hashtags = value
                .split_whitespace()
                .filter(|word| word.starts_with('#'))
                .map(str::to_string)
                .collect();
        } else if let Some(value) = field_value(line, &["CTA:", "Call to action:"]) {
            current.call_to_action = value.to_string();
        } else if let Some(value) = field_value(line, &["Engajamento:", "Engagement:"]) {
            if let Ok(tier) = EngagementTier::from_str(value) {
                current.engagement = tier;
            }
        }
    }

    // Bare numbers with no title text are noise, not ideas.
    ideas.retain(|idea| !idea.title.is_empty());
    ideas
}

/// Returns the title text when the line starts a numbered item
/// (`"3. Combo Família"` yields `"Combo Família"`).
fn numbered_title(line: &str) -> Option<&str> {
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = line[digits..].strip_prefix('.')?;
    let title = rest.trim().trim_start_matches('*').trim();
    Some(title)
}

/// Case-insensitive match of any of the given field markers at the start
/// of the line, returning the trimmed remainder.
fn field_value<'a>(line: &'a str, markers: &[&str]) -> Option<&'a str> {
    let lower = line.to_lowercase();
    for marker in markers {
        if lower.starts_with(&marker.to_lowercase()) {
            return Some(line[marker.len()..].trim());
        }
    }
    None
}

/// Wraps an unparseable reply as a single idea so the text is still
/// shown to the user instead of being discarded.
fn wrap_raw(content: &str) -> Idea {
    Idea {
        title: "Conteúdo gerado automaticamente".to_string(),
        description: content.trim().to_string(),
        format: "foto".to_string(),
        hashtags: vec![
            "#JetChicken".to_string(),
            "#LondrinaPR".to_string(),
            "#FrangoFrito".to_string(),
        ],
        call_to_action: "Venha experimentar!".to_string(),
        engagement: EngagementTier::Medium,
    }
}
