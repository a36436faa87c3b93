//! CSV export of weekly agendas.
//!
//! Output matches the historical report format: a fixed Portuguese header
//! row, one row per post, every field double-quoted with embedded quotes
//! doubled, hashtags joined by `", "`, and empty strings for absent
//! metrics.

use crate::models::WeekAgenda;

/// Header row of the weekly export.
pub const CSV_HEADER: &str = "Data,Tipo,Pilar,Legenda,Hashtags,Status,Views,Likes,Comments";

/// File name for a week's export: `agenda-semana-{weekId}.csv`.
pub fn csv_filename(agenda: &WeekAgenda) -> String {
    format!("agenda-semana-{}.csv", agenda.week)
}

/// Renders a week's posts as CSV, header included, one line per post.
pub fn week_to_csv(agenda: &WeekAgenda) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');

    for post in &agenda.posts {
        let metrics = post.metrics.unwrap_or_default();
        let fields = [
            post.date.to_string(),
            post.content_type.as_str().to_string(),
            post.pillar.as_str().to_string(),
            post.caption.clone(),
            post.hashtags.join(", "),
            post.status.as_str().to_string(),
            metrics.views.map(|v| v.to_string()).unwrap_or_default(),
            metrics.likes.map(|v| v.to_string()).unwrap_or_default(),
            metrics.comments.map(|v| v.to_string()).unwrap_or_default(),
        ];

        let row: Vec<String> = fields.iter().map(|f| quote(f)).collect();
        out.push_str(&row.join(","));
        out.push('\n');
    }

    out
}

/// Double-quotes a field, doubling any embedded quotes.
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::WeekId;
    use crate::models::{ContentType, Metrics, Pillar, Post, PostStatus};
    use jiff::civil::date;
    use jiff::Timestamp;

    fn post(caption: &str, metrics: Option<Metrics>) -> Post {
        let week: WeekId = "2024-W10".parse().expect("valid week");
        Post {
            id: "abc1234".to_string(),
            content_type: ContentType::Reel,
            pillar: Pillar::Product,
            date: date(2024, 3, 4),
            caption: caption.to_string(),
            hashtags: vec!["#JetChicken".to_string(), "#LondrinaPR".to_string()],
            tags: Vec::new(),
            location: "Jet Chicken - Londrina - PR".to_string(),
            status: PostStatus::Planned,
            metrics,
            created_at: Timestamp::now(),
            posted_at: None,
            week,
        }
    }

    fn agenda(posts: Vec<Post>) -> WeekAgenda {
        let week: WeekId = "2024-W10".parse().expect("valid week");
        WeekAgenda {
            week,
            week_start: week.week_start(),
            posts,
            tips: Vec::new(),
            created_at: Timestamp::now(),
        }
    }

    #[test]
    fn export_has_header_plus_one_line_per_post() {
        let csv = week_to_csv(&agenda(vec![post("a", None), post("b", None)]));
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER);
    }

    #[test]
    fn embedded_quotes_and_commas_are_escaped() {
        let csv = week_to_csv(&agenda(vec![post("ele disse \"top, demais\" ontem", None)]));
        let row = csv.lines().nth(1).expect("data row");
        assert!(row.contains("\"ele disse \"\"top, demais\"\" ontem\""));
        // A standard CSV parse of the row recovers exactly 9 fields.
        assert_eq!(parse_csv_row(row).len(), 9);
        assert_eq!(parse_csv_row(row)[3], "ele disse \"top, demais\" ontem");
    }

    #[test]
    fn hashtags_join_with_comma_space_and_absent_metrics_are_empty() {
        let csv = week_to_csv(&agenda(vec![post("oi", None)]));
        let fields = parse_csv_row(csv.lines().nth(1).expect("data row"));
        assert_eq!(fields[4], "#JetChicken, #LondrinaPR");
        assert_eq!(&fields[6..9], ["", "", ""]);
    }

    #[test]
    fn present_metrics_render_as_numbers() {
        let metrics = Metrics {
            views: Some(120),
            likes: Some(30),
            comments: None,
        };
        let csv = week_to_csv(&agenda(vec![post("oi", Some(metrics))]));
        let fields = parse_csv_row(csv.lines().nth(1).expect("data row"));
        assert_eq!(&fields[6..9], ["120", "30", ""]);
    }

    #[test]
    fn filename_embeds_the_week_id() {
        let a = agenda(Vec::new());
        assert_eq!(csv_filename(&a), "agenda-semana-2024-W10.csv");
    }

    /// Minimal RFC-4180 row parser used to verify escaping round-trips.
    fn parse_csv_row(row: &str) -> Vec<String> {
        let mut fields = Vec::new();
        let mut current = String::new();
        let mut in_quotes = false;
        let mut chars = row.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '"' if in_quotes && chars.peek() == Some(&'"') => {
                    chars.next();
                    current.push('"');
                }
                '"' => in_quotes = !in_quotes,
                ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
                _ => current.push(c),
            }
        }
        fields.push(current);
        fields
    }
}
