//! AI-assisted content idea generation.
//!
//! [`IdeaGenerator`] wraps a chat-completion API behind a facade that
//! always produces a usable batch: when no credential is configured or
//! the provider rejects the request for quota reasons, a fixed demo
//! batch (flagged `is_demo`) stands in for the live reply. Batches are
//! appended to their own history file, independent of the agendas.

use std::path::PathBuf;

use jiff::civil::Date;
use jiff::Timestamp;
use tokio::task;

use crate::error::{PautaError, Result};
use crate::models::{BatchStatus, GenerationContext, IdeaBatch, IdeaPerformance, IdeaStats};
use crate::params::MarkExecuted;
use crate::store::Storage;

pub mod client;
pub mod demo;
pub mod parser;

pub use client::{ApiConfig, ChatClient, API_KEY_VAR};

/// How many recent batches inform the prompt, to steer the model away
/// from repeating itself.
const PROMPT_HISTORY_BATCHES: usize = 3;

/// How many batches the stats report as top performers.
const TOP_PERFORMING: usize = 5;

const SYSTEM_PROMPT: &str = "Você é um especialista em marketing digital para \
    restaurantes. Você cria ideias de conteúdo para Instagram que geram \
    engajamento real. Responda sempre em português brasileiro.";

/// Facade over idea generation, history and statistics.
pub struct IdeaGenerator {
    data_dir: PathBuf,
    client: ChatClient,
}

impl IdeaGenerator {
    /// Creates a generator storing its history under `data_dir`.
    pub fn new(data_dir: PathBuf, config: ApiConfig) -> Self {
        Self {
            data_dir,
            client: ChatClient::new(config),
        }
    }

    /// Whether generation will hit the live API rather than the demo
    /// catalog.
    pub fn has_credential(&self) -> bool {
        self.client.has_credential()
    }

    /// Generates a new idea batch for the given context and persists it
    /// at the front of the history.
    ///
    /// A missing credential or a quota rejection degrades to the demo
    /// batch instead of failing; any other API error is returned.
    pub async fn generate(&self, context: GenerationContext) -> Result<IdeaBatch> {
        let recent = self.recent_titles().await?;

        let (ideas, is_demo) = if !self.client.has_credential() {
            (demo::demo_ideas(&context), true)
        } else {
            let prompt = build_prompt(&context, &recent);
            match self.client.complete(SYSTEM_PROMPT, &prompt).await {
                Ok(reply) => (parser::parse_reply(&reply).into_ideas(), false),
                Err(e) if e.is_demo_fallback() => (demo::demo_ideas(&context), true),
                Err(e) => return Err(e),
            }
        };

        let data_dir = self.data_dir.clone();
        task::spawn_blocking(move || {
            let storage = Storage::open(&data_dir)?;
            let mut history = storage.load_history();

            let now = Timestamp::now();
            // Millisecond ids can collide on rapid successive calls.
            let mut id = now.as_millisecond();
            while history.iter().any(|batch| batch.id == id) {
                id += 1;
            }

            let batch = IdeaBatch {
                id,
                created_at: now,
                ideas,
                context,
                status: BatchStatus::Pending,
                performance: None,
                executed_at: None,
                is_demo,
            };
            history.insert(0, batch.clone());
            storage.save_history(&history)?;
            Ok(batch)
        })
        .await
        .map_err(join_error)?
    }

    /// Returns the full batch history, most recent first.
    pub async fn history(&self) -> Result<Vec<IdeaBatch>> {
        let data_dir = self.data_dir.clone();
        task::spawn_blocking(move || {
            let storage = Storage::open(&data_dir)?;
            Ok(storage.load_history())
        })
        .await
        .map_err(join_error)?
    }

    /// Marks a batch as executed and records its engagement. Returns
    /// `None` when no batch has the given id; nothing is written in that
    /// case.
    pub async fn mark_executed(&self, params: &MarkExecuted) -> Result<Option<IdeaBatch>> {
        let data_dir = self.data_dir.clone();
        let params = params.clone();
        task::spawn_blocking(move || {
            let storage = Storage::open(&data_dir)?;
            let mut history = storage.load_history();
            let Some(batch) = history.iter_mut().find(|b| b.id == params.batch_id) else {
                return Ok(None);
            };

            batch.status = BatchStatus::Executed;
            batch.performance = Some(IdeaPerformance {
                likes: params.likes,
                comments: params.comments,
            });
            batch.executed_at = Some(Timestamp::now());
            let updated = batch.clone();

            storage.save_history(&history)?;
            Ok(Some(updated))
        })
        .await
        .map_err(join_error)?
    }

    /// Aggregates performance statistics over executed batches.
    pub async fn stats(&self) -> Result<IdeaStats> {
        let history = self.history().await?;
        Ok(compute_stats(&history))
    }

    /// Titles from the most recent batches, used to keep prompts from
    /// re-suggesting content the user just saw.
    async fn recent_titles(&self) -> Result<Vec<String>> {
        let history = self.history().await?;
        Ok(history
            .iter()
            .take(PROMPT_HISTORY_BATCHES)
            .flat_map(|batch| batch.ideas.iter().map(|idea| idea.title.clone()))
            .collect())
    }
}

fn join_error(e: task::JoinError) -> PautaError {
    PautaError::Configuration {
        message: format!("Task join error: {e}"),
    }
}

/// Builds the user prompt: restaurant profile, seasonal context, recent
/// titles to avoid, and the exact JSON shape the parser expects first.
fn build_prompt(context: &GenerationContext, recent_titles: &[String]) -> String {
    let mut prompt = String::from(
        "Gere 5 ideias de posts de Instagram para o restaurante Jet Chicken \
         (frango frito) em Londrina - PR.\n\n",
    );

    if let Some(season) = context.season.as_deref().filter(|s| !s.is_empty()) {
        prompt.push_str(&format!("Estação do ano: {season}\n"));
    }
    if let Some(events) = context.special_events.as_deref().filter(|s| !s.is_empty()) {
        prompt.push_str(&format!("Eventos próximos: {events}\n"));
    }
    if let Some(perf) = context
        .previous_performance
        .as_deref()
        .filter(|s| !s.is_empty())
    {
        prompt.push_str(&format!("Desempenho anterior: {perf}\n"));
    }
    if !recent_titles.is_empty() {
        prompt.push_str(&format!(
            "Evite repetir estas ideias recentes: {}\n",
            recent_titles.join(", ")
        ));
    }

    prompt.push_str(
        "\nResponda APENAS com um array JSON, sem texto antes ou depois, \
         onde cada item tem os campos: \"title\", \"description\", \"type\" \
         (foto, video, carrossel ou stories), \"hashtags\" (array), \
         \"callToAction\" e \"engagement\" (baixo, médio ou alto).",
    );

    prompt
}

fn compute_stats(history: &[IdeaBatch]) -> IdeaStats {
    let executed: Vec<&IdeaBatch> = history
        .iter()
        .filter(|batch| batch.status == BatchStatus::Executed)
        .collect();

    let with_performance: Vec<&&IdeaBatch> = executed
        .iter()
        .filter(|batch| batch.performance.is_some())
        .collect();
    let average_engagement = if with_performance.is_empty() {
        0
    } else {
        let total: u64 = with_performance.iter().map(|batch| batch.engagement()).sum();
        (total as f64 / with_performance.len() as f64).round() as u64
    };

    let mut top: Vec<IdeaBatch> = executed.iter().map(|batch| (*batch).clone()).collect();
    top.sort_by(|a, b| b.engagement().cmp(&a.engagement()));
    top.truncate(TOP_PERFORMING);

    IdeaStats {
        total_ideas: executed.iter().map(|batch| batch.ideas.len()).sum(),
        executed_count: executed.len(),
        average_engagement,
        top_performing: top,
    }
}

/// Season for a date in the southern hemisphere, by month.
pub fn current_season(date: Date) -> &'static str {
    match date.month() {
        12 | 1 | 2 => "Verão",
        3..=5 => "Outono",
        6..=8 => "Inverno",
        _ => "Primavera",
    }
}

/// Commercially relevant date in the given month, if any.
pub fn upcoming_event(date: Date) -> Option<&'static str> {
    match date.month() {
        1 => Some("Ano Novo"),
        2 => Some("Carnaval"),
        5 => Some("Dia das Mães"),
        8 => Some("Dia dos Pais"),
        11 => Some("Black Friday"),
        12 => Some("Natal"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::Idea;

    fn executed_batch(id: i64, likes: u64, comments: u64, ideas: usize) -> IdeaBatch {
        IdeaBatch {
            id,
            created_at: Timestamp::UNIX_EPOCH,
            ideas: vec![
                Idea {
                    title: format!("Ideia {id}"),
                    description: String::new(),
                    format: "foto".to_string(),
                    hashtags: vec![],
                    call_to_action: String::new(),
                    engagement: Default::default(),
                };
                ideas
            ],
            context: GenerationContext::default(),
            status: BatchStatus::Executed,
            performance: Some(IdeaPerformance {
                likes: Some(likes),
                comments: Some(comments),
            }),
            executed_at: Some(Timestamp::UNIX_EPOCH),
            is_demo: false,
        }
    }

    #[test]
    fn stats_only_count_executed_batches() {
        let mut pending = executed_batch(1, 100, 10, 5);
        pending.status = BatchStatus::Pending;

        let history = vec![pending, executed_batch(2, 40, 10, 5), executed_batch(3, 20, 10, 5)];
        let stats = compute_stats(&history);

        assert_eq!(stats.executed_count, 2);
        assert_eq!(stats.total_ideas, 10);
        // (50 + 30) / 2
        assert_eq!(stats.average_engagement, 40);
    }

    #[test]
    fn top_performing_is_sorted_and_capped() {
        let history: Vec<IdeaBatch> = (1..=7)
            .map(|i| executed_batch(i, (i as u64) * 10, 0, 1))
            .collect();
        let stats = compute_stats(&history);

        assert_eq!(stats.top_performing.len(), 5);
        assert_eq!(stats.top_performing[0].id, 7);
        assert_eq!(stats.top_performing[4].id, 3);
    }

    #[test]
    fn stats_of_empty_history_are_zero() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.total_ideas, 0);
        assert_eq!(stats.executed_count, 0);
        assert_eq!(stats.average_engagement, 0);
        assert!(stats.top_performing.is_empty());
    }

    #[test]
    fn prompt_includes_context_and_recent_titles() {
        let context = GenerationContext {
            season: Some("Verão".to_string()),
            special_events: Some("Carnaval".to_string()),
            previous_performance: None,
        };
        let prompt = build_prompt(&context, &["Frango no Balde".to_string()]);

        assert!(prompt.contains("Estação do ano: Verão"));
        assert!(prompt.contains("Eventos próximos: Carnaval"));
        assert!(prompt.contains("Frango no Balde"));
        assert!(!prompt.contains("Desempenho anterior"));
        assert!(prompt.contains("array JSON"));
    }

    #[test]
    fn seasons_follow_the_southern_hemisphere() {
        assert_eq!(current_season(date(2024, 1, 15)), "Verão");
        assert_eq!(current_season(date(2024, 4, 15)), "Outono");
        assert_eq!(current_season(date(2024, 7, 15)), "Inverno");
        assert_eq!(current_season(date(2024, 10, 15)), "Primavera");
        assert_eq!(current_season(date(2024, 12, 25)), "Verão");
    }

    #[test]
    fn events_exist_only_for_commercial_months() {
        assert_eq!(upcoming_event(date(2024, 5, 1)), Some("Dia das Mães"));
        assert_eq!(upcoming_event(date(2024, 11, 1)), Some("Black Friday"));
        assert_eq!(upcoming_event(date(2024, 3, 1)), None);
    }
}
