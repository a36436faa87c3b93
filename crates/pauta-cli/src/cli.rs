//! Command handlers bridging parsed arguments and the core planner.
//!
//! Each handler converts its CLI arguments into core parameter types,
//! runs the operation, and renders the outcome through the display
//! wrappers from `pauta_core::display`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use pauta_core::{
    params::{ListPosts, RestoreBackup, WeekRef},
    ApiConfig, Backups, Batches, CompactAgenda, ContentPlanner, CreateResult, ExportResult,
    IdeaGenerator, OperationStatus, Posts, UpdateResult,
};

use crate::args::{
    AddPostArgs, BackupCommands, ConfigCommands, ExportWeekArgs, GenerateIdeasArgs, IdeaCommands,
    ListPostsArgs, MarkExecutedArgs, MetricsArgs, PostCommands, PostRefArgs, ShowWeekArgs,
    WeekCommands,
};
use crate::renderer::TerminalRenderer;

/// Command dispatcher owning the planner and the output renderer.
pub struct Cli {
    planner: ContentPlanner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: ContentPlanner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub async fn handle_week_command(&self, command: WeekCommands) -> Result<()> {
        match command {
            WeekCommands::Show(args) => self.show_week(args).await,
            WeekCommands::Regenerate(args) => self.regenerate_week(&args.into()).await,
            WeekCommands::List => self.list_weeks().await,
            WeekCommands::Export(args) => self.export_week(args).await,
        }
    }

    pub async fn handle_post_command(&self, command: PostCommands) -> Result<()> {
        match command {
            PostCommands::Add(args) => self.add_post(args).await,
            PostCommands::Posted(args) => self.mark_posted(args).await,
            PostCommands::Metrics(args) => self.update_metrics(args).await,
            PostCommands::List(args) => self.list_posts(args).await,
        }
    }

    pub async fn handle_idea_command(&self, command: IdeaCommands) -> Result<()> {
        match command {
            IdeaCommands::Generate(args) => self.generate_ideas(args).await,
            IdeaCommands::History => self.idea_history().await,
            IdeaCommands::Executed(args) => self.mark_executed(args).await,
            IdeaCommands::Stats => self.idea_stats().await,
        }
    }

    pub async fn handle_backup_command(&self, command: BackupCommands) -> Result<()> {
        match command {
            BackupCommands::List => self.list_backups().await,
            BackupCommands::Restore(args) => self.restore_backup(&args.into()).await,
        }
    }

    pub async fn handle_config_command(&self, command: ConfigCommands) -> Result<()> {
        match command {
            ConfigCommands::Compact { enabled } => {
                self.planner
                    .set_compact_view(enabled)
                    .await
                    .context("Failed to store preference")?;
                let status = OperationStatus::success(format!(
                    "Compact week view {}",
                    if enabled { "enabled" } else { "disabled" }
                ));
                self.renderer.render(&status.to_string())
            }
            ConfigCommands::Show => {
                let prefs = self
                    .planner
                    .preferences()
                    .await
                    .context("Failed to read preferences")?;
                self.renderer
                    .render(&format!("- compact_week_view: {}\n", prefs.compact_week_view))
            }
        }
    }

    /// Default action when no command is given: show the current week.
    pub async fn show_current_week(&self) -> Result<()> {
        self.show_week(ShowWeekArgs {
            week: None,
            compact: false,
        })
        .await
    }

    async fn show_week(&self, args: ShowWeekArgs) -> Result<()> {
        let agenda = self
            .planner
            .get_or_create(&WeekRef { week: args.week })
            .await
            .context("Failed to load week agenda")?;

        let prefs = self
            .planner
            .preferences()
            .await
            .context("Failed to read preferences")?;

        if args.compact || prefs.compact_week_view {
            self.renderer.render(&CompactAgenda(&agenda).to_string())
        } else {
            self.renderer.render(&agenda.to_string())
        }
    }

    async fn regenerate_week(&self, params: &WeekRef) -> Result<()> {
        let agenda = self
            .planner
            .regenerate(params)
            .await
            .context("Failed to regenerate agenda")?;
        self.renderer.render(&agenda.to_string())
    }

    async fn list_weeks(&self) -> Result<()> {
        let agendas = self
            .planner
            .list_agendas()
            .await
            .context("Failed to list agendas")?;

        if agendas.is_empty() {
            return self.renderer.render("Nenhuma semana armazenada.\n");
        }
        let mut output = String::from("# Semanas\n\n");
        for agenda in &agendas {
            output.push_str(&format!(
                "- {} — {} post(s), {} planejado(s)\n",
                agenda.week,
                agenda.posts.len(),
                agenda.planned_count()
            ));
        }
        self.renderer.render(&output)
    }

    async fn export_week(&self, args: ExportWeekArgs) -> Result<()> {
        let agenda = self
            .planner
            .get_or_create(&WeekRef { week: args.week })
            .await
            .context("Failed to load week agenda")?;

        let dir = args.output.unwrap_or_else(|| PathBuf::from("."));
        let path = dir.join(pauta_core::export::csv_filename(&agenda));
        let csv = pauta_core::export::week_to_csv(&agenda);
        std::fs::write(&path, csv)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        let result = ExportResult {
            path,
            rows: agenda.posts.len(),
        };
        self.renderer.render(&result.to_string())
    }

    async fn add_post(&self, args: AddPostArgs) -> Result<()> {
        let post = self
            .planner
            .add_post(&args.into())
            .await
            .context("Failed to add post")?;
        self.renderer.render(&CreateResult::new(post).to_string())
    }

    async fn mark_posted(&self, args: PostRefArgs) -> Result<()> {
        let post_id = args.post_id.clone();
        match self
            .planner
            .mark_posted(&args.into())
            .await
            .context("Failed to mark post")?
        {
            Some(post) => {
                let result = UpdateResult::with_changes(
                    post,
                    vec!["Status changed to postado".to_string()],
                );
                self.renderer.render(&result.to_string())
            }
            None => self.renderer.render(
                &OperationStatus::failure(format!("No post with id '{post_id}' in that week"))
                    .with_hint("run 'pauta post list' to see the ids for a week")
                    .to_string(),
            ),
        }
    }

    async fn update_metrics(&self, args: MetricsArgs) -> Result<()> {
        let post_id = args.post_id.clone();
        match self
            .planner
            .update_metrics(&args.into())
            .await
            .context("Failed to update metrics")?
        {
            Some(post) => {
                let result =
                    UpdateResult::with_changes(post, vec!["Metrics replaced".to_string()]);
                self.renderer.render(&result.to_string())
            }
            None => self.renderer.render(
                &OperationStatus::failure(format!("No post with id '{post_id}' in that week"))
                    .with_hint("run 'pauta post list' to see the ids for a week")
                    .to_string(),
            ),
        }
    }

    async fn list_posts(&self, args: ListPostsArgs) -> Result<()> {
        let params: ListPosts = args.into();
        let posts = self
            .planner
            .list_posts(&params)
            .await
            .context("Failed to list posts")?;
        self.renderer.render(&Posts(posts).to_string())
    }

    async fn list_backups(&self) -> Result<()> {
        let backups = self
            .planner
            .list_backups()
            .await
            .context("Failed to list backups")?;
        self.renderer.render(&Backups(backups).to_string())
    }

    async fn restore_backup(&self, params: &RestoreBackup) -> Result<()> {
        let restored = self
            .planner
            .restore_backup(params)
            .await
            .context("Failed to restore backup")?;
        let status = OperationStatus::success(format!(
            "Restored snapshot with {} week(s)",
            restored.len()
        ));
        self.renderer.render(&status.to_string())
    }

    fn idea_generator(&self) -> IdeaGenerator {
        IdeaGenerator::new(self.planner.data_dir().to_path_buf(), ApiConfig::from_env())
    }

    async fn generate_ideas(&self, args: GenerateIdeasArgs) -> Result<()> {
        let generator = self.idea_generator();
        let today = jiff::Zoned::now().date();
        let context = args.into_context(today);

        let batch = generator
            .generate(context)
            .await
            .context("Failed to generate ideas")?;

        if batch.is_demo {
            log::warn!(
                "no usable API credential; served demo content \
                 (set OPENAI_API_KEY to enable live generation)"
            );
        }
        self.renderer.render(&CreateResult::new(batch).to_string())
    }

    async fn idea_history(&self) -> Result<()> {
        let history = self
            .idea_generator()
            .history()
            .await
            .context("Failed to load idea history")?;
        self.renderer.render(&Batches(history).to_string())
    }

    async fn mark_executed(&self, args: MarkExecutedArgs) -> Result<()> {
        let batch_id = args.batch_id;
        match self
            .idea_generator()
            .mark_executed(&args.into())
            .await
            .context("Failed to mark batch executed")?
        {
            Some(batch) => {
                let result = UpdateResult::with_changes(
                    batch,
                    vec!["Status changed to executed".to_string()],
                );
                self.renderer.render(&result.to_string())
            }
            None => self.renderer.render(
                &OperationStatus::failure(format!("No idea batch with id {batch_id}"))
                    .with_hint("run 'pauta ideas history' to see batch ids")
                    .to_string(),
            ),
        }
    }

    async fn idea_stats(&self) -> Result<()> {
        let stats = self
            .idea_generator()
            .stats()
            .await
            .context("Failed to compute idea statistics")?;
        self.renderer.render(&stats.to_string())
    }
}
