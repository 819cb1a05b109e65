use crate::core::graphql::GraphQlClient;
use crate::core::template::splice_template;
use crate::core::{grid, stats};
use crate::core::{AccountSnapshot, ConfigProvider, HeaderRender, Pipeline, Storage};
use crate::utils::error::{HeaderError, Result};
use chrono::{DateTime, Utc};

pub struct HeaderPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: GraphQlClient,
    reference_time: Option<DateTime<Utc>>,
}

impl<S: Storage, C: ConfigProvider> HeaderPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let client = GraphQlClient::new(
            config.api_endpoint(),
            config.token(),
            config.request_timeout(),
        )?;

        Ok(Self {
            storage,
            config,
            client,
            reference_time: None,
        })
    }

    /// 固定計算年資時使用的「現在」時間
    pub fn with_reference_time(mut self, now: DateTime<Utc>) -> Self {
        self.reference_time = Some(now);
        self
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for HeaderPipeline<S, C> {
    async fn extract(&self) -> Result<AccountSnapshot> {
        tracing::info!("Fetching user data for {}...", self.config.username());
        let snapshot = self
            .client
            .fetch_account_snapshot(self.config.username())
            .await?;

        tracing::info!(
            "Total contributions: {}",
            snapshot.contribution_calendar.total_contributions
        );
        tracing::info!("Weeks of data: {}", snapshot.contribution_calendar.weeks.len());

        Ok(snapshot)
    }

    async fn transform(&self, snapshot: AccountSnapshot) -> Result<HeaderRender> {
        let now = self.reference_time.unwrap_or_else(Utc::now);
        let stats = stats::derive_stats(&snapshot, now);

        tracing::info!("Years Coding: {}", stats.years_active);
        tracing::info!("Repositories: {}", stats.repositories);
        tracing::info!("Commits: {}", stats.commits);

        let cells = grid::render_cells(&snapshot.contribution_calendar);
        let grid_markup = grid::render_grid(&cells);
        tracing::debug!("Rendered {} contribution cells", cells.len());

        Ok(HeaderRender {
            stats,
            grid_markup,
            cell_count: cells.len(),
        })
    }

    async fn load(&self, render: HeaderRender) -> Result<String> {
        let template_file = self.config.template_file();
        let output_path = format!("{}/{}", self.config.template_dir(), template_file);

        let raw = self.storage.read_file(template_file).await?;
        let template = String::from_utf8(raw).map_err(|e| HeaderError::FileFormatError {
            message: format!("{} is not valid UTF-8: {}", output_path, e),
        })?;

        // 替換失敗時不寫入任何內容
        let document = splice_template(&template, &render.stats, &render.grid_markup)?;

        tracing::debug!("Writing {} bytes to {}", document.len(), output_path);
        self.storage
            .write_file(template_file, document.as_bytes())
            .await?;

        Ok(output_path)
    }
}
