use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct HeaderEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> HeaderEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// 依序執行 extract、transform、load，任何一步失敗即中止
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting header generation...");

        tracing::debug!("Extracting account data...");
        let snapshot = self.pipeline.extract().await?;

        tracing::debug!("Rendering header...");
        let render = self.pipeline.transform(snapshot).await?;
        tracing::debug!("Rendered {} grid cells", render.cell_count);

        tracing::debug!("Writing template...");
        let output_path = self.pipeline.load(render).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
