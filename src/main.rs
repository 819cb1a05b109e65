use profile_header::core::ConfigProvider;
use profile_header::utils::{logger, validation::Validate};
use profile_header::{HeaderConfig, HeaderEngine, HeaderError, HeaderPipeline, LocalStorage};

fn report_failure(stage: &str, e: &HeaderError) -> ! {
    tracing::error!(
        "❌ {} failed: {} (Category: {:?})",
        stage,
        e,
        e.category()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() {
    logger::init_cli_logger();

    // 在任何網路請求前讀取並驗證設定
    let config = match HeaderConfig::from_env().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => report_failure("Configuration", &e),
    };
    tracing::debug!("Config: {:?}", config);

    let storage = LocalStorage::new(config.template_dir().to_string());
    let pipeline = match HeaderPipeline::new(storage, config) {
        Ok(pipeline) => pipeline,
        Err(e) => report_failure("Client setup", &e),
    };

    let engine = HeaderEngine::new(pipeline);
    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Successfully generated {} with live data", output_path);
            println!("✓ Successfully generated {} with live data", output_path);
        }
        Err(e) => report_failure("Header generation", &e),
    }
}
