//! Generate every missing audio file for one tenant, language and mode.
//!
//! Text sources are read from `<tenants-root>/<tenant>/texts/<lang>/<monument>/<mode>.txt`
//! and audio is written to `<tenants-root>/<tenant>/audio/<lang>/<monument>/<mode>.mp3`.

use audioguide_tts::domain::batch::{
    BatchOrchestrator, FixedDelay, InteractivePrompt, NoPause, Pacer,
};
use audioguide_tts::error::AppResult;
use audioguide_tts::infrastructure::cli::parse_args;
use audioguide_tts::infrastructure::config::{
    BatchConfig, LogFormat, PauseMode, DEFAULT_LANGUAGE, DEFAULT_MODE, DEFAULT_TENANT,
    DEFAULT_TENANTS_ROOT,
};
use audioguide_tts::infrastructure::logging::init_logging;
use audioguide_tts::infrastructure::process::ChildProcessRunner;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "bulk-generate-tts")]
#[command(about = "Generate missing ElevenLabs audio for every monument of a tenant")]
struct Args {
    /// Tenant identifier
    #[arg(long, default_value = DEFAULT_TENANT)]
    tenant: String,

    /// Language code
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    lang: String,

    /// Text variant to synthesize (e.g. normal, infantil)
    #[arg(long, default_value = DEFAULT_MODE)]
    mode: String,

    /// Wait for Enter after each generated audio (default)
    #[arg(long, overrides_with = "no_pause")]
    pause: bool,

    /// Generate everything without stopping
    #[arg(long, overrides_with = "pause")]
    no_pause: bool,

    /// Wait this many milliseconds after each generated audio instead of prompting
    #[arg(long, value_name = "MS", conflicts_with = "no_pause")]
    pause_delay_ms: Option<u64>,

    /// Folder holding one subfolder per tenant
    #[arg(long, env = "AUDIOGUIDE_TENANTS_ROOT", default_value = DEFAULT_TENANTS_ROOT)]
    tenants_root: PathBuf,

    /// Path to the generate-tts executable
    #[arg(long, env = "AUDIOGUIDE_TTS_CLIENT")]
    client: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> BatchConfig {
        let pause = if self.no_pause && !self.pause {
            PauseMode::Off
        } else if let Some(ms) = self.pause_delay_ms {
            PauseMode::Delay(Duration::from_millis(ms))
        } else {
            PauseMode::Prompt
        };

        BatchConfig {
            tenants_root: self.tenants_root,
            tenant: self.tenant,
            language: self.lang,
            mode: self.mode,
            pause,
            client_executable: self.client,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Before parsing so `.env` can feed the env-backed flags
    dotenvy::dotenv().ok();

    let args = match parse_args::<Args>() {
        Ok(args) => args,
        Err(code) => return code,
    };

    init_logging(&LogFormat::from_env());

    match run(args.into_config()).await {
        Ok(generated) => {
            println!("Audio files generated: {}", generated);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "Bulk generation aborted");
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code())
        }
    }
}

async fn run(config: BatchConfig) -> AppResult<usize> {
    let runner = ChildProcessRunner::locate(config.client_executable.clone())?;
    tracing::info!(client = %runner.program().display(), "Synthesis client located");

    let pacer: Arc<dyn Pacer> = match config.pause {
        PauseMode::Prompt => Arc::new(InteractivePrompt::stdio()),
        PauseMode::Delay(delay) => Arc::new(FixedDelay::new(delay)),
        PauseMode::Off => Arc::new(NoPause),
    };

    let orchestrator = BatchOrchestrator::new(&config, Arc::new(runner), pacer)?;
    let summary = orchestrator.run().await?;

    Ok(summary.generated())
}
