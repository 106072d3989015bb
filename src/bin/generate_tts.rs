//! Synthesize one text into one MP3 file.
//!
//! ```text
//! generate-tts "Hola mundo" salida.mp3
//! generate-tts --file texto.txt salida.mp3
//! ```

use audioguide_tts::domain::synthesis::{SynthesisInvocation, SynthesisService};
use audioguide_tts::error::AppResult;
use audioguide_tts::infrastructure::cli::parse_args;
use audioguide_tts::infrastructure::config::{LogFormat, SynthesisConfig};
use audioguide_tts::infrastructure::logging::init_logging;
use audioguide_tts::infrastructure::repositories::ElevenLabsTtsRepository;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "generate-tts")]
#[command(about = "Synthesize one text into an MP3 file with ElevenLabs")]
#[command(override_usage = "generate-tts [--file <PATH> | <TEXT>] <DESTINATION>")]
struct Args {
    /// Read the text from this file
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Literal text (omitted with --file) followed by the destination file
    #[arg(value_name = "ARGS", allow_hyphen_values = true)]
    args: Vec<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = match parse_args::<Args>() {
        Ok(args) => args,
        Err(code) => return code,
    };

    dotenvy::dotenv().ok();
    init_logging(&LogFormat::from_env());

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Synthesis failed");
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code())
        }
    }
}

async fn run(args: Args) -> AppResult<()> {
    let invocation = SynthesisInvocation::from_args(args.file, args.args)?;

    // Empty text fails here, before any configuration is read
    let text = invocation.source.load().await?;

    let config = SynthesisConfig::from_env()?;
    let tts_repo = Arc::new(ElevenLabsTtsRepository::new(&config)?);
    let service = SynthesisService::new(tts_repo, &config);

    let report = service
        .synthesize_text(&text, &invocation.destination)
        .await?;

    println!(
        "Audio saved to {} ({:.1} KB)",
        report.destination.display(),
        report.audio_size_bytes as f64 / 1024.0
    );

    Ok(())
}
