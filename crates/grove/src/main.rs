//! Runs one survey exchange against an OpenAI-compatible service and
//! prints the transcript.

use std::env;
use std::process::ExitCode;
use std::time::Duration;

use grove::FieldAssistant;
use grove_core::Outcome;
use grove_core::transcript::Role;
use grove_openai_model::{OpenAIConfigBuilder, OpenAIProvider};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

const BAR_CHAR: &str = "▎";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // The key is read here, at the outermost layer, and handed to the
    // provider config explicitly.
    let Ok(api_key) = env::var("OPENAI_API_KEY") else {
        eprintln!("OPENAI_API_KEY environment variable is not set");
        return ExitCode::FAILURE;
    };
    let mut config = OpenAIConfigBuilder::with_api_key(api_key);
    if let Ok(base_url) = env::var("OPENAI_BASE_URL") {
        config = config.with_base_url(base_url);
    }
    if let Ok(model) = env::var("OPENAI_MODEL") {
        config = config.with_model(model);
    }
    let provider = OpenAIProvider::new(config.build());

    let survey = match env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(survey) => survey,
            Err(err) => {
                eprintln!("failed to read {path}: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => include_str!("./sample_report.md").to_owned(),
    };

    let assistant = FieldAssistant::with_model_provider(provider);

    let progress_style = ProgressStyle::with_template("{spinner} {wide_msg}")
        .unwrap()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
    let progress_bar = ProgressBar::new_spinner();
    progress_bar.set_style(progress_style);
    progress_bar.set_message("🌴 Planning...");
    progress_bar.enable_steady_tick(Duration::from_millis(100));

    let report = assistant.plan(&survey).await;
    progress_bar.finish_and_clear();

    let report = match report {
        Ok(report) => report,
        Err(err) => {
            eprintln!("{} {err}", "remote service error:".bright_red());
            return ExitCode::FAILURE;
        }
    };

    for entry in report.transcript().entries() {
        match entry.role() {
            Role::Assistant if !entry.text().is_empty() => {
                println!(
                    "{}🤖 {}",
                    BAR_CHAR.bright_cyan(),
                    entry.text().bright_white()
                );
            }
            Role::ToolResult => {
                println!("{}🔧 {}", BAR_CHAR.bright_yellow(), entry.text());
            }
            _ => {}
        }
    }

    if let Outcome::Unresolved(err) = report.outcome() {
        eprintln!(
            "{}⚠️  exchange left unresolved: {err}",
            BAR_CHAR.bright_yellow()
        );
    }

    ExitCode::SUCCESS
}
