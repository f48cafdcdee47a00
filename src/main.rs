//! resume-screener: score resumes against job descriptions

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use resume_screener::cli::{self, Cli, Commands, ConfigAction};
use resume_screener::config::{Config, OutputFormat};
use resume_screener::input::{DocumentReader, InputManager};
use resume_screener::output::formatter::{save_report_to_file, ReportGenerator};
use resume_screener::sink::NullSink;
use resume_screener::{scoring, Result, ResumeAnalyzer, ResumeScreenerError};
use std::path::Path;
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            output,
            save,
            no_store,
            detailed,
        } => {
            warn_on_unknown_extension(&resume);
            warn_on_unknown_extension(&job);
            let format = resolve_format(output.as_deref(), &config)?;

            let analyzer = build_analyzer(&config, no_store);
            info!("Analyzing {} against {}", resume.display(), job.display());
            let result = analyzer.analyze_for_job(&resume, &job).await;

            let generator = ReportGenerator::with_options(
                config.output.color_output && save.is_none(),
                detailed || config.output.detailed,
                true,
                true,
            );
            let report = generator.generate_report(&result, &format)?;
            emit(&report, save.as_deref())?;

            if !result.is_success() {
                return Err(ResumeScreenerError::AnalysisFailed(
                    result.metadata.error.unwrap_or_else(|| "unknown error".to_string()),
                ));
            }
        }

        Commands::Batch {
            job,
            resumes,
            output,
            save,
            no_store,
        } => {
            warn_on_unknown_extension(&job);
            for resume in &resumes {
                warn_on_unknown_extension(resume);
            }
            let format = resolve_format(output.as_deref(), &config)?;

            let analyzer = Arc::new(build_analyzer(&config, no_store));
            let progress = ProgressBar::new(resumes.len() as u64);
            progress.set_style(
                ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                    .map_err(|e| ResumeScreenerError::OutputFormatting(e.to_string()))?
                    .progress_chars("=>-"),
            );

            let results = analyzer
                .analyze_batch_with(&job, &resumes, config.batch.max_concurrency, |result| {
                    progress.set_message(result.metadata.resume_filename.clone());
                    progress.inc(1);
                })
                .await;
            progress.finish_with_message("done");

            let failed = results.iter().filter(|r| !r.is_success()).count();
            info!("Batch complete: {} analyzed, {} failed", results.len() - failed, failed);

            let generator = ReportGenerator::with_options(config.output.color_output && save.is_none(), false, true, true);
            let summary = generator.generate_batch_summary(&results, &format)?;
            emit(&summary, save.as_deref())?;
        }

        Commands::Score { resume, job } => {
            let reader = InputManager::new().with_cache(false);
            let resume_text = reader.read_text(&resume).await?;
            let job_text = reader.read_text(&job).await?;

            let result = scoring::analyze(&resume_text, &job_text);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration ({})\n", config_path.display());
                println!("Text cache: {}", config.input.enable_cache);
                println!("Output format: {:?}", config.output.format);
                println!("Detailed output: {}", config.output.detailed);
                println!("Colors: {}", config.output.color_output);
                println!(
                    "Result storage: {} ({})",
                    if config.storage.enabled { "enabled" } else { "disabled" },
                    config.storage.results_path.display()
                );
                println!("Batch concurrency: {}", config.batch.max_concurrency);
            }

            Some(ConfigAction::Reset) => {
                Config::default().save_to(config_path)?;
                println!("✅ Configuration reset: {}", config_path.display());
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }
        },
    }

    Ok(())
}

fn build_analyzer(config: &Config, no_store: bool) -> ResumeAnalyzer {
    let analyzer = ResumeAnalyzer::from_config(config);
    if no_store {
        analyzer.with_sink(NullSink)
    } else {
        analyzer
    }
}

fn resolve_format(flag: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match flag {
        Some(value) => cli::parse_output_format(value).map_err(ResumeScreenerError::UnsupportedFormat),
        None => Ok(config.output.format),
    }
}

fn warn_on_unknown_extension(path: &Path) {
    if let Err(e) = cli::validate_file_extension(path, cli::KNOWN_EXTENSIONS) {
        warn!("{}: {}; reading it as plain text", path.display(), e);
    }
}

fn emit(content: &str, save: Option<&Path>) -> Result<()> {
    match save {
        Some(path) => {
            save_report_to_file(content, path)?;
            println!("💾 Saved to {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}
