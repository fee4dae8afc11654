//! CV screener: match CVs against job descriptions and shortlist candidates

use clap::Parser;
use cv_screener::cli::{self, Cli, Commands, ConfigAction};
use cv_screener::config::{Config, OutputFormat};
use cv_screener::error::{Result, ScreenerError};
use cv_screener::input::job_source::JobCatalog;
use cv_screener::llm::client::{LanguageModel, OllamaClient};
use cv_screener::output::formatter::{save_report_to_file, ReportGenerator};
use cv_screener::output::interview::save_to_outbox;
use cv_screener::output::report::export_report;
use cv_screener::processing::pipeline::{Screener, ScreeningRequest};
use log::{error, info, warn};
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config_path = cli::config_file(cli.config.as_ref());
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration from {}: {}", config_path.display(), e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config, config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: PathBuf) -> Result<()> {
    match command {
        Commands::Screen {
            jobs,
            cvs,
            titles,
            threshold,
            model,
            report,
            output,
            save,
            outbox,
            no_schedule,
            detailed,
        } => {
            info!("Starting CV screening");

            let output_format = cli::parse_output_format(&output).map_err(ScreenerError::InvalidInput)?;
            let jobs_csv = cli::resolve_path(jobs, config.screening.jobs_csv.as_ref(), "job description CSV")
                .map_err(ScreenerError::Configuration)?;
            let cv_dir = cli::resolve_path(cvs, config.screening.cv_dir.as_ref(), "CV folder")
                .map_err(ScreenerError::Configuration)?;
            let mut client = OllamaClient::new(&config.model)?;
            if let Some(model) = model {
                client = client.with_model(model);
            }

            let request = ScreeningRequest {
                jobs_csv,
                cv_dir,
                titles,
                threshold: threshold.unwrap_or(config.screening.threshold),
            };
            let console = output_format == OutputFormat::Console;

            if console {
                println!("🚀 CV screening");
                println!("💼 Job Descriptions: {}", request.jobs_csv.display());
                println!("📂 CV Folder: {}", request.cv_dir.display());
                if request.titles.is_empty() {
                    println!("📋 Job Titles: all");
                } else {
                    println!("📋 Job Titles: {}", request.titles.join(", "));
                }
                println!("🎯 Threshold: {}%", request.threshold);
                println!("🤖 Model: {} @ {}", client.model_id(), client.chat_url());
                if no_schedule {
                    println!("⚠️  Interview scheduling disabled");
                }
                println!("\n📄 Extracting candidate details from CVs...");
            }

            let mut screener = Screener::new(client, &config).with_progress(console);
            if no_schedule {
                screener = screener.without_scheduling();
            }

            let screening_report = screener.run(&request).await?;

            let detailed = detailed || config.output.detailed;
            let generator = ReportGenerator::new(config.output.color_output, detailed);
            println!("{}", generator.generate(&screening_report, output_format)?);

            if let Some(save_path) = &save {
                let content = ReportGenerator::new(false, detailed).generate(&screening_report, output_format)?;
                save_report_to_file(&content, save_path)?;
                if console {
                    println!("💾 Output saved to {}", save_path.display());
                }
            }

            if let Some(outbox) = &outbox {
                let mut saved = 0;
                for interview_request in screening_report.all_interview_requests() {
                    match save_to_outbox(outbox, interview_request) {
                        Ok(_) => saved += 1,
                        Err(e) => warn!(
                            "Could not save interview request for {}: {}",
                            interview_request.cv_filename, e
                        ),
                    }
                }
                if console {
                    println!("📨 {} interview request(s) written to {}", saved, outbox.display());
                }
            }

            if let Some(report_path) = report {
                let destination = cli::report_destination(&report_path);
                export_report(&destination, screening_report.all_results())?;
                if console {
                    println!("💾 Report exported to {}", destination.display());
                }
            }

            if console {
                println!("\n✅ Screening completed in {}ms", screening_report.processing_time_ms);
            }
        }

        Commands::Titles { jobs } => {
            let jobs_csv = cli::resolve_path(jobs, config.screening.jobs_csv.as_ref(), "job description CSV")
                .map_err(ScreenerError::Configuration)?;
            let catalog = JobCatalog::load(&jobs_csv)?;

            println!("📋 Job titles in {}\n", jobs_csv.display());
            let titles = catalog.titles();
            if titles.is_empty() {
                println!("No job titles found");
            }
            for title in titles {
                println!("  • {}", title);
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Model: {} @ {}", config.model.name, config.model.endpoint);
                println!("Request Timeout: {}s", config.model.timeout_secs);
                println!("\nScreening:");
                println!("  Threshold: {}%", config.screening.threshold);
                println!("  CV Extensions: {}", config.screening.cv_extensions.join(", "));
                if let Some(jobs_csv) = &config.screening.jobs_csv {
                    println!("  Jobs CSV: {}", jobs_csv.display());
                }
                if let Some(cv_dir) = &config.screening.cv_dir {
                    println!("  CV Folder: {}", cv_dir.display());
                }
                println!("\nScheduling:");
                println!("  Company: {}", config.scheduling.company_name);
                println!("  Format: {}", config.scheduling.interview_format);
                println!("  Dates: {}", config.scheduling.potential_dates.join(", "));
                println!("  Times: {}", config.scheduling.potential_times.join(", "));
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save_to(&config_path)?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }
        },
    }

    Ok(())
}
