//! job-compare: side-by-side job listing comparison

use anyhow::{Context, Result};
use clap::Parser;
use job_compare::cli::{self, Cli, Commands, ConfigAction};
use job_compare::config::Config;
use job_compare::input::JobLoader;
use job_compare::output::formatter::{resolve_report_path, save_report_to_file, ReportGenerator};
use job_compare::output::ComparisonReport;
use job_compare::scoring::{best_match_index, calculate_job_score, Dimension, JobScorer};
use job_compare::{Job, JobCompareError};
use log::{error, info};
use std::path::Path;
use std::process;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config) {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> job_compare::Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn load_jobs(path: &Path) -> Result<Vec<Job>> {
    cli::validate_file_extension(path, &["json", "toml"])
        .map_err(|e| JobCompareError::InvalidInput(format!("Job list: {}", e)))?;

    JobLoader::new()
        .load(path)
        .with_context(|| format!("Failed to load jobs from {}", path.display()))
}

fn run_command(command: Commands, config: Config) -> Result<()> {
    let scorer = JobScorer::from_config(&config.scoring);

    match command {
        Commands::Compare {
            jobs,
            output,
            save,
            detailed,
            no_color,
        } => {
            info!("Starting job comparison");

            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(JobCompareError::InvalidInput)?,
                None => config.output.format,
            };

            let job_list = load_jobs(&jobs)?;
            if job_list.len() < 2 {
                info!("Fewer than two jobs: no leaderboard or best match");
            }

            let report = ComparisonReport::build(&job_list, &scorer)
                .with_source_file(jobs.to_string_lossy().to_string());

            let mut output_config = config.output.clone();
            output_config.color_output &= !no_color && save.is_none();
            output_config.detailed |= detailed;
            let generator = ReportGenerator::from_config(&output_config);
            let rendered = generator.generate_report(&report, output_format)?;

            match save {
                Some(save) => {
                    let path = resolve_report_path(&save, output_format, &jobs.to_string_lossy());
                    save_report_to_file(&rendered, &path)
                        .with_context(|| format!("Failed to save report to {}", path.display()))?;
                    println!("✅ Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Score { jobs } => {
            let job_list = load_jobs(&jobs)?;

            println!("📋 Scores for {} jobs\n", job_list.len());
            for (index, job) in job_list.iter().enumerate() {
                let result = scorer.calculate_match_score(job);
                let badge = calculate_job_score(job);

                println!("{}. {} - match {}% (badge score {})", index + 1, job, result.total, badge.score);
                for entry in &result.breakdown {
                    println!("   {} {:<8} {:>3}", entry.icon, entry.label, entry.score);
                }
                if !badge.reasons.is_empty() {
                    let reasons: Vec<String> = badge.reasons.iter().map(|r| r.to_string()).collect();
                    println!("   Reasons: {}", reasons.join(", "));
                }
                println!();
            }
        }

        Commands::Best { jobs } => {
            let job_list = load_jobs(&jobs)?;

            match best_match_index(&job_list) {
                Some(index) => {
                    let job = &job_list[index];
                    let badge = calculate_job_score(job);
                    println!("⭐ Best match: #{} {} (score {})", index + 1, job, badge.score);
                    for reason in &badge.reasons {
                        println!("  • {}", reason);
                    }
                }
                None => println!("⚠️  Need at least two jobs to pick a best match"),
            }
        }

        Commands::Sectors => {
            println!("📚 Sector Scores\n");
            println!("{:<16} {:>7} {:>7} {:>8}", "Sector", "Growth", "Demand", "Balance");

            let mut sectors: Vec<&str> = scorer
                .growth_table()
                .iter()
                .chain(scorer.demand_table().iter())
                .chain(scorer.balance_table().iter())
                .map(|(sector, _)| sector)
                .collect();
            sectors.sort_unstable();
            sectors.dedup();

            for sector in sectors {
                println!(
                    "{:<16} {:>7} {:>7} {:>8}",
                    sector,
                    scorer.growth_table().score(sector),
                    scorer.demand_table().score(sector),
                    scorer.balance_table().score(sector)
                );
            }
            println!(
                "{:<16} {:>7} {:>7} {:>8}",
                "(other)",
                scorer.growth_table().default_score(),
                scorer.demand_table().default_score(),
                scorer.balance_table().default_score()
            );
            println!("\nHot listings add {} to growth and demand.", scorer.hot_bonus());
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Scoring Weights:");
                for dimension in Dimension::ALL {
                    println!("  {}: {:.1}%", dimension.label(), config.scoring.weights.get(dimension) * 100.0);
                }
                println!("Hot bonus: {}", config.scoring.hot_bonus);
                println!("Default sector score: {}", config.scoring.default_sector_score);
                println!("\nOutput:");
                println!("  Format: {:?}", config.output.format);
                println!("  Detailed: {}", config.output.detailed);
                println!("  Colors: {}", config.output.color_output);
            }

            Some(ConfigAction::Path) => {
                println!("{}", Config::config_path().display());
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}
