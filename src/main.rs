mod cli;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use strmforged::{config, sync, task};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "strmforged=trace".to_string()
        } else {
            "strmforged=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    match cli.command {
        Commands::Run { dry_run } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(run_task(cli.config.as_deref(), dry_run))
        }
        Commands::Sync {
            movies_directory,
            tv_shows_directory,
            m3u_url,
        } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(run_sync(
                cli.config.as_deref(),
                movies_directory,
                tv_shows_directory,
                &m3u_url,
            ))
        }
        Commands::CheckTask => check_task(cli.config.as_deref()),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("strmforged {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

async fn run_task(config_path: Option<&Path>, dry_run: bool) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let command = task::TaskCommand::from_config(&config)?;

    if dry_run {
        println!("{}", command.command_line());
        return Ok(());
    }

    // The outcome is reported exactly once, so failures exit here instead
    // of bubbling up for a second print.
    match command.spawn().wait().await {
        Ok(_) => {
            tracing::info!("Task executed successfully");
            Ok(())
        }
        Err(err) => {
            tracing::error!("Task failed: {}", err);
            std::process::exit(err.exit_code().unwrap_or(1));
        }
    }
}

async fn run_sync(
    config_path: Option<&Path>,
    movies_directory: PathBuf,
    tv_shows_directory: PathBuf,
    m3u_url: &str,
) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;

    // The URL arrives percent-encoded on the command line.
    let m3u_url = urlencoding::decode(m3u_url)
        .context("--m3uUrl is not valid percent-encoding")?
        .into_owned();

    let options = sync::SyncOptions {
        movies_directory,
        tv_shows_directory,
        m3u_url,
    };
    let report = sync::run(&options, &config.playlist).await?;

    println!("Sync complete in {:.1?}", report.elapsed);
    println!("  Movies: {} ({} new)", report.movies, report.new_movies);
    println!(
        "  TV episodes: {} ({} new)",
        report.episodes, report.new_episodes
    );
    println!("  Skipped entries: {}", report.skipped);
    println!("  Pruned files: {}", report.pruned);

    Ok(())
}

fn check_task(config_path: Option<&Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;

    println!("Checking task command...\n");

    match task::resolve_program(&config.task) {
        Ok(path) => {
            println!("✓ {}", path.display());
            if !config.task.args.is_empty() {
                println!("  Leading arguments: {}", config.task.args.join(" "));
            }
            println!("\nThe task command is ready to run.");
        }
        Err(e) => {
            println!("✗ {}", e);
            println!("\nFix task.command in the config to enable the run command.");
        }
    }

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Movies directory: {:?}", config.movies_directory);
            println!("  TV shows directory: {:?}", config.tv_shows_directory);
            println!(
                "  Playlist URL: {}",
                if config.m3u_url.is_empty() {
                    "(unset)"
                } else {
                    config.m3u_url.as_str()
                }
            );
            match &config.task.command {
                Some(command) => println!("  Task command: {:?}", command),
                None => println!("  Task command: (this executable)"),
            }
            println!(
                "  Playlist cache: {:?} (max age {}h)",
                config.playlist.cache_path, config.playlist.max_age_hours
            );
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default config:");
            println!("  Task command: (this executable)");
            println!(
                "  Playlist cache: {:?} (max age {}h)",
                config.playlist.cache_path, config.playlist.max_age_hours
            );
        }
    }

    Ok(())
}
