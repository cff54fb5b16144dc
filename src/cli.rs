use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "strmforged")]
#[command(author, version, about = "M3U playlist to .strm library automation tool")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the playlist processing task and wait for it
    Run {
        /// Show the command line without executing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Mirror an M3U playlist into .strm library directories
    Sync {
        /// Directory receiving movie .strm files
        #[arg(long = "moviesDirectory", value_name = "PATH")]
        movies_directory: PathBuf,

        /// Directory receiving TV show .strm files
        #[arg(long = "tvShowsDirectory", value_name = "PATH")]
        tv_shows_directory: PathBuf,

        /// Playlist URL, percent-encoded
        #[arg(long = "m3uUrl", value_name = "URL")]
        m3u_url: String,
    },

    /// Check that the configured task command can be executed
    CheckTask,

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
