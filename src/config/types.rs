use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Directory receiving movie `.strm` files
    #[serde(default)]
    pub movies_directory: PathBuf,

    /// Directory receiving TV show `.strm` files
    #[serde(default)]
    pub tv_shows_directory: PathBuf,

    /// URL of the M3U playlist to mirror
    #[serde(default)]
    pub m3u_url: String,

    #[serde(default)]
    pub task: TaskConfig,

    #[serde(default)]
    pub playlist: PlaylistConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TaskConfig {
    /// Program to launch for playlist processing (default: this executable)
    #[serde(default)]
    pub command: Option<PathBuf>,

    /// Arguments placed before the generated directory and URL arguments
    #[serde(default = "default_task_args")]
    pub args: Vec<String>,

    /// Abort the task after this many seconds (default: no limit)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_task_args() -> Vec<String> {
    vec!["sync".to_string()]
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self {
            command: None,
            args: default_task_args(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaylistConfig {
    /// Where the downloaded playlist is cached between runs
    #[serde(default = "default_cache_path")]
    pub cache_path: PathBuf,

    /// Reuse the cached playlist if it is younger than this (default: 24)
    #[serde(default = "default_max_age_hours")]
    pub max_age_hours: u64,

    /// User-Agent header sent to the playlist server
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_cache_path() -> PathBuf {
    PathBuf::from("m3u.cache")
}

fn default_max_age_hours() -> u64 {
    24
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/85.0.4183.121 Safari/537.3"
        .to_string()
}

impl Default for PlaylistConfig {
    fn default() -> Self {
        Self {
            cache_path: default_cache_path(),
            max_age_hours: default_max_age_hours(),
            user_agent: default_user_agent(),
        }
    }
}
