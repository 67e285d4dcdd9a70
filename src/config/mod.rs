//! Configuration management for dirward.
//!
//! Configuration is stored in TOML format. The search order is:
//! 1. `./dirward.toml` (project-local)
//! 2. `~/.config/dirward/config.toml` (XDG config)
//!
//! # Example Configuration
//!
//! ```toml
//! search_roots = ["/home/user", "/mnt/shared"]
//!
//! [resolver]
//! max_depth = 4
//! score_threshold = 60
//! limit = 10
//!
//! [logging]
//! level = "info"
//! log_to_file = true
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use dirward::config;
//!
//! // Load from the default search paths
//! let config = config::load()?;
//!
//! // Load from a specific path
//! let config = config::from_path(Path::new("/etc/dirward/config.toml"))?;
//! ```

mod file;
mod types;

pub use file::{from_path, from_str, load, search_paths, xdg_config_dir, ConfigError};
pub use types::DirwardConfig;
