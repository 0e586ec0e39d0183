//! Configuration module for Sitemap-Ripple
//!
//! Generation options come from layered sources: built-in defaults, environment
//! variables, an optional TOML file and `key=value` tokens, in increasing order of
//! precedence. The merged result is validated before any crawling starts.
//!
//! # Example
//!
//! ```no_run
//! use sitemap_ripple::config::{load_options, OptionSources};
//!
//! let options = load_options(&OptionSources::default()).unwrap();
//! println!("Crawler will use max depth: {}", options.max_depth);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    default_user_agent, FileOptions, GenerateOptions, DEFAULT_BASE_URL, DEFAULT_MAX_DEPTH,
    DEFAULT_OUT_DIR, DEFAULT_TIMEOUT_SECS,
};

// Re-export parser functions
pub use parser::{
    apply_env, apply_overrides, load_config_file, load_options, split_paths, OptionSources,
};
pub use validation::validate;
