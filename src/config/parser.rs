use crate::config::types::{FileOptions, GenerateOptions};
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::{Path, PathBuf};

/// Where generation options are read from
///
/// Sources are layered in this order, each one overriding the previous:
/// built-in defaults, environment variables, TOML file, `key=value` tokens.
#[derive(Debug, Clone, Default)]
pub struct OptionSources {
    /// Read `BASE_URL`, `OUT_DIR`, `MAX_DEPTH` and `DISALLOW_PATHS`
    pub use_env: bool,

    /// Optional TOML file with kebab-case keys
    pub config_file: Option<PathBuf>,

    /// `key=value` tokens from the command line
    pub overrides: Vec<String>,
}

/// Resolves and validates the options described by `sources`
///
/// # Example
///
/// ```no_run
/// use sitemap_ripple::config::{load_options, OptionSources};
///
/// let sources = OptionSources {
///     overrides: vec!["maxDepth=2".to_string()],
///     ..Default::default()
/// };
/// let options = load_options(&sources).unwrap();
/// assert_eq!(options.max_depth, 2);
/// ```
pub fn load_options(sources: &OptionSources) -> Result<GenerateOptions, ConfigError> {
    let mut options = GenerateOptions::default();

    if sources.use_env {
        apply_env(&mut options, |key| std::env::var(key).ok())?;
    }

    if let Some(path) = &sources.config_file {
        load_config_file(path)?.apply_to(&mut options);
    }

    apply_overrides(&mut options, &sources.overrides)?;

    validate(&options)?;

    Ok(options)
}

/// Loads and parses a TOML options file
pub fn load_config_file(path: &Path) -> Result<FileOptions, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let file: FileOptions = toml::from_str(&content)?;
    Ok(file)
}

/// Applies the environment variable layer
///
/// `lookup` returns the value of a variable, or `None` when unset. Empty values are
/// treated as unset.
pub fn apply_env<F>(options: &mut GenerateOptions, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

    if let Some(base_url) = get("BASE_URL") {
        options.base_url = base_url;
    }
    if let Some(out_dir) = get("OUT_DIR") {
        options.out_dir = out_dir;
    }
    if let Some(max_depth) = get("MAX_DEPTH") {
        options.max_depth = parse_number("MAX_DEPTH", &max_depth)?;
    }
    if let Some(paths) = get("DISALLOW_PATHS") {
        options.disallow_paths = split_paths(&paths);
    }

    Ok(())
}

/// Applies `key=value` tokens in order; later tokens win
///
/// Only the first `=` separates key from value, so values such as URLs with query
/// strings survive intact.
pub fn apply_overrides(options: &mut GenerateOptions, tokens: &[String]) -> Result<(), ConfigError> {
    for token in tokens {
        let (key, value) = token
            .split_once('=')
            .ok_or_else(|| ConfigError::MalformedOption(token.clone()))?;

        match key {
            "baseUrl" => options.base_url = value.to_string(),
            "outDir" | "outputDirectory" => options.out_dir = value.to_string(),
            "maxDepth" => options.max_depth = parse_number(key, value)?,
            "disallowPaths" => options.disallow_paths = split_paths(value),
            "timeoutSecs" => options.timeout_secs = parse_number(key, value)?,
            "userAgent" => options.user_agent = value.to_string(),
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
    }

    Ok(())
}

/// Splits a comma-separated path list, dropping empty entries
pub fn split_paths(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter(|path| !path.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}
