use serde::Deserialize;

/// Base URL used when no option source provides one
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Output directory used when no option source provides one
pub const DEFAULT_OUT_DIR: &str = "public";

/// Crawl depth used when no option source provides one
pub const DEFAULT_MAX_DEPTH: u32 = 5;

/// Per-request fetch timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Options for one sitemap generation run
///
/// Built once from the option sources, validated, and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// URL the crawl starts from; also the same-origin prefix
    pub base_url: String,

    /// Directory receiving `sitemap.xml` and `robots.txt`
    pub out_dir: String,

    /// Deepest link level that is still fetched (the base URL is depth 0)
    pub max_depth: u32,

    /// Paths emitted as `Disallow:` lines in robots.txt
    pub disallow_paths: Vec<String>,

    /// Per-request fetch timeout in seconds
    pub timeout_secs: u64,

    /// User-Agent header sent with every fetch
    pub user_agent: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            out_dir: DEFAULT_OUT_DIR.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
            disallow_paths: Vec::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
        }
    }
}

/// Returns the User-Agent string used when none is configured
pub fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Options as they appear in a TOML file; every key is optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileOptions {
    #[serde(rename = "base-url")]
    pub base_url: Option<String>,

    #[serde(rename = "out-dir")]
    pub out_dir: Option<String>,

    #[serde(rename = "max-depth")]
    pub max_depth: Option<u32>,

    #[serde(rename = "disallow-paths")]
    pub disallow_paths: Option<Vec<String>>,

    #[serde(rename = "timeout-secs")]
    pub timeout_secs: Option<u64>,

    #[serde(rename = "user-agent")]
    pub user_agent: Option<String>,
}

impl FileOptions {
    /// Overwrites every field of `options` that this file sets
    pub fn apply_to(self, options: &mut GenerateOptions) {
        if let Some(base_url) = self.base_url {
            options.base_url = base_url;
        }
        if let Some(out_dir) = self.out_dir {
            options.out_dir = out_dir;
        }
        if let Some(max_depth) = self.max_depth {
            options.max_depth = max_depth;
        }
        if let Some(disallow_paths) = self.disallow_paths {
            options.disallow_paths = disallow_paths;
        }
        if let Some(timeout_secs) = self.timeout_secs {
            options.timeout_secs = timeout_secs;
        }
        if let Some(user_agent) = self.user_agent {
            options.user_agent = user_agent;
        }
    }
}
