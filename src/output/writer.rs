//! Output file persistence

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the sitemap inside the output directory
pub const SITEMAP_FILE: &str = "sitemap.xml";

/// File name of the robots policy inside the output directory
pub const ROBOTS_FILE: &str = "robots.txt";

/// Errors that can occur while writing output files
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Locations of the written files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub sitemap: PathBuf,
    pub robots: PathBuf,
}

/// Writes `sitemap.xml` and then `robots.txt` into `out_dir`
///
/// The directory is created if missing. The two writes are independent: a failure
/// on the second leaves the first in place.
pub fn write_outputs(out_dir: &Path, sitemap: &str, robots: &str) -> OutputResult<OutputPaths> {
    fs::create_dir_all(out_dir).map_err(|source| OutputError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let sitemap_path = out_dir.join(SITEMAP_FILE);
    write_file(&sitemap_path, sitemap)?;

    let robots_path = out_dir.join(ROBOTS_FILE);
    write_file(&robots_path, robots)?;

    Ok(OutputPaths {
        sitemap: sitemap_path,
        robots: robots_path,
    })
}

fn write_file(path: &Path, content: &str) -> OutputResult<()> {
    let to_error = |source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(to_error)?;
    file.write_all(content.as_bytes()).map_err(to_error)?;

    Ok(())
}
