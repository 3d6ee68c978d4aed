//! Input selection and per-file minification

use std::fs;
use std::path::{Path, PathBuf};

use literal_minify::{DocumentMinifier, FragmentMinifier, Options};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::{Error, Result};

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension().is_some_and(|ext| {
        let ext = ext.to_string_lossy();
        extensions.iter().any(|wanted| ext.eq_ignore_ascii_case(wanted))
    })
}

/// Expands `inputs` into the files to minify.
///
/// Files named directly are always kept. Directories are walked and only
/// files with one of `extensions` are picked up, in file name order.
pub fn collect(inputs: &[PathBuf], extensions: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if !input.is_dir() {
            files.push(input.clone());
            continue;
        }
        for entry in WalkDir::new(input).sort_by_file_name() {
            let entry = entry?;
            let path = entry.path();
            if entry.file_type().is_file() && has_extension(path, extensions) {
                files.push(path.to_path_buf());
            } else {
                debug!(path = %path.display(), "skipped");
            }
        }
    }
    Ok(files)
}

/// Reads `path` and minifies it as one document.
pub fn minify_file(path: &Path, options: Options) -> Result<String> {
    let source = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut minifier = DocumentMinifier::new(options);
    let minified = minifier.process_fragment(&source);
    let stats = minifier.stats();
    info!(
        path = %path.display(),
        before = stats.bytes_in,
        after = stats.bytes_out,
        saved = stats.saved(),
        "minified"
    );
    Ok(minified)
}

/// Writes `contents` to `path`, replacing the file.
pub fn write(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
