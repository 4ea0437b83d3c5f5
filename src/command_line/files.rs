use {
    std::path::{Path, PathBuf},
    walkdir::WalkDir,
};

/// The extension of instance exports picked up when walking a directory
pub const EXTENSION: &str = "xml";

/// Expand the given paths into instance files, walking directories in file name order
///
/// Files named explicitly are kept regardless of their extension.
pub fn collect(paths: impl IntoIterator<Item = PathBuf>) -> Result<Vec<PathBuf>, walkdir::Error> {
    let mut result = Vec::new();

    for path in paths {
        if !path.is_dir() {
            result.push(path);
            continue;
        }

        for entry in WalkDir::new(path).sort_by_file_name() {
            let entry = entry?;
            if entry.file_type().is_file() && has_extension(entry.path()) {
                result.push(entry.into_path());
            }
        }
    }

    Ok(result)
}

fn has_extension(path: &Path) -> bool {
    path.extension().and_then(|extension| extension.to_str()) == Some(EXTENSION)
}
