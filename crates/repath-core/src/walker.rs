use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Files the patcher operates on.
pub const GO_SUFFIX: &str = ".go";

/// Lazily yields every regular file under `root` whose name ends with
/// `suffix`, at any depth. Directory read failures come through as `Err`
/// items so the caller decides whether to abort.
pub fn source_files<'a>(
    root: &Path,
    suffix: &'a str,
) -> impl Iterator<Item = Result<PathBuf, walkdir::Error>> + 'a {
    WalkDir::new(root)
        .into_iter()
        .filter_map(move |entry| match entry {
            Ok(entry) => {
                if entry.file_type().is_file()
                    && entry.file_name().to_string_lossy().ends_with(suffix)
                {
                    Some(Ok(entry.into_path()))
                } else {
                    None
                }
            }
            Err(err) => Some(Err(err)),
        })
}
