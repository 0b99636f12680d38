use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};

use crate::rule::Rule;
use crate::walker::{source_files, GO_SUFFIX};

/// Applies `rule` to every line of the file at `path` and rewrites the
/// file in place when at least one line changed. Returns whether the
/// file was rewritten. An untouched file keeps its bytes and timestamp.
pub fn patch_file(path: &Path, rule: &Rule) -> Result<bool> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {:?}", path))?;

    let mut changed = false;
    let mut lines: Vec<String> = Vec::new();
    for line in content.split_inclusive('\n') {
        let patched = rule.apply(line);
        if patched != line {
            changed = true;
        }
        lines.push(patched.into_owned());
    }

    if !changed {
        return Ok(false);
    }

    info!("Patching {}", path.display());
    fs::write(path, lines.concat())
        .with_context(|| format!("Failed to write file: {:?}", path))?;
    Ok(true)
}

/// Walks the tree under `root` and patches matching files one at a
/// time. Stops at the first traversal or I/O error; files already
/// rewritten stay rewritten. Returns the number of files rewritten.
pub fn patch_tree(root: &Path, rule: &Rule) -> Result<usize> {
    debug!("Scanning {:?} for files ending in {}", root, GO_SUFFIX);

    let mut patched = 0;
    for entry in source_files(root, GO_SUFFIX) {
        let path =
            entry.with_context(|| format!("Failed to walk directory tree under {:?}", root))?;
        if patch_file(&path, rule)? {
            patched += 1;
        }
    }
    Ok(patched)
}
