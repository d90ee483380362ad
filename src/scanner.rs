use crate::config::ConcatParams;
use crate::error::ConcatError;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Builds the ordered list of inputs to concatenate.
///
/// Expects parameters that already passed validation. In directory mode the
/// starting file goes first and is not deduplicated against the listing.
/// The output file is never picked up from the directory listing.
pub fn resolve_input_files(params: &ConcatParams) -> Result<Vec<PathBuf>, ConcatError> {
    if let Some(files) = params.explicit_files() {
        return Ok(files.to_vec());
    }

    let mut resolved = Vec::new();
    if let Some(start) = &params.starting_file {
        resolved.push(start.clone());
    }
    if let Some(dir) = &params.directory {
        let output = params.output_path().unwrap_or_else(|| Path::new(""));
        collect_shallow(dir, output, &mut resolved)?;
    }

    log::debug!("Resolved {} input file(s)", resolved.len());
    Ok(resolved)
}

fn collect_shallow(input: &Path, output: &Path, acc: &mut Vec<PathBuf>) -> Result<(), ConcatError> {
    let output = canonical_or_self(output);
    let walker = WalkDir::new(input)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|e| walk_error(input, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if canonical_or_self(path) == output {
            log::debug!("Skipping output file {} in input directory", path.display());
            continue;
        }
        acc.push(path.to_path_buf());
    }
    Ok(())
}

fn canonical_or_self(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

fn walk_error(input: &Path, err: walkdir::Error) -> ConcatError {
    let path = err.path().unwrap_or(input).to_path_buf();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "filesystem loop"));
    ConcatError::io(path, source)
}
