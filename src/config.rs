use crate::error::ConcatError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Parameters for a single concat operation.
///
/// Exactly one of `files` or `directory` selects the inputs. The value is
/// built once by the caller and only borrowed by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConcatParams {
    pub output_file: Option<PathBuf>,
    pub files: Option<Vec<PathBuf>>,
    pub directory: Option<PathBuf>,
    pub starting_file: Option<PathBuf>,
    pub append_newline: bool,
    pub delete_target_file: bool,
}

impl ConcatParams {
    pub fn new(output_file: impl Into<PathBuf>) -> Self {
        Self {
            output_file: Some(output_file.into()),
            ..Self::default()
        }
    }

    pub fn with_files<I, P>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.files = Some(files.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    pub fn with_starting_file(mut self, starting_file: impl Into<PathBuf>) -> Self {
        self.starting_file = Some(starting_file.into());
        self
    }

    pub fn append_newline(mut self, enabled: bool) -> Self {
        self.append_newline = enabled;
        self
    }

    pub fn delete_target_file(mut self, enabled: bool) -> Self {
        self.delete_target_file = enabled;
        self
    }

    /// An empty file list counts as unset.
    pub fn explicit_files(&self) -> Option<&[PathBuf]> {
        self.files.as_deref().filter(|files| !files.is_empty())
    }

    pub fn output_path(&self) -> Option<&Path> {
        self.output_file
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }
}

/// On-disk form of [`ConcatParams`], read from a TOML file.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    output_file: Option<PathBuf>,
    concat_files: Option<Vec<PathBuf>>,
    directory: Option<PathBuf>,
    starting_file: Option<PathBuf>,
    #[serde(default)]
    append_newline: bool,
    #[serde(default)]
    delete_target_file: bool,
}

/// Loads parameters from a TOML file. Relative paths resolve against the
/// directory holding the file.
pub fn load_params(path: &Path) -> Result<ConcatParams, ConcatError> {
    let content = fs::read_to_string(path).map_err(|e| ConcatError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let base = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    parse_params(&content, &base).map_err(|message| ConcatError::Config {
        path: path.to_path_buf(),
        message,
    })
}

fn parse_params(content: &str, base: &Path) -> Result<ConcatParams, String> {
    let parsed: ConfigFile = toml::from_str(content).map_err(|e| e.to_string())?;
    let resolve = |p: PathBuf| resolve_against(base, p);

    Ok(ConcatParams {
        output_file: parsed.output_file.map(resolve),
        files: parsed
            .concat_files
            .map(|files| files.into_iter().map(resolve).collect()),
        directory: parsed.directory.map(resolve),
        starting_file: parsed.starting_file.map(resolve),
        append_newline: parsed.append_newline,
        delete_target_file: parsed.delete_target_file,
    })
}

fn resolve_against(base: &Path, path: PathBuf) -> PathBuf {
    if path.as_os_str().is_empty() || path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parses_and_resolves_relative_paths() {
        let base = Path::new("/project");
        let params = parse_params(
            r#"
            output_file = "target/out.txt"
            concat_files = ["a.input", "/abs/b.input"]
            append_newline = true
            "#,
            base,
        )
        .unwrap();

        assert_eq!(params.output_file, Some(base.join("target/out.txt")));
        assert_eq!(
            params.files,
            Some(vec![base.join("a.input"), PathBuf::from("/abs/b.input")])
        );
        assert!(params.append_newline);
        assert!(!params.delete_target_file);
        assert_eq!(params.directory, None);
    }

    #[test]
    fn blank_output_stays_blank() {
        let params = parse_params("output_file = \"\"\ndirectory = \"in\"", Path::new("/p")).unwrap();
        assert_eq!(params.output_path(), None);
        assert_eq!(params.directory, Some(PathBuf::from("/p/in")));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = parse_params("output = \"x\"", Path::new(".")).unwrap_err();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn load_params_reports_config_errors_with_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("concat.toml");
        fs::write(&path, "append_newline = \"yes\"").unwrap();

        let err = load_params(&path).unwrap_err();
        match err {
            ConcatError::Config { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn load_params_missing_file_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = load_params(&path).unwrap_err();
        match err {
            ConcatError::Config { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn empty_file_list_counts_as_unset() {
        let params = ConcatParams::new("out").with_files(Vec::<PathBuf>::new());
        assert!(params.explicit_files().is_none());
    }
}
