use crate::config::ConcatParams;
use crate::error::{ConcatError, ValidationFailure};

/// Rejects invalid or ambiguous parameter sets before anything is written.
#[derive(Debug, Default, Clone, Copy)]
pub struct Validator;

impl Validator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, params: &ConcatParams) -> Result<(), ConcatError> {
        check(params).map_err(|reason| {
            log::debug!("Rejected concat parameters: {}", reason);
            ConcatError::Validation(reason)
        })
    }
}

fn check(params: &ConcatParams) -> Result<(), ValidationFailure> {
    if params.output_path().is_none() {
        return Err(ValidationFailure::OutputFileRequired);
    }

    let files = params.explicit_files();
    match (files, params.directory.as_deref()) {
        (Some(_), Some(_)) => Err(ValidationFailure::CompetingInputModes),
        (None, None) => Err(ValidationFailure::NoInputSpecified),
        (Some(_), None) if params.starting_file.is_some() => {
            Err(ValidationFailure::StartingFileWithoutDirectory)
        }
        (Some(_), None) => Ok(()),
        (None, Some(dir)) if !dir.exists() => {
            Err(ValidationFailure::DirectoryMissing(dir.to_path_buf()))
        }
        (None, Some(dir)) if !dir.is_dir() => {
            Err(ValidationFailure::NotADirectory(dir.to_path_buf()))
        }
        (None, Some(_)) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    fn reason(params: &ConcatParams) -> Option<ValidationFailure> {
        Validator::new()
            .validate(params)
            .err()
            .and_then(|e| e.validation_failure().cloned())
    }

    #[test]
    fn accepts_file_list() {
        let params = ConcatParams::new("out.txt").with_files(["a.input", "b.input"]);
        assert_eq!(reason(&params), None);
    }

    #[test]
    fn accepts_existing_directory_with_starting_file() {
        let dir = tempdir().unwrap();
        let params = ConcatParams::new("out.txt")
            .with_directory(dir.path())
            .with_starting_file("start.input");
        assert_eq!(reason(&params), None);
    }

    #[test]
    fn missing_output_wins_over_everything() {
        let mut params = ConcatParams::default()
            .with_files(["a.input"])
            .with_directory("nowhere");
        assert_eq!(reason(&params), Some(ValidationFailure::OutputFileRequired));

        params.output_file = Some("".into());
        assert_eq!(reason(&params), Some(ValidationFailure::OutputFileRequired));
    }

    #[test]
    fn both_input_modes_compete() {
        let dir = tempdir().unwrap();
        let params = ConcatParams::new("out.txt")
            .with_files(["a.input"])
            .with_directory(dir.path());
        assert_eq!(reason(&params), Some(ValidationFailure::CompetingInputModes));
    }

    #[test]
    fn no_input_is_rejected() {
        let params = ConcatParams::new("out.txt");
        assert_eq!(reason(&params), Some(ValidationFailure::NoInputSpecified));

        let empty_list = ConcatParams::new("out.txt").with_files(Vec::<String>::new());
        assert_eq!(reason(&empty_list), Some(ValidationFailure::NoInputSpecified));
    }

    #[test]
    fn starting_file_requires_directory_mode() {
        let params = ConcatParams::new("out.txt")
            .with_files(["a.input"])
            .with_starting_file("start.input");
        assert_eq!(
            reason(&params),
            Some(ValidationFailure::StartingFileWithoutDirectory)
        );
    }

    #[test]
    fn directory_must_exist() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing");
        let params = ConcatParams::new("out.txt").with_directory(&missing);
        assert_eq!(
            reason(&params),
            Some(ValidationFailure::DirectoryMissing(missing))
        );
    }

    #[test]
    fn directory_must_be_a_directory() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("plain.input");
        File::create(&file).unwrap();
        let params = ConcatParams::new("out.txt").with_directory(&file);
        assert_eq!(reason(&params), Some(ValidationFailure::NotADirectory(file)));
    }
}
