pub mod config;
pub mod error;
pub mod progress;
mod scanner;
mod validator;
mod writer;

pub use config::{load_params, ConcatParams};
pub use error::{ConcatError, ValidationFailure};
pub use progress::{NoopProgress, ProgressReporter, ProgressSink};
pub use scanner::resolve_input_files;
pub use validator::Validator;
pub use writer::{FileWriter, LINE_SEPARATOR};

/// Validates parameters, then writes the concatenated output.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConcatService {
    validator: Validator,
    writer: FileWriter,
}

impl ConcatService {
    pub fn new(validator: Validator, writer: FileWriter) -> Self {
        Self { validator, writer }
    }

    pub fn concat(
        &self,
        params: &ConcatParams,
        progress: &mut dyn ProgressSink,
    ) -> Result<(), ConcatError> {
        self.validator.validate(params)?;
        self.writer.write(params, progress)
    }
}

pub fn run(params: &ConcatParams, quiet: bool) -> Result<(), ConcatError> {
    let mut progress = ProgressReporter::new(!quiet);
    run_with_progress(params, &mut progress)
}

pub fn run_with_progress(
    params: &ConcatParams,
    progress: &mut dyn ProgressSink,
) -> Result<(), ConcatError> {
    ConcatService::default().concat(params, progress)
}
