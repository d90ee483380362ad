use crate::config::ConcatParams;
use crate::error::{ConcatError, ValidationFailure};
use crate::progress::ProgressSink;
use crate::scanner::resolve_input_files;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

/// Separator written after each fragment when newlines are enabled.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Writes the resolved inputs into the output file.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileWriter;

impl FileWriter {
    pub fn new() -> Self {
        Self
    }

    /// Concatenates every resolved input into the output file.
    ///
    /// No rollback: on failure the bytes already written stay in the output.
    pub fn write(
        &self,
        params: &ConcatParams,
        progress: &mut dyn ProgressSink,
    ) -> Result<(), ConcatError> {
        let output = params
            .output_path()
            .ok_or(ValidationFailure::OutputFileRequired)?;
        let files = resolve_input_files(params)?;
        progress.start(output, files.len());

        let out_file = open_output(output, params.delete_target_file)?;
        let mut writer = BufWriter::new(out_file);

        for path in &files {
            progress.start_file(path);
            let content = fs::read(path).map_err(|e| ConcatError::io(path, e))?;
            writer
                .write_all(&content)
                .map_err(|e| ConcatError::io(output, e))?;
            if params.append_newline {
                writer
                    .write_all(LINE_SEPARATOR.as_bytes())
                    .map_err(|e| ConcatError::io(output, e))?;
            }
            progress.finish_file(path, content.len() as u64);
        }

        writer.flush().map_err(|e| ConcatError::io(output, e))?;
        progress.finish(output);
        Ok(())
    }
}

fn open_output(output: &Path, delete_first: bool) -> Result<File, ConcatError> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ConcatError::io(parent, e))?;
    }

    if delete_first {
        match fs::remove_file(output) {
            Ok(()) => log::debug!("Deleted existing output {}", output.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(ConcatError::io(output, e)),
        }
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(output)
        .map_err(|e| ConcatError::io(output, e))
}
