use anyhow::Result;
use clap::Parser;
use concat_files::{load_params, ConcatParams};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "concat-files",
    version,
    about = "Concatenates a list of files, or every file in a directory, into one output file.",
    arg_required_else_help = true
)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Output file that receives the concatenated content"
    )]
    pub output: Option<PathBuf>,

    #[arg(value_name = "FILES", help = "Input files, written in the given order")]
    pub files: Vec<PathBuf>,

    #[arg(
        short,
        long,
        value_name = "DIR",
        help = "Concatenate every file directly inside this directory, sorted by name"
    )]
    pub directory: Option<PathBuf>,

    #[arg(
        short,
        long = "starting-file",
        value_name = "FILE",
        help = "File written first in directory mode"
    )]
    pub starting_file: Option<PathBuf>,

    #[arg(
        short = 'n',
        long = "newline",
        help = "Write a line separator after every file"
    )]
    pub newline: bool,

    #[arg(
        long = "delete-target",
        help = "Delete the output file before writing instead of appending to it"
    )]
    pub delete_target: bool,

    #[arg(
        short,
        long,
        value_name = "TOML",
        help = "Read parameters from a TOML file; command line values take precedence"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        short,
        long,
        help = "Suppress progress messages",
        action = clap::ArgAction::SetTrue
    )]
    pub quiet: bool,
}

impl Cli {
    pub fn into_params(self) -> Result<ConcatParams> {
        let base = match &self.config {
            Some(path) => load_params(path)?,
            None => ConcatParams::default(),
        };
        Ok(self.merge_into(base))
    }

    fn merge_into(self, base: ConcatParams) -> ConcatParams {
        let files = if self.files.is_empty() {
            base.files
        } else {
            Some(self.files)
        };

        ConcatParams {
            output_file: self.output.or(base.output_file),
            files,
            directory: self.directory.or(base.directory),
            starting_file: self.starting_file.or(base.starting_file),
            append_newline: self.newline || base.append_newline,
            delete_target_file: self.delete_target || base.delete_target_file,
        }
    }
}
