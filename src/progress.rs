use std::path::Path;

/// Receives events from the file writer. Every method defaults to a no-op.
pub trait ProgressSink {
    fn start(&mut self, _output: &Path, _total_files: usize) {}
    fn start_file(&mut self, _path: &Path) {}
    fn finish_file(&mut self, _path: &Path, _bytes: u64) {}
    fn finish(&mut self, _output: &Path) {}
}

/// Sink that drops all events.
pub struct NoopProgress;

impl ProgressSink for NoopProgress {}

/// Reports progress through the `log` facade.
pub struct ProgressReporter {
    enabled: bool,
    total_files: usize,
    processed_files: usize,
    total_bytes: u64,
}

impl ProgressReporter {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            total_files: 0,
            processed_files: 0,
            total_bytes: 0,
        }
    }

    pub fn processed_files(&self) -> usize {
        self.processed_files
    }

    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }
}

impl ProgressSink for ProgressReporter {
    fn start(&mut self, output: &Path, total_files: usize) {
        self.total_files = total_files;
        if !self.enabled {
            return;
        }
        log::info!(
            "Concatenating {} file(s) into {}",
            total_files,
            output.display()
        );
    }

    fn start_file(&mut self, path: &Path) {
        if !self.enabled {
            return;
        }
        log::debug!(
            "[{}/{}] Reading {}",
            self.processed_files + 1,
            self.total_files.max(1),
            path.display()
        );
    }

    fn finish_file(&mut self, path: &Path, bytes: u64) {
        self.processed_files += 1;
        self.total_bytes += bytes;
        if !self.enabled {
            return;
        }
        log::info!(
            "[{}/{}] Appended {} ({} bytes)",
            self.processed_files,
            self.total_files.max(1),
            path.display(),
            bytes
        );
    }

    fn finish(&mut self, output: &Path) {
        if !self.enabled {
            return;
        }
        log::info!(
            "Done. {} file(s), {} bytes written to {}",
            self.processed_files,
            self.total_bytes,
            output.display()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_even_when_disabled() {
        let mut reporter = ProgressReporter::new(false);
        reporter.start(Path::new("out.txt"), 2);
        reporter.finish_file(Path::new("a"), 3);
        reporter.finish_file(Path::new("b"), 4);
        reporter.finish(Path::new("out.txt"));
        assert_eq!(reporter.processed_files(), 2);
        assert_eq!(reporter.total_bytes(), 7);
    }
}
