use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::fmt::MakeWriter;

/// Append-mode log file writer for tracing-subscriber
///
/// The file is reopened per event, so external truncation or rotation is
/// picked up without restarting.
#[derive(Debug, Clone)]
pub struct FileWriter {
    path: PathBuf,
}

impl FileWriter {
    pub fn new(path: PathBuf) -> Self {
        if let Some(parent) = path.parent() {
            if let Err(err) = std::fs::create_dir_all(parent) {
                eprintln!(
                    "levelgate: failed to create log directory {}: {}",
                    parent.display(),
                    err
                );
            }
        }
        Self { path }
    }
}

impl<'a> MakeWriter<'a> for FileWriter {
    type Writer = Box<dyn Write + Send + Sync + 'a>;

    fn make_writer(&'a self) -> Self::Writer {
        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
        {
            Ok(file) => Box::new(std::io::BufWriter::new(file)),
            // Logging from inside the subscriber would recurse; report directly.
            Err(err) => {
                eprintln!(
                    "levelgate: failed to open log file {}, falling back to stderr: {}",
                    self.path.display(),
                    err
                );
                Box::new(std::io::BufWriter::new(std::io::stderr()))
            }
        }
    }
}
