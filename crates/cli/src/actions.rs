//! Runner workflow commands.
//!
//! Outputs go to the file named by `GITHUB_OUTPUT` when the runner provides
//! one, otherwise to stdout as `::set-output` commands. Failures are
//! `::error::` commands on stdout.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use herald_relay::Reporter;
use uuid::Uuid;

/// [`Reporter`] speaking the CI runner's workflow command protocol.
pub struct ActionsReporter<W> {
    out: W,
    output_file: Option<PathBuf>,
}

impl ActionsReporter<io::Stdout> {
    /// Reporter writing to stdout and the runner's output file, if any.
    pub fn from_env() -> Self {
        let output_file = std::env::var_os("GITHUB_OUTPUT")
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);
        Self::new(io::stdout(), output_file)
    }
}

impl<W: Write> ActionsReporter<W> {
    pub fn new(out: W, output_file: Option<PathBuf>) -> Self {
        Self { out, output_file }
    }
}

impl<W: Write> Reporter for ActionsReporter<W> {
    fn set_output(&mut self, name: &str, value: &str) -> io::Result<()> {
        if let Some(path) = &self.output_file {
            let delimiter = format!("ghadelimiter_{}", Uuid::new_v4());
            let mut file = OpenOptions::new().append(true).create(true).open(path)?;
            writeln!(file, "{name}<<{delimiter}")?;
            writeln!(file, "{value}")?;
            writeln!(file, "{delimiter}")?;
            return Ok(());
        }

        writeln!(
            self.out,
            "::set-output name={}::{}",
            escape_property(name),
            escape_data(value)
        )?;
        self.out.flush()
    }

    fn set_failed(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "::error::{}", escape_data(message))?;
        self.out.flush()
    }
}

fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}
