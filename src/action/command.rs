use super::Reporter;
use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::PathBuf,
};
use uuid::Uuid;

/// Talks back to the Actions runner: outputs go to the `GITHUB_OUTPUT` file
/// when there is one, everything else is a workflow command on `out`.
pub struct WorkflowCommands<W: Write> {
    out: W,
    output_file: Option<PathBuf>,
    failed: bool,
}

impl<W: Write> WorkflowCommands<W> {
    pub fn new(out: W, output_file: Option<PathBuf>) -> Self {
        WorkflowCommands {
            out,
            output_file,
            failed: false,
        }
    }

    pub fn failed(&self) -> bool {
        self.failed
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Everything is checked and rendered before the single write, so a
    /// rejected value leaves the output file untouched.
    fn write_outputs(&mut self, outputs: &[(&str, &str)], delimiter: &str) -> io::Result<()> {
        match self.output_file.clone() {
            Some(path) => {
                let mut entries = String::new();
                for &(name, value) in outputs {
                    entries.push_str(&output_entry(name, value, delimiter)?);
                }

                let mut file = OpenOptions::new().append(true).open(path)?;
                file.write_all(entries.as_bytes())
            }
            None => {
                let mut commands = Vec::new();
                for &(name, value) in outputs {
                    commands.push(command_line("set-output", &[("name", name)], value));
                }
                self.out.write_all(commands.concat().as_bytes())
            }
        }
    }

    fn issue(&mut self, command: &str, properties: &[(&str, &str)], message: &str) -> io::Result<()> {
        self.out
            .write_all(command_line(command, properties, message).as_bytes())
    }
}

impl<W: Write> Reporter for WorkflowCommands<W> {
    fn info(&mut self, message: &str) {
        log::info!("{}", message);
    }

    fn set_output(&mut self, name: &str, value: &str) -> io::Result<()> {
        self.set_outputs(&[(name, value)])
    }

    fn set_outputs(&mut self, outputs: &[(&str, &str)]) -> io::Result<()> {
        for (name, _) in outputs {
            log::debug!("setting output {}", name);
        }

        self.write_outputs(outputs, &format!("ghadelimiter_{}", Uuid::new_v4()))
    }

    fn set_failed(&mut self, message: &str) {
        self.failed = true;

        if let Err(err) = self.issue("error", &[], message) {
            log::error!("{} (cannot report failure to the runner: {})", message, err);
        }
    }
}

fn command_line(command: &str, properties: &[(&str, &str)], message: &str) -> String {
    let mut line = format!("::{}", command);

    if !properties.is_empty() {
        let properties = properties
            .iter()
            .map(|(key, value)| format!("{}={}", key, escape_property(value)))
            .collect::<Vec<_>>()
            .join(",");
        line.push(' ');
        line.push_str(&properties);
    }

    line.push_str("::");
    line.push_str(&escape_data(message));
    line.push('\n');

    line
}

fn output_entry(name: &str, value: &str, delimiter: &str) -> io::Result<String> {
    if name.contains(delimiter) || value.contains(delimiter) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Unexpected input: output {} contains the delimiter {}", name, delimiter),
        ));
    }

    Ok(format!("{}<<{}\n{}\n{}\n", name, delimiter, value, delimiter))
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
