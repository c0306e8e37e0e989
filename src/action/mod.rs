//! Runner-facing plumbing: step inputs, outputs, workflow commands and the
//! context of the triggering event.

pub mod command;
pub mod context;
pub mod inputs;

use crate::config::ConfigError;
use std::{collections::HashMap, env, io};

pub type Vars = HashMap<String, String>;

/// Snapshot of the process environment. Variables that are not valid
/// unicode are skipped.
pub fn env_vars() -> Vars {
    env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InputOptions {
    pub required: bool,
}

impl InputOptions {
    pub fn required() -> Self {
        InputOptions { required: true }
    }

    pub fn optional() -> Self {
        InputOptions { required: false }
    }
}

pub trait Inputs {
    /// Value of the input as handed over by the runner, if any.
    fn get_raw(&self, name: &str) -> Option<String>;

    /// Trimmed value of the input, `""` when unset. Fails when a required
    /// input is unset or blank.
    fn get_input(&self, name: &str, options: InputOptions) -> Result<String, ConfigError> {
        let value = self.get_raw(name).unwrap_or_default().trim().to_owned();

        if options.required && value.is_empty() {
            return Err(ConfigError::MissingInput(name.to_owned()));
        }

        Ok(value)
    }
}

pub trait Reporter {
    fn info(&mut self, message: &str);

    fn set_output(&mut self, name: &str, value: &str) -> io::Result<()>;

    /// Publishes a group of outputs. Implementations that can fail halfway
    /// should publish all of them or none.
    fn set_outputs(&mut self, outputs: &[(&str, &str)]) -> io::Result<()> {
        for (name, value) in outputs {
            self.set_output(name, value)?;
        }

        Ok(())
    }

    /// Marks the step as failed. The process exit code is the caller's concern.
    fn set_failed(&mut self, message: &str);
}
