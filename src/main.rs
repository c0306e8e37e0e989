mod action;
mod config;
mod github;
mod http;
mod logger;
mod release;

use action::{command::WorkflowCommands, context::Context, inputs::EnvInputs};
use anyhow::Result;
use config::Settings;
use std::{io, process};

#[tokio::main]
async fn main() -> Result<()> {
    let vars = action::env_vars();
    let settings = Settings::from_vars(&vars);

    logger::init(settings.debug)?;

    let context = Context::from_vars(&vars);
    let inputs = EnvInputs::new(vars);
    let mut reporter = WorkflowCommands::new(io::stdout(), settings.output_file.clone());

    release::run(&inputs, &context, &settings, &mut reporter).await;

    if reporter.failed() {
        process::exit(1);
    }

    Ok(())
}
