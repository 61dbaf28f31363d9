//! Optimize command implementation
//!
//! Handles the `dockershrink optimize` command which sends the project's
//! Dockerfile, .dockerignore and package.json to the dockershrink service and
//! writes the optimised versions to `./dockershrink.optimised/`.

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::env;
use std::time::Duration;

use super::workflow::OptimizeWorkflow;
use crate::api::ApiClient;
use crate::config::{FileCredentialStore, OptimizeOptions};
use crate::fmt::{Glyphs, MICROSCOPE, PACKAGE};
use crate::output::{ResultPresenter, OUTPUT_DIR};

/// Optimize the NodeJS Docker project in the current directory
///
/// # Examples
///
/// ```no_run
/// use dockershrink::cmd::optimize::cmd_optimize;
/// use dockershrink::config::OptimizeOptions;
/// use dockershrink::fmt::Glyphs;
///
/// cmd_optimize(&OptimizeOptions::default(), Glyphs::new(true))?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_optimize(options: &OptimizeOptions, glyphs: Glyphs) -> Result<()> {
    let store = FileCredentialStore::user_default()?;
    let client = ApiClient::from_env()?;
    let project_root = env::current_dir().context("Failed to determine current directory")?;

    run_optimize(
        &OptimizeWorkflow::new(project_root, &store, &client),
        options,
        glyphs,
    )
}

/// Drive `workflow` stage by stage, reporting progress on the terminal
pub fn run_optimize(
    workflow: &OptimizeWorkflow<'_>,
    options: &OptimizeOptions,
    glyphs: Glyphs,
) -> Result<()> {
    let credential = workflow.load_credential()?;

    let inputs = workflow.locate(options)?;
    println!();
    for line in inputs.describe() {
        println!("{}", line);
    }
    println!();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.set_message(format!(
        "{} Optimizing your project with dockershrink...",
        glyphs.pick(MICROSCOPE)
    ));
    spinner.enable_steady_tick(Duration::from_millis(120));
    let response = workflow.submit(&credential, &inputs, options);
    spinner.finish_and_clear();
    let response = response?;

    let written = workflow.apply(&response)?;
    if !written.is_empty() {
        println!(
            "{} Optimised files written to {}",
            glyphs.pick(PACKAGE),
            style(format!("./{}", OUTPUT_DIR)).cyan().bold()
        );
    }

    ResultPresenter::print(&response);
    Ok(())
}
