use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use log::info;
use std::env;
use std::path::PathBuf;
use std::process;

use dockershrink::cmd;
use dockershrink::config::{OptimizeOptions, OPENAI_API_KEY_ENV};
use dockershrink::error::{ErrorFormatter, EXIT_FAILURE};
use dockershrink::fmt::Glyphs;

/// Dockershrink optimizes your NodeJS Docker images.
///
/// Dockershrink is a CLI tool that helps you reduce the size of your NodeJS
/// Docker images by applying best practices and optimizations to your
/// Dockerfile and related files. The CLI is the primary way to interact with
/// the Dockershrink platform (backend).
#[derive(Parser)]
#[command(name = "dockershrink", author, version = cmd::version::VERSION)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable emoji output (useful for CI/CD or accessibility)
    #[arg(long, global = true)]
    no_emoji: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize dockershrink with your API key
    Init {
        /// Your Dockershrink API key
        #[arg(long, value_name = "API_KEY")]
        api_key: String,
    },

    /// Optimize your NodeJS Docker project
    ///
    /// Sends your Dockerfile, .dockerignore and package.json to the
    /// Dockershrink API. You can provide your OpenAI API key using the
    /// --openai-api-key flag or by setting the OPENAI_API_KEY environment
    /// variable.
    Optimize {
        /// Path to Dockerfile (default: ./Dockerfile)
        #[arg(long, value_name = "PATH")]
        dockerfile: Option<PathBuf>,

        /// Path to .dockerignore (default: ./.dockerignore)
        #[arg(long, value_name = "PATH")]
        dockerignore: Option<PathBuf>,

        /// Path to package.json (default: ./package.json or ./src/package.json)
        #[arg(long, value_name = "PATH")]
        package_json: Option<PathBuf>,

        /// Your OpenAI API key
        #[arg(long, env = OPENAI_API_KEY_ENV, hide_env_values = true, value_name = "KEY")]
        openai_api_key: Option<String>,
    },

    /// Print current CLI version
    Version,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    // Usage errors exit with the same status as every other failure
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            process::exit(if e.use_stderr() { EXIT_FAILURE } else { 0 });
        }
    };
    let glyphs = Glyphs::new(!cli.no_emoji);

    let result = match cli.command {
        Some(Commands::Init { api_key }) => cmd::cmd_init(&api_key, glyphs),
        Some(Commands::Optimize {
            dockerfile,
            dockerignore,
            package_json,
            openai_api_key,
        }) => {
            let options = OptimizeOptions {
                dockerfile,
                dockerignore,
                package_json,
                // An empty flag value still falls back to the environment
                openai_api_key: OptimizeOptions::resolve_openai_api_key(
                    openai_api_key,
                    env::var(OPENAI_API_KEY_ENV).ok(),
                ),
            };
            cmd::cmd_optimize(&options, glyphs)
        }
        Some(Commands::Version) => {
            cmd::cmd_version();
            Ok(())
        }
        Some(Commands::Completions { shell }) => {
            cmd::cmd_completions(shell, &mut Cli::command());
            Ok(())
        }
        None => {
            // No subcommand provided, show help
            let mut command = Cli::command();
            let help = command.render_help();
            println!("{}", help);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprint!("{}", ErrorFormatter::format(&e));
        if let Some(help) = ErrorFormatter::suggestion(&e) {
            info!("help: {}", help);
        }
        process::exit(ErrorFormatter::exit_code(&e));
    }
}
