//! Ravel CLI - Literate Programming Preprocessor

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "ravel")]
#[command(author, version, about = "Literate programming preprocessor", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand one named chunk into flat code
    Tangle {
        /// Name of the chunk to expand
        #[arg(short = 'R', long = "chunk", value_name = "CHUNK")]
        chunk: String,

        /// Input file to process, "-" for stdin
        #[arg(value_name = "FILE", default_value = "-")]
        input: PathBuf,

        /// File to output to, "-" for stdout
        #[arg(short, long, value_name = "FILE", default_value = "-")]
        output: PathBuf,

        /// Maximum reference nesting (overrides config)
        #[arg(long, value_name = "N")]
        max_depth: Option<usize>,
    },

    /// Render the whole document as Markdown
    Weave {
        /// Input file to process, "-" for stdin
        #[arg(value_name = "FILE", default_value = "-")]
        input: PathBuf,

        /// File to output to, "-" for stdout
        #[arg(short, long, value_name = "FILE", default_value = "-")]
        output: PathBuf,

        /// Default code syntax tag for chunks that declare none
        #[arg(short, long, value_name = "TAG")]
        syntax: Option<String>,

        /// Generate anchor links for chunk headings
        #[arg(long)]
        add_links: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout is reserved for tangled/woven output.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Read configuration from file or use defaults
    let config = match cli.config {
        Some(ref path) => ravel::config::read_config_file(path).unwrap_or_default(),
        None => std::env::current_dir()
            .ok()
            .and_then(|dir| ravel::config::read_config(&dir).ok())
            .unwrap_or_default(),
    };

    let result = match cli.command {
        Commands::Tangle {
            chunk,
            input,
            output,
            max_depth,
        } => {
            let options = commands::TangleOptions {
                chunk,
                input,
                output,
                max_depth: max_depth.unwrap_or(config.max_depth),
                strict: config.strict,
            };
            commands::tangle(&options)
        }

        Commands::Weave {
            input,
            output,
            syntax,
            add_links,
        } => {
            let options = commands::WeaveOptions {
                input,
                output,
                syntax: syntax.or(config.syntax),
                add_links: add_links || config.add_links,
                strict: config.strict,
            };
            commands::weave(&options)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
