//! L Lang CLI - Command line interface
//!
//! Runs an LDraw program file against a token document and writes the
//! rendered model to stdout.

use clap::Parser;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;
use tracing::{debug, error};

mod config;
mod logging;
mod platform;

use crate::config::{parse_phase_level, LogConfig};
use crate::logging::{LogFormat, TARGET};
use crate::platform::{dump_tokens_to_stdout, print_diagnostics, print_error};
use llang_api::llang_config::{LogLevel, Phase, DEFAULT_TOKEN_FILE};
use llang_api::{
    apply_meta_tokens, load_registry, read_program, run, tokenize, LlangError, RunConfig,
};

#[derive(Parser, Debug)]
#[command(
    name = "llang",
    about = "L Lang - programs written as LEGO models",
    version = "0.1.0"
)]
struct Cli {
    /// Program file (LDraw .ldr)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Token configuration file
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_TOKEN_FILE)]
    tokens: PathBuf,

    /// Text bound to the arguments identifier
    #[arg(long, default_value = "")]
    arguments: String,

    /// Enable logging to stderr
    #[arg(short, long)]
    logging: bool,

    /// Global log level: error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    loglevel: LogLevel,

    /// Per-phase log level, e.g. `lexer=trace`
    #[arg(long = "log-target", value_name = "PHASE=LEVEL", value_parser = parse_phase_level)]
    log_targets: Vec<(Phase, LogLevel)>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Print the token stream of each statement instead of running
    #[arg(long)]
    dump_tokens: bool,

    /// Print collected diagnostics to stderr after the run
    #[arg(long)]
    show_diagnostics: bool,
}

impl Cli {
    fn log_config(&self) -> LogConfig {
        self.log_targets
            .iter()
            .fold(LogConfig::new(self.loglevel), |config, (phase, level)| {
                config.with_phase(*phase, *level)
            })
    }

    fn run_config(&self) -> RunConfig {
        RunConfig::default().with_arguments(self.arguments.clone())
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.logging {
        let log_config = cli.log_config();
        if let Err(e) = logging::init_with_file(&log_config, cli.log_format, cli.log_file.as_ref())
        {
            eprintln!("Error: cannot open log file: {e}");
            process::exit(1);
        }
    }

    if let Err(e) = execute(&cli) {
        error!(target: TARGET, phase = e.phase(), "{e}");
        print_error(&e);
        process::exit(1);
    }
}

fn execute(cli: &Cli) -> Result<(), LlangError> {
    debug!(
        target: TARGET,
        input = %cli.input.display(),
        tokens = %cli.tokens.display(),
        "starting"
    );

    let registry = load_registry(&cli.tokens)?;
    let lines = read_program(&cli.input)?;
    let registry = apply_meta_tokens(&lines, registry);

    if cli.dump_tokens {
        let dumps = tokenize(&lines, &registry)?;
        dump_tokens_to_stdout(&dumps);
        return Ok(());
    }

    let stdout = io::stdout();
    let output = run(&lines, &registry, &cli.run_config(), BufWriter::new(stdout.lock()))?;

    if cli.show_diagnostics {
        let statements = llang_core::preprocess(&lines, &registry);
        print_diagnostics(&output.errors, &statements);
    }
    Ok(())
}
