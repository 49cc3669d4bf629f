//! Quine-McCluskey Logic Minimizer - Command Line Interface
//!
//! Reads function definitions such as `f(a, b, c) = [1, 3, 5] | [7]` either
//! interactively or from a file, and prints every minimal sum of products.

use clap::{ArgAction, Parser};
use qmc_logic::definition::read_definitions_file;
use qmc_logic::{FunctionDefinition, MinimizerConfig, QmcError};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "qmc")]
#[command(about = "Quine-McCluskey exact logic minimizer", long_about = None)]
#[command(version)]
struct Args {
    /// File with one definition per line (reads stdin interactively if omitted)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Print minimal forms as expression trees
    #[arg(short = 't', long = "tree")]
    tree: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,

    /// Dump every merge column at trace level
    #[arg(long = "trace-columns")]
    trace_columns: bool,

    /// Abort Petrick's method when a step yields more candidate covers than this
    #[arg(long = "max-cover-candidates", value_name = "N")]
    max_cover_candidates: Option<usize>,
}

impl Args {
    fn level_filter(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn config(&self) -> MinimizerConfig {
        MinimizerConfig {
            trace_columns: self.trace_columns,
            max_cover_candidates: self.max_cover_candidates,
        }
    }
}

/// Minimize one definition and print its numbered forms
fn report(definition: &FunctionDefinition, config: &MinimizerConfig, tree: bool) -> Result<(), QmcError> {
    let minimizer = definition.minimizer_with_config(config)?;
    let forms = minimizer.minimal_forms_as_expressions()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (i, form) in forms.iter().enumerate() {
        if tree {
            write!(out, "{}.\n{}", i + 1, form.tree())?;
        } else {
            writeln!(out, "{}. {}", i + 1, form)?;
        }
    }
    Ok(())
}

fn run_line(line: &str, config: &MinimizerConfig, tree: bool) {
    let result = FunctionDefinition::parse(line)
        .map_err(QmcError::from)
        .and_then(|definition| report(&definition, config, tree));
    if let Err(e) = result {
        println!("Error: {}", e);
    }
}

fn run_interactive(config: &MinimizerConfig, tree: bool) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            println!();
            return Ok(());
        }

        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("exit") {
            return Ok(());
        }
        if trimmed.is_empty() {
            continue;
        }
        run_line(trimmed, config, tree);
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = TermLogger::init(
        args.level_filter(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Warning: could not install logger: {}", e);
    }

    let config = args.config();

    match args.input {
        Some(ref path) => {
            let definitions = match read_definitions_file(path) {
                Ok(definitions) => definitions,
                Err(e) => {
                    eprintln!("Error reading '{}': {}", path.display(), e);
                    process::exit(1);
                }
            };

            for (line_number, definition) in definitions {
                let result = definition
                    .map_err(QmcError::from)
                    .and_then(|definition| report(&definition, &config, args.tree));
                if let Err(e) = result {
                    println!("Error: line {}: {}", line_number, e);
                }
            }
        }
        None => {
            if let Err(e) = run_interactive(&config, args.tree) {
                eprintln!("Error reading input: {}", e);
                process::exit(1);
            }
        }
    }
}
