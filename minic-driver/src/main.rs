//! minic Type Checker Driver
//!
//! Loads a JSON-serialized AST produced by an external parser and runs
//! the static checker over it.

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::debug;
use minic_common::CompilerError;
use minic_frontend::{Frontend, TypeChecker};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "minic")]
#[command(about = "Static type checker for minic programs")]
#[command(version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Type check a whole program
    Check {
        /// Program AST in JSON format
        input: PathBuf,

        /// Print structure and function signatures after a successful check
        #[arg(long)]
        signatures: bool,
    },

    /// Infer the type of a closed expression
    TypeOf {
        /// Expression AST in JSON format
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "error" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    match run(&cli.command) {
        Ok(output) => {
            print!("{output}");
            Ok(())
        }
        Err(CompilerError::IoError { message }) => Err(anyhow::anyhow!(message)),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

/// Run one command and return what it prints on success
fn run(command: &Commands) -> Result<String, CompilerError> {
    match command {
        Commands::Check { input, signatures } => {
            let source = read_input(input)?;
            let checker = Frontend::check_program_json(&source)?;
            debug!("{} is well-typed", input.display());

            let mut output = String::from("ok\n");
            if *signatures {
                output.push_str(&format_signatures(&checker));
            }
            Ok(output)
        }
        Commands::TypeOf { input } => {
            let source = read_input(input)?;
            let ty = Frontend::type_of_expression_json(&source)?;
            Ok(format!("{ty}\n"))
        }
    }
}

fn read_input(path: &Path) -> Result<String, CompilerError> {
    fs::read_to_string(path).map_err(|e| CompilerError::read_error(path, &e))
}

fn format_signatures(checker: &TypeChecker) -> String {
    let mut out = String::new();

    for (name, fields) in checker.structures().iter() {
        let fields: String = fields.iter().map(|(field, ty)| format!(" {ty} {field};")).collect();
        out.push_str(&format!("struct {name} {{{fields} }}\n"));
    }

    for (name, signature) in checker.functions().iter() {
        let params: Vec<String> = signature.parameters.iter().map(|p| p.to_string()).collect();
        out.push_str(&format!("{} {name}({})\n", signature.return_type, params.join(", ")));
    }

    out
}
