//! sparsemat CLI: combine two sparse matrix files and write the result.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use sparsemat::{compute_with_config, load_with_config, save, Config, Operation, SparseMatrix};

#[derive(Parser)]
#[command(name = "sparsemat")]
#[command(about = "Add, subtract or multiply two sparse matrix files")]
#[command(version)]
struct Cli {
    /// First operand
    first: PathBuf,

    /// Second operand
    second: PathBuf,

    /// Operation to perform: add, subtract or multiply
    #[arg(long = "op", default_value = "add")]
    operation: String,

    /// Output file (defaults to matrix_<operation>.txt)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Reject entries whose coordinates fall outside the declared shape
    #[arg(long)]
    strict: bool,

    /// Report shapes and entry counts on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code()
        }
    }
}

fn run(cli: &Cli) -> sparsemat::Result<()> {
    let operation: Operation = cli.operation.parse()?;
    let config = if cli.strict { Config::strict() } else { Config::default() };

    let a: SparseMatrix = load_with_config(&cli.first, &config)?;
    let b: SparseMatrix = load_with_config(&cli.second, &config)?;

    if cli.verbose {
        describe("first", &cli.first, &a);
        describe("second", &cli.second, &b);
    }

    let result = compute_with_config(operation, &a, &b, &config)?;

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("matrix_{}.txt", operation)));

    save(&result, &output)?;

    if cli.verbose {
        describe(operation.name(), &output, &result);
    }

    Ok(())
}

fn describe(label: &str, path: &std::path::Path, matrix: &SparseMatrix) {
    let (rows, cols) = matrix.shape();
    eprintln!(
        "[sparsemat] {label}: {} ({rows}x{cols}, nnz={})",
        path.display(),
        matrix.nnz()
    );
}
