//! Console front-end for the exact-rational Gaussian elimination solver.
//!
//! Reads a linear system from a JSON file (or generates a random one),
//! reduces it to row-echelon and reduced row-echelon form, and prints each
//! stage as a bordered grid. With `--trace` every elementary row operation
//! is printed together with the grid it produced.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::debug;
use serde::{Deserialize, Serialize};

use sle_solver::errors::SleSolverError;
use sle_solver::gauss::{AugmentedSystem, RowOp};
use sle_solver::testcase::random_system;
use sle_solver::matrix::Matrix;
use sle_solver::rational::Rational;
use sle_solver::render::grid_string;

#[derive(Parser, Debug)]
#[command(name = "sle-solver", version, about = "Exact-rational Gaussian elimination")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve a system read from a JSON file
    Solve(SolveArgs),
    /// Generate a random system, then solve it
    Random(RandomArgs),
}

#[derive(Args, Debug)]
struct SolveArgs {
    /// JSON file with "coefficients" (rows of integers) and "rhs"
    #[arg(short, long)]
    input: PathBuf,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct RandomArgs {
    /// Number of equations
    #[arg(long)]
    rows: usize,

    /// Number of unknowns
    #[arg(long)]
    cols: usize,

    /// Magnitude bound for generated entries (entries lie in -bound..bound)
    #[arg(long, default_value_t = 100)]
    bound: i64,

    /// Seed for the generator; the same seed reproduces the same system
    #[arg(long, default_value_t = 42)]
    seed: u64,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Print every elementary operation with the grid after it
    #[arg(long)]
    trace: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Human)]
    format: Format,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Human,
    Json,
}

#[derive(Deserialize, Debug)]
struct SystemFile {
    coefficients: Vec<Vec<i64>>,
    rhs: Vec<i64>,
}

#[derive(Serialize, Debug)]
struct Report<'a> {
    rows: usize,
    cols: usize,
    grid: &'a [Vec<Rational>],
    diagnosis: &'a str,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Solve(args) => {
            let raw = fs::read_to_string(&args.input)?;
            let file: SystemFile = serde_json::from_str(&raw)?;
            let system = build_system(file)?;
            debug!(
                "loaded {}x{} system from {}",
                system.rows(),
                system.cols(),
                args.input.display()
            );
            solve_session(system, &args.output)
        }
        Command::Random(args) => {
            let system = random_system(args.rows, args.cols, args.bound, args.seed)?;
            debug!(
                "generated {}x{} system (bound {}, seed {})",
                args.rows, args.cols, args.bound, args.seed
            );
            solve_session(system, &args.output)
        }
    }
}

fn build_system(file: SystemFile) -> Result<AugmentedSystem, SleSolverError> {
    let a = Matrix::from_integer_rows(file.coefficients)?;
    let b = Matrix::from_integer_rows(file.rhs.into_iter().map(|v| vec![v]).collect())?;
    AugmentedSystem::try_with(&a, &b)
}

fn solve_session(
    mut system: AugmentedSystem,
    out: &OutputArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    match out.format {
        Format::Human => {
            println!("{}", "-".repeat(50));
            println!("Input matrix");
            println!("{}", system);

            run_forward(&mut system, out.trace)?;
            println!("Row echelon form:");
            println!("{}", system);

            run_backward(&mut system, out.trace)?;
            println!("Reduced echelon form:");
            println!("{}", system);

            println!("System is {}", diagnose(&system));
            println!("{}", "-".repeat(50));
        }
        Format::Json => {
            run_forward(&mut system, false)?;
            run_backward(&mut system, false)?;

            let report = Report {
                rows: system.rows(),
                cols: system.cols(),
                grid: system.grid(),
                diagnosis: diagnose(&system),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

fn run_forward(system: &mut AugmentedSystem, trace: bool) -> Result<(), SleSolverError> {
    if trace {
        system.forward_traced(&mut print_step)
    } else {
        system.forward()
    }
}

fn run_backward(system: &mut AugmentedSystem, trace: bool) -> Result<(), SleSolverError> {
    if trace {
        system.backward_traced(&mut print_step)
    } else {
        system.backward()
    }
}

fn print_step(op: &RowOp, state: &AugmentedSystem) {
    println!("{}", op);
    println!("{}", grid_string(state));
    println!("{}", "-".repeat(50));
}

/// Classifies the reduced grid for the closing summary line. The library
/// leaves this interpretation to its callers.
fn diagnose(system: &AugmentedSystem) -> &'static str {
    let n = system.cols();
    let mut pivot_rows = 0;

    for i in 0..system.rows() {
        let row = system.row(i);
        let coefficients_zero = row[..n].iter().all(Rational::is_zero);
        if coefficients_zero && !row[n].is_zero() {
            return "inconsistent (no solution)";
        }
        if !coefficients_zero {
            pivot_rows += 1;
        }
    }

    if pivot_rows < n {
        "consistent, underdetermined (infinitely many solutions)"
    } else {
        "consistent, unique solution"
    }
}
