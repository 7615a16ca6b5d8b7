use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use woxi_eval::evaluator::{Session, SessionConfig, builtin_names};
use woxi_eval::without_shebang;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
  #[command(flatten)]
  config: ConfigArgs,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Args)]
struct ConfigArgs {
  /// Mantissa precision of real numbers in bits
  #[arg(
    long,
    global = true,
    default_value_t = SessionConfig::default().precision_bits
  )]
  precision_bits: usize,

  /// Significant digits printed for real numbers
  #[arg(long, global = true, default_value_t = 6)]
  display_digits: usize,

  /// Maximum rewrite steps before evaluation is abandoned
  #[arg(long, global = true, default_value_t = 4096)]
  iteration_limit: usize,

  /// Maximum nesting depth of evaluation
  #[arg(long, global = true, default_value_t = 1024)]
  recursion_limit: usize,
}

impl From<ConfigArgs> for SessionConfig {
  fn from(args: ConfigArgs) -> Self {
    SessionConfig {
      precision_bits: args.precision_bits,
      display_digits: args.display_digits,
      iteration_limit: args.iteration_limit,
      recursion_limit: args.recursion_limit,
    }
  }
}

#[derive(Subcommand)]
enum Commands {
  /// Evaluate a Wolfram Language expression
  Eval {
    /// The Wolfram Language expression to evaluate
    expression: String,
  },
  /// Evaluate a script file and print its last result
  Run {
    /// Path to the script
    file: PathBuf,
  },
  /// List the built-in symbols
  Builtins,
}

fn evaluate(session: &mut Session, source: &str) -> Result<()> {
  let outcome = session.interpret(source)?;
  for warning in &outcome.warnings {
    eprintln!("{warning}");
  }
  println!("{}", outcome.result);
  Ok(())
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  let mut session = Session::with_config(cli.config.into());

  match cli.command {
    Commands::Eval { expression } => evaluate(&mut session, &expression),
    Commands::Run { file } => {
      let source = fs::read_to_string(&file)
        .with_context(|| format!("reading {}", file.display()))?;
      evaluate(&mut session, &without_shebang(&source))
    }
    Commands::Builtins => {
      for name in builtin_names() {
        println!("{name}");
      }
      Ok(())
    }
  }
}
