//! Prints the step-by-step simplification of the built-in example expressions.
//!
//! **Usage**:
//! ```bash
//! cargo run -p bool-cli
//! cargo run -p bool-cli -- --notation c-style --example nested --example mixed
//! cargo run -p bool-cli -- --verbose
//! ```

mod catalogue;

use bool_simplify::{Notation, RenderOptions};
use catalogue::{Example, EXAMPLES};
use clap::{Parser, ValueEnum};
use color_eyre::eyre::bail;
use log::info;

/// The notation used to print expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum NotationArg {
    /// `!(A + BC)`
    Default,
    /// `!(A || B && C)`
    CStyle,
    /// `not (A or B and C)`
    Written,
    /// `¬(A ∨ B ∧ C)`
    Mathematical,
}

impl From<NotationArg> for Notation {
    fn from(arg: NotationArg) -> Self {
        match arg {
            NotationArg::Default => Notation::Default,
            NotationArg::CStyle => Notation::CStyle,
            NotationArg::Written => Notation::Written,
            NotationArg::Mathematical => Notation::Mathematical,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "boolsimp")]
#[command(about = "Simplify boolean expressions step by step", long_about = None)]
struct Cli {
    /// Notation used to print expressions
    #[arg(short, long, value_enum, default_value = "default")]
    notation: NotationArg,

    /// Name of an example to simplify; can be repeated (default: every example)
    #[arg(short, long = "example", value_name = "NAME")]
    examples: Vec<String>,

    /// List the example names and exit
    #[arg(short, long)]
    list: bool,

    /// Log every rewrite as it is applied
    #[arg(short, long)]
    verbose: bool,
}

/// Builds and simplifies an example, printing its trace. Construction errors are reported to
/// stderr.
fn run_example(example: &Example, options: &RenderOptions) -> color_eyre::Result<()> {
    println!("== {}: {}", example.name, example.description);
    match (example.build)() {
        Ok(symbol) => {
            info!("simplifying `{}`", symbol.render(options));
            println!("{}", symbol.simplify().render(options));
        },
        Err(err) => err.report_to_stderr()?,
    }
    println!();
    Ok(())
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        if args.verbose { simplelog::LevelFilter::Debug } else { simplelog::LevelFilter::Warn },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    if args.list {
        for example in EXAMPLES {
            println!("{:<20}{}", example.name, example.description);
        }
        return Ok(());
    }

    let selected = if args.examples.is_empty() {
        EXAMPLES.iter().collect::<Vec<_>>()
    } else {
        let mut selected = Vec::with_capacity(args.examples.len());
        for name in &args.examples {
            let Some(example) = catalogue::find(name) else {
                bail!("unknown example `{}` (use `--list` to see every example)", name);
            };
            selected.push(example);
        }
        selected
    };

    let options = Notation::from(args.notation).options();
    for example in selected {
        run_example(example, &options)?;
    }

    Ok(())
}
