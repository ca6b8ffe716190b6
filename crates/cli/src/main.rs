//! permpack inspector CLI

use clap::{Parser, Subcommand, ValueEnum};
use permpack::d3::PermutationRotationIterator;
use permpack::Config;
use permpack_cli::{walk_arrangements, Problem, ProblemParser, Report};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "permpack")]
#[command(about = "Inspect permutation/rotation enumeration for box packing problems")]
#[command(version)]
struct Cli {
    /// Rotation mode applied to all boxes
    #[arg(short, long, value_enum, global = true, default_value = "3d")]
    mode: ModeArg,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show orientation and search-space counts for a problem file
    Inspect {
        /// Path to the JSON problem file
        file: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print arrangements in enumeration order
    Enumerate {
        /// Path to the JSON problem file
        file: PathBuf,

        /// Maximum number of arrangements to print
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Walk orientation combinations as well as orderings
        #[arg(short, long)]
        rotations: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Footprint rotation only
    #[value(name = "2d")]
    TwoD,
    /// All axis-aligned orientations
    #[value(name = "3d")]
    ThreeD,
}

fn load(file: &Path, config: &Config) -> anyhow::Result<(Problem, PermutationRotationIterator)> {
    let problem = ProblemParser::new().parse_file(file)?;
    let iter =
        PermutationRotationIterator::new(&problem.items, problem.container.clone(), config)?;
    Ok((problem, iter))
}

fn print_arrangement(
    index: usize,
    problem: &Problem,
    iter: &PermutationRotationIterator,
    with_extents: bool,
) {
    let slots: Vec<String> = iter
        .permutations()
        .iter()
        .zip(iter.boxes())
        .map(|(&type_index, b)| {
            let label = problem.label(type_index);
            if with_extents {
                format!("{}[{}x{}x{}]", label, b.width(), b.depth(), b.height())
            } else {
                label
            }
        })
        .collect();
    println!("{:>6}: {}", index, slots.join(" "));
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::new().with_rotate_3d(matches!(cli.mode, ModeArg::ThreeD));

    match cli.command {
        Commands::Inspect { file, json } => {
            let (problem, iter) = load(&file, &config)?;
            let report = Report::new(&problem, &iter, &config);

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                report.print_summary();
            }
        }

        Commands::Enumerate {
            file,
            limit,
            rotations,
        } => {
            let (problem, mut iter) = load(&file, &config)?;

            let truncated = walk_arrangements(&mut iter, limit, rotations, |index, iter| {
                print_arrangement(index, &problem, iter, rotations)
            });

            if truncated {
                println!("(stopped after {} arrangements)", limit);
            }
        }
    }

    Ok(())
}
