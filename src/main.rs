use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use genalign::config::ConfigManager;
use genalign::data::connectors::{compile_patterns, filter_by_title, FastaConnector};
use genalign::engines::evaluation::compute_fitness;
use genalign::engines::generation::{
    ConsoleProgressCallback, EvolutionEngine, LogProgressCallback, RunSummary,
};
use genalign::engines::metrics::composition_report;
use genalign::Individual;
use std::path::PathBuf;

/// Genalign: multiple sequence alignment by genetic algorithm
#[derive(Parser, Debug)]
#[command(name = "genalign")]
#[command(author, version, about = "Aligns DNA sequences with a genetic algorithm", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evolve an alignment for the sequences in a FASTA file.
    Align {
        /// Input FASTA file
        input: PathBuf,

        /// TOML configuration file (an `[align]` table)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the number of generations
        #[arg(short, long)]
        generations: Option<usize>,

        /// Override the population size
        #[arg(short, long)]
        population: Option<usize>,

        /// Override the per-gene mutation rate
        #[arg(long)]
        mutation_rate: Option<f64>,

        /// Seed the random source for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// Write the best alignment as FASTA
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the run summary as JSON
        #[arg(long)]
        summary_json: Option<PathBuf>,

        /// Report generations through the log instead of stdout
        #[arg(short, long)]
        quiet: bool,
    },

    /// Score an already aligned FASTA file.
    Score {
        /// Aligned FASTA file
        input: PathBuf,
    },

    /// Count nucleotides per record.
    Composition {
        /// Input FASTA file
        input: PathBuf,

        /// Keep only records whose title matches this regex (repeatable)
        #[arg(short, long = "require")]
        require: Vec<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Align {
            input,
            config,
            generations,
            population,
            mutation_rate,
            seed,
            output,
            summary_json,
            quiet,
        } => {
            let mut manager = ConfigManager::load(config.as_deref())
                .context("Failed to load configuration")?;
            manager.update(|c| {
                if let Some(g) = generations {
                    c.align.num_generations = g;
                }
                if let Some(p) = population {
                    c.align.population_size = p;
                }
                if let Some(m) = mutation_rate {
                    c.align.mutation_rate = m;
                }
                if seed.is_some() {
                    c.align.seed = seed;
                }
            })?;

            let sequences = FastaConnector::load(&input)
                .with_context(|| format!("Failed to load {}", input.display()))?;
            let mut engine = EvolutionEngine::new(manager.get().align.clone(), sequences)?;

            let summary = if quiet {
                engine.run(LogProgressCallback)?
            } else {
                engine.run(ConsoleProgressCallback)?
            };
            print_summary(&summary);

            if let Some(path) = output {
                FastaConnector::write_alignment(&path, &summary.alignment)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
            }
            if let Some(path) = summary_json {
                let json = serde_json::to_string_pretty(&summary)?;
                std::fs::write(&path, json)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
            }
        }
        Commands::Score { input } => {
            let records = FastaConnector::load(&input)
                .with_context(|| format!("Failed to load {}", input.display()))?;
            let individual = Individual::new(records)
                .context("Aligned input must have equal-length records")?;
            println!(
                "Fitness score of {} (lower is better): {}",
                input.display(),
                compute_fitness(&individual)
            );
        }
        Commands::Composition { input, require } => {
            let patterns = compile_patterns(require.as_slice())?;
            let records = FastaConnector::load(&input)
                .with_context(|| format!("Failed to load {}", input.display()))?;
            let records = filter_by_title(records, &patterns);
            for report in composition_report(&records) {
                println!();
                println!("Looking at: {}", report.title);
                println!("{}", report.counts);
                if let Some(gc) = report.counts.gc_fraction() {
                    println!("GC: {:.2}%", gc * 100.0);
                }
            }
        }
    }

    Ok(())
}

fn print_summary(summary: &RunSummary) {
    println!();
    println!(
        "Best score {} (generation {}), {} generations of {} in {:.3}s",
        summary.best_fitness,
        summary.best_generation,
        summary.generations,
        summary.population_size,
        summary.elapsed_secs
    );
    if summary.discarded_mutations > 0 {
        println!(
            "{} length-changing mutations were discarded to keep genes equal length",
            summary.discarded_mutations
        );
    }
    for gene in summary.alignment.genes() {
        println!("{}", gene.title());
        println!("{}", gene.as_str_lossy());
    }
}
