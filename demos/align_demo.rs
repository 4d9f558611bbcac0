use genalign::config::AlignConfig;
use genalign::data::FastaConnector;
use genalign::engines::generation::{EvolutionEngine, GenerationReport, ProgressCallback};
use std::env;

/// Prints one line per generation with elapsed time.
struct DemoProgressCallback {
    start_time: std::time::Instant,
}

impl ProgressCallback for DemoProgressCallback {
    fn on_generation_start(&mut self, _generation: usize) {}

    fn on_generation_complete(&mut self, report: &GenerationReport) {
        println!(
            "Generation {}: best = {}, leader = {:?}, time = {:.2}s",
            report.generation,
            report.best_fitness,
            report.top_scores.first(),
            self.start_time.elapsed().as_secs_f64()
        );
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let data_path = args
        .get(1)
        .map(|s| s.as_str())
        .unwrap_or("tests/data/five_sequences.fasta");
    let population_size = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(50);
    let num_generations = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(25);

    let sequences = FastaConnector::load(data_path)?;
    println!("Loaded {} sequences from {}", sequences.len(), data_path);

    let config = AlignConfig {
        population_size,
        num_generations,
        seed: Some(42),
        ..AlignConfig::default()
    };
    let mut engine = EvolutionEngine::new(config, sequences)?;
    let summary = engine.run(DemoProgressCallback {
        start_time: std::time::Instant::now(),
    })?;

    println!("\nBest score {} found in generation {}", summary.best_fitness, summary.best_generation);
    for gene in summary.alignment.genes() {
        println!("{:<30} {}", gene.title(), gene.as_str_lossy());
    }
    Ok(())
}
