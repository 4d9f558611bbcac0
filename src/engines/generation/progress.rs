use super::evolution_engine::{GenerationReport, ProgressCallback};

fn format_scores(scores: &[usize]) -> String {
    scores
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub struct ConsoleProgressCallback;

impl ProgressCallback for ConsoleProgressCallback {
    fn on_generation_start(&mut self, _generation: usize) {}

    fn on_generation_complete(&mut self, report: &GenerationReport) {
        println!(
            "Generation {}: top scores [{}], best so far {}",
            report.generation,
            format_scores(&report.top_scores),
            report.best_fitness
        );
    }
}

/// Routes generation reports through `log` instead of stdout.
pub struct LogProgressCallback;

impl ProgressCallback for LogProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        log::trace!("Generation {} starting", generation);
    }

    fn on_generation_complete(&mut self, report: &GenerationReport) {
        log::info!(
            "Generation {}: top scores [{}], best so far {}",
            report.generation,
            format_scores(&report.top_scores),
            report.best_fitness
        );
    }
}

/// Keeps every report; handy for inspecting a run afterwards.
#[derive(Default)]
pub struct RecordingProgressCallback {
    pub reports: Vec<GenerationReport>,
}

impl ProgressCallback for RecordingProgressCallback {
    fn on_generation_start(&mut self, _generation: usize) {}

    fn on_generation_complete(&mut self, report: &GenerationReport) {
        self.reports.push(report.clone());
    }
}
