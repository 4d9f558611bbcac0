pub mod operators;
pub mod selection;
pub mod hall_of_fame;
pub mod evolution_engine;
pub mod progress;

pub use hall_of_fame::{BestAlignment, HallOfFame};
pub use evolution_engine::{
    EvolutionEngine, GenerationReport, ProgressCallback, RunSummary, rank_population,
    select_parents,
};
pub use progress::{ConsoleProgressCallback, LogProgressCallback, RecordingProgressCallback};
pub use selection::SelectionPlan;
