pub mod fitness;

pub use fitness::{adjacent_pairs_fitness, compute_fitness};
