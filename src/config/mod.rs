pub mod traits;
pub mod evolution;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use evolution::{AlignConfig, LengthPolicy};
pub use traits::ConfigSection;
