pub mod evolution;
pub mod manager;
pub mod timing;
pub mod traits;

pub use evolution::EvolutionConfig;
pub use manager::{AppConfig, ConfigManager};
pub use timing::TimingConfig;
pub use traits::{ConfigManifest, ConfigSection, FieldManifest};
