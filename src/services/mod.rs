pub mod harmonizer;
pub mod runner;

pub use harmonizer::{HarmonizeOutcome, Harmonizer};
pub use runner::HarmonizerRunner;
