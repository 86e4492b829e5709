pub mod fitness;

pub use fitness::{fitness, is_dissonant, same_pitch_class, FitnessEvaluator};
