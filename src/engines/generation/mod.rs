pub mod cancellation;
pub mod chord_factory;
pub mod evolution_engine;
pub mod genome;
pub mod key;
pub mod operators;
pub mod progress;

pub use cancellation::CancellationToken;
pub use chord_factory::{build_chord, generate_chord, generate_genome, generate_population};
pub use evolution_engine::{
    EngineConfig, EvolutionEngine, EvolutionOutcome, ProgressCallback, ELITE_COUNT,
};
pub use genome::{Genome, Population, ScoredGenome};
pub use key::{build_ladder, Key, KeyContext};
pub use operators::{crossover, crossover_at, mutate, select_pair, SelectionMethod};
pub use progress::{ChannelProgressCallback, ConsoleProgressCallback, ProgressMessage};
