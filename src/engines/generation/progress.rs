use super::evolution_engine::ProgressCallback;
use std::sync::mpsc::Sender;

/// Logs generation progress through the `log` facade.
pub struct ConsoleProgressCallback {
    every: usize,
}

impl ConsoleProgressCallback {
    /// Report every `every`-th generation (and always the first).
    pub fn new(every: usize) -> Self {
        Self {
            every: every.max(1),
        }
    }
}

impl Default for ConsoleProgressCallback {
    fn default() -> Self {
        Self::new(50)
    }
}

impl ProgressCallback for ConsoleProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        log::trace!("Generation {} starting", generation + 1);
    }

    fn on_generation_complete(&mut self, generation: usize, best_fitness: i64, mean_fitness: f64) {
        if generation % self.every == 0 {
            log::info!(
                "Generation {} complete. Best fitness: {}, mean fitness: {:.2}",
                generation + 1,
                best_fitness,
                mean_fitness
            );
        }
    }
}

// For reporting to another thread
pub struct ChannelProgressCallback {
    sender: Sender<ProgressMessage>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProgressMessage {
    GenerationStart(usize),
    GenerationComplete {
        generation: usize,
        best_fitness: i64,
        mean_fitness: f64,
    },
}

impl ChannelProgressCallback {
    pub fn new(sender: Sender<ProgressMessage>) -> Self {
        Self { sender }
    }
}

impl ProgressCallback for ChannelProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        let _ = self.sender.send(ProgressMessage::GenerationStart(generation));
    }

    fn on_generation_complete(&mut self, generation: usize, best_fitness: i64, mean_fitness: f64) {
        let _ = self.sender.send(ProgressMessage::GenerationComplete {
            generation,
            best_fitness,
            mean_fitness,
        });
    }
}
