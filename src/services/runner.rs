use super::harmonizer::{HarmonizeOutcome, Harmonizer};
use crate::config::AppConfig;
use crate::data::MelodyTrack;
use crate::engines::generation::{
    CancellationToken, ChannelProgressCallback, Key, ProgressMessage,
};
use crate::error::{AccompanistError, Result};
use std::sync::mpsc::{channel, Receiver};
use std::thread::{self, JoinHandle};

/// Runs a harmonizer on a worker thread so the caller can watch and cancel it.
pub struct HarmonizerRunner {
    handle: Option<JoinHandle<Result<HarmonizeOutcome>>>,
    progress_rx: Receiver<ProgressMessage>,
    cancel: CancellationToken,
}

impl HarmonizerRunner {
    /// Start evolution in a background thread
    pub fn start(config: AppConfig, key: Key, melody: MelodyTrack) -> Result<Self> {
        let harmonizer = Harmonizer::new(config)?;
        let (progress_tx, progress_rx) = channel();
        let cancel = CancellationToken::new();
        let worker_cancel = cancel.clone();

        let handle = thread::Builder::new()
            .name("accompanist-evolution".to_string())
            .spawn(move || {
                let callback = ChannelProgressCallback::new(progress_tx);
                harmonizer.harmonize(key, &melody, callback, &worker_cancel)
            })?;

        Ok(Self {
            handle: Some(handle),
            progress_rx,
            cancel,
        })
    }

    /// Poll for progress updates (non-blocking)
    pub fn poll_progress(&self) -> Option<ProgressMessage> {
        self.progress_rx.try_recv().ok()
    }

    /// Ask the worker to stop at the next generation boundary.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, |h| h.is_finished())
    }

    /// Take the result if the worker is done.
    pub fn try_get_results(&mut self) -> Option<Result<HarmonizeOutcome>> {
        let handle = self.handle.take()?;
        if handle.is_finished() {
            Some(join(handle))
        } else {
            self.handle = Some(handle);
            None
        }
    }

    /// Block until the worker finishes.
    pub fn wait(mut self) -> Result<HarmonizeOutcome> {
        match self.handle.take() {
            Some(handle) => join(handle),
            None => Err(AccompanistError::Worker(
                "results were already taken".to_string(),
            )),
        }
    }
}

fn join(handle: JoinHandle<Result<HarmonizeOutcome>>) -> Result<HarmonizeOutcome> {
    handle
        .join()
        .map_err(|_| AccompanistError::Worker("evolution thread panicked".to_string()))?
}

impl Drop for HarmonizerRunner {
    fn drop(&mut self) {
        if self.handle.is_some() {
            self.cancel.cancel();
        }
    }
}
