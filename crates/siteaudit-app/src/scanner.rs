//! Scan collaborator
//!
//! The state machine never produces results itself; it asks a [`Scanner`] and
//! waits for a message back. [`SimulatedScanner`] stands in for a real
//! accessibility engine: it waits a fixed delay, then draws the summary
//! counts at random and reports the fixed issue list.

use std::sync::Mutex;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::ScanSettings;
use siteaudit_core::prelude::*;
use siteaudit_core::{
    sample_issues, ScanResult, ScanSummary, ERRORS_RANGE, PASSED_RANGE, SCORE_RANGE,
    WARNINGS_RANGE,
};

/// Produces a [`ScanResult`] for a normalized target URL
///
/// Both the TUI and the headless runner drive scans through this trait.
#[trait_variant::make(Scanner: Send)]
pub trait LocalScanner {
    /// Scan `url`, which is already scheme-qualified
    async fn scan(&self, url: &str) -> Result<ScanResult>;
}

/// Draw a summary with every field inside its simulated range
pub fn random_summary<R: Rng + ?Sized>(rng: &mut R) -> ScanSummary {
    ScanSummary {
        errors: rng.gen_range(ERRORS_RANGE),
        warnings: rng.gen_range(WARNINGS_RANGE),
        passed: rng.gen_range(PASSED_RANGE),
        score: rng.gen_range(SCORE_RANGE),
    }
}

/// Fixed-delay scanner backed by a pseudo-random generator
#[derive(Debug)]
pub struct SimulatedScanner {
    delay: Duration,
    rng: Mutex<StdRng>,
}

impl SimulatedScanner {
    /// Scanner seeded from OS entropy
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Scanner with a fixed seed; the same seed yields the same summaries
    pub fn with_seed(delay: Duration, seed: u64) -> Self {
        Self {
            delay,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn from_settings(settings: &ScanSettings) -> Self {
        match settings.seed {
            Some(seed) => Self::with_seed(settings.delay(), seed),
            None => Self::new(settings.delay()),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Scanner for SimulatedScanner {
    async fn scan(&self, url: &str) -> Result<ScanResult> {
        debug!("Simulating scan of {} ({}ms)", url, self.delay.as_millis());
        tokio::time::sleep(self.delay).await;

        let summary = {
            let mut rng = self
                .rng
                .lock()
                .map_err(|_| Error::scan("random source lock poisoned"))?;
            random_summary(&mut *rng)
        };

        Ok(ScanResult::new(url, summary, sample_issues()))
    }
}
