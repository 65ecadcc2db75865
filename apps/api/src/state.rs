use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::campaign::generator::PlanGenerator;
use crate::config::Config;
use crate::handoff::HandoffStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable plan generator. Gemini when an API key is configured, else offline.
    pub generator: Arc<dyn PlanGenerator>,
    /// Pluggable hand-off store. Redis when `REDIS_URL` is set, else in-memory.
    pub handoff: Arc<dyn HandoffStore>,
    rng: Arc<Mutex<StdRng>>,
}

impl AppState {
    pub fn new(
        config: Config,
        generator: Arc<dyn PlanGenerator>,
        handoff: Arc<dyn HandoffStore>,
    ) -> Self {
        let rng = match config.jitter_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            generator,
            handoff,
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Draws a fresh seed from the shared source. Handlers seed a local `StdRng` with
    /// it so no lock is held across an await point.
    pub fn next_seed(&self) -> u64 {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campaign::generator::OfflinePlanGenerator;
    use crate::handoff::MemoryHandoffStore;

    fn state(seed: Option<u64>) -> AppState {
        AppState::new(
            Config::for_tests(seed),
            Arc::new(OfflinePlanGenerator),
            Arc::new(MemoryHandoffStore::default()),
        )
    }

    #[test]
    fn test_seeded_state_draws_repeatable_seeds() {
        let (a, b) = (state(Some(3)), state(Some(3)));
        let first: Vec<u64> = (0..3).map(|_| a.next_seed()).collect();
        let second: Vec<u64> = (0..3).map(|_| b.next_seed()).collect();
        assert_eq!(first, second);
        assert_ne!(first[0], first[1]);
    }

    #[test]
    fn test_clones_share_one_source() {
        let a = state(Some(3));
        let b = a.clone();
        let fresh = state(Some(3));
        a.next_seed();
        assert_eq!(b.next_seed(), {
            fresh.next_seed();
            fresh.next_seed()
        });
    }
}
