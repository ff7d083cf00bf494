//! Policies deciding which teller of a branch handles the next operation.
use anyhow::{anyhow, Context, Result};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::env;

use crate::types::BranchId;

pub const SELECTION_VAR: &str = "BANK_TELLER_SELECTION";

pub const SEED_VAR: &str = "BANK_TELLER_SEED";

/// Picks one teller out of a branch roster
pub trait TellerSelector: std::fmt::Debug {
    /// Return an index below `roster_len`
    /// Only ever called with a non-empty roster.
    fn pick(&mut self, roster_len: usize) -> usize;
}

/// Uniform random choice over the current roster
#[derive(Debug)]
pub struct RandomTellerSelector {
    rng: StdRng,
}

impl RandomTellerSelector {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence of choices for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl TellerSelector for RandomTellerSelector {
    fn pick(&mut self, roster_len: usize) -> usize {
        self.rng.random_range(0..roster_len)
    }
}

/// Hands operations to the tellers in turn, in roster order
#[derive(Debug, Default)]
pub struct RoundRobinTellerSelector {
    next: usize,
}

impl RoundRobinTellerSelector {
    pub fn new() -> Self {
        Self { next: 0 }
    }
}

impl TellerSelector for RoundRobinTellerSelector {
    fn pick(&mut self, roster_len: usize) -> usize {
        // the roster may have grown or shrunk since the last pick
        let index = self.next % roster_len;
        self.next = index + 1;
        index
    }
}

/// Bank-wide policy used to equip every new branch with a selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TellerSelection {
    #[default]
    Random,
    Seeded(u64),
    RoundRobin,
}

impl TellerSelection {
    /// Read the policy from `BANK_TELLER_SELECTION` and `BANK_TELLER_SEED`
    pub fn from_env() -> Result<Self> {
        let selection = env::var(SELECTION_VAR).ok();
        let seed = env::var(SEED_VAR).ok();
        Self::from_values(selection.as_deref(), seed.as_deref())
    }

    /// `round-robin` wins over a seed, without either the choice is random
    pub fn from_values(selection: Option<&str>, seed: Option<&str>) -> Result<Self> {
        match selection.map(str::trim) {
            Some("round-robin") => return Ok(TellerSelection::RoundRobin),
            Some("random") | Some("") | None => {}
            Some(other) => {
                return Err(anyhow!(
                    "Unknown teller selection (value = {}), expected 'random' or 'round-robin'",
                    other
                ))
            }
        }

        match seed {
            Some(seed) => {
                let seed = seed
                    .trim()
                    .parse::<u64>()
                    .with_context(|| format!("Invalid {} (value = {})", SEED_VAR, seed))?;
                Ok(TellerSelection::Seeded(seed))
            }
            None => Ok(TellerSelection::Random),
        }
    }

    /// Seeded branches use the base seed offset by their branch id
    pub fn selector_for(self, branch: BranchId) -> Box<dyn TellerSelector> {
        match self {
            TellerSelection::Random => Box::new(RandomTellerSelector::from_entropy()),
            TellerSelection::Seeded(seed) => Box::new(RandomTellerSelector::seeded(
                seed.wrapping_add(branch as u64),
            )),
            TellerSelection::RoundRobin => Box::new(RoundRobinTellerSelector::new()),
        }
    }
}
