//! Selection of the algorithm variants behind the top-level entry points.

use crate::distance::{full, naive, rolling};
use crate::script::{generate, generate_tabulated, EditScript};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// How the scalar distance is computed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Full `(m + 1) × (n + 1)` table
    Full,
    /// Two rows of the table
    #[default]
    Rolling,
    /// Unmemoized recursion, small inputs only
    Naive,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy {0:?}, expected one of full, rolling, naive")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(Strategy::Full),
            "rolling" => Ok(Strategy::Rolling),
            "naive" => Ok(Strategy::Naive),
            other => Err(UnknownStrategy(other.to_string())),
        }
    }
}

impl Strategy {
    pub fn distance<T: Eq>(self, src: &[T], tgt: &[T]) -> usize {
        match self {
            Strategy::Full => full(src, tgt),
            Strategy::Rolling => rolling(src, tgt),
            Strategy::Naive => naive(src, tgt),
        }
    }
}

/// Configuration for distance and script computations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Variant used by [`Config::distance`]
    pub strategy: Strategy,
    /// Use the tabulated script generator instead of the recursive search
    pub memoize: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            memoize: true,
        }
    }
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    #[must_use]
    pub fn with_memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }

    pub fn distance<T: Eq>(&self, src: &[T], tgt: &[T]) -> usize {
        self.strategy.distance(src, tgt)
    }

    /// Both generators return the same script, they only differ in cost.
    pub fn script<T: Eq + Clone>(&self, src: &[T], tgt: &[T]) -> EditScript<T> {
        if self.memoize {
            generate_tabulated(src, tgt)
        } else {
            generate(src, tgt)
        }
    }
}
