// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters are stored in a flat array indexed by the [`Counters`] enum,
//! with one additional slot per precomputation failure reason.

use crate::memo::failure::BuildFailure;
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Copy, Clone, Debug)]
#[repr(u8)]
pub enum Counters {
    /// Solutions emitted so far.
    Solutions,
    /// Retreats from a row whose selections ran out.
    Backtracks,
    /// Row activations rejected by the viability pre-check.
    ViabilityRejections,
    /// Row activations whose feasible size window was empty.
    WindowRejections,
}

const COUNT: usize = Counters::COUNT + BuildFailure::COUNT;

#[derive(Debug, Default)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Count a precomputation rejection against its reason's slot.
    pub(crate) fn record_failure(&mut self, failure: &BuildFailure) {
        self.stats[Counters::COUNT + failure.slot()] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Total precomputation rejections, across all reasons.
    pub fn build_failures(&self) -> u64 {
        self.stats[Counters::COUNT..].iter().sum()
    }
}
