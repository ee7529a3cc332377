//! Market
//!
//! A pooled wealth balance shared by the whole population. Every agent's
//! work draws from it and every consumption deposits into it; government
//! redistribution is agent-to-agent and never touches it.

use serde::Serialize;

/// Balance below which the band-control rule injects money.
pub const BAND_FLOOR: f64 = 2000.0;
/// Balance above which the band-control rule drains money.
pub const BAND_CEILING: f64 = 8000.0;
/// Amount injected or drained by one band-control correction.
pub const BAND_CORRECTION: f64 = 500.0;

/// The shared market pool.
///
/// The balance is not hard-clamped to non-negative; the update rules keep it
/// economically meaningful in practice but do not enforce it.
#[derive(Debug, Clone, Serialize)]
pub struct Market {
    balance: f64,
}

impl Market {
    pub fn new(initial_balance: f64) -> Self {
        Self {
            balance: initial_balance,
        }
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Unconditional deposit.
    pub fn add_money(&mut self, amount: f64) {
        self.balance += amount;
    }

    /// Unconditional withdrawal; not routed through any agent.
    pub fn withdraw(&mut self, amount: f64) {
        self.balance -= amount;
    }

    /// Band-control rule keeping the balance near its target range: below
    /// the floor inject a fixed correction, above the ceiling drain it, and
    /// do nothing in between.
    pub fn adjust_conditions(&mut self) {
        if self.balance < BAND_FLOOR {
            self.add_money(BAND_CORRECTION);
        } else if self.balance > BAND_CEILING {
            self.balance -= BAND_CORRECTION;
        }
    }
}
