//! Agent
//!
//! A single economic actor: wealth, a two-state role with hysteresis, and a
//! fixed cooperation index. Per-tick behaviors (work, consume, adapt) and
//! pairwise interactions (compete, cooperate) mutate the agent in place.

use serde::{Deserialize, Serialize};

use crate::components::market::Market;

/// Fraction of the market balance an employer can access per tick.
pub const EMPLOYER_ACCESS_RATE: f64 = 0.01;
/// Fraction of the market balance an employee can access per tick.
pub const EMPLOYEE_ACCESS_RATE: f64 = 0.005;
/// Earnings cap as a fraction of the agent's own wealth.
pub const EARNINGS_CAP_RATE: f64 = 0.1;
/// Fraction of log-wealth spent per consumption.
pub const CONSUMPTION_RATE: f64 = 0.1;
/// Fraction of own wealth granted to both parties of a cooperation.
pub const COOPERATION_RATE: f64 = 0.01;
/// Fixed amount a competition transfers from the poorer to the richer agent.
pub const COMPETITION_STAKE: f64 = 10.0;
/// Wealth ratio below which an employer is demoted.
pub const DEMOTION_RATIO: f64 = 0.9;
/// Wealth ratio above which an employee is promoted.
pub const PROMOTION_RATIO: f64 = 1.1;

/// The two mutually exclusive agent roles.
///
/// Kept as a tagged variant rather than a boolean so further roles can be
/// added without touching the hysteresis logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Employer,
    Employee,
}

impl Role {
    /// Fraction of the market balance this role can access per tick.
    pub fn access_rate(&self) -> f64 {
        match self {
            Role::Employer => EMPLOYER_ACCESS_RATE,
            Role::Employee => EMPLOYEE_ACCESS_RATE,
        }
    }

    pub fn is_employer(&self) -> bool {
        matches!(self, Role::Employer)
    }
}

/// A single agent in the population.
///
/// Agents live in a `Vec` arena with index identity; they never hold
/// references to each other, so pairwise interactions are transient calls
/// over two indices.
#[derive(Debug, Clone, Serialize)]
pub struct Agent {
    /// Current holdings; mutated by every behavior.
    pub wealth: f64,
    /// Wealth snapshot from the prior tick; read only by [`Agent::adapt`].
    pub previous_wealth: f64,
    /// Role flag; toggled by `adapt`, read by `work`.
    pub role: Role,
    /// Fixed per-agent multiplier in [0.8, 1.2] amplifying own earnings and
    /// cooperation transfers.
    pub cooperation_index: f64,
}

impl Agent {
    pub fn new(wealth: f64, role: Role, cooperation_index: f64) -> Self {
        Self {
            wealth,
            previous_wealth: wealth,
            role,
            cooperation_index,
        }
    }

    /// Draw earnings from the market.
    ///
    /// The available resource is a role-dependent fraction of the market
    /// balance; earnings are its square root (diminishing returns), capped
    /// at 10% of own wealth (self-limiting growth).
    ///
    /// The cooperation multiplier scales only the agent's gain; the market
    /// is debited the raw earnings. The asymmetry is load-bearing for
    /// market depletion behavior and is preserved deliberately.
    pub fn work(&mut self, market: &mut Market) {
        let available = market.balance() * self.role.access_rate();
        let earnings = available.sqrt().min(self.wealth * EARNINGS_CAP_RATE);
        self.wealth += earnings * self.cooperation_index;
        market.withdraw(earnings);
    }

    /// Spend a logarithmic expense into the market.
    ///
    /// Skipped when wealth would not exceed the expense. The skip doubles as
    /// the guard keeping the logarithm off non-positive wealth, so the
    /// positivity check is explicit here.
    pub fn consume(&mut self, market: &mut Market) {
        if self.wealth <= 0.0 {
            return;
        }
        let expense = self.wealth.ln() * CONSUMPTION_RATE;
        if self.wealth > expense {
            self.wealth -= expense;
            market.add_money(expense);
        }
    }

    /// Role hysteresis against the prior tick's snapshot.
    ///
    /// A drop below 90% demotes to employee, a rise above 110% promotes to
    /// employer, anything in between keeps the current role. The snapshot
    /// is refreshed unconditionally.
    pub fn adapt(&mut self) {
        if self.wealth < self.previous_wealth * DEMOTION_RATIO {
            self.role = Role::Employee;
        } else if self.wealth > self.previous_wealth * PROMOTION_RATIO {
            self.role = Role::Employer;
        }
        self.previous_wealth = self.wealth;
    }

    /// One-directional mutual benefit: the gain is computed from the
    /// initiator's wealth and index and credited to both parties. This
    /// creates net new money rather than transferring it; that is the
    /// model's design, not an accounting bug.
    pub fn cooperate(&mut self, other: &mut Agent) {
        let gain = self.wealth * COOPERATION_RATE * self.cooperation_index;
        self.wealth += gain;
        other.wealth += gain;
    }

    /// Zero-sum transfer of a fixed stake from the poorer to the richer of
    /// the pair. Only runs when the initiator is strictly richer; ties and
    /// the reverse case are no-ops.
    pub fn compete(&mut self, other: &mut Agent) {
        if self.wealth > other.wealth {
            self.wealth += COMPETITION_STAKE;
            other.wealth -= COMPETITION_STAKE;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent(wealth: f64) -> Agent {
        Agent::new(wealth, Role::Employer, 1.0)
    }

    #[test]
    fn test_work_uncapped_earnings() {
        // sqrt(10000 * 0.01) = 10, cap = 2000 * 0.1 = 200: sqrt wins
        let mut market = Market::new(10_000.0);
        let mut a = agent(2000.0);
        a.work(&mut market);
        assert!((a.wealth - 2010.0).abs() < 1e-9);
        assert!((market.balance() - 9990.0).abs() < 1e-9);
    }

    #[test]
    fn test_work_capped_by_own_wealth() {
        // sqrt(50) ~ 7.07 but cap = 50 * 0.1 = 5
        let mut market = Market::new(5000.0);
        let mut a = agent(50.0);
        a.work(&mut market);
        assert!((a.wealth - 55.0).abs() < 1e-9);
        assert!((market.balance() - 4995.0).abs() < 1e-9);
    }

    #[test]
    fn test_work_employee_rate_is_half() {
        let mut market = Market::new(10_000.0);
        let mut a = Agent::new(2000.0, Role::Employee, 1.0);
        a.work(&mut market);
        // sqrt(10000 * 0.005) = sqrt(50)
        let earnings = 50.0_f64.sqrt();
        assert!((a.wealth - (2000.0 + earnings)).abs() < 1e-9);
    }

    #[test]
    fn test_work_market_debited_raw_earnings() {
        // With a cooperation index above 1, the agent gains more than the
        // market loses.
        let mut market = Market::new(10_000.0);
        let mut a = Agent::new(2000.0, Role::Employer, 1.2);
        a.work(&mut market);
        assert!((a.wealth - 2012.0).abs() < 1e-9);
        assert!((market.balance() - 9990.0).abs() < 1e-9);
    }

    #[test]
    fn test_consume_moves_expense_to_market() {
        let mut market = Market::new(1000.0);
        let mut a = agent(100.0);
        a.consume(&mut market);
        let expense = 100.0_f64.ln() * 0.1;
        assert!((a.wealth - (100.0 - expense)).abs() < 1e-9);
        assert!((market.balance() - (1000.0 + expense)).abs() < 1e-9);
    }

    #[test]
    fn test_consume_skips_non_positive_wealth() {
        let mut market = Market::new(1000.0);
        let mut a = agent(0.0);
        a.consume(&mut market);
        assert_eq!(a.wealth, 0.0);
        assert_eq!(market.balance(), 1000.0);

        let mut b = agent(-5.0);
        b.consume(&mut market);
        assert_eq!(b.wealth, -5.0);
        assert_eq!(market.balance(), 1000.0);
    }

    #[test]
    fn test_adapt_hysteresis() {
        let mut a = agent(100.0);
        a.previous_wealth = 100.0;

        a.wealth = 89.0;
        a.adapt();
        assert_eq!(a.role, Role::Employee);
        assert_eq!(a.previous_wealth, 89.0);

        a.previous_wealth = 100.0;
        a.wealth = 111.0;
        a.adapt();
        assert_eq!(a.role, Role::Employer);

        // Unchanged wealth keeps the prior role
        a.previous_wealth = 100.0;
        a.wealth = 100.0;
        a.adapt();
        assert_eq!(a.role, Role::Employer);
        assert_eq!(a.previous_wealth, 100.0);
    }

    #[test]
    fn test_adapt_boundaries_are_exclusive() {
        let mut a = Agent::new(90.0, Role::Employer, 1.0);
        a.previous_wealth = 100.0;
        a.adapt();
        // Exactly 90% is not a drop below it
        assert_eq!(a.role, Role::Employer);

        let mut b = Agent::new(110.0, Role::Employee, 1.0);
        b.previous_wealth = 100.0;
        b.adapt();
        assert_eq!(b.role, Role::Employee);
    }

    #[test]
    fn test_cooperate_creates_new_money() {
        let mut a = Agent::new(200.0, Role::Employer, 1.2);
        let mut b = agent(50.0);
        let before = a.wealth + b.wealth;
        a.cooperate(&mut b);
        let gain = 200.0 * 0.01 * 1.2;
        assert!((a.wealth - (200.0 + gain)).abs() < 1e-9);
        assert!((b.wealth - (50.0 + gain)).abs() < 1e-9);
        assert!(((a.wealth + b.wealth) - (before + 2.0 * gain)).abs() < 1e-9);
    }

    #[test]
    fn test_compete_zero_sum() {
        let mut a = agent(100.0);
        let mut b = agent(60.0);
        let total = a.wealth + b.wealth;
        a.compete(&mut b);
        assert_eq!(a.wealth, 110.0);
        assert_eq!(b.wealth, 50.0);
        assert_eq!(a.wealth + b.wealth, total);
    }

    #[test]
    fn test_compete_tie_and_reverse_are_noops() {
        let mut a = agent(100.0);
        let mut b = agent(100.0);
        a.compete(&mut b);
        assert_eq!(a.wealth, 100.0);
        assert_eq!(b.wealth, 100.0);

        let mut poor = agent(10.0);
        let mut rich = agent(500.0);
        poor.compete(&mut rich);
        assert_eq!(poor.wealth, 10.0);
        assert_eq!(rich.wealth, 500.0);
    }
}
