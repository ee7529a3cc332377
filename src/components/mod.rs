//! Simulation components: agents, the shared market, and the government.

pub mod agent;
pub mod government;
pub mod market;

pub use agent::{Agent, Role};
pub use government::Government;
pub use market::Market;
