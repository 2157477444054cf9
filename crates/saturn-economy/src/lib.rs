//! Economy model and personnel ledger for the Saturn colony simulation.
//!
//! Everything here is a pure function of [`GameState`] or a guarded
//! mutation of it. Guarded mutations check every precondition first and
//! either apply in full or return a [`Refusal`] with the state untouched.
//!
//! # Modules
//!
//! - [`rates`] -- Metal and unstable-element production rates, accrual
//! - [`costs`] -- Cost scaling for facilities, ships, and research
//! - [`purchase`] -- `build_facility`, `build_ship`, `conduct_research`
//! - [`personnel`] -- Hiring, firing, and daily upkeep
//!
//! [`GameState`]: saturn_types::GameState
//! [`Refusal`]: saturn_types::Refusal

pub mod costs;
pub mod personnel;
pub mod purchase;
pub mod rates;

pub use costs::{
    facility_cost, next_facility_cost, next_research_cost, next_ship_cost, research_cost, ship_cost,
};
pub use personnel::{fire, hire, pay_upkeep, upkeep};
pub use purchase::{build_facility, build_ship, conduct_research, try_spend};
pub use rates::{
    accrue, exploration_multiplier, item_bonus_total, item_production_bonus, production_rate,
    unstable_elements_rate,
};
