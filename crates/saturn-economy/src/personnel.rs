//! Personnel ledger: hiring, firing, and daily upkeep.
//!
//! Upkeep rates per head per day:
//!
//! | Role         | Upkeep | Hiring fee |
//! |--------------|--------|------------|
//! | Researcher   | 10     | 100        |
//! | Engineer     | 15     | 150        |
//! | Worker       | 8      | 80         |
//! | Cartographer | 12     | 120        |

use saturn_types::{GameState, Outcome, Personnel, Refusal, Role};
use tracing::debug;

use crate::purchase::try_spend;

/// Total metal owed per day for the given staff.
pub fn upkeep(personnel: &Personnel) -> f64 {
    Role::ALL
        .iter()
        .map(|role| f64::from(personnel.count(*role)) * role.upkeep_rate())
        .sum()
}

/// Deduct one day of upkeep, clamping metal at zero. Returns the amount
/// actually deducted.
pub fn pay_upkeep(state: &mut GameState) -> f64 {
    let owed = upkeep(&state.personnel);
    if owed <= 0.0 {
        return 0.0;
    }
    let paid = state.debit_metal(owed);
    debug!(owed, paid, day = state.day, "Personnel upkeep paid");
    paid
}

/// Hire one person. Returns the new headcount for the role.
///
/// # Errors
///
/// Returns [`Refusal::InsufficientMetal`] if the hiring fee is
/// unaffordable.
pub fn hire(state: &mut GameState, role: Role) -> Outcome<u32> {
    try_spend(state, role.hiring_fee())?;
    let count = state.personnel.count_mut(role);
    *count = count.saturating_add(1);
    Ok(*count)
}

/// Let one person go. No refund. Returns the new headcount for the role.
///
/// # Errors
///
/// Returns [`Refusal::NobodyToFire`] if the role is empty.
pub fn fire(state: &mut GameState, role: Role) -> Outcome<u32> {
    let count = state.personnel.count_mut(role);
    if *count == 0 {
        return Err(Refusal::NobodyToFire { role });
    }
    *count = count.saturating_sub(1);
    Ok(*count)
}
