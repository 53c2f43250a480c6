//! Allocation engine
//!
//! Converts expenses with heterogeneous recurrence schedules, and savings
//! goals with monthly contributions, into one common unit: the amount to set
//! aside every two weeks. Also generates upcoming paycheck dates.
//!
//! Nothing here fails or performs I/O. Degenerate inputs (unknown frequency,
//! nothing left to save, paused or complete obligations) allocate zero, and
//! the only clock-dependent operation takes "today" as a parameter.

pub mod allocation;
pub mod paycheck;
pub mod rounding;
pub mod summary;

pub use allocation::{
    calculate_biweekly_allocation, calculate_goal_biweekly_allocation, PAY_PERIODS_PER_YEAR,
};
pub use paycheck::{
    generate_paycheck_dates, generate_paycheck_dates_from_now, MAX_CATCH_UP_STEPS, PAYCHECK_COUNT,
};
pub use rounding::{Fraction, Rounding};
pub use summary::{summarize_plan, AllocationLine, FundingStatus, LineKind, PlanSummary};
