pub mod calculator;
pub mod daycount;

pub use calculator::{FineCalculator, MonthlyFine, PeriodFine, SegmentFine};
pub use daycount::{chargeable_days, GRACE_PERIOD_DAYS};
