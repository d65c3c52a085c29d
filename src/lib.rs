pub mod decimal;
pub mod errors;
pub mod fine;
pub mod loader;
pub mod rates;
pub mod schedule;
pub mod types;

// re-export key types
pub use decimal::{Money, Rate};
pub use errors::{FineError, Result};
pub use fine::{
    chargeable_days, FineCalculator, MonthlyFine, PeriodFine, SegmentFine, GRACE_PERIOD_DAYS,
};
pub use loader::{load_fee_schedule, load_rate_table, read_fee_schedule, read_rate_table};
pub use rates::{RateEntry, RateTable};
pub use schedule::{Cadence, FeeEntry, FeeSchedule};
pub use types::{parse_compact_date, ObligationPeriod};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
