use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{FineError, Result};

/// span over which a periodic payment accrued, plus the date it was actually paid
///
/// `assumed_start` is inclusive at start of day; `assumed_stop` and
/// `payment_date` run through the end of their calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObligationPeriod {
    pub assumed_start: NaiveDate,
    pub assumed_stop: NaiveDate,
    pub payment_date: NaiveDate,
}

impl ObligationPeriod {
    pub fn new(
        assumed_start: NaiveDate,
        assumed_stop: NaiveDate,
        payment_date: NaiveDate,
    ) -> Result<Self> {
        if assumed_start > assumed_stop {
            return Err(FineError::InvalidPeriod {
                start: assumed_start,
                stop: assumed_stop,
            });
        }
        // a payment before the period starts would count negative days
        if payment_date < assumed_start {
            return Err(FineError::PaymentBeforeStart {
                start: assumed_start,
                payment: payment_date,
            });
        }
        Ok(Self {
            assumed_start,
            assumed_stop,
            payment_date,
        })
    }

    /// build from compact `YYYYMMDD` strings, the format the flat data files use
    pub fn from_compact(start: &str, stop: &str, payment: &str) -> Result<Self> {
        Self::new(
            parse_compact_date(start)?,
            parse_compact_date(stop)?,
            parse_compact_date(payment)?,
        )
    }

    /// month starts from `assumed_start` up to but not including `assumed_stop`,
    /// one calendar month apart
    pub fn overdue_months(&self) -> OverdueMonths {
        OverdueMonths {
            next: self.assumed_start,
            stop: self.assumed_stop,
        }
    }
}

/// iterator over the overdue months of an obligation period
#[derive(Debug, Clone)]
pub struct OverdueMonths {
    next: NaiveDate,
    stop: NaiveDate,
}

impl Iterator for OverdueMonths {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        if self.next >= self.stop {
            return None;
        }
        let current = self.next;
        self.next = current.checked_add_months(Months::new(1))?;
        Some(current)
    }
}

/// parse a compact `YYYYMMDD` date
pub fn parse_compact_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y%m%d").map_err(|e| FineError::InvalidDate {
        message: format!("{s:?}: {e}"),
    })
}
