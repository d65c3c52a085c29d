use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;

/// fewer distinct months than this in the first year marks a schedule as annual
const ANNUAL_DETECTION_THRESHOLD: usize = 3;

/// assessment month used for annual schedules probed in the first half of the year
const FIRST_HALF_ASSESSMENT_MONTH: u32 = 6;
/// assessment month used for annual schedules probed after june
const SECOND_HALF_ASSESSMENT_MONTH: u32 = 7;

/// billing cadence of a fee schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cadence {
    /// each entry is one month's fee
    Monthly,
    /// each entry is an annual assessment amortized over twelve months
    Annual,
}

/// fee owed for one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeeEntry {
    pub year: i32,
    pub month: u32,
    pub amount: Money,
}

impl FeeEntry {
    pub fn new(year: i32, month: u32, amount: Money) -> Self {
        Self {
            year,
            month,
            amount,
        }
    }

    /// fee derived from a base amount and the two contribution percentages
    pub fn from_components(
        year: i32,
        month: u32,
        base: Decimal,
        payment_percent: Decimal,
        institution_percent: Decimal,
    ) -> Self {
        Self::new(
            year,
            month,
            Money::from_decimal(base * payment_percent * institution_percent),
        )
    }
}

/// per-month fee amounts in source order
///
/// Insertion order is preserved for diagnostics; when duplicate (year, month)
/// rows exist the first one wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeeSchedule {
    entries: Vec<FeeEntry>,
}

impl FeeSchedule {
    pub fn new(entries: Vec<FeeEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[FeeEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// detect the billing cadence from the whole dataset
    ///
    /// Annual schedules carry at most a couple of assessment rows per year,
    /// so fewer than three distinct months in the first loaded year means the
    /// amounts are yearly and must be amortized.
    pub fn cadence(&self) -> Cadence {
        let first_year = match self.entries.first() {
            Some(entry) => entry.year,
            None => return Cadence::Monthly,
        };
        let mut months: Vec<u32> = self
            .entries
            .iter()
            .filter(|entry| entry.year == first_year)
            .map(|entry| entry.month)
            .collect();
        months.sort_unstable();
        months.dedup();
        if months.len() < ANNUAL_DETECTION_THRESHOLD {
            Cadence::Annual
        } else {
            Cadence::Monthly
        }
    }

    /// fee applicable to the month of `date`; zero when no entry matches
    ///
    /// Annual schedules are evaluated as of a fixed mid-year checkpoint:
    /// the target month snaps to july after june, to june otherwise, and the
    /// matched amount is divided by twelve.
    pub fn fee_for_month(&self, date: NaiveDate) -> Money {
        let (month, divisor) = match self.cadence() {
            Cadence::Monthly => (date.month(), Decimal::ONE),
            Cadence::Annual => {
                let month = if date.month() > FIRST_HALF_ASSESSMENT_MONTH {
                    SECOND_HALF_ASSESSMENT_MONTH
                } else {
                    FIRST_HALF_ASSESSMENT_MONTH
                };
                (month, dec!(12))
            }
        };

        self.entries
            .iter()
            .find(|entry| entry.year == date.year() && entry.month == month)
            .map(|entry| entry.amount / divisor)
            .unwrap_or(Money::ZERO)
    }
}
