use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{FineError, Result};
use crate::rates::RateTable;
use crate::schedule::FeeSchedule;
use crate::types::ObligationPeriod;

use super::daycount::chargeable_days;

/// fine apportioned to one constant-rate slice of an overdue month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentFine {
    pub rate: Rate,
    /// last day charged at this rate
    pub through: NaiveDate,
    pub days: i64,
    pub amount: Money,
}

/// fine breakdown for a single overdue month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyFine {
    pub overdue_month: NaiveDate,
    pub fee: Money,
    pub chargeable_days: i64,
    pub amount: Money,
    pub segments: Vec<SegmentFine>,
}

/// fine breakdown for one obligation period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodFine {
    pub period: ObligationPeriod,
    pub amount: Money,
    pub months: Vec<MonthlyFine>,
}

impl PeriodFine {
    /// pretty-printed json breakdown
    pub fn json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// computes overdue fines from a fee schedule and a rate table
///
/// Both inputs are borrowed read-only; the calculator holds no state of its
/// own, so one instance can serve any number of periods.
pub struct FineCalculator<'a> {
    fees: &'a FeeSchedule,
    rates: &'a RateTable,
}

impl<'a> FineCalculator<'a> {
    pub fn new(fees: &'a FeeSchedule, rates: &'a RateTable) -> Self {
        Self { fees, rates }
    }

    /// total fine across independent obligation periods
    pub fn fine_for_periods(&self, periods: &[ObligationPeriod]) -> Result<Money> {
        let mut total = Money::ZERO;
        for period in periods {
            total += self.fine_for_period(period)?.amount;
        }
        Ok(total)
    }

    /// fine for one obligation period, month by month
    pub fn fine_for_period(&self, period: &ObligationPeriod) -> Result<PeriodFine> {
        let mut months = Vec::new();
        let mut total = Money::ZERO;
        for overdue_month in period.overdue_months() {
            let monthly = self.fine_for_month(overdue_month, period.payment_date)?;
            total += monthly.amount;
            months.push(monthly);
        }
        Ok(PeriodFine {
            period: *period,
            amount: total,
            months,
        })
    }

    /// fine for a single overdue month, apportioned across rate segments
    ///
    /// Segments are walked ascending by effective-to; each slice is charged
    /// the days between the previous boundary and its own, so boundaries are
    /// shared instants with no gap and no double count. The final segment
    /// runs through the payment itself rather than its table bound.
    pub fn fine_for_month(
        &self,
        overdue_month: NaiveDate,
        payment_date: NaiveDate,
    ) -> Result<MonthlyFine> {
        let segments = self.rates.filter_by_overlap(overdue_month, payment_date);
        if segments.is_empty() {
            return Err(FineError::NoRateCoverage {
                start: overdue_month,
                stop: payment_date,
            });
        }

        let fee = self.fees.fee_for_month(overdue_month);
        let last = segments.len() - 1;

        let mut breakdown = Vec::with_capacity(segments.len());
        let mut charged_days = 0_i64;
        let mut total = Money::ZERO;
        for (i, segment) in segments.iter().enumerate() {
            let through = if i == last {
                payment_date
            } else {
                segment.effective_to
            };
            let slice = charge_segment(
                fee,
                segment.rate,
                through,
                chargeable_days(overdue_month, through),
                charged_days,
            );
            charged_days += slice.days;
            total += slice.amount;
            breakdown.push(slice);
        }

        Ok(MonthlyFine {
            overdue_month,
            fee,
            chargeable_days: charged_days,
            amount: total,
            segments: breakdown,
        })
    }
}

/// charge for one rate segment, given the cumulative day count through its
/// boundary and the days already charged to earlier segments
fn charge_segment(
    fee: Money,
    rate: Rate,
    through: NaiveDate,
    cumulative_days: i64,
    charged_days: i64,
) -> SegmentFine {
    let days = cumulative_days - charged_days;
    SegmentFine {
        rate,
        through,
        days,
        amount: fee.charge(rate, days),
    }
}
