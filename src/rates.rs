use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::Rate;
use crate::errors::{FineError, Result};

/// fine rate in force over an interval of whole days, both bounds inclusive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateEntry {
    pub rate: Rate,
    pub effective_from: NaiveDate,
    pub effective_to: NaiveDate,
}

impl RateEntry {
    pub fn new(rate: Rate, effective_from: NaiveDate, effective_to: NaiveDate) -> Result<Self> {
        if effective_from > effective_to {
            return Err(FineError::InvalidRateInterval {
                from: effective_from,
                to: effective_to,
            });
        }
        Ok(Self {
            rate,
            effective_from,
            effective_to,
        })
    }

    fn overlaps(&self, start: NaiveDate, stop: NaiveDate) -> bool {
        self.effective_to >= start && self.effective_from <= stop
    }
}

/// time-varying overdue fine rates
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RateTable {
    entries: Vec<RateEntry>,
}

impl RateTable {
    pub fn new(entries: Vec<RateEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[RateEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// entries whose interval intersects `[start, stop]`, ascending by
    /// effective-to; may be empty, the caller decides whether that is fatal
    pub fn filter_by_overlap(&self, start: NaiveDate, stop: NaiveDate) -> Vec<RateEntry> {
        let mut matched: Vec<RateEntry> = self
            .entries
            .iter()
            .filter(|entry| entry.overlaps(start, stop))
            .copied()
            .collect();
        matched.sort_by_key(|entry| entry.effective_to);
        matched
    }
}
