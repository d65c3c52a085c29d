use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FineError {
    #[error("no fine rate covers {start} through {stop}")]
    NoRateCoverage {
        start: NaiveDate,
        stop: NaiveDate,
    },

    #[error("invalid obligation period: start {start} is after stop {stop}")]
    InvalidPeriod {
        start: NaiveDate,
        stop: NaiveDate,
    },

    #[error("payment date {payment} precedes period start {start}")]
    PaymentBeforeStart {
        start: NaiveDate,
        payment: NaiveDate,
    },

    #[error("invalid rate interval: effective-from {from} is after effective-to {to}")]
    InvalidRateInterval {
        from: NaiveDate,
        to: NaiveDate,
    },

    #[error("invalid date: {message}")]
    InvalidDate {
        message: String,
    },

    #[error("malformed {kind} row at line {line}: {message}")]
    MalformedRow {
        kind: &'static str,
        line: u64,
        message: String,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, FineError>;
