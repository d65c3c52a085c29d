/// quick start - minimal example to get started
use overdue_fine_rs::chrono::NaiveDate;
use overdue_fine_rs::{
    FeeEntry, FeeSchedule, FineCalculator, Money, ObligationPeriod, Rate, RateEntry, RateTable,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // monthly fees of 1000 for spring 2009
    let fees = FeeSchedule::new(vec![
        FeeEntry::new(2009, 4, Money::from_major(1_000)),
        FeeEntry::new(2009, 5, Money::from_major(1_000)),
        FeeEntry::new(2009, 6, Money::from_major(1_000)),
    ]);

    // a single 0.05%-per-day fine rate for 2009
    let rates = RateTable::new(vec![RateEntry::new(
        Rate::from_bps(5),
        NaiveDate::from_ymd_opt(2009, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2009, 12, 31).unwrap(),
    )?]);

    // may 2009 installment, paid on may 20th
    let period = ObligationPeriod::from_compact("20090501", "20090601", "20090520")?;

    let calculator = FineCalculator::new(&fees, &rates);
    let total = calculator.fine_for_periods(&[period])?;
    println!("total fine: {total}");

    Ok(())
}
