/// annual cadence - a schedule with one assessment per year
///
/// With fewer than three distinct months in its first year the schedule is
/// treated as annual: lookups snap to the june or july assessment and the
/// amount is amortized over twelve months.
use overdue_fine_rs::chrono::NaiveDate;
use overdue_fine_rs::{
    Cadence, FeeEntry, FeeSchedule, FineCalculator, Money, ObligationPeriod, Rate, RateEntry,
    RateTable,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let fees = FeeSchedule::new(vec![
        FeeEntry::new(2009, 6, Money::from_major(24_000)),
        FeeEntry::new(2009, 7, Money::from_major(26_400)),
    ]);
    assert_eq!(fees.cadence(), Cadence::Annual);

    let rates = RateTable::new(vec![RateEntry::new(
        Rate::from_bps(5),
        NaiveDate::from_ymd_opt(2009, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2010, 12, 31).unwrap(),
    )?]);

    // first half of 2009, paid at the end of october
    let period = ObligationPeriod::from_compact("20090101", "20090701", "20091031")?;
    let calculator = FineCalculator::new(&fees, &rates);

    let breakdown = calculator.fine_for_period(&period)?;
    for month in &breakdown.months {
        println!(
            "{}: monthly fee {}, fine {}",
            month.overdue_month, month.fee, month.amount
        );
    }
    println!("total: {}", breakdown.amount);

    Ok(())
}
