/// rate segmentation - an overdue window spanning a rate change
use overdue_fine_rs::chrono::NaiveDate;
use overdue_fine_rs::{
    FeeEntry, FeeSchedule, FineCalculator, Money, ObligationPeriod, Rate, RateEntry, RateTable,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let fees = FeeSchedule::new(vec![
        FeeEntry::new(2009, 5, Money::from_major(1_000)),
        FeeEntry::new(2009, 6, Money::from_major(1_000)),
        FeeEntry::new(2009, 7, Money::from_major(1_000)),
    ]);

    // the fine rate rose on july 1st
    let rates = RateTable::new(vec![
        RateEntry::new(Rate::from_bps(5), date(2009, 1, 1), date(2009, 6, 30))?,
        RateEntry::new(Rate::from_bps(6), date(2009, 7, 1), date(2009, 12, 31))?,
    ]);

    let period = ObligationPeriod::from_compact("20090501", "20090801", "20090904")?;
    let calculator = FineCalculator::new(&fees, &rates);

    let breakdown = calculator.fine_for_period(&period)?;
    for month in &breakdown.months {
        println!(
            "{}: {} chargeable days, fine {}",
            month.overdue_month, month.chargeable_days, month.amount
        );
        for segment in &month.segments {
            println!(
                "  {} days at {} through {}: {}",
                segment.days, segment.rate, segment.through, segment.amount
            );
        }
    }
    println!("total: {}", breakdown.amount);

    // the same breakdown as json
    println!("{}", breakdown.json());

    Ok(())
}
