/// file loading - fee and rate tables from the original flat format
use overdue_fine_rs::{load_fee_schedule, load_rate_table, FineCalculator, ObligationPeriod};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let fees = load_fee_schedule("demos/data/base.txt")?;
    let rates = load_rate_table("demos/data/rate.txt")?;

    let period = ObligationPeriod::from_compact("20090501", "20110430", "20180831")?;
    let calculator = FineCalculator::new(&fees, &rates);

    let total = calculator.fine_for_periods(&[period])?;
    println!("total fine: {}", total.round_dp(2));

    Ok(())
}
