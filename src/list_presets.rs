use range_curve::model::preset;

/// Print the built-in curve presets as a table.
pub fn run() -> anyhow::Result<()> {
    println!("Available Presets");
    println!("=================");
    for (i, p) in preset::all().iter().enumerate() {
        println!();
        println!("{}. {}", i + 1, p.name);
        println!("   {}", p.description);
        println!("   {:>14}  {:>7}  {:>6}", "amount", "pct", "apr");
        for pt in &p.points {
            println!(
                "   {:>14.0}  {:>6.2}%  {:>5.1}%",
                pt.amount, pt.percentage, pt.apr
            );
        }
    }
    Ok(())
}
