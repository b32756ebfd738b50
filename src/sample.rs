use std::path::PathBuf;

use anyhow::Context;

use range_curve::engine::ViewWindow;
use range_curve::model::Side;
use range_curve::validate;

pub struct SampleConfig {
    pub book_path: PathBuf,
    pub order: String,
    pub side: Side,
    pub zoom: f64,
    pub steps: usize,
    pub json: bool,
}

/// Entry point for the `sample` command.
pub fn run(config: &SampleConfig) -> anyhow::Result<()> {
    let book = validate::load_and_validate(&config.book_path).map_err(|errs| {
        anyhow::anyhow!(
            "Cannot sample invalid book:\n{}",
            errs.iter()
                .map(|e| format!("  - {e}"))
                .collect::<Vec<_>>()
                .join("\n")
        )
    })?;

    let order = book
        .order(&config.order)
        .with_context(|| format!("Order '{}' not found in book '{}'", config.order, book.name))?;
    let curve = order
        .curve(config.side)
        .with_context(|| format!("Order '{}' has no {} curve", order.id, config.side))?;

    let window = ViewWindow::new(config.zoom);
    let samples = window.sample(curve, config.steps);

    if config.json {
        println!("{}", serde_json::to_string_pretty(&samples)?);
        return Ok(());
    }

    eprintln!(
        "[sample] {} {} curve: {} knots, window 0..{:.0} (zoom {:.2})",
        order.id,
        config.side,
        curve.len(),
        window.domain_max(curve),
        window.zoom_level(),
    );
    println!("{:>16}  {:>8}", "amount", "apr");
    for s in &samples {
        println!("{:>16.2}  {:>7.3}%", s.amount, s.apr);
    }
    Ok(())
}
