use std::path::PathBuf;

use anyhow::Context;

use range_curve::engine::{RebalanceSession, allocation_total};
use range_curve::validate;

pub struct RebalanceConfig {
    pub book_path: PathBuf,
    pub entry: String,
    pub percent: f64,
    pub deposit: f64,
    pub withdraw: f64,
}

/// Entry point for the `rebalance` command.
pub fn run(config: &RebalanceConfig) -> anyhow::Result<()> {
    let book = validate::load_and_validate(&config.book_path).map_err(|errs| {
        anyhow::anyhow!(
            "Cannot rebalance invalid book:\n{}",
            errs.iter()
                .map(|e| format!("  - {e}"))
                .collect::<Vec<_>>()
                .join("\n")
        )
    })?;
    let vault = book
        .vault
        .clone()
        .with_context(|| format!("Book '{}' has no vault", book.name))?;
    if !vault.entries.iter().any(|e| e.id == config.entry) {
        anyhow::bail!("Allocation entry '{}' not found in vault", config.entry);
    }

    let mut session = RebalanceSession::new(vault);
    session.set_deposit(config.deposit);
    session.set_withdraw(config.withdraw);
    session.set_allocation(&config.entry, config.percent);

    let total = allocation_total(session.entries());
    let errors: Vec<String> = validate::check_allocations(session.entries())
        .iter()
        .map(|e| e.to_string())
        .collect();

    eprintln!(
        "[rebalance] {} -> {:.2}%: allocated {:.4}%, vault ${:.2}, avg APY {:.3}%",
        config.entry,
        config.percent,
        total,
        session.metrics().total_vault_value,
        session.metrics().average_apy,
    );
    if !session.can_save() {
        eprintln!("[rebalance] save blocked: {}", errors.join("; "));
    }

    let out = serde_json::json!({
        "entries": session.entries(),
        "metrics": session.metrics(),
        "allocation_total": total,
        "can_save": session.can_save(),
        "errors": errors,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
