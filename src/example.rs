use range_curve::model::preset;
use range_curve::model::*;

/// Print an example book JSON to stdout.
pub fn run() -> anyhow::Result<()> {
    let book = example_book()?;
    let json = serde_json::to_string_pretty(&book)?;
    println!("{json}");
    Ok(())
}

fn example_book() -> anyhow::Result<Book> {
    let balanced = preset::find("balanced").ok_or_else(|| anyhow::anyhow!("missing preset"))?;
    let conservative =
        preset::find("conservative").ok_or_else(|| anyhow::anyhow!("missing preset"))?;
    let aggressive = preset::find("aggressive").ok_or_else(|| anyhow::anyhow!("missing preset"))?;

    let mut book = Book {
        name: "USDC Range Desk".to_string(),
        description: Some(
            "Three USDC range orders: a balanced lend curve, a wide-gap conservative \
             borrow curve, and a two-way aggressive order. The vault keeps 10% idle."
                .to_string(),
        ),
        orders: vec![
            RangeOrder {
                id: "usdc_lend_balanced".into(),
                market: "USDC".into(),
                lend: Some(Curve::from_preset(Side::Lend, &balanced, CurveBounds::default())),
                borrow: None,
            },
            RangeOrder {
                id: "usdc_borrow_conservative".into(),
                market: "USDC".into(),
                lend: None,
                borrow: Some(Curve::from_preset(
                    Side::Borrow,
                    &conservative,
                    CurveBounds::wide_gap(),
                )),
            },
            RangeOrder {
                id: "usdc_two_way".into(),
                market: "USDC".into(),
                lend: Some(Curve::from_preset(Side::Lend, &aggressive, CurveBounds::default())),
                borrow: Some(Curve::from_preset(
                    Side::Borrow,
                    &conservative,
                    CurveBounds::default(),
                )),
            },
        ],
        vault: Some(VaultSnapshot {
            metrics: RebalanceMetrics {
                total_vault_value: 1_000_000.0,
                unallocated_value: 100_000.0,
                allocated_value: 0.0,
                average_apy: 0.0,
            },
            entries: vec![
                AllocationEntry::new(
                    "usdc_lend_balanced",
                    50.0,
                    750_000.0,
                    OrderRates::Lend { lend_apr: 19.0 },
                ),
                AllocationEntry::new(
                    "usdc_borrow_conservative",
                    30.0,
                    400_000.0,
                    OrderRates::Borrow { borrow_apr: 6.0 },
                ),
                AllocationEntry::new(
                    "usdc_two_way",
                    10.0,
                    250_000.0,
                    OrderRates::TwoWay {
                        lend_apr: 30.0,
                        borrow_apr: 8.0,
                    },
                ),
            ],
        }),
    };
    book.refresh_derived();
    Ok(book)
}
