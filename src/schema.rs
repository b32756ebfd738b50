use schemars::schema_for;

use range_curve::model::Book;

/// Generate and print the JSON Schema for `Book`.
pub fn run() -> anyhow::Result<()> {
    let schema = schema_for!(Book);
    let json = serde_json::to_string_pretty(&schema)?;
    println!("{json}");
    Ok(())
}
