//! Print a quick overview of the built-in catalog.

use pokedex_viewer::data::catalog::Catalog;
use pokedex_viewer::data::model::Record;
use pokedex_viewer::data::summary::{max_score, min_score};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let catalog = Catalog::shared();
    let all: Vec<&Record> = catalog.records.iter().collect();

    println!("\nSample data:");
    println!(
        "{:<12} {:<9} {:<9} {:<12} {:<12} {:>5}",
        "Name", "Type 1", "Type 2", "Prev", "Next", "Total"
    );
    for r in all.iter().take(10) {
        println!(
            "{:<12} {:<9} {:<9} {:<12} {:<12} {:>5}",
            r.name,
            r.primary_type,
            r.secondary_type.as_deref().unwrap_or("-"),
            r.prior_form.as_deref().unwrap_or("-"),
            r.next_form.as_deref().unwrap_or("-"),
            r.total_stats()
        );
    }

    println!("\nTotal Pokemon: {}", catalog.len());
    println!(
        "\nTotal Stats Range: {} - {}",
        min_score(&all)?,
        max_score(&all)?
    );
    let types: Vec<&str> = catalog.categories.iter().map(String::as_str).collect();
    println!("\nTypes available: {}", types.join(", "));
    Ok(())
}
