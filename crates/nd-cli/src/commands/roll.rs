use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use nd_dice::{RollerConfig, decode_pool, encode_pool};

pub fn run(
    config: &RollerConfig,
    encoded: &str,
    upgrades: &[String],
    downgrades: &[String],
    show_dice: bool,
    json: bool,
) -> Result<(), String> {
    let mut pool = decode_pool(&encoded.to_uppercase()).sort();
    // Upgrades run first, whatever order the flags were given in.
    for family in upgrades {
        pool = pool.upgrade(super::parse_family(family)?);
    }
    for family in downgrades {
        pool = pool.downgrade(super::parse_family(family)?);
    }

    if pool.is_empty() {
        return Err("pool is empty; nothing to roll".into());
    }

    let mut rng = config.rng();
    let result = pool.roll(&mut rng);
    let net = result.normalize();

    if json {
        let value = serde_json::json!({
            "pool": encode_pool(&pool),
            "dice": result.die_results,
            "aggregate": result.aggregate(),
            "net": net,
            "summary": net.to_string(),
        });
        let out = serde_json::to_string_pretty(&value)
            .map_err(|e| format!("failed to serialize result: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    println!(
        "  {} {} {}",
        "Pool".bold(),
        encode_pool(&pool),
        format!("({} dice)", pool.len()).dimmed()
    );

    if show_dice {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["#", "Die", "Face"]);
        for (i, die_result) in result.die_results.iter().enumerate() {
            table.add_row(vec![
                (i + 1).to_string(),
                die_result.kind.to_string(),
                super::symbols_text(&die_result.symbols),
            ]);
        }
        println!("{table}");
    }

    println!("  {} {}", "Result".bold(), super::paint_result(&net));
    Ok(())
}
