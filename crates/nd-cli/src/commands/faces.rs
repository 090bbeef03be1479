use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use nd_dice::{Die, DieKind};

pub fn run(kind: Option<&str>) -> Result<(), String> {
    let kinds = match kind {
        Some(name) => vec![super::parse_kind(name)?],
        None => DieKind::CANONICAL_ORDER.to_vec(),
    };

    for kind in kinds {
        let die = Die::by_kind(kind);
        println!(
            "  {} {} {}",
            super::paint_kind(kind).bold(),
            format!("[{}]", kind.to_char()).dimmed(),
            format!("d{}", die.sides().len()).dimmed()
        );

        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Face", "Symbols"]);
        for (i, face) in die.sides().iter().enumerate() {
            table.add_row(vec![(i + 1).to_string(), super::symbols_text(&face.symbols())]);
        }
        println!("{table}");
        println!();
    }

    Ok(())
}
