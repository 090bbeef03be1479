pub mod encode;
pub mod faces;
pub mod number;
pub mod roll;
pub mod session;

use colored::{ColoredString, Colorize};
use nd_dice::{DieFamily, DieKind, NormalizedPoolResult, Symbol};

/// Parse a family name, with a CLI-friendly error.
fn parse_family(s: &str) -> Result<DieFamily, String> {
    DieFamily::parse(s)
        .ok_or_else(|| format!("unknown family '{s}' (expected ability or difficulty)"))
}

/// Parse a die kind name, with a CLI-friendly error.
fn parse_kind(s: &str) -> Result<DieKind, String> {
    s.parse::<DieKind>().map_err(|e| e.to_string())
}

/// A die kind name in its table colour.
fn paint_kind(kind: DieKind) -> ColoredString {
    let name = kind.to_string();
    match kind {
        DieKind::Ability => name.green(),
        DieKind::Proficiency => name.yellow(),
        DieKind::Difficulty => name.purple(),
        DieKind::Challenge => name.red(),
        DieKind::Boost => name.cyan(),
        DieKind::Setback => name.dimmed(),
        DieKind::Force => name.white().bold(),
    }
}

fn paint_symbol(symbol: Symbol, text: String) -> ColoredString {
    match symbol {
        Symbol::Success | Symbol::Advantage => text.green(),
        Symbol::Triumph => text.yellow().bold(),
        Symbol::Failure | Symbol::Threat => text.red(),
        Symbol::Despair => text.red().bold(),
        Symbol::LightSide => text.white().bold(),
        Symbol::DarkSide => text.purple(),
    }
}

/// Coloured net result, e.g. "2 Successes, 1 Threat".
fn paint_result(result: &NormalizedPoolResult) -> String {
    if result.is_empty() {
        return "Blank".dimmed().to_string();
    }
    result
        .iter()
        .map(|(symbol, count)| {
            paint_symbol(symbol, format!("{count} {}", symbol.label(count))).to_string()
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Face content as text, e.g. "Success + Advantage".
fn symbols_text(symbols: &[Symbol]) -> String {
    if symbols.is_empty() {
        "—".to_string()
    } else {
        symbols
            .iter()
            .map(Symbol::to_string)
            .collect::<Vec<_>>()
            .join(" + ")
    }
}
