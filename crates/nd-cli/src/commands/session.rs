use std::io::{self, BufRead, Write};

use colored::Colorize;

use nd_dice::{Command, Model, NumericDie, RollerConfig};

const HELP: &str = "\
  add <kind>          add a die (ability, proficiency, difficulty, challenge, boost, setback, force)
  remove <kind>       remove one die of a kind
  clear <kind>        remove every die of a kind
  upgrade <family>    upgrade ability or difficulty
  downgrade <family>  downgrade ability or difficulty
  roll                roll the pool
  empty               empty the pool
  d10 | d100          roll a numeric die
  drop-number         forget the numeric roll
  summary             print the last result as plain text
  share               print the pool encoding
  help                show this help
  quit                leave the session";

/// One parsed line of session input.
#[derive(Debug, PartialEq, Eq)]
enum Action {
    Apply(Command),
    Summary,
    Share,
    Help,
    Quit,
}

fn parse_line(line: &str) -> Result<Option<Action>, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let mut parts = trimmed.splitn(2, ' ');
    let cmd = parts.next().unwrap_or("").to_lowercase();
    let arg = parts.next().map(str::trim).unwrap_or("");

    let action = match cmd.as_str() {
        "add" => Action::Apply(Command::AddDie(super::parse_kind(arg)?)),
        "remove" => Action::Apply(Command::RemoveDie(super::parse_kind(arg)?)),
        "clear" => Action::Apply(Command::ClearKind(super::parse_kind(arg)?)),
        "upgrade" => Action::Apply(Command::Upgrade(super::parse_family(arg)?)),
        "downgrade" => Action::Apply(Command::Downgrade(super::parse_family(arg)?)),
        "roll" => Action::Apply(Command::RollPool),
        "empty" => Action::Apply(Command::EmptyPool),
        "drop-number" => Action::Apply(Command::RemoveNumericResult),
        "summary" => Action::Summary,
        "share" => Action::Share,
        "help" | "?" => Action::Help,
        "quit" | "exit" => Action::Quit,
        other => match NumericDie::parse(other) {
            Some(die) => Action::Apply(Command::RollNumeric(die)),
            None => return Err(format!("unknown command: {other} (try 'help')")),
        },
    };
    Ok(Some(action))
}

fn print_model(model: &Model, command: Command) {
    match command {
        Command::RollPool => match &model.pool_result {
            Some(result) if !model.pool.is_empty() => {
                let net = super::paint_result(&result.normalize());
                println!("  {} {}", "Result".bold(), net);
            }
            _ => println!("  {}", "(empty pool)".dimmed()),
        },
        Command::RollNumeric(_) => {
            if let Some(result) = model.numeric_result {
                println!(
                    "  {} {}",
                    format!("{}:", result.die).dimmed(),
                    result.value.to_string().bold()
                );
            }
        }
        Command::RemoveNumericResult => println!("  {}", "numeric result cleared".dimmed()),
        _ => {
            let pool = if model.pool.is_empty() {
                "(empty)".dimmed().to_string()
            } else {
                model.pool.to_string()
            };
            println!("  {} {}", "Pool".bold(), pool);
        }
    }
}

pub fn run(config: &RollerConfig, pool: &str) -> Result<(), String> {
    let mut rng = config.rng();
    let mut model = Model::from_fragment(&pool.to_uppercase());
    tracing::info!(pool = %model.pool, "session started");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{} ", ">".dimmed());
        stdout.flush().map_err(|e| format!("failed to write prompt: {e}"))?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .map_err(|e| format!("failed to read input: {e}"))?;
        if read == 0 {
            println!();
            break;
        }

        match parse_line(&line) {
            Ok(None) => {}
            Ok(Some(Action::Apply(command))) => {
                model = model.update(command, &mut rng);
                print_model(&model, command);
            }
            Ok(Some(Action::Summary)) => match model.summary() {
                Ok(summary) => println!("  {summary}"),
                Err(e) => eprintln!("  {} {e}", "error:".red()),
            },
            Ok(Some(Action::Share)) => println!("  {}", model.share_fragment()),
            Ok(Some(Action::Help)) => println!("{HELP}"),
            Ok(Some(Action::Quit)) => break,
            Err(e) => eprintln!("  {} {e}", "error:".red()),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nd_dice::{DieFamily, DieKind};

    #[test]
    fn parse_pool_commands() {
        assert_eq!(
            parse_line("add Ability").unwrap(),
            Some(Action::Apply(Command::AddDie(DieKind::Ability)))
        );
        assert_eq!(
            parse_line("  clear setback ").unwrap(),
            Some(Action::Apply(Command::ClearKind(DieKind::Setback)))
        );
        assert_eq!(
            parse_line("upgrade difficulty").unwrap(),
            Some(Action::Apply(Command::Upgrade(DieFamily::Difficulty)))
        );
        assert_eq!(
            parse_line("ROLL").unwrap(),
            Some(Action::Apply(Command::RollPool))
        );
    }

    #[test]
    fn parse_numeric() {
        assert_eq!(
            parse_line("d100").unwrap(),
            Some(Action::Apply(Command::RollNumeric(NumericDie::D100)))
        );
    }

    #[test]
    fn parse_blank_and_meta() {
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(parse_line("summary").unwrap(), Some(Action::Summary));
        assert_eq!(parse_line("exit").unwrap(), Some(Action::Quit));
    }

    #[test]
    fn parse_errors() {
        assert!(parse_line("add d20").is_err());
        assert!(parse_line("upgrade boost").is_err());
        assert!(parse_line("dance").is_err());
    }
}
