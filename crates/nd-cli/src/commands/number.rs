use colored::Colorize;

use nd_dice::{NumericDie, RollerConfig};

pub fn run(config: &RollerConfig, die: &str, times: u32) -> Result<(), String> {
    let die = NumericDie::parse(die)
        .ok_or_else(|| format!("unknown numeric die '{die}' (expected d10 or d100)"))?;

    let mut rng = config.rng();
    for _ in 0..times {
        let result = die.roll(&mut rng);
        println!("  {} {}", format!("{die}:").dimmed(), result.value.to_string().bold());
    }
    Ok(())
}
