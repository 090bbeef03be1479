use nd_dice::{Pool, encode_pool};

pub fn run(kinds: &[String]) -> Result<(), String> {
    let kinds = kinds
        .iter()
        .map(String::as_str)
        .map(super::parse_kind)
        .collect::<Result<Vec<_>, _>>()?;
    let pool = Pool::from_kinds(kinds);
    println!("#{}", encode_pool(&pool));
    Ok(())
}
