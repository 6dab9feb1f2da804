use miette::*;

use crate::schematic::parse_schematic;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let schematic = parse_schematic(input.lines())?;

    Ok(schematic.sum_part_numbers()?.to_string())
}
