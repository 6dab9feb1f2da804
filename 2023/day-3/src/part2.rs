use miette::*;

use crate::schematic::parse_schematic;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let schematic = parse_schematic(input.lines())?;

    Ok(schematic.sum_gear_ratios()?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..";
        assert_eq!("467835", process(input)?);
        Ok(())
    }

    #[test]
    fn empty_input_has_no_gears() -> Result<()> {
        assert_eq!("0", process("")?);
        Ok(())
    }
}
