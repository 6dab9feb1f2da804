use chumsky::prelude::*;
use miette::*;

/// Parses the instruction line into floor steps: `(` goes up, `)` goes down.
fn parser<'a>() -> impl Parser<'a, &'a str, Vec<i64>, extra::Err<Rich<'a, char>>> {
    let instruction = any().try_map(|c: char, span| match c {
        '(' => Ok(1),
        ')' => Ok(-1),
        _ => Err(Rich::custom(span, format!("invalid instruction: '{c}'"))),
    });

    instruction.repeated().collect()
}

/// Surrounding whitespace is ignored; any other character is an invalid instruction.
pub fn parse(input: &str) -> Result<Vec<i64>> {
    parser()
        .parse(input.trim())
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))
}

/// Floors visited after each step, starting from the ground floor.
pub fn floors(steps: &[i64]) -> impl Iterator<Item = i64> + '_ {
    steps.iter().scan(0, |floor, step| {
        *floor += step;
        Some(*floor)
    })
}
