use miette::*;

use crate::instructions::{floors, parse};

const BASEMENT: i64 = -1;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let steps = parse(input)?;

    // Instructions are numbered from 1.
    let position = floors(&steps)
        .position(|floor| floor == BASEMENT)
        .map(|index| index + 1)
        .ok_or_else(|| miette!("no 'enter the basement' instruction found"))?;

    Ok(position.to_string())
}
