use miette::*;

use crate::instructions::{floors, parse};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let steps = parse(input)?;

    let floor = floors(&steps).last().unwrap_or(0);

    Ok(floor.to_string())
}
