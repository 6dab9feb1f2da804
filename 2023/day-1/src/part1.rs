use miette::*;

use crate::calibration::{calibration_sum, Digits};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    Ok(calibration_sum(input, Digits::Numerals)?.to_string())
}
