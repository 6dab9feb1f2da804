use miette::*;

use crate::calibration::{calibration_sum, Digits};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    Ok(calibration_sum(input, Digits::Spelled)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "two1nine
eightwothree
abcone2threexyz
xtwone3four
4nineeightseven2
zoneight234
7pqrstsixteen";
        assert_eq!("281", process(input)?);
        Ok(())
    }
}
