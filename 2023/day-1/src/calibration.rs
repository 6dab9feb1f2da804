use miette::*;

const DIGIT_NAMES: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Which spellings count as a digit when scanning a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Digits {
    /// Only `0`..=`9`.
    Numerals,
    /// Numerals and the English names `zero`..=`nine`.
    Spelled,
}

impl Digits {
    /// The digit starting at byte `index` of `line`, if any.
    ///
    /// Names may overlap, so every index is inspected on its own.
    fn at(self, line: &str, index: usize) -> Option<u32> {
        let rest = &line[index..];
        if let Some(digit) = rest.chars().next()?.to_digit(10) {
            return Some(digit);
        }

        match self {
            Digits::Numerals => None,
            Digits::Spelled => DIGIT_NAMES
                .iter()
                .position(|name| rest.starts_with(name))
                .map(|digit| digit as u32),
        }
    }
}

/// Combines the first and last digit of `line` into a two-digit number.
pub fn calibration_value(line: &str, digits: Digits) -> Result<u32> {
    let mut found = line
        .char_indices()
        .filter_map(|(index, _)| digits.at(line, index));

    let first = found
        .next()
        .ok_or_else(|| miette!("at least one digit expected in input line: '{line}'"))?;
    let last = found.last().unwrap_or(first);

    Ok(first * 10 + last)
}

/// Sums the calibration values of every line.
pub fn calibration_sum(input: &str, digits: Digits) -> Result<u32> {
    input
        .lines()
        .enumerate()
        .map(|(index, line)| {
            calibration_value(line, digits).wrap_err_with(|| format!("on line {}", index + 1))
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("0", 0)]
    #[case("00", 0)]
    #[case("0a0", 0)]
    #[case("1", 11)]
    #[case("1a1", 11)]
    #[case("0a1", 1)]
    #[case("1a0", 10)]
    #[case("1abc2", 12)]
    #[case("pqr3stu8vwx", 38)]
    #[case("a1b2c3d4e5f", 15)]
    #[case("treb7uchet", 77)]
    #[case("two1nine", 11)]
    fn numerals(#[case] line: &str, #[case] expected: u32) -> Result<()> {
        assert_eq!(expected, calibration_value(line, Digits::Numerals)?);
        Ok(())
    }

    #[rstest]
    #[case("1abc2", 12)]
    #[case("treb7uchet", 77)]
    #[case("two1nine", 29)]
    #[case("eightwothree", 83)]
    #[case("abcone2threexyz", 13)]
    #[case("xtwone3four", 24)]
    #[case("4nineeightseven2", 42)]
    #[case("zoneight234", 14)]
    #[case("7pqrstsixteen", 76)]
    #[case("oneight", 18)]
    #[case("one", 11)]
    fn spelled(#[case] line: &str, #[case] expected: u32) -> Result<()> {
        assert_eq!(expected, calibration_value(line, Digits::Spelled)?);
        Ok(())
    }

    #[rstest]
    #[case("", Digits::Numerals)]
    #[case("abc", Digits::Numerals)]
    #[case("one", Digits::Numerals)]
    #[case("", Digits::Spelled)]
    #[case("abc", Digits::Spelled)]
    fn lines_without_digits_fail(#[case] line: &str, #[case] digits: Digits) {
        let err = calibration_value(line, digits).unwrap_err();
        assert!(err.to_string().contains("at least one digit expected"));
    }

    #[test]
    fn sum_reports_failing_line() {
        let err = calibration_sum("1\nabc\n", Digits::Numerals).unwrap_err();
        assert_eq!("on line 2", err.to_string());
    }
}
