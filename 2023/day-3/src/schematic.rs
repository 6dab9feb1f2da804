use std::fmt;
use std::ops::RangeInclusive;

use chumsky::prelude::*;
use itertools::Itertools;
use miette::*;
use rayon::prelude::*;

/// The only symbol that can act as a gear.
pub const GEAR: char = '*';

/// A maximal run of digits inside a single row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Number {
    start: usize,
    end: usize,
    value: u64,
}

impl Number {
    pub fn new(start: usize, end: usize, value: u64) -> Self {
        debug_assert!(start <= end, "number span {start}..={end} is inverted");
        Self { start, end, value }
    }

    /// First column of the run.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Last column of the run (inclusive).
    pub fn end(&self) -> usize {
        self.end
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    /// Number of columns covered by the digits.
    pub fn width(&self) -> usize {
        self.end - self.start + 1
    }

    /// The digit span widened by one column on each side.
    ///
    /// A number touching the left border starts its range at `start + 1` instead of
    /// clamping to column 0, so a symbol straight above or below column 0 is not
    /// considered adjacent.
    pub fn extended_range(&self) -> RangeInclusive<usize> {
        let start = if self.start > 0 {
            self.start - 1
        } else {
            self.start + 1
        };
        start..=self.end + 1
    }

    /// Whether `symbol`, located `offset` rows away from this number, touches it.
    pub fn is_adjacent(&self, symbol: &Symbol, offset: RowOffset) -> bool {
        let range = self.extended_range();
        match offset {
            // Every column inside the run is a digit, so only the borders can hold a symbol.
            RowOffset::Same => symbol.pos == *range.start() || symbol.pos == *range.end(),
            RowOffset::Above | RowOffset::Below => range.contains(&symbol.pos),
        }
    }
}

/// A single non-digit, non-`.` character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pos: usize,
    value: char,
}

impl Symbol {
    pub fn new(pos: usize, value: char) -> Self {
        Self { pos, value }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn value(&self) -> char {
        self.value
    }
}

/// Where a symbol's row sits relative to a number's row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOffset {
    Above,
    Same,
    Below,
}

impl RowOffset {
    /// The same relation seen from the other row.
    pub fn inverse(self) -> Self {
        match self {
            RowOffset::Above => RowOffset::Below,
            RowOffset::Same => RowOffset::Same,
            RowOffset::Below => RowOffset::Above,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    width: usize,
    numbers: Vec<Number>,
    symbols: Vec<Symbol>,
}

impl Row {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn numbers(&self) -> &[Number] {
        &self.numbers
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Panics if `index` is out of range.
    pub fn number(&self, index: usize) -> &Number {
        assert!(
            index < self.numbers.len(),
            "number index {index} out of range for row with {} numbers",
            self.numbers.len()
        );
        &self.numbers[index]
    }

    /// Panics if `index` is out of range.
    pub fn symbol(&self, index: usize) -> &Symbol {
        assert!(
            index < self.symbols.len(),
            "symbol index {index} out of range for row with {} symbols",
            self.symbols.len()
        );
        &self.symbols[index]
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cells = vec!['.'; self.width];

        for number in &self.numbers {
            // Zero padding restores leading zeros such as in `007`.
            let digits = format!("{:0width$}", number.value, width = number.width());
            for (cell, digit) in cells[number.start..=number.end].iter_mut().zip(digits.chars()) {
                *cell = digit;
            }
        }

        for symbol in &self.symbols {
            cells[symbol.pos] = symbol.value;
        }

        f.write_str(&cells.into_iter().collect::<String>())
    }
}

/// The parsed engine schematic. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schematic {
    rows: Vec<Row>,
}

impl Schematic {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Panics if `index` is out of range.
    pub fn row(&self, index: usize) -> &Row {
        assert!(
            index < self.rows.len(),
            "row index {index} out of range for schematic with {} rows",
            self.rows.len()
        );
        &self.rows[index]
    }

    /// Row indices around `row` together with their position relative to it.
    fn neighbourhood(&self, row: usize) -> impl Iterator<Item = (usize, RowOffset)> {
        let above = row.checked_sub(1).map(|above| (above, RowOffset::Above));
        let below = (row + 1 < self.rows.len()).then_some((row + 1, RowOffset::Below));

        above
            .into_iter()
            .chain(std::iter::once((row, RowOffset::Same)))
            .chain(below)
    }

    /// A number is a part number when any symbol in the surrounding rows touches it.
    pub fn is_part_number(&self, row: usize, number: usize) -> bool {
        let number = self.row(row).number(number);

        self.neighbourhood(row).any(|(other, offset)| {
            self.rows[other]
                .symbols
                .iter()
                .any(|symbol| number.is_adjacent(symbol, offset))
        })
    }

    /// Sum of every part number. Fails if the total does not fit in `u64`.
    pub fn sum_part_numbers(&self) -> Result<u64> {
        self.rows()
            .par_iter()
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .numbers
                    .iter()
                    .enumerate()
                    .filter(|&(index, _)| self.is_part_number(row, index))
                    .try_fold(0u64, |sum, (_, number)| checked_add(sum, number.value))
            })
            .try_reduce(|| 0, checked_add)
    }

    /// The two part numbers around a `*` touching exactly two of them.
    pub fn gear_numbers(&self, row: usize, symbol: usize) -> Option<(u64, u64)> {
        let gear = self.row(row).symbol(symbol);
        if gear.value != GEAR {
            return None;
        }

        let mut adjacent = Vec::with_capacity(2);

        for (other, offset) in self.neighbourhood(row) {
            for (index, number) in self.rows[other].numbers.iter().enumerate() {
                // `offset` is relative to the gear; adjacency is asked from the number's row.
                if !number.is_adjacent(gear, offset.inverse()) || !self.is_part_number(other, index)
                {
                    continue;
                }

                if adjacent.len() == 2 {
                    tracing::trace!(row, pos = gear.pos, "more than two numbers around gear");
                    return None;
                }
                adjacent.push(number.value);
            }
        }

        match adjacent[..] {
            [first, second] => Some((first, second)),
            _ => None,
        }
    }

    /// Returns the gear ratio when the symbol is a `*` touching exactly two part numbers.
    ///
    /// Fails if the product does not fit in `u64`.
    pub fn gear_ratio(&self, row: usize, symbol: usize) -> Result<Option<u64>> {
        let Some((first, second)) = self.gear_numbers(row, symbol) else {
            return Ok(None);
        };

        let ratio = first
            .checked_mul(second)
            .ok_or_else(|| miette!("gear ratio {first} * {second} overflows u64"))?;
        tracing::trace!(row, symbol, ratio, "found gear");

        Ok(Some(ratio))
    }

    pub fn is_gear(&self, row: usize, symbol: usize) -> bool {
        self.gear_numbers(row, symbol).is_some()
    }

    /// Sum of every gear ratio. Fails if a ratio or the total does not fit in `u64`.
    pub fn sum_gear_ratios(&self) -> Result<u64> {
        self.rows()
            .par_iter()
            .enumerate()
            .map(|(row, cells)| {
                (0..cells.symbols.len()).try_fold(0u64, |sum, symbol| {
                    match self.gear_ratio(row, symbol)? {
                        Some(ratio) => checked_add(sum, ratio),
                        None => Ok(sum),
                    }
                })
            })
            .try_reduce(|| 0, checked_add)
    }
}

fn checked_add(sum: u64, value: u64) -> Result<u64> {
    sum.checked_add(value)
        .ok_or_else(|| miette!("sum {sum} + {value} overflows u64"))
}

impl fmt::Display for Schematic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rows.iter().join("\n"))
    }
}

#[derive(Debug, Clone)]
enum Cell {
    Number(Number),
    Symbol(Symbol),
}

fn row_parser<'a>() -> impl Parser<'a, &'a str, Vec<Cell>, extra::Err<Rich<'a, char>>> {
    let blank = just('.').repeated().at_least(1).to(None);

    let number = text::digits(10)
        .to_slice()
        .try_map(|digits: &str, span: SimpleSpan| {
            let value = digits
                .parse::<u64>()
                .map_err(|e| Rich::custom(span, format!("number {digits} is too large: {e}")))?;
            Ok(Some(Cell::Number(Number::new(span.start, span.end - 1, value))))
        });

    let symbol = any()
        .filter(|c: &char| *c != '.' && !c.is_ascii_digit())
        .map_with(|c, e| {
            let span: SimpleSpan = e.span();
            Some(Cell::Symbol(Symbol::new(span.start, c)))
        });

    choice((blank, number, symbol))
        .repeated()
        .collect::<Vec<_>>()
        .map(|cells| cells.into_iter().flatten().collect())
}

/// Parses a single line of the schematic.
pub fn parse_row(line: &str) -> Result<Row> {
    let cells = row_parser()
        .parse(line)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    // Spans are byte offsets; rows are addressed by character column.
    let mut columns = vec![0; line.len() + 1];
    for (column, (offset, _)) in line.char_indices().enumerate() {
        columns[offset] = column;
    }

    let (numbers, symbols) = cells.into_iter().fold(
        (Vec::new(), Vec::new()),
        |(mut numbers, mut symbols), cell| {
            match cell {
                // Digits are ASCII, so a run is as many columns wide as it is bytes long.
                Cell::Number(number) => {
                    let start = columns[number.start];
                    numbers.push(Number::new(start, start + number.width() - 1, number.value));
                }
                Cell::Symbol(symbol) => symbols.push(Symbol::new(columns[symbol.pos], symbol.value)),
            }
            (numbers, symbols)
        },
    );

    Ok(Row {
        width: line.chars().count(),
        numbers,
        symbols,
    })
}

/// Parses every line into a row, keeping their order.
pub fn parse_schematic<'a>(lines: impl IntoIterator<Item = &'a str>) -> Result<Schematic> {
    let rows = lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| parse_row(line).wrap_err_with(|| format!("in schematic row {index}")))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(rows = rows.len(), "parsed schematic");

    Ok(Schematic { rows })
}
