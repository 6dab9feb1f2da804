use aoc2023_day_3::schematic::parse_row;
use proptest::prelude::*;

/// Rows built from dot runs, short digit runs and punctuation.
///
/// Digit runs are capped so adjacent tokens never merge into a value past `u64`.
fn row_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof!["\\.{1,3}", "[0-9]{1,2}", "[*#$+@&=/%-]"],
        0..8,
    )
    .prop_map(|tokens| tokens.concat())
}

proptest! {
    #[test]
    fn render_reproduces_row(text in row_text()) {
        let row = parse_row(&text).unwrap();
        prop_assert_eq!(row.to_string(), text);
    }

    #[test]
    fn numbers_cover_digit_runs(text in row_text()) {
        let row = parse_row(&text).unwrap();
        let bytes = text.as_bytes();

        for number in row.numbers() {
            prop_assert!(number.start() <= number.end());
            prop_assert!(bytes[number.start()..=number.end()].iter().all(u8::is_ascii_digit));
            prop_assert!(number.start() == 0 || !bytes[number.start() - 1].is_ascii_digit());
            prop_assert!(bytes.get(number.end() + 1).map_or(true, |b| !b.is_ascii_digit()));
        }
    }

    #[test]
    fn symbols_match_source(text in row_text()) {
        let row = parse_row(&text).unwrap();
        let bytes = text.as_bytes();

        for symbol in row.symbols() {
            let c = char::from(bytes[symbol.pos()]);
            prop_assert_eq!(c, symbol.value());
            prop_assert!(c != '.' && !c.is_ascii_digit());
        }

        let covered: usize = row.numbers().iter().map(|n| n.width()).sum::<usize>() + row.symbols().len();
        prop_assert_eq!(covered, bytes.iter().filter(|&&b| b != b'.').count());
    }
}
