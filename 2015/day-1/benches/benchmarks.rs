use aoc2015_day_1::*;

fn main() {
    // Run registered benchmarks.
    divan::main();
}

const INPUT: &str = "((())()(()))(()())))((()()(()()))(())";

#[divan::bench]
fn part1() {
    part1::process(divan::black_box(INPUT)).unwrap();
}

#[divan::bench]
fn part2() {
    part2::process(divan::black_box(INPUT)).unwrap();
}
