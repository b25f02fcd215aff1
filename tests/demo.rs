extern crate radix;

use radix::converter::notation_parsers::parse_notation;
use radix::converter::{base_to_decimal, breakdown, decimal_to_base, Radix};
use radix::demo::Demo;

fn demo_output() -> String {
    let mut demo = Demo::new(Vec::<u8>::new());
    demo.run().unwrap();
    String::from_utf8(demo.into_inner()).unwrap()
}

#[test]
fn demo_opens_and_closes_with_rules() {
    let output = demo_output();
    let rule = "=".repeat(60);
    let header = format!("{}\nCHAPTER 4: Number Systems\n{}\n", rule, rule);
    let footer = format!("- Formula: N = Σ(digit × base^position)\n{}\n", rule);
    assert!(output.starts_with(&header));
    assert!(output.ends_with(&footer));
}

#[test]
fn demo_shows_111_in_each_base() {
    let output = demo_output();
    assert!(output.contains("Decimal (base 10): 111\n"));
    assert!(output.contains("Binary (base 2):   1101111\n"));
    assert!(output.contains("Octal (base 8):    157\n"));
    assert!(output.contains("Hex (base 16):     6F\n"));
}

#[test]
fn demo_expands_the_binary_example() {
    let output = demo_output();
    assert!(output.contains(
        "\nPositional notation for (1101111)_2:\n  1 × 2^6 = 1 × 64 = 64\n"
    ));
    assert!(output.contains("  Total: 111\nResult: (1101111)_2 = (111)_10\n"));
}

#[test]
fn demo_works_the_octal_and_hex_sums() {
    let output = demo_output();
    assert!(output.contains(
        "Octal number: (27)_8\nCalculation: (2 × 8^1) + (7 × 8^0)\n"
    ));
    assert!(output.contains("           = 16 + 7\n           = 23\n"));
    assert!(output.contains(
        "Note: F in hex = 15 in decimal\nCalculation: (2 × 16^1) + (15 × 16^0)\n"
    ));
    assert!(output.contains("           = 32 + 15\n           = 47\n"));
}

#[test]
fn demo_right_aligns_255() {
    let output = demo_output();
    assert!(output.contains("Decimal: 255\n"));
    assert!(output.contains("Binary:              11111111 (base 2)\n"));
    assert!(output.contains("Octal:                    377 (base 8)\n"));
    assert!(output.contains("Hexadecimal:               FF (base 16)\n"));
}

#[test]
fn explained_notation_matches_conversion() {
    for text in &["(1101111)_2", "(27)_8", "(2F)_16", "(zz)_16"] {
        let notation = parse_notation(text).unwrap();
        let radix = notation.radix().unwrap();
        let expanded = breakdown(&notation.numeral, radix);
        let converted = base_to_decimal(&notation.numeral, radix);
        assert_eq!(expanded.map(|b| b.total), converted);
    }
}

#[test]
fn printed_numerals_read_back() {
    for n in &[0i64, 1, 47, 111, 255, 4096, 1_234_567_890] {
        let radix = Radix::new(7).unwrap();
        let numeral = decimal_to_base(*n, radix);
        assert_eq!(base_to_decimal(&numeral, radix).unwrap(), *n as u64);
    }
}
