use nom::digit;
use nom::types::CompleteStr;
use std::num::ParseIntError;

use crate::converter::converter_errors::ConversionError;
use crate::converter::Radix;

/// A numeral with its base written as a subscript, e.g. `(2F)_16`
#[derive(Debug, PartialEq)]
pub struct Notation {
    pub numeral: String,
    pub base: u32,
}

impl Notation {
    pub fn radix(&self) -> Result<Radix, ConversionError> {
        Radix::new(self.base)
    }
}

fn is_numeral_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

fn base_number(input: CompleteStr) -> Result<u32, ParseIntError> {
    input.0.parse::<u32>()
}

named!(pub notation<CompleteStr, Notation>,
    do_parse!(
        tag!("(") >>
        numeral: take_while1!(is_numeral_char) >>
        tag!(")_") >>
        base: map_res!(digit, base_number) >>
        (
            Notation {
                numeral: numeral.to_string(),
                base: base
            }
        )
    )
);

/// Parses the whole of `input` as a notation. Surrounding whitespace is ignored.
pub fn parse_notation(input: &str) -> Result<Notation, ConversionError> {
    match notation(CompleteStr(input.trim())) {
        Ok((rest, parsed)) => {
            if !rest.0.is_empty() {
                return Err(ConversionError::ParseError {
                    error: format!("unexpected trailing input '{}'", rest.0),
                });
            }
            Ok(parsed)
        }
        Err(e) => Err(ConversionError::ParseError {
            error: format!("{:?}", e),
        }),
    }
}

#[test]
fn parse_hex_notation() {
    let result = notation(CompleteStr("(2F)_16"));
    assert_eq!(result.is_ok(), true);
    let (rest, value) = result.unwrap();
    assert_eq!(rest, CompleteStr(""));
    assert_eq!(
        value,
        Notation {
            numeral: "2F".to_string(),
            base: 16
        }
    );
}

#[test]
fn parse_notation_requires_parentheses() {
    let result = notation(CompleteStr("2F_16"));
    assert_eq!(result.is_ok(), false);

    let result = parse_notation("(2F)_");
    assert_eq!(result.is_ok(), false);

    let result = parse_notation("()_2");
    assert_eq!(result.is_ok(), false);
}

#[test]
fn parse_notation_rejects_trailing_input() {
    let result = parse_notation("(101)_2 extra");
    assert_eq!(result.is_ok(), false);
}

#[test]
fn parse_notation_trims_and_keeps_case() {
    let n = parse_notation("  (abc)_16\n").unwrap();
    assert_eq!(n.numeral, "abc");
    assert_eq!(n.radix().unwrap(), Radix::HEXADECIMAL);
}

#[test]
fn notation_radix_checks_range() {
    let n = parse_notation("(1)_20").unwrap();
    assert_eq!(n.radix(), Err(ConversionError::InvalidBase { base: 20 }));
}
