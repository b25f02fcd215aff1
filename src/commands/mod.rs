//! One-off conversions behind the command line subcommands. Each handler writes
//! its answer to `out`; any error goes back to the caller, which reports it and
//! exits with status 1.

use std::error::Error;
use std::io::Write;

use crate::converter::notation_parsers::parse_notation;
use crate::converter::{base_to_decimal, breakdown, decimal_to_base, is_valid, Radix};

/// `to-base VALUE BASE`
pub fn to_base<W: Write>(out: &mut W, value: &str, base: &str) -> Result<(), Box<dyn Error>> {
    let value = value.trim().parse::<i64>()?;
    let radix = base.parse::<Radix>()?;
    writeln!(out, "{}", decimal_to_base(value, radix))?;
    Ok(())
}

/// `to-decimal NUMERAL BASE`
pub fn to_decimal<W: Write>(out: &mut W, numeral: &str, base: &str) -> Result<(), Box<dyn Error>> {
    let radix = base.parse::<Radix>()?;
    writeln!(out, "{}", base_to_decimal(numeral, radix)?)?;
    Ok(())
}

/// `check NUMERAL BASE`. An invalid numeral is an answer, not an error.
pub fn check<W: Write>(out: &mut W, numeral: &str, base: &str) -> Result<(), Box<dyn Error>> {
    let radix = base.parse::<Radix>()?;
    if is_valid(numeral, radix) {
        writeln!(out, "({})_{}: Valid", numeral, radix)?;
    } else {
        writeln!(
            out,
            "({})_{}: Invalid, digits must be among {}",
            numeral,
            radix,
            String::from_utf8_lossy(radix.digits())
        )?;
    }
    Ok(())
}

/// `explain NOTATION`, e.g. `(2F)_16`
pub fn explain<W: Write>(out: &mut W, notation: &str) -> Result<(), Box<dyn Error>> {
    let notation = parse_notation(notation)?;
    let expansion = breakdown(&notation.numeral, notation.radix()?)?;
    write!(out, "{}", expansion)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::converter_errors::ConversionError;

    fn output_of<F>(command: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<(), Box<dyn Error>>,
    {
        let mut out = Vec::new();
        command(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn conversion_error(result: Result<(), Box<dyn Error>>) -> ConversionError {
        let e = result.unwrap_err();
        e.downcast_ref::<ConversionError>().unwrap().clone()
    }

    #[test]
    fn to_base_prints_digits() {
        assert_eq!(output_of(|out| to_base(out, "255", "16")), "FF\n");
        assert_eq!(output_of(|out| to_base(out, "255", "2")), "11111111\n");
        assert_eq!(output_of(|out| to_base(out, "-255", "16")), "FF\n");
        assert_eq!(output_of(|out| to_base(out, "0", "7")), "0\n");
    }

    #[test]
    fn to_base_rejects_bad_value() {
        let mut out = Vec::new();
        assert!(to_base(&mut out, "twelve", "2").is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn to_decimal_prints_value() {
        assert_eq!(output_of(|out| to_decimal(out, "2F", "16")), "47\n");
        assert_eq!(output_of(|out| to_decimal(out, "1101111", "2")), "111\n");
    }

    #[test]
    fn to_decimal_reports_invalid_digit() {
        let mut out = Vec::new();
        let e = conversion_error(to_decimal(&mut out, "19", "8"));
        assert_eq!(
            e,
            ConversionError::InvalidDigit {
                digit: '9',
                index: 1,
                base: 8
            }
        );
    }

    #[test]
    fn bad_bases_are_errors() {
        let mut out = Vec::new();
        let e = conversion_error(to_base(&mut out, "10", "17"));
        assert_eq!(e, ConversionError::InvalidBase { base: 17 });

        let e = conversion_error(to_decimal(&mut out, "10", "sixteen"));
        assert_eq!(
            e,
            ConversionError::UnparsableBase {
                input: "sixteen".to_string()
            }
        );

        let e = conversion_error(check(&mut out, "10", "1"));
        assert_eq!(e, ConversionError::InvalidBase { base: 1 });
        assert!(out.is_empty());
    }

    #[test]
    fn check_answers_valid_and_invalid() {
        assert_eq!(output_of(|out| check(out, "1011", "2")), "(1011)_2: Valid\n");
        assert_eq!(output_of(|out| check(out, "abc", "16")), "(abc)_16: Valid\n");
        assert_eq!(
            output_of(|out| check(out, "478", "8")),
            "(478)_8: Invalid, digits must be among 01234567\n"
        );
        assert_eq!(
            output_of(|out| check(out, "346", "6")),
            "(346)_6: Invalid, digits must be among 012345\n"
        );
    }

    #[test]
    fn explain_prints_breakdown() {
        let output = output_of(|out| explain(out, "(2F)_16"));
        assert_eq!(
            output,
            "Positional notation for (2F)_16:\n  \
             2 × 16^1 = 2 × 16 = 32\n  \
             F × 16^0 = 15 × 1 = 15\n  \
             Total: 47\n"
        );
    }

    #[test]
    fn explain_reports_bad_notation() {
        let mut out = Vec::new();
        match conversion_error(explain(&mut out, "2F_16")) {
            ConversionError::ParseError { .. } => {}
            other => panic!("expected a parse error, got {:?}", other),
        }
        let e = conversion_error(explain(&mut out, "(2F)_20"));
        assert_eq!(e, ConversionError::InvalidBase { base: 20 });
        let e = conversion_error(explain(&mut out, "(2G)_16"));
        assert_eq!(
            e,
            ConversionError::InvalidDigit {
                digit: 'G',
                index: 1,
                base: 16
            }
        );
    }
}
