pub mod breakdown;
pub mod converter_errors;
pub mod notation_parsers;

use std::fmt;
use std::str::FromStr;

use crate::converter::converter_errors::ConversionError;
use crate::utils::{digit_value, DIGITS};

pub use crate::converter::breakdown::{breakdown, Breakdown, PlaceValue};

/// Number of unique digit symbols in a positional numeral system. Always within 2..=16.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Radix(u32);

impl Radix {
    pub const MIN: u32 = 2;
    pub const MAX: u32 = 16;

    pub const BINARY: Radix = Radix(2);
    pub const OCTAL: Radix = Radix(8);
    pub const DECIMAL: Radix = Radix(10);
    pub const HEXADECIMAL: Radix = Radix(16);

    pub fn new(base: u32) -> Result<Radix, ConversionError> {
        if base < Radix::MIN || base > Radix::MAX {
            return Err(ConversionError::InvalidBase { base });
        }
        Ok(Radix(base))
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// The legal digit symbols for this base, lowest value first
    pub fn digits(self) -> &'static [u8] {
        &DIGITS[..self.0 as usize]
    }

    /// Value of `c` when read as a digit of this base
    pub fn digit_value(self, c: char) -> Option<u32> {
        digit_value(c).filter(|value| *value < self.0)
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Radix {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Radix, ConversionError> {
        let base = s
            .trim()
            .parse::<u32>()
            .map_err(|_| ConversionError::UnparsableBase {
                input: s.to_string(),
            })?;
        Radix::new(base)
    }
}

/// Reads a numeral written in `radix`, most-significant digit first.
pub fn base_to_decimal(numeral: &str, radix: Radix) -> Result<u64, ConversionError> {
    if numeral.is_empty() {
        return Err(ConversionError::EmptyNumeral);
    }
    let base = u64::from(radix.value());
    let mut total: u64 = 0;
    for (index, c) in numeral.chars().enumerate() {
        let value = radix
            .digit_value(c)
            .ok_or(ConversionError::InvalidDigit {
                digit: c,
                index,
                base: radix.value(),
            })?;
        total = total
            .checked_mul(base)
            .and_then(|t| t.checked_add(u64::from(value)))
            .ok_or_else(|| ConversionError::Overflow {
                numeral: numeral.to_string(),
                base: radix.value(),
            })?;
    }
    debug!("({})_{} = {}", numeral, radix, total);
    Ok(total)
}

/// Writes the magnitude of `value` in `radix`. The sign is dropped.
pub fn decimal_to_base(value: i64, radix: Radix) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let base = u64::from(radix.value());
    let mut remaining = value.unsigned_abs();
    let mut symbols = vec![];
    while remaining > 0 {
        symbols.push(DIGITS[(remaining % base) as usize]);
        remaining /= base;
    }
    let result: String = symbols.iter().rev().map(|&symbol| symbol as char).collect();
    debug!("{} in base {} is {}", value, radix, result);
    result
}

/// True when every character is one of the first `radix` digit symbols, ignoring case.
pub fn is_valid(numeral: &str, radix: Radix) -> bool {
    numeral.chars().all(|c| radix.digit_value(c).is_some())
}
