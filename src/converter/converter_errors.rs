use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// A character that is not one of the first `base` digit symbols
    InvalidDigit {
        digit: char,
        index: usize,
        base: u32,
    },
    EmptyNumeral,
    /// The value does not fit in a u64
    Overflow {
        numeral: String,
        base: u32,
    },
    InvalidBase {
        base: u32,
    },
    UnparsableBase {
        input: String,
    },
    ParseError {
        error: String,
    },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConversionError::InvalidDigit { digit, index, base } => write!(
                f,
                "Invalid digit '{}' at index {} for base {}",
                digit, index, base
            ),
            ConversionError::EmptyNumeral => f.write_str("Numeral is empty"),
            ConversionError::Overflow { numeral, base } => write!(
                f,
                "({})_{} is too large to fit in 64 bits",
                numeral, base
            ),
            ConversionError::InvalidBase { base } => {
                write!(f, "Base {} is outside the supported range 2-16", base)
            }
            ConversionError::UnparsableBase { input } => {
                write!(f, "Unable to read '{}' as a base", input)
            }
            ConversionError::ParseError { error } => {
                write!(f, "Unable to parse notation: {}", error)
            }
        }
    }
}

impl Error for ConversionError {}
