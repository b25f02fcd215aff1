use std::fmt;

use crate::converter::converter_errors::ConversionError;
use crate::converter::Radix;

/// One digit's contribution: `value × base^position`
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceValue {
    /// Symbol as it was written, case preserved
    pub digit: char,
    pub value: u32,
    /// Counted from 0 at the least-significant digit
    pub position: u32,
    /// `base^position`, absent for a zero digit whose weight does not fit in a u128
    pub weight: Option<u128>,
    pub product: u128,
}

impl PlaceValue {
    fn weight_text(&self, radix: Radix) -> String {
        match self.weight {
            Some(weight) => weight.to_string(),
            None => format!("{}^{}", radix, self.position),
        }
    }
}

/// Positional-notation expansion of a numeral, most-significant digit first.
#[derive(Debug, Clone, PartialEq)]
pub struct Breakdown {
    pub numeral: String,
    pub radix: Radix,
    pub terms: Vec<PlaceValue>,
    pub total: u64,
}

/// Expands `numeral` digit by digit, left to right, summing place values as it goes.
///
/// The total is the same number `base_to_decimal` returns for the pair. Only a
/// nonzero digit needs its weight evaluated, so any run of leading zeros expands.
pub fn breakdown(numeral: &str, radix: Radix) -> Result<Breakdown, ConversionError> {
    if numeral.is_empty() {
        return Err(ConversionError::EmptyNumeral);
    }
    let overflow = || ConversionError::Overflow {
        numeral: numeral.to_string(),
        base: radix.value(),
    };

    let base = u128::from(radix.value());
    let mut power = numeral.chars().count() as u32 - 1;
    let mut terms = Vec::with_capacity(power as usize + 1);
    let mut total: u128 = 0;

    for (index, digit) in numeral.chars().enumerate() {
        let value = radix
            .digit_value(digit)
            .ok_or(ConversionError::InvalidDigit {
                digit,
                index,
                base: radix.value(),
            })?;
        let weight = base.checked_pow(power);
        let product = if value == 0 {
            0
        } else {
            weight
                .and_then(|w| w.checked_mul(u128::from(value)))
                .ok_or_else(overflow)?
        };
        total = total.checked_add(product).ok_or_else(overflow)?;
        terms.push(PlaceValue {
            digit,
            value,
            position: power,
            weight,
            product,
        });
        power = power.saturating_sub(1);
    }

    let total = u64::try_from(total).map_err(|_| overflow())?;
    debug!("Expanded ({})_{} into {} terms", numeral, radix, terms.len());
    Ok(Breakdown {
        numeral: numeral.to_string(),
        radix,
        terms,
        total,
    })
}

impl Breakdown {
    /// The worked sum, one rewriting step per line
    pub fn calculation(&self) -> Calculation<'_> {
        Calculation { breakdown: self }
    }
}

/// Renders the per-digit lines followed by the total.
impl fmt::Display for Breakdown {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Positional notation for ({})_{}:",
            self.numeral, self.radix
        )?;
        for term in &self.terms {
            writeln!(
                f,
                "  {} × {}^{} = {} × {} = {}",
                term.digit,
                self.radix,
                term.position,
                term.value,
                term.weight_text(self.radix),
                term.product
            )?;
        }
        writeln!(f, "  Total: {}", self.total)
    }
}

pub struct Calculation<'a> {
    breakdown: &'a Breakdown,
}

impl<'a> fmt::Display for Calculation<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let radix = self.breakdown.radix;
        let terms = &self.breakdown.terms;

        let powers: Vec<String> = terms
            .iter()
            .map(|t| format!("({} × {}^{})", t.value, radix, t.position))
            .collect();
        let weights: Vec<String> = terms
            .iter()
            .map(|t| format!("({} × {})", t.value, t.weight_text(radix)))
            .collect();
        let products: Vec<String> = terms
            .iter()
            .map(|t| t.product.to_string())
            .collect();

        writeln!(f, "Calculation: {}", powers.join(" + "))?;
        writeln!(f, "           = {}", weights.join(" + "))?;
        writeln!(f, "           = {}", products.join(" + "))?;
        writeln!(f, "           = {}", self.breakdown.total)
    }
}
