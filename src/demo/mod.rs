use std::error::Error;
use std::io::Write;

use crate::converter::{base_to_decimal, breakdown, decimal_to_base, is_valid, Radix};

const RULE_WIDTH: usize = 60;

/// Numerals checked in the validity example, with the base they claim and its name
const VALIDITY_CASES: [(&str, u32, &str); 4] = [
    ("1011", 2, "Binary"),
    ("478", 8, "Octal"),
    ("345", 6, "Base-6"),
    ("ABC", 16, "Hexadecimal"),
];

/// Walks through the number system examples in order, writing everything to `out`
pub struct Demo<W: Write> {
    out: W,
}

impl<W: Write> Demo<W> {
    pub fn new(out: W) -> Self {
        Demo { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        self.rule()?;
        writeln!(self.out, "CHAPTER 4: Number Systems")?;
        self.rule()?;

        self.number_system_bases()?;
        self.binary_to_decimal()?;
        self.octal_to_decimal()?;
        self.hexadecimal_to_decimal()?;
        self.validity_check()?;
        self.decimal_to_many_bases()?;

        writeln!(self.out)?;
        self.key_concepts()?;
        self.out.flush()?;
        Ok(())
    }

    /// Prints the per-digit expansion of a numeral and returns its decimal value
    pub fn show_positional_notation(
        &mut self,
        numeral: &str,
        radix: Radix,
    ) -> Result<u64, Box<dyn Error>> {
        let expansion = breakdown(numeral, radix)?;
        writeln!(self.out)?;
        write!(self.out, "{}", expansion)?;
        Ok(expansion.total)
    }

    fn heading(&mut self, number: u32, title: &str) -> Result<(), Box<dyn Error>> {
        info!("Example {}: {}", number, title);
        writeln!(self.out, "\n--- Example {}: {} ---", number, title)?;
        Ok(())
    }

    fn rule(&mut self) -> Result<(), Box<dyn Error>> {
        writeln!(self.out, "{}", "=".repeat(RULE_WIDTH))?;
        Ok(())
    }

    fn number_system_bases(&mut self) -> Result<(), Box<dyn Error>> {
        self.heading(1, "Number System Bases")?;
        let decimal = 111;
        writeln!(self.out, "Decimal (base 10): {}", decimal)?;
        writeln!(
            self.out,
            "Binary (base 2):   {}",
            decimal_to_base(decimal, Radix::BINARY)
        )?;
        writeln!(
            self.out,
            "Octal (base 8):    {}",
            decimal_to_base(decimal, Radix::OCTAL)
        )?;
        writeln!(
            self.out,
            "Hex (base 16):     {}",
            decimal_to_base(decimal, Radix::HEXADECIMAL)
        )?;
        Ok(())
    }

    fn binary_to_decimal(&mut self) -> Result<(), Box<dyn Error>> {
        self.heading(2, "Binary to Decimal Conversion")?;
        let binary = "1101111";
        let result = self.show_positional_notation(binary, Radix::BINARY)?;
        writeln!(self.out, "Result: ({})_2 = ({})_10", binary, result)?;
        Ok(())
    }

    fn octal_to_decimal(&mut self) -> Result<(), Box<dyn Error>> {
        self.heading(3, "Octal to Decimal Conversion")?;
        let octal = "27";
        writeln!(self.out, "Octal number: ({})_8", octal)?;
        let expansion = breakdown(octal, Radix::OCTAL)?;
        write!(self.out, "{}", expansion.calculation())?;
        Ok(())
    }

    fn hexadecimal_to_decimal(&mut self) -> Result<(), Box<dyn Error>> {
        self.heading(4, "Hexadecimal to Decimal Conversion")?;
        let hex = "2F";
        writeln!(self.out, "Hexadecimal: ({})_16", hex)?;
        writeln!(self.out, "Note: F in hex = 15 in decimal")?;
        let expansion = breakdown(hex, Radix::HEXADECIMAL)?;
        write!(self.out, "{}", expansion.calculation())?;
        Ok(())
    }

    fn validity_check(&mut self) -> Result<(), Box<dyn Error>> {
        self.heading(5, "Number Validity Check")?;
        for (numeral, base, name) in VALIDITY_CASES.iter() {
            let radix = Radix::new(*base)?;
            let valid = is_valid(numeral, radix);
            let status = if valid { "✓ Valid" } else { "✗ Invalid" };
            writeln!(self.out, "({})_{} in {}: {}", numeral, radix, name, status)?;
            if valid {
                let decimal = base_to_decimal(numeral, radix)?;
                writeln!(self.out, "  Decimal value: {}", decimal)?;
            }
        }
        Ok(())
    }

    fn decimal_to_many_bases(&mut self) -> Result<(), Box<dyn Error>> {
        self.heading(6, "Decimal to Multiple Bases")?;
        let decimal = 255;
        writeln!(self.out, "Decimal: {}", decimal)?;
        writeln!(
            self.out,
            "Binary:      {:>16} (base 2)",
            decimal_to_base(decimal, Radix::BINARY)
        )?;
        writeln!(
            self.out,
            "Octal:       {:>16} (base 8)",
            decimal_to_base(decimal, Radix::OCTAL)
        )?;
        writeln!(
            self.out,
            "Hexadecimal: {:>16} (base 16)",
            decimal_to_base(decimal, Radix::HEXADECIMAL)
        )?;
        Ok(())
    }

    fn key_concepts(&mut self) -> Result<(), Box<dyn Error>> {
        self.rule()?;
        writeln!(self.out, "Key Concepts:")?;
        writeln!(self.out, "- Binary (base 2): digits 0-1")?;
        writeln!(self.out, "- Octal (base 8): digits 0-7")?;
        writeln!(self.out, "- Decimal (base 10): digits 0-9")?;
        writeln!(self.out, "- Hexadecimal (base 16): digits 0-9, A-F")?;
        writeln!(self.out, "- Formula: N = Σ(digit × base^position)")?;
        self.rule()?;
        Ok(())
    }
}
