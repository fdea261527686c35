//! Shipping quote command.
//!
//! # Usage
//!
//! ```bash
//! vitrine shipping 01001-000
//! ```

use std::io::Write;

use vitrine_storefront::shipping::{ShippingCalculator, ShippingQuote};

use super::CommandError;

/// Print the quote text for `input`.
///
/// Invalid and unknown postal codes are answers, not errors; only a failed
/// lookup is.
pub async fn quote(
    calculator: &ShippingCalculator,
    input: &str,
    out: &mut impl Write,
) -> Result<ShippingQuote, CommandError> {
    let quote = calculator.quote(input).await;
    writeln!(out, "{}", quote.message())?;
    Ok(quote)
}

/// [`quote`], failing the command when the lookup failed.
pub async fn run(
    calculator: &ShippingCalculator,
    input: &str,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    match quote(calculator, input, out).await? {
        ShippingQuote::Failed => Err(CommandError::ShippingFailed),
        _ => Ok(()),
    }
}
