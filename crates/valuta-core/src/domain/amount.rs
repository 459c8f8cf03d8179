use crate::ConvertError;

/// Parse a user-entered amount.
///
/// A decimal comma is accepted and normalized to a decimal point before
/// parsing. The amount must be a finite, non-negative number.
pub fn parse_amount(input: &str) -> Result<f64, ConvertError> {
    let trimmed = input.trim();
    let invalid = || ConvertError::InvalidAmount {
        input: trimmed.to_owned(),
    };

    let normalized = trimmed.replace(',', ".");
    if normalized.is_empty() {
        return Err(invalid());
    }

    let amount: f64 = normalized.parse().map_err(|_| invalid())?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(invalid());
    }

    Ok(amount)
}

/// Render an amount with exactly two fraction digits.
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}
