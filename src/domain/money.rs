use std::fmt;

/// Amounts are plain decimals. Only the displayed value is rounded, to two
/// fractional digits.
pub type Amount = f64;

/// Normalize user input so either `,` or `.` can be used as the decimal
/// separator.
/// Example: " 12,50 " -> "12.50"
pub fn normalize_decimal(input: &str) -> String {
    input.trim().replace(',', ".")
}

/// Parse a decimal string into an amount.
/// Example: "50.5" -> 50.5, "12,5" -> 12.5, "100" -> 100.0
///
/// The sign is not checked here; rejecting non-positive amounts is up to the
/// caller.
pub fn parse_amount(input: &str) -> Result<Amount, ParseAmountError> {
    let normalized = normalize_decimal(input);
    if normalized.is_empty() {
        return Err(ParseAmountError::Empty);
    }

    let value: Amount = normalized
        .parse()
        .map_err(|_| ParseAmountError::InvalidFormat)?;

    if !value.is_finite() {
        return Err(ParseAmountError::NotFinite);
    }
    Ok(value)
}

/// Format an amount with exactly two fractional digits.
/// Example: 80.5 -> "80.50", 0.0 -> "0.00"
pub fn format_amount(amount: Amount) -> String {
    // -0.0 would otherwise render as "-0.00"
    let amount = if amount == 0.0 { 0.0 } else { amount };
    format!("{:.2}", amount)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    Empty,
    InvalidFormat,
    NotFinite,
}

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAmountError::Empty => write!(f, "amount is empty"),
            ParseAmountError::InvalidFormat => write!(f, "invalid amount format"),
            ParseAmountError::NotFinite => write!(f, "amount must be a finite number"),
        }
    }
}

impl std::error::Error for ParseAmountError {}
