//! Currency symbols and minor-unit digits.

use crate::error::FormatError;
use crate::options::CurrencyDisplay;

struct CurrencyInfo {
    code: &'static str,
    symbol: &'static str,
    narrow: &'static str,
    digits: u32,
}

static CURRENCIES: &[CurrencyInfo] = &[
    CurrencyInfo { code: "USD", symbol: "$", narrow: "$", digits: 2 },
    CurrencyInfo { code: "EUR", symbol: "€", narrow: "€", digits: 2 },
    CurrencyInfo { code: "GBP", symbol: "£", narrow: "£", digits: 2 },
    CurrencyInfo { code: "JPY", symbol: "¥", narrow: "¥", digits: 0 },
    CurrencyInfo { code: "KRW", symbol: "₩", narrow: "₩", digits: 0 },
    CurrencyInfo { code: "INR", symbol: "₹", narrow: "₹", digits: 2 },
    CurrencyInfo { code: "CHF", symbol: "CHF", narrow: "CHF", digits: 2 },
    CurrencyInfo { code: "CAD", symbol: "CA$", narrow: "$", digits: 2 },
    CurrencyInfo { code: "AUD", symbol: "A$", narrow: "$", digits: 2 },
    CurrencyInfo { code: "BRL", symbol: "R$", narrow: "R$", digits: 2 },
    CurrencyInfo { code: "CNY", symbol: "CN¥", narrow: "¥", digits: 2 },
];

/// A validated currency with its display string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedCurrency {
    pub code: String,
    pub display: String,
    pub digits: u32,
}

/// Validate `code` and pick its display string.
///
/// Well-formed codes missing from the table display as the code itself with
/// two fraction digits.
pub fn resolve(code: &str, display: CurrencyDisplay) -> Result<ResolvedCurrency, FormatError> {
    if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(FormatError::InvalidCurrency {
            code: code.to_string(),
        });
    }
    let code = code.to_ascii_uppercase();
    let info = CURRENCIES.iter().find(|c| c.code == code);
    let display = match (display, info) {
        (CurrencyDisplay::Code, _) | (_, None) => code.clone(),
        (CurrencyDisplay::Symbol, Some(info)) => info.symbol.to_string(),
        (CurrencyDisplay::NarrowSymbol, Some(info)) => info.narrow.to_string(),
    };
    Ok(ResolvedCurrency {
        digits: info.map_or(2, |i| i.digits),
        code,
        display,
    })
}

/// Alphabetic symbols placed before the number get a separating space.
pub fn needs_spacing_before_number(display: &str) -> bool {
    display
        .chars()
        .last()
        .is_some_and(|c| c.is_alphabetic())
}
