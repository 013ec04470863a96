use serde_json::Value;

pub const DEFAULT_CURRENCY: &str = "USD";

/// Fractional digits shown for a currency code.
pub fn fraction_digits(code: &str) -> usize {
    match code {
        "JPY" | "KRW" | "VND" | "CLP" | "ISK" | "UGX" | "XAF" | "XOF" | "XPF" | "PYG" | "RWF"
        | "KMF" | "GNF" | "VUV" | "BIF" | "DJF" => 0,
        "BHD" | "KWD" | "OMR" | "JOD" | "TND" | "IQD" | "LYD" => 3,
        "BTC" | "ETH" => 8,
        _ => 2,
    }
}

fn symbol(code: &str) -> Option<&'static str> {
    Some(match code {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        "INR" => "₹",
        "CNY" => "CN¥",
        "KRW" => "₩",
        "AUD" => "A$",
        "CAD" => "CA$",
        _ => return None,
    })
}

/// Normalizes a configured code, falling back to USD for anything unusable.
pub fn normalize_code(code: Option<&str>) -> String {
    match code.map(str::trim) {
        Some(code)
            if !code.is_empty()
                && code.len() <= 10
                && code.chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            code.to_ascii_uppercase()
        }
        Some(code) => {
            log::debug!("Unusable currency code {code:?}, using {DEFAULT_CURRENCY}");
            DEFAULT_CURRENCY.to_owned()
        }
        None => DEFAULT_CURRENCY.to_owned(),
    }
}

/// Reads a number or a numeric string.
pub fn numeric(value: &Value) -> Option<f64> {
    let amount = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    amount.is_finite().then_some(amount)
}

/// Formats `value` in `code` (default USD), e.g. `$1,234.50` or `BTC 0.00012000`.
pub fn format_currency(value: &Value, code: Option<&str>) -> Option<String> {
    numeric(value).map(|amount| format_amount(amount, code))
}

pub fn format_amount(amount: f64, code: Option<&str>) -> String {
    let code = normalize_code(code);
    let digits = fraction_digits(&code);
    let fixed = format!("{:.*}", digits, amount.abs());

    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut number = group_thousands(integer);
    if let Some(fraction) = fraction {
        number.push('.');
        number.push_str(fraction);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    match symbol(&code) {
        Some(symbol) => format!("{sign}{symbol}{number}"),
        None => format!("{sign}{code} {number}"),
    }
}

fn group_thousands(integer: &str) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_to_usd_with_two_digits() {
        assert_eq!(
            format_currency(&json!(1234.5), None).as_deref(),
            Some("$1,234.50")
        );
        assert_eq!(format_currency(&json!(0), None).as_deref(), Some("$0.00"));
    }

    #[test]
    fn test_jpy_has_no_fraction() {
        assert_eq!(
            format_currency(&json!(1234.56), Some("JPY")).as_deref(),
            Some("¥1,235")
        );
        assert_eq!(fraction_digits("JPY"), 0);
    }

    #[test]
    fn test_high_precision_asset() {
        assert_eq!(
            format_currency(&json!(0.00012), Some("btc")).as_deref(),
            Some("BTC 0.00012000")
        );
    }

    #[test]
    fn test_three_digit_currency_and_negative() {
        assert_eq!(
            format_currency(&json!(-1500.25), Some("KWD")).as_deref(),
            Some("-KWD 1,500.250")
        );
    }

    #[test]
    fn test_numeric_strings_are_accepted() {
        assert_eq!(
            format_currency(&json!(" 99.9 "), Some("EUR")).as_deref(),
            Some("€99.90")
        );
    }

    #[test]
    fn test_non_numeric_has_no_text() {
        assert_eq!(format_currency(&json!("abc"), None), None);
        assert_eq!(format_currency(&json!(null), None), None);
        assert_eq!(format_currency(&json!([1]), None), None);
    }

    #[test]
    fn test_unusable_code_falls_back() {
        assert_eq!(normalize_code(Some("$$")), "USD");
        assert_eq!(normalize_code(Some("")), "USD");
        assert_eq!(normalize_code(Some("usdt")), "USDT");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }
}
