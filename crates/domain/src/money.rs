//! Currency formatting in the `en-US` style used by browsers
//! (`$1,234.50`, `€99.00`, `¥1,235`, `CHF 12.00`).

/// `(code, symbol, fraction digits)` for currencies that `en-US` renders
/// with a symbol or with non-default minor units.
const CURRENCIES: &[(&str, &str, usize)] = &[
    ("USD", "$", 2),
    ("EUR", "\u{20AC}", 2),
    ("GBP", "\u{00A3}", 2),
    ("JPY", "\u{00A5}", 0),
    ("CNY", "CN\u{00A5}", 2),
    ("INR", "\u{20B9}", 2),
    ("KRW", "\u{20A9}", 0),
    ("VND", "\u{20AB}", 0),
    ("ILS", "\u{20AA}", 2),
    ("PHP", "\u{20B1}", 2),
    ("CAD", "CA$", 2),
    ("AUD", "A$", 2),
    ("NZD", "NZ$", 2),
    ("HKD", "HK$", 2),
    ("MXN", "MX$", 2),
    ("TWD", "NT$", 2),
    ("BRL", "R$", 2),
    ("XAF", "FCFA", 0),
    ("XOF", "F\u{202F}CFA", 0),
    ("CLP", "CLP", 0),
    ("ISK", "ISK", 0),
    ("UGX", "UGX", 0),
    ("BHD", "BHD", 3),
    ("KWD", "KWD", 3),
    ("OMR", "OMR", 3),
    ("JOD", "JOD", 3),
    ("TND", "TND", 3),
];

/// Whether `code` has the shape of an ISO 4217 code (three ASCII letters).
#[must_use]
pub fn is_currency_code(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic())
}

/// Format `amount` as `en-US` currency in `currency`.
///
/// Rounds half away from zero on the shortest decimal representation of
/// `amount` and groups thousands with `,`. A symbol ending in a letter
/// (`FCFA`, or the bare code of an unlisted currency) is separated from the
/// digits by a no-break space. Negative amounts keep their sign even when
/// they round to zero.
#[must_use]
pub fn format_currency(amount: f64, currency: &str) -> String {
    let code = currency.trim().to_ascii_uppercase();
    let (symbol, digits) = CURRENCIES
        .iter()
        .find(|(c, _, _)| *c == code)
        .map_or((code.as_str(), 2), |(_, symbol, digits)| (*symbol, *digits));
    let prefix = if symbol.ends_with(|c: char| c.is_alphabetic()) {
        format!("{symbol}\u{00A0}")
    } else {
        symbol.to_string()
    };

    if !amount.is_finite() {
        return format!("{prefix}{amount}");
    }

    let (int_part, frac_part) = round_decimal(&format!("{}", amount.abs()), digits);
    let sign = if amount.is_sign_negative() { "-" } else { "" };

    let mut out = format!("{sign}{prefix}{}", group_thousands(&int_part));
    if digits > 0 {
        out.push('.');
        out.push_str(&frac_part);
    }
    out
}

/// Round a plain (non-exponent, non-negative) decimal string to `digits`
/// fraction digits, half away from zero.
fn round_decimal(plain: &str, digits: usize) -> (String, String) {
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain, ""));

    let mut all: Vec<u8> = int_part.bytes().map(|b| b - b'0').collect();
    let frac: Vec<u8> = frac_part.bytes().map(|b| b - b'0').collect();
    all.extend(frac.iter().take(digits));
    all.resize(int_part.len() + digits, 0);

    let round_up = frac.get(digits).is_some_and(|d| *d >= 5);
    if round_up {
        let mut carry = true;
        for d in all.iter_mut().rev() {
            if *d == 9 {
                *d = 0;
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            all.insert(0, 1);
        }
    }

    let split = all.len() - digits;
    let render = |ds: &[u8]| ds.iter().map(|d| char::from(b'0' + d)).collect::<String>();
    (render(&all[..split]), render(&all[split..]))
}

fn group_thousands(int_part: &str) -> String {
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_usd_with_grouping_and_cents() {
        assert_eq!(format_currency(1234.5, "USD"), "$1,234.50");
    }

    #[test]
    fn should_accept_lowercase_code() {
        assert_eq!(format_currency(10.0, "eur"), "\u{20AC}10.00");
    }

    #[test]
    fn should_round_yen_to_whole_units() {
        assert_eq!(format_currency(1234.5, "JPY"), "\u{00A5}1,235");
    }

    #[test]
    fn should_round_half_away_from_zero_on_decimal_representation() {
        assert_eq!(format_currency(1.005, "USD"), "$1.01");
        assert_eq!(format_currency(0.994, "USD"), "$0.99");
    }

    #[test]
    fn should_carry_into_new_thousands_group() {
        assert_eq!(format_currency(999_999.995, "USD"), "$1,000,000.00");
    }

    #[test]
    fn should_prefix_unknown_code_with_no_break_space() {
        assert_eq!(format_currency(12.0, "CHF"), "CHF\u{00A0}12.00");
        assert_eq!(format_currency(5.0, "ISK"), "ISK\u{00A0}5");
    }

    #[test]
    fn should_use_three_digits_for_dinar() {
        assert_eq!(format_currency(1.5, "KWD"), "KWD\u{00A0}1.500");
    }

    #[test]
    fn should_place_minus_before_symbol() {
        assert_eq!(format_currency(-42.1, "GBP"), "-\u{00A3}42.10");
    }

    #[test]
    fn should_keep_sign_of_negative_amount_that_rounds_to_zero() {
        assert_eq!(format_currency(-0.001, "USD"), "-$0.00");
    }

    #[test]
    fn should_separate_letter_symbols_from_digits() {
        assert_eq!(format_currency(10.0, "XAF"), "FCFA\u{00A0}10");
        assert_eq!(format_currency(10.0, "XOF"), "F\u{202F}CFA\u{00A0}10");
        assert_eq!(format_currency(10.0, "CAD"), "CA$10.00");
    }

    #[test]
    fn should_group_large_integers() {
        assert_eq!(format_currency(1_234_567.0, "USD"), "$1,234,567.00");
        assert_eq!(format_currency(0.0, "USD"), "$0.00");
    }

    #[test]
    fn should_recognize_currency_code_shape() {
        assert!(is_currency_code("USD"));
        assert!(is_currency_code("usd"));
        assert!(!is_currency_code("US"));
        assert!(!is_currency_code("US1"));
    }
}
