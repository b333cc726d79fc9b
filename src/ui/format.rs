// ============================================================================
// Formatage des valeurs (conventions en-US)
// ============================================================================
// Fonctions pures : mêmes entrées, mêmes chaînes. Appelées uniquement au
// rendu, jamais pendant le fetch.
//
//   50000      -> "$50,000.00"   (prix BTC, 2 décimales)
//   0.0005     -> "$0.00050000"  (prix du satoshi, 8 à 10 décimales)
//   20.0       -> "20"           (sats par cent, entier)
// ============================================================================

use chrono::{DateTime, TimeZone};

/// Prix BTC : devise USD, 2 décimales
pub fn format_btc_price(price: f64) -> String {
    format_currency(price, 2, 2)
}

/// Prix d'un satoshi : devise USD, 8 décimales minimum, 10 maximum
pub fn format_satoshi_price(price: f64) -> String {
    format_currency(price, 8, 10)
}

/// Sats par cent : nombre arrondi à l'entier, séparateur de milliers
pub fn format_sats_per_cent(sats: f64) -> String {
    format_number(sats, 0, 0)
}

/// Heure du jour, ex : "10:00:00 AM"
pub fn format_time_of_day<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%-I:%M:%S %p").to_string()
}

/// Montant en dollars : "$1,234.50", "-$3.00"
pub fn format_currency(value: f64, min_fraction: usize, max_fraction: usize) -> String {
    let (negative, body) = format_unsigned(value, min_fraction, max_fraction);
    if negative {
        format!("-${}", body)
    } else {
        format!("${}", body)
    }
}

/// Nombre décimal groupé : "1,234.5"
pub fn format_number(value: f64, min_fraction: usize, max_fraction: usize) -> String {
    let (negative, body) = format_unsigned(value, min_fraction, max_fraction);
    if negative {
        format!("-{}", body)
    } else {
        body
    }
}

/// Arrondit à max_fraction décimales, retire les zéros de fin jusqu'à
/// min_fraction et groupe la partie entière par milliers
fn format_unsigned(value: f64, min_fraction: usize, max_fraction: usize) -> (bool, String) {
    let max_fraction = max_fraction.max(min_fraction);
    let rounded = round_half_away_from_zero(value.abs(), max_fraction);

    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));

    let mut fraction = frac_part.to_string();
    while fraction.len() > min_fraction && fraction.ends_with('0') {
        fraction.pop();
    }

    let mut body = group_thousands(int_part);
    if !fraction.is_empty() {
        body.push('.');
        body.push_str(&fraction);
    }

    // -0.00 s'affiche "0.00"
    let negative = value < 0.0 && rounded.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    (negative, body)
}

/// Chiffres de garde au-delà de la précision demandée
const GUARD_DIGITS: usize = 25;

/// Arrondi décimal "half away from zero" d'une valeur positive
///
/// `format!("{:.N}")` arrondit les égalités exactes au pair (50000.125 ->
/// 50000.12). On développe la valeur binaire exacte avec des chiffres de
/// garde, puis on arrondit la chaîne : 50000.125 -> 50000.13.
fn round_half_away_from_zero(value: f64, fraction_digits: usize) -> String {
    let expanded = format!("{:.*}", fraction_digits + GUARD_DIGITS, value);
    let (int_part, frac_part) = expanded.split_once('.').unwrap_or((expanded.as_str(), ""));

    let mut digits: Vec<u8> = int_part.bytes().collect();
    digits.extend(frac_part.bytes().take(fraction_digits));
    let mut int_len = int_part.len();

    let round_up = frac_part.as_bytes().get(fraction_digits).is_some_and(|&d| d >= b'5');
    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
            int_len += 1;
        }
    }

    let (int_digits, frac_digits) = digits.split_at(int_len);
    let mut rounded = String::from_utf8_lossy(int_digits).into_owned();
    if !frac_digits.is_empty() {
        rounded.push('.');
        rounded.push_str(&String::from_utf8_lossy(frac_digits));
    }
    rounded
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, NaiveDate};

    #[test]
    fn test_reference_values() {
        assert_eq!(format_btc_price(50_000.0), "$50,000.00");
        assert_eq!(format_satoshi_price(50_000.0 / 1e8), "$0.00050000");
        assert_eq!(format_sats_per_cent(1e6 / 50_000.0), "20");
    }

    #[test]
    fn test_btc_price_rounding_and_grouping() {
        assert_eq!(format_btc_price(0.5), "$0.50");
        assert_eq!(format_btc_price(999.999), "$1,000.00");
        assert_eq!(format_btc_price(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_btc_price(67_432.1), "$67,432.10");
    }

    #[test]
    fn test_satoshi_price_keeps_between_eight_and_ten_digits() {
        assert_eq!(format_satoshi_price(0.00067432), "$0.00067432");
        assert_eq!(format_satoshi_price(0.000674321), "$0.000674321");
        assert_eq!(format_satoshi_price(0.00067432123), "$0.0006743212");
        assert_eq!(format_satoshi_price(0.01), "$0.01000000");
    }

    #[test]
    fn test_sats_per_cent_rounds_to_integer() {
        assert_eq!(format_sats_per_cent(14.829), "15");
        assert_eq!(format_sats_per_cent(14.2), "14");
        assert_eq!(format_sats_per_cent(12_345.6), "12,346");
    }

    #[test]
    fn test_exact_ties_round_away_from_zero() {
        assert_eq!(format_btc_price(50_000.125), "$50,000.13");
        assert_eq!(format_btc_price(0.125), "$0.13");
        assert_eq!(format_btc_price(0.625), "$0.63");
        assert_eq!(format_btc_price(64_999.375), "$64,999.38");
        assert_eq!(format_sats_per_cent(2.5), "3");
        assert_eq!(format_sats_per_cent(0.5), "1");
        assert_eq!(format_currency(-0.125, 2, 2), "-$0.13");
    }

    #[test]
    fn test_rounding_uses_exact_binary_value() {
        // 1.005 vaut 1.00499999999999989... en binaire : pas une égalité
        assert_eq!(format_btc_price(1.005), "$1.00");
        assert_eq!(format_btc_price(0.995), "$0.99");
    }

    #[test]
    fn test_rounding_carries_into_integer_part() {
        assert_eq!(format_number(9.5, 0, 0), "10");
        assert_eq!(format_number(999.5, 0, 0), "1,000");
        assert_eq!(format_btc_price(99_999.996), "$100,000.00");
        assert_eq!(round_half_away_from_zero(0.96, 1), "1.0");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_currency(-3.0, 2, 2), "-$3.00");
        assert_eq!(format_currency(-0.001, 2, 2), "$0.00");
        assert_eq!(format_number(-1_500.0, 0, 0), "-1,500");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("123456789"), "123,456,789");
    }

    #[test]
    fn test_time_of_day() {
        let morning = NaiveDate::from_ymd_opt(2024, 5, 1)
            .and_then(|d| d.and_hms_opt(10, 0, 0))
            .unwrap()
            .and_utc();
        assert_eq!(format_time_of_day(&morning), "10:00:00 AM");

        let evening = morning + chrono::Duration::hours(11) + chrono::Duration::seconds(5);
        assert_eq!(format_time_of_day(&evening), "9:00:05 PM");
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let now = Local::now();
        for price in [50_000.0, 12_345.678, 98_765.4321] {
            assert_eq!(format_btc_price(price), format_btc_price(price));
            assert_eq!(format_satoshi_price(price / 1e8), format_satoshi_price(price / 1e8));
            assert_eq!(format_sats_per_cent(1e6 / price), format_sats_per_cent(1e6 / price));
        }
        assert_eq!(format_time_of_day(&now), format_time_of_day(&now));
    }
}
