//! Field coercion for raw tuple fields and loosely typed JSON values.
//!
//! Numeric parsers return `None` where a browser would produce `NaN`; callers pick the
//! default.

use serde_json::Value;

/// Leading integer prefix of `raw`, e.g. `"12abc"` is 12 and `"1.9"` is 1.
pub(crate) fn parse_int(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let end = sign_len(raw) + digits_len(&raw[sign_len(raw)..]);
    if end == sign_len(raw) {
        return None;
    }
    raw[..end].parse().ok()
}

/// Currency-tolerant decimal: `$` and `,` are removed before the leading floating-point
/// prefix is parsed, so `"$1,234.50"` is 1234.5.
pub(crate) fn parse_decimal(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| *c != '$' && *c != ',').collect();
    let s = cleaned.trim_start();

    let mut end = sign_len(s);
    let int_digits = digits_len(&s[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if s[end..].starts_with('.') {
        frac_digits = digits_len(&s[end + 1..]);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return None;
    }
    if s[end..].starts_with(['e', 'E']) {
        let exp_start = end + 1;
        let exp_sign = sign_len(&s[exp_start..]);
        let exp_digits = digits_len(&s[exp_start + exp_sign..]);
        if exp_digits > 0 {
            end = exp_start + exp_sign + exp_digits;
        }
    }
    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Single character database flag: `t` or `T` is true, everything else false.
pub(crate) fn parse_flag(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("t")
}

/// Drop one leading and one trailing double quote, if present.
pub(crate) fn unquote(raw: &str) -> &str {
    let raw = raw.strip_prefix('"').unwrap_or(raw);
    raw.strip_suffix('"').unwrap_or(raw)
}

pub(crate) fn int_of(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(float_to_int)),
        Value::String(s) => parse_int(s),
        _ => None,
    }
}

pub(crate) fn decimal_of(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => parse_decimal(s),
        _ => None,
    }
}

pub(crate) fn flag_of(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => parse_flag(s),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        _ => false,
    }
}

pub(crate) fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(unquote(s).to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Truncate toward zero. Values outside the `i64` range are no result instead of
/// saturating.
fn float_to_int(f: f64) -> Option<i64> {
    let f = f.trunc();
    // i64::MAX as f64 rounds up to 2^63, hence the strict bound
    (f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64).then_some(f as i64)
}

fn sign_len(s: &str) -> usize {
    usize::from(s.starts_with(['+', '-']))
}

fn digits_len(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}
