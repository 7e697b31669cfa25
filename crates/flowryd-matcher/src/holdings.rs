//! Conversion between holdings display strings ("$45.2T") and amounts.
//!
//! The two directions are not a true round-trip: formatting re-derives the
//! suffix from magnitude and keeps one decimal place, so
//! `parse_holdings(format_large_number(x))` may drift from `x`.

const TRILLION: f64 = 1e12;
const BILLION: f64 = 1e9;
const MILLION: f64 = 1e6;

/// Parse a holdings string into an amount.
///
/// Everything except digits and `.` is stripped before parsing, then the
/// amount is scaled by a `T`, `B` or `M` found anywhere in the input.
/// Missing, `"N/A"` and unparseable input all read as `0`.
pub fn parse_holdings(text: Option<&str>) -> f64 {
  let text = match text {
    Some(t) if !t.is_empty() && t != "N/A" => t,
    _ => return 0.0,
  };

  let numeric: String = text
    .chars()
    .filter(|c| c.is_ascii_digit() || *c == '.')
    .collect();

  let Some(amount) = leading_float(&numeric) else {
    return 0.0;
  };

  if text.contains('T') {
    amount * TRILLION
  } else if text.contains('B') {
    amount * BILLION
  } else if text.contains('M') {
    amount * MILLION
  } else {
    amount
  }
}

/// Format an amount for display, e.g. `45_200_000_000_000.0` -> `"$45.2T"`.
pub fn format_large_number(amount: f64) -> String {
  if amount >= TRILLION {
    format!("${}T", to_fixed_1(amount / TRILLION))
  } else if amount >= BILLION {
    format!("${}B", to_fixed_1(amount / BILLION))
  } else if amount >= MILLION {
    format!("${}M", to_fixed_1(amount / MILLION))
  } else {
    format!("${}", group_thousands(amount))
  }
}

/// Longest prefix of the form `digits[.digits]` parsed as a float.
fn leading_float(s: &str) -> Option<f64> {
  let bytes = s.as_bytes();
  let mut end = 0;
  while end < bytes.len() && bytes[end].is_ascii_digit() {
    end += 1;
  }
  if end < bytes.len() && bytes[end] == b'.' {
    end += 1;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
      end += 1;
    }
  }

  let prefix = &s[..end];
  if !prefix.bytes().any(|b| b.is_ascii_digit()) {
    return None;
  }
  prefix.parse().ok()
}

/// One decimal place, ties rounded up.
fn to_fixed_1(value: f64) -> String {
  format!("{:.1}", (value * 10.0).round() / 10.0)
}

/// en-US grouping with at most three fraction digits, e.g. `"1,234.5"`.
fn group_thousands(value: f64) -> String {
  if !value.is_finite() {
    return value.to_string();
  }

  let rounded = (value.abs() * 1000.0).round() / 1000.0;
  let fixed = format!("{:.3}", rounded);
  let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

  let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
  for (i, ch) in int_part.chars().enumerate() {
    if i > 0 && (int_part.len() - i) % 3 == 0 {
      grouped.push(',');
    }
    grouped.push(ch);
  }

  let frac = frac_part.trim_end_matches('0');
  let sign = if value < 0.0 && rounded != 0.0 { "-" } else { "" };
  if frac.is_empty() {
    format!("{sign}{grouped}")
  } else {
    format!("{sign}{grouped}.{frac}")
  }
}
