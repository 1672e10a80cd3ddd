//! Lenient parsing of numeric readings typed by an operator

/// Parse a reading from free text.
///
/// Empty or unparseable input yields 0 so that half-filled rows still
/// evaluate. Commas are accepted only as thousands separators ("1,028");
/// a decimal comma such as "8,5" is invalid and yields 0.
pub fn parse_reading(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    let Some(cleaned) = strip_thousands_separators(trimmed) else {
        return 0.0;
    };
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Remove commas from `1,234,567.8`-style input; `None` for any other comma
fn strip_thousands_separators(s: &str) -> Option<String> {
    if !s.contains(',') {
        return Some(s.to_string());
    }

    let unsigned = s.strip_prefix(&['-', '+'][..]).unwrap_or(s);
    let (int_part, fraction) = match unsigned.split_once('.') {
        Some((int_part, fraction)) => (int_part, Some(fraction)),
        None => (unsigned, None),
    };

    let is_digits = |g: &str| !g.is_empty() && g.bytes().all(|b| b.is_ascii_digit());
    let mut groups = int_part.split(',');
    let head = groups.next()?;
    if !is_digits(head) || head.len() > 3 {
        return None;
    }
    if !groups.all(|g| g.len() == 3 && is_digits(g)) {
        return None;
    }
    if fraction.is_some_and(|f| !is_digits(f)) {
        return None;
    }

    Some(s.replace(',', ""))
}
