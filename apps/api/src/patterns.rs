//! Lazily compiled heuristic regexes.
//!
//! Patterns compile once on first use. A compile failure is kept (not panicked on) so
//! callers can degrade to their documented fallback instead of taking the process down.

use once_cell::sync::Lazy;
use regex::Regex;

pub type Pattern = Lazy<Result<Regex, regex::Error>>;
pub type PatternSet = Lazy<Result<Vec<Regex>, regex::Error>>;

/// Borrows a compiled pattern, surfacing the compile error if there was one.
pub fn get(pattern: &'static Pattern) -> Result<&'static Regex, regex::Error> {
    pattern.as_ref().map_err(Clone::clone)
}

/// Borrows a compiled pattern family.
pub fn get_all(patterns: &'static PatternSet) -> Result<&'static [Regex], regex::Error> {
    patterns.as_ref().map(Vec::as_slice).map_err(Clone::clone)
}

pub fn compile_all(sources: &[&str]) -> Result<Vec<Regex>, regex::Error> {
    sources.iter().map(|s| Regex::new(s)).collect()
}

static DECIMAL_DIGIT: Pattern = Lazy::new(|| Regex::new(r"^\d$"));

fn is_decimal_digit(re: &Regex, c: char) -> bool {
    let mut buf = [0u8; 4];
    re.is_match(c.encode_utf8(&mut buf))
}

/// Value of any Unicode decimal digit (`\d`), not just ASCII. Every digit set is a
/// contiguous run of ten code points starting at zero, so the value is the offset from
/// the start of the run, modulo ten.
fn digit_value(c: char) -> Option<u32> {
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }
    let re = get(&DECIMAL_DIGIT).ok()?;
    if !is_decimal_digit(re, c) {
        return None;
    }

    let mut start = c as u32;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(re, prev) {
            break;
        }
        start -= 1;
    }
    Some((c as u32 - start) % 10)
}

/// Parses a run of decimal digits from any script. Values too large for `u32` saturate.
pub fn parse_decimal(digits: &str) -> Option<u32> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0u32, |acc, c| {
        digit_value(c).map(|d| acc.saturating_mul(10).saturating_add(d))
    })
}

/// Maximum integer captured by any group of any pattern.
pub fn max_captured_number(patterns: &[Regex], text: &str) -> u32 {
    let mut max = 0;
    for re in patterns {
        for caps in re.captures_iter(text) {
            for group in caps.iter().skip(1).flatten() {
                if let Some(n) = parse_decimal(group.as_str()) {
                    max = max.max(n);
                }
            }
        }
    }
    max
}
