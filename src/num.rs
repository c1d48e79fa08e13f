use std::sync::OnceLock;

use regex::Regex;

const DIGITS: [char; 10] = ['零', '一', '二', '三', '四', '五', '六', '七', '八', '九'];

/// Myriad group units, ones group first.
const GROUP_UNITS: [&str; 5] = ["", "萬", "億", "兆", "京"];

fn numeral_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\d+(?:\.?\d+)?").unwrap())
}

/// Replace every maximal integer-or-decimal digit run in `text` with its
/// spoken Chinese-numeral rendering, leaving everything else untouched.
pub fn replace_numerals(text: &str) -> String {
    numeral_pattern()
        .replace_all(text, |caps: &regex::Captures| to_chinese(&caps[0]))
        .into_owned()
}

/// Render one digit literal as Chinese numerals. Integers read with
/// positional units (一百二十三), fractional digits read one by one after
/// 點. Literals that do not parse as a number (leading zeros, non-ASCII
/// digits, overflow) fall back to digit-by-digit reading, so the pass
/// never fails.
pub fn to_chinese(literal: &str) -> String {
    let (int_part, frac_part) = match literal.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (literal, None),
    };

    let mut out = if int_part.len() > 1 && int_part.starts_with('0') {
        digits_to_chinese(int_part)
    } else {
        match int_part.parse::<u64>() {
            Ok(n) => int_to_chinese(n),
            Err(_) => digits_to_chinese(int_part),
        }
    };

    if let Some(frac) = frac_part {
        out.push('點');
        out.push_str(&digits_to_chinese(frac));
    }
    out
}

/// Positional reading of an integer, grouped by myriads.
fn int_to_chinese(mut n: u64) -> String {
    if n == 0 {
        return DIGITS[0].to_string();
    }

    let mut groups = Vec::new();
    while n > 0 {
        groups.push((n % 10_000) as u16);
        n /= 10_000;
    }

    let mut out = String::new();
    for (i, &group) in groups.iter().enumerate().rev() {
        if group == 0 {
            continue;
        }
        // a skipped leading position reads as a single 零
        if !out.is_empty() && group < 1000 {
            out.push(DIGITS[0]);
        }
        out.push_str(&group_to_chinese(group));
        out.push_str(GROUP_UNITS[i]);
    }

    // 十三 rather than 一十三, 十萬 rather than 一十萬
    if out.starts_with("一十") {
        out.remove(0);
    }
    out
}

/// Reading of one 0..10000 group with 千/百/十 units.
fn group_to_chinese(group: u16) -> String {
    const UNITS: [&str; 4] = ["千", "百", "十", ""];

    let mut out = String::new();
    let mut zero_pending = false;
    let mut rest = group;
    for (i, unit) in UNITS.iter().enumerate() {
        let scale = 10u16.pow((UNITS.len() - 1 - i) as u32);
        let digit = rest / scale;
        rest %= scale;
        if digit == 0 {
            if !out.is_empty() {
                zero_pending = true;
            }
        } else {
            if zero_pending {
                out.push(DIGITS[0]);
                zero_pending = false;
            }
            out.push(DIGITS[digit as usize]);
            out.push_str(unit);
        }
    }
    out
}

/// Digit-by-digit reading; characters that are not ASCII digits pass
/// through unchanged.
fn digits_to_chinese(digits: &str) -> String {
    digits
        .chars()
        .map(|c| c.to_digit(10).map_or(c, |d| DIGITS[d as usize]))
        .collect()
}
