//! Number formatting with fixed decimals and thousands grouping.

/// Most fractional digits a counter can show.
pub const MAX_DECIMALS: u32 = 20;

/// Fractional digits needed to print any `f64` exactly.
const EXACT_DIGITS: usize = 1074;

/// Render `value` with exactly `decimals` fractional digits and a `,`
/// between every three integer digits.
///
/// `decimals` is capped at [`MAX_DECIMALS`]. A value lying exactly halfway
/// between two outputs rounds away from zero (`2.5` shows as `3`). A value
/// that rounds to zero is rendered without a sign, so an animation passing
/// through `-0.0` never shows `-0`.
#[must_use]
pub fn format_number(value: f64, decimals: u32) -> String {
    let fixed = fixed_half_up(value.abs(), decimals.min(MAX_DECIMALS) as usize);
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };
    let negative = value.is_sign_negative() && fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    let len = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// `value` with `decimals` digits, ties rounded up.
///
/// `{:.N}` rounds exact ties to even, so a tie is detected on the exact
/// expansion and the truncated digits are bumped by one instead.
fn fixed_half_up(value: f64, decimals: usize) -> String {
    let rounded = format!("{value:.decimals$}");
    if !format!("{:.*}", decimals + 1, value).ends_with('5') {
        return rounded;
    }
    let exact = format!("{value:.EXACT_DIGITS$}");
    let Some(dot) = exact.find('.') else {
        return rounded;
    };
    let tail = &exact[dot + 1 + decimals..];
    let is_tie = tail.starts_with('5') && tail.bytes().skip(1).all(|b| b == b'0');
    if !is_tie {
        return rounded;
    }
    let kept = if decimals == 0 {
        &exact[..dot]
    } else {
        &exact[..=dot + decimals]
    };
    increment_last_digit(kept)
}

/// Add one unit in the last place of a plain decimal string.
fn increment_last_digit(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();
    for byte in bytes.iter_mut().rev() {
        match *byte {
            b'.' => {}
            b'9' => *byte = b'0',
            _ => {
                *byte += 1;
                return String::from_utf8_lossy(&bytes).into_owned();
            }
        }
    }
    format!("1{}", String::from_utf8_lossy(&bytes))
}

/// How a counter value is turned into display text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberFormat {
    pub prefix: String,
    pub suffix: String,
    pub decimals: u32,
}

impl NumberFormat {
    /// Produce `prefix + format_number(value) + suffix`.
    #[must_use]
    pub fn render(&self, value: f64) -> String {
        format!(
            "{}{}{}",
            self.prefix,
            format_number(value, self.decimals),
            self.suffix
        )
    }
}
