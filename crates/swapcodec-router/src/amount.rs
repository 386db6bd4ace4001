//! Minor-unit amount formatting.

use alloy_primitives::U256;

/// Render `raw / 10^decimals` as an exact decimal string.
///
/// Every significant digit is kept; trailing fractional zeros are trimmed
/// and a whole number has no decimal point.
///
/// ```
/// use alloy_primitives::U256;
/// use swapcodec_router::format_amount;
///
/// assert_eq!(format_amount(U256::from(1_500_000_000_000_000_000u128), 18), "1.5");
/// assert_eq!(format_amount(U256::from(1_234_500u64), 6), "1.2345");
/// ```
pub fn format_amount(raw: U256, decimals: u8) -> String {
    let digits = raw.to_string();
    let scale = decimals as usize;
    if scale == 0 {
        return digits;
    }

    let padded = if digits.len() <= scale {
        format!("{}{digits}", "0".repeat(scale + 1 - digits.len()))
    } else {
        digits
    };
    let (int_part, frac_part) = padded.split_at(padded.len() - scale);
    let frac_part = frac_part.trim_end_matches('0');

    if frac_part.is_empty() {
        int_part.to_string()
    } else {
        format!("{int_part}.{frac_part}")
    }
}
