//! Traversal progress estimated from the continuation marker.
//!
//! State entries are keyed by hashes, which are spread evenly over the key
//! space, so the marker's position in that space tracks how much of the tree
//! has been walked. Only the first two characters are read. The result is
//! advisory and never used for control flow.

use ledger_rpc_client::Marker;

/// Scale line printed above the progress bar.
pub const PROGRESS_SCALE: &str = "0%--10%--20%--30%--40%--50%--60%--70%--80%--90%--100%";

/// Units in a full progress bar, one per scale character.
pub const PROGRESS_UNITS: u64 = PROGRESS_SCALE.len() as u64;

/// Largest value the two leading characters are assumed to reach (`FF`).
const KEY_SPACE_MAX: u64 = 255;

/// Maps one marker character to its digit value.
///
/// `0`-`9` map to 0-9 and uppercase `A`-`Z` to 10-35; anything else is 0.
fn digit_value(c: Option<&u8>) -> u64 {
    match c {
        Some(b @ b'0'..=b'9') => u64::from(b - b'0'),
        Some(b @ b'A'..=b'Z') => u64::from(b - b'A') + 10,
        _ => 0,
    }
}

/// Estimates completion, in units out of `total`, after receiving `marker`.
///
/// No marker means the traversal is done. Letters past `F` push the value
/// beyond `total`; that approximation is kept as is, saturating at `u64::MAX`.
pub fn estimate(marker: Option<&Marker>, total: u64) -> u64 {
    let Some(text) = marker.and_then(Marker::as_str) else {
        return total;
    };
    let bytes = text.as_bytes();
    let raw = 16 * digit_value(bytes.first()) + digit_value(bytes.get(1));
    let units = u128::from(total) * u128::from(raw) / u128::from(KEY_SPACE_MAX);
    u64::try_from(units).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn at(prefix: &str) -> u64 {
        let marker = Marker::from(format!("{prefix}{}", "0".repeat(62)).as_str());
        estimate(Some(&marker), PROGRESS_UNITS)
    }

    #[test]
    fn scale_has_fifty_three_units() {
        assert_eq!(PROGRESS_UNITS, 53);
    }

    #[test]
    fn absent_marker_is_complete() {
        assert_eq!(estimate(None, PROGRESS_UNITS), PROGRESS_UNITS);
        assert_eq!(estimate(None, 100), 100);
    }

    #[test]
    fn zero_marker_is_start_and_ff_is_end() {
        assert_eq!(at("00"), 0);
        assert_eq!(at("FF"), PROGRESS_UNITS);
        assert_eq!(at("80"), 53 * 128 / 255);
    }

    #[test]
    fn estimate_is_monotonic_in_hex_space() {
        let hex = "0123456789ABCDEF";
        let mut last = 0;
        for hi in hex.chars() {
            for lo in hex.chars() {
                let value = at(&format!("{hi}{lo}"));
                assert!(value >= last, "{hi}{lo}");
                last = value;
            }
        }
        assert!(at("FF") >= at("FE"));
    }

    #[test]
    fn letters_beyond_hex_overshoot() {
        assert_eq!(at("ZZ"), 53 * 595 / 255);
        assert!(at("H0") > PROGRESS_UNITS);
    }

    #[test]
    fn large_totals_do_not_overflow() {
        let total = u64::MAX / 100;
        let expected = u128::from(total) * 595 / 255;
        assert_eq!(
            u128::from(estimate(Some(&Marker::from("ZZ00")), total)),
            expected
        );
        assert_eq!(estimate(Some(&Marker::from("FF")), u64::MAX), u64::MAX);
        assert_eq!(estimate(Some(&Marker::from("ZZ")), u64::MAX), u64::MAX);
    }

    #[test]
    fn unknown_characters_count_as_zero() {
        assert_eq!(at("a0"), 0);
        assert_eq!(at("1f"), 53 * 16 / 255);
        assert_eq!(estimate(Some(&Marker::from("8")), 255), 128);
        assert_eq!(estimate(Some(&Marker::from("")), 255), 0);
    }

    #[test]
    fn non_string_marker_counts_as_complete() {
        let marker = Marker::from_value(json!(42)).unwrap();
        assert_eq!(estimate(Some(&marker), 53), 53);
    }
}
