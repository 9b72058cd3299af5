//! The masking transform.
//!
//! Masking is a pure string transformation. It keeps a visible prefix and
//! suffix and substitutes every character in between with the cipher text.
//! Lengths and positions count Unicode scalar values, not bytes.

/// Default cipher used when a masking configuration does not override it.
pub const DEFAULT_CIPHER: &str = "*";

/// Name of the synthesized masking routine.
pub const MASK_ROUTINE_NAME: &str = "desensitize";

/// Number of parameters of the masking routine: value, prefix, suffix, cipher.
pub const MASK_ROUTINE_ARITY: usize = 4;

/// Masks the text form of `input`, keeping `pre_len` leading and `suf_len`
/// trailing characters visible.
///
/// Absent input stays absent. See [`mask_str`] for the exact rules.
///
/// ```rust
/// use desensitize_core::mask;
///
/// assert_eq!(mask(Some("1234567890"), 3, 2, "*").as_deref(), Some("123*****90"));
/// assert_eq!(mask(None::<&str>, 3, 2, "*"), None);
/// ```
#[must_use]
pub fn mask<S: AsRef<str>>(
    input: Option<S>,
    pre_len: usize,
    suf_len: usize,
    cipher: &str,
) -> Option<String> {
    input.map(|value| mask_str(value.as_ref(), pre_len, suf_len, cipher))
}

/// Masks `value`, keeping `pre_len` leading and `suf_len` trailing characters.
///
/// Values of at most `pre_len + suf_len` characters are returned unchanged,
/// including the empty string. Otherwise every masked position is replaced by
/// the whole `cipher`, so a masked run of `k` characters becomes `k` copies of
/// `cipher`.
#[must_use]
pub fn mask_str(value: &str, pre_len: usize, suf_len: usize, cipher: &str) -> String {
    let len = value.chars().count();
    if len <= pre_len.saturating_add(suf_len) {
        return value.to_owned();
    }

    let end = len - suf_len;
    let masked = end - pre_len;
    let mut out = String::with_capacity(value.len() + masked * cipher.len());
    for (index, ch) in value.chars().enumerate() {
        if index >= pre_len && index < end {
            out.push_str(cipher);
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{mask, mask_str};

    #[test]
    fn absent_input_stays_absent() {
        assert_eq!(mask(None::<String>, 1, 1, "*"), None);
    }

    #[test]
    fn masks_middle_with_single_char_cipher() {
        assert_eq!(mask_str("1234567890", 3, 2, "*"), "123*****90");
    }

    #[test]
    fn cipher_is_repeated_per_masked_position() {
        assert_eq!(mask_str("1234567890", 3, 2, "**"), "123**********90");
    }

    #[test]
    fn short_values_are_never_masked() {
        assert_eq!(mask_str("abcd", 2, 2, "*"), "abcd");
        assert_eq!(mask_str("abc", 2, 2, "*"), "abc");
        assert_eq!(mask_str("", 0, 0, "*"), "");
    }

    #[test]
    fn zero_lengths_mask_everything() {
        assert_eq!(mask_str("abc", 0, 0, "#"), "###");
    }

    #[test]
    fn empty_cipher_removes_middle() {
        assert_eq!(mask_str("abcdef", 1, 1, ""), "af");
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(mask_str("秘密数据", 1, 1, "*"), "秘**据");
    }

    #[test]
    fn huge_lengths_do_not_overflow() {
        assert_eq!(mask_str("abc", usize::MAX, 1, "*"), "abc");
    }
}
