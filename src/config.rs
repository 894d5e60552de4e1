//! Input bounds applied by the menu before records reach the tree.

/// Default byte bound for names. Matches a 50 byte buffer with room for a NUL.
pub const DEFAULT_MAX_NAME_LEN: usize = 49;

/// Default byte bound for phone numbers. Matches a 15 byte buffer with room for a NUL.
pub const DEFAULT_MAX_PHONE_LEN: usize = 14;

/// Byte bounds for the two text fields of a contact.
///
/// The tree itself accepts names of any length; these bounds only shape what
/// the menu passes in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    /// Longest name, in bytes, that is kept.
    pub max_name_len: usize,
    /// Longest phone number, in bytes, that is kept.
    pub max_phone_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_name_len: DEFAULT_MAX_NAME_LEN,
            max_phone_len: DEFAULT_MAX_PHONE_LEN,
        }
    }
}

impl Limits {
    /// Cuts `name` down to [`Limits::max_name_len`] bytes.
    pub fn bound_name<'a>(&self, name: &'a str) -> &'a str {
        truncate(name, self.max_name_len)
    }

    /// Cuts `phone` down to [`Limits::max_phone_len`] bytes.
    pub fn bound_phone<'a>(&self, phone: &'a str) -> &'a str {
        truncate(phone, self.max_phone_len)
    }
}

/// Returns the longest prefix of `s` that fits in `max` bytes without splitting
/// a character.
fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }

    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    tracing::warn!(original_len = s.len(), kept = end, "input truncated");
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_is_untouched() {
        let limits = Limits::default();
        assert_eq!(limits.bound_name("Ana"), "Ana");
        assert_eq!(limits.bound_phone("555-0101"), "555-0101");
    }

    #[test]
    fn long_input_is_cut_to_the_bound() {
        let limits = Limits {
            max_name_len: 3,
            max_phone_len: 2,
        };
        assert_eq!(limits.bound_name("Roberta"), "Rob");
        assert_eq!(limits.bound_phone("12345"), "12");
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // "é" is two bytes so a 2 byte bound can only keep "J".
        let limits = Limits {
            max_name_len: 2,
            max_phone_len: 14,
        };
        assert_eq!(limits.bound_name("Jé"), "J");
    }

    #[test]
    fn defaults_match_buffer_sizes() {
        let limits = Limits::default();
        assert_eq!(limits.max_name_len, 49);
        assert_eq!(limits.max_phone_len, 14);
    }
}
