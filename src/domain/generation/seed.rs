//! Deterministic seed for generated chart data.

use crate::domain::foundation::TemplateCategory;

/// 32-bit rolling hash (`h * 31 + c`) over UTF-16 code units.
///
/// Arithmetic wraps as two's-complement `i32`; the result is the absolute
/// value, so `i32::MIN` maps to `2^31`.
pub fn seed_hash(key: &str) -> u32 {
    key.encode_utf16()
        .fold(0i32, |hash, unit| {
            hash.wrapping_shl(5)
                .wrapping_sub(hash)
                .wrapping_add(i32::from(unit))
        })
        .unsigned_abs()
}

/// Seed for one (industry, department, category) triple.
pub fn template_seed(industry_id: &str, department_id: &str, category: TemplateCategory) -> u32 {
    seed_hash(&format!("{}-{}-{}", industry_id, department_id, category))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_key_hashes_to_zero() {
        assert_eq!(seed_hash(""), 0);
    }

    #[test]
    fn short_keys_match_polynomial() {
        assert_eq!(seed_hash("a"), 97);
        assert_eq!(seed_hash("ab"), 97 * 31 + 98);
        assert_eq!(seed_hash("abc"), (97 * 31 + 98) * 31 + 99);
    }

    #[test]
    fn negative_hashes_are_folded_to_absolute_value() {
        // "polygenelubricants" is a well-known key whose 31-multiplier hash is i32::MIN.
        assert_eq!(seed_hash("polygenelubricants"), 2_147_483_648);
    }

    #[test]
    fn non_ascii_keys_hash_by_utf16_units() {
        let expected = seed_hash("a") as i64 * 31 + 0x20B9;
        assert_eq!(seed_hash("a₹") as i64, expected);
    }

    #[test]
    fn template_seed_uses_dashed_key() {
        assert_eq!(
            template_seed("finance", "accounts", TemplateCategory::RiskCompliance),
            seed_hash("finance-accounts-risk-compliance")
        );
    }

    #[test]
    fn distinct_template_keys_mostly_differ() {
        let mut seeds = std::collections::HashSet::new();
        for dept in ["accounts", "hr", "sales", "operations", "it", "legal"] {
            for category in TemplateCategory::all() {
                seeds.insert(template_seed("manufacturing", dept, *category));
            }
        }
        assert!(seeds.len() >= 58, "too many collisions: {}", seeds.len());
    }

    proptest! {
        #[test]
        fn hash_is_deterministic(key in ".*") {
            prop_assert_eq!(seed_hash(&key), seed_hash(&key));
        }

        #[test]
        fn appending_a_char_changes_short_hashes(key in "[a-z-]{0,4}", c in "[a-z]") {
            let extended = format!("{}{}", key, c);
            prop_assert_ne!(seed_hash(&key), seed_hash(&extended));
        }
    }
}
