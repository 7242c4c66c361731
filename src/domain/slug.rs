//! Deterministic slug derivation for article and job titles.
//!
//! Slugification itself is delegated to the `slug` crate; the helpers here add
//! the empty/unrepresentable error cases and a uniqueness loop driven by a
//! caller-supplied predicate, keeping the derivation pure and storage-agnostic.

use slug::slugify;
use thiserror::Error;

const MAX_SUFFIX_ATTEMPTS: usize = 32;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlugError {
    #[error("slug source text is empty")]
    EmptyInput,
    #[error("failed to derive slug from `{input}`")]
    Unrepresentable { input: String },
    #[error("exhausted attempts to find a unique slug for `{base}`")]
    Exhausted { base: String },
}

/// Derive a base slug from the provided human-readable text.
pub fn derive_slug(input: &str) -> Result<String, SlugError> {
    if input.trim().is_empty() {
        return Err(SlugError::EmptyInput);
    }

    let candidate = slugify(input);
    if candidate.is_empty() {
        return Err(SlugError::Unrepresentable {
            input: input.to_string(),
        });
    }

    Ok(candidate)
}

/// Produce a slug that does not collide according to the supplied predicate.
///
/// `is_unique` must return `true` when the candidate slug is free. Collisions
/// are resolved by suffixing a monotonic counter (`-2`, `-3`, ...).
pub fn generate_unique_slug<F>(input: &str, mut is_unique: F) -> Result<String, SlugError>
where
    F: FnMut(&str) -> bool,
{
    let base = derive_slug(input)?;

    if is_unique(&base) {
        return Ok(base);
    }

    for attempt in 2..=MAX_SUFFIX_ATTEMPTS + 1 {
        let candidate = format!("{base}-{attempt}");
        if is_unique(&candidate) {
            return Ok(candidate);
        }
    }

    Err(SlugError::Exhausted { base })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn derives_lowercase_hyphenated_slugs() {
        let slug = derive_slug("2026 Corolla Hybrid vs. Civic Hybrid").expect("slug");
        assert_eq!(slug, "2026-corolla-hybrid-vs-civic-hybrid");
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(derive_slug("   "), Err(SlugError::EmptyInput));
    }

    #[test]
    fn suffixes_on_collision() {
        let taken: HashSet<&str> = HashSet::from(["winter-tires-guide", "winter-tires-guide-2"]);
        let slug = generate_unique_slug("Winter Tires Guide", |candidate| {
            !taken.contains(candidate)
        })
        .expect("unique slug");
        assert_eq!(slug, "winter-tires-guide-3");
    }

    #[test]
    fn exhausts_after_bounded_attempts() {
        let result = generate_unique_slug("EV charging", |_| false);
        assert!(matches!(result, Err(SlugError::Exhausted { .. })));
    }
}
