//! Loose medication-name matching.
//!
//! Caller-supplied names are free text such as `"Sertraline (Zoloft)"`.
//! Before comparison a name is cut at its first `(`, trimmed and lower-cased.
//! Two names match when either normalized form contains the other, so
//! `"sertraline hcl"` matches the canonical `"Sertraline"` and vice versa.
//!
//! The containment test is intentionally loose and can produce false
//! positives when a short canonical name appears inside an unrelated one.

/// Strip any parenthetical suffix, trim, and lower-case.
pub fn normalize_name(name: &str) -> String {
    let base = match name.find('(') {
        Some(idx) => &name[..idx],
        None => name,
    };
    base.trim().to_lowercase()
}

/// Bidirectional, case-insensitive substring match after normalization.
///
/// A name that normalizes to the empty string matches nothing; otherwise an
/// annotation-only entry like `"(Zoloft)"` would match every rule.
pub fn names_match(candidate: &str, canonical: &str) -> bool {
    let candidate = normalize_name(candidate);
    let canonical = normalize_name(canonical);
    if candidate.is_empty() || canonical.is_empty() {
        return false;
    }
    candidate.contains(&canonical) || canonical.contains(&candidate)
}
