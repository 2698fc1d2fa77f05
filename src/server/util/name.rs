/// Whether two names collide under the uniqueness rules for categories, countries, owners,
/// pokemon and reviews: surrounding whitespace is ignored and letters compare case-insensitively.
pub fn is_same_name(a: &str, b: &str) -> bool {
    a.trim().to_uppercase() == b.trim().to_uppercase()
}

/// Find the first name in `existing` that collides with `candidate`
pub fn find_duplicate<'a, I>(existing: I, candidate: &str) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    existing.into_iter().find(|name| is_same_name(name, candidate))
}
