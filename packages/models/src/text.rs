//! Display and search helpers for plain strings.

/// `"pikachu"` becomes `"Pikachu"`. Only the first character changes.
pub fn first_letter_uppercased(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Capitalizes each hyphen-separated word: `"mr-mime"` becomes `"Mr-Mime"`.
/// Empty words are dropped.
pub fn hyphenated_title(name: &str) -> String {
    name.split('-')
        .filter(|word| !word.is_empty())
        .map(first_letter_uppercased)
        .collect::<Vec<_>>()
        .join("-")
}

/// Whether `haystack` contains every needle.
pub fn contains_all<S: AsRef<str>>(haystack: &str, needles: &[S]) -> bool {
    needles
        .iter()
        .all(|needle| haystack.contains(needle.as_ref()))
}

/// Whether every needle is contained in at least one of `haystacks`.
pub fn any_contains_all<H: AsRef<str>, S: AsRef<str>>(haystacks: &[H], needles: &[S]) -> bool {
    needles.iter().all(|needle| {
        haystacks
            .iter()
            .any(|haystack| haystack.as_ref().contains(needle.as_ref()))
    })
}

/// Lowercased search terms from free text.
pub fn search_terms(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).collect()
}

pub(crate) fn compact_lowercased(values: &[Option<&str>]) -> Vec<String> {
    values.iter().flatten().map(|value| value.to_lowercase()).collect()
}
