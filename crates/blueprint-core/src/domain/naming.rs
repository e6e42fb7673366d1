//! Name normalization and case conversion.
//!
//! Element names typed at a prompt end up as identifiers in the DSL, folder
//! names on disk, and keys for duplicate detection. All three derive from the
//! same word splitting so "User Service", "userService" and "user-service"
//! agree with each other.

/// Key used for duplicate detection.
///
/// Keeps Unicode alphanumerics only, then lowercases. Whitespace, punctuation
/// and casing never distinguish two names.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Split a name into lowercase words on separators and camel-case humps.
pub fn split_words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            // "fooBar" splits before B; "HTTPServer" splits before the S.
            if prev.is_lowercase() || prev.is_numeric() || (prev.is_uppercase() && next_is_lower)
            {
                words.push(std::mem::take(&mut current));
            }
        }

        current.extend(c.to_lowercase());
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

pub fn to_kebab_case(input: &str) -> String {
    split_words(input).join("-")
}

pub fn to_snake_case(input: &str) -> String {
    split_words(input).join("_")
}

pub fn to_pascal_case(input: &str) -> String {
    split_words(input).iter().map(|w| capitalize(w)).collect()
}

pub fn to_camel_case(input: &str) -> String {
    let words = split_words(input);
    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            out.push_str(word);
        } else {
            out.push_str(&capitalize(word));
        }
    }
    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
