//! Identifier transforms used to compute suggested fixes.
//!
//! All functions are pure and return new strings. Case handling is ASCII,
//! which keeps the byte length of a corrected identifier equal to the
//! original apart from removed characters.

/// Returns the character at char index `index`, if any.
#[must_use]
pub fn char_at(name: &str, index: usize) -> Option<char> {
    name.chars().nth(index)
}

/// Returns a copy of `name` with the character at `index` lowercased.
///
/// An out-of-range `index` returns `name` unchanged.
///
/// ```
/// use objc_lint_core::utils::ident::lowercase_at;
/// assert_eq!(lowercase_at("_Foo", 1), "_foo");
/// ```
#[must_use]
pub fn lowercase_at(name: &str, index: usize) -> String {
    name.chars()
        .enumerate()
        .map(|(i, c)| if i == index { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Returns a copy of `name` with its first character uppercased.
#[must_use]
pub fn uppercase_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(name.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Returns a copy of `name` with every `_` removed.
#[must_use]
pub fn strip_underscores(name: &str) -> String {
    name.chars().filter(|&c| c != '_').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_at() {
        assert_eq!(char_at("Foo", 0), Some('F'));
        assert_eq!(char_at("_Foo", 1), Some('F'));
        assert_eq!(char_at("_", 1), None);
        assert_eq!(char_at("", 0), None);
    }

    #[test]
    fn test_lowercase_at() {
        assert_eq!(lowercase_at("Title", 0), "title");
        assert_eq!(lowercase_at("_Foo", 1), "_foo");
        assert_eq!(lowercase_at("ABC", 1), "AbC");
    }

    #[test]
    fn test_lowercase_at_out_of_range() {
        assert_eq!(lowercase_at("Foo", 3), "Foo");
    }

    #[test]
    fn test_uppercase_first() {
        assert_eq!(uppercase_first("myClass"), "MyClass");
        assert_eq!(uppercase_first("MyClass"), "MyClass");
        assert_eq!(uppercase_first("x"), "X");
        assert_eq!(uppercase_first(""), "");
    }

    #[test]
    fn test_strip_underscores() {
        assert_eq!(strip_underscores("My_Class"), "MyClass");
        assert_eq!(strip_underscores("__a_b__c_"), "abc");
        assert_eq!(strip_underscores("Plain"), "Plain");
        assert_eq!(strip_underscores("___"), "");
    }

    #[test]
    fn test_non_ascii_untouched() {
        assert_eq!(uppercase_first("éclair"), "éclair");
        assert_eq!(lowercase_at("Ünit", 0), "Ünit");
    }
}
