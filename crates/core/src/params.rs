//! Conversions between human-entered names and PokeAPI identifiers.

/// Formats a human-entered name as a PokeAPI path segment.
///
/// Lower-cases the input and replaces every space with a hyphen, so
/// `"Tapu Lele"` becomes `"tapu-lele"`. No other characters are touched.
pub fn normalize(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Title-cases text word by word.
///
/// A letter is upper-cased when it does not directly follow another letter
/// and lower-cased otherwise. Digits and punctuation start a new word, so
/// `"omega-ruby"` becomes `"Omega-Ruby"`.
pub fn title_case(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut previous_is_letter = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                output.extend(c.to_lowercase());
            } else {
                output.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            output.push(c);
            previous_is_letter = false;
        }
    }

    output
}

/// Turns an identifier like `"route-201"` into display text (`"Route 201"`).
pub fn humanize(identifier: &str) -> String {
    title_case(&identifier.replace('-', " "))
}
