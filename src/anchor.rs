use unicode_normalization::UnicodeNormalization;

/// Turns a navigation label into the id of the section it points at.
///
/// The label is lowercased, decomposed (NFD) and stripped of combining
/// diacritical marks, so `"Início"` becomes `"inicio"`.
pub fn anchor_id(label: &str) -> String {
    label
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

pub fn nav_href(label: &str) -> String {
    format!("#{}", anchor_id(label))
}

fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}
