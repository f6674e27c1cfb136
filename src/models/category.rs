#[derive(Debug, Clone)]
pub struct Category {
    pub id: Option<i64>,
    pub name: String,
}

impl Category {
    /// Normalize user input into a stored category name: trimmed, inner
    /// whitespace collapsed, every word capitalized. `None` when nothing is left.
    pub fn normalize_name(raw: &str) -> Option<String> {
        let name = title_case(raw);
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Capitalize every letter that follows a non-letter and lower-case the
/// rest, word by word: "self-care" → "Self-Care", "rent2go" → "Rent2Go",
/// "o'neil" → "O'Neil".
pub fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for word in raw.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        let mut capitalize = true;
        for c in word.chars() {
            if !c.is_alphabetic() {
                out.push(c);
                capitalize = true;
            } else if capitalize {
                out.extend(c.to_uppercase());
                capitalize = false;
            } else {
                out.extend(c.to_lowercase());
            }
        }
    }
    out
}
