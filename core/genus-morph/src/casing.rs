/// Capitalization scheme of a surface form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Casing {
    /// Every letter upper-case ("СДЕЛАЛ").
    Upper,
    /// First letter upper-case ("Сделал").
    Capitalized,
    Lower,
}

impl Casing {
    pub fn of(form: &str) -> Casing {
        let has_letter = form.chars().any(char::is_alphabetic);
        if has_letter && !form.chars().any(char::is_lowercase) {
            Casing::Upper
        } else if form.chars().next().is_some_and(char::is_uppercase) {
            Casing::Capitalized
        } else {
            Casing::Lower
        }
    }

    /// Renders a lower-case form in this scheme.
    pub fn apply(self, form: &str) -> String {
        match self {
            Casing::Upper => form.to_uppercase(),
            Casing::Capitalized => {
                let mut chars = form.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
            Casing::Lower => form.to_string(),
        }
    }
}
