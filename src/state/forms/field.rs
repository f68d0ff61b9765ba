//! Form field value objects

use crate::mask::MaskKind;

/// Type-safe field values
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    /// Masked input; `display` always conforms to the mask's pattern
    Masked { kind: MaskKind, display: String },
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub value: FieldValue,
    /// Validation message shown under the field, if any
    pub error: Option<String>,
    /// Render the value as bullets (password)
    pub is_secret: bool,
}

impl FormField {
    /// Create a new free-text field
    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            value: FieldValue::Text(String::new()),
            error: None,
            is_secret: false,
        }
    }

    /// Create a new secret (password) field
    pub fn secret(name: &'static str, label: &'static str) -> Self {
        Self {
            is_secret: true,
            ..Self::text(name, label)
        }
    }

    /// Create a new masked field
    pub fn masked(name: &'static str, label: &'static str, kind: MaskKind) -> Self {
        Self {
            name,
            label,
            value: FieldValue::Masked {
                kind,
                display: String::new(),
            },
            error: None,
            is_secret: false,
        }
    }

    /// Push a character to the field value.
    ///
    /// Masked fields accept digits only and re-run the mask, so the
    /// display string always matches the pattern.
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Masked { kind, display } => {
                if c.is_ascii_digit() {
                    let mut digits = kind.unmask_digits(display);
                    digits.push(c);
                    *display = kind.apply(&digits);
                }
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Masked { kind, display } => {
                let mut digits = kind.unmask_digits(display);
                digits.pop();
                *display = kind.apply(&digits);
            }
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Masked { display, .. } => display.clear(),
        }
    }

    /// The value as typed or masked, for rendering and validation
    pub fn display_value(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Masked { display, .. } => display,
        }
    }

    /// The canonical value for the submission payload.
    ///
    /// Text fields submit as typed; masked fields submit their unmasked
    /// value (digits, or the ISO date).
    pub fn unmasked_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Masked { kind, display } => kind.unmask(display),
        }
    }

    /// Placeholder hint for an empty field
    pub fn placeholder(&self) -> &'static str {
        match &self.value {
            FieldValue::Text(_) => "",
            FieldValue::Masked { kind, .. } => kind.placeholder(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_field_push_and_pop() {
        let mut field = FormField::text("name", "Nome");
        field.push_char('A');
        field.push_char('n');
        field.push_char('a');
        assert_eq!(field.display_value(), "Ana");
        field.pop_char();
        assert_eq!(field.display_value(), "An");
    }

    #[test]
    fn test_masked_field_formats_while_typing() {
        let mut field = FormField::masked("cpf", "CPF", MaskKind::Cpf);
        for c in "12345678900".chars() {
            field.push_char(c);
        }
        assert_eq!(field.display_value(), "123.456.789-00");
        assert_eq!(field.unmasked_value(), "12345678900");
    }

    #[test]
    fn test_masked_field_rejects_non_digits() {
        let mut field = FormField::masked("zip", "CEP", MaskKind::Zip);
        field.push_char('a');
        field.push_char('-');
        assert_eq!(field.display_value(), "");
        field.push_char('0');
        assert_eq!(field.display_value(), "0");
    }

    #[test]
    fn test_masked_field_ignores_overflow() {
        let mut field = FormField::masked("zip", "CEP", MaskKind::Zip);
        for c in "013101009999".chars() {
            field.push_char(c);
        }
        assert_eq!(field.display_value(), "01310-100");
    }

    #[test]
    fn test_masked_field_backspace_removes_digit_not_separator() {
        let mut field = FormField::masked("date", "Data de Nascimento", MaskKind::Date);
        for c in "0101".chars() {
            field.push_char(c);
        }
        assert_eq!(field.display_value(), "01/01");
        field.pop_char();
        assert_eq!(field.display_value(), "01/0");
        field.pop_char();
        assert_eq!(field.display_value(), "01");
    }

    #[test]
    fn test_date_unmasked_is_iso_when_complete() {
        let mut field = FormField::masked("birthday", "Data de Nascimento", MaskKind::Date);
        for c in "01011990".chars() {
            field.push_char(c);
        }
        assert_eq!(field.display_value(), "01/01/1990");
        assert_eq!(field.unmasked_value(), "1990-01-01");
    }

    #[test]
    fn test_clear_resets_value_but_keeps_kind() {
        let mut field = FormField::masked("cpf", "CPF", MaskKind::Cpf);
        field.push_char('1');
        field.clear();
        assert_eq!(field.display_value(), "");
        assert_eq!(field.placeholder(), "000.000.000-00");
    }

    #[test]
    fn test_secret_field_flag() {
        let field = FormField::secret("password", "Senha");
        assert!(field.is_secret);
        assert_eq!(field.placeholder(), "");
    }
}
