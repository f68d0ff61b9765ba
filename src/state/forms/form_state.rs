//! Sign-up form state

use super::field::FormField;
use crate::mask::MaskKind;
use crate::state::{NewUser, USER_PERMISSION, USER_TYPE};
use crate::validation::{FormValues, ValidationErrors};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> &mut FormField;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// The member registration form.
///
/// Field order mirrors the sign-up screen's focus chain.
#[derive(Debug, Clone)]
pub struct SignUpForm {
    pub name: FormField,
    pub cpf: FormField,
    pub rg: FormField,
    pub birthday: FormField,
    pub email: FormField,
    pub password: FormField,
    pub phone: FormField,
    pub zip: FormField,
    pub street: FormField,
    pub number: FormField,
    pub complement: FormField,
    pub neighborhood: FormField,
    pub city: FormField,
    pub state: FormField,
    pub active_field_index: usize,
}

impl SignUpForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Nome"),
            cpf: FormField::masked("cpf", "CPF", MaskKind::Cpf),
            rg: FormField::text("rg", "RG"),
            birthday: FormField::masked("birthday", "Data de Nascimento", MaskKind::Date),
            email: FormField::text("email", "E-Mail"),
            password: FormField::secret("password", "Senha"),
            phone: FormField::masked("phone", "Telefone", MaskKind::Phone),
            zip: FormField::masked("zip", "CEP", MaskKind::Zip),
            street: FormField::text("street", "Logradouro"),
            number: FormField::text("number", "Numero"),
            complement: FormField::text("complement", "Complemento"),
            neighborhood: FormField::text("neighborhood", "Bairro"),
            city: FormField::text("city", "Cidade"),
            state: FormField::text("state", "UF"),
            active_field_index: 0,
        }
    }

    fn fields(&self) -> [&FormField; 14] {
        [
            &self.name,
            &self.cpf,
            &self.rg,
            &self.birthday,
            &self.email,
            &self.password,
            &self.phone,
            &self.zip,
            &self.street,
            &self.number,
            &self.complement,
            &self.neighborhood,
            &self.city,
            &self.state,
        ]
    }

    fn fields_mut(&mut self) -> [&mut FormField; 14] {
        [
            &mut self.name,
            &mut self.cpf,
            &mut self.rg,
            &mut self.birthday,
            &mut self.email,
            &mut self.password,
            &mut self.phone,
            &mut self.zip,
            &mut self.street,
            &mut self.number,
            &mut self.complement,
            &mut self.neighborhood,
            &mut self.city,
            &mut self.state,
        ]
    }

    /// Raw values for validation, keyed by field name
    pub fn values(&self) -> FormValues {
        self.fields()
            .into_iter()
            .map(|f| (f.name, f.display_value().to_string()))
            .collect()
    }

    /// Write validation messages into the matching fields
    pub fn set_errors(&mut self, errors: &ValidationErrors) {
        for field in self.fields_mut() {
            field.error = errors.get(field.name).cloned();
        }
    }

    /// Clear every field's validation message
    pub fn clear_errors(&mut self) {
        for field in self.fields_mut() {
            field.error = None;
        }
    }

    /// Whether any field currently shows a validation message
    pub fn has_errors(&self) -> bool {
        self.fields().into_iter().any(|f| f.error.is_some())
    }

    /// Build the registration payload from the current values.
    ///
    /// CPF and CEP submit digits only, the birthday submits in ISO form,
    /// and the phone keeps its display formatting, matching what the API
    /// stores. Classification and permission are fixed.
    pub fn payload(&self) -> NewUser {
        NewUser {
            name: self.name.display_value().to_string(),
            cpf: self.cpf.unmasked_value(),
            birthday: self.birthday.unmasked_value(),
            email: self.email.display_value().to_string(),
            password: self.password.display_value().to_string(),
            rg: self.rg.display_value().to_string(),
            zip: self.zip.unmasked_value(),
            number: self.number.display_value().to_string(),
            complement: self.complement.display_value().to_string(),
            street: self.street.display_value().to_string(),
            neighborhood: self.neighborhood.display_value().to_string(),
            phone: self.phone.display_value().to_string(),
            city: self.city.display_value().to_string(),
            state: self.state.display_value().to_string(),
            kind: USER_TYPE.to_string(),
            permission: USER_PERMISSION.to_string(),
        }
    }
}

impl Default for SignUpForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for SignUpForm {
    fn field_count(&self) -> usize {
        14
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(13);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.name,
            1 => &mut self.cpf,
            2 => &mut self.rg,
            3 => &mut self.birthday,
            4 => &mut self.email,
            5 => &mut self.password,
            6 => &mut self.phone,
            7 => &mut self.zip,
            8 => &mut self.street,
            9 => &mut self.number,
            10 => &mut self.complement,
            11 => &mut self.neighborhood,
            12 => &mut self.city,
            _ => &mut self.state,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        (index < 14).then(|| self.fields()[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_sign_up;

    fn filled_form() -> SignUpForm {
        let mut form = SignUpForm::new();
        type_into(&mut form.name, "Ana");
        type_into(&mut form.cpf, "123.456.789-00");
        type_into(&mut form.rg, "112233");
        type_into(&mut form.birthday, "01/01/1990");
        type_into(&mut form.email, "a@b.com");
        type_into(&mut form.password, "secret1");
        type_into(&mut form.phone, "11987654321");
        type_into(&mut form.zip, "01310-100");
        type_into(&mut form.street, "Av. Paulista");
        type_into(&mut form.number, "100");
        type_into(&mut form.neighborhood, "Bela Vista");
        type_into(&mut form.city, "São Paulo");
        type_into(&mut form.state, "SP");
        form
    }

    fn type_into(field: &mut FormField, text: &str) {
        for c in text.chars() {
            field.push_char(c);
        }
    }

    mod navigation {
        use super::*;

        #[test]
        fn test_new_starts_on_first_field() {
            let form = SignUpForm::new();
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.get_field(0).unwrap().name, "name");
        }

        #[test]
        fn test_next_field_wraps_after_last() {
            let mut form = SignUpForm::new();
            for _ in 0..14 {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_last() {
            let mut form = SignUpForm::new();
            form.prev_field();
            assert_eq!(form.active_field_index, 13);
            assert_eq!(form.get_field(13).unwrap().name, "state");
        }

        #[test]
        fn test_field_order_matches_focus_chain() {
            let form = SignUpForm::new();
            let names: Vec<&str> = (0..14).map(|i| form.get_field(i).unwrap().name).collect();
            assert_eq!(
                names,
                vec![
                    "name",
                    "cpf",
                    "rg",
                    "birthday",
                    "email",
                    "password",
                    "phone",
                    "zip",
                    "street",
                    "number",
                    "complement",
                    "neighborhood",
                    "city",
                    "state",
                ]
            );
        }

        #[test]
        fn test_get_field_out_of_range_is_none() {
            let form = SignUpForm::new();
            assert!(form.get_field(14).is_none());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = SignUpForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, 13);
        }
    }

    mod errors {
        use super::*;

        #[test]
        fn test_set_errors_targets_matching_fields() {
            let mut form = SignUpForm::new();
            let errors = validate_sign_up(&form.values()).unwrap_err();
            form.set_errors(&errors);

            assert_eq!(form.email.error.as_deref(), Some("E-mail obrigatório"));
            assert_eq!(form.name.error.as_deref(), Some("Nome Obrigatório"));
            assert!(form.street.error.is_none());
            assert!(form.has_errors());
        }

        #[test]
        fn test_set_errors_clears_stale_messages() {
            let mut form = filled_form();
            form.email.error = Some("old".to_string());
            form.set_errors(&ValidationErrors::new());
            assert!(!form.has_errors());
        }

        #[test]
        fn test_clear_errors() {
            let mut form = SignUpForm::new();
            form.email.error = Some("x".to_string());
            form.clear_errors();
            assert!(!form.has_errors());
        }
    }

    mod payload {
        use super::*;

        #[test]
        fn test_payload_strips_cpf_and_zip_formatting() {
            let payload = filled_form().payload();
            assert_eq!(payload.cpf, "12345678900");
            assert_eq!(payload.zip, "01310100");
            assert!(payload.cpf.chars().all(|c| c.is_ascii_digit()));
            assert!(payload.zip.chars().all(|c| c.is_ascii_digit()));
        }

        #[test]
        fn test_payload_birthday_is_iso() {
            let payload = filled_form().payload();
            assert_eq!(payload.birthday, "1990-01-01");
        }

        #[test]
        fn test_payload_phone_keeps_display_format() {
            let payload = filled_form().payload();
            assert_eq!(payload.phone, "(11) 98765-4321");
        }

        #[test]
        fn test_payload_fixed_fields() {
            let payload = filled_form().payload();
            assert_eq!(payload.kind, "1");
            assert_eq!(payload.permission, "true");
        }

        #[test]
        fn test_values_expose_masked_display() {
            let form = filled_form();
            let values = form.values();
            assert_eq!(values.get("cpf").unwrap(), "123.456.789-00");
            assert_eq!(values.get("birthday").unwrap(), "01/01/1990");
            assert!(validate_sign_up(&values).is_ok());
        }
    }
}
