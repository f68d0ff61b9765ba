//! Client-side validation for the sign-up form
//!
//! A small declarative schema: each validated field carries an ordered
//! list of rules. Validation never aborts early; every field is checked
//! and the first violated rule per field is reported.

use std::collections::HashMap;

/// Raw form values keyed by field name
pub type FormValues = HashMap<&'static str, String>;

/// Field name -> message of the first violated rule
pub type ValidationErrors = HashMap<&'static str, String>;

/// A single validation rule with its user-facing message
#[derive(Debug, Clone)]
enum Rule {
    Required(&'static str),
    Email(&'static str),
    MinLen(usize, &'static str),
}

impl Rule {
    fn check(&self, value: &str) -> Option<&'static str> {
        match self {
            Rule::Required(msg) => value.trim().is_empty().then_some(*msg),
            Rule::Email(msg) => (!is_email(value)).then_some(*msg),
            Rule::MinLen(min, msg) => (value.chars().count() < *min).then_some(*msg),
        }
    }
}

/// The fixed sign-up schema.
///
/// Only these five fields are validated; address, phone and CEP are
/// accepted as-is beyond masking. That asymmetry matches the served
/// API's contract and is intentional.
fn schema() -> Vec<(&'static str, Vec<Rule>)> {
    vec![
        (
            "email",
            vec![
                Rule::Required("E-mail obrigatório"),
                Rule::Email("Digite um e-mail válido"),
            ],
        ),
        (
            "password",
            vec![
                Rule::Required("Senha obrigatória"),
                Rule::MinLen(6, "A senha precisa ter no minimo 6 caracteres"),
            ],
        ),
        ("name", vec![Rule::Required("Nome Obrigatório")]),
        ("cpf", vec![Rule::Required("CPF Obrigatório")]),
        (
            "birthday",
            vec![Rule::Required("Data de nascimento obrigatória")],
        ),
    ]
}

/// Validate form values against the sign-up schema.
///
/// Returns every violated field mapped to the first broken rule's
/// message, in one pass (abort-early = false).
pub fn validate_sign_up(values: &FormValues) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    for (field, rules) in schema() {
        let value = values.get(field).map(String::as_str).unwrap_or("");
        if let Some(msg) = rules.iter().find_map(|r| r.check(value)) {
            errors.insert(field, msg.to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Minimal email shape check: `local@domain.tld`, no whitespace
fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if value.chars().any(char::is_whitespace) || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
