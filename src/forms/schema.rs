use std::sync::LazyLock;

use regex::Regex;

use super::record::FormRecord;

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// The check a [`FieldConstraint`] runs against one field value.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Inclusive lower bound, counted in characters.
    MinLength(usize),
    /// Inclusive upper bound, counted in characters.
    MaxLength(usize),
    Email,
    /// Passes when the pattern matches anywhere in the value.
    Pattern(Regex),
}

impl Rule {
    pub fn is_satisfied_by(&self, value: &str) -> bool {
        match self {
            Rule::MinLength(min) => value.chars().count() >= *min,
            Rule::MaxLength(max) => value.chars().count() <= *max,
            Rule::Email => EMAIL_SHAPE.is_match(value),
            Rule::Pattern(re) => re.is_match(value),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FieldConstraint {
    pub rule: Rule,
    pub message: &'static str,
}

/// Ordered constraints for a single field.
#[derive(Debug, Clone)]
pub struct FieldSchema {
    pub name: &'static str,
    pub constraints: Vec<FieldConstraint>,
}

impl FieldSchema {
    pub fn new(name: &'static str) -> Self {
        Self { name, constraints: Vec::new() }
    }

    fn with(mut self, rule: Rule, message: &'static str) -> Self {
        self.constraints.push(FieldConstraint { rule, message });
        self
    }

    pub fn min_length(self, min: usize, message: &'static str) -> Self {
        self.with(Rule::MinLength(min), message)
    }

    pub fn max_length(self, max: usize, message: &'static str) -> Self {
        self.with(Rule::MaxLength(max), message)
    }

    pub fn email(self, message: &'static str) -> Self {
        self.with(Rule::Email, message)
    }

    /// Panics on an invalid pattern; schemas are built from literals.
    pub fn pattern(self, pattern: &str, message: &'static str) -> Self {
        let re = Regex::new(pattern).expect("schema pattern is valid");
        self.with(Rule::Pattern(re), message)
    }

    /// Message of the first constraint (in declaration order) the value breaks.
    pub fn first_violation(&self, value: &str) -> Option<&'static str> {
        self.constraints
            .iter()
            .find(|c| !c.rule.is_satisfied_by(value))
            .map(|c| c.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrossFieldRule {
    Equals { field: &'static str, other: &'static str },
}

/// A rule spanning two fields; its message is reported under `target`.
#[derive(Debug, Clone)]
pub struct CrossFieldConstraint {
    pub rule: CrossFieldRule,
    pub target: &'static str,
    pub message: &'static str,
}

impl CrossFieldConstraint {
    /// `field` must equal `other`; a mismatch is reported on `field`.
    pub fn equals(field: &'static str, other: &'static str, message: &'static str) -> Self {
        Self {
            rule: CrossFieldRule::Equals { field, other },
            target: field,
            message,
        }
    }

    pub fn is_satisfied_by<R: FormRecord>(&self, record: &R) -> bool {
        match &self.rule {
            CrossFieldRule::Equals { field, other } => record.field(field) == record.field(other),
        }
    }
}

/// Declarative description of one form: per-field constraints in display
/// order, then cross-field constraints.
#[derive(Debug, Clone)]
pub struct FormSchema {
    fields: Vec<FieldSchema>,
    cross_field: Vec<CrossFieldConstraint>,
}

impl FormSchema {
    pub fn new(fields: Vec<FieldSchema>) -> Self {
        Self { fields, cross_field: Vec::new() }
    }

    pub fn with_cross_field(mut self, constraint: CrossFieldConstraint) -> Self {
        self.cross_field.push(constraint);
        self
    }

    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    pub fn cross_field(&self) -> &[CrossFieldConstraint] {
        &self.cross_field
    }

    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.name).collect()
    }

    /// True when the schema covers exactly the record's fields, in order.
    pub fn describes<R: FormRecord>(&self) -> bool {
        self.field_names() == R::FIELDS
    }
}

pub static CONTACT_SCHEMA: LazyLock<FormSchema> = LazyLock::new(|| {
    FormSchema::new(vec![
        FieldSchema::new("firstname")
            .min_length(2, "Le prénom doit contenir au moins 2 caractères")
            .max_length(50, "Le prénom ne peut pas dépasser 50 caractères"),
        FieldSchema::new("lastname")
            .min_length(2, "Le nom doit contenir au moins 2 caractères")
            .max_length(50, "Le nom ne peut pas dépasser 50 caractères"),
        email_field(),
        FieldSchema::new("subject")
            .min_length(5, "Le sujet doit contenir au moins 5 caractères")
            .max_length(100, "Le sujet ne peut pas dépasser 100 caractères"),
        FieldSchema::new("message")
            .min_length(20, "Le message doit contenir au moins 20 caractères")
            .max_length(1000, "Le message ne peut pas dépasser 1000 caractères"),
    ])
});

pub static SIGNUP_SCHEMA: LazyLock<FormSchema> = LazyLock::new(|| {
    FormSchema::new(vec![
        FieldSchema::new("name")
            .min_length(2, "Le nom doit contenir au moins 2 caractères")
            .max_length(50, "Le nom ne peut pas dépasser 50 caractères"),
        email_field(),
        FieldSchema::new("password")
            .min_length(8, "Le mot de passe doit contenir au moins 8 caractères")
            .pattern("[A-Z]", "Le mot de passe doit contenir au moins une majuscule")
            .pattern("[a-z]", "Le mot de passe doit contenir au moins une minuscule")
            .pattern("[0-9]", "Le mot de passe doit contenir au moins un chiffre")
            .pattern("[^A-Za-z0-9]", "Le mot de passe doit contenir au moins un caractère spécial"),
        FieldSchema::new("confirmPassword"),
    ])
    .with_cross_field(CrossFieldConstraint::equals(
        "confirmPassword",
        "password",
        "Les mots de passe ne correspondent pas",
    ))
});

fn email_field() -> FieldSchema {
    FieldSchema::new("email")
        .email("Format d'email invalide")
        .min_length(5, "L'email est requis")
        .max_length(100, "L'email ne peut pas dépasser 100 caractères")
}
