use super::record::FormRecord;
use super::schema::FormSchema;

/// Field name to message, in the order the errors were found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(&'static str, &'static str)>);

impl FieldErrors {
    /// Records `message` for `field` unless the field already has one.
    pub fn insert(&mut self, field: &'static str, message: &'static str) {
        if self.get(field).is_none() {
            self.0.push((field, message));
        }
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.iter().find(|(f, _)| *f == field).map(|(_, m)| *m)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|(f, _)| *f)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult<R> {
    Valid(R),
    Invalid(FieldErrors),
}

impl<R> ValidationResult<R> {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            ValidationResult::Valid(_) => None,
            ValidationResult::Invalid(errors) => Some(errors),
        }
    }
}

/// Runs `schema` against `record`.
///
/// Every field is checked and reports at most its first failing constraint.
/// Cross-field constraints only run once all per-field constraints pass.
pub fn validate<R: FormRecord>(record: R, schema: &FormSchema) -> ValidationResult<R> {
    let mut errors = FieldErrors::default();

    for field in schema.fields() {
        let value = record.field(field.name).unwrap_or_default();
        if let Some(message) = field.first_violation(value) {
            errors.insert(field.name, message);
        }
    }

    if errors.is_empty() {
        for constraint in schema.cross_field() {
            if !constraint.is_satisfied_by(&record) {
                errors.insert(constraint.target, constraint.message);
            }
        }
    }

    if errors.is_empty() {
        ValidationResult::Valid(record)
    } else {
        ValidationResult::Invalid(errors)
    }
}
