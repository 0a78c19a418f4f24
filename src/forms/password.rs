use serde::Serialize;

/// One line of the live password checklist shown while typing.
#[derive(Debug, Clone, Copy)]
pub struct PasswordRequirement {
    pub id: &'static str,
    pub label: &'static str,
    predicate: fn(&str) -> bool,
}

impl PasswordRequirement {
    pub fn is_met_by(&self, password: &str) -> bool {
        (self.predicate)(password)
    }
}

pub const PASSWORD_REQUIREMENTS: [PasswordRequirement; 5] = [
    PasswordRequirement {
        id: "length",
        label: "Au moins 8 caractères",
        predicate: |p| p.chars().count() >= 8,
    },
    PasswordRequirement {
        id: "uppercase",
        label: "Une majuscule",
        predicate: |p| p.chars().any(|c| c.is_ascii_uppercase()),
    },
    PasswordRequirement {
        id: "lowercase",
        label: "Une minuscule",
        predicate: |p| p.chars().any(|c| c.is_ascii_lowercase()),
    },
    PasswordRequirement {
        id: "number",
        label: "Un chiffre",
        predicate: |p| p.chars().any(|c| c.is_ascii_digit()),
    },
    PasswordRequirement {
        id: "special",
        label: "Un caractère spécial",
        predicate: |p| p.chars().any(|c| !c.is_ascii_alphanumeric()),
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequirementStatus {
    pub id: &'static str,
    pub label: &'static str,
    pub satisfied: bool,
}

/// Evaluates every requirement against the current (possibly partial) value.
pub fn evaluate(password: &str) -> Vec<RequirementStatus> {
    PASSWORD_REQUIREMENTS
        .iter()
        .map(|r| RequirementStatus {
            id: r.id,
            label: r.label,
            satisfied: r.is_met_by(password),
        })
        .collect()
}

pub fn all_met(password: &str) -> bool {
    PASSWORD_REQUIREMENTS.iter().all(|r| r.is_met_by(password))
}
