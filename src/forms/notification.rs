use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    Default,
    Destructive,
}

impl NotificationVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationVariant::Default => "default",
            NotificationVariant::Destructive => "destructive",
        }
    }
}

/// Transient message shown after a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub variant: NotificationVariant,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(copy: &NotificationCopy) -> Self {
        Self {
            variant: NotificationVariant::Default,
            title: copy.title.to_string(),
            description: copy.description.to_string(),
        }
    }

    /// Generic, non-field-specific failure message.
    pub fn failure() -> Self {
        Self {
            variant: NotificationVariant::Destructive,
            title: "Erreur".to_string(),
            description: "Une erreur est survenue. Veuillez réessayer.".to_string(),
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationCopy {
    pub title: &'static str,
    pub description: &'static str,
}

pub const CONTACT_SENT: NotificationCopy = NotificationCopy {
    title: "Message envoyé !",
    description: "Nous vous répondrons dans les plus brefs délais.",
};

pub const SIGNUP_CREATED: NotificationCopy = NotificationCopy {
    title: "Compte créé !",
    description: "Vous pouvez maintenant vous connecter.",
};
