/// A way to reach the team, listed beside the contact form.
pub struct ContactChannel {
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
    pub aria_label: &'static str,
}

pub static CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        title: "Téléphone",
        description: "+33 1 23 45 67 89",
        href: "tel:+33123456789",
        aria_label: "Appeler notre service client",
    },
    ContactChannel {
        title: "Email",
        description: "contact@startupit.com",
        href: "mailto:contact@startupit.com",
        aria_label: "Envoyer un email à notre service client",
    },
    ContactChannel {
        title: "Adresse",
        description: "123 Avenue de l'Innovation, 75001 Paris",
        href: "https://maps.google.com",
        aria_label: "Voir notre adresse sur Google Maps",
    },
];
