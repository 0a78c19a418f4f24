//! Static content of the landing page.

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct PricingTier {
    pub id: &'static str,
    pub name: &'static str,
    /// Monthly price in euros.
    pub price: u32,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub cta: &'static str,
    pub href: &'static str,
    pub most_popular: bool,
}

pub struct Testimonial {
    pub name: &'static str,
    pub title: &'static str,
    pub image: &'static str,
    pub quote: &'static str,
    /// Out of 5.
    pub rating: u8,
}

impl Testimonial {
    /// "Alice Dubois" -> "AD".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }

    /// One flag per star, filled first.
    pub fn stars(&self) -> Vec<bool> {
        (0..5).map(|i| i < self.rating).collect()
    }
}

pub static FEATURES: [Feature; 3] = [
    Feature {
        icon: "⚡",
        title: "Performance Éclair",
        description: "Optimisez vos processus avec une vitesse et une efficacité inégalées.",
    },
    Feature {
        icon: "🛡",
        title: "Sécurité Renforcée",
        description: "Protégez vos actifs critiques avec des mesures de sécurité de pointe.",
    },
    Feature {
        icon: "📊",
        title: "Analyses Intuitives",
        description: "Prenez des décisions éclairées grâce à des tableaux de bord clairs et précis.",
    },
];

pub static PRICING_TIERS: [PricingTier; 3] = [
    PricingTier {
        id: "starter",
        name: "Starter",
        price: 0,
        description: "Parfait pour démarrer et explorer nos fonctionnalités essentielles.",
        features: &[
            "Jusqu'à 5 utilisateurs",
            "Stockage 5 Go",
            "Support par email",
            "Mises à jour de sécurité",
            "Accès API basique",
        ],
        cta: "Commencer gratuitement",
        href: "/signup",
        most_popular: false,
    },
    PricingTier {
        id: "pro",
        name: "Pro",
        price: 49,
        description: "Idéal pour les équipes en croissance nécessitant plus de puissance.",
        features: &[
            "Jusqu'à 20 utilisateurs",
            "Stockage 50 Go",
            "Support prioritaire 24/7",
            "Analyses avancées",
            "API complète",
            "Intégrations premium",
            "Backup automatique",
        ],
        cta: "Commencer l'essai",
        href: "/signup",
        most_popular: true,
    },
    PricingTier {
        id: "enterprise",
        name: "Enterprise",
        price: 199,
        description: "Solution personnalisée pour les grandes entreprises.",
        features: &[
            "Utilisateurs illimités",
            "Stockage illimité",
            "Support dédié 24/7",
            "Déploiement personnalisé",
            "API illimitée",
            "Toutes les intégrations",
            "Conformité avancée",
            "SLA garanti",
        ],
        cta: "Contacter l'équipe",
        href: "/contact",
        most_popular: false,
    },
];

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Alice Dubois",
        title: "CEO, TechNova",
        image: "https://i.pravatar.cc/150?img=1",
        quote: "StartupIT a transformé notre manière de travailler. Leur plateforme est intuitive, puissante et le support est exceptionnel !",
        rating: 5,
    },
    Testimonial {
        name: "Bob Martin",
        title: "Développeur Principal, Solutions Agiles",
        image: "https://i.pravatar.cc/150?img=3",
        quote: "Enfin une solution qui comprend les besoins réels des équipes IT. La scalabilité est impressionnante.",
        rating: 5,
    },
    Testimonial {
        name: "Claire Petit",
        title: "Chef de Projet, Digitalis",
        image: "https://i.pravatar.cc/150?img=5",
        quote: "La mise en place a été rapide et les résultats immédiats. Je recommande vivement.",
        rating: 4,
    },
];
