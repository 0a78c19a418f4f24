use super::types::{Author, BlogPost};

pub static ALL_POSTS: [BlogPost; 3] = [
    BlogPost {
        id: 1,
        slug: "optimiser-workflow-it-2024",
        title: "Comment optimiser votre workflow IT en 2024",
        description: "Découvrez les meilleures pratiques et outils pour améliorer l'efficacité de votre équipe IT.",
        content: r#"
<p>L'optimisation du workflow IT est devenue un enjeu majeur pour les entreprises en 2024. Dans cet article, nous explorons les meilleures pratiques et outils qui peuvent transformer votre approche.</p>

<h2>1. Automatisation des tâches répétitives</h2>
<p>L'automatisation est la clé pour libérer du temps précieux et réduire les erreurs humaines. Voici quelques domaines où l'automatisation peut faire la différence :</p>
<ul>
  <li>Déploiement de code</li>
  <li>Tests automatisés</li>
  <li>Monitoring et alertes</li>
  <li>Backups et maintenance</li>
</ul>

<h2>2. Adoption des pratiques DevOps</h2>
<p>Les pratiques DevOps continuent d'évoluer et de démontrer leur valeur. Les points clés incluent :</p>
<ul>
  <li>Intégration continue (CI)</li>
  <li>Déploiement continu (CD)</li>
  <li>Infrastructure as Code</li>
  <li>Monitoring en temps réel</li>
</ul>

<h2>3. Outils collaboratifs modernes</h2>
<p>La collaboration est essentielle pour une équipe IT performante. Les outils modernes facilitent :</p>
<ul>
  <li>Communication en temps réel</li>
  <li>Partage de documents</li>
  <li>Gestion de projet agile</li>
  <li>Suivi des incidents</li>
</ul>
"#,
        image: "/static/blog/workflow-optimization.png",
        date: "2024-04-04",
        category: "Productivité",
        read_time: "5 min",
        featured: true,
        author: Author {
            name: "Marie Dubois",
            image: "https://i.pravatar.cc/150?img=5",
            role: "Lead DevOps",
        },
        tags: &["DevOps", "Automatisation", "Productivité", "Outils"],
    },
    BlogPost {
        id: 2,
        slug: "securite-it-tendances",
        title: "Sécurité IT : Les tendances à suivre",
        description: "Les dernières innovations en matière de cybersécurité pour protéger votre entreprise.",
        content: r#"
<p>La sécurité IT évolue rapidement face aux nouvelles menaces. Découvrez les tendances clés pour protéger votre infrastructure.</p>

<h2>1. Zero Trust Security</h2>
<p>Le modèle Zero Trust devient la norme...</p>

<h2>2. Intelligence Artificielle en Cybersécurité</h2>
<p>L'IA révolutionne la détection des menaces...</p>
"#,
        image: "/static/blog/security-trends.png",
        date: "2024-04-02",
        category: "Sécurité",
        read_time: "4 min",
        featured: false,
        author: Author {
            name: "Thomas Martin",
            image: "https://i.pravatar.cc/150?img=7",
            role: "Expert Cybersécurité",
        },
        tags: &["Sécurité", "Cybersécurité", "Zero Trust", "IA"],
    },
    BlogPost {
        id: 3,
        slug: "impact-ia-it-moderne",
        title: "L'impact de l'IA sur l'IT moderne",
        description: "Comment l'intelligence artificielle transforme la gestion IT et les opportunités à saisir.",
        content: r#"
<p>L'IA révolutionne la façon dont nous gérons l'infrastructure IT...</p>

<h2>1. Automatisation intelligente</h2>
<p>L'IA permet une automatisation plus sophistiquée...</p>

<h2>2. Analyse prédictive</h2>
<p>Anticipez les problèmes avant qu'ils ne surviennent...</p>
"#,
        image: "/static/blog/ai-impact.png",
        date: "2024-04-01",
        category: "Innovation",
        read_time: "6 min",
        featured: false,
        author: Author {
            name: "Sophie Bernard",
            image: "https://i.pravatar.cc/150?img=15",
            role: "Architecte Solutions",
        },
        tags: &["IA", "Innovation", "Automatisation", "Analyse"],
    },
];
