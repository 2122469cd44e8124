use crate::ContactDetails;
use crate::NavLink;
use crate::ProcessStep;
use crate::Project;
use crate::SkillCategory;
use crate::SocialLink;
use crate::Stat;

pub(crate) const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Accueil",
        anchor_id: "hero",
    },
    NavLink {
        label: "À propos",
        anchor_id: "about",
    },
    NavLink {
        label: "Projets",
        anchor_id: "projects",
    },
    NavLink {
        label: "Compétences",
        anchor_id: "skills",
    },
    NavLink {
        label: "Contact",
        anchor_id: "contact",
    },
];

pub(crate) const PAGE_SECTIONS: &[&str] =
    &["hero", "about", "skills", "projects", "process", "contact"];

pub(crate) const PROJECTS: &[Project] = &[
    Project {
        id: "atlas-immo",
        title: "Atlas Immo",
        subtitle: "Plateforme de recherche immobilière pour Douala et Yaoundé",
        description: "Recherche cartographique, alertes et visites planifiées en quelques clics.",
        tags: &["Next.js", "TypeScript", "Supabase", "Tailwind CSS"],
        image: "/images/projects/atlas-immo.jpg",
        screenshots: &[
            "/images/projects/atlas-immo-map.jpg",
            "/images/projects/atlas-immo-listing.jpg",
        ],
        context: "Les annonces immobilières locales étaient dispersées entre groupes de messagerie et affiches.",
        solution: "Un catalogue unifié avec recherche géographique, filtres combinés et prise de rendez-vous intégrée.",
        results: "Plus de 1 200 annonces référencées pendant la phase pilote.",
        client: "Atlas Immobilier",
        year: 2025,
        link: None,
        repo: None,
    },
    Project {
        id: "kora-pay",
        title: "KoraPay Dashboard",
        subtitle: "Suivi des paiements mobile money pour commerçants",
        description: "Tableau de bord temps réel des encaissements Orange Money et MTN MoMo.",
        tags: &["React", "Node.js", "PostgreSQL", "GraphQL"],
        image: "/images/projects/kora-pay.jpg",
        screenshots: &["/images/projects/kora-pay-overview.jpg"],
        context: "Les commerçants rapprochaient leurs encaissements à la main chaque soir.",
        solution: "Agrégation des notifications opérateurs, rapprochement automatique et exports comptables.",
        results: "Le rapprochement quotidien passe de deux heures à quelques minutes.",
        client: "Kora Services",
        year: 2024,
        link: Some("https://korapay.example.com"),
        repo: Some("https://example.com/git/kora-pay"),
    },
    Project {
        id: "edutrack",
        title: "EduTrack",
        subtitle: "Gestion scolaire légère pour établissements privés",
        description: "Notes, absences et bulletins générés en un clic pour les enseignants.",
        tags: &["Python", "Django", "PostgreSQL", "Docker"],
        image: "/images/projects/edutrack.jpg",
        screenshots: &[
            "/images/projects/edutrack-grades.jpg",
            "/images/projects/edutrack-report.jpg",
        ],
        context: "Les bulletins trimestriels étaient saisis sur tableur puis recopiés.",
        solution: "Une application web hors-ligne d'abord, synchronisée dès que la connexion revient.",
        results: "Trois établissements équipés, 900 élèves suivis.",
        client: "Groupe scolaire Les Lauriers",
        year: 2024,
        link: Some("#"),
        repo: Some("https://example.com/git/edutrack"),
    },
    Project {
        id: "marche-vert",
        title: "Marché Vert",
        subtitle: "Vente directe de produits agricoles",
        description: "Mise en relation des producteurs et des acheteurs urbains avec livraison groupée.",
        tags: &["Next.js", "Supabase", "Framer Motion"],
        image: "/images/projects/marche-vert.jpg",
        screenshots: &["/images/projects/marche-vert-shop.jpg"],
        context: "Les producteurs perdaient une part importante de leurs récoltes faute de débouchés.",
        solution: "Une boutique mobile, des tournées de livraison optimisées et un paiement à la réception.",
        results: "Quarante producteurs actifs dès le premier mois.",
        client: "Coopérative Marché Vert",
        year: 2023,
        link: Some("https://marchevert.example.com"),
        repo: None,
    },
    Project {
        id: "studio-lumiere",
        title: "Studio Lumière",
        subtitle: "Portfolio immersif pour un studio photo",
        description: "Galeries animées et réservation de séances en ligne.",
        tags: &["React", "Three.js", "Tailwind CSS"],
        image: "/images/projects/studio-lumiere.jpg",
        screenshots: &[
            "/images/projects/studio-lumiere-gallery.jpg",
            "/images/projects/studio-lumiere-booking.jpg",
        ],
        context: "Le studio présentait son travail uniquement sur les réseaux sociaux.",
        solution: "Un site vitrine avec galeries plein écran et agenda de réservation.",
        results: "Les réservations en ligne représentent désormais la moitié des séances.",
        client: "Studio Lumière",
        year: 2023,
        link: None,
        repo: None,
    },
];

pub(crate) const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend",
        description: "Interfaces réactives et interactives",
        skills: &[
            "React",
            "Next.js",
            "TypeScript",
            "Tailwind CSS",
            "Framer Motion",
            "Three.js",
        ],
    },
    SkillCategory {
        title: "Backend",
        description: "Logique serveur et bases de données",
        skills: &[
            "Node.js",
            "Python",
            "PostgreSQL",
            "Supabase",
            "API REST",
            "GraphQL",
        ],
    },
    SkillCategory {
        title: "Outils & DevOps",
        description: "Workflow et architecture",
        skills: &["Git", "Docker", "Figma", "Vercel", "AWS", "CI/CD"],
    },
];

pub(crate) const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        title: "Analyse & Stratégie",
        description: "Compréhension approfondie de vos besoins, de votre audience et définition des objectifs techniques.",
    },
    ProcessStep {
        title: "Design & UX/UI",
        description: "Création de maquettes interactives et prototypage axé sur l'expérience utilisateur et l'esthétique.",
    },
    ProcessStep {
        title: "Développement",
        description: "Architecture propre, code modulaire et respect des bonnes pratiques (SEO, Accessibilité).",
    },
    ProcessStep {
        title: "Tests & Optimisation",
        description: "Vérification rigoureuse sur différents terminaux, optimisation des performances et de la sécurité.",
    },
    ProcessStep {
        title: "Déploiement & Suivi",
        description: "Mise en ligne, configuration du domaine et maintenance évolutive.",
    },
];

pub(crate) const STATS: &[Stat] = &[
    Stat {
        label: "Projets réalisés",
        value: "20+",
    },
    Stat {
        label: "Années d'expérience",
        value: "4+",
    },
    Stat {
        label: "Clients satisfaits",
        value: "15+",
    },
    Stat {
        label: "Technologies",
        value: "10+",
    },
];

pub(crate) const CONTACT: ContactDetails = ContactDetails {
    owner: "Jul",
    email: "mbeleglaurent0@gmail.com",
    location: "Douala, Cameroun",
    whatsapp_number: "237698961910",
    whatsapp_greeting: "Bonjour Jul, je vous contacte depuis votre portfolio !",
    socials: &[
        SocialLink {
            name: "GitHub",
            url: "https://github.com/Jul2408",
        },
        SocialLink {
            name: "LinkedIn",
            url: "https://www.linkedin.com/in/laurent-mbeleg-663038387",
        },
        SocialLink {
            name: "X",
            url: "https://x.com/MbelegLaurent",
        },
    ],
};
