// src/prompt/profile.rs
// Structured facts about the site owner. The persona block is rendered from this.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkMode {
    Remote,
    Onsite,
}

impl WorkMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkMode::Remote => "remote",
            WorkMode::Onsite => "onsite",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Location {
    pub city: &'static str,
    pub country: &'static str,
}

/// Start/end as "YYYY-MM"; `end == None` means the role is ongoing.
#[derive(Debug, Clone, Copy)]
pub struct Period {
    pub start: &'static str,
    pub end: Option<&'static str>,
}

impl Period {
    pub fn end_label(&self) -> &'static str {
        self.end.unwrap_or("Present")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Company {
    pub name: &'static str,
    pub role: &'static str,
    pub location: Location,
    pub period: Period,
    pub impact: &'static [&'static str],
    pub mode: WorkMode,
    pub technologies: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub pronouns: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub email: &'static str,
    pub linkedin: &'static str,
    pub frontend: &'static [&'static str],
    pub backend: &'static [&'static str],
    pub database: &'static [&'static str],
    pub cloud: &'static [&'static str],
    pub companies: &'static [Company],
}

pub const OWNER: Profile = Profile {
    name: "Tammy Inoma-Batubo",
    pronouns: "He/Him",
    role: "Senior Software Engineer (Full Stack)",
    bio: "Analytical, Results-Driven, Collaborative. Senior Engineer with 6+ years of professional experience specializing in high-performance Full-Stack JavaScript applications. Expert in architecting scalable systems using React, Node.js, and Cloud Infrastructure. Tammy has delivered 50+ projects across 7+ companies.",
    email: "tammy.batubo@gmail.com",
    linkedin: "linkedin.com/in/tammybatubo",
    frontend: &[
        "React", "TypeScript", "Next.js", "WebGL (Three.js/R3F)", "Tailwind CSS",
        "Framer Motion", "GSAP",
    ],
    backend: &["Node.js", "Express", "Hono", "Serverless Architectures"],
    database: &["PostgreSQL", "MongoDB"],
    cloud: &["AWS", "Docker", "CI/CD"],
    companies: COMPANIES,
};

pub const COMPANIES: &[Company] = &[
    Company {
        name: "Spin and Drive Tennis Gym",
        role: "Founder – CTO",
        location: Location { city: "Port Harcourt", country: "Nigeria" },
        period: Period { start: "2025-03", end: None },
        impact: &[
            "Architected full-stack membership platform, onboarding 100+ members",
            "Built QR code check-in system, reducing operational overhead by 80%",
            "Achieved 99.5% payment success rate with automated billing",
            "Designed real-time reservation system with 95% booking accuracy",
        ],
        mode: WorkMode::Onsite,
        technologies: &["React", "Nest.js", "Prisma", "PostgreSQL", "TypeScript", "Paystack"],
    },
    Company {
        name: "Yester DIY",
        role: "Freelance Developer",
        location: Location { city: "Washington", country: "United States" },
        period: Period { start: "2025-11", end: None },
        impact: &[
            "Architected a high-performance MVP for a DIY marketplace, enabling seamless matching between users and professionals with 95% accuracy",
            "Engineered a smart ranking engine utilizing availability and review data, increasing successful matches by 40% within the first month",
            "Implemented a secure end-to-end payment system and real-time chat infrastructure, reducing booking friction by 30%",
            "Integrated automated SMS notification systems, ensuring 99.9% delivery rate for mission-critical service updates",
        ],
        mode: WorkMode::Remote,
        technologies: &["Bubble.io", "TypeScript", "Twilio", "Stripe", "AWS"],
    },
    Company {
        name: "LetsSkiapp",
        role: "Freelance Developer",
        location: Location { city: "Remote", country: "Germany" },
        period: Period { start: "2025-08", end: Some("2025-10") },
        impact: &[
            "Engineered a resilient offline-first architecture within a no-code ecosystem using IndexedDB and Custom Service Workers",
            "Ensured 100% application accessibility for users in subterranean/zero-connectivity environments (basements/remote zones)",
            "Implemented custom data-sync protocols, reducing data loss incidents to 0% during transition between connectivity states",
            "Synthesized high-performance storage solutions, enabling 65% faster application reloads via intelligent local caching",
        ],
        mode: WorkMode::Remote,
        technologies: &["Bubble.io", "Xano", "IndexedDB", "Service Workers", "TypeScript"],
    },
    Company {
        name: "Proveo Automations",
        role: "Senior Software Engineer – Full Stack Developer",
        location: Location { city: "Remote", country: "United States" },
        period: Period { start: "2022-05", end: Some("2025-08") },
        impact: &[
            "Developed financial calculation engines, reducing errors by 99%",
            "Led loan servicing platform with complex payment workflows",
            "Pioneered JavaScript solutions in Bubble.io no-code environment",
        ],
        mode: WorkMode::Remote,
        technologies: &["React", "Express", "AWS", "Bubble.io", "JavaScript", "Xano"],
    },
    Company {
        name: "Conversional GmbH",
        role: "Senior Front-End Engineer",
        location: Location { city: "Stuttgart", country: "Germany" },
        period: Period { start: "2022-02", end: Some("2023-08") },
        impact: &[
            "Led front-end development for SaaS startup growth",
            "Transitioned codebase from JavaScript to TypeScript increasing code maintainability",
            "Migrated from ReduxThunk/Sagas to RTK Query increasing performance by 20%",
        ],
        mode: WorkMode::Remote,
        technologies: &["React", "TypeScript", "Redux", "RTK Query", "Webpack"],
    },
    Company {
        name: "Dominium",
        role: "React Web3 Engineer (Contract)",
        location: Location { city: "Seattle", country: "United States" },
        period: Period { start: "2022-01", end: Some("2022-03") },
        impact: &[
            "Developed client-facing applications for financial startup",
            "Connected front-end to smart contracts",
            "Improved UI/UX for ICO and staking features",
        ],
        mode: WorkMode::Remote,
        technologies: &["React", "Web3", "Smart Contracts", "Blockchain", "ethers.js"],
    },
    Company {
        name: "Neu",
        role: "Software Engineer",
        location: Location { city: "Seattle", country: "United States" },
        period: Period { start: "2021-02", end: Some("2021-12") },
        impact: &[
            "Improved UI/UX, leading to 20% increase in users",
            "Refactored legacy code to modern architecture",
            "Led major process improvements",
        ],
        mode: WorkMode::Remote,
        technologies: &["React", "JavaScript", "UI/UX", "Node.js", "Express", "PostgreSQL"],
    },
    Company {
        name: "Olla Systems",
        role: "UI Engineer",
        location: Location { city: "Lagos", country: "Nigeria" },
        period: Period { start: "2020-08", end: Some("2020-12") },
        impact: &[
            "Redesigned all pages of company's digital solution",
            "Refactored code to improve functionality",
            "Developed authentication and vendor pages",
        ],
        mode: WorkMode::Onsite,
        technologies: &["HTML", "CSS", "JavaScript", "UI/UX", "Frontend"],
    },
];
