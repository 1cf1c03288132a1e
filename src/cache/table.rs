// src/cache/table.rs
// Curated high-confidence replies served without touching any provider.

use super::matcher::{PatternError, ResponsePattern};

pub fn curated_patterns() -> Result<Vec<ResponsePattern>, PatternError> {
    Ok(vec![
        ResponsePattern::new(
            [
                "hire", "hiring", "hired", "contact", "email", "touch", "available",
                "availability", "job", "jobs", "contract", "contracts", "freelance",
                "freelancing", "work",
            ],
            [
                "AFFIRMATIVE. I am currently available for new deployments. My expertise is ready to be utilized for your mission. You can initiate contact via the transmission links below.",
                "SYSTEM STATUS: OPEN FOR WORK. I accept freelance contracts and full-time engagements. Proceed to the designated Contact sector to establish a secure uplink.",
                "UPLINK PROTOCOLS: ACTIVE. I am ready to join your team. Please transmit your mission parameters (job description) via the email link below.",
            ],
            10,
        )?,
        ResponsePattern::new(
            [
                "stack", "tech", "technology", "technologies", "skill", "skills",
                "language", "languages", "framework", "frameworks", "react", "next",
                "node", "know", "expert", "expertise",
            ],
            [
                "CORE SYSTEMS: High-proficiency in React, Next.js, and TypeScript. \nBACKEND SUBSYSTEMS: Node.js, PostgreSQL, and AWS infrastructure. \nOPTIMIZATION: Expert in performance tuning and interactive 3D web technologies (Three.js/R3F).",
                "My capability matrix includes: \n[FRONTEND]: React, Next.js, WebGL \n[BACKEND]: Node.js, Python, SQL/NoSQL \n[CLOUDOPS]: Docker, AWS, CI/CD pipelines.",
                "I specialize in full-stack architecture. From pixel-perfect frontend execution to robust backend scaling. Ask about a specific technology for detailed analysis.",
            ],
            8,
        )?,
        ResponsePattern::new(
            [
                "experience", "experiences", "history", "background", "past", "companies",
                "company",
            ],
            [
                "LOGS RETRIEVED: 5+ years of operational experience. \nMISSION HISTORY: Deployed code for 7+ major companies worldwide. \nSUCCESS RATE: 50+ projects delivered with high impact. \nYou can view detailed mission logs in the 'Experience' sector (Globe).",
                "I have operated across multiple sectors including FinTech, eCommerce, and Web3. My directive is always the same: Deliver high-quality, scalable software solutions.",
            ],
            8,
        )?,
        ResponsePattern::new(
            ["hello", "hi", "hey", "greetings", "start", "begin", "yo"],
            [
                "SYSTEM ONLINE. Greetings. How may I assist you with your hiring decision today?",
                "CONNECTION ESTABLISHED. I am the Core System Assistant. Query me about my capabilities or work history.",
                "ACKNOWLEDGED. Ready to process your inquiries.",
            ],
            5,
        )?,
    ])
}
