// src/knowledge/mod.rs
// Offline responder backed by the broader knowledge table.
//
// Wider than the static cache (salary and identity questions included)
// and always answers: unmatched input gets one of the "unrecognized"
// replies. Used when running without any provider at all.

use std::sync::Arc;

use crate::cache::{best_match, PatternError, RandomPicker, ResponsePattern, ResponsePicker};

const UNRECOGNIZED: &[&str] = &[
    "INPUT UNRECOGNIZED. Please refine your query. You can ask about my skills, experience, or how to hire me.",
    "DATA NOT FOUND. Try querying about 'Tech Stack', 'Experience', or 'Contact Info'.",
    "COMMAND UNCLEAR. Rephrase: 'What is your experience?' or 'Are you available?'",
];

pub struct OfflineResponder {
    patterns: Vec<ResponsePattern>,
    picker: Arc<dyn ResponsePicker>,
}

impl OfflineResponder {
    pub fn new() -> Result<Self, PatternError> {
        Ok(Self {
            patterns: knowledge_patterns()?,
            picker: Arc::new(RandomPicker),
        })
    }

    pub fn with_picker(self, picker: Arc<dyn ResponsePicker>) -> Self {
        Self { picker, ..self }
    }

    pub fn respond(&self, input: &str) -> String {
        let pool: Vec<&str> = match best_match(input, &self.patterns) {
            Some(pattern) => pattern.responses().iter().map(String::as_str).collect(),
            None => UNRECOGNIZED.to_vec(),
        };
        let index = self.picker.pick(pool.len()).min(pool.len() - 1);
        pool[index].to_string()
    }
}

fn knowledge_patterns() -> Result<Vec<ResponsePattern>, PatternError> {
    Ok(vec![
        ResponsePattern::new(
            [
                "hire", "hiring", "hired", "contact", "email", "touch", "available",
                "availability", "job", "jobs", "contract", "contracts", "freelance",
                "freelancing",
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
                "node", "know",
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
                "experience", "experiences", "work", "worked", "history", "company",
                "companies", "background", "past",
            ],
            [
                "LOGS RETRIEVED: 5+ years of operational experience. \nMISSION HISTORY: Deployed code for 7+ major companies worldwide. \nSUCCESS RATE: 50+ projects delivered with high impact. \nYou can view detailed mission logs in the 'Experience' sector (Globe).",
                "I have operated across multiple sectors including FinTech, eCommerce, and Web3. My directive is always the same: Deliver high-quality, scalable software solutions.",
            ],
            8,
        )?,
        ResponsePattern::new(
            ["hello", "hi", "hey", "greetings", "start", "begin"],
            [
                "SYSTEM ONLINE. Greetings. How may I assist you with your hiring decision today?",
                "CONNECTION ESTABLISHED. I am the Core System Assistant. Query me about my capabilities or work history.",
                "ACKNOWLEDGED. Ready to process your inquiries.",
            ],
            5,
        )?,
        ResponsePattern::new(
            ["salary", "salaries", "rate", "rates", "cost", "costs", "pay"],
            [
                "FINANCIAL DATA CLASSIFIED. Please establish a direct channel via Email to discuss compensation parameters.",
                "Rates vary based on mission complexity and duration. Initiate an email transmission to receive a custom quote.",
            ],
            7,
        )?,
        ResponsePattern::new(
            ["who", "are", "you", "name"],
            [
                "I am the digital construct of Tammy's professional portfolio. My purpose is to facilitate your evaluation and potential hiring of the primary user.",
                "DESIGNATION: System Core AI. \nOPERATOR: Tammy Inoma-Batubo. \nOBJECTIVE: Demonstrate technical excellence.",
            ],
            6,
        )?,
    ])
}
