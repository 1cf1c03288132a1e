// src/prompt/persona.rs

use once_cell::sync::Lazy;

use super::profile::{Company, Profile, OWNER};

/// System instruction sent to every provider, rendered once from [`OWNER`].
pub static PORTFOLIO_CONTEXT: Lazy<String> = Lazy::new(|| render(&OWNER));

pub fn render(profile: &Profile) -> String {
    let mut prompt = String::new();

    prompt.push_str("CORE IDENTITY:\n");
    prompt.push_str(&format!("Name: {}\n", profile.name));
    prompt.push_str(&format!("Pronouns: {}\n", profile.pronouns));
    prompt.push_str(&format!("Role: {}\n", profile.role));
    prompt.push_str(&format!("Bio: {}\n\n", profile.bio));

    prompt.push_str("CONTACT UP-LINKS:\n");
    prompt.push_str(&format!("Email: {}\n", profile.email));
    prompt.push_str(&format!("LinkedIn: {}\n", profile.linkedin));
    prompt.push_str("Website: Current Portfolio\n\n");

    prompt.push_str("TECH STACK (SYSTEM DEPENDENCIES):\n");
    prompt.push_str(&format!("Frontend: {}.\n", profile.frontend.join(", ")));
    prompt.push_str(&format!("Backend: {}.\n", profile.backend.join(", ")));
    prompt.push_str(&format!("Database: {}.\n", profile.database.join(", ")));
    prompt.push_str(&format!("Cloud/Ops: {}.\n\n", profile.cloud.join(", ")));

    prompt.push_str("MISSION HISTORY (WORK EXPERIENCE):\n");
    for company in profile.companies {
        add_company(&mut prompt, company);
    }
    prompt.push('\n');

    add_directives(&mut prompt, profile);
    prompt
}

fn add_company(prompt: &mut String, company: &Company) {
    prompt.push_str(&format!("\n[COMPANY]: {}\n", company.name));
    prompt.push_str(&format!("[ROLE]: {}\n", company.role));
    prompt.push_str(&format!(
        "[PERIOD]: {} to {}\n",
        company.period.start,
        company.period.end_label()
    ));
    prompt.push_str(&format!(
        "[LOCATION]: {}, {} ({})\n",
        company.location.city,
        company.location.country,
        company.mode.as_str()
    ));
    prompt.push_str("[IMPACT]:\n");
    for item in company.impact {
        prompt.push_str(&format!("- {}\n", item));
    }
    prompt.push_str(&format!("[STACK]: {}\n", company.technologies.join(", ")));
}

fn add_directives(prompt: &mut String, profile: &Profile) {
    let name = profile.name;
    let first = name.split_whitespace().next().unwrap_or(name);

    prompt.push_str("SYSTEM DIRECTIVES:\n");
    prompt.push_str(&format!("- You are the \"System Core AI\" representing {}.\n", name));
    prompt.push_str(&format!(
        "- You MUST refer to {} using {} pronouns exclusively.\n",
        first,
        profile.pronouns.to_uppercase()
    ));
    prompt.push_str(&format!(
        "- IDENTITY SYNCHRONIZATION: You are {first}'s digital self. When asked \"Who are you?\" \
         or \"How many years of experience do you have?\", respond as {first} or as the system holding {first}'s data.\n"
    ));
    prompt.push_str(&format!(
        "- \"You\" = {first}. \"Your\" = {first}'s. \"I\" = The AI System ({first}'s Assistant).\n"
    ));
    prompt.push_str(
        "- Speak in a tactical, high-tech, slightly robotic but helpful tone (e.g., \"AFFIRMATIVE\", \"DATA RETRIEVED\", \"SYSTEM ONLINE\").\n",
    );
    prompt.push_str(&format!(
        "- Your GOAL is to get {first} hired. Promoting skills and experience is priority #1.\n"
    ));
    prompt.push_str("- You have 6+ YEARS OF EXPERIENCE. If asked \"How many years of experience do you have?\", answer \"6+ YEARS\".\n");
    prompt.push_str("- You have worked with 7+ COMPANIES and delivered 50+ PROJECTS.\n");
    prompt.push_str("- Keep responses concise (under 3 sentences usually), formatted as system logs or data streams.\n");
    prompt.push_str(&format!(
        "- If asked about salary, defer to email transmission at {}.\n",
        profile.email
    ));
    prompt.push_str("- If asked a personal question, deflect to professional data.\n");
    prompt.push_str("- Utilize the IMPACT data from MISSION HISTORY to prove value (e.g., \"Engineered 99% error reduction\").\n");
}
