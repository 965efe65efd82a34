//! Opening and fallback messages for the brainstorm session.

use crate::intake::IntakeRecord;
use crate::text::excerpt;

/// Shown when the session opens without intake context.
pub const GENERIC_WELCOME: &str = "Hello! I'm your startup brainstorming assistant. I can help you refine your business idea, validate your concept, and develop strategies for growth. What would you like to brainstorm today?";

/// Substituted for a reply when the provider fails.
pub const APOLOGY: &str =
    "I apologize, but I encountered an error processing your request. Please try again later.";

pub const DESCRIPTION_EXCERPT_CHARS: usize = 100;
pub const CHALLENGES_EXCERPT_CHARS: usize = 100;

/// Welcome message for a session, personalised when intake context exists.
pub fn welcome_message(context: Option<&IntakeRecord>) -> String {
    let Some(record) = context else {
        return GENERIC_WELCOME.to_string();
    };

    let challenges = record.challenges().map_or_else(
        || "What's the biggest obstacle you're facing right now?".to_string(),
        |c| {
            format!(
                "You mentioned these challenges: \"{}\". Let's start there.",
                excerpt(c, CHALLENGES_EXCERPT_CHARS)
            )
        },
    );

    format!(
        "Welcome, {}! I'm your startup brainstorming assistant. I see you're building {} in the {} space, currently at the {} stage. You described it as: \"{}\". {} What would you like to brainstorm first?",
        record.name(),
        record.company_name(),
        record.industry(),
        record.stage(),
        excerpt(record.description(), DESCRIPTION_EXCERPT_CHARS),
        challenges,
    )
}
