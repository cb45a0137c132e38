pub const EMPTY_IDEA_MESSAGE: &str = "Please enter an idea first.";
pub const EMPTY_DRAFT_MESSAGE: &str = "Please write a draft of your message first.";

/// Prompt for the project brainstormer, or `None` when the idea is blank.
pub fn brainstorm(idea: &str) -> Option<String> {
    let idea = idea.trim();
    if idea.is_empty() {
        return None;
    }
    Some(format!(
        "As a creative tech consultant, brainstorm a project based on this idea: \"{}\".\n\
         Provide a response structured with the following sections:\n\
         - **Concept:** A one-sentence summary of the app.\n\
         - **Key Features:** A bulleted list of 3-5 core features.\n\
         - **Target Audience:** A brief description of the ideal users.\n\
         - **Suggested Tech Stack:** A list of technologies for frontend, backend, and database.\n\
         Keep the tone enthusiastic and professional.",
        idea
    ))
}

/// Prompt asking for a polished version of a contact message draft.
pub fn rewrite(draft: &str, recipient: &str) -> Option<String> {
    let draft = draft.trim();
    if draft.is_empty() {
        return None;
    }
    Some(format!(
        "I am writing to a developer named {}. Here is my rough draft: \"{}\".\n\
         Please rewrite this to sound more professional, clear, and friendly. Make sure to keep the original intent.\n\
         The final output should only be the revised message text, without any extra commentary.",
        recipient, draft
    ))
}
