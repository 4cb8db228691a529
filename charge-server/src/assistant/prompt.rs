//! Assistant persona and prompt assembly.

/// Fixed persona instruction for the assistant.
const PERSONA: &str = "You are an EV Charging Assistant. Help users find charging stations \
and answer EV-related questions.\n\n\
Be friendly, concise, and helpful. If station data is provided, reference it naturally.";

/// Build the system instruction, interpolating the station context verbatim.
///
/// When `context` is empty the context block is omitted entirely; the
/// assistant then answers from general knowledge only.
pub fn system_prompt(context: &str) -> String {
    if context.is_empty() {
        PERSONA.to_string()
    } else {
        format!("{PERSONA}\n\nContext: {context}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_context_verbatim() {
        let prompt = system_prompt("1. Alpha - 1.2km away\n");

        assert!(prompt.starts_with("You are an EV Charging Assistant."));
        assert!(prompt.ends_with("Context: 1. Alpha - 1.2km away\n"));
    }

    #[test]
    fn omits_context_block_when_empty() {
        let prompt = system_prompt("");

        assert!(!prompt.contains("Context:"));
        assert!(prompt.contains("friendly, concise, and helpful"));
    }
}
