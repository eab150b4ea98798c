// Prompt fragments owned by the completion client itself.
// Task prompts live next to the code that builds them (see generation::prompts).

/// System message sent ahead of every user prompt.
pub const ASSISTANT_SYSTEM: &str = "You are a helpful assistant.";
