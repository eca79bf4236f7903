use super::QaEntry;

const BUILTIN_QA: &[(&str, &str)] = &[
    (
        "hello",
        "Hi! I'm Harsh Deep, a Python developer and tech enthusiast.",
    ),
    ("hi", "Hi! How can I help you today?"),
    ("hey", "Hey there! I'm Harsh Deep, a Python developer."),
    (
        "help me",
        "Sure! You can ask me about my skills, experience, AI projects, or contact info.",
    ),
    (
        "who are you",
        "I'm Harsh Deep, Python developer and tech enthusiast.",
    ),
    ("bye", "Goodbye! Feel free to reach out anytime."),
];

/// Greeting and identity entries appended after the file entries
pub fn builtin_entries() -> Vec<QaEntry> {
    BUILTIN_QA
        .iter()
        .map(|(question, answer)| QaEntry::new(*question, *answer))
        .collect()
}
