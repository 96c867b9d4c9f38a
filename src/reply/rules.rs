//! Rule-based reply engine
//!
//! A fixed keyword table scanned top to bottom; the first matching rule wins
//! and unmatched input falls through to a default response. Single-word
//! keywords match whole tokens only, so "hi" does not fire inside "which";
//! keywords containing spaces match as substrings. Input is expected to be
//! lowercased already.

use super::{Replier, ReplyError};

struct Rule {
    keywords: &'static [&'static str],
    response: &'static str,
}

static RULES: &[Rule] = &[
    Rule {
        keywords: &["how are you", "how's it going", "how is it going"],
        response: "Doing great, thanks for asking! What can I do for you?",
    },
    Rule {
        keywords: &["your name", "who are you"],
        response: "I'm Banter, the resident chat widget. Ask me anything.",
    },
    Rule {
        keywords: &["hello", "hi", "hey", "howdy"],
        response: "Hello! How can I help you today?",
    },
    Rule {
        keywords: &["thanks", "thank you", "thx"],
        response: "You're welcome!",
    },
    Rule {
        keywords: &["help", "what can you do"],
        response: "I can chat about simple things. Try saying hello, or ask who I am.",
    },
    Rule {
        keywords: &["bye", "goodbye", "see you", "later"],
        response: "Goodbye! Come back any time.",
    },
];

const FALLBACK: &str = "I'm not sure I follow. Could you rephrase that?";

/// The built-in deterministic reply engine.
pub struct RuleEngine;

impl RuleEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Replier for RuleEngine {
    fn reply(&self, message: &str) -> Result<String, ReplyError> {
        for rule in RULES {
            if rule.keywords.iter().any(|k| keyword_matches(message, k)) {
                return Ok(rule.response.to_string());
            }
        }
        Ok(FALLBACK.to_string())
    }
}

fn keyword_matches(message: &str, keyword: &str) -> bool {
    if keyword.contains(' ') {
        message.contains(keyword)
    } else {
        message
            .split(|c: char| !c.is_alphanumeric() && c != '\'')
            .any(|token| token == keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting() {
        let engine = RuleEngine::new();
        let reply = engine.reply("hello there").unwrap();
        assert_eq!(reply, "Hello! How can I help you today?");
    }

    #[test]
    fn test_phrase_beats_single_word() {
        // "how are you" should win over the bare "you" tokens elsewhere
        let engine = RuleEngine::new();
        let reply = engine.reply("hey, how are you?").unwrap();
        assert_eq!(reply, "Doing great, thanks for asking! What can I do for you?");
    }

    #[test]
    fn test_fallback() {
        let engine = RuleEngine::new();
        let reply = engine.reply("quantum flux capacitors").unwrap();
        assert_eq!(reply, FALLBACK);
    }

    #[test]
    fn test_no_substring_false_positive() {
        // "hi" must not match inside "which"
        let engine = RuleEngine::new();
        let reply = engine.reply("which way is it").unwrap();
        assert_eq!(reply, FALLBACK);
    }

    #[test]
    fn test_punctuation_tokenization() {
        let engine = RuleEngine::new();
        let reply = engine.reply("thanks!").unwrap();
        assert_eq!(reply, "You're welcome!");
    }

    #[test]
    fn test_deterministic() {
        let engine = RuleEngine::new();
        let first = engine.reply("hi there").unwrap();
        let second = engine.reply("hi there").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_message_gets_fallback() {
        let engine = RuleEngine::new();
        let reply = engine.reply("").unwrap();
        assert_eq!(reply, FALLBACK);
    }
}
