//! Intent rule definitions.

use serde::{Deserialize, Serialize};

use crate::AGENT_NAME;

/// Reply returned when no rule matches.
pub const FALLBACK_REPLY: &str =
    "I'm still learning! Could you rephrase that or ask me something else?";

/// A single intent rule: a trigger pattern and its candidate replies.
///
/// Rules are evaluated in declaration order and the first match wins, so a
/// rule table is an ordered sequence, never a map. Triggers are regular
/// expressions written against trimmed, lower-cased input and matched
/// anywhere within it.
///
/// JSON/YAML form:
///
/// ```yaml
/// - label: greeting
///   trigger: hi|hello|hey
///   replies:
///     - "Hello!"
///     - "Hi there!"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Unique name for this intent (e.g., "greeting", "goodbye").
    pub label: String,

    /// Trigger pattern, matched as an unanchored regex over normalized input.
    pub trigger: String,

    /// Candidate replies; one is chosen at random per response.
    pub replies: Vec<String>,
}

impl Rule {
    /// Creates a new rule.
    pub fn new(
        label: impl Into<String>,
        trigger: impl Into<String>,
        replies: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            label: label.into(),
            trigger: trigger.into(),
            replies: replies.into_iter().map(Into::into).collect(),
        }
    }
}

/// The built-in Asna rule table.
///
/// Order matters: earlier rules take precedence over later ones.
pub fn builtin_rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "greeting",
            "hi|hello|hey|good morning|good afternoon|good evening",
            [
                format!("Hello! I'm {AGENT_NAME}, your AI assistant. How can I help you today?"),
                format!("Hi there! {AGENT_NAME} here. What can I do for you?"),
                format!("Hey! I'm {AGENT_NAME}. How are you doing?"),
            ],
        ),
        Rule::new(
            "name_question",
            "what.*your name|who are you|what should i call you",
            [
                format!("I'm {AGENT_NAME}, your friendly AI chatbot!"),
                format!("My name is {AGENT_NAME}. Nice to meet you!"),
            ],
        ),
        Rule::new(
            "how_are_you",
            "how are you|how.*doing",
            [
                "I'm doing great, thanks for asking! How about you?".to_string(),
                "I'm fine, thank you! How can I assist you today?".to_string(),
            ],
        ),
        Rule::new(
            "goodbye",
            "bye|goodbye|see you|farewell|talk to you later",
            [
                "Goodbye! Have a great day!".to_string(),
                "See you later! Take care!".to_string(),
                "Bye! Feel free to chat with me anytime!".to_string(),
            ],
        ),
        Rule::new(
            "help",
            "help|what can you do|capabilities",
            [
                format!(
                    "I'm {AGENT_NAME} and I can help you with basic conversations. \
                     Try asking me about my name, how I'm doing, or just say hello!"
                ),
                "I can chat with you, answer simple questions, and provide basic assistance. \
                 What would you like to know?"
                    .to_string(),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_invariants() {
        let rules = builtin_rules();
        assert_eq!(rules.len(), 5);

        for rule in &rules {
            assert!(!rule.replies.is_empty(), "rule {} has no replies", rule.label);
            assert!(regex::Regex::new(&rule.trigger).is_ok());
        }

        // Labels are unique
        let mut labels: Vec<_> = rules.iter().map(|r| r.label.as_str()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), rules.len());
    }

    #[test]
    fn test_builtin_order() {
        let labels: Vec<_> = builtin_rules().into_iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            ["greeting", "name_question", "how_are_you", "goodbye", "help"]
        );
    }

    #[test]
    fn test_rule_yaml() {
        let yaml = r#"
- label: greeting
  trigger: hi|hello
  replies:
    - "Hello!"
    - "Hi there!"
- label: goodbye
  trigger: bye
  replies:
    - "Bye!"
"#;
        let rules: Vec<Rule> = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].label, "greeting");
        assert_eq!(rules[0].replies.len(), 2);
        assert_eq!(rules[1].trigger, "bye");
    }

    #[test]
    fn test_rule_json_round_trip() {
        let rule = Rule::new("greeting", "hi|hello", ["Hello!"]);
        let json = serde_json::to_string(&rule).unwrap();
        let parsed: Rule = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, rule);
    }
}
