//! Rule-based intent matching.

use regex::Regex;

use crate::error::{Error, Result};
use crate::picker::{RandomPicker, ReplyPicker};
use crate::rule::{FALLBACK_REPLY, Rule};

/// A rule with its trigger compiled.
#[derive(Debug)]
struct CompiledRule {
    label: String,
    trigger: Regex,
    replies: Vec<String>,
}

/// Compiled intent matcher.
///
/// Built once from an ordered rule table and immutable afterwards, so it is
/// safe to share across threads. Responding selects the first rule whose
/// trigger matches anywhere in the trimmed, lower-cased input, then picks
/// one of that rule's replies at random; when nothing matches it returns
/// [`FALLBACK_REPLY`].
///
/// # Example
///
/// ```rust
/// use asna_agent::{Matcher, builtin_rules};
///
/// let matcher = Matcher::compile(&builtin_rules())?;
/// let reply = matcher.respond("well hi there friend");
/// # Ok::<(), asna_agent::Error>(())
/// ```
pub struct Matcher {
    rules: Vec<CompiledRule>,
    picker: Box<dyn ReplyPicker>,
}

impl std::fmt::Debug for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matcher")
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

impl Matcher {
    /// Compiles a rule table with the default random reply picker.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending rule when a rule has an empty
    /// reply set or an invalid trigger pattern.
    pub fn compile(rules: &[Rule]) -> Result<Self> {
        Self::compile_with(rules, Box::new(RandomPicker))
    }

    /// Compiles a rule table with an injected reply picker.
    pub fn compile_with(rules: &[Rule], picker: Box<dyn ReplyPicker>) -> Result<Self> {
        let mut compiled: Vec<CompiledRule> = Vec::with_capacity(rules.len());

        for rule in rules {
            if compiled.iter().any(|c| c.label == rule.label) {
                tracing::warn!(label = %rule.label, "duplicate rule label, skipping");
                continue;
            }
            if rule.replies.is_empty() {
                return Err(Error::EmptyReplies {
                    rule: rule.label.clone(),
                });
            }
            let trigger = Regex::new(&rule.trigger).map_err(|source| Error::InvalidTrigger {
                rule: rule.label.clone(),
                source,
            })?;

            compiled.push(CompiledRule {
                label: rule.label.clone(),
                trigger,
                replies: rule.replies.clone(),
            });
        }

        Ok(Self {
            rules: compiled,
            picker,
        })
    }

    /// Maps free-text input to a reply.
    ///
    /// Accepts any input, including empty or whitespace-only strings, and
    /// always returns a string.
    pub fn respond(&self, text: &str) -> String {
        let normalized = text.trim().to_lowercase();

        for rule in &self.rules {
            if rule.trigger.is_match(&normalized) {
                let idx = self.picker.pick(rule.replies.len());
                return rule.replies[idx].clone();
            }
        }

        FALLBACK_REPLY.to_string()
    }

    /// Returns the label of the first rule matching the input, if any.
    pub fn match_label(&self, text: &str) -> Option<&str> {
        let normalized = text.trim().to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.trigger.is_match(&normalized))
            .map(|rule| rule.label.as_str())
    }
}
