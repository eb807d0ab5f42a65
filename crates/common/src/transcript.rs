use serde::{Deserialize, Serialize};

/// Author of a transcript message after normalization.
///
/// Providers disagree on what to call the assistant side of a conversation
/// ("assistant", "model", "agent"); all of those collapse into [`Role::Agent`].
/// Anything that is neither the user nor the agent is kept as [`Role::Other`]
/// and ignored by the role-specific metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Agent,
    Other,
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case("user") {
            Role::User
        } else if ["assistant", "model", "agent"]
            .iter()
            .any(|alias| value.eq_ignore_ascii_case(alias))
        {
            Role::Agent
        } else {
            Role::Other
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Role::from(value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    #[serde(default)]
    pub role: Role,
}

impl Message {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            role,
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    pub fn agent(text: impl Into<String>) -> Self {
        Self::new(Role::Agent, text)
    }
}

/// An ordered conversation; insertion order is conversational order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub messages: Vec<Message>,
}

impl Transcript {
    pub fn user_texts(&self) -> Vec<&str> {
        texts_for_role(&self.messages, Role::User)
    }

    pub fn agent_texts(&self) -> Vec<&str> {
        texts_for_role(&self.messages, Role::Agent)
    }
}

/// Texts authored by `role`, in conversational order
pub fn texts_for_role(messages: &[Message], role: Role) -> Vec<&str> {
    messages
        .iter()
        .filter(|message| message.role == role)
        .map(|message| message.text.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_role_normalization() {
        assert_eq!(Role::from("user"), Role::User);
        assert_eq!(Role::from("assistant"), Role::Agent);
        assert_eq!(Role::from("model"), Role::Agent);
        assert_eq!(Role::from("Agent"), Role::Agent);
        assert_eq!(Role::from("system"), Role::Other);
        assert_eq!(Role::from("tool"), Role::Other);
    }

    #[test]
    fn test_deserialize_transcript_with_provider_roles() {
        let json = r#"{
            "messages": [
                {"text": "I feel stuck", "role": "user"},
                {"text": "That sounds hard.", "role": "model"},
                {"text": "Be kind.", "role": "system"},
                {"text": "No role here"}
            ]
        }"#;

        let transcript: Transcript = serde_json::from_str(json).unwrap();
        let roles: Vec<Role> = transcript.messages.iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Agent, Role::Other, Role::User]);
        assert_eq!(transcript.user_texts(), vec!["I feel stuck", "No role here"]);
        assert_eq!(transcript.agent_texts(), vec!["That sounds hard."]);
    }

    #[test]
    fn test_message_without_text_is_rejected() {
        let json = r#"{"messages": [{"role": "user"}]}"#;
        assert!(serde_json::from_str::<Transcript>(json).is_err());
    }

    #[test]
    fn test_role_serializes_normalized() {
        let message = Message::new(Role::from("assistant"), "hi");
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["role"], "agent");
    }
}
