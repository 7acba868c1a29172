//! Slash command replies in Slack's Block Kit format.

use serde::Serialize;

use crate::domain::profile::ProfileUrl;

/// Who sees the reply: everyone in the channel or only the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    InChannel,
    Ephemeral,
}

/// Body returned to Slack for a slash command invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandResponse {
    pub response_type: ResponseType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocks: Option<Vec<Block>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl CommandResponse {
    /// Public reply listing one section block per profile url.
    pub fn in_channel(urls: impl IntoIterator<Item = ProfileUrl>) -> Self {
        Self {
            response_type: ResponseType::InChannel,
            blocks: Some(urls.into_iter().map(Block::from).collect()),
            text: None,
        }
    }

    /// Plain-text reply shown only to the caller.
    pub fn ephemeral(text: impl Into<String>) -> Self {
        Self {
            response_type: ResponseType::Ephemeral,
            blocks: None,
            text: Some(text.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Section { text: TextObject },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextObject {
    Mrkdwn { text: String },
}

impl From<ProfileUrl> for Block {
    fn from(url: ProfileUrl) -> Self {
        Block::Section {
            text: TextObject::Mrkdwn {
                text: url.into_inner(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{BaseUrl, PageId, WorkspaceName};
    use serde_json::json;

    fn url(id: &str) -> ProfileUrl {
        ProfileUrl::new(
            &BaseUrl::new("https://www.notion.so").unwrap(),
            &WorkspaceName::new("myteam").unwrap(),
            &PageId::new(id).unwrap(),
        )
    }

    #[test]
    fn in_channel_reply_lists_section_blocks() {
        let response = CommandResponse::in_channel([url("abc123")]);

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "response_type": "in_channel",
                "blocks": [{
                    "type": "section",
                    "text": {"type": "mrkdwn", "text": "https://www.notion.so/myteam/abc123"}
                }]
            })
        );
    }

    #[test]
    fn empty_match_set_keeps_blocks_array() {
        let response = CommandResponse::in_channel(Vec::new());

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"response_type": "in_channel", "blocks": []})
        );
    }

    #[test]
    fn ephemeral_reply_has_text_only() {
        let response = CommandResponse::ephemeral("usage: /whois [@user_name]");

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"response_type": "ephemeral", "text": "usage: /whois [@user_name]"})
        );
    }
}
