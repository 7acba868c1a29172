//! Slash command payloads posted by Slack.
//!
//! Slack sends `application/x-www-form-urlencoded` bodies with many fields
//! (`token`, `team_id`, `user_name`, `command`, ...). Only `text`, the part
//! typed after the command name, is used; everything else is ignored.

use actix_multipart::form::MultipartForm;
use actix_multipart::form::text::Text;
use serde::Deserialize;

use crate::forms::FormError;

/// Url-encoded slash command body.
#[derive(Debug, Default, Deserialize)]
pub struct SlashCommandForm {
    pub text: Option<String>,
}

/// Multipart variant of [`SlashCommandForm`].
#[derive(MultipartForm)]
pub struct SlashCommandUpload {
    pub text: Option<Text<String>>,
}

/// Validated slash command carrying the search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlashCommand {
    /// Search term forwarded verbatim to the profile lookup.
    pub text: String,
}

impl TryFrom<SlashCommandForm> for SlashCommand {
    type Error = FormError;

    fn try_from(form: SlashCommandForm) -> Result<Self, Self::Error> {
        form.text
            .map(|text| Self { text })
            .ok_or(FormError::MissingText)
    }
}

impl TryFrom<SlashCommandUpload> for SlashCommand {
    type Error = FormError;

    fn try_from(form: SlashCommandUpload) -> Result<Self, Self::Error> {
        form.text
            .map(|Text(text)| Self { text })
            .ok_or(FormError::MissingText)
    }
}
