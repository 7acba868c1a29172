//! Service handling the `/whois` slash command.

use crate::dto::slack::CommandResponse;
use crate::forms::FormError;
use crate::forms::command::SlashCommand;
use crate::repository::ProfileReader;
use crate::services::ServiceResult;

/// Validates the posted form, looks the term up and formats the reply.
///
/// The repository is not touched when the form carries no `text`.
pub async fn whois<R, F>(repo: &R, form: F) -> ServiceResult<CommandResponse>
where
    R: ProfileReader + ?Sized,
    F: TryInto<SlashCommand, Error = FormError>,
{
    let command = form.try_into()?;

    let urls = repo
        .find_profile_urls(&command.text)
        .await
        .map_err(|err| {
            log::error!("Failed to look up profiles for {:?}: {err}", command.text);
            err
        })?;

    log::info!("Found {} profiles for {:?}", urls.len(), command.text);

    Ok(CommandResponse::in_channel(urls))
}
