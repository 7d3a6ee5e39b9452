use crate::provider::{CalendarProvider, TokenGrant};
use crate::session::Session;

use super::SchedulingError;

/// Exchange an authorization code and record the grant in the
/// session. The session is only written when the exchange succeeds
/// and the grant carries both a token and a grant id.
pub async fn complete_auth(
    provider: &dyn CalendarProvider,
    session: &mut Session,
    code: Option<&str>,
) -> Result<TokenGrant, SchedulingError> {
    let code = code
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .ok_or(SchedulingError::MissingCode)?;

    let grant = provider.exchange_code(code).await?;
    if grant.access_token.trim().is_empty() || grant.grant_id.trim().is_empty() {
        return Err(SchedulingError::InvalidProviderResponse(
            "token exchange returned no access token or grant id".to_string(),
        ));
    }

    session.access_token = Some(grant.access_token.clone());
    session.email = Some(grant.email.clone());
    session.grant_id = Some(grant.grant_id.clone());
    tracing::info!("Authorized {} (grant {})", grant.email, grant.grant_id);

    Ok(grant)
}
