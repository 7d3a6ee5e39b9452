use crate::provider::{Calendar, CalendarProvider};
use crate::session::Session;

use super::SchedulingError;

/// Calendars of the signed in user. An empty list is an error rather
/// than an empty response.
pub async fn list_calendars(
    provider: &dyn CalendarProvider,
    session: &Session,
) -> Result<Vec<Calendar>, SchedulingError> {
    let access_token = session
        .access_token()
        .ok_or(SchedulingError::Unauthenticated)?;

    let calendars = provider.list_calendars(access_token).await?;
    if calendars.is_empty() {
        return Err(SchedulingError::NoCalendarsFound);
    }
    Ok(calendars)
}
