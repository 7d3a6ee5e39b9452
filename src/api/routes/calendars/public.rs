//! Public types for the calendars API
use serde::{Deserialize, Serialize};

use crate::provider::Calendar;

#[derive(Debug, Serialize, Deserialize)]
pub struct CalendarSummary {
    pub id: String,
    pub name: String,
    pub read_only: bool,
}

impl From<Calendar> for CalendarSummary {
    fn from(calendar: Calendar) -> Self {
        Self {
            id: calendar.id,
            name: calendar.name,
            read_only: calendar.read_only,
        }
    }
}
