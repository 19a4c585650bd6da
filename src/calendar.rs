//! Google Calendar "create event" deep link.

use crate::config::CalendarEvent;

const CALENDAR_BASE: &str = "https://calendar.google.com/calendar/render?action=TEMPLATE";

impl CalendarEvent {
    /// Template URL with every free-text field percent-encoded. Dates are
    /// inserted as given.
    pub fn url(&self) -> String {
        format!(
            "{CALENDAR_BASE}&text={}&dates={}/{}&details={}&location={}",
            urlencoding::encode(&self.title),
            self.start_date,
            self.end_date,
            urlencoding::encode(&self.details),
            urlencoding::encode(&self.location),
        )
    }
}
