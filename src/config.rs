//! Card configuration.
//!
//! Every field defaults to the values the card ships with, so the card runs
//! without any configuration. With the `serde_json` feature an inline JSON
//! block (`<script type="application/json" id="vc-config">`) may override
//! individual fields.

#[cfg(feature = "serde")]
use serde::Deserialize;

/// Inset (px) kept between the evasive button and the edge of its boundary.
pub const BOUNDARY_PADDING: f64 = 16.0;
/// Number of confetti hearts on the success screen.
pub const PARTICLE_COUNT: usize = 150;
/// Y coordinate a particle is recycled to once it falls past the bottom.
pub const RECYCLE_Y: f64 = -20.0;
/// Number of decorative hearts floating behind the question.
pub const FLOATING_HEART_COUNT: usize = 15;
/// Upper bound accepted for `floating_hearts` overrides.
pub const MAX_FLOATING_HEARTS: usize = 60;
/// Delay between marking the calendar event added and opening the link.
pub const CALENDAR_OPEN_DELAY_MS: i32 = 300;
/// Length of the "yes" press animation before the success screen appears.
pub const CONFIRM_DELAY_MS: i32 = 400;

/// Confetti colors, pinks and white.
pub const DEFAULT_PALETTE: [&str; 5] = ["#ffb7d5", "#f080a0", "#ffffff", "#ff6b9d", "#ffc8dd"];

/// Fields substituted into the calendar deep link.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalendarEvent {
    pub title: String,
    pub details: String,
    pub location: String,
    /// `YYYYMMDD`
    pub start_date: String,
    /// `YYYYMMDD`
    pub end_date: String,
}

impl Default for CalendarEvent {
    fn default() -> Self {
        Self {
            title: "Early Valentine's Day Date".to_string(),
            details: "With da real scrabble master".to_string(),
            location: "i forgor".to_string(),
            start_date: "20260212".to_string(),
            end_date: "20260212".to_string(),
        }
    }
}

/// Text and tuning for one card instance.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CardConfig {
    pub question: String,
    pub yes_label: String,
    pub no_label: String,
    pub success_title: String,
    pub success_message: String,
    pub celebration_image: String,
    pub calendar_label: String,
    pub calendar_added_label: String,
    pub boundary_padding: f64,
    pub floating_hearts: usize,
    pub palette: Vec<String>,
    pub calendar: CalendarEvent,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            question: "Will you be my Valentine?".to_string(),
            yes_label: "Yes".to_string(),
            no_label: "No :c".to_string(),
            success_title: "Yipeeee!!!".to_string(),
            success_message: "luh u cuh <3 <3 <3".to_string(),
            celebration_image: "blehhhhhh.gif".to_string(),
            calendar_label: "Add to Google Calendar".to_string(),
            calendar_added_label: "Event Added!".to_string(),
            boundary_padding: BOUNDARY_PADDING,
            floating_hearts: FLOATING_HEART_COUNT,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            calendar: CalendarEvent::default(),
        }
    }
}

impl CardConfig {
    /// Parse overrides from JSON. Missing fields keep their defaults.
    #[cfg(feature = "serde_json")]
    pub fn from_json(src: &str) -> Result<Self, serde_json::Error> {
        let cfg: CardConfig = serde_json::from_str(src)?;
        Ok(cfg.sanitized())
    }

    /// Color for a palette index, wrapping around; falls back to the first
    /// default color when the palette is empty.
    pub fn color(&self, idx: usize) -> &str {
        if self.palette.is_empty() {
            return DEFAULT_PALETTE[0];
        }
        &self.palette[idx % self.palette.len()]
    }

    // An empty palette or negative padding would make the card misbehave
    // silently; pull such values back to the defaults. Heart count is capped.
    #[cfg_attr(not(feature = "serde_json"), allow(dead_code))]
    fn sanitized(mut self) -> Self {
        if self.palette.is_empty() {
            self.palette = DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect();
        }
        if !(self.boundary_padding.is_finite() && self.boundary_padding >= 0.0) {
            self.boundary_padding = BOUNDARY_PADDING;
        }
        self.floating_hearts = self.floating_hearts.min(MAX_FLOATING_HEARTS);
        self
    }
}
