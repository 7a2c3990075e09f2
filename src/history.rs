/// Minutes credited per completed session when summarizing the day.
pub const SESSION_CREDIT_MINUTES: u32 = 25;

/// How long the history banner stays on screen, in ticks.
pub const BANNER_SECS: u32 = 3;

/// Daily study summary line shown by the history key.
pub fn study_today_line(completed_sessions: u32) -> String {
    let total_minutes = completed_sessions * SESSION_CREDIT_MINUTES;
    let (hours, minutes) = (total_minutes / 60, total_minutes % 60);
    format!("Study Today: {:02} hours {:02} minutes", hours, minutes)
}

/// Transient single-line text with a tick-driven lifetime.
///
/// Each show re-arms the deadline under a new generation, so a show that
/// lands while an earlier banner is still up supersedes the earlier pending
/// clear instead of being blanked by it.
#[derive(Debug, Default)]
pub struct Banner {
    text: Option<String>,
    ttl_secs: u32,
    generation: u64,
}

impl Banner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display `text` for the next [`BANNER_SECS`] ticks.
    pub fn show(&mut self, text: String) {
        self.text = Some(text);
        self.ttl_secs = BANNER_SECS;
        self.generation += 1;
    }

    /// The currently visible text, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Age the banner by one second, clearing it once its time is up.
    pub fn tick(&mut self) {
        if self.text.is_none() {
            return;
        }
        self.ttl_secs = self.ttl_secs.saturating_sub(1);
        if self.ttl_secs == 0 {
            self.text = None;
        }
    }
}
