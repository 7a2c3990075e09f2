use std::fmt;

pub const DEFAULT_LENGTH_SECS: u32 = 25 * 60;
pub const LENGTH_STEP_SECS: u32 = 5 * 60;
pub const MIN_LENGTH_SECS: u32 = 10 * 60;
pub const MAX_LENGTH_SECS: u32 = 60 * 60;

/// Where the session currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Phase {
    #[strum(serialize = "idle")]
    Idle,
    #[strum(serialize = "running")]
    Running,
    #[strum(serialize = "paused")]
    Paused,
}

/// What a single tick did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing to do: the session is idle or paused.
    NoChange,
    /// One second of countdown elapsed.
    Ticked,
    /// The countdown ran out; the session was counted and reset to default.
    Completed,
}

/// The countdown session: configured length, remaining time, phase and the
/// daily completion count, all owned in one place.
///
/// Every operation is a total function: presses that don't apply in the
/// current phase (pause while idle, start while running, ...) are no-ops.
#[derive(Debug)]
pub struct Session {
    length_secs: u32,
    remaining_secs: u32,
    phase: Phase,
    // Set by a pause; blocks length adjustment until reset or restart.
    adjust_locked: bool,
    completed_today: u32,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            length_secs: DEFAULT_LENGTH_SECS,
            remaining_secs: 0,
            phase: Phase::Idle,
            adjust_locked: false,
            completed_today: 0,
        }
    }

    /// Session with a non-default starting length, clamped to the rails.
    /// Equivalent to pressing the adjust keys before the first start.
    pub fn with_length(length_secs: u32) -> Self {
        let mut session = Self::new();
        session.length_secs = length_secs.clamp(MIN_LENGTH_SECS, MAX_LENGTH_SECS);
        session
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn length_secs(&self) -> u32 {
        self.length_secs
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn completed_today(&self) -> u32 {
        self.completed_today
    }

    /// Seconds shown on the big readout: the live countdown while running or
    /// paused, the configured length while idle.
    pub fn display_secs(&self) -> u32 {
        match self.phase {
            Phase::Idle => self.length_secs,
            Phase::Running | Phase::Paused => self.remaining_secs,
        }
    }

    /// Start a fresh countdown from the configured length, or resume a
    /// paused one from where it stopped. No-op while already running.
    pub fn start(&mut self) {
        match self.phase {
            Phase::Idle => {
                self.remaining_secs = self.length_secs;
                self.phase = Phase::Running;
            }
            Phase::Paused => {
                self.phase = Phase::Running;
            }
            Phase::Running => {}
        }
        self.adjust_locked = false;
    }

    /// Freeze a running countdown. Until the next start or reset, ticks
    /// leave the remaining time untouched and length adjustment is locked.
    pub fn pause(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Paused;
            self.adjust_locked = true;
        }
    }

    /// Abandon any countdown in progress and return the configured length to
    /// its default. Legal in every phase; idempotent.
    pub fn reset(&mut self) {
        self.length_secs = DEFAULT_LENGTH_SECS;
        self.remaining_secs = 0;
        self.phase = Phase::Idle;
        self.adjust_locked = false;
    }

    /// Lengthen the next session by five minutes, up to the one-hour rail.
    pub fn increase(&mut self) {
        if self.can_adjust() && self.length_secs < MAX_LENGTH_SECS {
            self.length_secs += LENGTH_STEP_SECS;
        }
    }

    /// Shorten the next session by five minutes, down to the ten-minute rail.
    pub fn decrease(&mut self) {
        if self.can_adjust() && self.length_secs > MIN_LENGTH_SECS {
            self.length_secs -= LENGTH_STEP_SECS;
        }
    }

    fn can_adjust(&self) -> bool {
        self.phase == Phase::Idle && !self.adjust_locked
    }

    /// Advance the countdown by one second. The tick that reaches zero
    /// counts the session and resets to the default length in the same
    /// step, so a 600 s session completes exactly 600 ticks after start and
    /// the readout ends that second back on "25:00".
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != Phase::Running {
            return TickOutcome::NoChange;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.completed_today += 1;
            self.reset();
            return TickOutcome::Completed;
        }
        TickOutcome::Ticked
    }
}

/// Seconds as the zero-padded "MM:SS" readout. Minutes are not folded into
/// hours, so a full hour reads "60:00" like the adjustable range implies.
pub fn format_mmss(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", format_mmss(self.display_secs()), self.phase)
    }
}
