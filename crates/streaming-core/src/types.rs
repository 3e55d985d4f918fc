use std::fmt;

use crate::error::{Result, StreamingError};

// ---------------------------------------------------------------------------
// Phase
// ---------------------------------------------------------------------------

/// One of the four countdown sequences of a broadcast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Start,
    Coffee,
    Break,
    Stop,
}

impl Phase {
    /// Subcommand name.
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Start => "start",
            Phase::Coffee => "kafe",
            Phase::Break => "break",
            Phase::Stop => "stop",
        }
    }

    pub fn template(self) -> &'static str {
        match self {
            Phase::Start => "starting_seq",
            Phase::Coffee => "coffee_seq",
            Phase::Break => "break_seq",
            Phase::Stop => "ending_seq",
        }
    }

    /// Banner printed above the progress bar.
    pub fn title(self) -> &'static str {
        match self {
            Phase::Start => "Stream is starting...",
            Phase::Coffee => "Coffee prep...",
            Phase::Break => "Small break...",
            Phase::Stop => "Stream is ending...",
        }
    }

    /// Duration for phases that do not take one on the command line.
    pub fn fixed_duration(self) -> Option<u64> {
        match self {
            Phase::Start => Some(600),
            Phase::Stop => Some(300),
            Phase::Coffee | Phase::Break => None,
        }
    }

    /// Value posted to the live hook before the phase runs, if any.
    pub fn live_status(self) -> Option<bool> {
        match self {
            Phase::Start => Some(true),
            Phase::Stop => Some(false),
            Phase::Coffee | Phase::Break => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PromptRequest
// ---------------------------------------------------------------------------

/// A template and the countdown length it is generating captions for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    template_name: String,
    duration_seconds: u64,
}

impl PromptRequest {
    pub fn new(template_name: impl Into<String>, duration_seconds: u64) -> Result<Self> {
        if duration_seconds == 0 {
            return Err(StreamingError::InvalidDuration(duration_seconds));
        }
        Ok(Self {
            template_name: template_name.into(),
            duration_seconds,
        })
    }

    pub fn for_phase(phase: Phase, duration_seconds: u64) -> Result<Self> {
        Self::new(phase.template(), duration_seconds)
    }

    pub fn template_name(&self) -> &str {
        &self.template_name
    }

    pub fn duration_seconds(&self) -> u64 {
        self.duration_seconds
    }

    /// One caption per six seconds, rounded down.
    pub fn min_items(&self) -> usize {
        (self.duration_seconds / 6) as usize
    }

    /// Captions asked for and required: [`min_items`](Self::min_items), but
    /// never fewer than one.
    pub fn required_items(&self) -> usize {
        self.min_items().max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_durations() {
        assert_eq!(Phase::Start.fixed_duration(), Some(600));
        assert_eq!(Phase::Stop.fixed_duration(), Some(300));
        assert_eq!(Phase::Coffee.fixed_duration(), None);
        assert_eq!(Phase::Break.fixed_duration(), None);
    }

    #[test]
    fn only_start_and_stop_touch_the_hook() {
        let all = [Phase::Start, Phase::Coffee, Phase::Break, Phase::Stop];
        let hooked: Vec<(Phase, bool)> = all
            .iter()
            .filter_map(|p| p.live_status().map(|live| (*p, live)))
            .collect();
        assert_eq!(hooked, vec![(Phase::Start, true), (Phase::Stop, false)]);
    }

    #[test]
    fn min_items_floors() {
        assert_eq!(PromptRequest::new("t", 600).unwrap().min_items(), 100);
        assert_eq!(PromptRequest::new("t", 65).unwrap().min_items(), 10);
        assert_eq!(PromptRequest::new("t", 5).unwrap().min_items(), 0);
    }

    #[test]
    fn short_durations_still_require_one_caption() {
        assert_eq!(PromptRequest::new("t", 5).unwrap().required_items(), 1);
        assert_eq!(PromptRequest::new("t", 1).unwrap().required_items(), 1);
        assert_eq!(PromptRequest::new("t", 65).unwrap().required_items(), 10);
    }

    #[test]
    fn zero_duration_rejected() {
        assert!(matches!(
            PromptRequest::new("t", 0),
            Err(StreamingError::InvalidDuration(0))
        ));
    }

    #[test]
    fn phase_request_uses_phase_template() {
        let r = PromptRequest::for_phase(Phase::Coffee, 120).unwrap();
        assert_eq!(r.template_name(), "coffee_seq");
        assert_eq!(r.duration_seconds(), 120);
    }
}
