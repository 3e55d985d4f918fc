//! Maps a caption list onto a fixed countdown.
//!
//! The countdown is `duration_seconds` ticks long. Each caption owns
//! `max(1, duration / len)` consecutive ticks and the last caption keeps the
//! label for whatever remains, so the label never points past the list.

use std::time::{Duration, Instant};

use crate::error::{Result, StreamingError};

pub const DEFAULT_TICK: Duration = Duration::from_secs(1);

// ---------------------------------------------------------------------------
// Seams
// ---------------------------------------------------------------------------

/// Destination for countdown progress: a terminal bar in the binary, a
/// recorder in tests.
pub trait ProgressSink {
    /// Called once before the first tick with the total number of units.
    fn begin(&mut self, total: u64) -> Result<()>;
    fn advance(&mut self, delta: u64) -> Result<()>;
    fn set_label(&mut self, label: &str) -> Result<()>;
    fn finish(&mut self) -> Result<()>;
}

/// Source of time for tick deadlines.
pub trait Clock {
    fn now(&self) -> Instant;
    /// Block until `deadline`. Returns at once if it has already passed.
    fn sleep_until(&mut self, deadline: Instant);
}

/// Real wall-clock sleeping.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep_until(&mut self, deadline: Instant) {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
    }
}

// ---------------------------------------------------------------------------
// Pacer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct Pacer {
    tick: Duration,
}

impl Default for Pacer {
    fn default() -> Self {
        Self::new(DEFAULT_TICK)
    }
}

impl Pacer {
    pub fn new(tick: Duration) -> Self {
        Self { tick }
    }

    /// Ticks each caption is shown for. Never zero.
    pub fn ticks_per_caption(duration_seconds: u64, caption_count: usize) -> u64 {
        (duration_seconds / caption_count.max(1) as u64).max(1)
    }

    /// Offset from the start of the countdown at which `ticks` have elapsed.
    fn deadline_offset(&self, ticks: u64) -> Duration {
        let ticks = u32::try_from(ticks).unwrap_or(u32::MAX);
        self.tick.saturating_mul(ticks)
    }

    /// Caption shown at `tick`, clamped to the last caption.
    pub fn caption_index(tick: u64, ticks_per_caption: u64, caption_count: usize) -> usize {
        let raw = tick / ticks_per_caption.max(1);
        usize::try_from(raw)
            .unwrap_or(usize::MAX)
            .min(caption_count.saturating_sub(1))
    }

    /// Play the countdown, blocking for `duration_seconds` ticks.
    ///
    /// Tick `i` ends at `start + tick * (i + 1)`, so time spent drawing does
    /// not push the countdown past its duration.
    pub fn run(
        &self,
        captions: &[String],
        duration_seconds: u64,
        sink: &mut dyn ProgressSink,
        clock: &mut dyn Clock,
    ) -> Result<()> {
        if duration_seconds == 0 {
            return Err(StreamingError::InvalidDuration(duration_seconds));
        }
        if captions.is_empty() {
            return Err(StreamingError::EmptyCaptions);
        }

        let per_caption = Self::ticks_per_caption(duration_seconds, captions.len());
        tracing::debug!(
            duration_seconds,
            captions = captions.len(),
            per_caption,
            "starting countdown"
        );

        sink.begin(duration_seconds)?;

        let start = clock.now();
        let mut shown: Option<usize> = None;
        for tick in 0..duration_seconds {
            sink.advance(1)?;

            let index = Self::caption_index(tick, per_caption, captions.len());
            if shown != Some(index) {
                sink.set_label(&captions[index])?;
                shown = Some(index);
            }

            clock.sleep_until(start + self.deadline_offset(tick + 1));
        }

        sink.finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Begin(u64),
        Advance(u64),
        Label(String),
        Finish,
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<Event>,
    }

    impl Recorder {
        fn advanced(&self) -> u64 {
            self.events
                .iter()
                .map(|e| match e {
                    Event::Advance(n) => *n,
                    _ => 0,
                })
                .sum()
        }

        /// `(tick, label)` for every label change; tick = advances seen so far - 1.
        fn label_ticks(&self) -> Vec<(u64, String)> {
            let mut advanced = 0;
            let mut out = Vec::new();
            for e in &self.events {
                match e {
                    Event::Advance(n) => advanced += n,
                    Event::Label(l) => out.push((advanced - 1, l.clone())),
                    _ => {}
                }
            }
            out
        }
    }

    impl ProgressSink for Recorder {
        fn begin(&mut self, total: u64) -> Result<()> {
            self.events.push(Event::Begin(total));
            Ok(())
        }
        fn advance(&mut self, delta: u64) -> Result<()> {
            self.events.push(Event::Advance(delta));
            Ok(())
        }
        fn set_label(&mut self, label: &str) -> Result<()> {
            self.events.push(Event::Label(label.to_string()));
            Ok(())
        }
        fn finish(&mut self) -> Result<()> {
            self.events.push(Event::Finish);
            Ok(())
        }
    }

    /// Manual clock. `lag` is added before every wait to stand in for the
    /// time spent drawing a tick.
    struct FakeClock {
        start: Instant,
        now: Instant,
        lag: Duration,
        slept: Duration,
        sleeps: usize,
    }

    impl FakeClock {
        fn with_lag(lag: Duration) -> Self {
            let start = Instant::now();
            Self {
                start,
                now: start,
                lag,
                slept: Duration::ZERO,
                sleeps: 0,
            }
        }

        fn elapsed(&self) -> Duration {
            self.now - self.start
        }
    }

    impl Default for FakeClock {
        fn default() -> Self {
            Self::with_lag(Duration::ZERO)
        }
    }

    impl Clock for FakeClock {
        fn now(&self) -> Instant {
            self.now
        }

        fn sleep_until(&mut self, deadline: Instant) {
            self.now += self.lag;
            self.slept += deadline.saturating_duration_since(self.now);
            self.now = self.now.max(deadline);
            self.sleeps += 1;
        }
    }

    fn captions(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("caption {i}")).collect()
    }

    #[test]
    fn ten_minutes_ten_captions() {
        let mut sink = Recorder::default();
        let mut clock = FakeClock::default();
        Pacer::default()
            .run(&captions(10), 600, &mut sink, &mut clock)
            .unwrap();

        assert_eq!(Pacer::ticks_per_caption(600, 10), 60);
        assert_eq!(sink.advanced(), 600);
        let ticks: Vec<u64> = sink.label_ticks().iter().map(|(t, _)| *t).collect();
        assert_eq!(ticks, vec![0, 60, 120, 180, 240, 300, 360, 420, 480, 540]);
        assert_eq!(sink.label_ticks()[9].1, "caption 9");
        assert_eq!(sink.events.first(), Some(&Event::Begin(600)));
        assert_eq!(sink.events.last(), Some(&Event::Finish));
        assert_eq!(clock.sleeps, 600);
        assert_eq!(clock.slept, Duration::from_secs(600));
        assert_eq!(clock.elapsed(), Duration::from_secs(600));
    }

    #[test]
    fn drawing_time_does_not_stretch_the_countdown() {
        let mut clock = FakeClock::with_lag(Duration::from_millis(300));
        Pacer::default()
            .run(&captions(2), 10, &mut Recorder::default(), &mut clock)
            .unwrap();

        assert_eq!(clock.sleeps, 10);
        assert_eq!(clock.elapsed(), Duration::from_secs(10));
        assert_eq!(clock.slept, Duration::from_millis(7000));
    }

    #[test]
    fn overrunning_a_tick_skips_the_wait() {
        let mut clock = FakeClock::with_lag(Duration::from_millis(1500));
        Pacer::default()
            .run(&captions(1), 4, &mut Recorder::default(), &mut clock)
            .unwrap();

        // Each tick overruns its 1 s slot, so no wait is ever owed.
        assert_eq!(clock.slept, Duration::ZERO);
        assert_eq!(clock.elapsed(), Duration::from_secs(6));
    }

    #[test]
    fn last_caption_absorbs_remainder() {
        // 10 ticks, 4 captions -> 2 ticks each, caption 3 covers ticks 6..10.
        let mut sink = Recorder::default();
        Pacer::new(Duration::ZERO)
            .run(&captions(4), 10, &mut sink, &mut FakeClock::default())
            .unwrap();

        let labels = sink.label_ticks();
        assert_eq!(
            labels,
            vec![
                (0, "caption 0".to_string()),
                (2, "caption 1".to_string()),
                (4, "caption 2".to_string()),
                (6, "caption 3".to_string()),
            ]
        );
        assert_eq!(sink.advanced(), 10);
    }

    #[test]
    fn more_captions_than_ticks_shows_one_per_tick() {
        let mut sink = Recorder::default();
        Pacer::new(Duration::ZERO)
            .run(&captions(8), 3, &mut sink, &mut FakeClock::default())
            .unwrap();
        let labels: Vec<String> = sink.label_ticks().into_iter().map(|(_, l)| l).collect();
        assert_eq!(labels, vec!["caption 0", "caption 1", "caption 2"]);
    }

    #[test]
    fn caption_index_is_clamped() {
        assert_eq!(Pacer::caption_index(0, 3, 3), 0);
        assert_eq!(Pacer::caption_index(8, 3, 3), 2);
        assert_eq!(Pacer::caption_index(100, 3, 3), 2);
        assert_eq!(Pacer::caption_index(5, 0, 3), 2);
    }

    #[test]
    fn empty_captions_rejected() {
        let err = Pacer::default()
            .run(&[], 60, &mut Recorder::default(), &mut FakeClock::default())
            .unwrap_err();
        assert!(matches!(err, StreamingError::EmptyCaptions));
    }

    #[test]
    fn zero_duration_rejected() {
        let mut sink = Recorder::default();
        let err = Pacer::default()
            .run(&captions(2), 0, &mut sink, &mut FakeClock::default())
            .unwrap_err();
        assert!(matches!(err, StreamingError::InvalidDuration(0)));
        assert!(sink.events.is_empty());
    }
}
