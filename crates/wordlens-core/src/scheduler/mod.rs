//! Incremental analysis scheduling.
//!
//! [`AnalysisScheduler`] is a synchronous state machine that decides when the
//! engine should run while a document is being edited. Time is passed in by
//! the caller, so the machine can be driven by a real clock ([`live`]), a
//! paused tokio clock, or plain `Instant` arithmetic in tests.
//!
//! ```text
//!            on_change              poll (deadline passed)
//!   Idle ───────────────▶ Pending ─────────────────────────▶ Running
//!    ▲  ◀── unchanged ───   │ ▲ on_change re-arms               │
//!    │                      └─┘                                 │
//!    └──────────────────── complete (any outcome) ◀─────────────┘
//! ```
//!
//! Only one run is ever in flight. Changes that arrive during a run are
//! remembered. When the run completes, its result is kept if the document
//! still matches the snapshot it analyzed, dropped with no new run if the
//! document went back to the last delivered content, and otherwise dropped
//! in favour of a fresh run over the newest content.

pub mod live;

use std::sync::Arc;
use std::time::Instant;

use crate::analysis::AnalysisResult;
use crate::config::SchedulerSettings;
use crate::error::EngineResult;

pub use live::LiveAnalyzer;

/// Receives every result the scheduler delivers.
pub trait ResultSink {
    /// Called once per delivered result, newest last.
    fn deliver(&mut self, result: Arc<AnalysisResult>);
}

impl<F> ResultSink for F
where
    F: FnMut(Arc<AnalysisResult>),
{
    fn deliver(&mut self, result: Arc<AnalysisResult>) {
        self(result);
    }
}

/// Where the scheduler currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// Nothing scheduled.
    Idle,
    /// A run is armed and becomes due at `deadline`.
    Pending {
        /// When the run becomes due.
        deadline: Instant,
    },
    /// A run is in flight.
    Running {
        /// Generation of the in-flight run.
        generation: u64,
    },
}

/// What [`AnalysisScheduler::on_change`] did with a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOutcome {
    /// Content matches the latest delivered result; any pending run was cancelled.
    Unchanged,
    /// A run is in flight; the change is picked up once it completes.
    Deferred,
    /// A run is armed for `deadline`.
    Armed {
        /// When the run becomes due.
        deadline: Instant,
    },
}

/// What [`AnalysisScheduler::complete`] did with a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The generation was not the one in flight; nothing changed.
    Stale,
    /// Content changed during the run; the result was dropped and a new run
    /// armed for `deadline`.
    Superseded {
        /// When the follow-up run becomes due.
        deadline: Instant,
    },
    /// Content went back to the last delivered result during the run; the
    /// result was dropped and nothing armed.
    Reverted,
    /// The result was stored and handed to the sink.
    Delivered,
    /// The run failed; the previous result stays current.
    Failed,
}

/// Permission to run the engine once over a snapshot of the content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunTicket {
    /// Generation to pass back to [`AnalysisScheduler::complete`].
    pub generation: u64,
    /// The content to analyze.
    pub content: String,
}

/// Debounced, single-flight scheduler for analysis runs.
#[derive(Debug)]
pub struct AnalysisScheduler<S> {
    settings: SchedulerSettings,
    state: SchedulerState,
    generation: u64,
    content: String,
    running_content: String,
    delivered_content: Option<String>,
    latest: Option<Arc<AnalysisResult>>,
    sink: S,
}

impl<S: ResultSink> AnalysisScheduler<S> {
    /// Create an idle scheduler that hands results to `sink`.
    pub const fn new(settings: SchedulerSettings, sink: S) -> Self {
        Self {
            settings,
            state: SchedulerState::Idle,
            generation: 0,
            content: String::new(),
            running_content: String::new(),
            delivered_content: None,
            latest: None,
            sink,
        }
    }

    /// Current state.
    pub const fn state(&self) -> SchedulerState {
        self.state
    }

    /// Generation of the most recently started run, 0 before the first.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// The newest content seen.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The latest delivered result.
    pub fn latest(&self) -> Option<&Arc<AnalysisResult>> {
        self.latest.as_ref()
    }

    /// When the pending run becomes due, if one is armed.
    pub const fn deadline(&self) -> Option<Instant> {
        match self.state {
            SchedulerState::Pending { deadline } => Some(deadline),
            _ => None,
        }
    }

    /// Whether a run is in flight.
    pub const fn is_running(&self) -> bool {
        matches!(self.state, SchedulerState::Running { .. })
    }

    /// Record a change to the document.
    pub fn on_change(&mut self, content: impl Into<String>, now: Instant) -> ChangeOutcome {
        self.content = content.into();

        if let SchedulerState::Running { generation } = self.state {
            tracing::debug!(generation, "change during run, deferred");
            return ChangeOutcome::Deferred;
        }

        if self.is_delivered(&self.content) {
            if matches!(self.state, SchedulerState::Pending { .. }) {
                tracing::debug!("content back to last delivered result, pending run cancelled");
            }
            self.state = SchedulerState::Idle;
            return ChangeOutcome::Unchanged;
        }

        ChangeOutcome::Armed {
            deadline: self.arm(now),
        }
    }

    /// Start the pending run if it is due.
    ///
    /// Returns `None` while idle, before the deadline, and while a run is in
    /// flight.
    pub fn poll(&mut self, now: Instant) -> Option<RunTicket> {
        match self.state {
            SchedulerState::Pending { deadline } if now >= deadline => {
                self.generation += 1;
                self.running_content.clone_from(&self.content);
                self.state = SchedulerState::Running {
                    generation: self.generation,
                };
                tracing::debug!(
                    generation = self.generation,
                    chars = self.content.len(),
                    "run started"
                );
                Some(RunTicket {
                    generation: self.generation,
                    content: self.content.clone(),
                })
            }
            _ => None,
        }
    }

    /// Finish the run started under `generation`.
    pub fn complete(
        &mut self,
        generation: u64,
        outcome: EngineResult<AnalysisResult>,
        now: Instant,
    ) -> Completion {
        if self.state != (SchedulerState::Running { generation }) {
            tracing::debug!(generation, current = self.generation, "stale completion ignored");
            return Completion::Stale;
        }
        self.state = SchedulerState::Idle;
        let changed = self.content != self.running_content;
        let reverted = changed && self.is_delivered(&self.content);

        match outcome {
            Err(e) => {
                tracing::warn!(generation, error = %e, "analysis run failed, keeping previous result");
                if changed && !reverted {
                    self.arm(now);
                }
                Completion::Failed
            }
            Ok(_) if reverted => {
                tracing::debug!(generation, "content back to last delivered result, result dropped");
                Completion::Reverted
            }
            Ok(_) if changed => {
                let deadline = self.arm(now);
                tracing::debug!(generation, "content changed during run, result dropped");
                Completion::Superseded { deadline }
            }
            Ok(result) => {
                let result = Arc::new(result);
                self.latest = Some(Arc::clone(&result));
                self.delivered_content = Some(self.content.clone());
                tracing::debug!(generation, "result delivered");
                self.sink.deliver(result);
                Completion::Delivered
            }
        }
    }

    fn is_delivered(&self, content: &str) -> bool {
        self.delivered_content.as_deref() == Some(content)
    }

    fn arm(&mut self, now: Instant) -> Instant {
        let delay = self.settings.debounce_for(self.content.chars().count());
        let deadline = now + delay;
        self.state = SchedulerState::Pending { deadline };
        tracing::debug!(delay_ms = delay.as_millis() as u64, "run armed");
        deadline
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::analysis::analyze_text;
    use crate::config::AnalysisSettings;
    use crate::error::AnalysisError;

    type Delivered = Vec<Arc<AnalysisResult>>;

    fn scheduler() -> AnalysisScheduler<impl FnMut(Arc<AnalysisResult>)> {
        AnalysisScheduler::new(SchedulerSettings::default(), |_: Arc<AnalysisResult>| {})
    }

    fn recording(delivered: &mut Delivered) -> AnalysisScheduler<impl FnMut(Arc<AnalysisResult>) + '_> {
        AnalysisScheduler::new(SchedulerSettings::default(), move |r| delivered.push(r))
    }

    fn run(text: &str) -> EngineResult<AnalysisResult> {
        Ok(analyze_text(text, &AnalysisSettings::default()))
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn burst_of_changes_runs_once_on_final_content() {
        let t0 = Instant::now();
        let mut delivered = Vec::new();
        let mut s = recording(&mut delivered);

        for (i, text) in ["one", "one two", "one two three"].into_iter().enumerate() {
            let outcome = s.on_change(text, t0 + ms(i as u64 * 30));
            assert!(matches!(outcome, ChangeOutcome::Armed { .. }));
        }
        // Last change at 60 ms, so the run is due at 160 ms.
        assert_eq!(s.poll(t0 + ms(150)), None);

        let ticket = s.poll(t0 + ms(160)).expect("run due");
        assert_eq!(ticket.generation, 1);
        assert_eq!(ticket.content, "one two three");

        let outcome = run(&ticket.content);
        assert_eq!(s.complete(ticket.generation, outcome, t0 + ms(170)), Completion::Delivered);
        assert_eq!(s.state(), SchedulerState::Idle);
        assert_eq!(s.latest().map(|r| r.word_count), Some(3));
        drop(s);

        assert_eq!(delivered.len(), 1);
    }

    #[test]
    fn large_text_waits_longer() {
        let t0 = Instant::now();
        let mut s = scheduler();
        let big = "a".repeat(10_001);

        assert_eq!(
            s.on_change(big, t0),
            ChangeOutcome::Armed { deadline: t0 + ms(500) }
        );
        assert_eq!(s.poll(t0 + ms(499)), None);
        assert!(s.poll(t0 + ms(500)).is_some());
    }

    #[test]
    fn exactly_threshold_uses_short_delay() {
        let t0 = Instant::now();
        let mut s = scheduler();
        assert_eq!(
            s.on_change("a".repeat(10_000), t0),
            ChangeOutcome::Armed { deadline: t0 + ms(100) }
        );
    }

    #[test]
    fn poll_is_noop_while_running() {
        let t0 = Instant::now();
        let mut s = scheduler();
        s.on_change("hello", t0);
        let ticket = s.poll(t0 + ms(100)).expect("run due");

        assert_eq!(s.poll(t0 + ms(10_000)), None);
        assert_eq!(s.state(), SchedulerState::Running { generation: ticket.generation });
    }

    #[test]
    fn change_during_run_supersedes_result() {
        let t0 = Instant::now();
        let mut delivered = Vec::new();
        let mut s = recording(&mut delivered);

        s.on_change("first draft", t0);
        let ticket = s.poll(t0 + ms(100)).expect("run due");
        assert_eq!(s.on_change("second draft here", t0 + ms(120)), ChangeOutcome::Deferred);

        let completion = s.complete(ticket.generation, run(&ticket.content), t0 + ms(130));
        assert_eq!(completion, Completion::Superseded { deadline: t0 + ms(230) });
        assert!(s.latest().is_none());

        let follow_up = s.poll(t0 + ms(230)).expect("follow-up due");
        assert_eq!(follow_up.generation, 2);
        assert_eq!(follow_up.content, "second draft here");
        assert_eq!(
            s.complete(follow_up.generation, run(&follow_up.content), t0 + ms(240)),
            Completion::Delivered
        );
        drop(s);

        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].word_count, 3);
    }

    #[test]
    fn undo_to_delivered_content_during_run_drops_result() {
        let t0 = Instant::now();
        let mut delivered = Vec::new();
        let mut s = recording(&mut delivered);

        s.on_change("alpha", t0);
        let ticket = s.poll(t0 + ms(100)).expect("run due");
        s.complete(ticket.generation, run(&ticket.content), t0 + ms(100));

        s.on_change("alpha beta", t0 + ms(200));
        let ticket = s.poll(t0 + ms(300)).expect("run due");
        assert_eq!(s.on_change("alpha", t0 + ms(310)), ChangeOutcome::Deferred);

        let completion = s.complete(ticket.generation, run(&ticket.content), t0 + ms(320));
        assert_eq!(completion, Completion::Reverted);
        assert_eq!(s.state(), SchedulerState::Idle);
        assert_eq!(s.poll(t0 + ms(10_000)), None);
        assert_eq!(s.generation(), 2);
        assert_eq!(s.latest().map(|r| r.word_count), Some(1));
        drop(s);
        assert_eq!(delivered.len(), 1);
    }

    #[test]
    fn failed_run_with_undo_to_delivered_content_stays_idle() {
        let t0 = Instant::now();
        let mut s = scheduler();
        s.on_change("alpha", t0);
        let ticket = s.poll(t0 + ms(100)).expect("run due");
        s.complete(ticket.generation, run(&ticket.content), t0 + ms(100));

        s.on_change("alpha beta", t0 + ms(200));
        let ticket = s.poll(t0 + ms(300)).expect("run due");
        s.on_change("alpha", t0 + ms(310));

        let failed = Err(AnalysisError::Failed("boom".to_string()));
        assert_eq!(s.complete(ticket.generation, failed, t0 + ms(320)), Completion::Failed);
        assert_eq!(s.state(), SchedulerState::Idle);
    }

    #[test]
    fn edit_back_to_snapshot_during_run_delivers() {
        let t0 = Instant::now();
        let mut delivered = Vec::new();
        let mut s = recording(&mut delivered);

        s.on_change("one two", t0);
        let ticket = s.poll(t0 + ms(100)).expect("run due");
        assert_eq!(s.on_change("one two three", t0 + ms(110)), ChangeOutcome::Deferred);
        assert_eq!(s.on_change("one two", t0 + ms(120)), ChangeOutcome::Deferred);

        let completion = s.complete(ticket.generation, run(&ticket.content), t0 + ms(130));
        assert_eq!(completion, Completion::Delivered);
        assert_eq!(s.state(), SchedulerState::Idle);
        assert_eq!(s.poll(t0 + ms(10_000)), None);
        assert_eq!(s.on_change("one two", t0 + ms(200)), ChangeOutcome::Unchanged);
        drop(s);
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].word_count, 2);
    }

    #[test]
    fn stale_generation_is_ignored() {
        let t0 = Instant::now();
        let mut s = scheduler();
        s.on_change("text", t0);
        let ticket = s.poll(t0 + ms(100)).expect("run due");

        assert_eq!(s.complete(ticket.generation + 1, run("text"), t0), Completion::Stale);
        assert!(s.is_running());
        assert_eq!(s.complete(ticket.generation, run("text"), t0), Completion::Delivered);
        assert_eq!(s.complete(ticket.generation, run("text"), t0), Completion::Stale);
    }

    #[test]
    fn failure_keeps_previous_result() {
        let t0 = Instant::now();
        let mut delivered = Vec::new();
        let mut s = recording(&mut delivered);

        s.on_change("good text", t0);
        let ticket = s.poll(t0 + ms(100)).expect("run due");
        s.complete(ticket.generation, run(&ticket.content), t0 + ms(100));

        s.on_change("good text again", t0 + ms(200));
        let ticket = s.poll(t0 + ms(300)).expect("run due");
        let failed = Err(AnalysisError::Panicked("boom".to_string()));
        assert_eq!(s.complete(ticket.generation, failed, t0 + ms(300)), Completion::Failed);

        assert_eq!(s.state(), SchedulerState::Idle);
        assert_eq!(s.latest().map(|r| r.word_count), Some(2));
        drop(s);
        assert_eq!(delivered.len(), 1);
    }

    #[test]
    fn failure_with_deferred_change_rearms() {
        let t0 = Instant::now();
        let mut s = scheduler();
        s.on_change("one", t0);
        let ticket = s.poll(t0 + ms(100)).expect("run due");
        s.on_change("one two", t0 + ms(110));

        let failed = Err(AnalysisError::Failed("boom".to_string()));
        assert_eq!(s.complete(ticket.generation, failed, t0 + ms(120)), Completion::Failed);
        assert_eq!(s.deadline(), Some(t0 + ms(220)));
    }

    #[test]
    fn unchanged_content_is_a_noop() {
        let t0 = Instant::now();
        let mut s = scheduler();
        s.on_change("same", t0);
        let ticket = s.poll(t0 + ms(100)).expect("run due");
        s.complete(ticket.generation, run(&ticket.content), t0 + ms(100));

        assert_eq!(s.on_change("same", t0 + ms(200)), ChangeOutcome::Unchanged);
        assert_eq!(s.state(), SchedulerState::Idle);

        // Typing then undoing cancels the pending run.
        assert!(matches!(s.on_change("samey", t0 + ms(300)), ChangeOutcome::Armed { .. }));
        assert_eq!(s.on_change("same", t0 + ms(310)), ChangeOutcome::Unchanged);
        assert_eq!(s.poll(t0 + ms(1_000)), None);
        assert_eq!(s.generation(), 1);
    }

    #[test]
    fn generations_increase_from_one() {
        let t0 = Instant::now();
        let mut s = scheduler();
        assert_eq!(s.generation(), 0);
        for (i, text) in ["a", "b", "c"].into_iter().enumerate() {
            let now = t0 + ms(i as u64 * 1_000);
            s.on_change(text, now);
            let ticket = s.poll(now + ms(100)).expect("run due");
            assert_eq!(ticket.generation, i as u64 + 1);
            s.complete(ticket.generation, run(text), now + ms(100));
        }
    }
}
