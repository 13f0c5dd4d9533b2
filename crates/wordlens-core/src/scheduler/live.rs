//! Async driver for [`AnalysisScheduler`](super::AnalysisScheduler).
//!
//! A [`LiveAnalyzer`] owns the scheduler inside a tokio task. Edits arrive
//! over a channel, the task sleeps until the debounce deadline, and each run
//! executes on the task itself so that at most one analysis is ever in
//! flight. Edits that queue up while the engine is busy are applied before
//! the run completes, which makes the finished result stale and schedules a
//! follow-up over the newest content.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};

use super::{AnalysisScheduler, ResultSink, RunTicket};
use crate::analysis::{AnalysisResult, TextAnalyzer};
use crate::config::SchedulerSettings;
use crate::error::{AnalysisError, EngineResult};

/// Handle to a running live-analysis task.
#[derive(Debug)]
pub struct LiveAnalyzer {
    changes: mpsc::UnboundedSender<String>,
    task: JoinHandle<()>,
}

impl LiveAnalyzer {
    /// Spawn the driver task on the current tokio runtime.
    ///
    /// Every delivered result goes to `sink`, in order.
    pub fn spawn<A, S>(analyzer: A, settings: SchedulerSettings, sink: S) -> Self
    where
        A: TextAnalyzer + 'static,
        S: ResultSink + Send + 'static,
    {
        let (changes, rx) = mpsc::unbounded_channel();
        let scheduler = AnalysisScheduler::new(settings, sink);
        let task = tokio::spawn(drive(analyzer, scheduler, rx));
        Self { changes, task }
    }

    /// Report the full current content of the document.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Closed`] if the driver task has stopped.
    pub fn update(&self, content: impl Into<String>) -> EngineResult<()> {
        self.changes
            .send(content.into())
            .map_err(|_| AnalysisError::Closed)
    }

    /// Stop accepting changes and wait for the driver to finish.
    ///
    /// A change that is still waiting out its debounce delay is analyzed
    /// immediately, so the sink always sees the final content.
    pub async fn shutdown(self) {
        drop(self.changes);
        if let Err(e) = self.task.await {
            tracing::warn!(error = %e, "live analyzer task ended abnormally");
        }
    }
}

fn now() -> std::time::Instant {
    Instant::now().into_std()
}

enum Wake {
    Change(Option<String>),
    Due,
}

#[tracing::instrument(skip_all)]
async fn drive<A, S>(
    analyzer: A,
    mut scheduler: AnalysisScheduler<S>,
    mut changes: mpsc::UnboundedReceiver<String>,
) where
    A: TextAnalyzer,
    S: ResultSink,
{
    loop {
        let wake = match scheduler.deadline() {
            Some(deadline) => tokio::select! {
                change = changes.recv() => Wake::Change(change),
                () = sleep_until(Instant::from_std(deadline)) => Wake::Due,
            },
            None => Wake::Change(changes.recv().await),
        };

        match wake {
            Wake::Change(Some(content)) => {
                scheduler.on_change(content, now());
            }
            Wake::Change(None) => break,
            Wake::Due => {
                if let Some(ticket) = scheduler.poll(now()) {
                    execute(&analyzer, &mut scheduler, &mut changes, ticket).await;
                }
            }
        }
    }

    // Channel closed: run whatever is still pending without waiting.
    while let Some(due) = scheduler.deadline() {
        if let Some(ticket) = scheduler.poll(due) {
            execute(&analyzer, &mut scheduler, &mut changes, ticket).await;
        }
    }
    tracing::debug!(runs = scheduler.generation(), "live analyzer stopped");
}

async fn execute<A, S>(
    analyzer: &A,
    scheduler: &mut AnalysisScheduler<S>,
    changes: &mut mpsc::UnboundedReceiver<String>,
    ticket: RunTicket,
) where
    A: TextAnalyzer,
    S: ResultSink,
{
    tokio::task::yield_now().await;
    let outcome = run_guarded(analyzer, &ticket.content);
    tokio::task::yield_now().await;

    while let Ok(content) = changes.try_recv() {
        scheduler.on_change(content, now());
    }
    scheduler.complete(ticket.generation, outcome, now());
}

/// Run the analyzer, turning a panic into [`AnalysisError::Panicked`].
pub fn run_guarded<A>(analyzer: &A, content: &str) -> EngineResult<AnalysisResult>
where
    A: TextAnalyzer + ?Sized,
{
    catch_unwind(AssertUnwindSafe(|| analyzer.analyze(content)))
        .unwrap_or_else(|payload| Err(AnalysisError::Panicked(panic_message(&*payload))))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}
