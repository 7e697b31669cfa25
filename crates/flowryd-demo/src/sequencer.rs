use std::time::Duration;

use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument};

use crate::error::DemoError;
use crate::events::{DemoEvent, DemoNotifier, NoopNotifier};
use crate::script::{COMPLETE_DELAY_MS, DemoPhase, DemoStep, FINISH_DELAY_MS, LogLine, step_delays};

/// Timing configuration for the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoConfig {
  /// Every delay is divided by this. Zero is treated as one.
  pub speed: u32,
}

impl Default for DemoConfig {
  fn default() -> Self {
    Self { speed: 1 }
  }
}

impl DemoConfig {
  /// Speed used by `--fast`.
  pub const FAST_SPEED: u32 = 20;

  pub fn fast() -> Self {
    Self {
      speed: Self::FAST_SPEED,
    }
  }

  fn scale(&self, ms: u64) -> Duration {
    Duration::from_millis(ms / u64::from(self.speed.max(1)))
  }
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DemoOutcome {
  Completed { logs: Vec<LogLine> },
  Cancelled { logs: Vec<LogLine> },
}

impl DemoOutcome {
  pub fn logs(&self) -> &[LogLine] {
    match self {
      Self::Completed { logs } | Self::Cancelled { logs } => logs,
    }
  }

  pub fn is_completed(&self) -> bool {
    matches!(self, Self::Completed { .. })
  }
}

/// Plays a scripted sequence of terminal lines on a timer.
///
/// Generic over `N: DemoNotifier` so callers choose how events are observed.
pub struct DemoSequencer<N: DemoNotifier = NoopNotifier> {
  config: DemoConfig,
  notifier: N,
}

impl DemoSequencer<NoopNotifier> {
  pub fn new(config: DemoConfig) -> Self {
    Self::with_notifier(config, NoopNotifier)
  }
}

impl<N: DemoNotifier> DemoSequencer<N> {
  pub fn with_notifier(config: DemoConfig, notifier: N) -> Self {
    Self { config, notifier }
  }

  pub fn config(&self) -> &DemoConfig {
    &self.config
  }

  /// Run `steps` for `party_id` until the script ends or `cancel` fires.
  ///
  /// The phase moves to `Connecting` immediately. Each line waits for its
  /// delay, then the phase becomes `Complete` and the run ends after a
  /// closing delay.
  #[instrument(
    name = "demo_sequence",
    skip(self, steps, cancel),
    fields(party_id = %party_id, steps = steps.len())
  )]
  pub async fn run(
    &self,
    party_id: &str,
    steps: &[DemoStep],
    cancel: CancellationToken,
  ) -> Result<DemoOutcome, DemoError> {
    let party_id = party_id.trim();
    if party_id.is_empty() {
      return Err(DemoError::EmptyPartyId);
    }

    self.notifier.notify(DemoEvent::SequenceStarted {
      party_id: party_id.to_string(),
    });
    self.notifier.notify(DemoEvent::PhaseChanged {
      phase: DemoPhase::Connecting,
    });

    let mut logs = Vec::with_capacity(steps.len());
    for (index, (step, delay)) in steps.iter().zip(step_delays(steps)).enumerate() {
      if !self.wait(delay, &cancel).await {
        return Ok(self.cancelled(party_id, logs));
      }
      self.notifier.notify(DemoEvent::StepLogged {
        index,
        text: step.text.to_string(),
        success: step.success,
      });
      logs.push(LogLine::from(step));
    }

    if !self.wait(COMPLETE_DELAY_MS, &cancel).await {
      return Ok(self.cancelled(party_id, logs));
    }
    self.notifier.notify(DemoEvent::PhaseChanged {
      phase: DemoPhase::Complete,
    });

    if !self.wait(FINISH_DELAY_MS, &cancel).await {
      return Ok(self.cancelled(party_id, logs));
    }
    self.notifier.notify(DemoEvent::SequenceCompleted {
      party_id: party_id.to_string(),
    });
    info!(logged = logs.len(), "demo sequence completed");

    Ok(DemoOutcome::Completed { logs })
  }

  /// Sleep for the scaled delay. Returns `false` if cancelled first.
  async fn wait(&self, ms: u64, cancel: &CancellationToken) -> bool {
    tokio::select! {
      biased;
      _ = cancel.cancelled() => false,
      _ = tokio::time::sleep(self.config.scale(ms)) => true,
    }
  }

  fn cancelled(&self, party_id: &str, logs: Vec<LogLine>) -> DemoOutcome {
    info!(logged = logs.len(), "demo sequence cancelled");
    self.notifier.notify(DemoEvent::SequenceCancelled {
      party_id: party_id.to_string(),
      logged: logs.len(),
    });
    DemoOutcome::Cancelled { logs }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::events::ChannelNotifier;
  use crate::script::LEDGER_CONNECT_STEPS;
  use tokio::sync::mpsc;
  use tokio::time::Instant;

  #[tokio::test(start_paused = true)]
  async fn test_full_sequence_timing() {
    let sequencer = DemoSequencer::new(DemoConfig::default());
    let started = Instant::now();

    let outcome = sequencer
      .run("participant::1", LEDGER_CONNECT_STEPS, CancellationToken::new())
      .await
      .unwrap();

    let elapsed = started.elapsed();
    assert!(outcome.is_completed());
    assert_eq!(outcome.logs().len(), 5);
    assert!(outcome.logs()[4].success);
    // 500 + 3200 between lines + 1000 + 800
    assert!(elapsed >= Duration::from_millis(5500));
    assert!(elapsed < Duration::from_millis(5600));
  }

  #[tokio::test(start_paused = true)]
  async fn test_speed_divides_delays() {
    let sequencer = DemoSequencer::new(DemoConfig { speed: 10 });
    let started = Instant::now();

    sequencer
      .run("participant::1", LEDGER_CONNECT_STEPS, CancellationToken::new())
      .await
      .unwrap();

    assert!(started.elapsed() < Duration::from_millis(600));
  }

  #[tokio::test(start_paused = true)]
  async fn test_event_order() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let sequencer = DemoSequencer::with_notifier(DemoConfig::fast(), ChannelNotifier::new(tx));

    sequencer
      .run("party-7", LEDGER_CONNECT_STEPS, CancellationToken::new())
      .await
      .unwrap();

    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
      events.push(event);
    }

    assert_eq!(events.len(), 1 + 1 + 5 + 1 + 1);
    assert_eq!(
      events[0],
      DemoEvent::SequenceStarted {
        party_id: "party-7".to_string()
      }
    );
    assert_eq!(
      events[1],
      DemoEvent::PhaseChanged {
        phase: DemoPhase::Connecting
      }
    );
    assert!(matches!(events[2], DemoEvent::StepLogged { index: 0, .. }));
    assert!(matches!(events[6], DemoEvent::StepLogged { index: 4, success: true, .. }));
    assert_eq!(
      events[7],
      DemoEvent::PhaseChanged {
        phase: DemoPhase::Complete
      }
    );
    assert!(matches!(events[8], DemoEvent::SequenceCompleted { .. }));
  }

  #[tokio::test(start_paused = true)]
  async fn test_cancel_mid_sequence_keeps_logged_lines() {
    let sequencer = DemoSequencer::new(DemoConfig::default());
    let cancel = CancellationToken::new();

    let trigger = cancel.clone();
    tokio::spawn(async move {
      // Lines land at 500, 1200 and 2100 ms
      tokio::time::sleep(Duration::from_millis(1700)).await;
      trigger.cancel();
    });

    let outcome = sequencer
      .run("participant::1", LEDGER_CONNECT_STEPS, cancel)
      .await
      .unwrap();

    assert!(!outcome.is_completed());
    assert_eq!(outcome.logs().len(), 2);
    assert_eq!(outcome.logs()[1].text, "Authenticating Canton Party ID...");
  }

  #[tokio::test(start_paused = true)]
  async fn test_cancel_before_start() {
    let sequencer = DemoSequencer::new(DemoConfig::default());
    let cancel = CancellationToken::new();
    cancel.cancel();

    let outcome = sequencer
      .run("participant::1", LEDGER_CONNECT_STEPS, cancel)
      .await
      .unwrap();

    assert_eq!(outcome, DemoOutcome::Cancelled { logs: vec![] });
  }

  #[tokio::test]
  async fn test_empty_party_id_rejected() {
    let sequencer = DemoSequencer::new(DemoConfig::default());
    let err = sequencer
      .run("   ", LEDGER_CONNECT_STEPS, CancellationToken::new())
      .await
      .unwrap_err();
    assert!(matches!(err, DemoError::EmptyPartyId));
  }

  #[tokio::test(start_paused = true)]
  async fn test_empty_script_still_completes() {
    let sequencer = DemoSequencer::new(DemoConfig::default());
    let outcome = sequencer
      .run("p", &[], CancellationToken::new())
      .await
      .unwrap();
    assert_eq!(outcome, DemoOutcome::Completed { logs: vec![] });
  }
}
