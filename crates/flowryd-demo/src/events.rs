//! Demo events and notifiers.
//!
//! The sequencer emits an event for every line and phase change so a caller
//! can render the terminal animation however it likes.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::info;

use crate::script::DemoPhase;

/// Events emitted while a demo sequence runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemoEvent {
  /// The sequence has started for a party.
  SequenceStarted { party_id: String },

  /// A scripted line was printed.
  StepLogged {
    index: usize,
    text: String,
    success: bool,
  },

  /// The phase changed.
  PhaseChanged { phase: DemoPhase },

  /// All lines were printed and the closing delay elapsed.
  SequenceCompleted { party_id: String },

  /// The sequence was cancelled before finishing.
  SequenceCancelled { party_id: String, logged: usize },
}

/// Receives demo events.
pub trait DemoNotifier: Send + Sync {
  fn notify(&self, event: DemoEvent);
}

/// Discards all events.
#[derive(Debug, Clone, Default)]
pub struct NoopNotifier;

impl DemoNotifier for NoopNotifier {
  fn notify(&self, _event: DemoEvent) {}
}

/// Sends events to an unbounded channel.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
  sender: mpsc::UnboundedSender<DemoEvent>,
}

impl ChannelNotifier {
  pub fn new(sender: mpsc::UnboundedSender<DemoEvent>) -> Self {
    Self { sender }
  }
}

impl DemoNotifier for ChannelNotifier {
  fn notify(&self, event: DemoEvent) {
    // Receiver may have been dropped
    let _ = self.sender.send(event);
  }
}

/// Writes events to the `tracing` log.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

impl DemoNotifier for LogNotifier {
  fn notify(&self, event: DemoEvent) {
    match event {
      DemoEvent::SequenceStarted { party_id } => {
        info!(party_id = %party_id, "demo_sequence_started");
      }
      DemoEvent::StepLogged {
        index,
        text,
        success,
      } => {
        info!(index, success, "{text}");
      }
      DemoEvent::PhaseChanged { phase } => {
        info!(phase = ?phase, "demo_phase_changed");
      }
      DemoEvent::SequenceCompleted { party_id } => {
        info!(party_id = %party_id, "demo_sequence_completed");
      }
      DemoEvent::SequenceCancelled { party_id, logged } => {
        info!(party_id = %party_id, logged, "demo_sequence_cancelled");
      }
    }
  }
}
