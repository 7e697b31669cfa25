//! Flowryd Demo
//!
//! The simulated "connect to ledger" sequence: a short script of terminal
//! lines played on a timer, followed by a completion phase. Purely cosmetic.
//! Nothing here reads or writes matcher data.
//!
//! # Example
//!
//! ```ignore
//! use flowryd_demo::{DemoConfig, DemoSequencer, LEDGER_CONNECT_STEPS, LogNotifier};
//! use tokio_util::sync::CancellationToken;
//!
//! let sequencer = DemoSequencer::with_notifier(DemoConfig::default(), LogNotifier);
//! let outcome = sequencer
//!   .run("participant::1220", LEDGER_CONNECT_STEPS, CancellationToken::new())
//!   .await?;
//! ```

mod error;
mod events;
mod script;
mod sequencer;

pub use error::DemoError;
pub use events::{ChannelNotifier, DemoEvent, DemoNotifier, LogNotifier, NoopNotifier};
pub use script::{
  COMPLETE_DELAY_MS, DemoPhase, DemoStep, FINISH_DELAY_MS, LEDGER_CONNECT_STEPS, LogLine,
  START_DELAY_MS,
};
pub use sequencer::{DemoConfig, DemoOutcome, DemoSequencer};
