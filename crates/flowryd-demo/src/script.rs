use serde::{Deserialize, Serialize};

/// One scripted terminal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DemoStep {
  pub text: &'static str,
  /// Cumulative offset from the start of the script, in milliseconds.
  pub at_ms: u64,
  /// Rendered as a success line rather than progress.
  pub success: bool,
}

impl DemoStep {
  pub const fn progress(text: &'static str, at_ms: u64) -> Self {
    Self {
      text,
      at_ms,
      success: false,
    }
  }

  pub const fn success(text: &'static str, at_ms: u64) -> Self {
    Self {
      text,
      at_ms,
      success: true,
    }
  }
}

/// The ledger-connect script shown while a party id is being "verified".
pub const LEDGER_CONNECT_STEPS: &[DemoStep] = &[
  DemoStep::progress("Connecting to Ledger API...", 800),
  DemoStep::progress("Authenticating Canton Party ID...", 1500),
  DemoStep::progress("Querying ACS (Active Contract Set)...", 2400),
  DemoStep::progress("Retrieving topology transactions...", 3200),
  DemoStep::success("3 Holdings found. Validator status: Active.", 4000),
];

/// Delay before the first line.
pub const START_DELAY_MS: u64 = 500;
/// Delay between the last line and the `Complete` phase.
pub const COMPLETE_DELAY_MS: u64 = 1000;
/// Delay between the `Complete` phase and the end of the sequence.
pub const FINISH_DELAY_MS: u64 = 800;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemoPhase {
  #[default]
  Idle,
  Connecting,
  Complete,
}

/// A line that has been printed during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogLine {
  pub text: String,
  pub success: bool,
}

impl From<&DemoStep> for LogLine {
  fn from(step: &DemoStep) -> Self {
    Self {
      text: step.text.to_string(),
      success: step.success,
    }
  }
}

/// Wait before each step: the start delay for the first, then the gap
/// between consecutive offsets. Offsets that go backwards wait zero.
pub(crate) fn step_delays(steps: &[DemoStep]) -> Vec<u64> {
  let mut previous = None;
  steps
    .iter()
    .map(|step| {
      let delay = match previous {
        None => START_DELAY_MS,
        Some(prev) => step.at_ms.saturating_sub(prev),
      };
      previous = Some(step.at_ms);
      delay
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_ledger_connect_script() {
    assert_eq!(LEDGER_CONNECT_STEPS.len(), 5);
    assert!(
      LEDGER_CONNECT_STEPS
        .windows(2)
        .all(|w| w[0].at_ms < w[1].at_ms)
    );
    let successes: Vec<_> = LEDGER_CONNECT_STEPS.iter().filter(|s| s.success).collect();
    assert_eq!(successes.len(), 1);
    assert_eq!(successes[0].at_ms, 4000);
  }

  #[test]
  fn test_step_delays() {
    assert_eq!(
      step_delays(LEDGER_CONNECT_STEPS),
      vec![500, 700, 900, 800, 800]
    );
    assert!(step_delays(&[]).is_empty());
  }

  #[test]
  fn test_step_delays_never_negative() {
    let steps = [DemoStep::progress("b", 900), DemoStep::progress("a", 100)];
    assert_eq!(step_delays(&steps), vec![500, 0]);
  }
}
