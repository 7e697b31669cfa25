mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use flowryd_catalog::{Catalog, PrivateFlow, Workflow};
use flowryd_demo::{
  DemoConfig, DemoEvent, DemoNotifier, DemoOutcome, DemoPhase, DemoSequencer,
  LEDGER_CONNECT_STEPS, LogNotifier,
};
use flowryd_matcher::{
  DirectoryCategory, DirectoryQuery, Network, NetworkSummary, StageLayout, StageRequirements,
  find_matches, missing_roles, requirements, stage_layout, top_picks,
};
use flowryd_store::{FsKvStore, InMemoryKvStore, KvStore, Preferences};

use crate::config::Config;

/// Flowryd - discover participants and assemble networks for Canton workflows
#[derive(Parser)]
#[command(name = "flowryd")]
#[command(version, about, long_about = None)]
struct Cli {
  /// Path to the data directory (default: ~/.flowryd)
  #[arg(long, global = true, env = "FLOWRYD_DATA_DIR")]
  data_dir: Option<PathBuf>,

  /// Catalog JSON file to use instead of the built-in one
  #[arg(long, global = true)]
  catalog: Option<PathBuf>,

  /// Print results as JSON
  #[arg(long, global = true)]
  json: bool,

  /// Keep preferences in memory for this run only
  #[arg(long, global = true)]
  ephemeral: bool,

  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// List workflow templates
  Workflows,

  /// Show a workflow's roles and stages
  Workflow { id: String },

  /// Search the participant directory
  Participants {
    /// Case-insensitive match on name or role
    #[arg(long, default_value = "")]
    search: String,

    /// all, infrastructure, custody, liquidity, financing or validators
    #[arg(long, default_value = "all")]
    category: DirectoryCategory,

    /// Participant id to leave out (repeatable)
    #[arg(long)]
    exclude: Vec<String>,

    /// Show only the first N critical participants
    #[arg(long)]
    top: Option<usize>,
  },

  /// Find catalog participants for a workflow's roles
  Match {
    workflow_id: String,

    /// Role to match (repeatable). Defaults to every workflow role.
    #[arg(long)]
    role: Vec<String>,
  },

  /// Assemble a network and measure it
  Network {
    /// Workflow to measure readiness against
    #[arg(long)]
    workflow: Option<String>,

    /// Participant id to add (repeatable)
    #[arg(long)]
    add: Vec<String>,

    /// Start without "Your Node"
    #[arg(long)]
    no_user_node: bool,
  },

  /// List private flows
  Flows,

  /// Show a private flow
  Flow {
    id: String,

    /// Role id to mark as filled
    #[arg(long, requires = "by")]
    fill: Option<String>,

    /// Name of the participant filling the role
    #[arg(long, requires = "fill")]
    by: Option<String>,
  },

  /// Verify a party id with the ledger and remember it
  Connect {
    party_id: String,

    /// Play the sequence faster
    #[arg(long)]
    fast: bool,
  },

  /// Forget the connected party id
  Disconnect,

  /// Show the connected party and onboarding state
  Status,

  /// Show the getting-started guide
  Onboarding {
    /// Mark the guide as seen without showing it
    #[arg(long, conflicts_with = "reset")]
    mark: bool,

    /// Show the guide again next time
    #[arg(long)]
    reset: bool,
  },
}

/// Commands that read or write preferences.
enum SessionCommand {
  Connect { party_id: String, fast: bool },
  Disconnect,
  Status,
  Onboarding { mark: bool, reset: bool },
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  init_tracing()?;

  let config = Config::resolve(cli.data_dir, cli.catalog, cli.json, cli.ephemeral)?;

  match cli.command {
    Some(Commands::Workflows) => list_workflows(&config)?,
    Some(Commands::Workflow { id }) => show_workflow(&config, &id)?,
    Some(Commands::Participants {
      search,
      category,
      exclude,
      top,
    }) => list_participants(&config, &search, category, &exclude, top)?,
    Some(Commands::Match { workflow_id, role }) => match_roles(&config, &workflow_id, role)?,
    Some(Commands::Network {
      workflow,
      add,
      no_user_node,
    }) => show_network(&config, workflow.as_deref(), &add, no_user_node)?,
    Some(Commands::Flows) => list_flows(&config)?,
    Some(Commands::Flow { id, fill, by }) => show_flow(&config, &id, fill.zip(by))?,
    Some(Commands::Connect { party_id, fast }) => {
      run_session(&config, SessionCommand::Connect { party_id, fast })?
    }
    Some(Commands::Disconnect) => run_session(&config, SessionCommand::Disconnect)?,
    Some(Commands::Status) => run_session(&config, SessionCommand::Status)?,
    Some(Commands::Onboarding { mark, reset }) => {
      run_session(&config, SessionCommand::Onboarding { mark, reset })?
    }
    None => {
      println!("flowryd - use --help to see available commands");
    }
  }

  Ok(())
}

fn init_tracing() -> Result<()> {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(EnvFilter::from_default_env().add_directive("flowryd=info".parse()?))
    .init();
  Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
  println!("{}", serde_json::to_string_pretty(value)?);
  Ok(())
}

fn list_workflows(config: &Config) -> Result<()> {
  let catalog = config.load_catalog()?;
  if config.is_json() {
    return print_json(&catalog.workflows);
  }

  for workflow in &catalog.workflows {
    println!(
      "{:<8} {} ({}) - {} roles",
      workflow.id,
      workflow.name,
      workflow.category,
      workflow.roles.len()
    );
  }
  Ok(())
}

fn show_workflow(config: &Config, id: &str) -> Result<()> {
  let catalog = config.load_catalog()?;
  let workflow = catalog.workflow(id)?;

  if config.is_json() {
    let mut detail = workflow.clone();
    detail.stages = workflow.stages().into_owned();
    return print_json(&detail);
  }

  println!("{} - {}", workflow.id, workflow.name);
  println!("Category: {}", workflow.category);
  if !workflow.description.is_empty() {
    println!("{}", workflow.description);
  }
  println!("Roles: {}", workflow.roles.join(", "));
  for stage in workflow.stages().iter() {
    println!("  [{}] {}", stage.name, stage.roles.join(", "));
  }
  Ok(())
}

fn list_participants(
  config: &Config,
  search: &str,
  category: DirectoryCategory,
  exclude: &[String],
  top: Option<usize>,
) -> Result<()> {
  let catalog = config.load_catalog()?;
  let exclude_ids: Vec<&str> = exclude.iter().map(String::as_str).collect();

  let participants = match top {
    Some(limit) => top_picks(&catalog.participants, &exclude_ids, limit),
    None => DirectoryQuery {
      search,
      category,
      exclude_ids: &exclude_ids,
    }
    .run(&catalog.participants),
  };

  if config.is_json() {
    return print_json(&participants);
  }

  for participant in &participants {
    println!(
      "{:<24} {:<32} {:<9} {}",
      participant.id,
      participant.name,
      participant.criticality.as_str(),
      participant.role_label
    );
  }
  eprintln!("{} participants", participants.len());
  Ok(())
}

fn match_roles(config: &Config, workflow_id: &str, roles: Vec<String>) -> Result<()> {
  let catalog = config.load_catalog()?;
  let workflow = catalog.workflow(workflow_id)?;

  let roles = if roles.is_empty() {
    workflow.roles.clone()
  } else {
    roles
  };
  for role in roles.iter().filter(|r| !workflow.requires(r)) {
    eprintln!("Warning: {} is not a role of {}", role, workflow.id);
  }

  let matches = find_matches(&catalog.participants, Some(workflow), &roles);

  if config.is_json() {
    return print_json(&matches);
  }

  for m in &matches {
    println!(
      "{:<24} {:<32} {}",
      m.participant.id,
      m.participant.name,
      m.matched_roles.join(", ")
    );
  }
  eprintln!("{} matches", matches.len());
  Ok(())
}

#[derive(Serialize)]
struct NetworkReport<'a> {
  participants: Vec<&'a str>,
  summary: NetworkSummary,
  #[serde(skip_serializing_if = "Option::is_none")]
  workflow: Option<&'a str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  requirements: Option<Vec<StageRequirements<'a>>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  layout: Option<StageLayout<'a>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  missing_roles: Option<Vec<&'a str>>,
}

fn build_network(catalog: &Catalog, add: &[String], no_user_node: bool) -> Result<Network> {
  let mut network = if no_user_node {
    Network::new()
  } else {
    Network::with_user_node()
  };

  for id in add {
    let participant = catalog.participant(id)?;
    if !network.add(participant.clone()) {
      eprintln!("Skipped {}: already in network", id);
    }
  }
  Ok(network)
}

fn show_network(
  config: &Config,
  workflow_id: Option<&str>,
  add: &[String],
  no_user_node: bool,
) -> Result<()> {
  let catalog = config.load_catalog()?;
  let workflow: Option<&Workflow> = workflow_id.map(|id| catalog.workflow(id)).transpose()?;
  let network = build_network(&catalog, add, no_user_node)?;

  let report = NetworkReport {
    participants: network.ids(),
    summary: NetworkSummary::compute(&network, workflow),
    workflow: workflow.map(|w| w.id.as_str()),
    requirements: workflow.map(|w| requirements(w, &network)),
    layout: workflow.map(|w| stage_layout(w, &network)),
    missing_roles: workflow.map(|w| missing_roles(w, &network)),
  };

  if config.is_json() {
    return print_json(&report);
  }

  let summary = &report.summary;
  println!("Participants:     {}", report.participants.join(", "));
  println!("Total holdings:   {}", summary.total_holdings_display);
  println!("Validator nodes:  {}", summary.total_validators);
  println!("Centrality:       {}", summary.centrality);

  let Some(workflow) = workflow else {
    return Ok(());
  };

  println!(
    "Readiness:        {}% ({}/{} roles) for {}",
    summary.readiness, summary.fulfilled_roles, summary.required_roles, workflow.name
  );

  for stage in report.requirements.iter().flatten() {
    let mark = if stage.is_complete() { "done" } else { "open" };
    println!("\n[{}] {}", mark, stage.stage);
    for role in &stage.roles {
      if role.fulfilled {
        println!("  + {:<20} {}", role.role, role.fulfilled_by.join(", "));
      } else {
        println!("  - {:<20} needed", role.role);
      }
    }
  }

  if let Some(layout) = &report.layout {
    println!("\nLayout:");
    for column in &layout.columns {
      let names: Vec<&str> = column.participants.iter().map(|p| p.name.as_str()).collect();
      println!("  {:<24} {}", column.stage, names.join(", "));
    }
    if !layout.leftovers.is_empty() {
      let names: Vec<&str> = layout.leftovers.iter().map(|p| p.name.as_str()).collect();
      println!("  {:<24} {}", "(no role)", names.join(", "));
    }
  }

  if let Some(missing) = report.missing_roles.as_ref().filter(|m| !m.is_empty()) {
    println!("\nMissing roles: {}", missing.join(", "));
  }
  Ok(())
}

fn list_flows(config: &Config) -> Result<()> {
  let catalog = config.load_catalog()?;
  if config.is_json() {
    return print_json(&catalog.private_flows);
  }

  for flow in &catalog.private_flows {
    println!(
      "{:<12} {:<36} {:?} {}/{} roles{}",
      flow.id,
      flow.name,
      flow.status,
      flow.filled_count(),
      flow.roles.len(),
      if flow.is_ready() { ", ready" } else { "" }
    );
  }
  Ok(())
}

fn show_flow(config: &Config, id: &str, fill: Option<(String, String)>) -> Result<()> {
  let catalog = config.load_catalog()?;
  let mut flow: PrivateFlow = catalog.private_flow(id)?.clone();

  if let Some((role_id, by)) = fill {
    flow
      .fill_role(&role_id, by)
      .with_context(|| format!("failed to fill role in flow {}", flow.id))?;
    eprintln!("Filled {} (not saved)", role_id);
  }

  if config.is_json() {
    return print_json(&flow);
  }

  println!("{} - {}", flow.id, flow.name);
  println!("{}", flow.description);
  println!("Status: {:?}, created {}", flow.status, flow.created_at);
  for role in &flow.roles {
    let filled_by = role.filled_by.as_deref().unwrap_or("");
    println!("  {:<8} {:<28} {:?} {}", role.id, role.name, role.status, filled_by);
  }
  if flow.is_ready() {
    println!("Ready to launch");
  } else {
    println!("{} gaps remaining", flow.gap_count());
  }
  Ok(())
}

fn run_session(config: &Config, command: SessionCommand) -> Result<()> {
  let rt = tokio::runtime::Runtime::new()?;
  rt.block_on(async {
    if config.ephemeral {
      let prefs = Preferences::new(InMemoryKvStore::new());
      run_session_async(prefs, command, config).await
    } else {
      let prefs = Preferences::new(FsKvStore::in_dir(&config.data_dir));
      run_session_async(prefs, command, config).await
    }
  })
}

async fn run_session_async<S: KvStore>(
  mut prefs: Preferences<S>,
  command: SessionCommand,
  config: &Config,
) -> Result<()> {
  match command {
    SessionCommand::Connect { party_id, fast } => {
      let outcome = connect(&party_id, fast, config).await?;
      if outcome.is_completed() {
        prefs
          .connect(party_id.trim())
          .await
          .context("failed to save party id")?;
      }

      if config.is_json() {
        return print_json(&serde_json::json!({
          "party_id": party_id.trim(),
          "outcome": outcome,
        }));
      }
      if outcome.is_completed() {
        println!("Connected as {}", party_id.trim());
      } else {
        println!("Connection cancelled");
      }
    }
    SessionCommand::Disconnect => {
      prefs
        .disconnect()
        .await
        .context("failed to clear party id")?;
      if !config.is_json() {
        println!("Disconnected");
      }
    }
    SessionCommand::Status => {
      let party_id = prefs.party_id().await.context("failed to read party id")?;
      let onboarding_seen = prefs
        .has_seen_onboarding()
        .await
        .context("failed to read onboarding state")?;

      if config.is_json() {
        return print_json(&serde_json::json!({
          "party_id": party_id,
          "onboarding_seen": onboarding_seen,
        }));
      }
      match party_id {
        Some(id) => println!("Connected as {}", id),
        None => println!("Not connected"),
      }
      println!(
        "Onboarding: {}",
        if onboarding_seen { "seen" } else { "not seen" }
      );
    }
    SessionCommand::Onboarding { mark, reset } => {
      if reset {
        prefs
          .reset_onboarding()
          .await
          .context("failed to reset onboarding")?;
      } else {
        if !mark && !config.is_json() {
          print_onboarding_guide();
        }
        prefs
          .mark_onboarding_seen()
          .await
          .context("failed to save onboarding state")?;
      }

      if config.is_json() {
        let seen = prefs.has_seen_onboarding().await?;
        return print_json(&serde_json::json!({ "onboarding_seen": seen }));
      }
    }
  }
  Ok(())
}

/// Play the ledger-connect sequence. Ctrl-C cancels it.
async fn connect(party_id: &str, fast: bool, config: &Config) -> Result<DemoOutcome> {
  let demo_config = if fast {
    DemoConfig::fast()
  } else {
    DemoConfig::default()
  };

  let cancel = CancellationToken::new();
  let on_interrupt = cancel.clone();
  tokio::spawn(async move {
    if tokio::signal::ctrl_c().await.is_ok() {
      on_interrupt.cancel();
    }
  });

  let outcome = if config.is_json() {
    DemoSequencer::with_notifier(demo_config, LogNotifier)
      .run(party_id, LEDGER_CONNECT_STEPS, cancel)
      .await
  } else {
    DemoSequencer::with_notifier(demo_config, TerminalNotifier)
      .run(party_id, LEDGER_CONNECT_STEPS, cancel)
      .await
  };

  outcome.context("failed to connect")
}

/// Prints the sequence as terminal lines on stderr.
struct TerminalNotifier;

impl DemoNotifier for TerminalNotifier {
  fn notify(&self, event: DemoEvent) {
    match event {
      DemoEvent::SequenceStarted { party_id } => eprintln!("$ connect {}", party_id),
      DemoEvent::StepLogged {
        text,
        success: true,
        ..
      } => eprintln!("  ✓ {}", text),
      DemoEvent::StepLogged { text, .. } => eprintln!("  > {}", text),
      DemoEvent::PhaseChanged {
        phase: DemoPhase::Complete,
      } => eprintln!("Identity verified"),
      _ => {}
    }
  }
}

fn print_onboarding_guide() {
  println!("Welcome to Flowryd");
  println!();
  println!("  1. Pick a workflow:        flowryd workflows");
  println!("  2. Find who can fill it:   flowryd match <workflow-id>");
  println!("  3. Assemble your network:  flowryd network --workflow <id> --add <participant-id>");
  println!();
  println!("Readiness reaches 100% once every role is covered.");
}
