use std::borrow::Cow;
use std::path::PathBuf;

use anyhow::{Context, Result};
use flowryd_catalog::Catalog;
use tracing::debug;

const DEFAULT_DIR_NAME: &str = ".flowryd";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
  Text,
  Json,
}

/// Settings resolved from flags, then environment, then defaults.
#[derive(Debug, Clone)]
pub struct Config {
  pub data_dir: PathBuf,
  pub catalog_path: Option<PathBuf>,
  pub output: OutputFormat,
  /// Keep preferences in memory only.
  pub ephemeral: bool,
}

impl Config {
  pub fn resolve(
    data_dir: Option<PathBuf>,
    catalog_path: Option<PathBuf>,
    json: bool,
    ephemeral: bool,
  ) -> Result<Self> {
    let data_dir = match data_dir {
      Some(dir) => dir,
      None => dirs::home_dir()
        .context("could not determine home directory")?
        .join(DEFAULT_DIR_NAME),
    };

    Ok(Self {
      data_dir,
      catalog_path,
      output: if json {
        OutputFormat::Json
      } else {
        OutputFormat::Text
      },
      ephemeral,
    })
  }

  pub fn is_json(&self) -> bool {
    self.output == OutputFormat::Json
  }

  /// The catalog file given with `--catalog`, or the built-in one.
  pub fn load_catalog(&self) -> Result<Cow<'static, Catalog>> {
    match &self.catalog_path {
      Some(path) => {
        let catalog = Catalog::load(path)
          .with_context(|| format!("failed to load catalog: {}", path.display()))?;
        debug!(
          path = %path.display(),
          participants = catalog.participants.len(),
          workflows = catalog.workflows.len(),
          "catalog loaded"
        );
        Ok(Cow::Owned(catalog))
      }
      None => Ok(Cow::Borrowed(Catalog::builtin())),
    }
  }
}
