use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use pcstat::probe::{self, maps};
use pcstat::{PcStatusList, render};

use crate::settings::ResolvedConfig;

/// Outcome of one report run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct ReportSummary {
    pub(crate) reported: usize,
    pub(crate) skipped: Vec<PathBuf>,
}

/// Coordinates probing the requested files and rendering the report.
pub(crate) struct ReportWorkflow {
    targets: Vec<PathBuf>,
    config: ResolvedConfig,
}

impl ReportWorkflow {
    /// Collect the files named on the command line plus those mapped by `pid`.
    pub(crate) fn from_config(
        files: Vec<PathBuf>,
        pid: Option<u32>,
        config: ResolvedConfig,
    ) -> Result<Self> {
        let mut targets = files;
        if let Some(pid) = pid {
            let mapped = maps::mapped_files(pid)
                .with_context(|| format!("failed to read memory maps of process {pid}"))?;
            tracing::info!(pid, files = mapped.len(), "collected mapped files");
            targets.extend(mapped);
        }
        ensure!(!targets.is_empty(), "no files to inspect");
        Ok(Self { targets, config })
    }

    #[cfg(test)]
    pub(crate) fn new(targets: Vec<PathBuf>, config: ResolvedConfig) -> Self {
        Self { targets, config }
    }

    /// Probe every target in order, then render once into `out`.
    ///
    /// Files that cannot be probed are logged and left out of the report.
    pub(crate) fn run<W: Write>(self, out: &mut W) -> Result<ReportSummary> {
        let mut summary = ReportSummary::default();
        let mut stats = PcStatusList::new();

        for path in self.targets {
            match probe::probe_file(&path) {
                Ok(pcs) => stats.push(pcs),
                Err(err) => {
                    tracing::warn!(
                        "skipping {}: {:#}",
                        path.display(),
                        anyhow::Error::new(err)
                    );
                    summary.skipped.push(path);
                }
            }
        }
        summary.reported = stats.len();

        if self.config.basename {
            stats.use_basenames();
        }
        if self.config.sort {
            stats.sort_by_cached();
        }

        let options = self.config.render_options();
        render(out, &stats, self.config.format, &options)
            .with_context(|| format!("failed to render {} output", self.config.format))?;
        out.flush().context("failed to flush output")?;

        Ok(summary)
    }
}
