//! `folio check`: make sure every metric on the site can be animated.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};
use folio_domain::content::Portfolio;
use folio_domain::error::ValidationError;

/// Outcome of checking a portfolio.
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Number of metrics inspected.
    pub metrics: usize,
    /// Every problem found, in page order.
    pub failures: Vec<ValidationError>,
}

impl CheckReport {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Check every metric, writing one line per metric to `out`.
///
/// Unlike [`Portfolio::validate`], this keeps going after a bad metric so
/// all of them are reported in one run.
///
/// # Errors
///
/// Returns an error only if writing to `out` fails.
pub fn check(portfolio: &Portfolio, out: &mut impl Write) -> std::io::Result<CheckReport> {
    let mut report = CheckReport::default();
    for item in portfolio.metrics() {
        report.metrics += 1;
        match item.metric.spec() {
            Ok(spec) => writeln!(
                out,
                "ok     {:<10} {} / {}: {}",
                item.section.as_str(),
                item.entry,
                item.metric.label,
                spec.final_text()
            )?,
            Err(source) => {
                writeln!(
                    out,
                    "error  {:<10} {} / {}: {source}",
                    item.section.as_str(),
                    item.entry,
                    item.metric.label
                )?;
                report.failures.push(ValidationError::Metric {
                    section: item.section.as_str(),
                    entry: item.entry.to_string(),
                    label: item.metric.label.clone(),
                    source,
                });
            }
        }
    }
    if report.is_ok() {
        if let Err(err) = portfolio.validate() {
            writeln!(out, "error  {err}")?;
            report.failures.push(err);
        }
    }
    Ok(report)
}

/// Load the content file at `path` and check it.
///
/// # Errors
///
/// Fails when the file cannot be read or decoded, or when any metric is
/// invalid.
pub fn run(path: &Path, out: &mut impl Write) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read content file {}", path.display()))?;
    let portfolio = Portfolio::decode(&text)
        .with_context(|| format!("failed to decode content file {}", path.display()))?;

    let report = check(&portfolio, out)?;
    tracing::info!(
        metrics = report.metrics,
        failures = report.failures.len(),
        path = %path.display(),
        "content checked"
    );
    if !report.is_ok() {
        bail!(
            "{} of {} metrics in {} are invalid",
            report.failures.len(),
            report.metrics,
            path.display()
        );
    }
    writeln!(out, "{} metrics ok", report.metrics)?;
    Ok(())
}
