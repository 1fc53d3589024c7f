//! Rendering of check results as colored status lines

use std::fmt::Display;

use owo_colors::OwoColorize;
use semver::Version;

use crate::check::{CheckReport, LegacyScan};
use crate::version::checker::UpgradeAssessment;
use crate::version::types::ComponentInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

/// One printed line of the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub severity: Severity,
    pub text: String,
}

impl ReportLine {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            text: text.into(),
        }
    }

    fn paint(&self, color: bool) -> String {
        if !color {
            return self.text.clone();
        }
        match self.severity {
            Severity::Success => self.text.green().to_string(),
            Severity::Warning => self.text.yellow().to_string(),
            Severity::Error => self.text.red().to_string(),
        }
    }
}

/// Render a successful check into report lines
pub fn render_report(report: &CheckReport, cutoff: &Version) -> Vec<ReportLine> {
    let mut lines = vec![assessment_line(report)];

    match &report.legacy_scan {
        LegacyScan::Skipped => {}
        LegacyScan::Completed(flagged) if flagged.is_empty() => {
            lines.push(ReportLine::success(
                "No components depend on Handlebars 3, they are ready for the upgrade",
            ));
        }
        LegacyScan::Completed(flagged) => {
            let bridge = format!("{}.{}.X", cutoff.major, cutoff.minor);
            lines.push(ReportLine::warning(format!(
                "You need to upgrade OC to {bridge}, which supports both Handlebars 3 and 4 so that you can gracefully upgrade your components."
            )));
            lines.push(ReportLine::warning(
                "Then, the following components will need to be re-published using Handlebars 4. After that, you will be able to re-run this tool for upgrading to a more recent version.",
            ));
            lines.extend(
                flagged
                    .iter()
                    .enumerate()
                    .map(|(i, component)| ReportLine::warning(component_line(i + 1, component))),
            );
        }
    }

    lines
}

/// Render a fatal error, including its cause chain
pub fn render_error(err: impl Display) -> ReportLine {
    ReportLine::error(err.to_string())
}

/// Print lines to stdout
pub fn print_lines(lines: &[ReportLine], color: bool) {
    for line in lines {
        println!("{}", line.paint(color));
    }
}

fn assessment_line(report: &CheckReport) -> ReportLine {
    match report.assessment {
        UpgradeAssessment::AlreadyCurrent => {
            ReportLine::success("Registry is already using latest version")
        }
        UpgradeAssessment::AheadOfLatest => ReportLine::warning(format!(
            "Registry is running {}, which is ahead of the latest published version {}",
            report.current, report.latest
        )),
        UpgradeAssessment::SafeUpgrade => ReportLine::success(format!(
            "You can safely upgrade from {} to {}",
            report.current, report.latest
        )),
        UpgradeAssessment::RiskyUpgrade => ReportLine::warning(format!(
            "Upgrading from {} to {} may introduce breaking changes, review the changelog before upgrading",
            report.current, report.latest
        )),
    }
}

fn component_line(index: usize, component: &ComponentInfo) -> String {
    let author = component
        .author
        .as_ref()
        .map(|author| author.render())
        .unwrap_or_else(|| "unknown".to_string());
    let repository = component
        .repository
        .as_ref()
        .map(|repository| repository.render())
        .unwrap_or_default();

    format!(
        "{}) {}@{} - Maintained by {} {}",
        index, component.name, component.version, author, repository
    )
}
