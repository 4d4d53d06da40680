//! Conversion report types for tracking dropped inputs and policy decisions.
//!
//! A batch run never fails because of one bad input, so the report is the
//! only place where dropped files and lenient decodes become visible.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Which way a batch run converts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// QR images into one schema document.
    #[default]
    Serialize,
    /// Schema documents into QR images.
    Deserialize,
}

impl Direction {
    /// Human-readable name for the direction.
    pub fn name(&self) -> &'static str {
        match self {
            Direction::Serialize => "serialize",
            Direction::Deserialize => "deserialize",
        }
    }
}

/// A report generated during one batch run.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ConversionReport {
    pub direction: Direction,
    /// Where the output went (document file or image directory).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<PathBuf>,
    pub counts: ConversionCounts,
    pub issues: Vec<ConversionIssue>,
}

impl ConversionReport {
    /// Create a new empty report for a batch direction.
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            ..Default::default()
        }
    }

    /// Add an issue to the report.
    pub fn add(&mut self, issue: ConversionIssue) {
        self.issues.push(issue);
    }

    /// Count of warning-level issues (dropped inputs).
    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == ConversionSeverity::Warning)
            .count()
    }

    /// Count of info-level issues.
    pub fn info_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == ConversionSeverity::Info)
            .count()
    }

    /// Returns true if any input was dropped.
    pub fn has_dropped_inputs(&self) -> bool {
        self.warning_count() > 0
    }

    /// Paths of inputs that were dropped, in input order.
    pub fn dropped_paths(&self) -> impl Iterator<Item = &Path> {
        self.issues
            .iter()
            .filter(|i| i.severity == ConversionSeverity::Warning)
            .filter_map(|i| i.path.as_deref())
    }
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} input(s), {} entr{}",
            self.direction.name(),
            self.counts.inputs,
            self.counts.entries,
            if self.counts.entries == 1 { "y" } else { "ies" }
        )?;
        if self.direction == Direction::Deserialize {
            write!(f, ", {} image(s) written", self.counts.written)?;
        }
        writeln!(f)?;

        if let Some(destination) = &self.destination {
            writeln!(f, "  output: {}", destination.display())?;
        }

        let warnings = self.warning_count();
        if warnings > 0 {
            writeln!(f)?;
            writeln!(f, "Dropped ({}):", warnings)?;
            for issue in self
                .issues
                .iter()
                .filter(|i| i.severity == ConversionSeverity::Warning)
            {
                writeln!(f, "  - {}", issue.message)?;
            }
        }

        let infos = self.info_count();
        if infos > 0 {
            writeln!(f)?;
            writeln!(f, "Notes ({}):", infos)?;
            for issue in self
                .issues
                .iter()
                .filter(|i| i.severity == ConversionSeverity::Info)
            {
                writeln!(f, "  - {}", issue.message)?;
            }
        }

        Ok(())
    }
}

/// Counts for one batch run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ConversionCounts {
    /// Input files named on the command line.
    pub inputs: usize,
    /// Entries that made it through reading.
    pub entries: usize,
    /// Image files written (deserialize only).
    pub written: usize,
}

/// A single issue recorded during a batch run.
#[derive(Clone, Debug, Serialize)]
pub struct ConversionIssue {
    pub severity: ConversionSeverity,
    pub code: ConversionIssueCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl ConversionIssue {
    /// Create a warning-level issue (an input was dropped).
    pub fn warning(code: ConversionIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: ConversionSeverity::Warning,
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Create an info-level issue (lenient handling, nothing lost).
    pub fn info(code: ConversionIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: ConversionSeverity::Info,
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Attach the input path the issue refers to.
    pub fn at(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// Severity level for conversion issues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionSeverity {
    /// An input was dropped and contributed nothing to the output.
    Warning,
    /// A policy note; the input was still converted.
    Info,
}

/// Stable issue codes for programmatic consumption.
///
/// These codes are part of the JSON report and should remain stable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionIssueCode {
    // Dropped inputs
    /// The input file could not be read.
    UnreadableInput,
    /// The input file is not a decodable image.
    InvalidImage,
    /// The decoder rejected the raster buffer.
    InvalidRaster,
    /// The input document is not a valid schema document.
    MalformedDocument,

    // Policy notes
    /// No QR symbol was found; the entry carries an empty payload.
    EmptyPayload,
    /// An entry reuses an earlier entry's name and overwrites its image.
    NameCollision,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_has_no_drops() {
        let report = ConversionReport::new(Direction::Serialize);
        assert!(!report.has_dropped_inputs());
        assert_eq!(report.warning_count(), 0);
        assert_eq!(report.info_count(), 0);
    }

    #[test]
    fn warning_marks_dropped_input() {
        let mut report = ConversionReport::new(Direction::Serialize);
        report.add(
            ConversionIssue::warning(ConversionIssueCode::InvalidImage, "b.png is not an image")
                .at("b.png"),
        );
        assert!(report.has_dropped_inputs());
        assert_eq!(
            report.dropped_paths().collect::<Vec<_>>(),
            [Path::new("b.png")]
        );
    }

    #[test]
    fn info_does_not_mark_dropped_input() {
        let mut report = ConversionReport::new(Direction::Deserialize);
        report.add(ConversionIssue::info(
            ConversionIssueCode::NameCollision,
            "a.png overwrites an earlier entry",
        ));
        assert!(!report.has_dropped_inputs());
        assert_eq!(report.info_count(), 1);
    }

    #[test]
    fn display_lists_dropped_and_notes() {
        let mut report = ConversionReport::new(Direction::Deserialize);
        report.counts = ConversionCounts {
            inputs: 2,
            entries: 1,
            written: 1,
        };
        report.add(ConversionIssue::warning(
            ConversionIssueCode::MalformedDocument,
            "bad.json is malformed",
        ));

        let text = report.to_string();
        assert!(text.starts_with("deserialize: 2 input(s), 1 entry, 1 image(s) written\n"));
        assert!(text.contains("Dropped (1):"));
        assert!(text.contains("  - bad.json is malformed"));
        assert!(!text.contains("Notes"));
    }

    #[test]
    fn report_serializes_to_json() {
        let mut report = ConversionReport::new(Direction::Serialize);
        report.counts.inputs = 3;
        report.add(
            ConversionIssue::info(ConversionIssueCode::EmptyPayload, "no QR code in c.png")
                .at("c.png"),
        );

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"direction\":\"serialize\""));
        assert!(json.contains("\"severity\":\"info\""));
        assert!(json.contains("\"code\":\"empty_payload\""));
        assert!(json.contains("\"path\":\"c.png\""));
    }
}
