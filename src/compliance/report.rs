//! Compliance report types for structured reporting.
//!
//! This module provides structured compliance results that can be
//! displayed to users, serialized to JSON, or processed programmatically.

use serde::Serialize;
use std::fmt;

use super::HeadSizeMeasurement;

/// The result of checking a layout against its measurement standard.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ComplianceReport {
    /// Head size measured on each placement, in placement order.
    pub head_sizes: Vec<HeadSizeMeasurement>,

    /// All issues found.
    pub issues: Vec<ComplianceIssue>,
}

impl ComplianceReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an issue to the report.
    pub fn add(&mut self, issue: ComplianceIssue) {
        self.issues.push(issue);
    }

    /// Returns the number of errors in the report.
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count()
    }

    /// Returns the number of warnings in the report.
    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.error_count() == 0
    }

    /// Returns true if there are no issues at all.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

impl fmt::Display for ComplianceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, head) in self.head_sizes.iter().enumerate() {
            writeln!(
                f,
                "  placement {}: head-to-chin {:.1} mm ({})",
                index,
                head.size_mm,
                head.class.label()
            )?;
        }
        if !self.head_sizes.is_empty() {
            writeln!(f)?;
        }

        if self.issues.is_empty() {
            return writeln!(f, "Compliance check passed: no issues found");
        }

        writeln!(
            f,
            "Compliance check completed with {} error(s) and {} warning(s):",
            self.error_count(),
            self.warning_count()
        )?;
        writeln!(f)?;

        for issue in &self.issues {
            writeln!(f, "  {}", issue)?;
        }

        Ok(())
    }
}

/// A single compliance issue (error or warning).
#[derive(Clone, Debug, Serialize)]
pub struct ComplianceIssue {
    /// The severity of the issue.
    pub severity: Severity,

    /// A stable code for the issue type.
    pub code: IssueCode,

    /// A human-readable description of the issue.
    pub message: String,

    /// Where the issue occurred.
    pub context: IssueContext,
}

impl ComplianceIssue {
    /// Creates a new compliance issue.
    pub fn new(
        severity: Severity,
        code: IssueCode,
        message: impl Into<String>,
        context: IssueContext,
    ) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            context,
        }
    }

    /// Creates a new error.
    pub fn error(code: IssueCode, message: impl Into<String>, context: IssueContext) -> Self {
        Self::new(Severity::Error, code, message, context)
    }

    /// Creates a new warning.
    pub fn warning(code: IssueCode, message: impl Into<String>, context: IssueContext) -> Self {
        Self::new(Severity::Warning, code, message, context)
    }
}

impl fmt::Display for ComplianceIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN ",
        };
        write!(
            f,
            "[{}] {:?} in {}: {}",
            severity, self.code, self.context, self.message
        )
    }
}

/// The severity of a compliance issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Printing can go ahead, but the result deserves a second look.
    Warning,
    /// The printed photo would not meet the standard.
    Error,
}

/// A stable code identifying the type of compliance issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum IssueCode {
    /// The source image size differs from the size recorded with the landmarks.
    DimensionDrift,
    /// The head size is just outside the ideal range.
    HeadSizeBorderline,
    /// The head size is outside the acceptable range.
    HeadSizeNonCompliant,
    /// The canvas is too small to hold a single portrait.
    NoPlacements,
}

/// Where a compliance issue occurred.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum IssueContext {
    /// The input document or the layout as a whole.
    Document,
    /// One placement on the canvas.
    Placement { index: usize },
}

impl fmt::Display for IssueContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueContext::Document => write!(f, "document"),
            IssueContext::Placement { index } => write!(f, "placement {}", index),
        }
    }
}
