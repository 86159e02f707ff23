//! Structured diagnostics.
//!
//! Every failure in this crate is a translation-time failure: resolution
//! either completes deterministically or produces a [`Diagnostic`] that
//! identifies the offending call site. Diagnostics render to terminal
//! reports via `ariadne`.

use std::io;

use ariadne::{Config, Label as ReportLabel, Report, ReportKind, Source};

use crate::span::Span;

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A hard error. Resolution did not produce output.
    Error,
    /// A warning. Output was produced but deserves attention.
    Warning,
    /// Additional context attached to another diagnostic.
    Note,
    /// A suggested fix.
    Help,
}

/// A secondary label pointing at a related location.
#[derive(Debug, Clone)]
pub struct Label {
    /// Location the label points at.
    pub span: Span,
    /// The label message.
    pub message: String,
}

/// A diagnostic message with a primary location and optional labels.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity.
    pub kind: DiagnosticKind,
    /// Stable machine-readable code, e.g. `undefined-implementation`.
    pub code: Option<String>,
    /// Human-readable message.
    pub message: String,
    /// Primary location.
    pub span: Span,
    /// Secondary labels.
    pub labels: Vec<Label>,
}

impl Diagnostic {
    /// Creates an error diagnostic.
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self {
            kind: DiagnosticKind::Error,
            code: None,
            message: message.into(),
            span,
            labels: Vec::new(),
        }
    }

    /// Creates a warning diagnostic.
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self {
            kind: DiagnosticKind::Warning,
            code: None,
            message: message.into(),
            span,
            labels: Vec::new(),
        }
    }

    /// Attaches a machine-readable code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Attaches a secondary label.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label {
            span,
            message: message.into(),
        });
        self
    }

    /// Renders the diagnostic against the input it refers to.
    ///
    /// `source_name` identifies the input in the report header (the CLI
    /// passes `<arguments>`); `source` is the input text itself.
    pub fn render(&self, source_name: &str, source: &str) -> io::Result<String> {
        let kind = match self.kind {
            DiagnosticKind::Error => ReportKind::Error,
            DiagnosticKind::Warning => ReportKind::Warning,
            DiagnosticKind::Note | DiagnosticKind::Help => ReportKind::Advice,
        };

        // Clamp the primary span into the source so synthesized spans
        // still render.
        let span = clamp(self.span, source.len());

        let mut builder = Report::build(kind, source_name, span.start)
            .with_config(Config::default().with_color(false))
            .with_message(&self.message)
            .with_label(
                ReportLabel::new((source_name, span.range())).with_message(&self.message),
            );

        if let Some(code) = &self.code {
            builder = builder.with_code(code.clone());
        }

        for label in &self.labels {
            let span = clamp(label.span, source.len());
            builder = builder
                .with_label(ReportLabel::new((source_name, span.range())).with_message(&label.message));
        }

        let mut buffer = Vec::new();
        builder
            .finish()
            .write((source_name, Source::from(source)), &mut buffer)?;

        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

/// Clamps a span to the bounds of the source text.
fn clamp(span: Span, len: usize) -> Span {
    Span::new(span.start.min(len), span.end.min(len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contains_message_and_code() {
        let diag = Diagnostic::error("no 3-argument implementation of `LOG`", Span::new(0, 13))
            .with_code("undefined-implementation");

        let rendered = diag.render("<arguments>", r#""x", "y", "z""#).unwrap();
        assert!(rendered.contains("no 3-argument implementation of `LOG`"));
        assert!(rendered.contains("undefined-implementation"));
    }

    #[test]
    fn test_render_with_out_of_bounds_span() {
        let diag = Diagnostic::error("boom", Span::new(90, 120));
        let rendered = diag.render("<arguments>", "short").unwrap();
        assert!(rendered.contains("boom"));
    }

    #[test]
    fn test_labels_render() {
        let diag = Diagnostic::error("empty argument", Span::new(1, 2))
            .with_label(Span::new(0, 1), "previous argument ends here");
        let rendered = diag.render("<arguments>", "a,,b").unwrap();
        assert!(rendered.contains("previous argument ends here"));
    }
}
