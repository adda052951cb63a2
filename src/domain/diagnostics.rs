#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub file: String,
    pub message: String,
    pub severity: Severity,
}

/// Findings of a structural check run, kept in discovery order per severity.
#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn push_error(&mut self, file: impl Into<String>, message: impl Into<String>) {
        let diagnostic =
            Diagnostic { file: file.into(), message: message.into(), severity: Severity::Error };
        self.errors.push(diagnostic);
    }

    pub fn push_warning(&mut self, file: impl Into<String>, message: impl Into<String>) {
        let diagnostic =
            Diagnostic { file: file.into(), message: message.into(), severity: Severity::Warning };
        self.warnings.push(diagnostic);
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    /// Errors first, then warnings.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.errors.iter().chain(self.warnings.iter())
    }

    pub fn emit(&self) {
        for diagnostic in &self.errors {
            eprintln!("[ERROR] {}: {}", diagnostic.file, diagnostic.message);
        }
        for diagnostic in &self.warnings {
            eprintln!("[WARN] {}: {}", diagnostic.file, diagnostic.message);
        }
    }
}
