//! Core types for conversion results.

use std::fmt;

/// A non-fatal problem found while emitting LaTeX.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A math widget had neither a TeX annotation nor a code fallback.
    UnconvertibleMath { element: String },
    /// A tag outside the supported set; its children were still converted.
    UnhandledTag { tag: String },
    /// An element nested beyond the configured depth; its subtree was skipped.
    DepthLimit { tag: String, depth: usize },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::UnconvertibleMath { element } => {
                write!(f, "Could not extract LaTeX from math widget: {element}")
            }
            Warning::UnhandledTag { tag } => {
                write!(f, "Unhandled tag <{tag}>. Processing children.")
            }
            Warning::DepthLimit { tag, depth } => {
                write!(f, "Skipping <{tag}> nested {depth} levels deep")
            }
        }
    }
}

/// Warnings collected during a conversion, in the order they were found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, warning: Warning) {
        tracing::debug!("{}", warning);
        self.warnings.push(warning);
    }

    pub fn into_vec(self) -> Vec<Warning> {
        self.warnings
    }
}

/// LaTeX text together with the warnings raised while producing it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversion {
    pub latex: String,
    pub warnings: Vec<Warning>,
}

impl Conversion {
    pub fn new(latex: String, diagnostics: Diagnostics) -> Self {
        Self {
            latex,
            warnings: diagnostics.into_vec(),
        }
    }

    /// Apply `f` to the text, keeping the warnings.
    pub fn map_latex(self, f: impl FnOnce(&str) -> String) -> Self {
        Self {
            latex: f(&self.latex),
            warnings: self.warnings,
        }
    }
}
