//! Structured outcome of one apply pass.

use crate::derive::Surface;
use serde::Serialize;
use std::fmt;

/// Steps of the apply sequence, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplyStep {
    PersistConfiguration,
    ResolveTheme,
    DeriveArtifact,
    ModeSignal,
    Handoff,
}

impl fmt::Display for ApplyStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ApplyStep::PersistConfiguration => "persist configuration",
            ApplyStep::ResolveTheme => "resolve theme",
            ApplyStep::DeriveArtifact => "derive",
            ApplyStep::ModeSignal => "mode signal",
            ApplyStep::Handoff => "handoff",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepOutcome {
    Succeeded,
    Failed,
    /// Nothing to do, e.g. an empty artifact.
    Skipped,
}

/// One entry of the report: a step, optionally scoped to a surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    pub step: ApplyStep,
    pub surface: Option<Surface>,
    pub outcome: StepOutcome,
    pub message: Option<String>,
}

impl fmt::Display for StepRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = match self.outcome {
            StepOutcome::Succeeded => "ok",
            StepOutcome::Failed => "FAILED",
            StepOutcome::Skipped => "skipped",
        };
        write!(f, "{outcome:>7}  {}", self.step)?;
        if let Some(surface) = self.surface {
            write!(f, " [{surface}]")?;
        }
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        Ok(())
    }
}

/// Result of [`apply_current_theme`] and the operations built on it.
///
/// Applying never raises. Callers inspect the report and surface its
/// warnings and failures without blocking, while whatever succeeded stays
/// applied.
///
/// [`apply_current_theme`]: crate::coordinator::ApplicationCoordinator::apply_current_theme
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApplyReport {
    /// Theme that was applied, after any fallback.
    pub theme_id: Option<String>,
    pub warnings: Vec<String>,
    /// Set when the pass stopped early.
    pub fatal: Option<String>,
    pub steps: Vec<StepRecord>,
}

impl ApplyReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_success(&mut self, step: ApplyStep, surface: Option<Surface>) {
        self.push(step, surface, StepOutcome::Succeeded, None);
    }

    pub fn add_success_with(
        &mut self,
        step: ApplyStep,
        surface: Option<Surface>,
        message: impl Into<String>,
    ) {
        self.push(step, surface, StepOutcome::Succeeded, Some(message.into()));
    }

    pub fn add_failure(&mut self, step: ApplyStep, surface: Option<Surface>, error: impl Into<String>) {
        let error = error.into();
        match surface {
            Some(surface) => log::warn!("Theme apply: {step} failed for {surface}: {error}"),
            None => log::warn!("Theme apply: {step} failed: {error}"),
        }
        self.push(step, surface, StepOutcome::Failed, Some(error));
    }

    pub fn add_skipped(&mut self, step: ApplyStep, surface: Option<Surface>, reason: impl Into<String>) {
        self.push(step, surface, StepOutcome::Skipped, Some(reason.into()));
    }

    pub fn add_warning(&mut self, warning: impl Into<String>) {
        let warning = warning.into();
        log::warn!("Theme apply: {warning}");
        self.warnings.push(warning);
    }

    pub fn set_fatal(&mut self, error: impl Into<String>) {
        let error = error.into();
        log::error!("Theme apply aborted: {error}");
        self.fatal = Some(error);
    }

    fn push(
        &mut self,
        step: ApplyStep,
        surface: Option<Surface>,
        outcome: StepOutcome,
        message: Option<String>,
    ) {
        self.steps.push(StepRecord {
            step,
            surface,
            outcome,
            message,
        });
    }

    /// No fatal error and no failed step. Warnings do not count.
    pub fn is_complete_success(&self) -> bool {
        self.fatal.is_none() && self.failures().next().is_none()
    }

    pub fn failures(&self) -> impl Iterator<Item = &StepRecord> {
        self.steps
            .iter()
            .filter(|record| record.outcome == StepOutcome::Failed)
    }

    /// Surfaces whose `step` ended with `outcome`, in report order.
    pub fn surfaces(&self, step: ApplyStep, outcome: StepOutcome) -> Vec<Surface> {
        self.steps
            .iter()
            .filter(|record| record.step == step && record.outcome == outcome)
            .filter_map(|record| record.surface)
            .collect()
    }

    pub fn succeeded(&self, step: ApplyStep) -> Vec<Surface> {
        self.surfaces(step, StepOutcome::Succeeded)
    }

    pub fn failed(&self, step: ApplyStep) -> Vec<Surface> {
        self.surfaces(step, StepOutcome::Failed)
    }

    pub fn record(&self, step: ApplyStep, surface: Option<Surface>) -> Option<&StepRecord> {
        self.steps
            .iter()
            .find(|record| record.step == step && record.surface == surface)
    }
}

impl fmt::Display for ApplyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.theme_id {
            Some(id) => writeln!(f, "Theme: {id}")?,
            None => writeln!(f, "Theme: (none)")?,
        }
        for warning in &self.warnings {
            writeln!(f, "warning: {warning}")?;
        }
        for record in &self.steps {
            writeln!(f, "{record}")?;
        }
        if let Some(fatal) = &self.fatal {
            writeln!(f, "fatal: {fatal}")?;
        }
        Ok(())
    }
}
