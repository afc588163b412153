//! Observer hooks for dataset service operations.
//!
//! The service reports every operation outcome to an optional observer:
//! success with row-count stats, failure with a computed severity, and an
//! alert callback when the severity meets a configurable threshold.

use std::fmt;
use std::sync::Arc;

use crate::error::DatasetError;

/// Severity classification used for observer callbacks and alert thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum OperationSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (operation failed).
    Error,
    /// Critical error (setup/configuration failures).
    Critical,
}

impl Default for OperationSeverity {
    /// The default alert threshold: only critical failures alert.
    fn default() -> Self {
        Self::Critical
    }
}

/// Severity classification for a failed operation.
///
/// Configuration and initialization problems mean the service cannot answer
/// anything; data and argument problems are scoped to one call.
pub fn severity_for_error(error: &DatasetError) -> OperationSeverity {
    match error {
        DatasetError::NullArgument { .. }
        | DatasetError::Configuration { .. }
        | DatasetError::NotInitialized => OperationSeverity::Critical,
        DatasetError::FieldNotSupported { .. }
        | DatasetError::UnsupportedOperation { .. }
        | DatasetError::InvalidArgument { .. }
        | DatasetError::EmptyDataset
        | DatasetError::DimensionMismatch { .. }
        | DatasetError::Coercion { .. } => OperationSeverity::Error,
    }
}

/// Context about one operation invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationContext {
    /// Operation name, e.g. `"group_by"`.
    pub operation: &'static str,
}

/// Minimal stats reported on a successful operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationStats {
    /// Number of rows in the table the operation ran against.
    pub rows: usize,
}

/// Observer interface for operation outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait OperationObserver: Send + Sync {
    /// Called when an operation succeeds.
    fn on_success(&self, _ctx: &OperationContext, _stats: OperationStats) {}

    /// Called when an operation fails.
    fn on_failure(
        &self,
        _ctx: &OperationContext,
        _severity: OperationSeverity,
        _error: &DatasetError,
    ) {
    }

    /// Called when a failure meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(
        &self,
        ctx: &OperationContext,
        severity: OperationSeverity,
        error: &DatasetError,
    ) {
        self.on_failure(ctx, severity, error);
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn OperationObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn OperationObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl OperationObserver for CompositeObserver {
    fn on_success(&self, ctx: &OperationContext, stats: OperationStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(
        &self,
        ctx: &OperationContext,
        severity: OperationSeverity,
        error: &DatasetError,
    ) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &OperationContext, severity: OperationSeverity, error: &DatasetError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Logs operation events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl OperationObserver for StdErrObserver {
    fn on_success(&self, ctx: &OperationContext, stats: OperationStats) {
        eprintln!("[dataset][ok] op={} rows={}", ctx.operation, stats.rows);
    }

    fn on_failure(
        &self,
        ctx: &OperationContext,
        severity: OperationSeverity,
        error: &DatasetError,
    ) {
        eprintln!(
            "[dataset][{:?}] op={} err={}",
            severity, ctx.operation, error
        );
    }

    fn on_alert(&self, ctx: &OperationContext, severity: OperationSeverity, error: &DatasetError) {
        eprintln!(
            "[ALERT][dataset][{:?}] op={} err={}",
            severity, ctx.operation, error
        );
    }
}
