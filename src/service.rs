//! Dataset service facade.
//!
//! [`DatasetService`] is the single entry point the host talks to: it owns
//! the current table and parsed schema, and exposes the whole query and
//! statistics surface. The host calls [`DatasetService::setup`] once (or
//! again, to replace everything wholesale) and then issues any number of
//! read-style operations; none of them mutate the held table.
//!
//! The service is synchronous and single-threaded by design; callers that
//! share one instance across execution contexts must serialize access
//! externally.

use std::sync::Arc;

use crate::error::{DatasetError, DatasetResult};
use crate::observability::{
    OperationContext, OperationObserver, OperationSeverity, OperationStats, severity_for_error,
};
use crate::query;
use crate::query::ChartDataset;
use crate::schema::DatasetSchema;
use crate::stats;
use crate::types::{Table, Value};

struct ServiceState {
    table: Table,
    schema: DatasetSchema,
}

/// Facade owning the current `(table, schema)` pair.
///
/// All operations fail with [`DatasetError::NotInitialized`] before the
/// first successful [`DatasetService::setup`].
#[derive(Default)]
pub struct DatasetService {
    state: Option<ServiceState>,
    observer: Option<Arc<dyn OperationObserver>>,
    alert_at_or_above: OperationSeverity,
}

impl DatasetService {
    /// Create an uninitialized service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an observer that receives every operation outcome.
    pub fn with_observer(mut self, observer: Arc<dyn OperationObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Set the severity threshold at which `on_alert` is invoked.
    pub fn with_alert_threshold(mut self, threshold: OperationSeverity) -> Self {
        self.alert_at_or_above = threshold;
        self
    }

    /// Install the table and schema this service answers queries against.
    ///
    /// Both inputs come from the host (table provider and settings store)
    /// and may be absent there, hence the `Option`s: `None` for either is
    /// [`DatasetError::NullArgument`]. The schema JSON is parsed per
    /// [`DatasetSchema::parse`]. On any failure the previously installed
    /// state is left untouched; on success both are replaced together.
    pub fn setup(&mut self, table: Option<Table>, schema_json: Option<&str>) -> DatasetResult<()> {
        let result = self.setup_inner(table, schema_json);
        self.report("setup", &result);
        result
    }

    fn setup_inner(
        &mut self,
        table: Option<Table>,
        schema_json: Option<&str>,
    ) -> DatasetResult<()> {
        let table = table.ok_or(DatasetError::NullArgument { name: "table" })?;
        let schema_json = schema_json.ok_or(DatasetError::NullArgument { name: "schema" })?;
        let schema = DatasetSchema::parse(schema_json)?;
        self.state = Some(ServiceState { table, schema });
        Ok(())
    }

    /// Whether a successful setup has installed a table and schema.
    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    /// Borrow the currently installed table, if any.
    pub fn table(&self) -> Option<&Table> {
        self.state.as_ref().map(|s| &s.table)
    }

    /// Borrow the currently installed schema, if any.
    pub fn schema(&self) -> Option<&DatasetSchema> {
        self.state.as_ref().map(|s| &s.schema)
    }

    fn state(&self) -> DatasetResult<&ServiceState> {
        self.state.as_ref().ok_or(DatasetError::NotInitialized)
    }

    /// See [`query::group_by`].
    pub fn group_by(&self, field: &str) -> DatasetResult<Table> {
        let result = self
            .state()
            .and_then(|s| query::group_by(&s.table, &s.schema, field));
        self.report("group_by", &result);
        result
    }

    /// See [`query::aggregate`].
    pub fn aggregate(&self, field: &str, function: &str) -> DatasetResult<Table> {
        let result = self
            .state()
            .and_then(|s| query::aggregate(&s.table, &s.schema, field, function));
        self.report("aggregate", &result);
        result
    }

    /// See [`query::prepare_chart_dataset`].
    pub fn prepare_chart_dataset(
        &self,
        group_field: &str,
        agg_field: &str,
        function: &str,
    ) -> DatasetResult<ChartDataset> {
        let result = self.state().and_then(|s| {
            query::prepare_chart_dataset(&s.table, &s.schema, group_field, agg_field, function)
        });
        self.report("prepare_chart_dataset", &result);
        result
    }

    /// See [`query::filter`].
    pub fn filter<F>(&self, field: &str, predicate: F) -> DatasetResult<Table>
    where
        F: FnMut(&Value) -> bool,
    {
        let result = self
            .state()
            .and_then(|s| query::filter(&s.table, &s.schema, field, predicate));
        self.report("filter", &result);
        result
    }

    /// See [`query::normalize`]. Performs no capability check.
    pub fn normalize(&self, field: &str) -> DatasetResult<Table> {
        let result = self.state().and_then(|s| query::normalize(&s.table, field));
        self.report("normalize", &result);
        result
    }

    /// See [`stats::standard_deviation`].
    pub fn standard_deviation(&self, field: &str) -> DatasetResult<f64> {
        let result = self
            .state()
            .and_then(|s| stats::standard_deviation(&s.table, field));
        self.report("standard_deviation", &result);
        result
    }

    /// See [`stats::median`].
    pub fn median(&self, field: &str) -> DatasetResult<f64> {
        let result = self.state().and_then(|s| stats::median(&s.table, field));
        self.report("median", &result);
        result
    }

    /// See [`stats::mode`].
    pub fn mode(&self, field: &str) -> DatasetResult<Vec<Value>> {
        let result = self.state().and_then(|s| stats::mode(&s.table, field));
        self.report("mode", &result);
        result
    }

    /// See [`stats::percentile`].
    pub fn percentile(&self, field: &str, p: f64) -> DatasetResult<f64> {
        let result = self
            .state()
            .and_then(|s| stats::percentile(&s.table, field, p));
        self.report("percentile", &result);
        result
    }

    /// See [`stats::correlation`].
    pub fn correlation(&self, field_x: &str, field_y: &str) -> DatasetResult<f64> {
        let result = self
            .state()
            .and_then(|s| stats::correlation(&s.table, field_x, field_y));
        self.report("correlation", &result);
        result
    }

    fn report<T>(&self, operation: &'static str, result: &DatasetResult<T>) {
        let Some(obs) = self.observer.as_ref() else {
            return;
        };
        let ctx = OperationContext { operation };
        match result {
            Ok(_) => {
                let rows = self.state.as_ref().map_or(0, |s| s.table.row_count());
                obs.on_success(&ctx, OperationStats { rows });
            }
            Err(e) => {
                let severity = severity_for_error(e);
                obs.on_failure(&ctx, severity, e);
                if severity >= self.alert_at_or_above {
                    obs.on_alert(&ctx, severity, e);
                }
            }
        }
    }
}
