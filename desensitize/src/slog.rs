//! Adapters for emitting rendered values through `slog`.
//!
//! Derived types log their masked `Display` output. Nothing here ever sees
//! the unmasked member values as text.

use std::fmt;

use desensitize_core::{write_rendered, RenderSource, RenderingPlan};
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

/// Emits the rendered text of `value` under `key`.
///
/// Derived `slog::Value` impls call this.
pub fn serialize_rendered<T: fmt::Display + ?Sized>(
    value: &T,
    _record: &Record<'_>,
    key: Key,
    serializer: &mut dyn Serializer,
) -> SlogResult {
    serializer.emit_arguments(key, &format_args!("{value}"))
}

/// A `slog::Value` that interprets a plan against a source when the record
/// is serialized.
///
/// ## Example
/// ```ignore
/// use desensitize::slog::Rendered;
///
/// info!(logger, "loaded"; "user" => Rendered::new(&plan, &user));
/// ```
pub struct Rendered<'a, S: ?Sized> {
    plan: &'a RenderingPlan,
    source: &'a S,
}

impl<'a, S: RenderSource + ?Sized> Rendered<'a, S> {
    pub fn new(plan: &'a RenderingPlan, source: &'a S) -> Self {
        Self { plan, source }
    }
}

impl<S: RenderSource + ?Sized> fmt::Display for Rendered<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rendered(f, self.plan, self.source)
    }
}

impl<S: RenderSource + ?Sized> SlogValue for Rendered<'_, S> {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        serialize_rendered(self, record, key, serializer)
    }
}

/// Logs the steps of a plan as nested structured data.
pub fn plan_value(plan: &RenderingPlan) -> slog::Serde<RenderingPlan> {
    slog::Serde(plan.clone())
}
