//! Helpers called by code emitted from `#[derive(Desensitize)]`.
//!
//! Each helper evaluates one kind of render step exactly the way
//! [`write_rendered`](crate::write_rendered) does. Not a stable API.

use std::fmt;

use crate::value::{ToRenderValue, NULL_TOKEN};

/// Writes an unmasked member value.
pub fn write_member<T: ToRenderValue + ?Sized>(
    f: &mut fmt::Formatter<'_>,
    value: &T,
) -> fmt::Result {
    fmt::Display::fmt(&value.to_render_value(), f)
}

/// Writes an array member, recursing into nested arrays when `deep`.
pub fn write_array<T: ToRenderValue + ?Sized>(
    f: &mut fmt::Formatter<'_>,
    value: &T,
    deep: bool,
) -> fmt::Result {
    value.to_render_value().write_joined(f, deep)
}

/// The masking routine's input: the member's text form, absent for null.
pub fn mask_input<T: ToRenderValue + ?Sized>(value: &T) -> Option<String> {
    value.to_render_value().to_text()
}

/// Writes the masking routine's output.
pub fn write_masked(f: &mut fmt::Formatter<'_>, masked: Option<String>) -> fmt::Result {
    f.write_str(masked.as_deref().unwrap_or(NULL_TOKEN))
}
