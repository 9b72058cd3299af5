//! Runtime values read from members while rendering.
//!
//! [`RenderValue`] is what the interpreter and emitted code both work on, so
//! their output is identical by construction.

use std::{
    borrow::Cow,
    collections::VecDeque,
    fmt::{self, Write as _},
    rc::Rc,
    sync::Arc,
};

/// Text rendered for an absent value.
pub const NULL_TOKEN: &str = "null";

/// Text rendered for a nested array inside a flat join.
pub const NESTED_ARRAY_TOKEN: &str = "[...]";

/// A member value as seen by the renderer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RenderValue {
    /// No value.
    Null,
    /// A value in its text form.
    Text(String),
    /// A sequence of values.
    Array(Vec<RenderValue>),
}

impl RenderValue {
    pub fn text(value: impl fmt::Display) -> Self {
        Self::Text(value.to_string())
    }

    pub fn array<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToRenderValue,
    {
        Self::Array(items.into_iter().map(|item| item.to_render_value()).collect())
    }

    /// The text form, or `None` for [`RenderValue::Null`].
    pub fn to_text(&self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::Text(text) => Some(text.clone()),
            Self::Array(_) => Some(self.to_string()),
        }
    }

    /// Writes the elements of an array, nested arrays included when `deep`.
    ///
    /// Non-array values are written through their usual text form.
    pub fn write_joined<W: fmt::Write>(&self, out: &mut W, deep: bool) -> fmt::Result {
        match self {
            Self::Null => out.write_str(NULL_TOKEN),
            Self::Text(text) => out.write_str(text),
            Self::Array(items) => {
                out.write_char('[')?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        out.write_str(", ")?;
                    }
                    match item {
                        Self::Array(_) if !deep => out.write_str(NESTED_ARRAY_TOKEN)?,
                        _ => item.write_joined(out, deep)?,
                    }
                }
                out.write_char(']')
            }
        }
    }

    /// Returns the joined text of this value.
    pub fn joined(&self, deep: bool) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_joined(&mut out, deep);
        out
    }
}

impl fmt::Display for RenderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_joined(f, true)
    }
}

/// Converts a member into a [`RenderValue`].
///
/// Implemented for primitives, strings, `Option`, smart pointers and common
/// sequences. Types deriving `Desensitize` implement it through their
/// rendered text, so records nest.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be rendered by `Desensitize`",
    label = "this member type does not implement `ToRenderValue`",
    note = "derive `Desensitize` on the type, or exclude the member with `#[desensitize(skip)]`"
)]
pub trait ToRenderValue {
    fn to_render_value(&self) -> RenderValue;
}

macro_rules! impl_to_render_value_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToRenderValue for $ty {
                fn to_render_value(&self) -> RenderValue {
                    RenderValue::text(self)
                }
            }
        )*
    };
}

impl_to_render_value_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, str,
    String,
);

impl ToRenderValue for Cow<'_, str> {
    fn to_render_value(&self) -> RenderValue {
        RenderValue::Text(self.clone().into_owned())
    }
}

impl ToRenderValue for RenderValue {
    fn to_render_value(&self) -> RenderValue {
        self.clone()
    }
}

impl<T: ToRenderValue + ?Sized> ToRenderValue for &T {
    fn to_render_value(&self) -> RenderValue {
        (**self).to_render_value()
    }
}

impl<T: ToRenderValue + ?Sized> ToRenderValue for &mut T {
    fn to_render_value(&self) -> RenderValue {
        (**self).to_render_value()
    }
}

impl<T: ToRenderValue + ?Sized> ToRenderValue for Box<T> {
    fn to_render_value(&self) -> RenderValue {
        (**self).to_render_value()
    }
}

impl<T: ToRenderValue + ?Sized> ToRenderValue for Rc<T> {
    fn to_render_value(&self) -> RenderValue {
        (**self).to_render_value()
    }
}

impl<T: ToRenderValue + ?Sized> ToRenderValue for Arc<T> {
    fn to_render_value(&self) -> RenderValue {
        (**self).to_render_value()
    }
}

impl<T: ToRenderValue> ToRenderValue for Option<T> {
    fn to_render_value(&self) -> RenderValue {
        self.as_ref()
            .map_or(RenderValue::Null, ToRenderValue::to_render_value)
    }
}

impl<T: ToRenderValue> ToRenderValue for [T] {
    fn to_render_value(&self) -> RenderValue {
        RenderValue::array(self)
    }
}

impl<T: ToRenderValue, const N: usize> ToRenderValue for [T; N] {
    fn to_render_value(&self) -> RenderValue {
        RenderValue::array(self)
    }
}

impl<T: ToRenderValue> ToRenderValue for Vec<T> {
    fn to_render_value(&self) -> RenderValue {
        RenderValue::array(self)
    }
}

impl<T: ToRenderValue> ToRenderValue for VecDeque<T> {
    fn to_render_value(&self) -> RenderValue {
        RenderValue::array(self)
    }
}
