//! The member model consumed by the assembler.
//!
//! These shapes are produced by a member-enumeration service (the derive
//! macro, or any caller building them by hand) and are never mutated by the
//! assembler.

use serde::{Deserialize, Serialize};

use crate::mask::{mask_str, DEFAULT_CIPHER};

/// Masking attached to a single member.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaskingConfig {
    /// Number of leading characters kept visible.
    pub pre_len: usize,
    /// Number of trailing characters kept visible.
    pub suf_len: usize,
    /// Text substituted for every masked character.
    #[serde(default = "default_cipher")]
    pub cipher: String,
}

fn default_cipher() -> String {
    DEFAULT_CIPHER.to_owned()
}

impl MaskingConfig {
    /// Keeps `pre_len` leading and `suf_len` trailing characters, masking with `"*"`.
    #[must_use]
    pub fn new(pre_len: usize, suf_len: usize) -> Self {
        Self {
            pre_len,
            suf_len,
            cipher: default_cipher(),
        }
    }

    /// Uses a specific cipher.
    #[must_use]
    pub fn with_cipher(mut self, cipher: impl Into<String>) -> Self {
        self.cipher = cipher.into();
        self
    }

    /// Applies the masking transform to `value`.
    #[must_use]
    pub fn apply(&self, value: &str) -> String {
        mask_str(value, self.pre_len, self.suf_len, &self.cipher)
    }
}

impl Default for MaskingConfig {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

/// How a member's raw value is fetched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessKind {
    /// Read the field directly.
    FieldRead,
    /// Call an accessor method.
    AccessorCall,
}

/// Stringification strategy for a member.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueCategory {
    /// Rendered through its own text form.
    Scalar,
    /// Array of primitives, joined element by element.
    PrimitiveArray,
    /// Array of objects, joined recursively.
    ObjectArray,
}

impl ValueCategory {
    /// Returns `true` for both array categories.
    pub fn is_array(self) -> bool {
        matches!(self, Self::PrimitiveArray | Self::ObjectArray)
    }
}

/// A single renderable member of a record type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberDescriptor {
    pub name: String,
    pub access: AccessKind,
    pub category: ValueCategory,
    /// Overrides `name` in rendered output when set and non-empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub masking: Option<MaskingConfig>,
}

impl MemberDescriptor {
    /// A scalar member read directly from a field.
    #[must_use]
    pub fn field(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            access: AccessKind::FieldRead,
            category: ValueCategory::Scalar,
            display_name: None,
            masking: None,
        }
    }

    /// A scalar member fetched through an accessor.
    #[must_use]
    pub fn accessor(name: impl Into<String>) -> Self {
        Self {
            access: AccessKind::AccessorCall,
            ..Self::field(name)
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: ValueCategory) -> Self {
        self.category = category;
        self
    }

    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    #[must_use]
    pub fn with_masking(mut self, masking: MaskingConfig) -> Self {
        self.masking = Some(masking);
        self
    }

    /// The name shown in rendered output.
    pub fn display_name(&self) -> &str {
        match self.display_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.name,
        }
    }

    pub fn is_masked(&self) -> bool {
        self.masking.is_some()
    }
}

/// Whether the rendered type is a plain record or an enumeration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Class,
    Enum,
}

/// Options for a single assembly pass.
///
/// `call_super` is already resolved here; see
/// [`resolve_call_super`](crate::resolve_call_super).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RenderOptions {
    pub include_names: bool,
    pub call_super: bool,
    pub type_name: String,
    pub type_kind: TypeKind,
}

impl RenderOptions {
    /// Options for a class-like type: names included, no super call.
    #[must_use]
    pub fn class(type_name: impl Into<String>) -> Self {
        Self {
            include_names: true,
            call_super: false,
            type_name: type_name.into(),
            type_kind: TypeKind::Class,
        }
    }

    /// Options for an enumeration: names included, no super call.
    #[must_use]
    pub fn enumeration(type_name: impl Into<String>) -> Self {
        Self {
            type_kind: TypeKind::Enum,
            ..Self::class(type_name)
        }
    }

    #[must_use]
    pub fn with_include_names(mut self, include_names: bool) -> Self {
        self.include_names = include_names;
        self
    }

    #[must_use]
    pub fn with_call_super(mut self, call_super: bool) -> Self {
        self.call_super = call_super;
        self
    }
}
