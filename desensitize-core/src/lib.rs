//! Rendering-plan synthesis for masked record rendering.
//!
//! This crate is the pure core behind `#[derive(Desensitize)]`:
//! - **Masking transform**: [`mask`] keeps a prefix and suffix and substitutes
//!   the cipher for every character in between.
//! - **Member model**: [`MemberDescriptor`], [`MaskingConfig`] and [`RenderOptions`]
//!   describe what is rendered.
//! - **Assembler**: [`assemble`] turns members and options into a [`RenderingPlan`].
//! - **Existence policy**: [`decide_render`] and [`mask_routine_required`] gate
//!   synthesis on whether routines already exist.
//! - **Interpreter**: [`render`] evaluates a plan against a [`RenderSource`]. It is
//!   the reference every emitter has to match.
//!
//! [`Synthesizer`] ties the pieces together for whole types, batches included.
//!
//! What this crate does not do:
//! - discover members of Rust types (that is the derive macro's job)
//! - emit code

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::option_if_let_else,
    clippy::return_self_not_must_use
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

mod config;
mod error;
mod existence;
mod interpret;
mod mask;
mod model;
mod plan;
mod preset;
#[doc(hidden)]
pub mod runtime;
mod synthesize;
mod value;

pub use config::SynthesisConfig;
pub use error::{ConfigError, SynthesisError, Warning};
pub use existence::{
    decide_render, mask_routine_required, resolve_call_super, CallSuperPolicy, Existence,
    MaskRoutine, RenderDecision,
};
pub use interpret::{render, write_rendered, RenderSource};
pub use mask::{mask, mask_str, DEFAULT_CIPHER, MASK_ROUTINE_ARITY, MASK_ROUTINE_NAME};
pub use model::{AccessKind, MaskingConfig, MemberDescriptor, RenderOptions, TypeKind, ValueCategory};
pub use plan::{assemble, RenderStep, RenderingPlan};
pub use preset::{Preset, UnknownPreset};
pub use synthesize::{Synthesis, SynthesisRequest, Synthesizer, TypeShape};
pub use value::{RenderValue, ToRenderValue, NESTED_ARRAY_TOKEN, NULL_TOKEN};
