//! Compile-fail tests to ensure proper error messages for incorrect usage.
//!
//! These tests verify that the derive macro rejects:
//! - unions, which have no members to render
//! - `call_super = true` without a `#[desensitize(parent)]` field
//! - masking on array members
//! - a `cipher` with no preset or `mask(...)` lengths

#[test]
fn compile_fail_tests() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/compile_fail/*.rs");
}
