//! Gating decisions taken before a plan is assembled.
//!
//! Whether a routine already exists is decided by an external classifier; this
//! module only turns that classification into a decision. The render routine
//! and the masking routine are gated independently.

use serde::{Deserialize, Serialize};

use crate::{
    error::Warning,
    mask::{MASK_ROUTINE_ARITY, MASK_ROUTINE_NAME},
    model::MemberDescriptor,
};

/// Whether a target routine already exists on a type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Existence {
    #[default]
    Absent,
    /// Left behind by an earlier synthesis pass.
    PresentGenerated,
    /// Written by hand.
    PresentUserAuthored,
}

/// What to do about the render routine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderDecision {
    /// Assemble and emit a new plan.
    Synthesize,
    /// A generated routine is already there; nothing to do.
    KeepGenerated,
    /// A user-authored routine wins. Carries a warning when conflicts were to be reported.
    SkipUserAuthored(Option<Warning>),
}

impl RenderDecision {
    pub fn should_synthesize(&self) -> bool {
        matches!(self, Self::Synthesize)
    }
}

/// Decides whether the render routine of `type_name` should be synthesized.
pub fn decide_render(type_name: &str, existence: Existence, warn_on_conflict: bool) -> RenderDecision {
    match existence {
        Existence::Absent => RenderDecision::Synthesize,
        Existence::PresentGenerated => RenderDecision::KeepGenerated,
        Existence::PresentUserAuthored => RenderDecision::SkipUserAuthored(
            warn_on_conflict.then(|| Warning::RenderRoutineExists {
                type_name: type_name.to_owned(),
            }),
        ),
    }
}

/// Returns `true` when a masking routine must be synthesized.
///
/// That is the case only if some member is masked and no routine with the
/// masking signature exists yet, generated or not.
pub fn mask_routine_required<'a, I>(members: I, existence: Existence) -> bool
where
    I: IntoIterator<Item = &'a MemberDescriptor>,
{
    existence == Existence::Absent && members.into_iter().any(MemberDescriptor::is_masked)
}

/// The contract of the synthesized masking routine.
///
/// Emitters wire masked member steps to a routine with this name taking
/// (value, prefix length, suffix length, cipher) and returning an optional string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct MaskRoutine {
    pub name: &'static str,
    pub arity: usize,
}

impl MaskRoutine {
    pub const CONTRACT: MaskRoutine = MaskRoutine {
        name: MASK_ROUTINE_NAME,
        arity: MASK_ROUTINE_ARITY,
    };
}

/// Configured behaviour when a type with a parent does not say whether to call it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallSuperPolicy {
    #[default]
    Skip,
    Warn,
    Call,
}

impl CallSuperPolicy {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "skip" => Some(Self::Skip),
            "warn" => Some(Self::Warn),
            "call" => Some(Self::Call),
            _ => None,
        }
    }
}

/// Resolves the super-call flag before assembly.
///
/// An explicit choice always wins. Otherwise a type without an eligible
/// parent never calls it, and one with a parent follows `policy`.
pub fn resolve_call_super(
    type_name: &str,
    explicit: Option<bool>,
    has_parent: bool,
    policy: CallSuperPolicy,
) -> (bool, Option<Warning>) {
    if let Some(call_super) = explicit {
        return (call_super, None);
    }
    if !has_parent {
        return (false, None);
    }
    match policy {
        CallSuperPolicy::Skip => (false, None),
        CallSuperPolicy::Warn => (
            false,
            Some(Warning::SuperCallSkipped {
                type_name: type_name.to_owned(),
            }),
        ),
        CallSuperPolicy::Call => (true, None),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        decide_render, mask_routine_required, resolve_call_super, CallSuperPolicy, Existence,
        MaskRoutine, RenderDecision,
    };
    use crate::{
        error::Warning,
        model::{MaskingConfig, MemberDescriptor},
    };

    #[test]
    fn absent_render_routine_is_synthesized() {
        assert!(decide_render("User", Existence::Absent, true).should_synthesize());
    }

    #[test]
    fn generated_render_routine_is_kept_silently() {
        assert_eq!(
            decide_render("User", Existence::PresentGenerated, true),
            RenderDecision::KeepGenerated
        );
    }

    #[test]
    fn user_authored_render_routine_warns_only_on_request() {
        assert_eq!(
            decide_render("User", Existence::PresentUserAuthored, false),
            RenderDecision::SkipUserAuthored(None)
        );
        assert_eq!(
            decide_render("User", Existence::PresentUserAuthored, true),
            RenderDecision::SkipUserAuthored(Some(Warning::RenderRoutineExists {
                type_name: "User".to_owned(),
            }))
        );
    }

    #[test]
    fn mask_routine_needs_a_masked_member() {
        let plain = [MemberDescriptor::field("a")];
        assert!(!mask_routine_required(&plain, Existence::Absent));

        let masked = [
            MemberDescriptor::field("a"),
            MemberDescriptor::field("b").with_masking(MaskingConfig::new(1, 0)),
        ];
        assert!(mask_routine_required(&masked, Existence::Absent));
    }

    #[test]
    fn existing_mask_routine_suppresses_synthesis() {
        let masked = [MemberDescriptor::field("b").with_masking(MaskingConfig::new(1, 0))];
        assert!(!mask_routine_required(&masked, Existence::PresentGenerated));
        assert!(!mask_routine_required(&masked, Existence::PresentUserAuthored));
    }

    #[test]
    fn mask_routine_contract_has_four_parameters() {
        assert_eq!(MaskRoutine::CONTRACT.name, "desensitize");
        assert_eq!(MaskRoutine::CONTRACT.arity, 4);
    }

    #[test]
    fn explicit_call_super_wins() {
        assert_eq!(
            resolve_call_super("A", Some(true), false, CallSuperPolicy::Skip),
            (true, None)
        );
        assert_eq!(
            resolve_call_super("A", Some(false), true, CallSuperPolicy::Call),
            (false, None)
        );
    }

    #[test]
    fn no_parent_never_calls_super() {
        for policy in [CallSuperPolicy::Skip, CallSuperPolicy::Warn, CallSuperPolicy::Call] {
            assert_eq!(resolve_call_super("A", None, false, policy), (false, None));
        }
    }

    #[test]
    fn parent_follows_policy() {
        assert_eq!(
            resolve_call_super("A", None, true, CallSuperPolicy::Skip),
            (false, None)
        );
        assert_eq!(
            resolve_call_super("A", None, true, CallSuperPolicy::Call),
            (true, None)
        );
        let (call_super, warning) = resolve_call_super("A", None, true, CallSuperPolicy::Warn);
        assert!(!call_super);
        assert_eq!(
            warning,
            Some(Warning::SuperCallSkipped {
                type_name: "A".to_owned(),
            })
        );
    }

    #[test]
    fn policy_names_parse() {
        assert_eq!(CallSuperPolicy::from_name("warn"), Some(CallSuperPolicy::Warn));
        assert_eq!(CallSuperPolicy::from_name("always"), None);
    }
}
