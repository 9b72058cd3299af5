//! Rendering-plan assembly.
//!
//! A [`RenderingPlan`] is the neutral intermediate artifact between the member
//! model and whatever produces text: the [interpreter](crate::render) or a
//! code emitter such as the derive macro. Concatenating the evaluation of
//! every step, in order, yields the rendered representation.

use serde::{Deserialize, Serialize};

use crate::model::{MemberDescriptor, RenderOptions, TypeKind, ValueCategory};

const INFIX: &str = ", ";
const SUFFIX: &str = ")";
const SUPER_PREFIX: &str = "(super=";

/// One text-producing step of a plan.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum RenderStep {
    /// Fixed text.
    Literal { text: String },
    /// The variant name of the rendered enum value.
    EnumSelfName,
    /// The inherited render routine of the parent.
    SuperCall,
    /// A member rendered through its text form, masked if `masked` is set.
    MemberValue {
        member: MemberDescriptor,
        masked: bool,
    },
    /// An array member joined element by element, recursively if `deep`.
    ArrayStringify {
        member: MemberDescriptor,
        deep: bool,
    },
}

impl RenderStep {
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal { text: text.into() }
    }

    /// The member read by this step, if any.
    pub fn member(&self) -> Option<&MemberDescriptor> {
        match self {
            Self::MemberValue { member, .. } | Self::ArrayStringify { member, .. } => Some(member),
            Self::Literal { .. } | Self::EnumSelfName | Self::SuperCall => None,
        }
    }
}

/// An ordered, immutable sequence of render steps. Never empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<RenderStep>", try_from = "Vec<RenderStep>")]
pub struct RenderingPlan {
    steps: Vec<RenderStep>,
}

impl TryFrom<Vec<RenderStep>> for RenderingPlan {
    type Error = &'static str;

    fn try_from(steps: Vec<RenderStep>) -> Result<Self, Self::Error> {
        if steps.is_empty() {
            return Err("a rendering plan needs at least its opening literal");
        }
        Ok(Self { steps })
    }
}

impl From<RenderingPlan> for Vec<RenderStep> {
    fn from(plan: RenderingPlan) -> Self {
        plan.steps
    }
}

#[allow(clippy::len_without_is_empty)]
impl RenderingPlan {
    pub fn steps(&self) -> &[RenderStep] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RenderStep> {
        self.steps.iter()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` when any step masks its member.
    pub fn has_masked_steps(&self) -> bool {
        self.steps
            .iter()
            .any(|step| matches!(step, RenderStep::MemberValue { masked: true, .. }))
    }

    /// Serializes the plan as JSON, for caching or out-of-process emitters.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl<'a> IntoIterator for &'a RenderingPlan {
    type Item = &'a RenderStep;
    type IntoIter = std::slice::Iter<'a, RenderStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Assembles the rendering plan for `members` under `opts`.
///
/// Members are visited in the given order and never reordered. The result is
/// a pure function of the inputs.
#[must_use]
pub fn assemble(members: &[MemberDescriptor], opts: &RenderOptions) -> RenderingPlan {
    let prefix = opening_prefix(members, opts);
    let mut steps = Vec::with_capacity(members.len() * 2 + 4);

    match opts.type_kind {
        TypeKind::Enum => {
            steps.push(RenderStep::literal(format!("{}.", opts.type_name)));
            steps.push(RenderStep::EnumSelfName);
            if !prefix.is_empty() {
                steps.push(RenderStep::literal(prefix));
            }
        }
        TypeKind::Class => {
            steps.push(RenderStep::literal(format!("{}{prefix}", opts.type_name)));
        }
    }

    let mut has_content = false;
    if opts.call_super {
        steps.push(RenderStep::SuperCall);
        has_content = true;
    }

    for member in members {
        if has_content {
            let separator = if opts.include_names {
                format!("{INFIX}{}=", member.display_name())
            } else {
                INFIX.to_owned()
            };
            steps.push(RenderStep::literal(separator));
        }
        steps.push(value_step(member));
        has_content = true;
    }

    // An empty class already closed itself with "()".
    if has_content {
        steps.push(RenderStep::literal(SUFFIX));
    }

    RenderingPlan { steps }
}

fn opening_prefix(members: &[MemberDescriptor], opts: &RenderOptions) -> String {
    if opts.call_super {
        return SUPER_PREFIX.to_owned();
    }
    match members.first() {
        None => match opts.type_kind {
            TypeKind::Enum => String::new(),
            TypeKind::Class => "()".to_owned(),
        },
        Some(first) if opts.include_names => format!("({}=", first.display_name()),
        Some(_) => "(".to_owned(),
    }
}

fn value_step(member: &MemberDescriptor) -> RenderStep {
    match member.category {
        ValueCategory::PrimitiveArray | ValueCategory::ObjectArray => RenderStep::ArrayStringify {
            member: member.clone(),
            deep: member.category == ValueCategory::ObjectArray,
        },
        ValueCategory::Scalar => RenderStep::MemberValue {
            member: member.clone(),
            masked: member.is_masked(),
        },
    }
}
