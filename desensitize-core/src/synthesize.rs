//! End-to-end synthesis of a type's render routine.
//!
//! A [`SynthesisRequest`] bundles what the external collaborators know about
//! a type: its shape, its enumerated members and whether the target routines
//! already exist. The [`Synthesizer`] gates, resolves and assembles, collecting
//! warnings along the way. Requests are independent; a batch is processed in
//! parallel and one failing request never affects another.

use std::fmt;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use slog::{debug, error, o, warn, Discard, Logger};

use crate::{
    config::SynthesisConfig,
    error::{SynthesisError, Warning},
    existence::{
        decide_render, mask_routine_required, resolve_call_super, Existence, MaskRoutine,
        RenderDecision,
    },
    model::{MemberDescriptor, RenderOptions, TypeKind},
    plan::{assemble, RenderingPlan},
};

/// The declared shape of the type a render routine is requested for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeShape {
    Class,
    Enum,
    Interface,
    Union,
}

impl TypeShape {
    /// The kind used for assembly, or `None` when no routine can be synthesized.
    pub fn type_kind(self) -> Option<TypeKind> {
        match self {
            TypeShape::Class => Some(TypeKind::Class),
            TypeShape::Enum => Some(TypeKind::Enum),
            TypeShape::Interface | TypeShape::Union => None,
        }
    }
}

impl fmt::Display for TypeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TypeShape::Class => "a class",
            TypeShape::Enum => "an enum",
            TypeShape::Interface => "an interface",
            TypeShape::Union => "a union",
        })
    }
}

/// Everything known about one type before synthesis.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisRequest {
    pub type_name: String,
    pub shape: TypeShape,
    /// Ordered, already filtered members.
    pub members: Vec<MemberDescriptor>,
    /// `None` defers to [`SynthesisConfig::include_field_names`].
    #[serde(default)]
    pub include_names: Option<bool>,
    /// `None` leaves the decision to the configured policy.
    #[serde(default)]
    pub call_super: Option<bool>,
    /// Whether the type has a parent whose render routine could be called.
    #[serde(default)]
    pub has_parent: bool,
    #[serde(default)]
    pub render_existence: Existence,
    #[serde(default)]
    pub mask_existence: Existence,
    /// `None` defers to [`SynthesisConfig::warn_on_conflict`].
    #[serde(default)]
    pub warn_on_conflict: Option<bool>,
}

impl SynthesisRequest {
    /// A request for a fresh type: nothing exists yet, every option open.
    #[must_use]
    pub fn new(type_name: impl Into<String>, shape: TypeShape, members: Vec<MemberDescriptor>) -> Self {
        Self {
            type_name: type_name.into(),
            shape,
            members,
            include_names: None,
            call_super: None,
            has_parent: false,
            render_existence: Existence::Absent,
            mask_existence: Existence::Absent,
            warn_on_conflict: None,
        }
    }
}

/// The outcome of a successful request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Synthesis {
    pub type_name: String,
    /// The new plan, absent when an existing render routine stands.
    pub plan: Option<RenderingPlan>,
    /// Set when a masking routine must be emitted alongside.
    pub mask_routine: Option<MaskRoutine>,
    pub warnings: Vec<Warning>,
}

/// Gates, resolves and assembles rendering plans.
#[derive(Clone, Debug)]
pub struct Synthesizer {
    config: SynthesisConfig,
    logger: Logger,
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new(SynthesisConfig::default())
    }
}

impl Synthesizer {
    /// A synthesizer that discards its log output.
    #[must_use]
    pub fn new(config: SynthesisConfig) -> Self {
        Self {
            config,
            logger: Logger::root(Discard, o!()),
        }
    }

    #[must_use]
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    pub fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    /// Synthesizes the render routine for a single type.
    pub fn synthesize(&self, request: &SynthesisRequest) -> Result<Synthesis, SynthesisError> {
        let logger = self.logger.new(o!("type" => request.type_name.clone()));

        let Some(type_kind) = request.shape.type_kind() else {
            let err = SynthesisError::NotARecord {
                type_name: request.type_name.clone(),
                shape: request.shape,
            };
            error!(logger, "synthesis rejected"; "error" => %err);
            return Err(err);
        };

        let mut warnings = Vec::new();

        let mask_routine = mask_routine_required(&request.members, request.mask_existence)
            .then_some(MaskRoutine::CONTRACT);

        let warn_on_conflict = request
            .warn_on_conflict
            .unwrap_or(self.config.warn_on_conflict);
        let plan = match decide_render(&request.type_name, request.render_existence, warn_on_conflict) {
            RenderDecision::Synthesize => {
                let (call_super, warning) = resolve_call_super(
                    &request.type_name,
                    request.call_super,
                    request.has_parent,
                    self.config.call_super,
                );
                warnings.extend(warning);
                let opts = RenderOptions {
                    include_names: request
                        .include_names
                        .unwrap_or(self.config.include_field_names),
                    call_super,
                    type_name: request.type_name.clone(),
                    type_kind,
                };
                let plan = assemble(&request.members, &opts);
                debug!(logger, "assembled rendering plan";
                    "steps" => plan.len(),
                    "members" => request.members.len(),
                    "call_super" => call_super);
                Some(plan)
            }
            RenderDecision::KeepGenerated => {
                debug!(logger, "generated render routine already present");
                None
            }
            RenderDecision::SkipUserAuthored(warning) => {
                debug!(logger, "user-authored render routine present");
                warnings.extend(warning);
                None
            }
        };

        if mask_routine.is_some() {
            debug!(logger, "masking routine required");
        }
        for warning in &warnings {
            warn!(logger, "{}", warning);
        }

        Ok(Synthesis {
            type_name: request.type_name.clone(),
            plan,
            mask_routine,
            warnings,
        })
    }

    /// Synthesizes every request in parallel.
    ///
    /// Results are returned in request order; a structural error only fails
    /// its own request.
    pub fn synthesize_batch(
        &self,
        requests: &[SynthesisRequest],
    ) -> Vec<Result<Synthesis, SynthesisError>> {
        requests
            .par_iter()
            .map(|request| self.synthesize(request))
            .collect()
    }
}
