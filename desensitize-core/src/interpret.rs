//! Reference interpreter for rendering plans.
//!
//! Emitted code must produce exactly what [`render`] produces for the same
//! plan and values.

use std::fmt::{self, Write as _};

use crate::{
    model::MemberDescriptor,
    plan::{RenderStep, RenderingPlan},
    value::{RenderValue, NULL_TOKEN},
};

/// A live instance the interpreter reads from.
pub trait RenderSource {
    /// Fetches the value of `member`, through its accessor where it has one.
    fn member_value(&self, member: &MemberDescriptor) -> RenderValue;

    /// The variant name of an enum value. Only read for enum plans.
    fn variant_name(&self) -> &str {
        ""
    }

    /// The parent's rendered text. Only read for plans with a super call.
    fn render_super(&self) -> String {
        String::new()
    }
}

/// Renders `instance` according to `plan`.
pub fn render<S: RenderSource + ?Sized>(plan: &RenderingPlan, instance: &S) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_rendered(&mut out, plan, instance);
    out
}

/// Writes the rendering of `instance` into `out`.
pub fn write_rendered<W, S>(out: &mut W, plan: &RenderingPlan, instance: &S) -> fmt::Result
where
    W: fmt::Write,
    S: RenderSource + ?Sized,
{
    for step in plan {
        match step {
            RenderStep::Literal { text } => out.write_str(text)?,
            RenderStep::EnumSelfName => out.write_str(instance.variant_name())?,
            RenderStep::SuperCall => out.write_str(&instance.render_super())?,
            RenderStep::MemberValue { member, masked } => {
                let value = instance.member_value(member);
                match member.masking.as_ref().filter(|_| *masked) {
                    Some(config) => {
                        let text = value.to_text().map(|text| config.apply(&text));
                        out.write_str(text.as_deref().unwrap_or(NULL_TOKEN))?;
                    }
                    None => write!(out, "{value}")?,
                }
            }
            RenderStep::ArrayStringify { member, deep } => {
                instance.member_value(member).write_joined(out, *deep)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{render, RenderSource};
    use crate::{
        model::{MaskingConfig, MemberDescriptor, RenderOptions, ValueCategory},
        plan::assemble,
        value::{RenderValue, ToRenderValue},
    };

    struct Instance {
        variant: &'static str,
        parent: &'static str,
        values: HashMap<&'static str, RenderValue>,
    }

    impl Instance {
        fn new(values: &[(&'static str, RenderValue)]) -> Self {
            Self {
                variant: "",
                parent: "",
                values: values.iter().cloned().collect(),
            }
        }
    }

    impl RenderSource for Instance {
        fn member_value(&self, member: &MemberDescriptor) -> RenderValue {
            self.values
                .get(member.name.as_str())
                .cloned()
                .unwrap_or(RenderValue::Null)
        }

        fn variant_name(&self) -> &str {
            self.variant
        }

        fn render_super(&self) -> String {
            self.parent.to_owned()
        }
    }

    #[test]
    fn renders_masked_member_with_names() {
        let members = [
            MemberDescriptor::field("a").with_masking(MaskingConfig::new(1, 1)),
            MemberDescriptor::field("b"),
        ];
        let plan = assemble(&members, &RenderOptions::class("X"));
        let instance = Instance::new(&[("a", "abcde".to_render_value()), ("b", 7_i32.to_render_value())]);
        assert_eq!(render(&plan, &instance), "X(a=a***e, b=7)");
    }

    #[test]
    fn renders_empty_class() {
        let plan = assemble(&[], &RenderOptions::class("TypeName"));
        assert_eq!(render(&plan, &Instance::new(&[])), "TypeName()");
    }

    #[test]
    fn renders_empty_enum_variant() {
        let plan = assemble(&[], &RenderOptions::enumeration("TypeName"));
        let mut instance = Instance::new(&[]);
        instance.variant = "VARIANT";
        assert_eq!(render(&plan, &instance), "TypeName.VARIANT");
    }

    #[test]
    fn renders_enum_variant_with_members() {
        let members = [MemberDescriptor::field("code")];
        let plan = assemble(&members, &RenderOptions::enumeration("Status"));
        let mut instance = Instance::new(&[("code", 404_u16.to_render_value())]);
        instance.variant = "NotFound";
        assert_eq!(render(&plan, &instance), "Status.NotFound(code=404)");
    }

    #[test]
    fn renders_super_call() {
        let members = [MemberDescriptor::field("level")];
        let plan = assemble(&members, &RenderOptions::class("Admin").with_call_super(true));
        let mut instance = Instance::new(&[("level", 3_u8.to_render_value())]);
        instance.parent = "User(name=J***)";
        assert_eq!(render(&plan, &instance), "Admin(super=User(name=J***), level=3)");
    }

    #[test]
    fn masked_absent_value_renders_null() {
        let members = [MemberDescriptor::field("phone").with_masking(MaskingConfig::new(3, 4))];
        let plan = assemble(&members, &RenderOptions::class("Contact"));
        assert_eq!(render(&plan, &Instance::new(&[])), "Contact(phone=null)");
    }

    #[test]
    fn renders_arrays_by_depth() {
        let members = [
            MemberDescriptor::field("flat").with_category(ValueCategory::PrimitiveArray),
            MemberDescriptor::field("deep").with_category(ValueCategory::ObjectArray),
            MemberDescriptor::field("missing").with_category(ValueCategory::ObjectArray),
        ];
        let plan = assemble(&members, &RenderOptions::class("Grid").with_include_names(false));
        let instance = Instance::new(&[
            ("flat", vec![1_i32, 2, 3].to_render_value()),
            ("deep", vec![vec!["a"], vec!["b", "c"]].to_render_value()),
        ]);
        assert_eq!(render(&plan, &instance), "Grid([1, 2, 3], [[a], [b, c]], null)");
    }

    #[test]
    fn unmasked_step_ignores_masking_config() {
        let member = MemberDescriptor::field("a").with_masking(MaskingConfig::new(0, 0));
        let plan = crate::plan::RenderingPlan::from_json(
            &serde_json::json!([
                { "step": "literal", "text": "T(" },
                { "step": "member_value", "member": member, "masked": false },
                { "step": "literal", "text": ")" },
            ])
            .to_string(),
        )
        .unwrap();
        let instance = Instance::new(&[("a", "plain".to_render_value())]);
        assert_eq!(render(&plan, &instance), "T(plain)");
    }
}
