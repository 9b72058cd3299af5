use desensitize::Desensitize;

#[derive(Desensitize)]
struct Base {
    id: u32,
}

// Builds with a warning that the parent is not rendered.
#[derive(Desensitize)]
#[desensitize(call_super_policy = "warn")]
struct Child {
    #[desensitize(parent)]
    #[allow(dead_code)]
    base: Base,
    #[desensitize(mobile)]
    phone: String,
}

fn main() {
    let child = Child {
        base: Base { id: 1 },
        phone: "13812345678".to_string(),
    };
    assert_eq!(child.to_string(), "Child(phone=138****5678)");
}
