#![deny(non_shorthand_field_patterns, warnings)]

use desensitize::Desensitize;

#[derive(Desensitize)]
struct Base {
    id: u32,
}

#[derive(Desensitize)]
#[desensitize(call_super = true)]
enum Kind {
    A {
        #[desensitize(parent)]
        base: Base,
        n: u8,
        f: &'static str,
    },
}

fn main() {
    let kind = Kind::A {
        base: Base { id: 1 },
        n: 2,
        f: "x",
    };
    assert_eq!(kind.to_string(), "Kind.A(super=Base(id=1), n=2, f=x)");
}
