use desensitize::Desensitize;

#[derive(Desensitize)]
#[desensitize(call_super = true)]
struct Orphan {
    id: u32,
}

fn main() {}
