use desensitize::Desensitize;

#[derive(Desensitize)]
union Bits {
    int: u32,
    float: f32,
}

fn main() {}
