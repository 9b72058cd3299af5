use desensitize::Desensitize;

#[derive(Desensitize)]
#[desensitize(include_names = true)]
struct Pair(#[desensitize(rename = "left")] u8, #[desensitize(name)] String);

fn main() {
    let pair = Pair(1, "Bob".to_string());
    assert_eq!(pair.to_string(), "Pair(left=1, 1=B**)");
}
