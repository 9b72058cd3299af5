use desensitize::Desensitize;

#[derive(Desensitize)]
struct Account {
    #[desensitize(cipher = "#")]
    number: String,
}

fn main() {}
