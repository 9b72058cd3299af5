use desensitize::Desensitize;

#[derive(Desensitize)]
struct Contacts {
    #[desensitize(mobile)]
    phones: Vec<String>,
}

fn main() {}
