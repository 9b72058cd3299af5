use desensitize::Desensitize;

#[derive(Desensitize)]
struct Holder<T> {
    #[desensitize(id_card_no)]
    id_card: String,
    #[desensitize(bank_card_no)]
    card: Option<String>,
    value: T,
    items: Vec<T>,
}

fn main() {
    let holder = Holder {
        id_card: "110101199003071234".to_string(),
        card: None,
        value: 'x',
        items: vec!['y', 'z'],
    };
    assert_eq!(
        holder.to_string(),
        "Holder(id_card=110101********1234, card=null, value=x, items=[y, z])"
    );
}
