use desensitize::Desensitize;

#[derive(Desensitize)]
struct Base {
    id: u32,
}

#[derive(Desensitize)]
#[desensitize(call_super_policy = "call")]
enum Shape {
    Circle {
        #[desensitize(parent)]
        base: Base,
        radius: f64,
    },
    Dot(#[desensitize(parent)] Base),
    Empty,
}

fn main() {
    let circle = Shape::Circle {
        base: Base { id: 1 },
        radius: 2.5,
    };
    assert_eq!(circle.to_string(), "Shape.Circle(super=Base(id=1), radius=2.5)");
    assert_eq!(Shape::Dot(Base { id: 2 }).to_string(), "Shape.Dot(super=Base(id=2))");
    assert_eq!(Shape::Empty.to_string(), "Shape.Empty");
}
