use referenz::*;

fn main() {
    let candidates = [
        "RF18 5390 0754 7034",
        "rf18539007547034",
        "+++020/3430/57642+++",
        "020343053497",
        "2023 0000 98",
        "1234567897",
        "0123456788",
        "RF17539007547034",
        "2023/0000/98",
        "hello world",
    ];

    for candidate in candidates {
        match StructuredReference::parse(candidate) {
            Ok(reference) => println!(
                "{candidate:?} -> {} ({})",
                reference,
                reference.format()
            ),
            Err(err) => println!("{candidate:?} -> rejected: {err}"),
        }
    }
}
