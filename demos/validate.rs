use referenz::*;

fn main() {
    let candidates = [
        " RF18 5390 0754 7034 ",
        "RF17539007547034",
        "+++020/3430/57642+++",
        "020343053497",
        "2023 0000 98",
        "2023/0000/98",
        "1234567897",
        "5000056789012345",
        "0123456788",
    ];

    println!("{:<40} {:>5}", "candidate", "valid");
    for candidate in candidates {
        println!(
            "{:<40} {:>5}",
            format!("{candidate:?}"),
            is_valid_structured_reference(candidate)
        );
    }

    // Per-format checks when the family is already known
    println!();
    println!(
        "ISO check on the Belgian reference: {}",
        is_valid_structured_reference_iso("+++020/3430/57642+++")
    );
    println!(
        "BE check on the same reference:     {}",
        is_valid_structured_reference_be("+++020/3430/57642+++")
    );
}
