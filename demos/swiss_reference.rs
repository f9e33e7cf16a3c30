use referenz::{is_valid_reference_isr, is_valid_reference_qrr};

fn main() {
    let candidates = [
        "21 00000 00003 13947 14300 09017",
        "210000000003139471430009018",
        "12345678903",
        "95",
    ];

    println!("{:<36} {:>5} {:>5}", "candidate", "ISR", "QRR");
    for candidate in candidates {
        println!(
            "{:<36} {:>5} {:>5}",
            format!("{candidate:?}"),
            is_valid_reference_isr(candidate),
            is_valid_reference_qrr(candidate)
        );
    }
}
