/// Remove all ASCII whitespace from a candidate reference.
///
/// Banks and payment files freely insert grouping spaces into references
/// ("RF18 5390 0754 7034"), so every checker strips them before looking
/// at structure. Non-ASCII whitespace stays in place and is rejected by
/// the per-format alphabet checks.
pub fn sanitize_structured_reference(reference: &str) -> String {
    reference
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect()
}
