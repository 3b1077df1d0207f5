/// Avatar initials: first letter of the first two words, uppercased.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect();

    if letters.is_empty() {
        "U".to_string()
    } else {
        letters
    }
}

/// Whether a status label renders as a positive (green) pill
pub fn is_positive_status(value: &str) -> bool {
    matches!(
        value.trim().to_uppercase().as_str(),
        "ACTIVE" | "COMPLETED" | "YES"
    )
}

/// Footer line under a table
pub fn entries_summary(count: usize) -> String {
    format!("Showing 1 to {} of {} entries", count, count)
}
