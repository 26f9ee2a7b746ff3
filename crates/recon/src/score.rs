use strsim::normalized_levenshtein;

/// Levenshtein similarity on a 0–100 integer scale.
pub fn ratio(a: &str, b: &str) -> u8 {
    (normalized_levenshtein(a, b) * 100.0).round() as u8
}

/// Token-order-insensitive similarity: lowercase, split on anything
/// non-alphanumeric, sort the tokens, and compare the re-joined strings.
/// Rewards free-text memos whose words arrive in a different order.
pub fn token_sort_ratio(a: &str, b: &str) -> u8 {
    ratio(&sorted_tokens(a), &sorted_tokens(b))
}

fn sorted_tokens(s: &str) -> String {
    let mut tokens: Vec<String> = s
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect();
    tokens.sort();
    tokens.join(" ")
}

/// Substring-aware similarity: slide a window the length of the shorter
/// string across the longer and keep the best-aligned score. Better for
/// short codes/fragments where one string is a prefix of the other.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    let (shorter, longer) = if a.chars().count() <= b.chars().count() {
        (a.as_str(), b.as_str())
    } else {
        (b.as_str(), a.as_str())
    };

    if shorter.is_empty() {
        return if longer.is_empty() { 100 } else { 0 };
    }

    let short_len = shorter.chars().count();
    let long_chars: Vec<char> = longer.chars().collect();

    let mut best = 0u8;
    for start in 0..=(long_chars.len() - short_len) {
        let window: String = long_chars[start..start + short_len].iter().collect();
        best = best.max(ratio(shorter, &window));
        if best == 100 {
            break;
        }
    }
    best
}
