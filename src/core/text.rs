/// Administrative-unit suffixes stripped during address comparison.
/// Longer tokens first so that 특별시 is not left as a dangling 특별.
const ADMIN_UNIT_TOKENS: [&str; 5] = ["특별시", "광역시", "시", "군", "구"];

/// Levenshtein edit distance between two strings
///
/// Comparison is case-insensitive and ignores surrounding whitespace.
/// Operates on chars, so multi-byte place names count per character.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.trim().to_lowercase().chars().collect();
    let b: Vec<char> = b.trim().to_lowercase().chars().collect();

    let (len_a, len_b) = (a.len(), b.len());
    if len_a == 0 {
        return len_b;
    }
    if len_b == 0 {
        return len_a;
    }

    // DP over a (len_a + 1) x (len_b + 1) table, one row at a time
    let mut prev: Vec<usize> = (0..=len_b).collect();
    let mut curr = vec![0usize; len_b + 1];

    for i in 1..=len_a {
        curr[0] = i;
        for j in 1..=len_b {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[len_b]
}

/// Normalize an address for equality comparison
///
/// Lowercases, collapses internal whitespace, strips bracket characters and
/// Korean administrative-unit suffixes. Tuned for the Korean provider
/// addresses this engine receives; not a general address parser.
pub fn normalize_address(address: &str) -> String {
    let lowered = address.to_lowercase();

    // Collapse runs of whitespace to single spaces
    let collapsed = lowered.split_whitespace().collect::<Vec<_>>().join(" ");

    // Strip parentheses and brackets (annotations like floor numbers)
    let mut stripped: String = collapsed
        .chars()
        .filter(|c| !matches!(c, '(' | ')' | '[' | ']'))
        .collect();

    for token in ADMIN_UNIT_TOKENS {
        stripped = stripped.replace(token, "");
    }

    stripped.trim().to_string()
}
