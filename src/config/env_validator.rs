//! Environment variable validation with helpful warnings
//!
//! Invalid `VIEWC_*` values never abort startup: they are reported with a
//! typo suggestion and the configured value is kept.

/// Validator for environment variable values
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    /// Create a new validator for the given environment variable
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse a value, returning `fallback` (with a warning) if it is invalid
    pub fn parse<T, F>(&self, value: &str, parser: F, fallback: T) -> T
    where
        F: Fn(&str) -> Option<T>,
    {
        match parser(value.trim()) {
            Some(parsed) => parsed,
            None => {
                let hint = self
                    .suggest(value)
                    .map(|s| format!(" (did you mean '{}'?)", s))
                    .unwrap_or_default();
                tracing::warn!(
                    "ignoring invalid {} value '{}'{}; valid values: {}",
                    self.var_name,
                    value,
                    hint,
                    self.valid_values.join(", ")
                );
                fallback
            }
        }
    }

    /// Closest valid value within two edits
    pub fn suggest(&self, value: &str) -> Option<&'a str> {
        let input = value.trim().to_lowercase();
        closest(&input, self.valid_values).filter(|s| *s != input)
    }
}

/// Closest candidate to `input` within two edits
pub fn closest<'c>(input: &str, candidates: &[&'c str]) -> Option<&'c str> {
    let mut best: Option<(&str, usize)> = None;
    for &candidate in candidates {
        let dist = levenshtein(input, candidate);
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((candidate, dist)),
        }
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate),
        _ => None,
    }
}

/// Simple Levenshtein distance for typo detection
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    if a_bytes.is_empty() {
        return b_bytes.len();
    }
    if b_bytes.is_empty() {
        return a_bytes.len();
    }

    let mut prev_row: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr_row: Vec<usize> = vec![0; b_bytes.len() + 1];

    for (i, a_char) in a_bytes.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, b_char) in b_bytes.iter().enumerate() {
            let cost = if a_char == b_char { 0 } else { 1 };
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_bytes.len()]
}
