//! Mapping of model-extracted cuisine names onto the known cuisine set

/// Cuisines the catalog is organised around
pub const KNOWN_CUISINES: &[&str] = &[
    "indian", "italian", "chinese", "mexican", "thai", "japanese", "american",
];

/// Sentinel for a cuisine that could not be matched
pub const UNKNOWN_CUISINE: &str = "unknown";

/// Largest edit distance still treated as a misspelling
pub const DEFAULT_MAX_EDIT_DISTANCE: usize = 2;

/// Normalizes free-form cuisine names.
///
/// Resolution order: exact match, then the first known cuisine containing the
/// input, then the closest known cuisine within `max_edit_distance` edits
/// (ties resolved by table order), else [`UNKNOWN_CUISINE`].
#[derive(Debug, Clone)]
pub struct CuisineNormalizer {
    known: Vec<String>,
    max_edit_distance: usize,
}

impl Default for CuisineNormalizer {
    fn default() -> Self {
        Self::new(KNOWN_CUISINES.iter().map(|c| c.to_string()).collect())
    }
}

impl CuisineNormalizer {
    pub fn new(known: Vec<String>) -> Self {
        Self {
            known: known.into_iter().map(|c| c.to_lowercase()).collect(),
            max_edit_distance: DEFAULT_MAX_EDIT_DISTANCE,
        }
    }

    pub fn with_max_edit_distance(mut self, distance: usize) -> Self {
        self.max_edit_distance = distance;
        self
    }

    pub fn normalize(&self, extracted: &str) -> String {
        let candidate = extracted.trim().to_lowercase();

        if candidate.is_empty() {
            return UNKNOWN_CUISINE.to_string();
        }

        if self.known.iter().any(|c| *c == candidate) {
            return candidate;
        }

        if let Some(cuisine) = self.known.iter().find(|c| c.contains(&candidate)) {
            return cuisine.clone();
        }

        self.known
            .iter()
            .map(|c| (edit_distance(c, &candidate), c))
            .filter(|(distance, _)| *distance <= self.max_edit_distance)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, c)| c.clone())
            .unwrap_or_else(|| UNKNOWN_CUISINE.to_string())
    }
}

/// Capitalized form used in customer-facing text ("italian" -> "Italian")
pub fn display_cuisine(cuisine: &str) -> String {
    let mut chars = cuisine.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Levenshtein distance over chars
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        current[0] = i + 1;

        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != *cb);
            current[j + 1] = substitution
                .min(previous[j + 1] + 1)
                .min(current[j] + 1);
        }

        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}
