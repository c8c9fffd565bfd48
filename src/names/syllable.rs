use rand::Rng;

// Syllable pools for invented names, split so a word always alternates
// onset-vowel-coda and stays pronounceable.
const ONSETS: &[&str] = &[
    "b", "br", "c", "cr", "d", "dr", "f", "g", "gl", "gr", "h", "k", "l", "m", "n", "r", "s",
    "th", "v", "z",
];

const VOWELS: &[&str] = &["a", "e", "i", "o", "u", "ae", "ia", "io"];

const CODAS: &[&str] = &["", "l", "n", "r", "s", "th", "nd", "rn", "m", "g"];

/// Invent a pronounceable word of 2–3 syllables, capitalized.
pub fn random_word(rng: &mut dyn rand::RngCore) -> String {
    let syllables = rng.random_range(2..=3);
    let mut word = String::new();
    for _ in 0..syllables {
        word.push_str(ONSETS[rng.random_range(0..ONSETS.len())]);
        word.push_str(VOWELS[rng.random_range(0..VOWELS.len())]);
        word.push_str(CODAS[rng.random_range(0..CODAS.len())]);
    }
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().to_string() + chars.as_str(),
    }
}

/// Fallback artifact name when no curated entry is available: either
/// `'Word'` or `of Word`, at random.
pub fn fallback_name(rng: &mut dyn rand::RngCore) -> String {
    let word = random_word(rng);
    if rng.random_bool(0.5) {
        format!("'{word}'")
    } else {
        format!("of {word}")
    }
}
