//! Word lexicon backing the built-in sentiment analyzer.
//!
//! Each entry is `(word, valence, subjectivity)`: valence on the [-4, 4] scale
//! used by rule-based intensity analyzers, subjectivity in [0, 1]. Entries are
//! sorted so lookups can binary search.

pub const LEXICON: &[(&str, f64, f64)] = &[
    ("abandoned", -2.1, 0.7),
    ("able", 1.1, 0.6),
    ("accomplished", 2.2, 0.7),
    ("afraid", -2.2, 0.9),
    ("alone", -1.0, 0.6),
    ("amazing", 2.8, 0.9),
    ("angry", -2.3, 1.0),
    ("annoyed", -1.6, 0.9),
    ("anxious", -1.9, 0.9),
    ("appreciate", 1.7, 0.6),
    ("ashamed", -2.1, 0.9),
    ("awesome", 3.1, 1.0),
    ("awful", -2.0, 1.0),
    ("bad", -2.5, 0.67),
    ("beautiful", 2.9, 1.0),
    ("best", 3.2, 0.3),
    ("better", 1.9, 0.5),
    ("bitter", -1.8, 0.8),
    ("bored", -1.1, 0.9),
    ("brave", 2.4, 0.7),
    ("broken", -1.8, 0.5),
    ("burden", -1.9, 0.6),
    ("calm", 1.3, 0.7),
    ("capable", 1.6, 0.6),
    ("care", 2.2, 0.5),
    ("cheerful", 2.5, 0.9),
    ("comfortable", 1.5, 0.7),
    ("confident", 2.2, 0.8),
    ("confused", -1.3, 0.8),
    ("content", 1.5, 0.6),
    ("cool", 1.3, 0.65),
    ("crushed", -2.4, 0.8),
    ("cry", -2.1, 0.8),
    ("crying", -2.1, 0.8),
    ("dead", -3.3, 0.4),
    ("defeated", -2.1, 0.7),
    ("delighted", 3.1, 1.0),
    ("depressed", -2.3, 1.0),
    ("desperate", -2.0, 0.8),
    ("devastated", -3.1, 1.0),
    ("difficult", -1.5, 1.0),
    ("disappointed", -1.9, 0.8),
    ("disaster", -3.1, 0.6),
    ("discouraged", -1.8, 0.8),
    ("disgusted", -2.4, 1.0),
    ("down", -0.5, 0.3),
    ("drained", -1.6, 0.7),
    ("dread", -2.4, 0.9),
    ("easy", 1.9, 0.83),
    ("embarrassed", -1.8, 0.9),
    ("empty", -1.1, 0.5),
    ("encouraged", 1.9, 0.7),
    ("energized", 1.8, 0.7),
    ("enjoy", 2.2, 0.5),
    ("excellent", 2.7, 1.0),
    ("excited", 2.2, 0.75),
    ("exhausted", -1.5, 0.7),
    ("fail", -2.3, 0.6),
    ("failed", -2.3, 0.6),
    ("failure", -2.3, 0.6),
    ("fantastic", 2.6, 0.9),
    ("fear", -2.2, 0.9),
    ("fine", 0.8, 0.5),
    ("frightened", -1.9, 0.9),
    ("frustrated", -2.0, 0.9),
    ("frustrating", -1.9, 0.9),
    ("fun", 2.3, 0.2),
    ("furious", -2.7, 1.0),
    ("glad", 2.0, 1.0),
    ("good", 1.9, 0.6),
    ("grateful", 2.0, 0.8),
    ("great", 3.1, 0.75),
    ("grief", -2.2, 0.8),
    ("guilty", -1.8, 0.8),
    ("happy", 2.7, 1.0),
    ("hard", -0.4, 0.54),
    ("hate", -2.7, 0.9),
    ("heartbroken", -3.0, 1.0),
    ("helpful", 1.8, 0.5),
    ("helpless", -2.0, 0.8),
    ("hope", 1.9, 0.6),
    ("hopeful", 1.9, 0.7),
    ("hopeless", -2.0, 0.9),
    ("horrible", -2.5, 1.0),
    ("hurt", -2.4, 0.8),
    ("hurting", -2.4, 0.8),
    ("ignored", -1.6, 0.6),
    ("insecure", -1.6, 0.8),
    ("inspired", 2.2, 0.8),
    ("irritated", -1.8, 0.9),
    ("isolated", -1.6, 0.6),
    ("jealous", -2.0, 0.9),
    ("joy", 2.8, 0.8),
    ("kind", 2.4, 0.9),
    ("lonely", -1.5, 0.8),
    ("lost", -1.3, 0.5),
    ("love", 3.2, 0.6),
    ("loved", 2.9, 0.8),
    ("lucky", 2.0, 1.0),
    ("mad", -2.2, 1.0),
    ("miserable", -2.2, 1.0),
    ("nervous", -1.1, 1.0),
    ("nice", 1.8, 1.0),
    ("numb", -1.2, 0.6),
    ("ok", 0.9, 0.5),
    ("okay", 0.9, 0.5),
    ("optimistic", 2.0, 0.8),
    ("overwhelmed", -1.7, 0.8),
    ("overwhelming", -1.7, 0.8),
    ("pain", -2.3, 0.7),
    ("painful", -2.3, 0.8),
    ("panic", -2.3, 0.9),
    ("peaceful", 2.2, 0.7),
    ("perfect", 2.7, 1.0),
    ("pleased", 1.9, 0.9),
    ("positive", 2.3, 0.55),
    ("problem", -1.7, 0.3),
    ("progress", 1.8, 0.4),
    ("proud", 2.1, 1.0),
    ("regret", -1.9, 0.8),
    ("rejected", -1.8, 0.7),
    ("relaxed", 2.2, 0.7),
    ("relieved", 1.9, 0.8),
    ("resentful", -2.1, 0.9),
    ("sad", -2.1, 1.0),
    ("safe", 1.9, 0.5),
    ("scared", -1.9, 0.9),
    ("shame", -2.2, 0.8),
    ("sick", -2.3, 0.86),
    ("sorry", -0.3, 1.0),
    ("stressed", -1.8, 0.8),
    ("stressful", -1.8, 0.8),
    ("strong", 2.3, 0.73),
    ("struggle", -1.6, 0.6),
    ("struggling", -1.6, 0.6),
    ("stuck", -1.3, 0.6),
    ("suffering", -2.4, 0.8),
    ("supported", 1.9, 0.6),
    ("terrible", -2.1, 1.0),
    ("terrified", -2.6, 1.0),
    ("thankful", 2.1, 0.8),
    ("thrilled", 2.9, 1.0),
    ("tired", -1.2, 0.7),
    ("trapped", -2.0, 0.7),
    ("trust", 2.3, 0.5),
    ("ugly", -2.3, 1.0),
    ("unfair", -2.1, 0.8),
    ("unhappy", -1.8, 0.9),
    ("upset", -1.6, 0.9),
    ("useless", -1.8, 0.6),
    ("valued", 1.9, 0.6),
    ("wonderful", 2.7, 1.0),
    ("worried", -1.2, 0.9),
    ("worry", -1.9, 0.8),
    ("worse", -2.1, 0.6),
    ("worst", -3.1, 1.0),
    ("worthless", -1.9, 0.8),
    ("wrong", -2.1, 0.9),
];

/// Look up `word` (already lowercased, punctuation stripped)
pub fn lookup(word: &str) -> Option<(f64, f64)> {
    LEXICON
        .binary_search_by(|(entry, _, _)| entry.cmp(&word))
        .ok()
        .map(|index| (LEXICON[index].1, LEXICON[index].2))
}

/// Words that invert the sentiment of the following words
pub const NEGATORS: &[&str] = &[
    "ain't", "aint", "can't", "cannot", "cant", "didn't", "didnt", "doesn't", "doesnt", "don't",
    "dont", "hardly", "isn't", "isnt", "never", "no", "nobody", "none", "nor", "not", "nothing",
    "nowhere", "wasn't", "wasnt", "without", "won't", "wont", "wouldn't", "wouldnt",
];

/// Degree modifiers that amplify the next sentiment word
pub const BOOSTERS: &[&str] = &[
    "absolutely", "completely", "deeply", "entirely", "especially", "extremely", "incredibly",
    "really", "so", "super", "totally", "truly", "very",
];

/// Degree modifiers that soften the next sentiment word
pub const DAMPENERS: &[&str] = &[
    "barely", "kinda", "kindof", "less", "marginally", "partly", "slightly", "somewhat", "sorta",
];
