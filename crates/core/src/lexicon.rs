//! Fixed word lists used by the analyzers.
//!
//! All entries are lowercase. Multi-word entries are phrases and are matched
//! as contiguous runs of tokens (or as substrings for [`WEASEL_WORDS`]).

use crate::sentiment::Emotion;

/// Common English function words excluded from topics and keywords.
pub const STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours", "yourself", "yourselves",
    "he", "him", "his", "himself", "she", "her", "hers", "herself", "it", "its", "itself", "they", "them", "their",
    "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "these", "those", "am", "is", "are",
    "was", "were", "be", "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by", "for", "with", "about",
    "against", "between", "into", "through", "during", "before", "after", "above", "below", "to", "from", "up",
    "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once", "here", "there", "when",
    "where", "why", "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
    "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will", "just", "don",
    "should", "now",
];

/// Sensational headline phrases, matched as case-insensitive substrings.
pub const CLICKBAIT_PHRASES: &[&str] = &[
    "you won't believe",
    "mind blowing",
    "shocking",
    "jaw-dropping",
    "unbelievable",
    "incredible",
    "insane",
    "wow",
    "amazing",
    "secret",
    "trick",
    "this is why",
    "here's why",
    "you need to know",
    "can change your life",
    "will make you",
];

pub const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "wonderful", "fantastic", "amazing", "love", "best", "positive", "happy", "joy",
    "joyful", "beautiful", "nice", "superior", "perfect", "impressive", "remarkable", "outstanding", "superb",
    "brilliant", "awesome", "delightful", "favorable", "encouraging", "beneficial", "successful", "helpful",
    "pleasant", "enjoyable", "satisfying", "terrific", "exceptional", "marvelous", "praise", "recommended", "glad",
    "pleased", "excited", "thrilled", "blessing", "fortunate", "celebrated", "acclaimed", "worthy", "magnificent",
    "splendid",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "horrible", "awful", "poor", "disappointing", "hate", "worst", "negative", "sad",
    "unfortunately", "ugly", "inferior", "defective", "inadequate", "unimpressive", "mediocre", "subpar", "sucks",
    "pathetic", "atrocious", "appalling", "dreadful", "lousy", "unpleasant", "unfavorable", "discouraging",
    "harmful", "unsuccessful", "unhelpful", "frustrating", "annoying", "horrific", "criticism", "problem", "issue",
    "challenging", "broken", "damaged", "fails", "unfortunate", "displeased", "angry", "upset", "concerning",
    "adverse", "tragic",
];

/// Words that multiply the sentiment weight of the following token.
pub const POLARITY_INTENSIFIERS: &[&str] = &[
    "very", "extremely", "incredibly", "absolutely", "completely", "highly", "especially", "particularly",
    "utterly", "really", "totally", "thoroughly", "exceedingly", "remarkably", "truly", "so", "such", "quite",
    "enormously",
];

/// Words that flip the polarity of the following token. Contractions such
/// as "isn't" reach this list as "not".
pub const NEGATORS: &[&str] = &[
    "not", "no", "never", "none", "neither", "nor", "nothing", "nowhere", "hardly", "scarcely", "barely",
];

pub const EMOTIONAL_WORDS: &[&str] = &[
    "horrible", "terrible", "amazing", "awesome", "fantastic", "wonderful", "awful", "disgusting", "outrageous",
    "shocking", "appalling", "astonishing", "incredible", "unbelievable", "stunning", "remarkable", "extraordinary",
    "heartbreaking", "devastating", "tragic", "catastrophic", "horrific",
];

pub const PERSUASIVE_WORDS: &[&str] = &[
    "clearly",
    "obviously",
    "undoubtedly",
    "certainly",
    "definitely",
    "absolutely",
    "unquestionably",
    "indisputably",
    "without doubt",
    "surely",
    "evidently",
    "plainly",
    "of course",
    "no doubt",
    "naturally",
    "inevitably",
    "incontrovertibly",
];

pub const LOADED_LANGUAGE: &[&str] = &[
    "radical",
    "extreme",
    "fanatical",
    "fundamentalist",
    "terrorist",
    "illegal",
    "alien",
    "invader",
    "regime",
    "dictator",
    "tyranny",
    "freedom fighter",
    "patriot",
    "hero",
    "coward",
    "traitor",
    "enemy",
];

/// Vague attributions, matched as substrings of the lowercase text.
pub const WEASEL_WORDS: &[&str] = &[
    "some",
    "many",
    "most",
    "experts say",
    "critics claim",
    "people think",
    "it is reported",
    "it is believed",
    "sources say",
    "allegedly",
    "reportedly",
    "apparently",
    "seemingly",
    "possibly",
    "it has been said",
    "it is said",
];

/// Intensifiers counted as a bias signal (distinct from [`POLARITY_INTENSIFIERS`]).
pub const SUBJECTIVE_INTENSIFIERS: &[&str] = &[
    "very",
    "extremely",
    "incredibly",
    "highly",
    "exceptionally",
    "terribly",
    "absolutely",
    "completely",
    "totally",
    "utterly",
    "really",
    "quite",
    "thoroughly",
    "entirely",
    "fully",
    "deeply",
];

const FEAR_WORDS: &[&str] = &[
    "fear", "afraid", "scared", "terrified", "frightened", "panic", "terror", "horror", "dread", "alarmed",
    "anxious", "worried", "concerned", "threatening", "danger", "dangerous", "warning", "crisis", "threat", "risk",
    "emergency", "suspicious", "vulnerable", "insecure", "unsafe", "uncertain", "uneasy",
];

const ANGER_WORDS: &[&str] = &[
    "anger", "angry", "furious", "outraged", "rage", "fury", "irritated", "annoyed", "hostile", "mad", "hatred",
    "hate", "resent", "incensed", "enraged", "protest", "confrontation", "clash", "controversy", "tensions",
    "dispute", "conflict", "aggressive", "violent", "attacked", "condemned", "criticized",
];

const JOY_WORDS: &[&str] = &[
    "joy", "happy", "happiness", "delighted", "pleased", "glad", "elated", "jubilant", "celebrated", "cheered",
    "optimistic", "hopeful", "positive", "thrilled", "excited", "triumph", "victorious", "success", "achievement",
    "progress", "gain", "benefit", "improvement", "recovery", "breakthrough",
];

const SADNESS_WORDS: &[&str] = &[
    "sad", "sorrow", "grief", "mourning", "unhappy", "depressed", "depression", "disappointing", "disappointed",
    "upset", "regret", "miserable", "heartbroken", "devastated", "suffering", "victim", "tragedy", "tragic", "loss",
    "lost", "failure", "failed", "defeat", "setback", "crisis", "damage",
];

const SURPRISE_WORDS: &[&str] = &[
    "surprise", "surprised", "astonished", "amazed", "shocking", "shocked", "unexpected", "sudden", "remarkable",
    "extraordinary", "unprecedented", "unusual", "rare", "mystery", "mysterious", "breakthrough", "discovery",
    "revealed", "uncovered", "bombshell", "twist", "dramatic",
];

const DISGUST_WORDS: &[&str] = &[
    "disgust", "disgusting", "repulsive", "revolting", "outrageous", "offensive", "scandal", "scandalous",
    "controversial", "unethical", "immoral", "corrupt", "corruption", "violation", "misconduct", "inappropriate",
    "accusations", "alleged", "controversy", "criticized", "condemned",
];

/// Returns the lexicon for one emotion category.
pub fn emotion_words(emotion: Emotion) -> &'static [&'static str] {
    match emotion {
        Emotion::Fear => FEAR_WORDS,
        Emotion::Anger => ANGER_WORDS,
        Emotion::Joy => JOY_WORDS,
        Emotion::Sadness => SADNESS_WORDS,
        Emotion::Surprise => SURPRISE_WORDS,
        Emotion::Disgust => DISGUST_WORDS,
    }
}

pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(&word)
}
