//! Word lists used by the scoring modules.
//!
//! All lists live in a single [`Lexicon`] value that scorers receive by
//! reference, so the scoring functions stay pure and tests can swap in a
//! small hand-built lexicon. [`Lexicon::english`] is the built-in table.
//!
//! Entries are matched against tokens from [`crate::text::extract_words`],
//! which splits contractions at the apostrophe. That is why fragments like
//! `t` (from `don't`, `isn't`) appear among the negations and `ll`, `ve`
//! among the informal markers.

use std::collections::HashSet;
use std::sync::LazyLock;

/// A named group of words: an emotion or a topic.
#[derive(Debug, Clone)]
pub struct Category {
    /// Machine name (`"joy"`, `"technology"`).
    pub name: &'static str,
    /// Display label (`"Joy"`, `"Technology"`).
    pub label: &'static str,
    /// Member words.
    pub words: HashSet<&'static str>,
}

impl Category {
    /// Build a category from a word slice.
    pub fn new(name: &'static str, label: &'static str, words: &[&'static str]) -> Self {
        Self {
            name,
            label,
            words: word_set(words),
        }
    }

    /// Whether `word` belongs to this category.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

/// Every word list the scorers consult.
///
/// Category order is significant: it breaks ties between emotion tones and
/// between topic categories.
#[derive(Debug, Clone)]
pub struct Lexicon {
    /// Words with positive polarity.
    pub positive: HashSet<&'static str>,
    /// Words with negative polarity.
    pub negative: HashSet<&'static str>,
    /// Words that flip the polarity of the next word.
    pub negations: HashSet<&'static str>,
    /// Words that strengthen the next word.
    pub intensifiers: HashSet<&'static str>,
    /// Words that weaken the next word.
    pub diminishers: HashSet<&'static str>,
    /// Emotion categories, in tie-break order.
    pub emotions: Vec<Category>,
    /// Markers of formal register.
    pub formal: HashSet<&'static str>,
    /// Markers of informal register, contraction fragments included.
    pub informal: HashSet<&'static str>,
    /// Function words ignored by topic detection.
    pub stop_words: HashSet<&'static str>,
    /// Topic categories, in tie-break order.
    pub topics: Vec<Category>,
}

/// Build a set from a word slice.
pub fn word_set(words: &[&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

static ENGLISH: LazyLock<Lexicon> = LazyLock::new(|| Lexicon {
    positive: word_set(POSITIVE),
    negative: word_set(NEGATIVE),
    negations: word_set(NEGATIONS),
    intensifiers: word_set(INTENSIFIERS),
    diminishers: word_set(DIMINISHERS),
    emotions: vec![
        Category::new("joy", "Joy", JOY),
        Category::new("love", "Love", LOVE),
        Category::new("surprise", "Surprise", SURPRISE),
        Category::new("anger", "Anger", ANGER),
        Category::new("sadness", "Sadness", SADNESS),
        Category::new("fear", "Fear", FEAR),
        Category::new("disgust", "Disgust", DISGUST),
        Category::new("trust", "Trust", TRUST),
    ],
    formal: word_set(FORMAL),
    informal: word_set(INFORMAL),
    stop_words: word_set(STOP_WORDS),
    topics: vec![
        Category::new("technology", "Technology", TECHNOLOGY),
        Category::new("business", "Business", BUSINESS),
        Category::new("education", "Education", EDUCATION),
        Category::new("health", "Health", HEALTH),
        Category::new("politics", "Politics", POLITICS),
        Category::new("entertainment", "Entertainment", ENTERTAINMENT),
        Category::new("sports", "Sports", SPORTS),
        Category::new("environment", "Environment", ENVIRONMENT),
    ],
});

impl Lexicon {
    /// The built-in English lexicon.
    pub fn english() -> &'static Self {
        &ENGLISH
    }
}

const POSITIVE: &[&str] = &[
    "good", "great", "excellent", "amazing", "wonderful", "happy", "love", "best", "beautiful",
    "perfect", "fantastic", "brilliant", "nice", "enjoy", "glad", "pleased", "delightful",
    "superb", "outstanding", "positive", "success", "successful", "impressive", "favorite",
    "helpful", "fun", "exciting", "awesome", "lovely", "better",
];

const NEGATIVE: &[&str] = &[
    "bad", "terrible", "awful", "worst", "hate", "dislike", "poor", "horrible", "disappointing",
    "annoying", "sad", "angry", "ugly", "wrong", "fail", "failure", "broken", "boring",
    "painful", "useless", "worse", "negative", "upset", "nasty", "dreadful", "miserable",
    "problem", "disaster",
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "nobody", "nothing", "neither", "nor", "nowhere", "cannot",
    "without", "t",
];

const INTENSIFIERS: &[&str] = &[
    "very", "really", "extremely", "so", "absolutely", "incredibly", "totally", "completely",
    "highly", "truly", "super", "especially", "deeply", "too",
];

const DIMINISHERS: &[&str] = &[
    "slightly", "somewhat", "barely", "hardly", "little", "fairly", "rather", "mildly",
    "partly", "marginally", "bit", "kinda", "sorta",
];

const JOY: &[&str] = &[
    "happy", "joy", "joyful", "delighted", "glad", "cheerful", "excited", "pleased", "fun",
    "celebrate", "smile", "laugh", "wonderful",
];

const LOVE: &[&str] = &[
    "love", "loved", "lovely", "adore", "affection", "caring", "darling", "romance", "romantic",
    "sweet", "cherish", "heart",
];

const SURPRISE: &[&str] = &[
    "surprise", "surprised", "amazing", "amazed", "astonished", "unexpected", "sudden",
    "shocked", "wow", "startled",
];

const ANGER: &[&str] = &[
    "angry", "anger", "furious", "rage", "hate", "annoyed", "annoying", "irritated", "mad",
    "outraged",
];

const SADNESS: &[&str] = &[
    "sad", "sadness", "unhappy", "depressed", "miserable", "cry", "tears", "grief", "lonely",
    "sorrow", "disappointed", "disappointing",
];

const FEAR: &[&str] = &[
    "afraid", "fear", "scared", "frightened", "terrified", "anxious", "worried", "nervous",
    "panic", "dread",
];

const DISGUST: &[&str] = &[
    "disgust", "disgusting", "gross", "nasty", "revolting", "awful", "horrible", "sick", "vile",
    "repulsive",
];

const TRUST: &[&str] = &[
    "trust", "reliable", "honest", "faithful", "loyal", "confident", "depend", "secure", "safe",
    "believe",
];

const FORMAL: &[&str] = &[
    "therefore", "furthermore", "moreover", "consequently", "nevertheless", "however", "thus",
    "hence", "whereas", "regarding", "pursuant", "accordingly", "subsequently",
    "notwithstanding", "herein", "aforementioned", "commence", "utilize", "facilitate",
    "demonstrate", "sufficient", "obtain", "require", "additionally", "respectively",
    "approximately", "establish", "indicate", "shall", "whom",
];

const INFORMAL: &[&str] = &[
    "gonna", "wanna", "gotta", "kinda", "sorta", "dunno", "lemme", "gimme", "yeah", "yep",
    "nope", "hey", "ok", "okay", "cool", "awesome", "stuff", "lol", "btw", "guys", "ain", "ya",
    "don", "doesn", "didn", "isn", "aren", "wasn", "weren", "won", "couldn", "wouldn",
    "shouldn", "ll", "ve", "re", "m", "d",
];

const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "with", "by", "about",
    "as", "i", "you", "he", "she", "it", "we", "they", "is", "are", "was", "were", "be", "been",
    "being", "have", "has", "had", "do", "does", "did", "of", "from", "that", "this", "these",
    "those",
];

const TECHNOLOGY: &[&str] = &[
    "technology", "software", "computer", "digital", "internet", "data", "code", "programming",
    "algorithm", "network", "device", "online", "cloud", "robot", "artificial", "intelligence",
    "cyber", "hardware", "developer", "rust",
];

const BUSINESS: &[&str] = &[
    "business", "market", "marketing", "company", "customer", "sales", "revenue", "profit",
    "investment", "finance", "economy", "startup", "management", "strategy", "industry",
    "trade", "money", "budget",
];

const EDUCATION: &[&str] = &[
    "education", "school", "student", "students", "teacher", "learning", "university",
    "college", "course", "study", "research", "knowledge", "class", "lesson", "exam",
    "academic",
];

const HEALTH: &[&str] = &[
    "health", "medical", "doctor", "hospital", "disease", "patient", "medicine", "fitness",
    "exercise", "diet", "nutrition", "mental", "wellness", "treatment", "therapy", "sleep",
];

const POLITICS: &[&str] = &[
    "politics", "political", "government", "election", "vote", "policy", "president",
    "democracy", "congress", "senate", "party", "minister", "campaign", "rights", "citizens",
];

const ENTERTAINMENT: &[&str] = &[
    "entertainment", "movie", "film", "music", "song", "game", "games", "show", "television",
    "actor", "celebrity", "concert", "series", "theater", "comedy", "album", "festival",
];

const SPORTS: &[&str] = &[
    "sports", "sport", "football", "soccer", "basketball", "baseball", "tennis", "team",
    "player", "coach", "match", "tournament", "championship", "league", "score", "athlete",
    "olympic",
];

const ENVIRONMENT: &[&str] = &[
    "environment", "environmental", "climate", "pollution", "energy", "renewable", "nature",
    "forest", "ocean", "wildlife", "carbon", "emissions", "recycling", "sustainable", "planet",
    "water",
];
