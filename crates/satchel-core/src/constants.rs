/// Satchel version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Characters per token for the approximate heuristic (English text).
pub const APPROX_CHARS_PER_TOKEN: usize = 4;

/// Combined-score field written by `combine_scores` and read by
/// score-ordered fitting.
pub const SCORE_FIELD: &str = "score";

/// Score field written by recency scoring.
pub const RECENCY_SCORE_FIELD: &str = "recency_score";

/// Score field written by similarity scoring.
pub const SIMILARITY_SCORE_FIELD: &str = "similarity_score";

/// Default identity field for deduplication.
pub const ID_FIELD: &str = "id";

/// Token-count cache capacity (entries).
pub const TOKEN_CACHE_CAPACITY: u64 = 8192;
