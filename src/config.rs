use std::env;

const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/fivethirtyeight/nfl-elo-game/master/data/nfl_games.csv";
const DEFAULT_YEAR_FLOOR: i32 = 2018;
const DEFAULT_TOP_N: usize = 5;

/// Run configuration for one batch invocation. Always passed into the
/// pipeline explicitly so tests can inject fixtures instead of the live URL.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// HTTP(S) URL or local file path of the raw game table.
    pub source_url: String,
    /// Inclusive minimum calendar year retained by the cleaner.
    pub year_floor: i32,
    /// Number of teams in the top-by-wins subset.
    pub top_n: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            year_floor: DEFAULT_YEAR_FLOOR,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl PipelineConfig {
    /// Reads overrides from the environment (and a .env file when present):
    /// `SOURCE_URL`, `YEAR_FLOOR`, `TOP_N`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let source_url = env::var("SOURCE_URL")
            .ok()
            .map(|val| val.trim().to_string())
            .filter(|val| !val.is_empty())
            .unwrap_or_else(|| DEFAULT_SOURCE_URL.to_string());
        let year_floor = env::var("YEAR_FLOOR")
            .ok()
            .and_then(|val| val.trim().parse::<i32>().ok())
            .unwrap_or(DEFAULT_YEAR_FLOOR);
        let top_n = env::var("TOP_N")
            .ok()
            .and_then(|val| val.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_TOP_N)
            .max(1);
        Self {
            source_url,
            year_floor,
            top_n,
        }
    }
}
