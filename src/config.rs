use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2";
pub const API_BASE_ENV: &str = "POKEPAIRS_API_BASE";

/// Number of original-generation entries sampled for cards.
pub const CATALOG_SIZE: usize = 151;
pub const MAX_TRIES: u32 = 10;
pub const MISMATCH_DELAY_MS: u64 = 1000;
pub const IMAGE_SIZE: i32 = 90;

/// Cell height relative to the image width, as on the original board.
const CELL_RATIO: f64 = 0.75;
const CELL_PADDING: i32 = 10;
/// Extra room below the grid for the lives and result labels.
const LABEL_SPACE: i32 = 50;

/// Tunables for one game. There is no config file; these are the defaults
/// with a single environment override for the catalog endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub api_base: String,
    pub catalog_size: usize,
    pub max_tries: u32,
    pub mismatch_delay: Duration,
    pub image_size: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            api_base: DEFAULT_API_BASE.to_string(),
            catalog_size: CATALOG_SIZE,
            max_tries: MAX_TRIES,
            mismatch_delay: Duration::from_millis(MISMATCH_DELAY_MS),
            image_size: IMAGE_SIZE,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::default().with_api_base(std::env::var(API_BASE_ENV).ok())
    }

    fn with_api_base(mut self, api_base: Option<String>) -> Self {
        if let Some(base) = api_base {
            let base = base.trim().trim_end_matches('/');
            if !base.is_empty() {
                self.api_base = base.to_string();
            }
        }
        self
    }

    pub fn cell_size(&self) -> (i32, i32) {
        let width = self.image_size + CELL_PADDING;
        let height = (self.image_size as f64 * CELL_RATIO) as i32 + CELL_PADDING;
        (width, height)
    }

    /// Window size for a square board of `side` cells, leaving a one-cell
    /// margin on every edge.
    pub fn window_size(&self, side: i32) -> (i32, i32) {
        let (cell_width, cell_height) = self.cell_size();
        let width = (side + 2) * cell_width;
        let height = (side + 2) * cell_height + LABEL_SPACE;
        (width, height)
    }
}
