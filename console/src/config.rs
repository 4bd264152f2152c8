use std::env;
use std::path::PathBuf;

use testimonial_admin::TestimonialId;

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// JSON array of testimonials to seed the store with
    pub seed_path: Option<PathBuf>,
    /// Ids whose updates the store rejects, for trying out failed reorders
    pub rejected_update_ids: Vec<TestimonialId>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            seed_path: env::var("TESTIMONIALS_SEED").ok().map(PathBuf::from),
            rejected_update_ids: env::var("TESTIMONIALS_FAIL_IDS")
                .map(|ids| parse_ids(&ids))
                .unwrap_or_default(),
        }
    }
}

/// Parse a comma-separated id list, skipping anything that is not an id
fn parse_ids(raw: &str) -> Vec<TestimonialId> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| match s.parse() {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::warn!("Ignoring TESTIMONIALS_FAIL_IDS entry: {}", e);
                None
            }
        })
        .collect()
}
