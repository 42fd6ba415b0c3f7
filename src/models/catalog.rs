use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct SearchArgs {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub page: Option<u32>,
}

/// A single catalog entry, enriched with a fully qualified poster URL and a
/// human-readable genre list.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogMovie {
    pub id: i64,
    pub title: String,
    pub overview: Option<String>,
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
    pub poster_url: Option<String>,
    pub genre_ids: Vec<i64>,
    pub genres_str: String,
    pub vote_average: Option<f64>,
    pub popularity: Option<f64>,
}

/// One page of catalog results. Upstream failures are encoded as a value:
/// `error` is set and `results` is empty, the request itself never fails.
#[derive(Debug, Default, Serialize)]
pub struct CatalogPage {
    pub page: u32,
    pub results: Vec<CatalogMovie>,
    pub total_pages: u32,
    pub total_results: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CatalogPage {
    pub fn upstream_error(page: u32, error: String) -> Self {
        Self {
            page,
            error: Some(error),
            ..Default::default()
        }
    }
}
