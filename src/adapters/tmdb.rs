use crate::models::catalog::{CatalogMovie, CatalogPage};
use crate::settings::AppSettings;
use serde::Deserialize;
use std::sync::LazyLock;
use tracing::warn;

static CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    let settings = AppSettings::get();
    reqwest::Client::builder()
        .timeout(settings.tmdb_request_timeout)
        .build()
        .expect("Failed to build TMDB client")
});

/// TMDB movie genre ids. Unknown ids are dropped from the readable list.
const GENRES: &[(i64, &str)] = &[
    (28, "Action"),
    (12, "Adventure"),
    (16, "Animation"),
    (35, "Comedy"),
    (80, "Crime"),
    (99, "Documentary"),
    (18, "Drama"),
    (10751, "Family"),
    (14, "Fantasy"),
    (36, "History"),
    (27, "Horror"),
    (10402, "Music"),
    (9648, "Mystery"),
    (10749, "Romance"),
    (878, "Science Fiction"),
    (10770, "TV Movie"),
    (53, "Thriller"),
    (10752, "War"),
    (37, "Western"),
];

#[derive(Debug, PartialEq)]
enum QueryMode<'a> {
    /// Full-text search; takes precedence whenever a name filter is present.
    Search { name: &'a str, year: Option<i32> },
    /// Discovery by release year, most popular first.
    Discover { year: i32 },
    /// Currently popular movies.
    Popular,
}

impl<'a> QueryMode<'a> {
    fn select(name: Option<&'a str>, year: Option<i32>) -> Self {
        match (name.map(str::trim).filter(|n| !n.is_empty()), year) {
            (Some(name), year) => QueryMode::Search { name, year },
            (None, Some(year)) => QueryMode::Discover { year },
            (None, None) => QueryMode::Popular,
        }
    }

    fn endpoint(&self) -> &'static str {
        match self {
            QueryMode::Search { .. } => "/search/movie",
            QueryMode::Discover { .. } => "/discover/movie",
            QueryMode::Popular => "/movie/popular",
        }
    }

    fn params(&self, page: u32) -> Vec<(&'static str, String)> {
        let mut params = match self {
            QueryMode::Search { name, year } => {
                let mut params = vec![("query", name.to_string())];
                if let Some(year) = year {
                    params.push(("year", year.to_string()));
                }
                params
            }
            QueryMode::Discover { year } => vec![
                ("primary_release_year", year.to_string()),
                ("sort_by", "popularity.desc".to_string()),
            ],
            QueryMode::Popular => vec![],
        };
        params.push(("page", page.to_string()));
        params
    }
}

#[derive(Deserialize)]
struct RawPage {
    #[serde(default)]
    page: u32,
    #[serde(default)]
    results: Vec<RawMovie>,
    #[serde(default)]
    total_pages: u32,
    #[serde(default)]
    total_results: u64,
}

#[derive(Deserialize)]
struct RawMovie {
    id: i64,
    title: String,
    overview: Option<String>,
    release_date: Option<String>,
    poster_path: Option<String>,
    #[serde(default)]
    genre_ids: Vec<i64>,
    vote_average: Option<f64>,
    popularity: Option<f64>,
}

fn genre_names(genre_ids: &[i64]) -> String {
    let names: Vec<&str> = genre_ids
        .iter()
        .filter_map(|id| GENRES.iter().find(|(gid, _)| gid == id).map(|(_, name)| *name))
        .collect();
    names.join(", ")
}

fn poster_url(image_base_url: &str, poster_path: Option<&str>) -> Option<String> {
    poster_path.map(|path| format!("{image_base_url}{path}"))
}

fn enrich(raw: RawMovie, image_base_url: &str) -> CatalogMovie {
    CatalogMovie {
        poster_url: poster_url(image_base_url, raw.poster_path.as_deref()),
        genres_str: genre_names(&raw.genre_ids),
        id: raw.id,
        title: raw.title,
        overview: raw.overview,
        release_date: raw.release_date,
        poster_path: raw.poster_path,
        genre_ids: raw.genre_ids,
        vote_average: raw.vote_average,
        popularity: raw.popularity,
    }
}

async fn fetch_page(mode: QueryMode<'_>, page: u32) -> anyhow::Result<CatalogPage> {
    let settings = AppSettings::get();
    let url = format!("{}{}", settings.tmdb_base_url, mode.endpoint());
    let raw: RawPage = CLIENT
        .get(url)
        .query(&[("api_key", settings.tmdb_api_key.as_str())])
        .query(&mode.params(page))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(CatalogPage {
        page: raw.page,
        results: raw
            .results
            .into_iter()
            .map(|movie| enrich(movie, &settings.tmdb_image_base_url))
            .collect(),
        total_pages: raw.total_pages,
        total_results: raw.total_results,
        error: None,
    })
}

/// Queries the external catalog. Network and upstream failures are folded
/// into the returned page as a soft error; this never fails the caller.
pub async fn search(name: Option<&str>, year: Option<i32>, page: u32) -> CatalogPage {
    let mode = QueryMode::select(name, year);
    match fetch_page(mode, page).await {
        Ok(page) => page,
        Err(e) => {
            warn!("TMDB request failed: {e}");
            CatalogPage::upstream_error(page, e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_filter_takes_precedence_over_year() {
        let mode = QueryMode::select(Some("Matrix"), Some(1999));
        assert_eq!(
            mode,
            QueryMode::Search {
                name: "Matrix",
                year: Some(1999)
            }
        );
        assert_eq!(mode.endpoint(), "/search/movie");
    }

    #[test]
    fn empty_name_is_treated_as_absent() {
        assert_eq!(
            QueryMode::select(Some("   "), Some(2020)),
            QueryMode::Discover { year: 2020 }
        );
        assert_eq!(QueryMode::select(Some(""), None), QueryMode::Popular);
    }

    #[test]
    fn no_filters_selects_popular_mode() {
        let mode = QueryMode::select(None, None);
        assert_eq!(mode, QueryMode::Popular);
        assert_eq!(mode.endpoint(), "/movie/popular");
        assert_eq!(mode.params(3), vec![("page", "3".to_string())]);
    }

    #[test]
    fn discover_mode_sorts_by_descending_popularity() {
        let params = QueryMode::Discover { year: 2015 }.params(1);
        assert!(params.contains(&("primary_release_year", "2015".to_string())));
        assert!(params.contains(&("sort_by", "popularity.desc".to_string())));
        assert!(params.contains(&("page", "1".to_string())));
    }

    #[test]
    fn search_mode_omits_absent_year() {
        let params = QueryMode::Search {
            name: "Matrix",
            year: None,
        }
        .params(1);
        assert!(params.iter().all(|(key, _)| *key != "year"));
    }

    #[test]
    fn poster_url_is_prefixed_or_absent() {
        let base = "https://image.tmdb.org/t/p/w500";
        assert_eq!(
            poster_url(base, Some("/x.jpg")),
            Some("https://image.tmdb.org/t/p/w500/x.jpg".to_string())
        );
        assert_eq!(poster_url(base, None), None);
    }

    #[test]
    fn unknown_genre_ids_are_dropped() {
        assert_eq!(genre_names(&[28, 999999, 878]), "Action, Science Fiction");
        assert_eq!(genre_names(&[424242]), "");
        assert_eq!(genre_names(&[]), "");
    }

    #[test]
    fn enrichment_fills_poster_url_and_genres() {
        let raw = RawMovie {
            id: 603,
            title: "The Matrix".to_string(),
            overview: None,
            release_date: Some("1999-03-30".to_string()),
            poster_path: Some("/x.jpg".to_string()),
            genre_ids: vec![28, 878],
            vote_average: Some(8.2),
            popularity: Some(100.0),
        };
        let movie = enrich(raw, "https://img.example/w500");
        assert_eq!(
            movie.poster_url.as_deref(),
            Some("https://img.example/w500/x.jpg")
        );
        assert_eq!(movie.genres_str, "Action, Science Fiction");
        assert_eq!(movie.id, 603);
    }
}
