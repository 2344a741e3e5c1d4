use std::time::Duration;

use log::{debug, info, warn};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use snafu::prelude::*;

use crate::errors::{CustomResult, HttpClientSnafu};
use crate::modules::helpers::config::Settings;
use crate::modules::models::class::{StatusTier, VehicleClass};
use crate::modules::models::query::{Query, NUM_OF_RACES};

/// Tiers tried for a single race, best first.
pub const RACE_TIERS: [StatusTier; 2] = [StatusTier::Official, StatusTier::Provisional];

/// One URL the locator may probe.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Candidate {
    pub tier: StatusTier,
    pub round: u32,
    pub url: String,
}

/// A page that answered with HTTP 200.
#[derive(Debug, Clone)]
pub struct Located {
    pub document: String,
    pub tier: StatusTier,
    pub round: u32,
    pub url: String,
}

pub struct ResultsLocator {
    client: Client,
    base_url: String,
}

impl ResultsLocator {
    pub fn new(settings: &Settings) -> CustomResult<ResultsLocator> {
        ResultsLocator::with_base_url(&settings.results_url, settings.request_timeout)
    }

    pub fn with_base_url(base_url: &str, timeout: Duration) -> CustomResult<ResultsLocator> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context(HttpClientSnafu)?;

        Ok(ResultsLocator {
            client,
            base_url: normalize_base_url(base_url),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// # locate a results page
    /// validate the arguments, then probe the candidates of the query in order
    ///
    /// ## Arguments
    /// * `season` - the year of the season
    /// * `round` - the round of a single race, or `None` for the season standings
    /// * `class` - the bike class
    ///
    /// ## Returns
    /// * `Ok(Some(Located))` - the first candidate that answered with HTTP 200
    /// * `Ok(None)` - no candidate is available (yet)
    /// * `Err(InvalidArgumentError)` - before any request, for invalid arguments
    pub fn locate(&self, season: i32, round: Option<u32>, class: VehicleClass) -> CustomResult<Option<Located>> {
        let query = Query::new(season, round, class)?;
        Ok(self.locate_query(&query))
    }

    pub fn locate_query(&self, query: &Query) -> Option<Located> {
        for candidate in candidate_urls(&self.base_url, query) {
            if let Some(document) = self.probe(&candidate.url) {
                info!(target: "locator", "Found {:?} results: {}", candidate.tier, candidate.url);
                return Some(Located {
                    document,
                    tier: candidate.tier,
                    round: candidate.round,
                    url: candidate.url,
                });
            }
        }

        info!(target: "locator", "No results available for {:?}", query);
        None
    }

    /// a single GET without retries. anything but a 200 with a readable body
    /// counts as unavailable
    fn probe(&self, url: &str) -> Option<String> {
        debug!(target: "locator", "Requesting {}", url);
        let response = match self.client.get(url).send() {
            Ok(response) => response,
            Err(error) => {
                warn!(target: "locator", "Request to {} failed: {}", url, error);
                return None;
            }
        };

        if response.status() != StatusCode::OK {
            debug!(target: "locator", "{} answered {}", url, response.status());
            return None;
        }

        match response.text() {
            Ok(body) => Some(body),
            Err(error) => {
                warn!(target: "locator", "Failed reading body of {}: {}", url, error);
                None
            }
        }
    }
}

/// # race url
/// the directory of one round: `{base}{season}/S{yy}{round * 5:02}`
pub fn race_url(base_url: &str, season: i32, round: u32) -> String {
    let season_path = format!("{}/S{:02}", season, season % 100);
    // round 2 of 2023 was published outside the numbering convention
    if season == 2023 && round == 2 {
        return format!("{}{}33", base_url, season_path);
    }
    format!("{}{}{:02}", base_url, season_path, round * 5)
}

/// # candidate urls
/// every url the query may be answered by, in probing order. a race query
/// tries the official page then the provisional one, a season query tries the
/// points standings from the last round back to the first
pub fn candidate_urls(base_url: &str, query: &Query) -> Vec<Candidate> {
    let rounds: Vec<u32> = match query.round {
        Some(round) => vec![round],
        None => (1..=NUM_OF_RACES).rev().collect(),
    };
    let tiers: &[StatusTier] = if query.is_season_level() {
        &[StatusTier::PointsStanding]
    } else {
        &RACE_TIERS
    };

    let mut candidates = Vec::with_capacity(rounds.len() * tiers.len());
    for round in rounds {
        let directory = race_url(base_url, query.season, round);
        for tier in tiers {
            candidates.push(Candidate {
                tier: *tier,
                round,
                url: format!("{}/{}", directory, query.class.file_name(*tier)),
            });
        }
    }
    candidates
}

fn normalize_base_url(base_url: &str) -> String {
    let mut base = base_url.trim().to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::helpers::config::DEFAULT_RESULTS_URL;

    #[test]
    fn rounds_map_to_five_times_their_number() {
        assert_eq!(
            race_url(DEFAULT_RESULTS_URL, 2019, 1),
            "https://www.supercrosslive.com/results/current/2019/S1905"
        );
        assert_eq!(race_url("https://x/", 2022, 17), "https://x/2022/S2285");
        assert_eq!(race_url("https://x/", 2023, 1), "https://x/2023/S2305");
        assert_eq!(race_url("https://x/", 2023, 3), "https://x/2023/S2315");
    }

    #[test]
    fn second_round_of_2023_is_overridden() {
        assert_eq!(race_url("https://x/", 2023, 2), "https://x/2023/S2333");
        assert_eq!(race_url("https://x/", 2022, 2), "https://x/2022/S2210");
        assert_eq!(race_url("https://x/", 2024, 2), "https://x/2024/S2410");
    }

    #[test]
    fn base_url_always_ends_with_a_slash() {
        assert_eq!(normalize_base_url("http://127.0.0.1:1234"), "http://127.0.0.1:1234/");
        assert_eq!(normalize_base_url("http://host/results/"), "http://host/results/");
    }
}
