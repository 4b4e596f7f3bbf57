//! Thin transport adapter: route-parameter parsing and status/body mapping.
//!
//! Deliberately framework-free; an HTTP layer only has to wire path segments
//! into these functions and copy [`Reply`] out.

use serde_json::{Value, json};

use crate::query::{Championship, QueryError, QueryResult};
use crate::race::Race;
use crate::types::SeasonId;

/// Body message returned when a (season, division) scope has no races.
pub const NOT_FOUND_MESSAGE: &str = "No results found for this division.";

const BAD_PARAM_MESSAGE: &str = "Route parameters must be non-negative integers.";
const SERVER_ERROR_MESSAGE: &str = "An error occurred while loading championship data.";

/// HTTP-shaped outcome: status code plus JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Status code (200, 400, 404, or 500).
    pub status: u16,
    /// JSON body to serialize as-is.
    pub body: Value,
}

impl Reply {
    fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    fn bad_request() -> Self {
        Self {
            status: 400,
            body: json!({ "message": BAD_PARAM_MESSAGE }),
        }
    }

    fn not_found() -> Self {
        Self {
            status: 404,
            body: json!({ "message": NOT_FOUND_MESSAGE }),
        }
    }

    fn server_error() -> Self {
        Self {
            status: 500,
            body: json!({ "message": SERVER_ERROR_MESSAGE }),
        }
    }
}

/// `GET /championship/{season}/{division}`
pub fn championship(ch: &Championship, season: &str, division: &str) -> Reply {
    match parse_scope(season, division) {
        Ok((season, division)) => race_reply(ch.races_by_division(season, division)),
        Err(reply) => reply,
    }
}

/// `GET /championship/races/{season}/{division}`
pub fn championship_races(ch: &Championship, season: &str, division: &str) -> Reply {
    match parse_scope(season, division) {
        Ok((season, division)) => race_reply(ch.races_ordered(season, division)),
        Err(reply) => reply,
    }
}

/// `GET /championship/current`
///
/// Never a 404: an empty season serializes as an empty array.
pub fn championship_current(ch: &Championship, current_season: SeasonId) -> Reply {
    match ch.current_top3(current_season) {
        Ok(groups) => json_reply(&groups),
        Err(_) => Reply::server_error(),
    }
}

fn parse_scope(season: &str, division: &str) -> Result<(u32, u32), Reply> {
    match (parse_param(season), parse_param(division)) {
        (Some(season), Some(division)) => Ok((season, division)),
        _ => Err(Reply::bad_request()),
    }
}

// Digits only; stock u32 parsing also accepts a leading '+'.
fn parse_param(raw: &str) -> Option<u32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

fn race_reply(result: QueryResult<Vec<Race>>) -> Reply {
    match result {
        Ok(races) => json_reply(&races),
        Err(QueryError::NotFound) => Reply::not_found(),
        Err(QueryError::Repo(_)) => Reply::server_error(),
    }
}

fn json_reply<T: serde::Serialize>(value: &T) -> Reply {
    match serde_json::to_value(value) {
        Ok(body) => Reply::ok(body),
        Err(_) => Reply::server_error(),
    }
}
