use champstand::{
    api::{self, NOT_FOUND_MESSAGE},
    points::PointsTable,
    query::Championship,
    race::{Driver, Race, ResultFlags, Team},
    repo::{RepoError, RepoResult, ResultsRepository, sqlite::SqliteRepository},
    types::{DivisionId, SeasonId},
};

struct FailingRepository;

impl ResultsRepository for FailingRepository {
    fn races(&self, _: SeasonId, _: DivisionId) -> RepoResult<Vec<Race>> {
        Err(RepoError::Message("catalog database unreachable".to_string()))
    }

    fn season_races(&self, _: SeasonId) -> RepoResult<Vec<Race>> {
        Err(RepoError::Message("catalog database unreachable".to_string()))
    }

    fn drivers(&self) -> RepoResult<Vec<Driver>> {
        Err(RepoError::Message("catalog database unreachable".to_string()))
    }

    fn teams(&self) -> RepoResult<Vec<Team>> {
        Err(RepoError::Message("catalog database unreachable".to_string()))
    }
}

fn seeded() -> Championship {
    let repo = SqliteRepository::open_in_memory().expect("open repo");
    let alice = repo.add_driver("Alice", None).expect("driver");
    let bob = repo.add_driver("Bob", None).expect("driver");
    let apex = repo.add_team("Apex GP").expect("team");

    let r1 = repo.add_race(29, 1, 1, None).expect("race");
    let r2 = repo.add_race(29, 1, 2, None).expect("race");
    let ok = ResultFlags::default();
    repo.add_result(r1, alice, Some(apex), 1, ok).expect("result");
    repo.add_result(r1, bob, None, 2, ok).expect("result");
    repo.add_result(r2, alice, Some(apex), 1, ok).expect("result");

    Championship::new(Box::new(repo), PointsTable::default())
}

#[test]
fn listing_replies_with_a_json_array_of_race_objects() {
    let ch = seeded();

    let reply = api::championship(&ch, "29", "1");
    assert_eq!(reply.status, 200);

    let races = reply.body.as_array().expect("array body");
    assert_eq!(races.len(), 2);
    let first = races[0].as_object().expect("race object");
    for key in ["id", "season", "division", "track", "raceResults"] {
        assert!(first.contains_key(key), "missing field {key}");
    }
    assert!(first["raceResults"].as_array().is_some_and(|r| !r.is_empty()));
}

#[test]
fn ordered_listing_is_ascending_by_id() {
    let ch = seeded();

    let reply = api::championship_races(&ch, "29", "1");
    assert_eq!(reply.status, 200);

    let ids: Vec<i64> = reply
        .body
        .as_array()
        .expect("array body")
        .iter()
        .map(|race| race["id"].as_i64().expect("id"))
        .collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}

#[test]
fn absent_scope_is_a_404_with_the_structured_message() {
    let ch = seeded();

    let reply = api::championship(&ch, "9999", "1");
    assert_eq!(reply.status, 404);
    let message = reply.body["message"].as_str().expect("message");
    assert!(message.contains("No results found"));
    assert_eq!(message, NOT_FOUND_MESSAGE);

    let reply = api::championship_races(&ch, "29", "9999");
    assert_eq!(reply.status, 404);
}

#[test]
fn non_integer_route_params_are_rejected_with_400() {
    let ch = seeded();

    let cases = [
        ("abc", "1"),
        ("29", "xyz"),
        ("abc", "xyz"),
        ("-1", "1"),
        ("2.5", "1"),
        // A leading sign is not a digit, even though u32 parsing takes '+'.
        ("+29", "1"),
        ("29", "+1"),
        ("", "1"),
    ];
    for (season, division) in cases {
        let reply = api::championship(&ch, season, division);
        assert_eq!(reply.status, 400, "{season}/{division}");
        assert!(reply.body["message"].is_string());

        let reply = api::championship_races(&ch, season, division);
        assert_eq!(reply.status, 400, "races {season}/{division}");
    }
}

#[test]
fn repository_failure_maps_to_a_500_reply() {
    let ch = Championship::new(Box::new(FailingRepository), PointsTable::default());

    for reply in [
        api::championship(&ch, "29", "1"),
        api::championship_races(&ch, "29", "1"),
        api::championship_current(&ch, 29),
    ] {
        assert_eq!(reply.status, 500);
        assert!(reply.body["message"].is_string());
    }
}

#[test]
fn current_standings_are_always_200_even_when_empty() {
    let ch = seeded();

    let reply = api::championship_current(&ch, 9999);
    assert_eq!(reply.status, 200);
    assert_eq!(reply.body.as_array().map(Vec::len), Some(0));

    let reply = api::championship_current(&ch, 29);
    assert_eq!(reply.status, 200);
    let groups = reply.body.as_array().expect("array body");
    assert_eq!(groups.len(), 1);

    let group = groups[0].as_object().expect("group object");
    assert_eq!(group["Division"].as_u64(), Some(1));
    let top3 = group["Top3"].as_array().expect("Top3");
    assert!(top3.len() <= 3);

    let leader = top3[0].as_object().expect("entry object");
    assert_eq!(leader["Driver"].as_str(), Some("Alice"));
    assert_eq!(leader["TotalPoints"].as_u64(), Some(50));
    assert_eq!(leader["Team"].as_str(), Some("Apex GP"));
    // Bob never got a team assigned; the field is present but null.
    assert!(top3[1]["Team"].is_null());
}
