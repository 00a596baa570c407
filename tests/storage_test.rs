//! Integration tests for the query layer

use pl_insights::{
    storage::{fixtures::DatasetBuilder, *},
    DatabaseConfig, InsightsError, Limit, TeamFilter,
};

/// Reference dataset: Alpha has a scorer and a player without statistics
fn create_alpha_db() -> FootballDatabase {
    let mut data = DatasetBuilder::new().unwrap();
    let alpha = data.team("Alpha").unwrap();
    let p1 = data.player(alpha, "P1", Some("ENG")).unwrap();
    data.player(alpha, "P2", Some("FRA")).unwrap();
    data.statistics(p1, Some(5), Some(2)).unwrap();
    data.build().unwrap()
}

/// Six clubs of five ranked players each, with uneven goal tallies
fn create_league_db() -> FootballDatabase {
    let mut data = DatasetBuilder::new().unwrap();
    for t in 0..6 {
        let team = data.team(&format!("Club {}", t)).unwrap();
        for p in 0..5 {
            let player = data
                .player(team, &format!("Player {}-{}", t, p), Some("ENG"))
                .unwrap();
            data.statistics(player, Some((t * 7 + p * 3) % 11), Some(p % 4))
                .unwrap();
        }
        // Squad member with no statistics rows
        data.player(team, &format!("Reserve {}", t), Some("SCO"))
            .unwrap();
    }
    data.build().unwrap()
}

#[test]
fn test_top_goalscorers_skip_players_without_statistics() {
    let db = create_alpha_db();
    let rows = db
        .top_goalscorers(Limit::new(10), &TeamFilter::club("Alpha"))
        .unwrap();

    assert_eq!(
        rows,
        vec![TopGoalscorerRow {
            player_name: "P1".to_string(),
            club: "Alpha".to_string(),
            goals: 5,
        }]
    );
}

#[test]
fn test_most_decisive_players_combines_goals_and_assists() {
    let db = create_alpha_db();
    let rows = db
        .most_decisive_players(Limit::new(10), &TeamFilter::club("Alpha"))
        .unwrap();

    assert_eq!(
        rows,
        vec![DecisivePlayerRow {
            player_name: "P1".to_string(),
            club: "Alpha".to_string(),
            total_decisive: 7,
        }]
    );
}

#[test]
fn test_limit_bounds_and_ordering() {
    let db = create_league_db();

    for limit in [0u32, 1, 3, 10, 30, 100] {
        let rows = db
            .top_goalscorers(Limit::new(limit), &TeamFilter::All)
            .unwrap();
        assert!(rows.len() <= limit as usize);
        assert!(rows.windows(2).all(|w| w[0].goals >= w[1].goals));

        let rows = db
            .most_decisive_players(Limit::new(limit), &TeamFilter::All)
            .unwrap();
        assert!(rows.len() <= limit as usize);
        assert!(rows
            .windows(2)
            .all(|w| w[0].total_decisive >= w[1].total_decisive));
    }
}

#[test]
fn test_limit_larger_than_row_count_returns_all_ranked_players() {
    let db = create_league_db();
    let rows = db
        .top_goalscorers(Limit::new(1000), &TeamFilter::All)
        .unwrap();

    // 6 clubs x 5 players with statistics; reserves are absent
    assert_eq!(rows.len(), 30);
    assert!(rows.iter().all(|r| !r.player_name.starts_with("Reserve")));
}

#[test]
fn test_unknown_team_yields_empty_results() {
    let db = create_league_db();
    let unknown = TeamFilter::club("Atlantis FC");

    assert!(db
        .top_goalscorers(Limit::new(10), &unknown)
        .unwrap()
        .is_empty());
    assert!(db
        .most_decisive_players(Limit::new(10), &unknown)
        .unwrap()
        .is_empty());
    assert!(db.player_nationalities(&unknown).unwrap().is_empty());
}

#[test]
fn test_queries_are_idempotent() {
    let db = create_league_db();

    assert_eq!(
        db.top_goalscorers(Limit::new(10), &TeamFilter::All).unwrap(),
        db.top_goalscorers(Limit::new(10), &TeamFilter::All).unwrap()
    );
    assert_eq!(
        db.most_decisive_players(Limit::new(10), &TeamFilter::All)
            .unwrap(),
        db.most_decisive_players(Limit::new(10), &TeamFilter::All)
            .unwrap()
    );
    assert_eq!(
        db.total_goals_by_team().unwrap(),
        db.total_goals_by_team().unwrap()
    );
    assert_eq!(
        db.player_nationalities(&TeamFilter::All).unwrap(),
        db.player_nationalities(&TeamFilter::All).unwrap()
    );
}

#[test]
fn test_total_goals_match_sum_of_statistics() {
    let db = create_league_db();
    let total: i64 = db
        .total_goals_by_team()
        .unwrap()
        .iter()
        .map(|r| r.goals_scored)
        .sum();

    let expected: i64 = (0..6)
        .flat_map(|t| (0..5).map(move |p| (t * 7 + p * 3) % 11))
        .sum();
    assert_eq!(total, expected);
}

#[test]
fn test_total_goals_by_team_order_and_exclusion() {
    let mut data = DatasetBuilder::new().unwrap();
    let alpha = data.team("Alpha").unwrap();
    let beta = data.team("Beta").unwrap();
    let gamma = data.team("Gamma").unwrap();

    let a = data.player(alpha, "A", None).unwrap();
    let b = data.player(beta, "B", None).unwrap();
    data.player(gamma, "G", None).unwrap();
    data.statistics(b, Some(15), Some(0)).unwrap();
    data.statistics(a, Some(20), Some(0)).unwrap();
    let db = data.build().unwrap();

    assert_eq!(
        db.total_goals_by_team().unwrap(),
        vec![
            TeamGoalsRow {
                club: "Alpha".to_string(),
                goals_scored: 20
            },
            TeamGoalsRow {
                club: "Beta".to_string(),
                goals_scored: 15
            },
        ]
    );
}

#[test]
fn test_league_standings_points_from_results() {
    let mut data = DatasetBuilder::new().unwrap();
    let team = data.team("Alpha").unwrap();
    for code in ["W", "W", "D", "L"] {
        data.match_result(team, code, Some(1), Some(1)).unwrap();
    }
    let db = data.build().unwrap();

    assert_eq!(
        db.league_standings().unwrap(),
        vec![StandingRow {
            club: "Alpha".to_string(),
            points: 7
        }]
    );
}

#[test]
fn test_per_team_match_rows_are_counted_independently() {
    // One fixture, Alpha 2-1 Beta, stored as one row per side
    let mut data = DatasetBuilder::new().unwrap();
    let alpha = data.team("Alpha").unwrap();
    let beta = data.team("Beta").unwrap();
    data.match_result(alpha, "W", Some(2), Some(1)).unwrap();
    data.match_result(beta, "L", Some(1), Some(2)).unwrap();
    let db = data.build().unwrap();

    let standings = db.league_standings().unwrap();
    assert_eq!(standings[0].club, "Alpha");
    assert_eq!(standings[0].points, 3);
    assert_eq!(standings[1].club, "Beta");
    assert_eq!(standings[1].points, 0);

    let defense = db.best_defense_ranking().unwrap();
    assert_eq!(defense[0].club, "Alpha");
    assert_eq!(defense[0].goals_conceded, 1);
    assert_eq!(defense[1].goals_conceded, 2);
}

#[test]
fn test_best_defense_lists_fewest_conceded_first() {
    let mut data = DatasetBuilder::new().unwrap();
    let leaky = data.team("Leaky").unwrap();
    let solid = data.team("Solid").unwrap();
    data.match_result(leaky, "L", Some(0), Some(25)).unwrap();
    data.match_result(solid, "W", Some(3), Some(4)).unwrap();
    data.match_result(solid, "D", Some(6), Some(6)).unwrap();
    let db = data.build().unwrap();

    let rows = db.best_defense_ranking().unwrap();
    assert_eq!(
        rows,
        vec![
            DefenseRow {
                club: "Solid".to_string(),
                goals_conceded: 10
            },
            DefenseRow {
                club: "Leaky".to_string(),
                goals_conceded: 25
            },
        ]
    );
}

#[test]
fn test_open_file_database_and_close() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("football_db.sqlite");

    let mut data = DatasetBuilder::at_path(&path).unwrap();
    let team = data.team("Alpha").unwrap();
    data.match_result(team, "W", Some(1), Some(0)).unwrap();
    data.finish().unwrap();

    let db = FootballDatabase::open(&DatabaseConfig::new(&path)).unwrap();
    assert_eq!(db.path(), path.as_path());
    assert_eq!(db.all_team_names().unwrap(), vec!["Alpha"]);
    assert_eq!(db.league_standings().unwrap()[0].points, 3);
    db.close().unwrap();
}

#[test]
fn test_open_missing_file_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.sqlite");

    match FootballDatabase::open(&DatabaseConfig::new(&path)) {
        Err(InsightsError::Unavailable { path: reported, .. }) => assert_eq!(reported, path),
        Err(e) => panic!("Expected Unavailable error, got {}", e),
        Ok(_) => panic!("Expected Unavailable error"),
    }
    assert!(!path.exists());
}

#[test]
fn test_open_incomplete_schema_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.sqlite");

    let mut data = DatasetBuilder::at_path(&path).unwrap();
    data.execute_batch("DROP TABLE competition;").unwrap();
    data.finish().unwrap();

    match FootballDatabase::open(&DatabaseConfig::new(&path)) {
        Err(InsightsError::MissingTable { table }) => assert_eq!(table, "competition"),
        Err(e) => panic!("Expected MissingTable error, got {}", e),
        Ok(_) => panic!("Expected MissingTable error"),
    }
}

#[test]
fn test_open_non_database_file_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.sqlite");
    std::fs::write(&path, "this is not a sqlite database, just some text padding it out")
        .unwrap();

    let result = FootballDatabase::open(&DatabaseConfig::new(&path));
    assert!(matches!(result, Err(InsightsError::Unavailable { .. })));
}

#[test]
fn test_query_failure_surfaces_as_data_unavailable() {
    let mut data = DatasetBuilder::new().unwrap();
    data.execute_batch(
        r#"DROP TABLE team;
           CREATE TABLE team (team_id INTEGER PRIMARY KEY);"#,
    )
    .unwrap();
    let db = data.build().unwrap();

    let result = db.top_goalscorers(Limit::new(5), &TeamFilter::All);
    assert!(matches!(result, Err(InsightsError::DataUnavailable(_))));
}
