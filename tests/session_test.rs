use spotally::management::PlaySession;
use spotally::types::{NowPlaying, PollOutcome};

// Helper function to create a playing outcome
fn playing(title: &str, artists: &[&str]) -> PollOutcome {
    PollOutcome::Playing(NowPlaying {
        track_id: None,
        title: title.to_string(),
        artists: artists.iter().map(|a| a.to_string()).collect(),
    })
}

#[test]
fn test_apply_counts_playing_ticks() {
    let mut session = PlaySession::new();

    // Three consecutive ticks: "A - X", "A - X", "B - Y"
    assert_eq!(
        session.apply(&playing("A", &["X"])),
        Some(("A - X".to_string(), 1))
    );
    assert_eq!(
        session.apply(&playing("A", &["X"])),
        Some(("A - X".to_string(), 2))
    );
    assert_eq!(
        session.apply(&playing("B", &["Y"])),
        Some(("B - Y".to_string(), 1))
    );

    assert_eq!(session.plays("A - X"), Some(2));
    assert_eq!(session.plays("B - Y"), Some(1));
    assert_eq!(session.distinct_tracks(), 2);
    assert_eq!(session.total_plays(), 3);
    assert_eq!(session.ticks(), 3);
}

#[test]
fn test_leaderboard_orders_by_plays_descending() {
    let mut session = PlaySession::new();
    session.apply(&playing("A", &["X"]));
    session.apply(&playing("A", &["X"]));
    session.apply(&playing("B", &["Y"]));

    let leaderboard = session.leaderboard();
    assert_eq!(leaderboard.len(), 2);
    assert_eq!(leaderboard[0].identity, "A - X");
    assert_eq!(leaderboard[0].plays, 2);
    assert_eq!(leaderboard[1].identity, "B - Y");
    assert_eq!(leaderboard[1].plays, 1);
}

#[test]
fn test_leaderboard_tie_break_is_stable() {
    let mut session = PlaySession::new();
    session.apply(&playing("B", &["Y"]));
    session.apply(&playing("A", &["X"]));

    // Equal play counts fall back to identity order, so repeated renders
    // do not shuffle
    let leaderboard = session.leaderboard();
    assert_eq!(leaderboard[0].identity, "A - X");
    assert_eq!(leaderboard[1].identity, "B - Y");
}

#[test]
fn test_no_op_outcomes_leave_tally_unchanged() {
    let mut session = PlaySession::new();
    session.apply(&playing("A", &["X"]));
    let before = session.leaderboard();

    // 204 / paused / stopped
    assert_eq!(session.apply(&PollOutcome::NothingPlaying), None);
    // expired token
    assert_eq!(session.apply(&PollOutcome::Unauthorized), None);
    // transient service failure
    assert_eq!(session.apply(&PollOutcome::ServiceError(502)), None);

    assert_eq!(session.leaderboard(), before);
    // The ticks still happened, they just recorded nothing
    assert_eq!(session.ticks(), 4);
}

#[test]
fn test_counts_only_increase() {
    let mut session = PlaySession::new();

    let mut last = 0;
    for _ in 0..5 {
        let (_, plays) = session.apply(&playing("A", &["X"])).unwrap();
        assert!(plays > last);
        last = plays;
    }

    // Every present count is at least 1
    assert!(session.leaderboard().iter().all(|c| c.plays >= 1));
}

#[test]
fn test_same_title_and_artists_are_one_track() {
    let mut session = PlaySession::new();

    // Identical title/artist text tallies together even when the service
    // ids differ (re-releases, covers)
    session.apply(&PollOutcome::Playing(NowPlaying {
        track_id: Some("id-1".to_string()),
        title: "A".to_string(),
        artists: vec!["X".to_string()],
    }));
    session.apply(&PollOutcome::Playing(NowPlaying {
        track_id: Some("id-2".to_string()),
        title: "A".to_string(),
        artists: vec!["X".to_string()],
    }));

    assert_eq!(session.distinct_tracks(), 1);
    assert_eq!(session.plays("A - X"), Some(2));
}

#[test]
fn test_max_plays() {
    let mut session = PlaySession::new();

    // Empty tally still yields a usable normalization denominator
    assert!(session.is_empty());
    assert_eq!(session.max_plays(), 1);

    session.apply(&playing("A", &["X"]));
    session.apply(&playing("A", &["X"]));
    session.apply(&playing("B", &["Y"]));
    assert_eq!(session.max_plays(), 2);
}

#[test]
fn test_record_returns_updated_count() {
    let mut session = PlaySession::new();

    assert_eq!(session.record("A - X".to_string()), 1);
    assert_eq!(session.record("A - X".to_string()), 2);
    assert_eq!(session.record("B - Y".to_string()), 1);
}
