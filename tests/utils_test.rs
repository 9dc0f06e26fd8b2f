use spotally::types::PlayCount;
use spotally::utils::*;

// Helper function to create a play count entry
fn create_play_count(identity: &str, plays: u32) -> PlayCount {
    PlayCount {
        identity: identity.to_string(),
        plays,
    }
}

#[test]
fn test_generate_state() {
    let state = generate_state();

    // Should be exactly 32 characters
    assert_eq!(state.len(), 32);

    // Should contain only alphanumeric characters
    assert!(state.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated values should be different
    let state2 = generate_state();
    assert_ne!(state, state2);
}

#[test]
fn test_parse_token_fragment_complete() {
    let fragment = "access_token=ABC123&token_type=Bearer&expires_in=3600&state=xyz";
    let parsed = parse_token_fragment(fragment).unwrap();

    assert_eq!(parsed.access_token, "ABC123");
    assert_eq!(parsed.token_type, "Bearer");
    assert_eq!(parsed.expires_in, 3600);
    assert_eq!(parsed.state.as_deref(), Some("xyz"));
}

#[test]
fn test_parse_token_fragment_prefixes() {
    // The raw fragment may still carry its '#', or a '?' after being relayed
    // as a query string; both should parse the same
    let bare = parse_token_fragment("access_token=ABC123").unwrap();
    let hashed = parse_token_fragment("#access_token=ABC123").unwrap();
    let queried = parse_token_fragment("?access_token=ABC123").unwrap();

    assert_eq!(bare.access_token, "ABC123");
    assert_eq!(hashed.access_token, "ABC123");
    assert_eq!(queried.access_token, "ABC123");
}

#[test]
fn test_parse_token_fragment_defaults() {
    // Missing token_type and expires_in fall back to Spotify's documented
    // defaults rather than failing the whole parse
    let parsed = parse_token_fragment("access_token=ABC123").unwrap();

    assert_eq!(parsed.token_type, "Bearer");
    assert_eq!(parsed.expires_in, 3600);
    assert_eq!(parsed.state, None);

    // Unparsable expires_in also falls back
    let parsed = parse_token_fragment("access_token=ABC123&expires_in=soon").unwrap();
    assert_eq!(parsed.expires_in, 3600);
}

#[test]
fn test_parse_token_fragment_missing_token() {
    // No access_token parameter at all
    assert!(parse_token_fragment("state=xyz&expires_in=3600").is_none());

    // Present but empty
    assert!(parse_token_fragment("access_token=&state=xyz").is_none());

    // Not a parameter list
    assert!(parse_token_fragment("").is_none());
    assert!(parse_token_fragment("garbage").is_none());
}

#[test]
fn test_parse_token_fragment_ignores_unknown_params() {
    let parsed =
        parse_token_fragment("foo=bar&access_token=ABC123&unknown&expires_in=120").unwrap();

    assert_eq!(parsed.access_token, "ABC123");
    assert_eq!(parsed.expires_in, 120);
}

#[test]
fn test_track_identity() {
    // Single artist
    let identity = track_identity("Heroes", &["David Bowie".to_string()]);
    assert_eq!(identity, "Heroes - David Bowie");

    // Multiple artists joined in listing order
    let identity = track_identity(
        "Under Pressure",
        &["Queen".to_string(), "David Bowie".to_string()],
    );
    assert_eq!(identity, "Under Pressure - Queen, David Bowie");

    // Artist order is part of the identity
    let swapped = track_identity(
        "Under Pressure",
        &["David Bowie".to_string(), "Queen".to_string()],
    );
    assert_ne!(identity, swapped);
}

#[test]
fn test_sort_play_counts() {
    let mut counts = vec![
        create_play_count("B - Y", 1),
        create_play_count("A - X", 2),
        create_play_count("C - Z", 1),
    ];

    sort_play_counts(&mut counts);

    // Descending by plays first
    assert_eq!(counts[0].identity, "A - X");
    assert_eq!(counts[0].plays, 2);

    // Ties broken by identity ascending
    assert_eq!(counts[1].identity, "B - Y");
    assert_eq!(counts[2].identity, "C - Z");
}

#[test]
fn test_build_track_rows() {
    let counts = vec![
        create_play_count("A - X", 4),
        create_play_count("B - Y", 2),
        create_play_count("C - Z", 1),
    ];

    let rows = build_track_rows(&counts, 4, None);
    assert_eq!(rows.len(), 3);

    // Ranks are 1-based in input order
    assert_eq!(rows[0].rank, 1);
    assert_eq!(rows[0].track, "A - X");
    assert_eq!(rows[0].plays, 4);
    assert_eq!(rows[2].rank, 3);

    // The top entry gets the full bar, others scale against it
    let top_width = rows[0].share.chars().count();
    let mid_width = rows[1].share.chars().count();
    let low_width = rows[2].share.chars().count();
    assert!(top_width > mid_width);
    assert!(mid_width > low_width);
    assert!(low_width >= 1); // every counted track shows at least something
}

#[test]
fn test_build_track_rows_limit() {
    let counts = vec![
        create_play_count("A - X", 3),
        create_play_count("B - Y", 2),
        create_play_count("C - Z", 1),
    ];

    let rows = build_track_rows(&counts, 3, Some(2));
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].track, "A - X");
    assert_eq!(rows[1].track, "B - Y");

    // A limit larger than the tally is not an error
    let rows = build_track_rows(&counts, 3, Some(10));
    assert_eq!(rows.len(), 3);
}

#[test]
fn test_build_track_rows_empty() {
    // An empty tally renders as no rows, and the max-plays floor of 1
    // must not panic the scaling
    let rows = build_track_rows(&[], 0, None);
    assert!(rows.is_empty());
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(5), "5s");
    assert_eq!(format_duration(65), "1m 05s");
    assert_eq!(format_duration(600), "10m 00s");
}
