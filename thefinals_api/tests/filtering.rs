use serde_json::Value;
use thefinals_api::types::{Leaderboard, LeaderboardResult, PlayerRecord};
use thefinals_api::{filter, raw_filter, Error, FilterSet};

fn load_fixture(name: &str) -> Value {
    let body = std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap();
    serde_json::from_str(&body).unwrap()
}

fn load_envelope(leaderboard: Leaderboard, name: &str) -> LeaderboardResult {
    LeaderboardResult::from_raw(leaderboard, None, &load_fixture(name)).unwrap()
}

fn names(result: &LeaderboardResult) -> Vec<&str> {
    result
        .players
        .iter()
        .filter_map(|p| p.identity().best_name())
        .collect()
}

#[test]
fn score_threshold_keeps_ties_in_order() {
    let result = load_envelope(Leaderboard::S8, "s8_crossplay.json");
    // Scores are [58771, 57210, 51988, 51988, 49554].
    let filtered = result.filter(&FilterSet::new().with("score__gte", 51988)).unwrap();
    assert_eq!(
        names(&filtered),
        ["OutOfGasOlli", "VolpeWasTaken", "Grizzmott", "KapkanToe"]
    );

    let strict = result.filter(&FilterSet::new().with("score__gt", 51988)).unwrap();
    assert_eq!(names(&strict), ["OutOfGasOlli", "VolpeWasTaken"]);
}

#[test]
fn league_iexact_matches_enum_values_by_name() {
    let result = load_envelope(Leaderboard::S8, "s8_crossplay.json");
    let rubies = result
        .filter(&FilterSet::new().with("league__iexact", "ruby"))
        .unwrap();
    assert_eq!(rubies.players.len(), 2);

    let d1 = result
        .filter(&FilterSet::new().with("league", "Diamond 1"))
        .unwrap();
    assert_eq!(names(&d1), ["Grizzmott", "KapkanToe"]);

    let top_tier = result
        .filter(&FilterSet::new().with("league_number__gte", 21))
        .unwrap();
    assert_eq!(top_tier.players.len(), 2);
}

#[test]
fn empty_filter_set_is_identity() {
    let result = load_envelope(Leaderboard::S8, "s8_crossplay.json");
    let filtered = result.filter(&FilterSet::new()).unwrap();
    assert_eq!(filtered.players, result.players);
    assert_eq!(filtered.filters, Some(FilterSet::new()));
    // The source envelope is untouched.
    assert_eq!(result.filters, None);
    assert_eq!(result.players.len(), 5);
}

#[test]
fn chained_expressions_are_a_logical_and() {
    let result = load_envelope(Leaderboard::S8, "s8_crossplay.json");
    let filtered = result
        .filter(
            &FilterSet::new()
                .with("club_tag", "NOVA")
                .with("score__gte", 51988),
        )
        .unwrap();
    assert_eq!(names(&filtered), ["OutOfGasOlli", "KapkanToe"]);
}

#[test]
fn null_tests_cover_normalized_blanks() {
    let result = load_envelope(Leaderboard::S8, "s8_crossplay.json");
    // Rank 3 had a blank tag, rank 5 an explicit null.
    let untagged = result
        .filter(&FilterSet::new().with("club_tag__isnull", true))
        .unwrap();
    assert_eq!(names(&untagged), ["Grizzmott", "mellowdrama"]);

    let tagged = result
        .filter(&FilterSet::new().with("club_tag__exists", true))
        .unwrap();
    assert_eq!(tagged.players.len(), 3);
}

#[test]
fn name_operators() {
    let result = load_envelope(Leaderboard::S8, "s8_crossplay.json");

    let istarts = result
        .filter(&FilterSet::new().with("name__istartswith", "volpe"))
        .unwrap();
    assert_eq!(names(&istarts), ["VolpeWasTaken"]);

    let iregex = result
        .filter(&FilterSet::new().with("name__iregex", "^out.*olli$"))
        .unwrap();
    assert_eq!(names(&iregex), ["OutOfGasOlli"]);

    // Case-sensitive regex does not match lowercased input.
    let regex = result
        .filter(&FilterSet::new().with("name__regex", "^out"))
        .unwrap();
    assert!(regex.players.is_empty());

    // An invalid pattern matches nothing rather than erroring.
    let bad = result
        .filter(&FilterSet::new().with("name__regex", "("))
        .unwrap();
    assert!(bad.players.is_empty());
}

#[test]
fn unknown_fields_pass_through_per_record() {
    // Sponsor is not a field of any s8 ranked record.
    let result = load_envelope(Leaderboard::S8, "s8_crossplay.json");
    let filtered = result
        .filter(&FilterSet::new().with("sponsor__exact", "DISSUN"))
        .unwrap();
    assert_eq!(filtered.players.len(), 5);

    // On a sponsor leaderboard the same expression actually filters.
    let sponsors = load_envelope(Leaderboard::S4Sponsor, "s4sponsor.json");
    let dissun = sponsors
        .filter(&FilterSet::new().with("sponsor__exact", "DISSUN"))
        .unwrap();
    assert_eq!(names(&dissun), ["drainpipe"]);
}

#[test]
fn mixed_collections_filter_safely() {
    let ranked = load_envelope(Leaderboard::S8, "s8_crossplay.json");
    let sponsors = load_envelope(Leaderboard::S4Sponsor, "s4sponsor.json");
    let mut mixed: Vec<PlayerRecord> = ranked.players.clone();
    mixed.extend(sponsors.players.clone());

    // Sponsor records carry no club_tag field at all, so they pass; the
    // ranked records are actually filtered on it.
    let kept = filter::apply(&mixed, &FilterSet::new().with("club_tag", "NOVA")).unwrap();
    assert_eq!(kept.len(), 2 + 3);

    // Comparison kind mismatches exclude quietly instead of erroring.
    let none = filter::apply(&mixed, &FilterSet::new().with("rank__gt", "one")).unwrap();
    assert!(none.is_empty());
}

#[test]
fn unsupported_operator_fails_for_any_input_size() {
    let filters = FilterSet::new().with("score__between", 100);

    let err = filter::apply(&[], &filters).unwrap_err();
    assert!(matches!(err, Error::UnsupportedOperator(ref op) if op == "between"));

    let result = load_envelope(Leaderboard::S8, "s8_crossplay.json");
    let err = result.filter(&filters).unwrap_err();
    assert!(matches!(err, Error::UnsupportedOperator(_)));
}

#[test]
fn applied_filters_serialize_on_the_envelope() {
    let result = load_envelope(Leaderboard::S8, "s8_crossplay.json");
    let filtered = result
        .filter(&FilterSet::new().with("score__gte", 51988).with("club_tag", "NOVA"))
        .unwrap();
    let value = serde_json::to_value(&filtered).unwrap();
    assert_eq!(
        value["filters"],
        serde_json::json!({"score__gte": 51988, "club_tag": "NOVA"})
    );
    assert_eq!(value["data"].as_array().unwrap().len(), 2);
}

#[test]
fn raw_name_filter_searches_all_name_keys() {
    let raw = load_fixture("s8_crossplay.json");
    let out = raw_filter(&raw, Some("olli"), None, false);

    assert_eq!(out["count"], 1);
    assert_eq!(out["data"][0]["name"], "OutOfGasOlli");
    assert_eq!(out["meta"]["nameFilter"], "olli");
    // The original meta identity keys survive.
    assert_eq!(out["meta"]["leaderboardVersion"], "s8");
    assert_eq!(out["meta"]["dataSource"], "live");

    // A record findable only through its platform name still matches:
    // this one has a whitespace-only display name in the raw payload.
    let ob = load_fixture("ob_steam.json");
    let by_steam = raw_filter(&ob, Some("q3k"), None, false);
    assert_eq!(by_steam["count"], 1);
    assert_eq!(by_steam["data"][0]["rank"], 3);
}

#[test]
fn raw_club_tag_filter_wildcard_vs_exact() {
    let raw = load_fixture("s6quickcash.json");

    let wild = raw_filter(&raw, None, Some("og"), false);
    assert_eq!(wild["count"], 2); // OG and OGX
    assert_eq!(wild["meta"]["clubTagFilter"], "og");

    let exact = raw_filter(&raw, None, Some("og"), true);
    assert_eq!(exact["count"], 1);
    assert_eq!(exact["data"][0]["clubTag"], "OG");
}

#[test]
fn raw_club_tag_echo_omitted_without_survivors() {
    // Sponsor-era players carry no clubTag keys at all: the filter value
    // was supplied but must not be echoed into the output meta.
    let raw = load_fixture("s4sponsor.json");
    let out = raw_filter(&raw, None, Some("NOVA"), false);

    assert_eq!(out["count"], 0);
    assert!(out["data"].as_array().unwrap().is_empty());
    assert!(out["meta"].get("clubTagFilter").is_none());
}

#[test]
fn raw_filter_treats_empty_strings_as_no_filter() {
    let raw = load_fixture("s6quickcash.json");
    let out = raw_filter(&raw, Some(""), Some(""), false);

    assert_eq!(out["count"], 5);
    assert!(out["meta"].get("nameFilter").is_none());
    assert!(out["meta"].get("clubTagFilter").is_none());
}

#[test]
fn raw_filters_combine() {
    let raw = load_fixture("s6quickcash.json");
    let out = raw_filter(&raw, Some("t"), Some("nova"), false);

    // The name filter keeps everyone but pyrodance; the tag filter then
    // keeps the NOVA members among the survivors.
    assert_eq!(out["count"], 2);
    assert_eq!(out["data"][0]["name"], "turretfather");
    assert_eq!(out["data"][1]["name"], "meltdown");
    assert_eq!(out["meta"]["nameFilter"], "t");
    assert_eq!(out["meta"]["clubTagFilter"], "nova");
}
