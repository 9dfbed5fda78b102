use insta::assert_json_snapshot;
use league_live_wasm::domain::errors::FeedError;
use league_live_wasm::infrastructure::websocket::parse_snapshot;

#[test]
fn scenario_snapshot_renders_ranked_rows() {
    let msg = r#"{"standings":[{"team":"A","played":1,"points":3,"gd":2,"live":true},{"team":"B","played":1,"points":0,"gd":-2,"live":false}]}"#;
    let table = parse_snapshot(msg).unwrap();

    assert!(table.any_live());
    assert_json_snapshot!(table, @r###"
    {
      "rows": [
        {
          "rank": 1,
          "team_name": "A",
          "played": 1,
          "points": 3,
          "goal_difference": 2,
          "is_live": true
        },
        {
          "rank": 2,
          "team_name": "B",
          "played": 1,
          "points": 0,
          "goal_difference": -2,
          "is_live": false
        }
      ]
    }
    "###);
}

#[test]
fn empty_snapshot_hides_live_indicator() {
    let table = parse_snapshot(r#"{"standings":[]}"#).unwrap();
    assert!(table.is_empty());
    assert!(!table.any_live());
}

#[test]
fn rank_follows_position_not_payload() {
    let msg = r#"{"standings":[
        {"team":"Leeds","played":25,"points":23,"gd":-15,"rank":9},
        {"team":"Arsenal","played":25,"points":60,"gd":35,"rank":1}
    ]}"#;
    let table = parse_snapshot(msg).unwrap();
    let ranks: Vec<(u32, &str)> =
        table.rows().iter().map(|r| (r.rank.value(), r.team_name.as_str())).collect();
    assert_eq!(ranks, vec![(1, "Leeds"), (2, "Arsenal")]);
}

#[test]
fn live_flag_defaults_to_false() {
    let table = parse_snapshot(r#"{"standings":[{"team":"Fulham","played":3,"points":4,"gd":1}]}"#).unwrap();
    assert_eq!(table.live_count(), 0);
    assert!(!table.rows()[0].is_live);
}

#[test]
fn malformed_payloads_are_rejected() {
    let cases = [
        "not json",
        "{}",
        r#"{"standings":null}"#,
        r#"{"table":[]}"#,
        r#"{"standings":[{"played":1,"points":3,"gd":2}]}"#,
        r#"{"standings":[{"team":"A","played":-1,"points":3,"gd":2}]}"#,
        r#"{"standings":[{"team":"A","played":1,"points":"3","gd":2}]}"#,
    ];
    for case in cases {
        let result = parse_snapshot(case);
        assert!(matches!(result, Err(FeedError::Malformed(_))), "accepted {case}");
    }
}

#[test]
fn one_live_row_is_enough() {
    let msg = r#"{"standings":[
        {"team":"Chelsea","played":25,"points":45,"gd":10,"live":false},
        {"team":"Wolves","played":25,"points":27,"gd":-10,"live":false},
        {"team":"Everton","played":25,"points":22,"gd":-18,"live":true}
    ]}"#;
    let table = parse_snapshot(msg).unwrap();
    assert!(table.any_live());
    assert_eq!(table.live_count(), 1);
    assert!(table.rows()[2].is_live);
}
