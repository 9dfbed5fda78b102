use insta::assert_json_snapshot;
use league_live_wasm::domain::league::{FavoriteRequest, LoginResponse, Profile, Registration, Team};

#[test]
fn teams_decode_from_backend_field_names() {
    let raw = r##"[{"ID": 1, "Name": "Arsenal", "ShortName": "ARS", "PrimaryColor": "#EF0107", "SecondaryColor": "#FFFFFF"},
                  {"ID": 2, "Name": "Brentford"}]"##;
    let teams: Vec<Team> = serde_json::from_str(raw).unwrap();
    assert_eq!(teams[0].short_name, "ARS");
    assert_eq!(teams[0].primary_color, "#EF0107");
    assert_eq!(teams[1].id, 2);
    assert_eq!(teams[1].primary_color, "");
}

#[test]
fn profile_with_and_without_favorite() {
    let raw = r#"{"Name": "Alex", "Email": "alex@example.com", "Role": "admin",
                  "FavoriteTeam": {"ID": 5, "Name": "Chelsea"}}"#;
    let profile: Profile = serde_json::from_str(raw).unwrap();
    assert_eq!(profile.favorite_team_name(), Some("Chelsea"));

    let bare: Profile = serde_json::from_str(r#"{"Name": "Alex", "FavoriteTeam": null}"#).unwrap();
    assert!(!bare.has_favorite_team());
    assert_eq!(bare.email, "");
}

#[test]
fn login_response_carries_token() {
    let response: LoginResponse = serde_json::from_str(r#"{"token": "jwt"}"#).unwrap();
    assert_eq!(response.token, "jwt");
}

#[test]
fn request_bodies() {
    let registration = Registration {
        name: "Alex".into(),
        email: "alex@example.com".into(),
        password: "secret".into(),
        favorite_team: 7,
    };
    assert_json_snapshot!(registration, @r###"
    {
      "name": "Alex",
      "email": "alex@example.com",
      "password": "secret",
      "favoriteTeam": 7
    }
    "###);

    assert_json_snapshot!(registration.credentials(), @r###"
    {
      "email": "alex@example.com",
      "password": "secret"
    }
    "###);

    assert_json_snapshot!(FavoriteRequest { team_id: 7 }, @r###"
    {
      "teamId": 7
    }
    "###);
}
