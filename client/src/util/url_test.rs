use super::*;

#[test]
fn token_from_query_string() {
    let loc = PageLocation::new("?token=abc", "");
    assert_eq!(loc.callback_token().as_deref(), Some("abc"));
}

#[test]
fn token_from_fragment_when_query_lacks_it() {
    let loc = PageLocation::new("?foo=bar", "#token=xyz");
    assert_eq!(loc.callback_token().as_deref(), Some("xyz"));
}

#[test]
fn query_wins_over_fragment() {
    let loc = PageLocation::new("?token=q", "#token=h");
    assert_eq!(loc.callback_token().as_deref(), Some("q"));
}

#[test]
fn empty_query_token_falls_back_to_fragment() {
    let loc = PageLocation::new("?token=", "#token=h");
    assert_eq!(loc.callback_token().as_deref(), Some("h"));
}

#[test]
fn no_token_anywhere() {
    assert_eq!(PageLocation::default().callback_token(), None);
    assert_eq!(PageLocation::new("?a=1&b=2", "#section").callback_token(), None);
}

#[test]
fn token_is_percent_decoded() {
    let loc = PageLocation::new("?token=a%2Eb%3Dc", "");
    assert_eq!(loc.callback_token().as_deref(), Some("a.b=c"));
}

#[test]
fn plus_decodes_to_space() {
    assert_eq!(param("token=a+b", "token").as_deref(), Some("a b"));
}

#[test]
fn param_accepts_bare_string() {
    assert_eq!(param("x=1&token=jwt.payload.sig", "token").as_deref(), Some("jwt.payload.sig"));
}

#[test]
fn param_takes_first_occurrence() {
    assert_eq!(param("?token=first&token=second", "token").as_deref(), Some("first"));
}

#[test]
fn param_name_must_match_exactly() {
    assert_eq!(param("?access_token=abc", "token"), None);
}
