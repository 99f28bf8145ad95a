use super::*;

#[test]
fn parse_accepts_stored_values_only() {
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse(" light "), Some(Theme::Light));
    assert_eq!(Theme::parse("sepia"), None);
}

#[test]
fn toggled_flips_and_round_trips_storage_text() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::parse(theme.as_str()), Some(theme));
    }
}

#[test]
fn icon_shows_the_other_theme() {
    assert_eq!(Theme::Light.toggle_icon(), "☾");
    assert_eq!(Theme::Dark.toggle_icon(), "☀");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_side_preference_is_light() {
    assert_eq!(read_preference(), Theme::Light);
}
