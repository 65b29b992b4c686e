use super::*;

#[test]
fn parses_prefixed_names_and_aliases() {
    assert_eq!(IconId::parse("lucide:clock").unwrap(), IconId::Clock);
    assert_eq!(IconId::parse("heart-handshake").unwrap(), IconId::HeartHandshake);
    assert_eq!(IconId::parse("lucide:check-circle").unwrap(), IconId::CircleCheck);
    assert_eq!(IconId::parse("lucide:circle-help").unwrap(), IconId::HelpCircle);
    assert!(IconId::parse("lucide:rocket").is_err());
}

#[test]
fn names_round_trip_through_parse() {
    for icon in IconId::ALL {
        assert_eq!(IconId::parse(icon.name()).unwrap(), icon);
    }
}

#[test]
fn every_icon_is_valid_svg() {
    for icon in IconId::ALL {
        let svg = icon.svg_markup(Color::rgb8(0x3B, 0x82, 0xF6));
        assert!(svg.contains("#3b82f6"));
        let tree = usvg::Tree::from_str(&svg, &usvg::Options::default())
            .unwrap_or_else(|e| panic!("{}: {e}", icon.name()));
        assert_eq!(tree.size().width(), 24.0);
        assert!(tree.root().has_children(), "{} drew nothing", icon.name());
    }
}
