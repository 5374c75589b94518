use log::LevelFilter;
use seabattle::level_from;

#[test]
fn test_level_from_parses_names() {
    assert_eq!(level_from(Some("debug"), LevelFilter::Info), LevelFilter::Debug);
    assert_eq!(level_from(Some("TRACE"), LevelFilter::Info), LevelFilter::Trace);
    assert_eq!(level_from(Some("off"), LevelFilter::Info), LevelFilter::Off);
}

#[test]
fn test_level_from_falls_back_to_default() {
    assert_eq!(level_from(None, LevelFilter::Warn), LevelFilter::Warn);
    assert_eq!(level_from(Some("loud"), LevelFilter::Info), LevelFilter::Info);
}
