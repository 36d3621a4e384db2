use dinescope::feeds::{load_catalog, DirectorySource, Feed, FeedFiles};
use dinescope::{CatalogError, Config, Event, Session};
use std::fs;
use std::path::Path;

const RECORDS: &str = r#"[
  {
    "DetailShortInfo": {
      "faciltId": "R1",
      "faciltNameCN": "Bibimbap House",
      "faciltName": "Bibimbap House EN",
      "locList": [{"latud": "37.29", "lgtud": "127.20"}]
    },
    "foodTypeCds": "F1, F2",
    "zoneType": "Z1",
    "keyword": "rice#spicy",
    "bannerImgList": ["a.jpg", {"imgUrl": "b.jpg"}],
    "menuList": [{"menuNameCN": "Stone Pot", "menuName": "Dolsot"}]
  },
  {
    "DetailShortInfo": {"faciltId": "R2", "faciltNameCN": "Pizza Corner"},
    "foodTypeCds": "F3",
    "zoneType": "Z2",
    "menuList": [{"menuNameCN": "Margherita"}]
  },
  {
    "DetailShortInfo": {"faciltId": "R3", "faciltNameCN": null},
    "foodTypeCds": null,
    "zoneType": null
  }
]"#;

const FOOD_TYPES: &str = r#"[
  {"codeId": "F1", "codeNameCN": "Korean"},
  {"codeId": "F2", "codeNameCN": "Rice"},
  {"codeId": "F3", "codeNameCN": "Western"}
]"#;

const ZONES: &str = r#"[
  {"codeId": "Z1", "codeNameCN": "Magic Land"},
  {"codeId": "Z2", "codeNameCN": "Global Fair"}
]"#;

fn write_feeds(dir: &Path) {
    fs::write(dir.join("mainShortInfo.json"), RECORDS).unwrap();
    fs::write(dir.join("faciltFoodType.json"), FOOD_TYPES).unwrap();
    fs::write(dir.join("zoneKindCd.json"), ZONES).unwrap();
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

fn config_for(dir: &Path) -> Config {
    Config {
        data_dir: dir.display().to_string(),
        ..Default::default()
    }
}

#[test]
fn loads_catalog_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    write_feeds(dir.path());

    let source = DirectorySource::new(dir.path().to_path_buf(), FeedFiles::default());
    let catalog = runtime().block_on(load_catalog(&source)).unwrap();

    assert_eq!(catalog.records.len(), 3);
    assert_eq!(catalog.food_types.name_of(Some("F2")), "Rice");
    assert_eq!(catalog.zones.name_of(Some("Z9")), "unknown zone");

    let first = catalog.find("R1").unwrap();
    assert_eq!(first.food_codes(), vec!["F1", "F2"]);
    assert_eq!(first.gallery_images(), vec!["a.jpg", "b.jpg"]);
    assert_eq!(first.formatted_keywords(), "rice, spicy");
}

#[test]
fn any_missing_feed_fails_the_whole_load() {
    for missing in ["mainShortInfo.json", "faciltFoodType.json", "zoneKindCd.json"] {
        let dir = tempfile::tempdir().unwrap();
        write_feeds(dir.path());
        fs::remove_file(dir.path().join(missing)).unwrap();

        let source = DirectorySource::new(dir.path().to_path_buf(), FeedFiles::default());
        let result = runtime().block_on(load_catalog(&source));
        assert!(
            matches!(result, Err(CatalogError::DataLoad(_))),
            "expected data load error without {missing}"
        );
    }
}

#[test]
fn malformed_feed_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    write_feeds(dir.path());
    fs::write(dir.path().join("zoneKindCd.json"), "{not json").unwrap();

    let source = DirectorySource::new(dir.path().to_path_buf(), FeedFiles::default());
    let err = runtime().block_on(load_catalog(&source)).unwrap_err();
    assert!(err.is_data_load());
    assert!(matches!(err, CatalogError::Parse { feed, .. } if feed == Feed::Zones.name()));
}

#[test]
fn custom_feed_file_names() {
    let dir = tempfile::tempdir().unwrap();
    write_feeds(dir.path());
    fs::rename(dir.path().join("zoneKindCd.json"), dir.path().join("zones.json")).unwrap();

    let mut config = config_for(dir.path());
    config.zones_file = "zones.json".to_string();

    let session = runtime().block_on(Session::mount(&config)).unwrap();
    assert!(!session.state().load_failed());
    assert_eq!(session.state().zone_name(Some("Z2")), "Global Fair");
}

#[test]
fn session_browse_flow() {
    let dir = tempfile::tempdir().unwrap();
    write_feeds(dir.path());

    let mut session = runtime().block_on(Session::mount(&config_for(dir.path()))).unwrap();
    let vm = session.viewmodel();
    assert_eq!(vm.cards.len(), 3);
    assert_eq!(vm.cards[2].name, "N/A");
    assert_eq!(vm.cards[2].zone, "unknown zone");

    session.send(Event::ToggleFood("F2".into())).unwrap();
    session.send(Event::ToggleFood("F3".into())).unwrap();
    let ids: Vec<_> = session.viewmodel().cards.into_iter().map(|c| c.id).collect();
    assert_eq!(ids, vec!["R1", "R2"]);

    session.send(Event::Search("margh".into())).unwrap();
    let ids: Vec<_> = session.viewmodel().cards.into_iter().map(|c| c.id).collect();
    assert_eq!(ids, vec!["R2"]);

    session.send(Event::ClearFilters).unwrap();
    session
        .send(Event::OpenGallery {
            record_id: "R1".into(),
            start: 9,
        })
        .unwrap();
    let gallery = session.viewmodel().gallery.unwrap();
    assert_eq!((gallery.position, gallery.total), (2, 2));
    assert!(!gallery.has_next);

    session.send(Event::TouchStart { x: 100.0 }).unwrap();
    session.send(Event::TouchEnd { x: 160.0 }).unwrap();
    assert_eq!(session.state().gallery.index(), 0);
    session.send(Event::CloseGallery).unwrap();

    session.send(Event::OpenMenu("R2".into())).unwrap();
    let menu = session.viewmodel().menu_modal.unwrap();
    assert_eq!(menu.title, "Pizza Corner - Menu");
    assert_eq!(menu.entries.len(), 1);
}

#[test]
fn session_with_missing_feed_shows_load_error() {
    let dir = tempfile::tempdir().unwrap();
    write_feeds(dir.path());
    fs::remove_file(dir.path().join("faciltFoodType.json")).unwrap();

    let mut session = runtime().block_on(Session::mount(&config_for(dir.path()))).unwrap();
    assert!(session.state().load_failed());

    session.send(Event::Search(String::new())).unwrap();
    let vm = session.viewmodel();
    assert!(vm.cards.is_empty());
    assert_eq!(
        vm.error.as_deref(),
        Some("Unable to load data. Make sure all JSON files exist.")
    );
}

#[test]
fn unmount_deregisters_resize_listener() {
    let dir = tempfile::tempdir().unwrap();
    write_feeds(dir.path());

    let mut config = config_for(dir.path());
    config.viewport_width = 500;

    let mut session = runtime().block_on(Session::mount(&config)).unwrap();
    assert!(session.state().panel.is_collapsed());

    let viewport = session.viewport().clone();
    assert_eq!(viewport.listener_count(), 1);

    session.resize(1200).unwrap();
    assert!(!session.state().panel.is_collapsed());

    session.unmount();
    assert_eq!(viewport.listener_count(), 0);
    viewport.resize(300);
    assert!(!session.pump().unwrap());
    assert!(!session.state().panel.is_collapsed());
}

#[test]
fn config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dinescope.toml");
    fs::write(
        &path,
        r#"
data_dir = "~/catalog"
trace_level = "warn"

[labels]
menu_title_suffix = " (menu)"
"#,
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.trace_level.as_deref(), Some("warn"));
    assert_eq!(config.labels.menu_title_suffix, " (menu)");
    if let Some(home) = dinescope::infrastructure::home_dir() {
        assert_eq!(config.data_path(), home.join("catalog"));
    }

    assert!(matches!(
        Config::from_file(dir.path().join("missing.toml")),
        Err(CatalogError::Io(_))
    ));
}
