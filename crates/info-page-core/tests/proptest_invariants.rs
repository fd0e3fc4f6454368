//! Property-based invariant tests for info-page-core.
//!
//! These tests verify properties that must hold for **any** catalog:
//!
//! 1. With no filter, selecting a present class shows exactly its items.
//! 2. Every filtered item's search text contains the query; items without
//!    search text never appear.
//! 3. Re-selecting the active class renders nothing and plays no cue.
//! 4. Filtering then clearing restores the active class's list.
//! 5. Rendering is deterministic for a given state.
//! 6. Payload parsing never panics on arbitrary text.

use info_page_core::{
    Catalog, ClickCue, FilterText, InfoPageConfig, Item, Payload, Tile, ViewController, ViewHost,
    ViewState, parse_payload, render_plan, visible_items,
};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct Recorder {
    tiles: Vec<Tile>,
    empty: bool,
    calls: usize,
}

impl ViewHost for Recorder {
    fn highlight_category(&mut self, _active: &str) {
        self.calls += 1;
    }

    fn clear_tiles(&mut self) {
        self.tiles.clear();
        self.empty = false;
        self.calls += 1;
    }

    fn append_tile(&mut self, tile: &Tile) {
        self.tiles.push(tile.clone());
        self.calls += 1;
    }

    fn show_empty(&mut self, _message: &str) {
        self.empty = true;
        self.calls += 1;
    }
}

#[derive(Debug, Default)]
struct Cue(usize);

impl ClickCue for Cue {
    fn play(&mut self) {
        self.0 += 1;
    }
}

fn controller(catalog: Catalog, active: &str) -> ViewController<Recorder, Cue> {
    ViewController::start(
        Payload {
            active_class: Some(active.to_string()),
            catalog,
        },
        Recorder::default(),
        Cue::default(),
        InfoPageConfig::default(),
    )
}

// ── Strategies ──────────────────────────────────────────────────────────

fn arb_item() -> impl Strategy<Value = Item> {
    (
        "[A-Za-z ]{0,8}",
        proptest::option::of("[A-Za-z ]{0,8}"),
        proptest::option::of("[a-z ]{0,12}"),
    )
        .prop_map(|(name, title, search)| {
            let mut item = Item::new(name);
            if let Some(title) = title {
                item = item.with_title(title);
            }
            if let Some(search) = search {
                item = item.with_search(search);
            }
            item
        })
}

fn arb_catalog() -> impl Strategy<Value = Catalog> {
    proptest::collection::vec(
        ("[a-z]{1,6}", proptest::collection::vec(arb_item(), 0..6)),
        1..5,
    )
    .prop_map(Catalog::from_entries)
}

fn tiles_for(items: &[Item]) -> Vec<Tile> {
    items.iter().map(Tile::from_item).collect()
}

// ── 1. Class selection ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn selecting_present_class_shows_its_items(catalog in arb_catalog(), pick in any::<prop::sample::Index>()) {
        let keys: Vec<String> = catalog.keys().map(str::to_string).collect();
        let key = &keys[pick.index(keys.len())];
        let expected = tiles_for(catalog.get(key).unwrap_or_default());

        let mut view = controller(catalog.clone(), "\u{0}unset");
        view.select_category(key);

        prop_assert_eq!(&view.host().tiles, &expected);
        prop_assert_eq!(view.host().empty, expected.is_empty());
    }
}

// ── 2. Filter soundness ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn filtered_items_contain_query(catalog in arb_catalog(), raw in "[a-zA-Z ]{1,4}") {
        let filter = FilterText::normalize(&raw);
        prop_assume!(!filter.is_empty());

        for item in visible_items(&catalog, "", &filter) {
            let search = item.search.as_deref();
            prop_assert!(search.is_some());
            prop_assert!(search.unwrap_or_default().contains(filter.as_str()));
        }
    }

    #[test]
    fn filter_finds_every_match(catalog in arb_catalog(), raw in "[a-z]{1,3}") {
        let filter = FilterText::normalize(&raw);
        let expected = catalog
            .iter()
            .flat_map(|(_, items)| items.iter())
            .filter(|item| item.search.as_deref().is_some_and(|s| s.contains(filter.as_str())))
            .count();
        prop_assert_eq!(visible_items(&catalog, "", &filter).len(), expected);
    }
}

// ── 3. Idempotent selection ─────────────────────────────────────────────

proptest! {
    #[test]
    fn reselecting_active_class_is_noop(catalog in arb_catalog()) {
        let key = catalog.keys().next().unwrap_or_default().to_string();
        let mut view = controller(catalog, &key);
        let calls = view.host().calls;

        prop_assert!(!view.select_category(&key));
        prop_assert_eq!(view.host().calls, calls);
        prop_assert_eq!(view.cue().0, 0);
    }
}

// ── 4. Filter then clear ────────────────────────────────────────────────

proptest! {
    #[test]
    fn clearing_filter_restores_class(catalog in arb_catalog(), raw in "[a-z]{1,4}") {
        let key = catalog.keys().next().unwrap_or_default().to_string();
        let mut view = controller(catalog, &key);
        let before = view.host().tiles.clone();

        view.update_filter(&raw);
        view.update_filter("   ");

        prop_assert_eq!(&view.host().tiles, &before);
        prop_assert_eq!(view.state().active_category(), key.as_str());
    }
}

// ── 5. Determinism ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn render_plan_is_deterministic(catalog in arb_catalog(), raw in "[a-z ]{0,4}") {
        let key = catalog.keys().next().unwrap_or_default().to_string();
        let mut view = controller(catalog.clone(), &key);
        view.update_filter(&raw);

        let state: &ViewState = view.state();
        prop_assert_eq!(render_plan(&catalog, state), render_plan(&catalog, state));
        prop_assert_eq!(render_plan(&catalog, state).tile_count(), view.host().tiles.len());
    }
}

// ── 6. Parser robustness ────────────────────────────────────────────────

proptest! {
    #[test]
    fn parse_never_panics(text in ".{0,64}") {
        let _ = parse_payload(Some(&text));
    }

    #[test]
    fn parse_never_panics_on_jsonish(text in r#"[\{\}\[\]":,a-z0-9 ]{0,48}"#) {
        let _ = parse_payload(Some(&text));
    }
}

// ── Fixed scenarios ─────────────────────────────────────────────────────

#[test]
fn no_match_filter_renders_empty_state() {
    let payload = parse_payload(Some(
        r#"{"active_class":"scout","items_by_class":{
            "scout":[{"name":"Bat","search":"bat melee"}],
            "soldier":[{"name":"Rocket","search":"rocket launcher"}]}}"#,
    ))
    .expect("valid payload");
    let mut view = ViewController::start(
        payload,
        Recorder::default(),
        Cue::default(),
        InfoPageConfig::default(),
    );

    view.update_filter("zzz-no-match");
    assert!(view.host().tiles.is_empty());
    assert!(view.host().empty);
}
