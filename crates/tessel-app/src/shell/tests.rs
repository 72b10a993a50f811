use tessel_common::{Action, Direction, TabId};
use tessel_config::{save_config_to_path, SettingsStore, TesselConfig};
use tessel_platform::{KeyCombo, MatchResult};
use tessel_tiling::{LayoutTree, SplitDirection, DEFAULT_URL};
use tessel_webview::{KeyPress, SurfaceEvent};

use super::*;
use crate::headless::{HeadlessHost, HeadlessSurface};

fn shell() -> BrowserShell<HeadlessHost> {
    BrowserShell::new(HeadlessHost::new(), SettingsStore::in_memory())
}

fn surface<'a>(shell: &'a BrowserShell<HeadlessHost>, tab: &TabId) -> &'a HeadlessSurface {
    shell.surfaces().lookup(tab).unwrap()
}

fn active(shell: &BrowserShell<HeadlessHost>) -> TabId {
    shell.store().active_tab().unwrap().id.clone()
}

fn key(name: &str) -> KeyCombo {
    KeyCombo::from_modifiers(false, false, false, false, name)
}

fn ctrl(name: &str) -> KeyCombo {
    KeyCombo::from_modifiers(true, false, false, false, name)
}

fn emit(shell: &mut BrowserShell<HeadlessHost>, tab: &TabId, event: SurfaceEvent) {
    shell.host_mut().emit(tab, event).unwrap();
}

fn split_percentage(shell: &BrowserShell<HeadlessHost>) -> f64 {
    match shell.store().active_group().unwrap().layout() {
        LayoutTree::Split {
            split_percentage, ..
        } => *split_percentage,
        LayoutTree::Leaf(_) => panic!("expected a split"),
    }
}

// -- Groups and panes --

#[test]
fn new_group_gets_a_focused_surface() {
    let mut shell = shell();
    assert!(shell.dispatch(Action::NewTabGroup));

    let tab = active(&shell);
    let s = surface(&shell, &tab);
    assert_eq!(s.url, DEFAULT_URL);
    assert!(s.focused);
    assert_eq!(s.calls, vec!["focus"]);
}

#[test]
fn second_group_takes_focus_from_the_first() {
    let mut shell = shell();
    shell.dispatch(Action::NewTabGroup);
    let first = active(&shell);
    shell.new_group(Some("https://example.com"));
    let second = active(&shell);

    assert_ne!(first, second);
    assert_eq!(shell.store().len(), 2);
    assert!(!surface(&shell, &first).focused);
    assert!(surface(&shell, &second).focused);
}

#[test]
fn split_moves_focus_into_the_new_pane() {
    let mut shell = shell();
    shell.dispatch(Action::NewTabGroup);
    let original = active(&shell);

    assert!(shell.dispatch(Action::SplitHorizontal));
    let new = active(&shell);
    assert_ne!(new, original);
    assert_eq!(surface(&shell, &original).calls, vec!["focus", "blur"]);
    assert_eq!(surface(&shell, &new).calls, vec!["focus"]);

    let rects = shell.compute_layout();
    assert_eq!(rects.len(), 2);
    let x_of = |id: &TabId| rects.iter().find(|(t, _)| t == id).unwrap().1.x;
    assert!(x_of(&new) < x_of(&original));
}

#[test]
fn split_without_group_does_nothing() {
    let mut shell = shell();
    assert!(!shell.dispatch(Action::SplitVertical));
    assert_eq!(shell.surfaces().count(), 0);
}

#[test]
fn directional_focus_stops_at_the_edge() {
    let mut shell = shell();
    shell.dispatch(Action::NewTabGroup);
    let right = active(&shell);
    shell.dispatch(Action::SplitHorizontal);
    let left = active(&shell);

    assert!(shell.dispatch(Action::FocusDirection(Direction::Right)));
    assert_eq!(active(&shell), right);
    assert!(surface(&shell, &right).focused);
    assert!(!surface(&shell, &left).focused);
    assert!(!shell.dispatch(Action::FocusDirection(Direction::Right)));
}

#[test]
fn close_unregisters_the_surface_and_refocuses() {
    let mut shell = shell();
    shell.dispatch(Action::NewTabGroup);
    let kept = active(&shell);
    shell.dispatch(Action::SplitVertical);
    let closed = active(&shell);

    assert!(shell.dispatch(Action::CloseTab));
    assert!(!shell.surfaces().contains(&closed));
    assert_eq!(active(&shell), kept);
    assert_eq!(surface(&shell, &kept).calls.last().unwrap(), "focus");
}

#[test]
fn closing_the_last_pane_removes_the_group() {
    let mut shell = shell();
    shell.dispatch(Action::NewTabGroup);
    assert!(shell.dispatch(Action::CloseTab));
    assert!(shell.store().is_empty());
    assert!(shell.snapshot().active_tab_group.is_none());
    assert_eq!(shell.surfaces().count(), 0);
    assert!(!shell.dispatch(Action::CloseTab));
}

#[test]
fn close_others_keeps_only_the_active_pane() {
    let mut shell = shell();
    shell.dispatch(Action::NewTabGroup);
    shell.dispatch(Action::SplitHorizontal);
    shell.dispatch(Action::SplitVertical);
    let kept = active(&shell);

    assert!(shell.dispatch(Action::CloseOtherTabs));
    assert_eq!(shell.surfaces().tabs(), vec![kept]);
    assert!(!shell.dispatch(Action::CloseOtherTabs));
}

#[test]
fn maximize_fills_the_viewport_and_hides_dividers() {
    let mut shell = shell();
    shell.dispatch(Action::NewTabGroup);
    shell.dispatch(Action::SplitHorizontal);
    assert_eq!(shell.split_borders().len(), 1);

    assert!(shell.dispatch(Action::MaximizePane));
    let rects = shell.compute_layout();
    assert_eq!(rects.len(), 1);
    assert_eq!(rects[0].1, DEFAULT_VIEWPORT);
    assert!(shell.split_borders().is_empty());
}

#[test]
fn resize_and_equalize_move_the_divider() {
    let mut shell = shell();
    shell.dispatch(Action::NewTabGroup);
    shell.dispatch(Action::SplitHorizontal);

    assert!(shell.dispatch(Action::ResizePane {
        direction: Direction::Right,
        delta: 2,
    }));
    assert!(split_percentage(&shell) > 50.0);
    assert!(shell.dispatch(Action::EqualizePanes));
    assert_eq!(split_percentage(&shell), 50.0);
}

#[test]
fn swap_exchanges_neighbors() {
    let mut shell = shell();
    shell.dispatch(Action::NewTabGroup);
    let right = active(&shell);
    shell.dispatch(Action::SplitHorizontal);
    let left = active(&shell);

    assert!(shell.swap(Direction::Right));
    let leaves = shell.store().active_group().unwrap().layout().leaf_ids();
    assert_eq!(leaves, vec![right, left]);
}

// -- Surface commands and navigation --

#[test]
fn surface_commands_reach_the_active_pane() {
    let mut shell = shell();
    shell.dispatch(Action::NewTabGroup);
    let tab = active(&shell);

    assert!(shell.dispatch(Action::Reload));
    assert!(shell.dispatch(Action::ZoomIn));
    assert!(shell.dispatch(Action::ToggleDevTools));
    assert!(shell.dispatch(Action::LoseFocus));

    let s = surface(&shell, &tab);
    assert_eq!(
        s.calls,
        vec!["focus", "reload", "zoom 1.1", "toggle_devtools", "blur"]
    );
    assert!(s.devtools_open);
    assert!(!s.focused);
}

#[test]
fn surface_commands_without_a_pane_are_ignored() {
    let mut shell = shell();
    assert!(!shell.dispatch(Action::Reload));
    assert!(!shell.dispatch(Action::GoBack));
}

#[test]
fn open_url_normalizes_and_loads() {
    let mut shell = shell();
    shell.dispatch(Action::NewTabGroup);
    let tab = active(&shell);

    assert!(shell.dispatch(Action::OpenUrl("example.com".into())));
    assert_eq!(shell.store().tab(&tab).unwrap().url, "https://example.com/");
    assert_eq!(
        surface(&shell, &tab).calls.last().unwrap(),
        "load https://example.com/"
    );
}

#[test]
fn navigating_without_a_group_opens_one() {
    let mut shell = shell();
    assert!(shell.navigate_active("rust-lang.org"));
    assert_eq!(shell.store().len(), 1);
    assert_eq!(shell.store().active_tab().unwrap().url, "https://rust-lang.org/");
}

#[test]
fn blank_address_is_rejected() {
    let mut shell = shell();
    shell.dispatch(Action::NewTabGroup);
    assert!(!shell.navigate_active("   "));
    assert_eq!(shell.store().active_tab().unwrap().url, DEFAULT_URL);
}

#[test]
fn shell_toggles_flip() {
    let mut shell = shell();
    assert!(shell.is_sidebar_open());
    shell.dispatch(Action::ToggleSidebar);
    shell.dispatch(Action::ToggleFullscreen);
    shell.dispatch(Action::OpenCommandBar);
    assert!(!shell.is_sidebar_open());
    assert!(shell.is_fullscreen());
    assert!(shell.is_command_bar_open());
    assert!(!shell.dispatch(Action::None));
}

// -- Hotkeys --

#[test]
fn key_sequence_splits_vertically() {
    let mut shell = shell();
    shell.dispatch(Action::NewTabGroup);

    assert_eq!(shell.handle_key(key("w")), MatchResult::Pending);
    assert_eq!(shell.handle_key(key("s")), MatchResult::Pending);
    assert_eq!(
        shell.handle_key(key("v")),
        MatchResult::Matched(Action::SplitVertical)
    );
    match shell.store().active_group().unwrap().layout() {
        LayoutTree::Split { direction, .. } => assert_eq!(*direction, SplitDirection::Column),
        LayoutTree::Leaf(_) => panic!("expected a split"),
    }
}

#[test]
fn chorded_hotkey_navigates_panes() {
    let mut shell = shell();
    shell.dispatch(Action::NewTabGroup);
    let right = active(&shell);
    shell.dispatch(Action::SplitHorizontal);

    assert_eq!(shell.handle_key(ctrl("w")), MatchResult::Pending);
    assert_eq!(
        shell.handle_key(key("l")),
        MatchResult::Matched(Action::FocusDirection(Direction::Right))
    );
    assert_eq!(active(&shell), right);
}

#[test]
fn changing_a_hotkey_rebinds_it() {
    let mut shell = shell();
    shell
        .set_setting(
            "settings.hotkeys.Browser.openNewTab",
            toml::Value::String("ctrl+t".into()),
        )
        .unwrap();

    assert_eq!(shell.handle_key(key("t")), MatchResult::NoMatch);
    assert_eq!(
        shell.handle_key(ctrl("t")),
        MatchResult::Matched(Action::NewTabGroup)
    );
    assert_eq!(shell.store().len(), 1);
    assert_eq!(
        shell.settings().get("settings.hotkeys.Browser.openNewTab"),
        Some(toml::Value::String("ctrl+t".into()))
    );
}

#[test]
fn unknown_setting_is_an_error() {
    let mut shell = shell();
    let err = shell.set_setting("settings.nope", toml::Value::Boolean(true));
    assert!(err.is_err());
}

#[test]
fn apply_settings_swaps_hotkeys() {
    let mut shell = shell();
    let mut config = TesselConfig::default();
    config.settings.hotkeys.browser.open_new_tab = "n".into();

    assert!(shell.apply_settings(config));
    assert_eq!(
        shell.handle_key(key("n")),
        MatchResult::Matched(Action::NewTabGroup)
    );
}

#[test]
fn apply_settings_rejects_invalid_config() {
    let mut shell = shell();
    let mut config = TesselConfig::default();
    config.settings.background_color = "not a color".into();

    assert!(!shell.apply_settings(config));
    assert_eq!(
        shell.settings().settings().background_color,
        TesselConfig::default().settings.background_color
    );
}

#[test]
fn reload_settings_reads_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    let settings = SettingsStore::open(&path).unwrap();
    let mut shell = BrowserShell::new(HeadlessHost::new(), settings);

    let mut edited = TesselConfig::default();
    edited.settings.hotkeys.browser.open_new_tab = "n".into();
    save_config_to_path(&edited, &path).unwrap();

    assert!(shell.dispatch(Action::ReloadSettings));
    assert_eq!(shell.settings().config(), &edited);
    assert_eq!(
        shell.handle_key(key("n")),
        MatchResult::Matched(Action::NewTabGroup)
    );
}

#[test]
fn reload_settings_in_memory_is_a_noop() {
    let mut shell = shell();
    assert!(!shell.dispatch(Action::ReloadSettings));
}

// -- Surface events --

#[test]
fn surface_events_update_the_tab() {
    let mut shell = shell();
    let tab = shell.new_group(None);

    emit(&mut shell, &tab, SurfaceEvent::Navigated { url: "https://a.com/".into() });
    emit(&mut shell, &tab, SurfaceEvent::TitleChanged { title: "A".into() });
    emit(
        &mut shell,
        &tab,
        SurfaceEvent::IconChanged {
            icons: vec!["https://a.com/icon.png".into(), "https://a.com/other.png".into()],
        },
    );
    emit(&mut shell, &tab, SurfaceEvent::DomReady);
    assert_eq!(shell.pump_surface_events(), 4);

    let t = shell.store().tab(&tab).unwrap();
    assert_eq!(t.url, "https://a.com/");
    assert_eq!(t.title.as_deref(), Some("A"));
    assert_eq!(t.icon.as_deref(), Some("https://a.com/icon.png"));
    assert_eq!(shell.pump_surface_events(), 0);
}

#[test]
fn popup_request_opens_a_group() {
    let mut shell = shell();
    let tab = shell.new_group(None);

    emit(
        &mut shell,
        &tab,
        SurfaceEvent::NewWindowRequested {
            url: "https://popup.example/".into(),
        },
    );
    shell.pump_surface_events();

    assert_eq!(shell.store().len(), 2);
    assert_eq!(shell.store().active_tab().unwrap().url, "https://popup.example/");
    assert!(!surface(&shell, &tab).focused);
}

#[test]
fn focus_gained_activates_the_pane() {
    let mut shell = shell();
    let right = shell.new_group(None);
    shell.dispatch(Action::SplitHorizontal);
    assert_ne!(active(&shell), right);

    emit(&mut shell, &right, SurfaceEvent::FocusGained);
    shell.pump_surface_events();
    assert_eq!(active(&shell), right);
}

#[test]
fn focus_from_a_background_group_is_ignored() {
    let mut shell = shell();
    let first = shell.new_group(None);
    shell.dispatch(Action::SplitHorizontal);
    let hidden_active = active(&shell);
    let hidden_group = shell.store().active_group_id().unwrap().clone();
    let second = shell.new_group(None);

    emit(&mut shell, &first, SurfaceEvent::FocusGained);
    shell.pump_surface_events();

    assert_eq!(active(&shell), second);
    assert_eq!(shell.store().group(&hidden_group).unwrap().active_id(), &hidden_active);
}

#[test]
fn key_events_from_a_surface_trigger_hotkeys() {
    let mut shell = shell();
    let tab = shell.new_group(None);
    shell.dispatch(Action::SplitHorizontal);
    let new = active(&shell);

    let mut close = KeyPress::plain("w");
    close.ctrl = true;
    emit(&mut shell, &new, SurfaceEvent::KeyDown(close));
    emit(&mut shell, &new, SurfaceEvent::KeyDown(KeyPress::plain("c")));
    shell.pump_surface_events();

    assert!(!shell.surfaces().contains(&new));
    assert_eq!(active(&shell), tab);
}

#[test]
fn events_queued_behind_a_close_are_dropped() {
    let mut shell = shell();
    let tab = shell.new_group(None);
    shell.dispatch(Action::SplitHorizontal);
    let new = active(&shell);

    let mut close = KeyPress::plain("w");
    close.ctrl = true;
    emit(&mut shell, &new, SurfaceEvent::KeyDown(close));
    emit(&mut shell, &new, SurfaceEvent::KeyDown(KeyPress::plain("c")));
    emit(
        &mut shell,
        &new,
        SurfaceEvent::NewWindowRequested {
            url: "https://popup.example/".into(),
        },
    );
    emit(&mut shell, &new, SurfaceEvent::TitleChanged { title: "late".into() });
    assert_eq!(shell.pump_surface_events(), 4);

    assert_eq!(shell.store().len(), 1);
    assert!(shell.store().tab(&new).is_none());
    assert_eq!(active(&shell), tab);
}

// -- Command bar --

#[test]
fn command_bar_url_navigates_and_closes() {
    let mut shell = shell();
    shell.new_group(None);
    shell.dispatch(Action::OpenCommandBar);

    assert_eq!(
        shell.run_command_bar("example.com !url"),
        CommandBarOutcome::Navigated("https://example.com/".into())
    );
    assert!(!shell.is_command_bar_open());
}

#[test]
fn command_bar_web_search_uses_duckduckgo() {
    let mut shell = shell();
    shell.new_group(None);

    let CommandBarOutcome::Navigated(url) = shell.run_command_bar("!ws rust lang") else {
        panic!("expected navigation");
    };
    assert!(url.starts_with("https://duckduckgo.com/?t=h_&q=rust%20lang"));
}

#[test]
fn command_bar_marker_alone_is_ignored() {
    let mut shell = shell();
    shell.new_group(None);
    assert_eq!(shell.run_command_bar("!url"), CommandBarOutcome::Ignored);
    assert_eq!(shell.run_command_bar("  !ws "), CommandBarOutcome::Ignored);
}

#[test]
fn command_bar_filter_lists_other_groups() {
    let mut shell = shell();
    let docs = shell.new_group(None);
    emit(&mut shell, &docs, SurfaceEvent::TitleChanged { title: "Rust Docs".into() });
    shell.pump_surface_events();
    shell.new_group(None);

    let CommandBarOutcome::Results(results) = shell.run_command_bar("rust docs") else {
        panic!("expected results");
    };
    assert_eq!(results.other_tabs.len(), 1);
    assert_eq!(results.other_tabs[0].title, "Rust Docs");

    let group = results.other_tabs[0].group.clone();
    assert!(shell.select_group(&group));
    assert_eq!(active(&shell), docs);
    assert!(surface(&shell, &docs).focused);
}

// -- Drags --

#[test]
fn divider_drag_resizes_and_blocks_pointer_events() {
    let mut shell = shell();
    let right = shell.new_group(None);
    shell.dispatch(Action::SplitHorizontal);
    let left = active(&shell);

    assert!(shell.begin_resize_drag(640.0, 100.0));
    assert!(matches!(shell.drag(), Some(DragState::Divider { .. })));
    assert!(!surface(&shell, &left).pointer_events);
    assert!(!surface(&shell, &right).pointer_events);

    assert!(shell.update_resize_drag(320.0, 100.0));
    assert_eq!(split_percentage(&shell), 25.0);

    assert!(shell.end_drag());
    assert!(shell.drag().is_none());
    assert!(surface(&shell, &left).pointer_events);
    assert!(surface(&shell, &right).pointer_events);
}

#[test]
fn pane_split_during_a_drag_waits_for_the_drop() {
    let mut shell = shell();
    let right = shell.new_group(None);
    shell.dispatch(Action::SplitHorizontal);

    assert!(shell.begin_resize_drag(640.0, 100.0));
    assert!(shell.dispatch(Action::SplitVertical));
    let late = active(&shell);
    assert!(!surface(&shell, &late).pointer_events);
    assert!(shell.drag().unwrap().tabs().contains(&late));

    assert!(shell.end_drag());
    assert!(surface(&shell, &late).pointer_events);
    assert!(surface(&shell, &right).pointer_events);
}

#[test]
fn drop_restores_the_dragged_group_after_switching() {
    let mut shell = shell();
    let first = shell.new_group(None);
    shell.dispatch(Action::SplitHorizontal);
    let left = active(&shell);
    let first_group = shell.store().active_group_id().unwrap().clone();
    let other = shell.new_group(None);
    let other_group = shell.store().active_group_id().unwrap().clone();
    assert!(shell.select_group(&first_group));

    assert!(shell.begin_resize_drag(640.0, 100.0));
    assert!(shell.select_group(&other_group));
    assert!(shell.update_resize_drag(320.0, 100.0));
    assert!(shell.end_drag());

    assert!(surface(&shell, &first).pointer_events);
    assert!(surface(&shell, &left).pointer_events);
    assert!(!surface(&shell, &other).calls.iter().any(|c| c.starts_with("pointer_events")));
    match shell.store().group(&first_group).unwrap().layout() {
        LayoutTree::Split {
            split_percentage, ..
        } => assert_eq!(*split_percentage, 25.0),
        LayoutTree::Leaf(_) => panic!("expected a split"),
    }
}

#[test]
fn drag_off_a_divider_does_not_start() {
    let mut shell = shell();
    shell.new_group(None);
    shell.dispatch(Action::SplitHorizontal);

    assert!(!shell.begin_resize_drag(10.0, 10.0));
    assert!(shell.drag().is_none());
    assert!(!shell.update_resize_drag(320.0, 10.0));
    assert!(!shell.end_drag());
}

#[test]
fn group_tile_drag_reorders_groups() {
    let mut shell = shell();
    for _ in 0..3 {
        shell.new_group(None);
    }
    let ids = shell.store().group_ids().to_vec();

    assert!(shell.begin_group_drag());
    assert!(!shell.begin_resize_drag(640.0, 100.0));
    assert!(shell.drag_end(&ids[2], &ids[0]));
    assert!(shell.drag().is_none());
    assert_eq!(
        shell.store().group_ids(),
        &[ids[2].clone(), ids[0].clone(), ids[1].clone()]
    );
}
