//! Line-driven headless front end.
//!
//! Each input line is one command. Commands that change state answer with
//! the store snapshot; queries answer with their own JSON. Errors are
//! reported as `{"error": ...}` and never stop the loop.

use std::io::{self, BufRead, Write};

use serde_json::{json, Value};
use tessel_common::{Action, Direction, GroupId, Rect, TesselError};
use tessel_platform::{parse_hotkey, KeyCombo, MatchResult};
use tessel_tiling::LayoutBox;
use tessel_webview::{normalize_url, KeyPress, SurfaceEvent};
use tracing::debug;

use crate::headless::HeadlessHost;
use crate::shell::{BrowserShell, CommandBarOutcome};

pub type HeadlessShell = BrowserShell<HeadlessHost>;

pub const HELP: &str = "\
commands:
  new [url]                 open a tab group
  split row|column          split the active pane
  close | close-others      close panes
  focus left|right|up|down|next|prev
  resize <dir> [steps]      move the divider next to the active pane
  swap <dir>                swap the active pane with its neighbor
  maximize | equalize
  url <address>             navigate the active pane
  reload | back | forward | devtools | zoom in|out|reset
  toggle sidebar|fullscreen|bar
  key <hotkey>              press keys, e.g. `key ctrl+w h`
  bar <text>                run the command bar (`!url`, `!ws`, or a filter)
  select <n>                activate the n-th group
  move <from> <to>          drag group tile `from` onto `to`
  drag <x1> <y1> <x2> <y2>  drag a divider
  event <kind> [value]      navigated|title|icon|focus|ready|popup|keydown on the active pane
  viewport <w> <h> | layout
  get <key> | set <key> <value> | keys
  state | help | quit";

fn bad(msg: impl Into<String>) -> TesselError {
    TesselError::Other(msg.into())
}

fn parse_direction(word: Option<&str>) -> Result<Direction, TesselError> {
    let word = word.ok_or_else(|| bad("missing direction"))?;
    Direction::parse(word).ok_or_else(|| bad(format!("unknown direction '{word}'")))
}

fn parse_number<T: std::str::FromStr>(word: Option<&str>, what: &str) -> Result<T, TesselError> {
    word.ok_or_else(|| bad(format!("missing {what}")))?
        .parse()
        .map_err(|_| bad(format!("invalid {what}")))
}

fn group_at(shell: &HeadlessShell, index: Option<&str>) -> Result<GroupId, TesselError> {
    let index: usize = parse_number(index, "group index")?;
    shell
        .store()
        .group_ids()
        .get(index)
        .cloned()
        .ok_or_else(|| bad(format!("no group at index {index}")))
}

fn match_json(result: &MatchResult) -> Value {
    match result {
        MatchResult::Matched(action) => json!({ "matched": action, "label": action.label() }),
        MatchResult::Pending => json!({ "match": "pending" }),
        MatchResult::NoMatch => json!({ "match": "none" }),
    }
}

fn snapshot(shell: &HeadlessShell, changed: bool) -> Result<Value, TesselError> {
    let state = serde_json::to_value(shell.snapshot()).map_err(|e| bad(e.to_string()))?;
    Ok(json!({
        "changed": changed,
        "state": state,
        "ui": {
            "commandBar": shell.is_command_bar_open(),
            "sidebar": shell.is_sidebar_open(),
            "fullscreen": shell.is_fullscreen(),
            "background": shell.background_color().to_hex(),
        },
    }))
}

fn toml_value(raw: &str) -> toml::Value {
    match raw {
        "true" => toml::Value::Boolean(true),
        "false" => toml::Value::Boolean(false),
        _ => toml::Value::String(raw.to_string()),
    }
}

fn emit_on_active(shell: &mut HeadlessShell, event: SurfaceEvent) -> Result<(), TesselError> {
    let tab = shell
        .store()
        .active_tab()
        .map(|t| t.id.clone())
        .ok_or_else(|| bad("no active tab"))?;
    shell.host_mut().emit(&tab, event)?;
    shell.pump_surface_events();
    Ok(())
}

/// Execute one command line. `Ok(None)` means quit.
pub fn execute(shell: &mut HeadlessShell, line: &str) -> Result<Option<Value>, TesselError> {
    let line = line.trim();
    let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    let mut args = rest.split_whitespace();
    debug!(command, rest, "driver command");

    let changed = match command {
        "" => return Ok(Some(Value::Null)),
        "quit" | "exit" => return Ok(None),
        "help" => return Ok(Some(json!({ "help": HELP }))),
        "state" => return snapshot(shell, false).map(Some),

        "new" if rest.is_empty() => shell.dispatch(Action::NewTabGroup),
        "new" => {
            shell.new_group(Some(&normalize_url(rest)?));
            true
        }
        "split" => match args.next() {
            Some("row") | Some("horizontal") => shell.dispatch(Action::SplitHorizontal),
            Some("column") | Some("vertical") => shell.dispatch(Action::SplitVertical),
            other => return Err(bad(format!("unknown split direction {other:?}"))),
        },
        "close" => shell.dispatch(Action::CloseTab),
        "close-others" => shell.dispatch(Action::CloseOtherTabs),
        "focus" => match args.next() {
            Some("next") => shell.dispatch(Action::FocusNextTab),
            Some("prev") => shell.dispatch(Action::FocusPrevTab),
            word => shell.dispatch(Action::FocusDirection(parse_direction(word)?)),
        },
        "resize" => {
            let direction = parse_direction(args.next())?;
            let delta = match args.next() {
                Some(n) => parse_number(Some(n), "steps")?,
                None => 1,
            };
            shell.dispatch(Action::ResizePane { direction, delta })
        }
        "swap" => shell.swap(parse_direction(args.next())?),
        "maximize" => shell.dispatch(Action::MaximizePane),
        "equalize" => shell.dispatch(Action::EqualizePanes),
        "url" => shell.dispatch(Action::OpenUrl(rest.to_string())),
        "toggle" => match args.next() {
            Some("sidebar") => shell.dispatch(Action::ToggleSidebar),
            Some("fullscreen") => shell.dispatch(Action::ToggleFullscreen),
            Some("bar") => shell.dispatch(Action::OpenCommandBar),
            other => return Err(bad(format!("unknown toggle {other:?}"))),
        },
        "reload" => shell.dispatch(Action::Reload),
        "back" => shell.dispatch(Action::GoBack),
        "forward" => shell.dispatch(Action::GoForward),
        "devtools" => shell.dispatch(Action::ToggleDevTools),
        "zoom" => match args.next() {
            Some("in") => shell.dispatch(Action::ZoomIn),
            Some("out") => shell.dispatch(Action::ZoomOut),
            Some("reset") => shell.dispatch(Action::ResetZoom),
            other => return Err(bad(format!("unknown zoom {other:?}"))),
        },

        "key" => {
            let chords = parse_hotkey(rest)?;
            let mut last = MatchResult::NoMatch;
            for chord in &chords {
                last = shell.handle_key(KeyCombo::from_keybind(chord));
            }
            return Ok(Some(match_json(&last)));
        }
        "bar" => {
            return Ok(Some(match shell.run_command_bar(rest) {
                CommandBarOutcome::Navigated(url) => json!({ "navigated": url }),
                CommandBarOutcome::Results(results) => json!({ "results": results }),
                CommandBarOutcome::Ignored => json!({ "ignored": true }),
            }));
        }
        "select" => {
            let group = group_at(shell, args.next())?;
            shell.select_group(&group)
        }
        "move" => {
            let active = group_at(shell, args.next())?;
            let over = group_at(shell, args.next())?;
            shell.begin_group_drag();
            shell.drag_end(&active, &over)
        }
        "drag" => {
            let x1: f64 = parse_number(args.next(), "x")?;
            let y1: f64 = parse_number(args.next(), "y")?;
            let x2: f64 = parse_number(args.next(), "x")?;
            let y2: f64 = parse_number(args.next(), "y")?;
            if !shell.begin_resize_drag(x1, y1) {
                return Err(bad("no divider at that point"));
            }
            let moved = shell.update_resize_drag(x2, y2);
            shell.end_drag();
            moved
        }
        "event" => {
            let kind = args.next().ok_or_else(|| bad("missing event kind"))?;
            let value = rest[kind.len()..].trim().to_string();
            let event = match kind {
                "navigated" => SurfaceEvent::Navigated { url: value },
                "title" => SurfaceEvent::TitleChanged { title: value },
                "icon" => SurfaceEvent::IconChanged { icons: vec![value] },
                "focus" => SurfaceEvent::FocusGained,
                "ready" => SurfaceEvent::DomReady,
                "popup" => SurfaceEvent::NewWindowRequested { url: value },
                "keydown" => SurfaceEvent::KeyDown(KeyPress::plain(value)),
                other => return Err(bad(format!("unknown event '{other}'"))),
            };
            emit_on_active(shell, event)?;
            true
        }

        "viewport" => {
            let width: f64 = parse_number(args.next(), "width")?;
            let height: f64 = parse_number(args.next(), "height")?;
            shell.set_viewport(Rect::new(0.0, 0.0, width, height));
            return layout(shell).map(Some);
        }
        "layout" => return layout(shell).map(Some),
        "get" => {
            let key = args.next().ok_or_else(|| bad("missing key"))?;
            let value = shell.settings().get(key);
            return Ok(Some(json!({ "key": key, "value": value })));
        }
        "set" => {
            let key = args.next().ok_or_else(|| bad("missing key"))?;
            let raw = rest[key.len()..].trim();
            shell.set_setting(key, toml_value(raw))?;
            return Ok(Some(json!({ "key": key, "value": shell.settings().get(key) })));
        }
        "keys" => return Ok(Some(json!({ "keys": shell.settings().keys() }))),

        other => return Err(bad(format!("unknown command '{other}' (try `help`)"))),
    };

    snapshot(shell, changed).map(Some)
}

fn layout(shell: &HeadlessShell) -> Result<Value, TesselError> {
    let boxes: Vec<LayoutBox> = shell
        .compute_layout()
        .into_iter()
        .map(|(id, rect)| LayoutBox::from_rect(id, rect))
        .collect();
    Ok(json!({ "viewport": shell.viewport(), "panes": boxes }))
}

/// Run commands from `input` until it ends or `quit`. `before_line` runs
/// ahead of every command, e.g. to apply reloaded settings.
pub fn run(
    shell: &mut HeadlessShell,
    input: impl BufRead,
    mut out: impl Write,
    mut before_line: impl FnMut(&mut HeadlessShell),
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        before_line(shell);
        let reply = match execute(shell, &line) {
            Ok(None) => break,
            Ok(Some(Value::Null)) => continue,
            Ok(Some(value)) => value,
            Err(e) => json!({ "error": e.to_string() }),
        };
        writeln!(out, "{reply}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessel_config::SettingsStore;

    fn shell() -> HeadlessShell {
        BrowserShell::new(HeadlessHost::new(), SettingsStore::in_memory())
    }

    fn exec(shell: &mut HeadlessShell, line: &str) -> Value {
        execute(shell, line).unwrap().unwrap()
    }

    fn run_script(shell: &mut HeadlessShell, script: &str) -> Vec<Value> {
        let mut out = Vec::new();
        run(shell, script.as_bytes(), &mut out, |_| {}).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn new_and_split_report_state() {
        let mut shell = shell();
        let reply = exec(&mut shell, "new example.com");
        assert_eq!(reply["changed"], true);
        assert_eq!(
            reply["state"]["tabGroups"][0]["tabs"][0]["url"],
            "https://example.com/"
        );

        let reply = exec(&mut shell, "split row");
        assert_eq!(reply["state"]["tabGroups"][0]["layout"]["direction"], "row");
        assert_eq!(shell.surfaces().count(), 2);
    }

    #[test]
    fn toggles_show_in_ui_flags() {
        let mut shell = shell();
        let reply = exec(&mut shell, "toggle sidebar");
        assert_eq!(reply["ui"]["sidebar"], false);
        let reply = exec(&mut shell, "toggle bar");
        assert_eq!(reply["ui"]["commandBar"], true);
        assert_eq!(reply["ui"]["background"], "#b7a153");
    }

    #[test]
    fn background_follows_settings() {
        let mut shell = shell();
        exec(&mut shell, "set settings.backgroundColor #ABC");
        let reply = exec(&mut shell, "state");
        assert_eq!(reply["ui"]["background"], "#aabbcc");
    }

    #[test]
    fn key_command_feeds_each_chord() {
        let mut shell = shell();
        exec(&mut shell, "new");
        assert_eq!(exec(&mut shell, "key w s"), json!({ "match": "pending" }));
        assert_eq!(
            exec(&mut shell, "key v"),
            json!({ "matched": Action::SplitVertical, "label": "Split Vertically" })
        );
        assert_eq!(exec(&mut shell, "key q"), json!({ "match": "none" }));
    }

    #[test]
    fn events_update_the_active_tab() {
        let mut shell = shell();
        exec(&mut shell, "new");
        exec(&mut shell, "event title Hello World");
        let reply = exec(&mut shell, "event navigated https://a.com/");
        let tab = &reply["state"]["tabGroups"][0]["tabs"][0];
        assert_eq!(tab["title"], "Hello World");
        assert_eq!(tab["url"], "https://a.com/");
    }

    #[test]
    fn bar_command_reports_outcome() {
        let mut shell = shell();
        exec(&mut shell, "new");
        assert_eq!(
            exec(&mut shell, "bar !url example.com"),
            json!({ "navigated": "https://example.com/" })
        );
        assert_eq!(exec(&mut shell, "bar !url"), json!({ "ignored": true }));
        let reply = exec(&mut shell, "bar zoom");
        assert!(reply["results"]["hotkeys"].as_array().unwrap().len() >= 3);
    }

    #[test]
    fn move_reorders_groups() {
        let mut shell = shell();
        for _ in 0..3 {
            exec(&mut shell, "new");
        }
        let ids = shell.store().group_ids().to_vec();
        let reply = exec(&mut shell, "move 0 2");
        assert_eq!(reply["changed"], true);
        assert_eq!(
            shell.store().group_ids(),
            &[ids[1].clone(), ids[2].clone(), ids[0].clone()]
        );
    }

    #[test]
    fn drag_moves_the_divider() {
        let mut shell = shell();
        exec(&mut shell, "new");
        exec(&mut shell, "split row");
        let reply = exec(&mut shell, "drag 640 100 960 100");
        assert_eq!(reply["state"]["tabGroups"][0]["layout"]["splitPercentage"], 75.0);
        assert!(shell.drag().is_none());
        assert!(execute(&mut shell, "drag 5 5 10 10").is_err());
    }

    #[test]
    fn layout_reports_pixel_boxes() {
        let mut shell = shell();
        exec(&mut shell, "new");
        let reply = exec(&mut shell, "viewport 800 600");
        assert_eq!(reply["viewport"]["width"], 800.0);
        assert_eq!(reply["panes"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn get_and_set_settings() {
        let mut shell = shell();
        let reply = exec(&mut shell, "set settings.adBlocker true");
        assert_eq!(reply["value"], true);
        let reply = exec(&mut shell, "get settings.adBlocker");
        assert_eq!(reply["value"], true);
        assert!(execute(&mut shell, "set settings.adBlocker maybe").is_err());
        assert!(execute(&mut shell, "set settings.unknown 1").is_err());
    }

    #[test]
    fn run_reports_errors_and_stops_at_quit() {
        let mut shell = shell();
        let replies = run_script(
            &mut shell,
            "new\n\nfrobnicate\nfocus sideways\nquit\nnew\n",
        );
        assert_eq!(replies.len(), 3);
        assert_eq!(replies[0]["changed"], true);
        assert!(replies[1]["error"].as_str().unwrap().contains("frobnicate"));
        assert!(replies[2]["error"].as_str().unwrap().contains("sideways"));
        assert_eq!(shell.store().len(), 1);
    }

    #[test]
    fn run_calls_hook_before_each_line() {
        let mut shell = shell();
        let mut calls = 0;
        let mut out = Vec::new();
        run(&mut shell, "state\nstate\n".as_bytes(), &mut out, |_| calls += 1).unwrap();
        assert_eq!(calls, 2);
    }
}
