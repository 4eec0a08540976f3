//! End-to-end behaviour of the counter through the headless harness: every
//! control is located by its region id, activated the way a user would
//! (mouse click on its cell), and the result checked in both the view tree
//! and the rendered terminal output.

use tally::view::{ERROR_TEXT, RegionId};
use tally::widget::panel_layout;
use tally::{App, AppFlags, CounterState, Msg};
use tally_core::testing::TestProgram;

const WIDTH: u16 = 80;
const HEIGHT: u16 = 24;

fn setup(state: Option<CounterState>) -> TestProgram<App> {
    setup_sized(state, WIDTH, HEIGHT)
}

fn setup_sized(state: Option<CounterState>, width: u16, height: u16) -> TestProgram<App> {
    TestProgram::new(AppFlags {
        initial: state.unwrap_or_default(),
        size: (width, height),
    })
}

/// Press the left mouse button in the middle of a control.
fn click(prog: &mut TestProgram<App>, id: RegionId) {
    let rect = panel_layout(prog.model().body_area()).region(id);
    prog.send(Msg::Click {
        column: rect.x + rect.width / 2,
        row: rect.y + rect.height / 2,
    });
}

fn display_text(prog: &TestProgram<App>) -> String {
    prog.model()
        .tree()
        .find_by_test_id("counter-display")
        .map(|node| node.text_content())
        .unwrap_or_default()
}

fn error_count(prog: &TestProgram<App>) -> usize {
    prog.model().tree().count(RegionId::ErrorMessage)
}

fn screen(prog: &TestProgram<App>) -> String {
    prog.render_string(WIDTH, HEIGHT)
}

#[test]
fn renders_root_display_and_controls() {
    let prog = setup(None);
    let tree = prog.model().tree();
    for test_id in [
        "component-app",
        "counter-display",
        "increment-button",
        "decrement-button",
        "reset-button",
    ] {
        assert!(tree.find_by_test_id(test_id).is_some(), "missing {test_id}");
    }
    assert_eq!(tree.controls().len(), 3);
}

#[test]
fn counter_starts_at_zero() {
    let prog = setup(None);
    assert_eq!(prog.model().state().counter(), 0);
    assert_eq!(error_count(&prog), 0);
    assert!(display_text(&prog).contains('0'));
    assert!(screen(&prog).contains("You've clicked the button 0 times"));
    assert!(!screen(&prog).contains(ERROR_TEXT));
}

#[test]
fn increment_from_nine_shows_ten() {
    let mut prog = setup(Some(CounterState::from_parts(9, false)));
    click(&mut prog, RegionId::IncrementButton);
    assert!(display_text(&prog).contains("10"));
    assert!(screen(&prog).contains("You've clicked the button 10 times"));
}

#[test]
fn decrement_from_four_shows_three() {
    let mut prog = setup(Some(CounterState::from_parts(4, false)));
    click(&mut prog, RegionId::DecrementButton);
    assert!(display_text(&prog).contains('3'));
    assert!(screen(&prog).contains("You've clicked the button 3 times"));
}

#[test]
fn decrement_at_zero_shows_error() {
    let mut prog = setup(None);
    assert_eq!(error_count(&prog), 0);
    click(&mut prog, RegionId::DecrementButton);
    assert_eq!(error_count(&prog), 1);
    assert_eq!(prog.model().state().counter(), 0);
    assert!(screen(&prog).contains(ERROR_TEXT));
}

#[test]
fn repeated_decrement_at_zero_keeps_single_error() {
    let mut prog = setup(None);
    click(&mut prog, RegionId::DecrementButton);
    click(&mut prog, RegionId::DecrementButton);
    assert_eq!(error_count(&prog), 1);
    assert_eq!(*prog.model().state(), CounterState::from_parts(0, true));
}

#[test]
fn increment_clears_error() {
    let mut prog = setup(Some(CounterState::from_parts(0, true)));
    assert_eq!(error_count(&prog), 1);
    click(&mut prog, RegionId::IncrementButton);
    assert_eq!(error_count(&prog), 0);
    assert_eq!(prog.model().state().counter(), 1);
    assert!(!screen(&prog).contains(ERROR_TEXT));
}

#[test]
fn reset_from_six_shows_zero() {
    let mut prog = setup(Some(CounterState::from_parts(6, false)));
    click(&mut prog, RegionId::ResetButton);
    assert!(display_text(&prog).contains('0'));
    assert!(screen(&prog).contains("You've clicked the button 0 times"));
}

#[test]
fn reset_clears_error() {
    let mut prog = setup(Some(CounterState::from_parts(0, true)));
    assert_eq!(error_count(&prog), 1);
    click(&mut prog, RegionId::ResetButton);
    assert_eq!(error_count(&prog), 0);
    assert_eq!(prog.model().state().counter(), 0);
}

#[test]
fn reset_is_idempotent() {
    let mut prog = setup(Some(CounterState::from_parts(3, false)));
    click(&mut prog, RegionId::ResetButton);
    let once = *prog.model().state();
    click(&mut prog, RegionId::ResetButton);
    assert_eq!(*prog.model().state(), once);
    assert_eq!(once, CounterState::default());
}

#[test]
fn controls_keep_position_when_error_appears() {
    let mut prog = setup(None);
    let before = screen(&prog);
    click(&mut prog, RegionId::DecrementButton);
    let after = screen(&prog);
    let button_rows = |s: &str| -> Vec<String> {
        s.lines()
            .filter(|line| line.contains("Increment"))
            .map(str::to_string)
            .collect()
    };
    assert_eq!(button_rows(&before), button_rows(&after));
}

#[test]
fn footer_shows_help() {
    let prog = setup(None);
    let last = screen(&prog).lines().last().map(str::to_string).unwrap_or_default();
    assert!(last.contains("increment"));
    assert!(last.contains("tally v"));
}

#[test]
fn error_stays_visible_on_short_terminals() {
    let prog = setup(Some(CounterState::from_parts(0, true)));
    for height in 2..=HEIGHT {
        let out = prog.render_string(WIDTH, height);
        assert!(out.contains(ERROR_TEXT), "height {height}:\n{out}");
    }
}

#[test]
fn no_error_on_short_terminals_without_flag() {
    let prog = setup(None);
    for height in 2..=HEIGHT {
        let out = prog.render_string(WIDTH, height);
        assert!(!out.contains(ERROR_TEXT), "height {height}:\n{out}");
        assert!(!out.contains(" | "), "height {height}:\n{out}");
    }
}

#[test]
fn one_body_row_shows_count_and_error_together() {
    let prog = setup(Some(CounterState::from_parts(0, true)));
    let out = prog.render_string(WIDTH, 2);
    let first = out.lines().next().unwrap_or_default();
    assert!(first.contains("0 | The counter can't go below 0"), "{out}");
}

#[test]
fn count_stays_visible_on_narrow_terminals() {
    let prog = setup(Some(CounterState::from_parts(1234, false)));
    for width in [8, 20, 30, 40, 51, 52, WIDTH] {
        let out = prog.render_string(width, HEIGHT);
        assert!(out.contains("1234"), "width {width}:\n{out}");
    }
}

#[test]
fn clicks_work_in_compact_layout() {
    let mut prog = setup_sized(None, 40, 8);
    click(&mut prog, RegionId::IncrementButton);
    click(&mut prog, RegionId::IncrementButton);
    click(&mut prog, RegionId::DecrementButton);
    assert_eq!(prog.model().state().counter(), 1);
    click(&mut prog, RegionId::ResetButton);
    click(&mut prog, RegionId::DecrementButton);
    assert!(prog.render_string(40, 8).contains(ERROR_TEXT));
}
