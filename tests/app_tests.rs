// Integration tests for the control loop state machine

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, layout::Rect, Terminal};
use sortviz::config::VisualizerConfig;
use sortviz::sort::{Algorithm, SortOrder};
use sortviz::ui::{App, Command};

fn seeded_config(seed: u64) -> VisualizerConfig {
    VisualizerConfig {
        count: 20,
        seed: Some(seed),
        ..VisualizerConfig::default()
    }
}

fn setup(seed: u64) -> (App, Terminal<TestBackend>) {
    let app = App::new(seeded_config(seed), Rect::new(0, 0, 80, 40)).expect("App creation failed");
    let terminal = Terminal::new(TestBackend::new(80, 40)).expect("Terminal creation failed");
    (app, terminal)
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer.content[buffer.index_of(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

/// Tick until the running sort finishes, returning the number of ticks
fn tick_until_idle(app: &mut App, terminal: &mut Terminal<TestBackend>) -> usize {
    let mut ticks = 0;
    while app.is_sorting() {
        app.tick(terminal).expect("tick failed");
        ticks += 1;
        assert!(ticks < 10_000, "sort never finished");
    }
    ticks
}

#[test]
fn test_starts_idle_with_configured_list() {
    let (app, _) = setup(1);
    assert!(!app.is_sorting());
    assert_eq!(app.list().len(), 20);
    assert!(app.list().values().iter().all(|v| (0..=100).contains(v)));
    assert_eq!(app.algorithm(), Algorithm::Bubble);
    assert_eq!(app.order(), SortOrder::Ascending);
}

#[test]
fn test_seed_makes_lists_reproducible() {
    let (first, _) = setup(42);
    let (second, _) = setup(42);
    assert_eq!(first.list().values(), second.list().values());
}

#[test]
fn test_invalid_config_rejected() {
    let config = VisualizerConfig {
        min_value: 5,
        max_value: 1,
        ..VisualizerConfig::default()
    };
    assert!(App::new(config, Rect::new(0, 0, 80, 40)).is_err());
}

#[test]
fn test_idle_tick_draws_full_frame() {
    let (mut app, mut terminal) = setup(2);
    app.tick(&mut terminal).unwrap();
    let text = screen_text(&terminal);
    assert!(text.contains("Bubble Sort - Ascending"));
    assert!(text.contains("R - Reset | SPACE - Start Sorting"));
    assert!(text.contains("I - Insertion Sort | B - Bubble Sort"));
}

#[test]
fn test_start_sorts_then_returns_to_idle() {
    let (mut app, mut terminal) = setup(3);
    app.apply(Command::Start);
    assert!(app.is_sorting());

    tick_until_idle(&mut app, &mut terminal);
    assert!(SortOrder::Ascending.is_sorted(app.list().values()));

    // Header survives chart-only redraws and the next idle tick repaints it anyway
    app.tick(&mut terminal).unwrap();
    assert!(screen_text(&terminal).contains("Bubble Sort - Ascending"));
}

#[test]
fn test_one_step_per_tick() {
    let (mut app, mut terminal) = setup(4);
    let mut expected = app.list().values().to_vec();
    let steps = sortviz::sort::SortSession::new(Algorithm::Bubble, SortOrder::Ascending)
        .run_to_completion(&mut expected);

    app.apply(Command::Start);
    app.tick(&mut terminal).unwrap();
    if steps > 0 {
        assert_eq!(app.session().map(|s| s.steps()), Some(1));
    }

    // One tick per swap, plus one final tick that reports completion
    let ticks = tick_until_idle(&mut app, &mut terminal);
    assert_eq!(1 + ticks, steps + 1);
    assert_eq!(app.list().values(), expected.as_slice());
}

#[test]
fn test_configuration_ignored_while_sorting() {
    let (mut app, _) = setup(5);
    app.apply(Command::Start);
    app.apply(Command::Descending);
    app.apply(Command::Insertion);
    assert_eq!(app.order(), SortOrder::Ascending);
    assert_eq!(app.algorithm(), Algorithm::Bubble);
    assert_eq!(app.session().map(|s| s.algorithm()), Some(Algorithm::Bubble));
}

#[test]
fn test_configuration_applies_when_idle() {
    let (mut app, mut terminal) = setup(6);
    app.apply(Command::Descending);
    app.apply(Command::Insertion);
    assert_eq!(app.order(), SortOrder::Descending);
    assert_eq!(app.algorithm(), Algorithm::Insertion);

    app.tick(&mut terminal).unwrap();
    assert!(screen_text(&terminal).contains("Insertion Sort - Descending"));

    app.apply(Command::Start);
    tick_until_idle(&mut app, &mut terminal);
    assert!(SortOrder::Descending.is_sorted(app.list().values()));

    app.apply(Command::Ascending);
    app.apply(Command::Bubble);
    assert_eq!(app.order(), SortOrder::Ascending);
    assert_eq!(app.algorithm(), Algorithm::Bubble);
}

#[test]
fn test_start_while_sorting_keeps_session() {
    let (mut app, mut terminal) = setup(7);
    app.apply(Command::Start);
    for _ in 0..3 {
        app.tick(&mut terminal).unwrap();
    }
    let steps = app.session().map(|s| s.steps());
    app.apply(Command::Start);
    assert_eq!(app.session().map(|s| s.steps()), steps);
}

#[test]
fn test_reset_mid_sort_returns_to_idle_with_new_list() {
    let (mut app, mut terminal) = setup(8);
    let before = app.list().values().to_vec();
    app.apply(Command::Start);
    for _ in 0..5 {
        app.tick(&mut terminal).unwrap();
    }

    app.apply(Command::Reset);
    assert!(!app.is_sorting());
    assert_eq!(app.list().len(), 20);
    assert_ne!(app.list().values(), before.as_slice());
}

#[test]
fn test_quit() {
    let (mut app, _) = setup(9);
    assert!(!app.should_quit());
    app.apply(Command::Quit);
    assert!(app.should_quit());
}

#[test]
fn test_uniform_list_renders_without_panic() {
    let config = VisualizerConfig {
        count: 10,
        min_value: 7,
        max_value: 7,
        seed: Some(0),
        ..VisualizerConfig::default()
    };
    let mut app = App::new(config, Rect::new(0, 0, 80, 40)).unwrap();
    let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
    app.tick(&mut terminal).unwrap();
    app.apply(Command::Start);
    let ticks = tick_until_idle(&mut app, &mut terminal);
    assert_eq!(ticks, 1);
    assert!(app.list().values().iter().all(|&v| v == 7));
}

#[test]
fn test_range_taller_than_chart_rejected() {
    let config = VisualizerConfig {
        min_value: 0,
        max_value: 1000,
        ..VisualizerConfig::default()
    };
    assert!(App::new(config, Rect::new(0, 0, 80, 40)).is_err());
}

#[test]
fn test_key_events_route_to_commands() {
    let (mut app, _) = setup(10);
    let key = |c| Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));

    app.handle_event(key('d'));
    app.handle_event(key('i'));
    assert_eq!(app.order(), SortOrder::Descending);
    assert_eq!(app.algorithm(), Algorithm::Insertion);

    app.handle_event(key(' '));
    assert!(app.is_sorting());

    app.handle_event(Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
    assert!(app.should_quit());
}

#[test]
fn test_resize_mid_sort_repaints_header() {
    let (mut app, mut terminal) = setup(11);
    let mut sorted = app.list().values().to_vec();
    let steps = sortviz::sort::SortSession::new(Algorithm::Bubble, SortOrder::Ascending)
        .run_to_completion(&mut sorted);
    assert!(steps > 2, "seeded list needs a few swaps");

    app.tick(&mut terminal).unwrap();
    app.apply(Command::Start);
    app.tick(&mut terminal).unwrap();
    assert!(app.is_sorting());

    app.handle_event(Event::Resize(100, 50));
    assert_eq!(app.surface().area(), Rect::new(0, 0, 100, 50));

    // A fresh backend only shows the header if the resize forced a full frame
    let mut resized = Terminal::new(TestBackend::new(100, 50)).unwrap();
    app.tick(&mut resized).unwrap();
    assert!(app.is_sorting());
    let text = screen_text(&resized);
    assert!(text.contains("Bubble Sort - Ascending"));
    assert!(text.contains("R - Reset | SPACE - Start Sorting"));

    tick_until_idle(&mut app, &mut resized);
    assert_eq!(app.list().values(), sorted.as_slice());
}
