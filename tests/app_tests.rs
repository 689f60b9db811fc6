//! End-to-end shell tests: key events and elapsed time in, screens and game
//! state out. No terminal involved.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use mctetris::input::ControlScheme;
use mctetris::term::{FrameBuffer, Viewport};
use mctetris::{App, AppConfig, Screen};

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::from(code));
}

fn config(scheme: ControlScheme, seed: u32) -> AppConfig {
    AppConfig {
        scheme,
        seed,
        tick_ms: 16,
        log_path: None,
    }
}

#[test]
fn numpad_scheme_drives_the_game() {
    let mut app = App::new(&config(ControlScheme::NumPad, 11));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.screen(), Screen::Game);

    let x0 = app.game().active().unwrap().origin.x;
    press(&mut app, KeyCode::Char('4'));
    assert_eq!(app.game().active().unwrap().origin.x, x0 - 1);
    press(&mut app, KeyCode::Char('6'));
    press(&mut app, KeyCode::Char('6'));
    assert_eq!(app.game().active().unwrap().origin.x, x0 + 1);

    // WASD keys mean nothing under NumPad.
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.game().active().unwrap().origin.x, x0 + 1);

    press(&mut app, KeyCode::Char('0'));
    assert!(app.game().active().is_none());
}

#[test]
fn switching_scheme_then_playing() {
    let mut app = App::new(&config(ControlScheme::Wasd, 5));

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.scheme(), ControlScheme::Arrows);

    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.screen(), Screen::Game);

    let y0 = app.game().active().unwrap().origin.y;
    press(&mut app, KeyCode::Down);
    assert_eq!(app.game().active().unwrap().origin.y, y0 + 1);
}

#[test]
fn ctrl_c_quits_from_game() {
    let mut app = App::new(&config(ControlScheme::Wasd, 5));
    press(&mut app, KeyCode::Enter);
    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(!app.running());
}

#[test]
fn long_idle_game_ends_by_gravity_alone() {
    let mut app = App::new(&config(ControlScheme::Wasd, 99));
    press(&mut app, KeyCode::Enter);

    // At level 0 each row takes 1000ms; twenty-odd pieces of at most twenty
    // rows each fit well inside this budget.
    for _ in 0..40_000 {
        app.update(16);
        if app.game().game_over() {
            break;
        }
    }
    assert!(app.game().game_over());
    assert_eq!(app.game().lines(), 0);

    let mut fb = FrameBuffer::new(80, 30);
    app.render_into(Viewport::new(80, 30), &mut fb);
    assert!(fb.text().contains("GAME OVER"));
}
