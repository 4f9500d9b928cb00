use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};

use crate::runtime::{Focus, InputEvent, OverlayState};

use super::AppController;

pub fn handle_input(controller: &mut AppController, input: InputEvent) -> bool {
    match input {
        InputEvent::Key(key) if key.kind == KeyEventKind::Release => false,
        InputEvent::Key(key) => dispatch_key(controller, key),
        InputEvent::Mouse(mouse) => handle_mouse(controller, mouse),
        InputEvent::Paste(text) => handle_paste(controller, &text),
        InputEvent::Resize(w, h) => {
            controller.state.terminal_size = (w, h);
            true
        }
    }
}

fn dispatch_key(controller: &mut AppController, key: KeyEvent) -> bool {
    if controller.state.overlay != OverlayState::None {
        controller.state.overlay = OverlayState::None;
        return true;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return handle_ctrl_key(controller, key);
    }
    if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
        return toggle_focus(controller);
    }
    match controller.state.focus {
        Focus::Input => handle_input_key(controller, key),
        Focus::Log => handle_log_key(controller, key),
    }
}

fn handle_ctrl_key(controller: &mut AppController, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('q') => quit(controller),
        KeyCode::Char('n') => controller.step(),
        KeyCode::Char('p') => controller.toggle_playing(),
        KeyCode::Char('u') if controller.state.focus == Focus::Input => {
            controller.state.input.clear() && controller.reset_from_input()
        }
        _ => false,
    }
}

fn handle_input_key(controller: &mut AppController, key: KeyEvent) -> bool {
    let input = &mut controller.state.input;
    match key.code {
        KeyCode::Char(ch) => {
            input.insert_char(ch);
            controller.reset_from_input()
        }
        KeyCode::Backspace => input.backspace() && controller.reset_from_input(),
        KeyCode::Delete => input.delete() && controller.reset_from_input(),
        KeyCode::Left => {
            input.move_left();
            true
        }
        KeyCode::Right => {
            input.move_right();
            true
        }
        KeyCode::Home => {
            input.move_home();
            true
        }
        KeyCode::End => {
            input.move_end();
            true
        }
        KeyCode::Enter => controller.step(),
        KeyCode::Esc => toggle_focus(controller),
        _ => false,
    }
}

fn handle_log_key(controller: &mut AppController, key: KeyEvent) -> bool {
    let rows = controller.state.revealed_rows();
    match key.code {
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => controller.step(),
        KeyCode::Char(' ') | KeyCode::Char('p') => controller.toggle_playing(),
        KeyCode::Up | KeyCode::Char('k') => controller.state.selection.select_prev(rows),
        KeyCode::Down | KeyCode::Char('j') => controller.state.selection.select_next(rows),
        KeyCode::Home | KeyCode::Char('g') => controller.state.selection.select_first(rows),
        KeyCode::End | KeyCode::Char('G') => {
            controller.state.selection.follow();
            true
        }
        KeyCode::Enter | KeyCode::Char('r') => controller.revert_to_selected(),
        KeyCode::Char('i') | KeyCode::Char('/') => toggle_focus(controller),
        KeyCode::Char('?') => {
            controller.state.overlay = OverlayState::Help;
            true
        }
        KeyCode::Char('q') => quit(controller),
        _ => false,
    }
}

fn handle_mouse(controller: &mut AppController, mouse: MouseEvent) -> bool {
    let rows = controller.state.revealed_rows();
    match mouse.kind {
        MouseEventKind::ScrollUp => controller.state.selection.select_prev(rows),
        MouseEventKind::ScrollDown => controller.state.selection.select_next(rows),
        _ => false,
    }
}

fn handle_paste(controller: &mut AppController, text: &str) -> bool {
    if controller.state.focus != Focus::Input {
        return false;
    }
    controller.state.input.insert_str(text);
    controller.reset_from_input()
}

fn toggle_focus(controller: &mut AppController) -> bool {
    controller.state.focus = match controller.state.focus {
        Focus::Input => Focus::Log,
        Focus::Log => Focus::Input,
    };
    true
}

fn quit(controller: &mut AppController) -> bool {
    log::info!("quit at {}", controller.state.playback.status());
    controller.state.should_quit = true;
    true
}
