use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::shell_state::{ShellState, View};

/// Routes one key press. Returns true when the application should exit.
pub(crate) fn handle_key_press(shell: &mut ShellState, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if shell.nav_overlay_is_open() {
        handle_nav_overlay_key(shell, key);
        return false;
    }

    match shell.current_view() {
        View::Home => handle_home_key(shell, key),
        View::Projects => handle_projects_key(shell, key),
        View::Resume => handle_resume_key(shell, key),
        View::AiChat => handle_chat_key(shell, key),
        View::Contact => handle_contact_key(shell, key),
    }
}

fn view_for_digit(ch: char) -> Option<View> {
    let index = ch.to_digit(10)? as usize;
    if (1..=View::ALL.len()).contains(&index) {
        Some(View::ALL[index - 1])
    } else {
        None
    }
}

fn handle_nav_overlay_key(shell: &mut ShellState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('m') => shell.close_nav_overlay(),
        KeyCode::Up | KeyCode::Char('k') => shell.nav_overlay_move(-1),
        KeyCode::Down | KeyCode::Char('j') => shell.nav_overlay_move(1),
        KeyCode::Enter => shell.nav_overlay_confirm(),
        KeyCode::Char(ch) => {
            if let Some(view) = view_for_digit(ch) {
                shell.navigate(view);
            }
        }
        _ => {}
    }
}

/// Keys shared by the browse views (Home, Projects, Resume): quit, menu,
/// and direct view digits. Returns Some when the key was consumed.
fn handle_browse_common(shell: &mut ShellState, key: KeyEvent) -> Option<bool> {
    match key.code {
        KeyCode::Char('q') => Some(true),
        KeyCode::Char('m') => {
            shell.open_nav_overlay();
            Some(false)
        }
        KeyCode::Char(ch) => {
            let view = view_for_digit(ch)?;
            shell.navigate(view);
            Some(false)
        }
        _ => None,
    }
}

fn handle_home_key(shell: &mut ShellState, key: KeyEvent) -> bool {
    if let Some(quit) = handle_browse_common(shell, key) {
        return quit;
    }
    match key.code {
        KeyCode::Esc => {
            if shell.selected_skill.is_some() {
                shell.clear_skill_selection();
            } else {
                shell.open_nav_overlay();
            }
        }
        KeyCode::Left => shell.move_skill_selection(0, -1),
        KeyCode::Right => shell.move_skill_selection(0, 1),
        KeyCode::Up => shell.move_skill_selection(-1, 0),
        KeyCode::Down => shell.move_skill_selection(1, 0),
        _ => {}
    }
    false
}

fn handle_projects_key(shell: &mut ShellState, key: KeyEvent) -> bool {
    if let Some(quit) = handle_browse_common(shell, key) {
        return quit;
    }
    match key.code {
        KeyCode::Esc => {
            if shell.active_preview().is_some() {
                shell.dismiss_preview();
            } else {
                shell.open_nav_overlay();
            }
        }
        KeyCode::Up => shell.select_previous_project(),
        KeyCode::Down => shell.select_next_project(),
        KeyCode::Enter => shell.activate_selected_project(),
        _ => {}
    }
    false
}

fn handle_resume_key(shell: &mut ShellState, key: KeyEvent) -> bool {
    if let Some(quit) = handle_browse_common(shell, key) {
        return quit;
    }
    match key.code {
        KeyCode::Esc => shell.open_nav_overlay(),
        KeyCode::Up => shell.resume_scroll = shell.resume_scroll.saturating_sub(1),
        KeyCode::Down => shell.resume_scroll = shell.resume_scroll.saturating_add(1),
        KeyCode::Left => shell.carousel.previous(),
        KeyCode::Right => shell.carousel.next(),
        KeyCode::Home => shell.carousel.go_to(0),
        KeyCode::End => {
            let last = shell.carousel.len().saturating_sub(1);
            shell.carousel.go_to(last);
        }
        _ => {}
    }
    false
}

fn handle_chat_key(shell: &mut ShellState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => shell.open_nav_overlay(),
        KeyCode::Enter => shell.send_chat_message(),
        KeyCode::Backspace => {
            shell.chat_input.pop();
        }
        KeyCode::Up => shell.scroll_chat(-1),
        KeyCode::Down => shell.scroll_chat(1),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            shell.chat_input.push(ch);
        }
        _ => {}
    }
    false
}

fn handle_contact_key(shell: &mut ShellState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => shell.open_nav_overlay(),
        KeyCode::Tab => shell.contact.focused = shell.contact.focused.next(),
        KeyCode::BackTab => shell.contact.focused = shell.contact.focused.previous(),
        KeyCode::Enter => shell.submit_contact(),
        KeyCode::Backspace => {
            shell.contact.focused_value_mut().pop();
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            shell.contact.focused_value_mut().push(ch);
        }
        _ => {}
    }
    false
}
