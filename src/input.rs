use crate::app::{Action, App, Focus, GridMove, InputMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Translate a key press into an action for the current screen state.
///
/// Modal surfaces take precedence in this order: alert, help, text entry,
/// detail overlay. Keys a surface does not use are dropped, which is what
/// keeps the grid inert while an overlay is open.
pub fn action_for_key(app: &App, key: KeyEvent) -> Option<Action> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    if app.alert.is_some() {
        return Some(Action::DismissAlert);
    }

    if app.show_help {
        return Some(Action::ToggleHelp);
    }

    match app.input_mode {
        InputMode::Search => return search_key(key),
        InputMode::ImportPath => return import_key(key),
        InputMode::Normal => {}
    }

    if app.detail.is_some() {
        return detail_key(key);
    }

    match app.focus {
        Focus::Grid => grid_key(app, key),
        Focus::Filters => filters_key(app, key),
    }
}

fn search_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => Some(Action::EndSearch),
        KeyCode::Backspace => Some(Action::SearchBackspace),
        KeyCode::Char(c) => Some(Action::SearchInput(c)),
        _ => None,
    }
}

fn import_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Enter => Some(Action::SubmitImport),
        KeyCode::Esc => Some(Action::CancelImport),
        KeyCode::Backspace => Some(Action::ImportBackspace),
        KeyCode::Char(c) => Some(Action::ImportInput(c)),
        _ => None,
    }
}

fn detail_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::CloseDetail),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevImage),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::NextImage),
        KeyCode::Char(c @ '1'..='9') => Some(Action::SelectImage(c as usize - '1' as usize)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::ScrollDetail(1)),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::ScrollDetail(-1)),
        KeyCode::PageDown => Some(Action::ScrollDetail(10)),
        KeyCode::PageUp => Some(Action::ScrollDetail(-10)),
        _ => None,
    }
}

fn filters_key(app: &App, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Tab | KeyCode::Esc => Some(Action::FocusGrid),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::ChipPrev),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::ChipNext),
        KeyCode::Enter | KeyCode::Char(' ') => app
            .category_options
            .get(app.chip_cursor)
            .cloned()
            .map(Action::SelectCategory),
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Char('/') => Some(Action::BeginSearch),
        _ => None,
    }
}

fn grid_key(app: &App, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Char('/') => Some(Action::BeginSearch),
        KeyCode::Tab => Some(Action::FocusFilters),
        KeyCode::Char('e') => Some(Action::Export),
        KeyCode::Char('i') => Some(Action::BeginImport),
        KeyCode::Esc => Some(Action::ClearSearch),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveSelection(GridMove::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveSelection(GridMove::Right)),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveSelection(GridMove::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveSelection(GridMove::Down)),
        KeyCode::PageUp => Some(Action::MoveSelection(GridMove::PageUp)),
        KeyCode::PageDown => Some(Action::MoveSelection(GridMove::PageDown)),
        KeyCode::Char('g') | KeyCode::Home => Some(Action::MoveSelection(GridMove::First)),
        KeyCode::Char('G') | KeyCode::End => Some(Action::MoveSelection(GridMove::Last)),
        KeyCode::Enter => app
            .selected_recipe()
            .map(|r| Action::OpenDetail(r.id.clone())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CategoryFilter;
    use crate::messages::CatalogMessage;
    use crate::recipe::sample;
    use std::path::PathBuf;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        let mut app = App::new(PathBuf::from("."));
        app.apply_message(CatalogMessage::Loaded(Ok(vec![
            sample("a", "Ayran", &["İçecek"]),
            sample("b", "Börek", &["Hamur İşi"]),
        ])));
        app
    }

    #[test]
    fn test_enter_opens_selected_card() {
        let app = app();
        assert_eq!(
            action_for_key(&app, key(KeyCode::Enter)),
            Some(Action::OpenDetail("a".to_string()))
        );
    }

    #[test]
    fn test_enter_on_empty_grid_does_nothing() {
        let app = App::new(PathBuf::from("."));
        assert_eq!(action_for_key(&app, key(KeyCode::Enter)), None);
    }

    #[test]
    fn test_filter_bar_activates_chip_under_cursor() {
        let mut app = app();
        app.dispatch(action_for_key(&app, key(KeyCode::Tab)).unwrap());
        app.dispatch(action_for_key(&app, key(KeyCode::Right)).unwrap());
        assert_eq!(
            action_for_key(&app, key(KeyCode::Enter)),
            Some(Action::SelectCategory(CategoryFilter::Named(
                "İçecek".to_string()
            )))
        );
    }

    #[test]
    fn test_detail_overlay_is_modal() {
        let mut app = app();
        app.dispatch(Action::OpenDetail("a".to_string()));
        assert_eq!(action_for_key(&app, key(KeyCode::Char('e'))), None);
        assert_eq!(action_for_key(&app, key(KeyCode::Char('2'))), Some(Action::SelectImage(1)));
        assert_eq!(action_for_key(&app, key(KeyCode::Esc)), Some(Action::CloseDetail));
    }

    #[test]
    fn test_search_mode_captures_letters() {
        let mut app = app();
        app.dispatch(Action::BeginSearch);
        assert_eq!(
            action_for_key(&app, key(KeyCode::Char('q'))),
            Some(Action::SearchInput('q'))
        );
        assert_eq!(action_for_key(&app, key(KeyCode::Esc)), Some(Action::EndSearch));
    }

    #[test]
    fn test_alert_swallows_next_key() {
        let mut app = app();
        app.alert = Some("Invalid JSON format".to_string());
        assert_eq!(
            action_for_key(&app, key(KeyCode::Char('q'))),
            Some(Action::DismissAlert)
        );
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let mut app = app();
        app.dispatch(Action::BeginImport);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for_key(&app, ctrl_c), Some(Action::Quit));
    }
}
