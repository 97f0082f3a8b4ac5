//! Modal dialogs drawn over the game.

use maze_frontend_core::Dialog;
use maze_frontend_core::dialog::{
    FileMenu, NEW_GAME_LABEL, NEW_GAME_TITLE, QUIT_MESSAGE, QUIT_TITLE,
};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, dialog: &Dialog, theme: &RatatuiTheme) {
    let (title, lines) = match dialog {
        Dialog::Message(text) => (
            "Message",
            vec![
                Line::from(text.as_str()),
                Line::default(),
                Line::from("[Enter] OK"),
            ],
        ),
        Dialog::ConfirmQuit => (
            QUIT_TITLE,
            vec![
                Line::from(QUIT_MESSAGE),
                Line::default(),
                Line::from("[y] Yes   [n] No"),
            ],
        ),
        Dialog::NewGame(prompt) => (
            NEW_GAME_TITLE,
            vec![
                Line::from(NEW_GAME_LABEL),
                Line::from(Span::styled(format!("> {}_", prompt.value()), theme.highlight())),
                Line::default(),
                Line::from("[Enter] Open   [Esc] Cancel"),
            ],
        ),
        Dialog::FileMenu(menu) => ("File", file_menu_lines(menu, theme)),
    };

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_style(theme.title()),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

fn file_menu_lines(menu: &FileMenu, theme: &RatatuiTheme) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = FileMenu::actions()
        .enumerate()
        .map(|(index, action)| {
            if index == menu.selected_index() {
                Line::from(Span::styled(format!("> {} <", action.label()), theme.highlight()))
            } else {
                Line::from(action.label())
            }
        })
        .collect();
    lines.push(Line::default());
    lines.push(Line::from("[Up/Down] Select   [Enter] Run   [Esc] Close"));
    lines
}
