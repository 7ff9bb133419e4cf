//! Footer component
//!
//! Renders key bindings for the active view

use crate::events::ViewKind;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn footer_text(view: ViewKind) -> &'static str {
    match view {
        ViewKind::Dashboard => "[Tab] Reviews | [↑/↓] Scroll | [R] Reload | [Q] Quit",
        ViewKind::Reviews => {
            "[Tab] Dashboard | [←/→] Filter | [↑/↓] Scroll | [R] Reload | [Q] Quit"
        }
    }
}

pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, view: ViewKind) {
    let footer = Paragraph::new(footer_text(view))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
