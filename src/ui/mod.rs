//! UI module for rendering the TUI

mod fields;
mod inscripcion;
mod layout;
mod login;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let content = layout::content_area(frame.area());

    match app.state.current_view {
        View::Login => login::draw(frame, content, app),
        View::Inscripcion => inscripcion::draw(frame, content, app),
    }

    layout::draw_status_bar(frame, app);
}
