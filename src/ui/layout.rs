use ratatui::layout::{Constraint, Direction, Layout, Rect};

const MENU_WIDTH: u16 = 24;

/// Header, body and footer rows.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 4.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Split the body into an optional menu column and the step panel.
pub fn split_body(body: Rect, with_menu: bool) -> (Option<Rect>, Rect) {
    if !with_menu || body.width <= MENU_WIDTH * 2 {
        return (None, body);
    }
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(MENU_WIDTH), Constraint::Min(1)])
        .split(body);
    (Some(columns[0]), columns[1])
}
