use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Regions of a page shell
#[derive(Debug, Clone, Copy)]
pub struct ShellAreas {
    pub size: Rect,
    pub header: Rect,
    pub body: Rect,
    pub sidebar: Rect,
    pub content: Rect,
}

pub fn shell_areas(size: Rect) -> ShellAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(size);

    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(24), Constraint::Percentage(76)])
        .split(vertical[1]);

    ShellAreas {
        size,
        header: vertical[0],
        body: vertical[1],
        sidebar: body_chunks[0],
        content: body_chunks[1],
    }
}

/// Splits the terminal into the page shell and the one-line status bar
pub fn screen_areas(size: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(size);
    (chunks[0], chunks[1])
}

/// Rectangle centered in `area`, sized as a percentage of it
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_areas_tile_the_screen() {
        let size = Rect::new(0, 0, 100, 40);
        let areas = shell_areas(size);
        assert_eq!(areas.header.height, 3);
        assert_eq!(areas.header.width, 100);
        assert_eq!(areas.sidebar.y, 3);
        assert_eq!(areas.content.y, 3);
        assert_eq!(areas.sidebar.width + areas.content.width, 100);
        assert_eq!(areas.content.x, areas.sidebar.right());
        assert_eq!(areas.body.height, 37);
    }

    #[test]
    fn test_screen_areas_reserve_status_line() {
        let (shell, status) = screen_areas(Rect::new(0, 0, 80, 24));
        assert_eq!(shell.height, 23);
        assert_eq!(status.height, 1);
        assert_eq!(status.y, 23);
    }
}
