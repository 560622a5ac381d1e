//! Plain-text dump of a rendered buffer

use ratatui::buffer::Buffer;

/// Cell symbols row by row, trailing blanks trimmed, styles dropped
pub fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buf.get(x, y).symbol());
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
