//! Report formatting utilities for terminal output

/// A single separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// A double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// A header block: double separators around a padded title
pub fn header(title: &str, width: usize) -> String {
    let padding = if title.len() >= width {
        0
    } else {
        (width - title.len()) / 2
    };
    format!(
        "{}\n{}{}\n{}",
        double_separator(width),
        " ".repeat(padding),
        title,
        double_separator(width)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators() {
        assert_eq!(separator(3), "───");
        assert_eq!(double_separator(3), "═══");
    }

    #[test]
    fn test_header_centers_title() {
        let h = header("MENU", 10);
        let lines: Vec<_> = h.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "   MENU");
    }
}
