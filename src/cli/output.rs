//! Output formatting for the CLI

use crate::board::Board;

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Render a board with row and column indices for interactive play
pub fn board_with_coords(board: &Board) -> String {
    let mut out = String::from("    0 1 2\n");
    for row in 0..3 {
        out.push_str(&format!(" {row} "));
        for col in 0..3 {
            out.push(' ');
            out.push(board.get(row * 3 + col).to_char());
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(549946), "549,946");
    }

    #[test]
    fn test_board_with_coords() {
        let board = Board::from_string("X...O...X").unwrap();
        let rendered = board_with_coords(&board);
        assert!(rendered.starts_with("    0 1 2\n"));
        assert!(rendered.contains(" 0  X . .\n"));
        assert!(rendered.contains(" 1  . O .\n"));
        assert!(rendered.contains(" 2  . . X\n"));
    }
}
