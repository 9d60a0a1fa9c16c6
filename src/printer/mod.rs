//! Printers: text, markdown (termimad), and captured sandbox output.

use owo_colors::OwoColorize;
use termimad::MadSkin;

pub struct TextPrinter {
    pub color: Option<&'static str>,
}

impl TextPrinter {
    pub fn print(&self, text: &str) {
        if let Some(c) = self.color {
            match c {
                "green" => println!("{}", text.green()),
                "cyan" => println!("{}", text.cyan()),
                "magenta" => println!("{}", text.magenta()),
                "yellow" => println!("{}", text.yellow()),
                _ => println!("{}", text),
            }
        } else {
            println!("{}", text);
        }
    }
}

pub struct MarkdownPrinter {
    pub skin: MadSkin,
    pub width: usize,
}

impl Default for MarkdownPrinter {
    fn default() -> Self {
        Self { skin: MadSkin::default(), width: 100 }
    }
}

impl MarkdownPrinter {
    pub fn print(&self, text: &str) { self.skin.print_text(text); println!(); }
}

/// Print one captured output line with its positional number, colored by
/// its channel marker.
pub fn print_output_line(number: usize, line: &str) {
    let gutter = format!("{:>3} ", number);
    if line.starts_with("❌") {
        println!("{}{}", gutter.dimmed(), line.red());
    } else if line.starts_with("⚠️") {
        println!("{}{}", gutter.dimmed(), line.yellow());
    } else if line.starts_with("ℹ️") {
        println!("{}{}", gutter.dimmed(), line.cyan());
    } else if line.starts_with("✅") {
        println!("{}{}", gutter.dimmed(), line.green());
    } else if line.starts_with("Return: ") {
        println!("{}{}", gutter.dimmed(), line.magenta());
    } else {
        println!("{}{}", gutter.dimmed(), line);
    }
}
