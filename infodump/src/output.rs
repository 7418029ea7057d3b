use colored::Colorize;

/// Line-oriented console sink. Chosen once at startup; callers never
/// branch on which implementation they hold.
pub trait OutputSink {
    fn header(&self, title: &str);
    fn line(&self, text: &str);
    fn notice(&self, text: &str);
    fn error(&self, text: &str);
}

pub struct StyledSink;

pub struct PlainSink;

fn panel(title: &str) -> [String; 3] {
    let width = title.chars().count() + 2;
    [
        format!("╭{}╮", "─".repeat(width)),
        format!("│ {title} │"),
        format!("╰{}╯", "─".repeat(width)),
    ]
}

fn ruled(title: &str) -> String {
    format!("{0} {1} {0}", "=".repeat(20), title)
}

impl OutputSink for StyledSink {
    fn header(&self, title: &str) {
        println!();
        for line in panel(title) {
            println!("{}", line.cyan().bold());
        }
    }

    fn line(&self, text: &str) {
        println!("{text}");
    }

    fn notice(&self, text: &str) {
        println!("{}", text.yellow());
    }

    fn error(&self, text: &str) {
        println!("{}", text.red().bold());
    }
}

impl OutputSink for PlainSink {
    fn header(&self, title: &str) {
        println!("\n{}", ruled(title));
    }

    fn line(&self, text: &str) {
        println!("{text}");
    }

    fn notice(&self, text: &str) {
        println!("{text}");
    }

    fn error(&self, text: &str) {
        println!("{text}");
    }
}
