use boundcast_core::session::Summary;
use colored::*;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

pub fn header_line(msg: &str) -> String {
    let formatted: String = format!("⟦ {} ⟧", msg.to_uppercase());
    let msg_len: usize = UnicodeWidthStr::width(formatted.as_str());

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    format!(
        "{}{}{}",
        "─".repeat(left).bright_black(),
        formatted.bright_green(),
        "─".repeat(right).bright_black()
    )
}

fn rounds(count: usize) -> String {
    let unit: &str = if count == 1 { "round" } else { "rounds" };
    format!("{count} {unit}")
}

pub fn summary(summary: &Summary) {
    println!("{}", header_line("session finished"));
    println!(
        "{} {}",
        "> Reported:".bright_black(),
        rounds(summary.reported).green().bold()
    );
    println!(
        "{} {}",
        "> Rejected:".bright_black(),
        rounds(summary.rejected).yellow().bold()
    );
    println!("{}", "═".repeat(TOTAL_WIDTH).bright_black());
}
