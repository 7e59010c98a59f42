use colored::Colorize;

/// Bold banner printed once at startup.
pub fn print_title(text: &str) {
    println!("{}", format!("\n{}", text).bold());
}

/// Blank line between output sections.
pub fn print_divider() {
    println!();
}

/// Yellow `=== ... ===` header opening a report section.
pub fn print_section_header(text: &str) {
    println!("{}", format!("\n=== {} ===", text).yellow().bold());
}

/// Cyan arrow line for run status, dates, and file paths.
pub fn print_message(text: &str) {
    println!("{}", format!("→ {}", text).cyan());
}

/// Blue diamond line for counts and totals.
pub fn print_count(text: &str) {
    println!("{}", format!("⟐ {}", text).blue());
}

/// Red cross line for failures that deserve the user's attention.
pub fn print_error(text: &str) {
    println!("{}", format!("✗ {}", text).red());
}
