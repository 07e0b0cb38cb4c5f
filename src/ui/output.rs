use crate::error::{PetLabelsError, UserFriendlyError};
use crate::labels::{LabelReport, LabelStatistics};
use console::{style, Emoji, Term};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Human,
    Json,
    Plain,
}

// Emojis with text fallbacks
static CROSS: Emoji = Emoji("❌ ", "✗ ");
static INFO: Emoji = Emoji("ℹ️  ", "i ");
static WARNING: Emoji = Emoji("⚠️  ", "! ");
static PAW: Emoji = Emoji("🐾 ", "* ");

const NO_LABEL: &str = "(no label)";

pub struct OutputFormatter {
    mode: OutputMode,
    use_colors: bool,
    verbose_level: u8,
    quiet: bool,
}

impl OutputFormatter {
    pub fn new(mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let use_colors = match mode {
            OutputMode::Human => Term::stdout().features().colors_supported() && !quiet,
            _ => false,
        };

        Self {
            mode,
            use_colors,
            verbose_level: if quiet { 0 } else { verbose },
            quiet,
        }
    }

    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Human => self.print_human_message(MessageType::Error, message),
            OutputMode::Json => self.print_json_message("error", message),
            OutputMode::Plain => eprintln!("ERROR: {}", message),
        }
    }

    pub fn warning(&self, message: &str) {
        if self.should_show_message(1) {
            match self.mode {
                OutputMode::Human => self.print_human_message(MessageType::Warning, message),
                OutputMode::Json => self.print_json_message("warning", message),
                OutputMode::Plain => eprintln!("WARNING: {}", message),
            }
        }
    }

    pub fn info(&self, message: &str) {
        if self.should_show_message(1) {
            match self.mode {
                OutputMode::Human => self.print_human_message(MessageType::Info, message),
                OutputMode::Json => self.print_json_message("info", message),
                OutputMode::Plain => eprintln!("INFO: {}", message),
            }
        }
    }

    pub fn print_user_friendly_error(&self, error: &PetLabelsError) {
        self.error(&error.user_message());

        if let Some(suggestion) = error.suggestion() {
            match self.mode {
                OutputMode::Human => {
                    if self.use_colors {
                        eprintln!(
                            "{}{}",
                            INFO,
                            style(&format!("Suggestion: {}", suggestion)).cyan()
                        );
                    } else {
                        eprintln!("Suggestion: {}", suggestion);
                    }
                }
                OutputMode::Json => {
                    self.print_json_object(&serde_json::json!({
                        "type": "suggestion",
                        "message": suggestion
                    }));
                }
                OutputMode::Plain => eprintln!("SUGGESTION: {}", suggestion),
            }
        }
    }

    pub fn print_label_report(&self, report: &LabelReport, show_statistics: bool) {
        match self.mode {
            OutputMode::Human => self.print_human_report(report, show_statistics),
            OutputMode::Json => {
                let json_output = report.to_json_pretty().unwrap_or_else(|_| "{}".to_string());
                println!("{}", json_output);
            }
            OutputMode::Plain => self.print_plain_report(report, show_statistics),
        }
    }

    fn print_header(&self, title: &str) {
        if self.quiet {
            return;
        }

        println!();
        if self.use_colors {
            println!("{}{}", PAW, style(title).bold().cyan());
        } else {
            println!("=== {} ===", title);
        }
        println!();
    }

    fn print_separator(&self) {
        if self.use_colors {
            println!("{}", style("─".repeat(60)).dim());
        } else {
            println!("{}", "-".repeat(60));
        }
    }

    fn should_show_message(&self, min_verbose_level: u8) -> bool {
        !self.quiet && self.verbose_level >= min_verbose_level
    }

    fn print_human_message(&self, msg_type: MessageType, message: &str) {
        if self.use_colors {
            let (emoji, styled) = match msg_type {
                MessageType::Error => (CROSS, style(message).red().bold()),
                MessageType::Warning => (WARNING, style(message).yellow().bold()),
                MessageType::Info => (INFO, style(message).cyan()),
            };

            match msg_type {
                MessageType::Error => eprintln!("{}{}", emoji, styled),
                _ => println!("{}{}", emoji, styled),
            }
        } else {
            let prefix = match msg_type {
                MessageType::Error => "✗",
                MessageType::Warning => "!",
                MessageType::Info => "i",
            };

            match msg_type {
                MessageType::Error => eprintln!("{} {}", prefix, message),
                _ => println!("{} {}", prefix, message),
            }
        }
    }

    fn print_json_message(&self, level: &str, message: &str) {
        self.print_json_object(&serde_json::json!({
            "type": "message",
            "level": level,
            "message": message,
            "timestamp": chrono::Utc::now().to_rfc3339()
        }));
    }

    // stdout carries only the report document in JSON mode
    fn print_json_object(&self, obj: &serde_json::Value) {
        eprintln!(
            "{}",
            serde_json::to_string(obj).unwrap_or_else(|_| "{}".to_string())
        );
    }

    fn print_human_report(&self, report: &LabelReport, show_statistics: bool) {
        self.print_header(&format!("Pet labels in {}", report.directory_display()));

        let width = report.labels.keys().map(|k| k.chars().count()).max().unwrap_or(0);
        for (filename, label) in &report.labels {
            let label = display_label(label);
            if self.use_colors {
                println!("  {:<width$}  {}", filename, style(label).cyan().bold(), width = width);
            } else {
                println!("  {:<width$}  {}", filename, label, width = width);
            }
        }

        if report.labels.is_empty() {
            self.warning("No labeled images found");
        }

        if show_statistics && !self.quiet {
            println!();
            self.print_separator();
            print!("{}", report.statistics.display_summary());
            self.print_separator();
        }
    }

    fn print_plain_report(&self, report: &LabelReport, show_statistics: bool) {
        for (filename, label) in &report.labels {
            println!("{}\t{}", filename, label);
        }

        if show_statistics && !self.quiet {
            print_plain_statistics(&report.statistics);
        }
    }
}

fn display_label(label: &str) -> &str {
    if label.is_empty() {
        NO_LABEL
    } else {
        label
    }
}

fn print_plain_statistics(stats: &LabelStatistics) {
    println!("Entries: {}", stats.total_entries);
    println!("Labeled: {}", stats.labeled_entries);
    println!("Hidden: {}", stats.hidden_skipped);
    println!("Unlabeled: {}", stats.unlabeled_entries);
    if stats.duplicate_keys > 0 {
        println!("Duplicates: {}", stats.duplicate_keys);
    }
}

#[derive(Debug, Clone, Copy)]
enum MessageType {
    Error,
    Warning,
    Info,
}
