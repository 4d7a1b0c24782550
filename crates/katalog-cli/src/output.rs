//! Output management and formatting.

use std::io::{self, IsTerminal};

use clap::ValueEnum;
use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use katalog_core::domain::DerivedPricing;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    currency: String,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // The flag wins; otherwise `output.format` from config.
        let requested = if args.output_format == OutputFormat::Auto {
            OutputFormat::from_str(&config.output.format, true).unwrap_or(OutputFormat::Auto)
        } else {
            args.output_format
        };

        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            // JSON output carries only data so it stays parseable.
            quiet: args.quiet || resolved_format == OutputFormat::Json,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            currency: config.display.currency.clone(),
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Data output (listings, JSON, CSV). Never suppressed: it is the
    /// command's result, not commentary.
    pub fn data(&self, line: &str) -> io::Result<()> {
        self.term.write_line(line)
    }

    /// Pretty JSON of `value` as data output.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.data(&text)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Error indicator: `✗ <msg>`.  *Not* suppressed in quiet mode; errors
    /// must always be visible.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("\u{2717} {msg}") // ✗
        } else {
            format!("{} {}", "\u{2717}".red().bold(), msg.red())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    // ── Price formatting ──────────────────────────────────────────────────

    /// `1234.5` → `1234.50 TL`.
    pub fn price(&self, amount: f64) -> String {
        format!("{:.2} {}", amount, self.currency)
    }

    /// Sale price, struck original price and badge on one line.
    pub fn pricing_line(&self, pricing: &DerivedPricing) -> String {
        let mut line = self.price(pricing.display_price());

        if let Some(original) = pricing.struck_price() {
            let struck = self.price(original);
            if self.no_color {
                line.push_str(&format!("  (was {struck})"));
            } else {
                line.push_str(&format!("  {}", struck.strikethrough().dimmed()));
            }
        }

        if let Some(percent) = pricing.badge() {
            let badge = format!("%{percent} OFF");
            if self.no_color {
                line.push_str(&format!("  [{badge}]"));
            } else {
                line.push_str(&format!("  {}", badge.on_red().white().bold()));
            }
        }

        line
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use katalog_core::domain::derive;

    fn make_manager(quiet: bool, output_format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            quiet,
            no_color: true,
            output_format,
            ..GlobalArgs::default()
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    fn plain() -> OutputManager {
        make_manager(false, OutputFormat::Plain)
    }

    #[test]
    fn quiet_suppresses_print() {
        assert!(make_manager(true, OutputFormat::Plain).print("hello").is_ok());
    }

    #[test]
    fn error_not_suppressed_in_quiet_mode() {
        assert!(make_manager(true, OutputFormat::Plain).error("boom").is_ok());
    }

    #[test]
    fn plain_format_disables_color() {
        let args = GlobalArgs {
            output_format: OutputFormat::Plain,
            ..GlobalArgs::default()
        };
        let out = OutputManager::new(&args, &AppConfig::default());
        assert!(!out.supports_color());
        assert_eq!(out.format(), OutputFormat::Plain);
    }

    #[test]
    fn config_format_applies_when_flag_is_auto() {
        let mut config = AppConfig::default();
        config.output.format = "json".into();
        let out = OutputManager::new(&GlobalArgs::default(), &config);
        assert_eq!(out.format(), OutputFormat::Json);
    }

    #[test]
    fn price_uses_two_decimals_and_currency() {
        assert_eq!(plain().price(1234.5), "1234.50 TL");
        assert_eq!(plain().price(0.0), "0.00 TL");
    }

    #[test]
    fn currency_comes_from_config() {
        let mut config = AppConfig::default();
        config.display.currency = "EUR".into();
        let args = GlobalArgs {
            output_format: OutputFormat::Plain,
            ..GlobalArgs::default()
        };
        let out = OutputManager::new(&args, &config);
        assert_eq!(out.price(5.0), "5.00 EUR");
    }

    #[test]
    fn discounted_pricing_line_has_struck_price_and_badge() {
        let line = plain().pricing_line(&derive("200", Some("150")));
        assert_eq!(line, "150.00 TL  (was 200.00 TL)  [%25 OFF]");
    }

    #[test]
    fn full_price_line_has_no_badge() {
        let line = plain().pricing_line(&derive("99.9", None));
        assert_eq!(line, "99.90 TL");
    }
}
