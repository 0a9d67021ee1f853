//! Visual theme and styling.

use console::Style;

use crate::model::WorkoutKind;

/// trailog's visual theme.
#[derive(Debug, Clone)]
pub struct TrailogTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
    /// Style for running workouts (green).
    pub running: Style,
    /// Style for cycling workouts (yellow).
    pub cycling: Style,
}

impl Default for TrailogTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl TrailogTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
            running: Style::new().green(),
            cycling: Style::new().yellow(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            running: Style::new(),
            cycling: Style::new(),
        }
    }

    /// The colored theme when colors are enabled, otherwise the plain one.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }

    /// Style for a workout kind.
    pub fn kind_style(&self, kind: WorkoutKind) -> &Style {
        match kind {
            WorkoutKind::Running => &self.running,
            WorkoutKind::Cycling => &self.cycling,
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let theme = TrailogTheme::plain();
        let msg = theme.format_success("Saved");
        assert!(msg.contains("✓"));
        assert!(msg.contains("Saved"));
    }

    #[test]
    fn theme_formats_warning() {
        let theme = TrailogTheme::plain();
        let msg = theme.format_warning("Not persisted");
        assert!(msg.contains("⚠"));
        assert!(msg.contains("Not persisted"));
    }

    #[test]
    fn theme_formats_error() {
        let theme = TrailogTheme::plain();
        let msg = theme.format_error("Failed");
        assert!(msg.contains("✗"));
        assert!(msg.contains("Failed"));
    }

    #[test]
    fn plain_header_is_unstyled() {
        let theme = TrailogTheme::plain();
        assert_eq!(theme.format_header("Workouts"), "Workouts");
    }

    #[test]
    fn default_theme_creates_without_panic() {
        let theme = TrailogTheme::default();
        let _ = theme.kind_style(WorkoutKind::Running).apply_to("x").to_string();
        let _ = theme.kind_style(WorkoutKind::Cycling).apply_to("x").to_string();
    }
}
