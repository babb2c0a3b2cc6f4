//! Terminal styling for command output
//!
//! Every styled value carries a [`Tone`] and the stream it is headed for, so
//! `owo-colors` can decide per stream whether to emit ANSI codes (it honours
//! `NO_COLOR`, `CLICOLOR` and `CLICOLOR_FORCE`).
//!
//! | Tone       | Look   | Used for                            |
//! |------------|--------|-------------------------------------|
//! | `accent`   | cyan   | issue keys, counts, profile IDs     |
//! | `success`  | green  | checkmarks, completed phases        |
//! | `error`    | red    | failures (stderr)                   |
//! | `warn`     | yellow | skipped outline lines (stderr)      |
//! | `muted`    | dim    | descriptions, hints, dates          |
//! | `emphasis` | bold   | summaries, board and sprint names   |

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::{OwoColorize, Style};
use std::fmt::{self, Display};
use std::time::Duration;

pub use owo_colors::Stream;

/// Semantic colour of a piece of output
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Accent,
    Success,
    Error,
    Warn,
    Muted,
    Emphasis,
}

impl Tone {
    const fn style(self) -> Style {
        match self {
            Self::Accent => Style::new().cyan(),
            Self::Success => Style::new().green(),
            Self::Error => Style::new().red(),
            Self::Warn => Style::new().yellow(),
            Self::Muted => Style::new().dimmed(),
            Self::Emphasis => Style::new().bold(),
        }
    }

    /// Errors and warnings go to stderr, everything else to stdout
    const fn stream(self) -> Stream {
        match self {
            Self::Error | Self::Warn => Stream::Stderr,
            _ => Stream::Stdout,
        }
    }
}

/// A value rendered in a [`Tone`]
#[derive(Clone, Debug)]
pub struct Styled<T> {
    value: T,
    tone: Tone,
    stream: Stream,
}

impl<T> Styled<T> {
    const fn new(value: T, tone: Tone) -> Self {
        Self {
            value,
            tone,
            stream: tone.stream(),
        }
    }

    /// Decide colour support against stderr instead of the tone's stream
    #[must_use]
    pub const fn for_stderr(mut self) -> Self {
        self.stream = Stream::Stderr;
        self
    }
}

impl<T: Display> Display for Styled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = self.tone.style();
        write!(
            f,
            "{}",
            self.value.if_supports_color(self.stream, |v| v.style(style))
        )
    }
}

/// Styling shortcuts for anything printable
pub trait Stylize: Display {
    /// Render in the given tone
    fn tone(&self, tone: Tone) -> Styled<&Self> {
        Styled::new(self, tone)
    }

    fn accent(&self) -> Styled<&Self> {
        self.tone(Tone::Accent)
    }

    fn success(&self) -> Styled<&Self> {
        self.tone(Tone::Success)
    }

    fn error(&self) -> Styled<&Self> {
        self.tone(Tone::Error)
    }

    fn warn(&self) -> Styled<&Self> {
        self.tone(Tone::Warn)
    }

    fn muted(&self) -> Styled<&Self> {
        self.tone(Tone::Muted)
    }

    fn emphasis(&self) -> Styled<&Self> {
        self.tone(Tone::Emphasis)
    }
}

impl<T: Display + ?Sized> Stylize for T {}

/// Created ticket, finished phase
pub const fn check() -> Styled<&'static str> {
    Styled::new("✓", Tone::Success)
}

/// Failed step
pub const fn cross() -> Styled<&'static str> {
    Styled::new("✗", Tone::Error)
}

/// Sub-task in the parse tree
pub const fn arrow() -> Styled<&'static str> {
    Styled::new("→", Tone::Accent)
}

/// Top-level issue in the parse tree
pub const fn bullet() -> Styled<&'static str> {
    Styled::new("○", Tone::Muted)
}

/// Issue key linked to its browse URL (OSC 8)
///
/// Terminals without hyperlink support get `text (url)`.
pub fn hyperlink(stream: Stream, text: &str, url: &str) -> String {
    let target = match stream {
        Stream::Stdout => supports_hyperlinks::Stream::Stdout,
        Stream::Stderr => supports_hyperlinks::Stream::Stderr,
    };
    if supports_hyperlinks::on(target) {
        terminal_link::Link::new(text, url).to_string()
    } else {
        format!("{text} ({url})")
    }
}

/// Start a ticking spinner for a tracker round-trip
pub fn spinner(message: impl Into<String>) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .expect("hardcoded spinner template is valid")
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    bar.set_message(message.into());
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}
