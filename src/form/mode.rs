//! Mode resolver
//!
//! The form has one text field whose meaning depends on the mode. Each mode
//! carries its own validation rule and decides which lookup a valid value
//! turns into, so the rest of the form never branches on flag pairs.

use crate::utils::url_validator::{parse_absolute_url, validation_error_message};

/// Which key a stats lookup uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackingKind {
    #[default]
    Short,
    Original,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Shorten,
    TrackShort,
    TrackOriginal,
}

impl Mode {
    pub fn from_flags(is_tracking: bool, kind: TrackingKind) -> Self {
        match (is_tracking, kind) {
            (false, _) => Mode::Shorten,
            (true, TrackingKind::Short) => Mode::TrackShort,
            (true, TrackingKind::Original) => Mode::TrackOriginal,
        }
    }

    pub fn is_tracking(self) -> bool {
        !matches!(self, Mode::Shorten)
    }

    pub fn tracking_kind(self) -> Option<TrackingKind> {
        match self {
            Mode::Shorten => None,
            Mode::TrackShort => Some(TrackingKind::Short),
            Mode::TrackOriginal => Some(TrackingKind::Original),
        }
    }

    /// Shorten <-> tracking, landing on `kind` when entering tracking
    pub fn toggle_tracking(self, kind: TrackingKind) -> Self {
        Mode::from_flags(!self.is_tracking(), kind)
    }

    /// Short <-> Original; no-op in shorten mode
    pub fn cycle_kind(self) -> Self {
        match self {
            Mode::Shorten => Mode::Shorten,
            Mode::TrackShort => Mode::TrackOriginal,
            Mode::TrackOriginal => Mode::TrackShort,
        }
    }

    pub fn rule(self) -> ValidationRule {
        match self {
            Mode::Shorten => ValidationRule::AbsoluteUrl {
                empty_message: "Please enter a URL",
            },
            Mode::TrackShort => ValidationRule::NonEmpty {
                empty_message: "Please enter a short URL",
            },
            Mode::TrackOriginal => ValidationRule::AbsoluteUrl {
                empty_message: "Please enter an original URL",
            },
        }
    }

    /// Run the mode's rule against the raw field value
    pub fn validate(self, input: &str) -> Result<(), String> {
        self.rule().check(input)
    }

    /// The lookup a (valid) field value maps to
    pub fn lookup(self, input: &str) -> LookupRequest {
        let value = input.trim().to_string();
        match self {
            Mode::Shorten => LookupRequest::Preview(value),
            Mode::TrackShort => LookupRequest::StatsByShort(value),
            Mode::TrackOriginal => LookupRequest::StatsByOriginal(value),
        }
    }

    pub fn title(self) -> &'static str {
        if self.is_tracking() {
            "Track Your URL"
        } else {
            "Shorten Your URL"
        }
    }

    pub fn subtitle(self) -> &'static str {
        if self.is_tracking() {
            "Check how many clicks your URL has."
        } else {
            "Turn long links into short, clean ones."
        }
    }

    pub fn field_label(self) -> &'static str {
        match self {
            Mode::Shorten => "URL",
            Mode::TrackShort => "Short URL",
            Mode::TrackOriginal => "Original URL",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Mode::Shorten => "Paste your URL here",
            Mode::TrackShort => "Paste your short URL here",
            Mode::TrackOriginal => "Paste your original URL here",
        }
    }

    pub fn submit_label(self) -> &'static str {
        if self.is_tracking() {
            "Check Stats"
        } else {
            "Shorten"
        }
    }
}

/// Field validation attached to a mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationRule {
    /// Opaque token; anything but blank
    NonEmpty { empty_message: &'static str },
    /// Absolute http(s) URL
    AbsoluteUrl { empty_message: &'static str },
}

impl ValidationRule {
    pub fn check(&self, input: &str) -> Result<(), String> {
        let value = input.trim();
        match self {
            ValidationRule::NonEmpty { empty_message } => {
                if value.is_empty() {
                    Err(empty_message.to_string())
                } else {
                    Ok(())
                }
            }
            ValidationRule::AbsoluteUrl { empty_message } => {
                if value.is_empty() {
                    return Err(empty_message.to_string());
                }
                parse_absolute_url(value)
                    .map(|_| ())
                    .map_err(|e| validation_error_message(&e).to_string())
            }
        }
    }
}

/// One read request against the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupRequest {
    Preview(String),
    StatsByShort(String),
    StatsByOriginal(String),
}

/// Which result slot a lookup fills
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Preview,
    Stats,
}

impl LookupRequest {
    pub fn kind(&self) -> LookupKind {
        match self {
            LookupRequest::Preview(_) => LookupKind::Preview,
            LookupRequest::StatsByShort(_) | LookupRequest::StatsByOriginal(_) => {
                LookupKind::Stats
            }
        }
    }

    pub fn value(&self) -> &str {
        match self {
            LookupRequest::Preview(v)
            | LookupRequest::StatsByShort(v)
            | LookupRequest::StatsByOriginal(v) => v,
        }
    }
}

impl LookupKind {
    /// Kind of result the given mode displays
    pub fn for_mode(mode: Mode) -> Self {
        if mode.is_tracking() {
            LookupKind::Stats
        } else {
            LookupKind::Preview
        }
    }
}
