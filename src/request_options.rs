use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// Shape of the response body returned by the "all campaigns" endpoint.
///
/// See <http://developers.flagship.io/api/v1/#mode>.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Normal,
    Simple,
    Full,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Normal => "normal",
            Mode::Simple => "simple",
            Mode::Full => "full",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Mode::Normal),
            "simple" => Ok(Mode::Simple),
            "full" => Ok(Mode::Full),
            other => Err(Error::InvalidMode(other.to_owned())),
        }
    }
}

/// Request parameters shared by campaign assignment calls.
///
/// `RequestOptions` is a plain value: every builder method consumes it and returns the updated
/// copy. Hand the finished value to [`Client::set_request_parameters`](crate::Client::set_request_parameters)
/// or [`ClientConfig::request_options`](crate::ClientConfig::request_options).
///
/// ```
/// # use flagship::{Mode, RequestOptions};
/// let options = RequestOptions::default()
///     .decision_group("checkout")
///     .disable_trigger_hit()
///     .enable_mode_simple();
///
/// assert_eq!(options.get_decision_group(), Some("checkout"));
/// assert!(!options.is_trigger_hit_enabled());
/// assert_eq!(options.get_mode(), Mode::Simple);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    /// Visitors matching targeting get one variation ID per decision group.
    ///
    /// See <http://developers.flagship.io/api/v1/#decision-group>.
    decision_group: Option<String>,
    /// Whether the visitor should be affected to targeted campaigns.
    ///
    /// See <http://developers.flagship.io/api/v1/#trigger-hit>.
    trigger_hit: bool,
    format_response: bool,
    mode: Mode,
}

impl Default for RequestOptions {
    fn default() -> Self {
        RequestOptions {
            decision_group: None,
            trigger_hit: true,
            format_response: false,
            mode: Mode::Normal,
        }
    }
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decision_group(mut self, name: impl Into<String>) -> Self {
        self.decision_group = Some(name.into());
        self
    }

    pub fn get_decision_group(&self) -> Option<&str> {
        self.decision_group.as_deref()
    }

    pub fn enable_trigger_hit(mut self) -> Self {
        self.trigger_hit = true;
        self
    }

    pub fn disable_trigger_hit(mut self) -> Self {
        self.trigger_hit = false;
        self
    }

    pub fn is_trigger_hit_enabled(&self) -> bool {
        self.trigger_hit
    }

    pub fn enable_format_response(mut self) -> Self {
        self.format_response = true;
        self
    }

    pub fn disable_format_response(mut self) -> Self {
        self.format_response = false;
        self
    }

    pub fn is_format_response_enabled(&self) -> bool {
        self.format_response
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn enable_mode_normal(self) -> Self {
        self.mode(Mode::Normal)
    }

    pub fn enable_mode_simple(self) -> Self {
        self.mode(Mode::Simple)
    }

    pub fn enable_mode_full(self) -> Self {
        self.mode(Mode::Full)
    }

    pub fn get_mode(&self) -> Mode {
        self.mode
    }

    /// Returns `true` if the mode is [`Mode::Normal`], in which case no `mode` query parameter is
    /// sent.
    pub fn is_default_mode(&self) -> bool {
        self.mode == Mode::Normal
    }
}
