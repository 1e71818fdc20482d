//! Application state for the parse -> place -> render pipeline
//!
//! The interface this replaces held its state in component-local reactive
//! variables and kicked work off behind a fixed delay, so a rapid second
//! request could race the first and interleave stale results with newer
//! input. Here the state is an explicit struct and every update is a
//! discrete transition: a parse begins with [`AppState::begin_parse`],
//! which hands back a generation-counted request token, and completes
//! through [`AppState::finish_parse`]. A token from a superseded request
//! is discarded without touching the state.

use crate::domain::RiverPolygon;
use crate::label::LabelPlacement;

/// Ties a parse completion to the request that started it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Discrete state transitions, as observed by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEvent {
    ParseRequested { generation: u64 },
    ParseSucceeded { generation: u64 },
    ParseFailed { generation: u64, message: String },
    /// Completion arrived for a request that was superseded; ignored
    StaleResultDiscarded { generation: u64 },
}

/// All mutable state of one labeling session
///
/// The polygon and placement are replaced wholesale on success and
/// cleared on failure - the interface never shows a shape that no longer
/// matches the current input.
#[derive(Debug)]
pub struct AppState {
    pub input_text: String,
    pub label_text: String,
    pub font_size: f64,
    pub show_safety_box: bool,
    river: Option<RiverPolygon>,
    placement: Option<LabelPlacement>,
    error: Option<String>,
    generation: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            input_text: String::new(),
            label_text: String::new(),
            font_size: 36.0,
            show_safety_box: false,
            river: None,
            placement: None,
            error: None,
            generation: 0,
        }
    }

    /// Set the label text, normalized to uppercase the way it renders
    pub fn set_label_text(&mut self, text: &str) {
        self.label_text = text.to_uppercase();
    }

    /// Start a new parse cycle
    ///
    /// Any token handed out by an earlier call is now stale; its
    /// completion will be discarded.
    pub fn begin_parse(&mut self, input: &str) -> (RequestToken, ParseEvent) {
        self.generation += 1;
        self.input_text = input.to_string();
        (
            RequestToken(self.generation),
            ParseEvent::ParseRequested {
                generation: self.generation,
            },
        )
    }

    /// Apply the outcome of a parse cycle
    ///
    /// A stale token leaves the state untouched. Success replaces the
    /// polygon and placement wholesale and clears any error; failure
    /// records the message and clears the previous render.
    pub fn finish_parse(
        &mut self,
        token: RequestToken,
        outcome: Result<(RiverPolygon, LabelPlacement), String>,
    ) -> ParseEvent {
        if token.0 != self.generation {
            return ParseEvent::StaleResultDiscarded {
                generation: token.0,
            };
        }

        match outcome {
            Ok((river, placement)) => {
                self.river = Some(river);
                self.placement = Some(placement);
                self.error = None;
                ParseEvent::ParseSucceeded {
                    generation: token.0,
                }
            }
            Err(message) => {
                self.river = None;
                self.placement = None;
                self.error = Some(message.clone());
                ParseEvent::ParseFailed {
                    generation: token.0,
                    message,
                }
            }
        }
    }

    pub fn river(&self) -> Option<&RiverPolygon> {
        self.river.as_ref()
    }

    pub fn placement(&self) -> Option<&LabelPlacement> {
        self.placement.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
