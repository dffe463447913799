#![warn(clippy::all, missing_docs)]

//! Core logic for the Memory Match terminal game.
//!
//! This crate owns the cards, the board dealer, the turn-taking state
//! machine, the countdown and the scene builder. It has no terminal
//! dependency; front ends feed it [`InputFrame`]s and paint the
//! [`Scene`] it produces.

pub mod board;
pub mod button;
pub mod card;
pub mod config;
pub mod error;
pub mod game;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod models;
pub mod scene;

pub use board::Board;
pub use button::{Button, ButtonAction};
pub use card::{Card, FlipPhase};
pub use config::AppConfig;
pub use error::{ConfigError, SetupError};
pub use game::{GameState, Outcome, Screen, Selection};
pub use geometry::{Point, Rect};
pub use input::InputFrame;
pub use models::{Difficulty, Logo, Preset};
pub use scene::{Align, DrawCommand, Scene, Tone};
