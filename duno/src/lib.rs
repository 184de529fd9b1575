//! Rules engine for a two-party game of UNO.
//!
//! A [`session::Session`] owns the piles, both hands and the turn order. It
//! asks each side's [`controller::Controller`] for decisions, checks them
//! against the playability rule, resolves special cards and records
//! [`event::GameEvent`]s for whoever is presenting the game.

pub mod card;
pub mod constants;
pub mod controller;
pub mod deck;
pub mod effect;
pub mod error;
pub mod event;
pub mod player;
pub mod rules;
pub mod session;
pub mod turn;

pub use error::{Result, UnoError};
