// Copyright 2026 the Riverlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runtime parameter commands.
//!
//! The compositor forwards free-form strings from `riverctl send-layout-cmd`
//! to the layout object as `user_command` events. This module parses them
//! into [`Command`]s and applies them to a [`LayoutConfig`].
//!
//! Grammar (whitespace separated):
//!
//! ```text
//! main-count    <n | +n | -n>
//! main-factor   <f | +f | -f>
//! view-padding  <n | +n | -n>
//! outer-padding <n | +n | -n>
//! layout        <tile | spiral>
//! ```
//!
//! Signed values adjust the current value, unsigned values replace it.

use alloc::string::{String, ToString};
use core::str::FromStr;

use crate::config::{LayoutConfig, LayoutKind, MAIN_FACTOR_MAX, MAIN_FACTOR_MIN};

/// A new value, or a signed adjustment of the current one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Adjust<T> {
    /// Replace the current value.
    Set(T),
    /// Add to the current value.
    Increase(T),
    /// Subtract from the current value.
    Decrease(T),
}

impl<T: FromStr> Adjust<T> {
    fn parse(value: &str) -> Option<Self> {
        if let Some(rest) = value.strip_prefix('+') {
            rest.parse().ok().map(Self::Increase)
        } else if let Some(rest) = value.strip_prefix('-') {
            rest.parse().ok().map(Self::Decrease)
        } else {
            value.parse().ok().map(Self::Set)
        }
    }
}

impl<T: Copy> Adjust<T> {
    fn value(self) -> T {
        match self {
            Self::Set(value) | Self::Increase(value) | Self::Decrease(value) => value,
        }
    }
}

impl Adjust<u32> {
    fn apply(self, current: u32) -> u32 {
        match self {
            Self::Set(value) => value,
            Self::Increase(delta) => current.saturating_add(delta),
            Self::Decrease(delta) => current.saturating_sub(delta),
        }
    }
}

impl Adjust<f64> {
    fn apply(self, current: f64) -> f64 {
        let value = match self {
            Self::Set(value) => value,
            Self::Increase(delta) => current + delta,
            Self::Decrease(delta) => current - delta,
        };
        value.clamp(MAIN_FACTOR_MIN, MAIN_FACTOR_MAX)
    }
}

/// A parsed user command.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// `main-count`
    MainCount(Adjust<u32>),
    /// `main-factor`
    MainFactor(Adjust<f64>),
    /// `view-padding`
    ViewPadding(Adjust<u32>),
    /// `outer-padding`
    OuterPadding(Adjust<u32>),
    /// `layout`
    Layout(LayoutKind),
}

/// Why a user command was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// The command string was empty or only whitespace.
    #[error("empty command")]
    Empty,
    /// The first word names no known command.
    #[error("unknown command `{0}`")]
    Unknown(String),
    /// The command needs exactly one argument.
    #[error("`{command}` expects exactly one argument")]
    Arity {
        /// The command name.
        command: String,
    },
    /// The argument could not be parsed for this command.
    #[error("invalid argument `{value}` for `{command}`")]
    InvalidArgument {
        /// The command name.
        command: String,
        /// The offending argument.
        value: String,
    },
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?;
        let value = match (words.next(), words.next()) {
            (Some(value), None) => value,
            _ => {
                return Err(CommandError::Arity {
                    command: name.to_string(),
                });
            }
        };
        let invalid = || CommandError::InvalidArgument {
            command: name.to_string(),
            value: value.to_string(),
        };

        match name {
            "main-count" => Adjust::parse(value).map(Self::MainCount).ok_or_else(invalid),
            "main-factor" => Adjust::<f64>::parse(value)
                .filter(|adjust| adjust.value().is_finite())
                .map(Self::MainFactor)
                .ok_or_else(invalid),
            "view-padding" => Adjust::parse(value)
                .map(Self::ViewPadding)
                .ok_or_else(invalid),
            "outer-padding" => Adjust::parse(value)
                .map(Self::OuterPadding)
                .ok_or_else(invalid),
            "layout" => value.parse().map(Self::Layout).map_err(|_| invalid()),
            _ => Err(CommandError::Unknown(name.to_string())),
        }
    }
}

impl Command {
    /// Applies the command to `config`.
    pub fn apply(self, config: &mut LayoutConfig) {
        match self {
            Self::MainCount(adjust) => config.main_count = adjust.apply(config.main_count),
            Self::MainFactor(adjust) => config.main_factor = adjust.apply(config.main_factor),
            Self::ViewPadding(adjust) => config.view_padding = adjust.apply(config.view_padding),
            Self::OuterPadding(adjust) => {
                config.outer_padding = adjust.apply(config.outer_padding);
            }
            Self::Layout(kind) => config.kind = kind,
        }
    }
}
