// Copyright (C) 2026 Daniel Mueller (deso@posteo.net)
// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error as ThisError;


/// The error type used by this crate.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
  /// A value outside of `0..=maximum` was provided.
  #[error("value {value} is outside of the valid range 0..={maximum}")]
  OutOfRange {
    /// The rejected value.
    value: i32,
    /// The maximum in effect at the time.
    maximum: i32,
  },
  /// A negative maximum was provided.
  #[error("maximum {0} must not be negative")]
  NegativeMaximum(i32),
}

/// A result type defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
