// Copyright (C) 2018-2026 Daniel Mueller (deso@posteo.net)
// SPDX-License-Identifier: GPL-3.0-or-later

#![allow(
  clippy::assertions_on_constants,
  clippy::let_unit_value,
  clippy::redundant_field_names,
)]
#![warn(
  future_incompatible,
  missing_copy_implementations,
  missing_debug_implementations,
  missing_docs,
  rust_2018_compatibility,
  rust_2018_idioms,
  trivial_numeric_casts,
  unreachable_pub,
  unstable_features,
  unused_import_braces,
  unused_qualifications,
  unused_results,
)]

//! A crate containing menu items for in-game overlay menus: plain
//! text items and sliders for integer values. It is agnostic of the
//! host's drawing machinery, which is reached through the [`Renderer`]
//! trait, as well as of input polling, which the owning menu performs
//! before forwarding [`Control`]s to the items.

// Allow the derive macros to refer to this crate as `::native_menu`
// from within the crate itself.
extern crate self as native_menu;

mod elements;
mod error;
mod event;
mod handleable;
mod item;
mod renderable;
mod renderer;
mod slidable;
mod slider;

pub use self::elements::ScaledRectangle;
pub use self::elements::ScaledText;
pub use self::elements::ScaledTexture;
pub use self::error::Error;
pub use self::error::Result;
pub use self::event::Control;
pub use self::event::Event;
pub use self::event::Selected;
pub use self::event::Subscription;
pub use self::event::ValueChanged;
pub use self::handleable::Handleable;
pub use self::item::Item;
pub use self::item::NativeItem;
pub use self::renderable::Renderable;
pub use self::renderer::Color;
pub use self::renderer::Point;
pub use self::renderer::Renderer;
pub use self::renderer::Size;
pub use self::slidable::NativeSlidableItem;
pub use self::slidable::Steppable;
pub use self::slidable::ARROW_DICTIONARY;
pub use self::slidable::ARROW_LEFT;
pub use self::slidable::ARROW_RIGHT;
pub use self::slider::NativeSliderItem;

/// A module providing custom derive functionality for `native_menu`
/// related traits.
///
/// The module merely re-reports the procedural macros provided by the
/// `native_menu_derive` crate.
pub mod derive {
  pub use native_menu_derive::*;
}
