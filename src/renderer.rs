// Copyright (C) 2018-2026 Daniel Mueller (deso@posteo.net)
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::ScaledRectangle;
use crate::ScaledText;
use crate::ScaledTexture;


/// A point on the overlay. The origin [x=0, y=0] resides in the upper
/// left corner of the screen, but it is really up to the individual
/// [`Renderer`] to map the (scaled) coordinates onto actual pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
  /// The x-coordinate of the point.
  pub x: f32,
  /// The y-coordinate of the point.
  pub y: f32,
}

impl Point {
  /// Create a new `Point`.
  pub const fn new(x: f32, y: f32) -> Self {
    Self { x, y }
  }
}


/// The extent of a rectangular area, in the same units as [`Point`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
  /// The width of the area.
  pub width: f32,
  /// The height of the area.
  pub height: f32,
}

impl Size {
  /// Create a new `Size`.
  pub const fn new(width: f32, height: f32) -> Self {
    Self { width, height }
  }
}


/// A color with an alpha channel.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Color {
  /// The alpha channel.
  pub a: u8,
  /// The red channel.
  pub r: u8,
  /// The green channel.
  pub g: u8,
  /// The blue channel.
  pub b: u8,
}

impl Color {
  /// Opaque white, the default color of drawable elements.
  pub const WHITE: Color = Color::from_argb(255, 255, 255, 255);

  /// Create a `Color` from its alpha, red, green, and blue components.
  pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
    Self { a, r, g, b }
  }
}


/// An abstraction for the overlay drawing machinery of the host.
///
/// Widgets never talk to the host directly. Instead, every drawable
/// element hands itself to one of the methods below, once per frame.
/// Note that the units of positions and sizes are not specified here.
/// Hosts usually work with coordinates relative to a 1080p screen and
/// scale them to the actual resolution, but a `Renderer` is free to
/// interpret them in whatever way it sees fit.
pub trait Renderer {
  /// Draw a piece of text.
  fn draw_text(&self, text: &ScaledText);

  /// Draw a filled rectangle.
  fn draw_rectangle(&self, rectangle: &ScaledRectangle);

  /// Draw a texture (sprite) from one of the host's texture
  /// dictionaries.
  fn draw_texture(&self, texture: &ScaledTexture);
}
