// Copyright (C) 2026 Daniel Mueller (deso@posteo.net)
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::Color;
use crate::Point;
use crate::Renderable;
use crate::Renderer;
use crate::Size;


/// A piece of text drawn at a given scale.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaledText {
  /// The position of the text.
  pub position: Point,
  /// The text to draw.
  pub text: String,
  /// The scale of the font.
  pub scale: f32,
}

impl ScaledText {
  /// The scale used when none is provided.
  pub const DEFAULT_SCALE: f32 = 1.0;

  /// Create a new `ScaledText` with the default scale.
  pub fn new<S>(position: Point, text: S) -> Self
  where
    S: Into<String>,
  {
    Self::with_scale(position, text, Self::DEFAULT_SCALE)
  }

  /// Create a new `ScaledText` with the given scale.
  pub fn with_scale<S>(position: Point, text: S, scale: f32) -> Self
  where
    S: Into<String>,
  {
    Self {
      position,
      text: text.into(),
      scale,
    }
  }

  /// Draw the text for the current frame.
  pub fn process(&self, renderer: &dyn Renderer) {
    renderer.draw_text(self)
  }
}

impl Renderable for ScaledText {
  fn render(&self, renderer: &dyn Renderer) {
    self.process(renderer)
  }
}


/// A solid rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaledRectangle {
  /// The position of the upper left corner.
  pub position: Point,
  /// The size of the rectangle.
  pub size: Size,
  /// The fill color.
  pub color: Color,
}

impl ScaledRectangle {
  /// Create a new white `ScaledRectangle`.
  pub fn new(position: Point, size: Size) -> Self {
    Self::with_color(position, size, Color::WHITE)
  }

  /// Create a new `ScaledRectangle` filled with the given color.
  pub fn with_color(position: Point, size: Size, color: Color) -> Self {
    Self {
      position,
      size,
      color,
    }
  }

  /// Draw the rectangle for the current frame.
  pub fn draw(&self, renderer: &dyn Renderer) {
    renderer.draw_rectangle(self)
  }
}

impl Renderable for ScaledRectangle {
  fn render(&self, renderer: &dyn Renderer) {
    self.draw(renderer)
  }
}


/// A sprite taken from one of the host's texture dictionaries.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaledTexture {
  /// The position of the upper left corner.
  pub position: Point,
  /// The size of the sprite on screen.
  pub size: Size,
  /// The texture dictionary containing the sprite.
  pub dictionary: String,
  /// The name of the sprite inside the dictionary.
  pub name: String,
}

impl ScaledTexture {
  /// Create a new `ScaledTexture`.
  pub fn new<D, N>(position: Point, size: Size, dictionary: D, name: N) -> Self
  where
    D: Into<String>,
    N: Into<String>,
  {
    Self {
      position,
      size,
      dictionary: dictionary.into(),
      name: name.into(),
    }
  }

  /// Draw the sprite for the current frame.
  pub fn draw(&self, renderer: &dyn Renderer) {
    renderer.draw_texture(self)
  }
}

impl Renderable for ScaledTexture {
  fn render(&self, renderer: &dyn Renderer) {
    self.draw(renderer)
  }
}
