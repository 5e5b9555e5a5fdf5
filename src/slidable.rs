// Copyright (C) 2026 Daniel Mueller (deso@posteo.net)
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::derive::Item;
use crate::Control;
use crate::Handleable;
use crate::NativeItem;
use crate::Point;
use crate::Renderable;
use crate::Renderer;
use crate::ScaledTexture;
use crate::Size;


/// The texture dictionary containing the arrow sprites.
pub const ARROW_DICTIONARY: &str = "commonmenu";
/// The name of the left arrow sprite.
pub const ARROW_LEFT: &str = "arrowleft";
/// The name of the right arrow sprite.
pub const ARROW_RIGHT: &str = "arrowright";


/// A trait for items whose value can be changed in steps.
pub trait Steppable {
  /// Go one step to the left, i.e., decrease the value.
  fn go_left(&mut self);

  /// Go one step to the right, i.e., increase the value.
  fn go_right(&mut self);
}


/// An item with arrows on both sides, used as the base for items that
/// are changed with left and right.
#[derive(Debug, Item)]
pub struct NativeSlidableItem {
  item: NativeItem,
  left_arrow: ScaledTexture,
  right_arrow: ScaledTexture,
}

impl NativeSlidableItem {
  /// Create a new `NativeSlidableItem`.
  pub fn new<T, D>(title: T, description: D) -> Self
  where
    T: Into<String>,
    D: Into<String>,
  {
    let arrow = |name: &str| ScaledTexture::new(Point::default(), Size::default(), ARROW_DICTIONARY, name);

    Self {
      item: NativeItem::with_description(title, description),
      left_arrow: arrow(ARROW_LEFT),
      right_arrow: arrow(ARROW_RIGHT),
    }
  }

  /// Retrieve the left arrow.
  pub fn left_arrow(&self) -> &ScaledTexture {
    &self.left_arrow
  }

  /// Retrieve the left arrow, mutably.
  pub fn left_arrow_mut(&mut self) -> &mut ScaledTexture {
    &mut self.left_arrow
  }

  /// Retrieve the right arrow.
  pub fn right_arrow(&self) -> &ScaledTexture {
    &self.right_arrow
  }

  /// Retrieve the right arrow, mutably.
  pub fn right_arrow_mut(&mut self) -> &mut ScaledTexture {
    &mut self.right_arrow
  }

  /// Draw the title followed by both arrows.
  pub fn draw(&self, renderer: &dyn Renderer) {
    self.item.process(renderer);
    self.left_arrow.draw(renderer);
    self.right_arrow.draw(renderer);
  }
}

impl Renderable for NativeSlidableItem {
  fn render(&self, renderer: &dyn Renderer) {
    self.draw(renderer)
  }
}

impl Handleable for NativeSlidableItem {
  fn handle(&mut self, control: Control) -> Option<Control> {
    self.item.handle(control)
  }
}
