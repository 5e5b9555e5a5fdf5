// Copyright (C) 2018-2026 Daniel Mueller <deso@posteo.net>
// SPDX-License-Identifier: GPL-3.0-or-later

use std::cell::Cell;
use std::cell::RefCell;
use std::rc::Rc;

use native_menu::Event;
use native_menu::Renderer;
use native_menu::ScaledRectangle;
use native_menu::ScaledText;
use native_menu::ScaledTexture;
use native_menu::ValueChanged;


/// A draw call as issued to a `Renderer`.
#[allow(unused)]
#[derive(Clone, Debug, PartialEq)]
pub enum Draw {
  Text(ScaledText),
  Rectangle(ScaledRectangle),
  Texture(ScaledTexture),
}

#[allow(unused)]
impl Draw {
  /// Unwrap the text of a `Draw::Text` variant.
  pub fn unwrap_text(&self) -> &ScaledText {
    match self {
      Draw::Text(text) => text,
      Draw::Rectangle(..) | Draw::Texture(..) => unreachable!(),
    }
  }

  /// Unwrap the rectangle of a `Draw::Rectangle` variant.
  pub fn unwrap_rectangle(&self) -> &ScaledRectangle {
    match self {
      Draw::Rectangle(rectangle) => rectangle,
      Draw::Text(..) | Draw::Texture(..) => unreachable!(),
    }
  }

  /// Unwrap the texture of a `Draw::Texture` variant.
  pub fn unwrap_texture(&self) -> &ScaledTexture {
    match self {
      Draw::Texture(texture) => texture,
      Draw::Text(..) | Draw::Rectangle(..) => unreachable!(),
    }
  }
}


/// A `Renderer` remembering all draw calls in the order they were made.
#[allow(unused)]
#[derive(Debug, Default)]
pub struct RecordingRenderer {
  draws: RefCell<Vec<Draw>>,
}

#[allow(unused)]
impl RecordingRenderer {
  pub fn new() -> Self {
    Self::default()
  }

  /// Retrieve all draw calls made so far.
  pub fn draws(&self) -> Vec<Draw> {
    self.draws.borrow().clone()
  }
}

impl Renderer for RecordingRenderer {
  fn draw_text(&self, text: &ScaledText) {
    self.draws.borrow_mut().push(Draw::Text(text.clone()))
  }

  fn draw_rectangle(&self, rectangle: &ScaledRectangle) {
    self.draws.borrow_mut().push(Draw::Rectangle(*rectangle))
  }

  fn draw_texture(&self, texture: &ScaledTexture) {
    self.draws.borrow_mut().push(Draw::Texture(texture.clone()))
  }
}


/// Subscribe a handler to `event` that counts its invocations.
#[allow(unused)]
pub fn count<A>(event: &mut Event<A>) -> Rc<Cell<usize>>
where
  A: 'static,
{
  let count = Rc::new(Cell::new(0));
  let c = Rc::clone(&count);
  let _ = event.subscribe(move |_| c.set(c.get() + 1));
  count
}

/// Subscribe a handler to `event` that records all reported values.
#[allow(unused)]
pub fn record(event: &mut Event<ValueChanged>) -> Rc<RefCell<Vec<i32>>> {
  let values = Rc::new(RefCell::new(Vec::new()));
  let v = Rc::clone(&values);
  let _ = event.subscribe(move |args| v.borrow_mut().push(args.value));
  values
}
