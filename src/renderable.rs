// Copyright (C) 2018-2026 Daniel Mueller (deso@posteo.net)
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::Renderer;


/// A trait representing a renderable object.
pub trait Renderable {
  /// Render the renderable object.
  ///
  /// Implementations issue their draw calls against the given
  /// `Renderer`, in back to front order. That is, whatever is drawn
  /// last appears on top.
  fn render(&self, renderer: &dyn Renderer);
}
