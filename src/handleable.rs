// Copyright (C) 2018-2026 Daniel Mueller (deso@posteo.net)
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::Control;


/// A trait representing an object capable of handling controls.
pub trait Handleable {
  /// Handle a [`Control`].
  ///
  /// The item has the option to either consume the control and return
  /// nothing, in which case no one else will get informed about it, or
  /// forward it (the default behavior), in which case the owning menu
  /// will act on it, e.g., by moving the selection.
  fn handle(&mut self, control: Control) -> Option<Control> {
    // By default we just pass through the control, which will cause it
    // to bubble up to the menu.
    Some(control)
  }
}
