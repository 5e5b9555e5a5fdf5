// Copyright (C) 2026 Daniel Mueller (deso@posteo.net)
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::Control;
use crate::Event;
use crate::Handleable;
use crate::Point;
use crate::Renderable;
use crate::Renderer;
use crate::ScaledText;
use crate::Selected;


/// The capability shared by all menu items: a title and a description
/// backed by a [`NativeItem`].
///
/// Items built by composition usually do not implement this trait by
/// hand but derive it, forwarding to the field containing the inner
/// item:
/// ```rust
/// # use native_menu::derive::Item;
/// # use native_menu::Item as _;
/// # use native_menu::NativeItem;
/// #[derive(Debug, Item)]
/// struct CheckboxItem {
///   item: NativeItem,
///   checked: bool,
/// }
///
/// let checkbox = CheckboxItem {
///   item: NativeItem::new("Enabled"),
///   checked: false,
/// };
/// assert_eq!(checkbox.title(), "Enabled");
/// ```
pub trait Item {
  /// Retrieve a reference to the underlying [`NativeItem`].
  fn item(&self) -> &NativeItem;

  /// Retrieve a mutable reference to the underlying [`NativeItem`].
  fn item_mut(&mut self) -> &mut NativeItem;

  /// Retrieve the title of the item.
  fn title(&self) -> &str {
    self.item().title()
  }

  /// Set the title of the item.
  fn set_title(&mut self, title: &str) {
    self.item_mut().set_title(title)
  }

  /// Retrieve the description of the item.
  fn description(&self) -> &str {
    self.item().description()
  }

  /// Set the description of the item.
  fn set_description(&mut self, description: &str) {
    self.item_mut().set_description(description)
  }
}


/// A basic menu item showing a title, with an optional description.
#[derive(Debug)]
pub struct NativeItem {
  title: ScaledText,
  description: ScaledText,
  selected: Event<Selected>,
}

impl NativeItem {
  /// The font scale of an item's title.
  pub const TITLE_SCALE: f32 = 0.345;

  /// Create a new `NativeItem` with an empty description.
  pub fn new<T>(title: T) -> Self
  where
    T: Into<String>,
  {
    Self::with_description(title, "")
  }

  /// Create a new `NativeItem` with the given title and description.
  pub fn with_description<T, D>(title: T, description: D) -> Self
  where
    T: Into<String>,
    D: Into<String>,
  {
    Self {
      title: ScaledText::with_scale(Point::default(), title, Self::TITLE_SCALE),
      description: ScaledText::new(Point::default(), description),
      selected: Event::new(),
    }
  }

  /// Retrieve the title of the item.
  pub fn title(&self) -> &str {
    &self.title.text
  }

  /// Set the title of the item.
  pub fn set_title<T>(&mut self, title: T)
  where
    T: Into<String>,
  {
    self.title.text = title.into();
  }

  /// Retrieve the description of the item.
  pub fn description(&self) -> &str {
    &self.description.text
  }

  /// Set the description of the item.
  pub fn set_description<D>(&mut self, description: D)
  where
    D: Into<String>,
  {
    self.description.text = description.into();
  }

  /// Retrieve the text element backing the title.
  pub fn title_text(&self) -> &ScaledText {
    &self.title
  }

  /// Retrieve the text element backing the title, mutably.
  pub fn title_text_mut(&mut self) -> &mut ScaledText {
    &mut self.title
  }

  /// Retrieve the text element backing the description.
  pub fn description_text(&self) -> &ScaledText {
    &self.description
  }

  /// Retrieve the text element backing the description, mutably.
  pub fn description_text_mut(&mut self) -> &mut ScaledText {
    &mut self.description
  }

  /// Access the event raised when the item gets selected.
  pub fn selected(&mut self) -> &mut Event<Selected> {
    &mut self.selected
  }

  /// Select the item, notifying all subscribers.
  pub fn select(&mut self) {
    tracing::trace!(title = %self.title.text, "item selected");
    self.selected.raise(&Selected)
  }

  /// Draw the item for the current frame.
  ///
  /// The description is shown by the menu in a separate panel and is
  /// not drawn here.
  pub fn process(&self, renderer: &dyn Renderer) {
    self.title.process(renderer)
  }
}

impl Item for NativeItem {
  fn item(&self) -> &NativeItem {
    self
  }

  fn item_mut(&mut self) -> &mut NativeItem {
    self
  }
}

impl Renderable for NativeItem {
  fn render(&self, renderer: &dyn Renderer) {
    self.process(renderer)
  }
}

impl Handleable for NativeItem {
  fn handle(&mut self, control: Control) -> Option<Control> {
    match control {
      Control::Accept => {
        self.select();
        None
      },
      _ => Some(control),
    }
  }
}
