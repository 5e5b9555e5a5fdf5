// Copyright (C) 2026 Daniel Mueller (deso@posteo.net)
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::derive::Item;
use crate::Color;
use crate::Control;
use crate::Error;
use crate::Event;
use crate::Handleable;
use crate::NativeSlidableItem;
use crate::Point;
use crate::Renderable;
use crate::Renderer;
use crate::Result;
use crate::ScaledRectangle;
use crate::Size;
use crate::Steppable;
use crate::ValueChanged;


/// An item for changing an integer value in the range `0..=maximum`.
///
/// The value is visualized as a handle moving along a background bar.
#[derive(Debug, Item)]
pub struct NativeSliderItem {
  #[item]
  slidable: NativeSlidableItem,
  background: ScaledRectangle,
  handle: ScaledRectangle,
  maximum: i32,
  value: i32,
  multiplier: i32,
  value_changed: Event<ValueChanged>,
}

impl NativeSliderItem {
  /// The color of the bar the handle moves along.
  pub const BACKGROUND_COLOR: Color = Color::from_argb(255, 4, 32, 57);
  /// The color of the handle.
  pub const HANDLE_COLOR: Color = Color::from_argb(255, 57, 116, 200);
  /// The maximum used when none is provided.
  pub const DEFAULT_MAXIMUM: i32 = 100;

  /// Create a new `NativeSliderItem` ranging from 0 to 100, starting at
  /// 0.
  pub fn new<T>(title: T) -> Self
  where
    T: Into<String>,
  {
    Self::with_description(title, "")
  }

  /// Create a new `NativeSliderItem` with a description, ranging from
  /// 0 to 100 and starting at 0.
  pub fn with_description<T, D>(title: T, description: D) -> Self
  where
    T: Into<String>,
    D: Into<String>,
  {
    Self::create(NativeSlidableItem::new(title, description), Self::DEFAULT_MAXIMUM, 0)
  }

  /// Create a new `NativeSliderItem` with the given maximum and initial
  /// value.
  ///
  /// Fails if `maximum` is negative or `value` is not in
  /// `0..=maximum`.
  pub fn with_range<T, D>(title: T, description: D, maximum: i32, value: i32) -> Result<Self>
  where
    T: Into<String>,
    D: Into<String>,
  {
    if maximum < 0 {
      return Err(Error::NegativeMaximum(maximum))
    }
    if !(0..=maximum).contains(&value) {
      return Err(Error::OutOfRange { value, maximum })
    }

    Ok(Self::create(NativeSlidableItem::new(title, description), maximum, value))
  }

  fn create(slidable: NativeSlidableItem, maximum: i32, value: i32) -> Self {
    debug_assert!((0..=maximum).contains(&value));

    let mut slider = Self {
      slidable,
      background: ScaledRectangle::with_color(
        Point::default(),
        Size::default(),
        Self::BACKGROUND_COLOR,
      ),
      handle: ScaledRectangle::with_color(Point::default(), Size::default(), Self::HANDLE_COLOR),
      maximum,
      value,
      multiplier: 1,
      value_changed: Event::new(),
    };
    slider.update_position();
    slider
  }

  /// Retrieve the maximum value.
  pub fn maximum(&self) -> i32 {
    self.maximum
  }

  /// Set the maximum value.
  ///
  /// If the current value exceeds the new maximum, it is clamped to it
  /// and subscribers of [`value_changed`][Self::value_changed] get
  /// notified.
  pub fn set_maximum(&mut self, maximum: i32) -> Result<()> {
    if maximum < 0 {
      return Err(Error::NegativeMaximum(maximum))
    }
    if maximum == self.maximum {
      return Ok(())
    }

    self.maximum = maximum;

    if self.value > maximum {
      tracing::debug!(value = self.value, maximum, "clamping slider value to new maximum");
      self.value = maximum;
      self.value_changed.raise(&ValueChanged { value: maximum });
    }

    self.update_position();
    Ok(())
  }

  /// Retrieve the current value.
  pub fn value(&self) -> i32 {
    self.value
  }

  /// Set the current value.
  ///
  /// Subscribers of [`value_changed`][Self::value_changed] are notified
  /// even if the value stays the same. A value outside of
  /// `0..=maximum` is rejected and leaves the slider untouched.
  pub fn set_value(&mut self, value: i32) -> Result<()> {
    if !(0..=self.maximum).contains(&value) {
      return Err(Error::OutOfRange {
        value,
        maximum: self.maximum,
      })
    }

    self.apply_value(value);
    Ok(())
  }

  /// Store an already validated value, notify subscribers, and move the
  /// handle.
  fn apply_value(&mut self, value: i32) {
    debug_assert!((0..=self.maximum).contains(&value));

    tracing::trace!(from = self.value, to = value, "slider value changed");
    self.value = value;
    self.value_changed.raise(&ValueChanged { value });
    self.update_position();
  }

  /// Retrieve the amount by which a single step changes the value.
  pub fn multiplier(&self) -> i32 {
    self.multiplier
  }

  /// Set the amount by which a single step changes the value.
  pub fn set_multiplier(&mut self, multiplier: i32) {
    self.multiplier = multiplier;
  }

  /// Access the event raised when the value changes.
  pub fn value_changed(&mut self) -> &mut Event<ValueChanged> {
    &mut self.value_changed
  }

  /// Retrieve the background bar.
  pub fn background(&self) -> &ScaledRectangle {
    &self.background
  }

  /// Retrieve the handle.
  ///
  /// Not to be confused with [`Handleable::handle`].
  pub fn handle_rect(&self) -> &ScaledRectangle {
    &self.handle
  }

  /// Retrieve the slidable item providing title and arrows.
  pub fn slidable(&self) -> &NativeSlidableItem {
    &self.slidable
  }

  /// Retrieve the slidable item providing title and arrows, mutably.
  pub fn slidable_mut(&mut self) -> &mut NativeSlidableItem {
    &mut self.slidable
  }

  /// Place the background bar at `position` and size it as well as the
  /// handle.
  pub fn set_bounds(&mut self, position: Point, background: Size, handle: Size) {
    self.background.position = position;
    self.background.size = background;
    self.handle.size = handle;
    self.update_position();
  }

  /// Move the handle to the spot on the background matching the value.
  fn update_position(&mut self) {
    // With a maximum of zero the only valid value is zero, so keep the
    // handle at the start.
    let fraction = if self.maximum == 0 {
      0.0
    } else {
      self.value as f32 / self.maximum as f32
    };
    let x = (self.background.size.width - self.handle.size.width) * fraction;

    self.handle.position = Point::new(
      self.background.position.x + x,
      self.background.position.y,
    );
  }

  /// Draw the slider: title and arrows, then the background, and the
  /// handle on top.
  pub fn draw(&self, renderer: &dyn Renderer) {
    self.slidable.draw(renderer);
    self.background.draw(renderer);
    self.handle.draw(renderer);
  }
}

impl Steppable for NativeSliderItem {
  fn go_left(&mut self) {
    let value = self
      .value
      .saturating_sub(self.multiplier)
      .clamp(0, self.maximum);
    self.apply_value(value)
  }

  fn go_right(&mut self) {
    let value = self
      .value
      .saturating_add(self.multiplier)
      .clamp(0, self.maximum);
    self.apply_value(value)
  }
}

impl Renderable for NativeSliderItem {
  fn render(&self, renderer: &dyn Renderer) {
    self.draw(renderer)
  }
}

impl Handleable for NativeSliderItem {
  fn handle(&mut self, control: Control) -> Option<Control> {
    match control {
      Control::Left => {
        self.go_left();
        None
      },
      Control::Right => {
        self.go_right();
        None
      },
      _ => self.slidable.handle(control),
    }
  }
}
