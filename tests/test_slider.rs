// Copyright (C) 2018-2026 Daniel Mueller (deso@posteo.net)
// SPDX-License-Identifier: GPL-3.0-or-later

mod common;

use native_menu::Control;
use native_menu::Error;
use native_menu::Handleable;
use native_menu::Item as _;
use native_menu::NativeSliderItem;
use native_menu::Point;
use native_menu::Size;
use native_menu::Steppable;

use common::count;
use common::record;


/// Create a slider with a 200 wide background at x=50 and a 20 wide
/// handle.
fn slider(maximum: i32, value: i32) -> NativeSliderItem {
  let mut slider = NativeSliderItem::with_range("Slider", "", maximum, value).unwrap();
  slider.set_bounds(Point::new(50.0, 10.0), Size::new(200.0, 9.0), Size::new(20.0, 9.0));
  slider
}


#[test]
fn defaults() {
  let slider = NativeSliderItem::new("Volume");
  assert_eq!(slider.title(), "Volume");
  assert_eq!(slider.description(), "");
  assert_eq!(slider.maximum(), 100);
  assert_eq!(slider.value(), 0);
  assert_eq!(slider.multiplier(), 1);

  let slider = NativeSliderItem::with_description("Volume", "The volume.");
  assert_eq!(slider.description(), "The volume.");
}

#[test]
fn invalid_ranges_are_rejected() {
  let result = NativeSliderItem::with_range("Slider", "", 10, 11);
  assert_eq!(result.unwrap_err(), Error::OutOfRange { value: 11, maximum: 10 });

  let result = NativeSliderItem::with_range("Slider", "", 10, -1);
  assert_eq!(result.unwrap_err(), Error::OutOfRange { value: -1, maximum: 10 });

  let result = NativeSliderItem::with_range("Slider", "", -1, 0);
  assert_eq!(result.unwrap_err(), Error::NegativeMaximum(-1));
}

#[test]
fn value_above_maximum_is_rejected() {
  let mut slider = slider(100, 40);
  let changed = count(slider.value_changed());
  let handle = *slider.handle_rect();

  let error = slider.set_value(101).unwrap_err();
  assert_eq!(error, Error::OutOfRange { value: 101, maximum: 100 });
  assert_eq!(slider.value(), 40);
  assert_eq!(*slider.handle_rect(), handle);
  assert_eq!(changed.get(), 0);
}

#[test]
fn out_of_range_message_reports_maximum() {
  let mut slider = slider(100, 0);
  let error = slider.set_value(101).unwrap_err();
  assert_eq!(error.to_string(), "value 101 is outside of the valid range 0..=100");
}

#[test]
fn negative_value_is_rejected() {
  let mut slider = slider(100, 40);
  let changed = count(slider.value_changed());

  let error = slider.set_value(-1).unwrap_err();
  assert_eq!(error, Error::OutOfRange { value: -1, maximum: 100 });
  assert_eq!(slider.value(), 40);
  assert_eq!(changed.get(), 0);
}

#[test]
fn setting_value_always_notifies() {
  let mut slider = slider(100, 40);
  let values = record(slider.value_changed());

  slider.set_value(100).unwrap();
  slider.set_value(100).unwrap();
  slider.set_value(0).unwrap();
  assert_eq!(*values.borrow(), vec![100, 100, 0]);
}

#[test]
fn handle_position_matches_value() {
  let mut slider = slider(100, 0);
  assert_eq!(slider.handle_rect().position, Point::new(50.0, 10.0));

  slider.set_value(50).unwrap();
  assert_eq!(slider.handle_rect().position, Point::new(140.0, 10.0));

  slider.set_value(100).unwrap();
  assert_eq!(slider.handle_rect().position, Point::new(230.0, 10.0));
}

#[test]
fn equal_maximum_is_a_no_op() {
  let mut slider = slider(100, 100);
  let changed = count(slider.value_changed());

  slider.set_maximum(100).unwrap();
  assert_eq!(slider.value(), 100);
  assert_eq!(changed.get(), 0);
}

#[test]
fn lowering_maximum_clamps_value() {
  let mut slider = slider(100, 80);
  let values = record(slider.value_changed());

  slider.set_maximum(60).unwrap();
  assert_eq!(slider.maximum(), 60);
  assert_eq!(slider.value(), 60);
  assert_eq!(*values.borrow(), vec![60]);
  assert_eq!(slider.handle_rect().position, Point::new(230.0, 10.0));
}

#[test]
fn raising_maximum_moves_handle_silently() {
  let mut slider = slider(100, 50);
  let changed = count(slider.value_changed());

  slider.set_maximum(200).unwrap();
  assert_eq!(slider.value(), 50);
  assert_eq!(changed.get(), 0);
  assert_eq!(slider.handle_rect().position, Point::new(95.0, 10.0));
}

#[test]
fn negative_maximum_is_rejected() {
  let mut slider = slider(100, 50);
  let changed = count(slider.value_changed());

  assert_eq!(slider.set_maximum(-5).unwrap_err(), Error::NegativeMaximum(-5));
  assert_eq!(slider.maximum(), 100);
  assert_eq!(slider.value(), 50);
  assert_eq!(changed.get(), 0);
}

#[test]
fn zero_maximum() {
  let mut slider = slider(100, 50);
  let values = record(slider.value_changed());

  slider.set_maximum(0).unwrap();
  assert_eq!(slider.value(), 0);
  assert_eq!(*values.borrow(), vec![0]);
  assert_eq!(slider.handle_rect().position, Point::new(50.0, 10.0));
  assert!(slider.handle_rect().position.x.is_finite());

  slider.go_right();
  assert_eq!(slider.value(), 0);
  assert_eq!(slider.handle_rect().position, Point::new(50.0, 10.0));
  assert_eq!(slider.set_value(1).unwrap_err(), Error::OutOfRange { value: 1, maximum: 0 });
}

#[test]
fn stepping_uses_multiplier() {
  let mut slider = slider(100, 50);
  slider.set_multiplier(10);

  slider.go_right();
  assert_eq!(slider.value(), 60);
  slider.go_left();
  slider.go_left();
  assert_eq!(slider.value(), 40);
}

#[test]
fn go_left_stops_at_zero() {
  let mut slider = slider(100, 5);
  slider.set_multiplier(3);
  let values = record(slider.value_changed());

  slider.go_left();
  slider.go_left();
  slider.go_left();
  assert_eq!(slider.value(), 0);
  assert_eq!(*values.borrow(), vec![2, 0, 0]);
}

#[test]
fn go_right_stops_at_maximum() {
  let mut slider = slider(10, 5);
  slider.set_multiplier(3);
  let values = record(slider.value_changed());

  slider.go_right();
  slider.go_right();
  slider.go_right();
  assert_eq!(slider.value(), 10);
  assert_eq!(*values.borrow(), vec![8, 10, 10]);
}

#[test]
fn zero_multiplier_keeps_value() {
  let mut slider = slider(100, 50);
  slider.set_multiplier(0);
  let values = record(slider.value_changed());

  slider.go_left();
  slider.go_right();
  assert_eq!(slider.value(), 50);
  assert_eq!(*values.borrow(), vec![50, 50]);
}

#[test]
fn negative_multiplier_reverses_direction_within_bounds() {
  let mut slider = slider(100, 98);
  slider.set_multiplier(-5);

  slider.go_left();
  assert_eq!(slider.value(), 100);

  slider.set_value(3).unwrap();
  slider.go_right();
  assert_eq!(slider.value(), 0);
}

#[test]
fn extreme_multiplier_does_not_overflow() {
  let mut slider = slider(i32::MAX, i32::MAX - 1);
  slider.set_multiplier(i32::MAX);

  slider.go_right();
  assert_eq!(slider.value(), i32::MAX);

  slider.set_multiplier(i32::MIN);
  slider.go_left();
  assert_eq!(slider.value(), i32::MAX);
  slider.go_right();
  assert_eq!(slider.value(), 0);
}

#[test]
fn left_and_right_controls_step() {
  let mut slider = slider(100, 50);
  let changed = count(slider.value_changed());

  assert_eq!(slider.handle(Control::Left), None);
  assert_eq!(slider.value(), 49);
  assert_eq!(slider.handle(Control::Right), None);
  assert_eq!(slider.handle(Control::Right), None);
  assert_eq!(slider.value(), 51);
  assert_eq!(changed.get(), 3);
}

#[test]
fn other_controls_reach_item() {
  let mut slider = slider(100, 50);
  let selected = count(slider.item_mut().selected());
  let changed = count(slider.value_changed());

  assert_eq!(slider.handle(Control::Accept), None);
  assert_eq!(slider.handle(Control::Up), Some(Control::Up));
  assert_eq!(slider.handle(Control::Back), Some(Control::Back));
  assert_eq!(selected.get(), 1);
  assert_eq!(changed.get(), 0);
  assert_eq!(slider.value(), 50);
}
