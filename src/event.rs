// Copyright (C) 2018-2026 Daniel Mueller (deso@posteo.net)
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result;


/// A control (input) as forwarded by the owning menu.
///
/// The menu polls the host for input and hands the result to the
/// currently selected item through
/// [`Handleable::handle`][crate::Handleable::handle].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Control {
  /// Move the selection up.
  Up,
  /// Move the selection down.
  Down,
  /// Go left, e.g., to decrease a value.
  Left,
  /// Go right, e.g., to increase a value.
  Right,
  /// Activate the selected item.
  Accept,
  /// Go back or close the menu.
  Back,
}


/// The arguments of the event raised when an item got selected.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Selected;


/// The arguments of the event raised when the value of a slider
/// changed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ValueChanged {
  /// The value after the change.
  pub value: i32,
}


/// A token identifying a handler registered with an [`Event`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Subscription(u64);


type HandlerFn<A> = Box<dyn FnMut(&A)>;

/// A struct wrapping a `HandlerFn` while implementing `Debug`.
struct Handler<A>(HandlerFn<A>);

impl<A> Debug for Handler<A> {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    write!(f, "{:p}", self.0)
  }
}


/// An event that interested parties can subscribe to.
///
/// Handlers are invoked synchronously, in the order in which they were
/// subscribed, every time the owning widget raises the event.
#[derive(Debug)]
pub struct Event<A> {
  handlers: Vec<(Subscription, Handler<A>)>,
  next_id: u64,
}

impl<A> Event<A> {
  /// Create a new `Event` without any handlers.
  pub fn new() -> Self {
    Self {
      handlers: Vec::new(),
      next_id: 0,
    }
  }

  /// Register a handler to be invoked whenever the event is raised.
  pub fn subscribe<F>(&mut self, handler: F) -> Subscription
  where
    F: FnMut(&A) + 'static,
  {
    let subscription = Subscription(self.next_id);
    self.next_id += 1;
    self.handlers.push((subscription, Handler(Box::new(handler))));
    subscription
  }

  /// Remove a previously registered handler.
  ///
  /// Returns `false` if the handler was not (or no longer) registered.
  pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
    let count = self.handlers.len();
    self.handlers.retain(|(id, _)| *id != subscription);
    self.handlers.len() != count
  }

  /// Retrieve the number of registered handlers.
  pub fn len(&self) -> usize {
    self.handlers.len()
  }

  /// Check whether no handler is registered.
  pub fn is_empty(&self) -> bool {
    self.handlers.is_empty()
  }

  /// Invoke all registered handlers with the given arguments.
  pub(crate) fn raise(&mut self, args: &A) {
    for (_, handler) in self.handlers.iter_mut() {
      (handler.0)(args)
    }
  }
}

impl<A> Default for Event<A> {
  fn default() -> Self {
    Self::new()
  }
}
