// Copyright (C) 2018-2026 Daniel Mueller (deso@posteo.net)
// SPDX-License-Identifier: GPL-3.0-or-later

#![deny(
  missing_copy_implementations,
  missing_debug_implementations,
  trivial_casts,
  trivial_numeric_casts,
  unsafe_code,
  unstable_features,
  unused_import_braces,
  unused_qualifications,
  unused_results,
)]
#![warn(
  future_incompatible,
  rust_2018_compatibility,
  rust_2018_idioms,
)]

//! A crate providing custom derive functionality for the `native_menu`
//! crate.

use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

use proc_macro::TokenStream;
use proc_macro2::Span;
use proc_macro2::TokenStream as Tokens;
use quote::quote;
use syn::parse;
use syn::Attribute;
use syn::Data;
use syn::DeriveInput;
use syn::Field;
use syn::Fields;
use syn::Member;


/// The error type used internally by this module.
#[derive(Debug)]
enum Error {
  Error(String),
}

impl Display for Error {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    match self {
      Error::Error(e) => write!(f, "{e}"),
    }
  }
}

impl From<String> for Error {
  fn from(string: String) -> Error {
    Error::Error(string)
  }
}

impl From<&'static str> for Error {
  fn from(string: &'static str) -> Error {
    Error::Error(string.to_string())
  }
}

type Result<T> = std::result::Result<T, Error>;


/// Custom derive functionality for the `native_menu::Item` trait.
///
/// The trait is implemented by forwarding to a field that itself
/// implements `native_menu::Item`. That field is either the one marked
/// with `#[item]` or, if no field is marked, the one named `item`.
///
/// This macro roughly expands to the following code:
///
/// ```rust
/// # #[derive(Debug)]
/// # struct CheckboxItem {
/// #   item: native_menu::NativeItem,
/// # }
/// impl native_menu::Item for CheckboxItem {
///   fn item(&self) -> &native_menu::NativeItem {
///     native_menu::Item::item(&self.item)
///   }
///
///   fn item_mut(&mut self) -> &mut native_menu::NativeItem {
///     native_menu::Item::item_mut(&mut self.item)
///   }
/// }
/// ```
#[proc_macro_derive(Item, attributes(item))]
pub fn item(input: TokenStream) -> TokenStream {
  match expand_item(input) {
    Ok(tokens) => tokens,
    Err(error) => panic!("{}", error),
  }
}

fn expand_item(input: TokenStream) -> Result<TokenStream> {
  let input = parse::<DeriveInput>(input).map_err(|_| "unable to parse input")?;
  let tokens = expand_item_input(&input)?;
  Ok(tokens.into())
}

/// Expand the input with the implementation of the `Item` trait.
fn expand_item_input(input: &DeriveInput) -> Result<Tokens> {
  match &input.data {
    Data::Struct(data) => {
      let member = find_item_field(&data.fields)?;
      Ok(expand_item_trait(input, &member))
    },
    _ => Err(Error::from("#[derive(Item)] is only defined for structs")),
  }
}

/// Check whether the given attributes contain a bare `#[item]`.
fn is_item_attribute(attributes: &[Attribute]) -> Result<bool> {
  let mut found = false;

  for attr in attributes.iter().filter(|attr| attr.path().is_ident("item")) {
    let _path = attr
      .meta
      .require_path_only()
      .map_err(|_| "the #[item] attribute does not accept arguments")?;

    if found {
      return Err(Error::from("duplicate #[item] attribute"))
    }
    found = true;
  }
  Ok(found)
}

/// Find the field to forward to.
// Note that we only check for the name or marker of the field, not for
// its type. Checking types is cumbersome and best-effort anyway as we
// are working on tokens without context. If the type does not implement
// `native_menu::Item` the compiler will tell.
fn find_item_field(fields: &Fields) -> Result<Member> {
  let member = |(idx, field): (usize, &Field)| match &field.ident {
    Some(ident) => Member::Named(ident.clone()),
    None => Member::Unnamed(syn::Index {
      index: idx as u32,
      span: Span::call_site(),
    }),
  };

  let mut marked = None;
  for (idx, field) in fields.iter().enumerate() {
    if is_item_attribute(&field.attrs)? {
      if marked.is_some() {
        return Err(Error::from("only a single field may be marked #[item]"))
      }
      marked = Some((idx, field));
    }
  }

  if let Some(marked) = marked {
    return Ok(member(marked))
  }

  fields
    .iter()
    .enumerate()
    .find(|(_, field)| field.ident.as_ref().is_some_and(|ident| ident == "item"))
    .map(member)
    .ok_or_else(|| Error::from("struct field item: impl ::native_menu::Item not found"))
}

/// Expand an implementation for the `native_menu::Item` trait.
fn expand_item_trait(input: &DeriveInput, member: &Member) -> Tokens {
  let name = &input.ident;
  let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

  quote! {
    impl #impl_generics ::native_menu::Item for #name #ty_generics #where_clause {
      fn item(&self) -> &::native_menu::NativeItem {
        ::native_menu::Item::item(&self.#member)
      }

      fn item_mut(&mut self) -> &mut ::native_menu::NativeItem {
        ::native_menu::Item::item_mut(&mut self.#member)
      }
    }
  }
}
