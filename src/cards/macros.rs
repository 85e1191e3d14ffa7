//! Setter macros shared by the card types.
//!
//! Every card type exposes the same three kinds of mutators: `with_x` for
//! optional fields, a `with_x(bool)` / `x()` pair for flags, and `add_x` for
//! arrays. These macros generate them inside an `impl` block.

/// `with_x(value)` for `Option<T>` fields.
macro_rules! option_setters {
    ( $( $method:ident => $field:ident: $ty:ty ),* $(,)? ) => {
        $(
            #[doc = concat!("Sets `", stringify!($field), "`.")]
            pub fn $method(mut self, value: impl Into<$ty>) -> Self {
                self.$field = Some(value.into());
                self
            }
        )*
    };
}

pub(crate) use option_setters;

/// `with_x(value)` for optional counts and indexes. Takes the value as is so
/// integer literals infer the field type.
macro_rules! value_setters {
    ( $( $method:ident => $field:ident: $ty:ty ),* $(,)? ) => {
        $(
            #[doc = concat!("Sets `", stringify!($field), "`.")]
            pub fn $method(mut self, value: $ty) -> Self {
                self.$field = Some(value);
                self
            }
        )*
    };
}

pub(crate) use value_setters;

/// `with_x(bool)` plus the `x()` shorthand that sets the flag to `true`.
macro_rules! flag_setters {
    ( $( $short:ident / $method:ident => $field:ident ),* $(,)? ) => {
        $(
            #[doc = concat!("Sets `", stringify!($field), "`.")]
            pub fn $method(mut self, value: bool) -> Self {
                self.$field = Some(value);
                self
            }

            #[doc = concat!("Sets `", stringify!($field), "` to `true`.")]
            pub fn $short(self) -> Self {
                self.$method(true)
            }
        )*
    };
}

pub(crate) use flag_setters;

/// `add_x(iter)` for `Vec<T>` fields. Appends in iteration order.
macro_rules! vec_adders {
    ( $( $method:ident => $field:ident: $ty:ty ),* $(,)? ) => {
        $(
            #[doc = concat!("Appends to `", stringify!($field), "`.")]
            pub fn $method(mut self, values: impl IntoIterator<Item = $ty>) -> Self {
                self.$field.extend(values);
                self
            }
        )*
    };
}

pub(crate) use vec_adders;

/// A fixed `type` value for types outside the tagged families
/// (`AdaptiveCard`, `Column`, `TextRun`, ...). Serializes as the literal
/// and cannot be set.
macro_rules! discriminator {
    ( $name:ident = $value:literal ) => {
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        enum $name {
            #[default]
            #[serde(rename = $value)]
            Value,
        }
    };
}

pub(crate) use discriminator;

/// Implements [`CardObject`](super::CardObject) and the conversion into the
/// family enum for tagged members.
macro_rules! card_object {
    ( $family:ident { $( $ty:ident => $tag:literal ),* $(,)? } ) => {
        $(
            impl $crate::cards::CardObject for $ty {
                const TYPE: &'static str = $tag;
            }

            impl From<$ty> for $family {
                fn from(value: $ty) -> Self {
                    $family::$ty(value)
                }
            }
        )*
    };
    ( $( $ty:ident => $tag:literal ),* $(,)? ) => {
        $(
            impl $crate::cards::CardObject for $ty {
                const TYPE: &'static str = $tag;
            }
        )*
    };
}

pub(crate) use card_object;
