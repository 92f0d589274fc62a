// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Cache key derivation.
//!
//! Every argument is rendered with its canonical text form and the renderings
//! are joined with [`KEY_DELIMITER`]. Two argument lists that render to the
//! same text share a key, whatever their original types: `(1,)` and `("1",)`
//! hit the same entry, and so do `("a&b",)` and `("a", "b")`.

use std::{borrow::Cow, rc::Rc, sync::Arc};

/// Separator placed between rendered arguments.
pub const KEY_DELIMITER: char = '&';

/// A value with a canonical, lossless text form usable as a key component.
pub trait PrimitiveArg {
    /// Append the canonical rendering of `self` to `key`.
    fn write_key(&self, key: &mut String);
}

macro_rules! impl_integer_arg {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PrimitiveArg for $ty {
                #[inline]
                fn write_key(&self, key: &mut String) {
                    key.push_str(itoa::Buffer::new().format(*self));
                }
            }
        )*
    };
}

impl_integer_arg!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_float_arg {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PrimitiveArg for $ty {
                #[inline]
                fn write_key(&self, key: &mut String) {
                    let mut buffer = ryu::Buffer::new();
                    write_float(key, &mut buffer, *self);
                }
            }
        )*
    };
}

impl_float_arg!(f32, f64);

/// Largest decimal point position printed without an exponent.
const MAX_PLAIN_POINT: i32 = 21;
/// Smallest decimal point position printed without an exponent.
const MIN_PLAIN_POINT: i32 = -5;

/// Render a float the way a JavaScript number prints.
///
/// The shortest round-tripping digits come from ryu; they are laid out in
/// plain decimal while the value sits in `[1e-7, 1e21)` and in `d.ddde±x`
/// form outside it. Zero has a single unsigned rendering and non-finite values
/// use the `NaN`/`Infinity` names.
fn write_float<F>(key: &mut String, buffer: &mut ryu::Buffer, float: F)
where
    F: ryu::Float + Into<f64> + Copy,
{
    let wide: f64 = float.into();
    if wide.is_nan() {
        key.push_str("NaN");
        return;
    }
    if wide.is_infinite() {
        key.push_str(if wide < 0.0 { "-Infinity" } else { "Infinity" });
        return;
    }
    if wide == 0.0 {
        key.push('0');
        return;
    }

    let text = buffer.format_finite(float);
    let (negative, text) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (mantissa, exponent) = match text.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or_default()),
        None => (text, 0),
    };
    let (integral, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    // value = 0.DIGITS * 10^point
    let mut digits = String::with_capacity(integral.len() + fraction.len());
    digits.push_str(integral);
    digits.push_str(fraction);
    let significant = digits.trim_start_matches('0');
    let point = integral.len() as i32 + exponent - (digits.len() - significant.len()) as i32;
    let significant = significant.trim_end_matches('0');
    let count = significant.len() as i32;

    if negative {
        key.push('-');
    }
    if count <= point && point <= MAX_PLAIN_POINT {
        key.push_str(significant);
        key.extend(std::iter::repeat('0').take((point - count) as usize));
    } else if 0 < point && point <= MAX_PLAIN_POINT {
        let (head, tail) = significant.split_at(point as usize);
        key.push_str(head);
        key.push('.');
        key.push_str(tail);
    } else if MIN_PLAIN_POINT <= point && point <= 0 {
        key.push_str("0.");
        key.extend(std::iter::repeat('0').take(point.unsigned_abs() as usize));
        key.push_str(significant);
    } else {
        let (head, tail) = significant.split_at(1);
        key.push_str(head);
        if !tail.is_empty() {
            key.push('.');
            key.push_str(tail);
        }
        let exponent = point - 1;
        key.push('e');
        if exponent > 0 {
            key.push('+');
        }
        key.push_str(itoa::Buffer::new().format(exponent));
    }
}

impl PrimitiveArg for bool {
    #[inline]
    fn write_key(&self, key: &mut String) {
        key.push_str(if *self { "true" } else { "false" });
    }
}

impl PrimitiveArg for char {
    #[inline]
    fn write_key(&self, key: &mut String) {
        key.push(*self);
    }
}

impl PrimitiveArg for str {
    #[inline]
    fn write_key(&self, key: &mut String) {
        key.push_str(self);
    }
}

impl PrimitiveArg for String {
    #[inline]
    fn write_key(&self, key: &mut String) {
        key.push_str(self);
    }
}

impl PrimitiveArg for Cow<'_, str> {
    #[inline]
    fn write_key(&self, key: &mut String) {
        key.push_str(self);
    }
}

impl PrimitiveArg for Box<str> {
    #[inline]
    fn write_key(&self, key: &mut String) {
        key.push_str(self);
    }
}

impl PrimitiveArg for Arc<str> {
    #[inline]
    fn write_key(&self, key: &mut String) {
        key.push_str(self);
    }
}

impl PrimitiveArg for Rc<str> {
    #[inline]
    fn write_key(&self, key: &mut String) {
        key.push_str(self);
    }
}

impl<T: PrimitiveArg + ?Sized> PrimitiveArg for &T {
    #[inline]
    fn write_key(&self, key: &mut String) {
        (**self).write_key(key);
    }
}

impl<T: PrimitiveArg + ?Sized> PrimitiveArg for &mut T {
    #[inline]
    fn write_key(&self, key: &mut String) {
        (**self).write_key(key);
    }
}

/// An ordered, fixed-arity list of primitive arguments.
pub trait ArgList {
    /// Derive the cache key for this argument list.
    fn cache_key(&self) -> String;
}

impl ArgList for () {
    fn cache_key(&self) -> String {
        String::new()
    }
}

macro_rules! impl_arg_list {
    ($first:ident $(, $rest:ident)*) => {
        impl<$first: PrimitiveArg, $($rest: PrimitiveArg),*> ArgList for ($first, $($rest,)*) {
            #[allow(non_snake_case)]
            fn cache_key(&self) -> String {
                let ($first, $($rest,)*) = self;
                let mut key = String::new();
                $first.write_key(&mut key);
                $(
                    key.push(KEY_DELIMITER);
                    $rest.write_key(&mut key);
                )*
                key
            }
        }
    };
}

impl_arg_list!(A);
impl_arg_list!(A, B);
impl_arg_list!(A, B, C);
impl_arg_list!(A, B, C, D);
impl_arg_list!(A, B, C, D, E);
impl_arg_list!(A, B, C, D, E, F);
impl_arg_list!(A, B, C, D, E, F, G);
impl_arg_list!(A, B, C, D, E, F, G, H);
