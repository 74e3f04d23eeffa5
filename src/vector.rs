//! Fixed-size vector value types.
//!
//! `Vector2D`, `Vector3D` and `Vector4D` are plain `f32` aggregates with
//! component-wise arithmetic. They are `Copy` and carry no identity beyond
//! their components. The derived `PartialEq` compares bits; use the `approx`
//! impls (or [`crate::library::approx_eq`]) when rounding is expected.

use approx::{AbsDiffEq, RelativeEq};
use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// Operations shared by every vector dimension.
///
/// The free functions in [`crate::library`] are written against this trait so
/// that dot, magnitude, normalization and projection work for any size.
pub trait Vector:
    Copy
    + Default
    + PartialEq
    + fmt::Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Mul<f32, Output = Self>
    + Div<f32, Output = Self>
{
    /// Largest absolute value among the components; `0.0` for the zero vector.
    fn max_abs_component(self) -> f32;

    /// Sum of component-wise products.
    fn dot(self, rhs: Self) -> f32;
}

fn write_components(f: &mut fmt::Formatter<'_>, components: &[f32]) -> fmt::Result {
    write!(f, "(")?;
    for (i, c) in components.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        match f.precision() {
            Some(p) => write!(f, "{:.*}", p, c)?,
            None => write!(f, "{}", c)?,
        }
    }
    write!(f, ")")
}

macro_rules! vector_type {
    ($(#[$meta:meta])* $name:ident, $dim:literal, $($field:ident => $idx:literal),+) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq)]
        pub struct $name {
            $(pub $field: f32,)+
        }

        impl $name {
            /// The zero vector.
            pub const ZERO: Self = Self { $($field: 0.0,)+ };

            #[inline]
            pub const fn new($($field: f32),+) -> Self {
                Self { $($field,)+ }
            }

            #[inline]
            pub const fn to_array(self) -> [f32; $dim] {
                [$(self.$field),+]
            }
        }

        impl Vector for $name {
            #[inline]
            fn max_abs_component(self) -> f32 {
                0.0f32 $(.max(self.$field.abs()))+
            }

            #[inline]
            fn dot(self, rhs: Self) -> f32 {
                0.0 $(+ self.$field * rhs.$field)+
            }
        }

        impl From<[f32; $dim]> for $name {
            #[inline]
            fn from(a: [f32; $dim]) -> Self {
                Self { $($field: a[$idx],)+ }
            }
        }

        impl From<$name> for [f32; $dim] {
            #[inline]
            fn from(v: $name) -> Self {
                v.to_array()
            }
        }

        /// Panics when `index` is not below the dimension, like slice indexing.
        impl Index<usize> for $name {
            type Output = f32;

            fn index(&self, index: usize) -> &f32 {
                match index {
                    $($idx => &self.$field,)+
                    _ => panic!("index {} out of range for {}", index, stringify!($name)),
                }
            }
        }

        impl IndexMut<usize> for $name {
            fn index_mut(&mut self, index: usize) -> &mut f32 {
                match index {
                    $($idx => &mut self.$field,)+
                    _ => panic!("index {} out of range for {}", index, stringify!($name)),
                }
            }
        }

        impl Add for $name {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($field: self.$field + rhs.$field,)+ }
            }
        }

        impl Sub for $name {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($field: self.$field - rhs.$field,)+ }
            }
        }

        impl Neg for $name {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self { $($field: -self.$field,)+ }
            }
        }

        impl Mul<f32> for $name {
            type Output = Self;
            #[inline]
            fn mul(self, s: f32) -> Self {
                Self { $($field: self.$field * s,)+ }
            }
        }

        impl Mul<$name> for f32 {
            type Output = $name;
            #[inline]
            fn mul(self, v: $name) -> $name {
                v * self
            }
        }

        impl Div<f32> for $name {
            type Output = Self;
            #[inline]
            fn div(self, s: f32) -> Self {
                Self { $($field: self.$field / s,)+ }
            }
        }

        impl AddAssign for $name {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                $(self.$field += rhs.$field;)+
            }
        }

        impl SubAssign for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$field -= rhs.$field;)+
            }
        }

        impl MulAssign<f32> for $name {
            #[inline]
            fn mul_assign(&mut self, s: f32) {
                $(self.$field *= s;)+
            }
        }

        impl DivAssign<f32> for $name {
            #[inline]
            fn div_assign(&mut self, s: f32) {
                $(self.$field /= s;)+
            }
        }

        impl AbsDiffEq for $name {
            type Epsilon = f32;

            fn default_epsilon() -> f32 {
                f32::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                $(self.$field.abs_diff_eq(&other.$field, epsilon))&&+
            }
        }

        impl RelativeEq for $name {
            fn default_max_relative() -> f32 {
                f32::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
                $(self.$field.relative_eq(&other.$field, epsilon, max_relative))&&+
            }
        }

        /// Prints `(x, y, ...)`; a precision such as `{:.4}` applies to every component.
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write_components(f, &self.to_array())
            }
        }
    };
}

vector_type!(
    /// A 2D vector.
    Vector2D, 2, x => 0, y => 1
);

vector_type!(
    /// A 3D vector. The only dimension with a cross product.
    Vector3D, 3, x => 0, y => 1, z => 2
);

vector_type!(
    /// A 4D vector.
    Vector4D, 4, x => 0, y => 1, z => 2, w => 3
);
