//! Type-conditional formatting.
//!
//! [`TypeClass`] selects a display path from static type information
//! alone: each implementation is monomorphized for its type, so an
//! instantiation carries only its own branch and no runtime type
//! inspection happens anywhere.

use std::io::Write;

use crate::display::DisplaySink;
use crate::error::Result;

/// Static classification of a value's type for display purposes.
pub trait TypeClass {
    /// Route the value to the display path selected for its type.
    fn describe<W: Write>(&self, sink: &mut DisplaySink<W>) -> Result<()>;
}

macro_rules! integral_type_class {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TypeClass for $ty {
                fn describe<W: Write>(&self, sink: &mut DisplaySink<W>) -> Result<()> {
                    sink.scalar("Integral", self)
                }
            }
        )*
    };
}

macro_rules! other_type_class {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TypeClass for $ty {
                fn describe<W: Write>(&self, sink: &mut DisplaySink<W>) -> Result<()> {
                    sink.scalar("Other type", "")
                }
            }
        )*
    };
}

integral_type_class!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
other_type_class!(f32, f64, &str, String);
