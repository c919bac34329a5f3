//! Key validity and value rendering for associative arrays

use std::fmt;

/// Token printed in place of a null value.
pub const NULL_TOKEN: &str = "<null>";

/// A type usable as an [`AssociativeArray`](super::AssociativeArray) key.
///
/// Rust has no null references, so nullness is a property of the key type.
/// String keys treat the empty string as the absent sentinel (an image
/// location is never empty), `Option` keys treat `None` as null, and
/// numeric keys are never null.
pub trait ArrayKey: PartialEq {
    /// Whether this key is the null sentinel and must be rejected.
    fn is_null(&self) -> bool {
        false
    }
}

impl ArrayKey for String {
    fn is_null(&self) -> bool {
        self.is_empty()
    }
}

impl ArrayKey for &str {
    fn is_null(&self) -> bool {
        self.is_empty()
    }
}

impl<T: PartialEq> ArrayKey for Option<T> {
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

macro_rules! never_null_keys {
    ($($ty:ty),* $(,)?) => {
        $(impl ArrayKey for $ty {})*
    };
}

never_null_keys!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// How a value is written inside an array's `{k:v, ...}` rendering.
///
/// `Option::None` renders as [`NULL_TOKEN`].
pub trait RenderValue {
    /// Write this value to the formatter.
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl RenderValue for String {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl RenderValue for &str {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl<T: RenderValue> RenderValue for Option<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => value.render(f),
            None => f.write_str(NULL_TOKEN),
        }
    }
}

macro_rules! render_with_display {
    ($($ty:ty),* $(,)?) => {
        $(impl RenderValue for $ty {
            fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self)
            }
        })*
    };
}

render_with_display!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_keys_null_when_empty() {
        assert!(String::new().is_null());
        assert!("".is_null());
        assert!(!"img/a.png".to_string().is_null());
    }

    #[test]
    fn test_option_keys_null_when_none() {
        assert!(None::<i32>.is_null());
        assert!(!Some(0).is_null());
    }

    #[test]
    fn test_numeric_keys_never_null() {
        assert!(!0i64.is_null());
        assert!(!0usize.is_null());
        assert!(!'\0'.is_null());
    }
}
