//! Typed style enumerations.
//!
//! Hosts persist a `u8` per byte; grammars work with a typed enum whose discriminants are the
//! persisted values. [`lex_styles!`](crate::lex_styles) generates such an enum together with its
//! [`LexStyle`] implementation.

use std::fmt;

/// A per-grammar style (token class) enumeration.
pub trait LexStyle: Copy + Eq + fmt::Debug + 'static {
    /// The style of whitespace and unclassified text. Always persisted as `0`.
    const DEFAULT: Self;

    /// Every style of the grammar, in discriminant order.
    const ALL: &'static [Self];

    /// The persisted representation.
    fn to_raw(self) -> u8;

    /// Decode a persisted style, or `None` for values the grammar does not define.
    fn from_raw(raw: u8) -> Option<Self>;

    /// A stable, human readable name (used by tooling and tests).
    fn name(self) -> &'static str;

    /// Decode a persisted style, falling back to [`LexStyle::DEFAULT`].
    fn from_raw_or_default(raw: u8) -> Self {
        Self::from_raw(raw).unwrap_or(Self::DEFAULT)
    }
}

/// Declare a grammar's style enumeration.
///
/// The enum must contain a `Default` variant with value `0`.
///
/// ```rust
/// scilex::lex_styles! {
///     /// Styles of a tiny grammar.
///     pub enum TinyStyle {
///         Default = 0,
///         Comment = 1,
///         Word = 2,
///     }
/// }
///
/// use scilex::LexStyle;
/// assert_eq!(TinyStyle::from_raw(2), Some(TinyStyle::Word));
/// assert_eq!(TinyStyle::from_raw(9), None);
/// assert_eq!(TinyStyle::Comment.name(), "Comment");
/// ```
#[macro_export]
macro_rules! lex_styles {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u8)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant = $value, )+
        }

        impl $crate::LexStyle for $name {
            const DEFAULT: Self = Self::Default;
            const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];

            #[inline]
            fn to_raw(self) -> u8 {
                self as u8
            }

            #[inline]
            fn from_raw(raw: u8) -> Option<Self> {
                match raw {
                    $( $value => Some(Self::$variant), )+
                    _ => None,
                }
            }

            fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => stringify!($variant), )+
                }
            }
        }
    };
}
