use std::fmt::Debug;

use super::Cursor;

mod sealed {
    pub trait Sealed {}
}

/// Single-pass reading, one step at a time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputTag;

/// Multi-pass reading, one step at a time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ForwardTag;

/// Forward traversal, plus stepping back.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BidirectionalTag;

/// Bidirectional traversal, plus constant time jumps and distances.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RandomAccessTag;

/// One of the four traversal capability tags. The set is closed.
///
/// Tags only exist at the type level: every one of them is a zero-sized marker that algorithms
/// use to pick an implementation at compile time, through [`Traversal`].
pub trait Category: sealed::Sealed + Debug + Default + Copy + Eq + 'static {
    /// The position of the tag in the hierarchy, counting from [`InputTag`] at 0.
    const RANK: u8;
    /// A readable name for diagnostics.
    const NAME: &'static str;
}

/// Implemented by a tag for every tag that it is at least as strong as, including itself.
///
/// `C::Category: HasCategory<ForwardTag>` reads as "cursor `C` can be used wherever a forward
/// cursor is required".
pub trait HasCategory<Tag: Category>: Category {}

macro_rules! category {
    ($tag:ty, $rank:literal, $name:literal => $($weaker:ty),+) => {
        impl sealed::Sealed for $tag {}

        impl Category for $tag {
            const RANK: u8 = $rank;
            const NAME: &'static str = $name;
        }

        $(impl HasCategory<$weaker> for $tag {})+
    };
}

category!(InputTag, 0, "input" => InputTag);
category!(ForwardTag, 1, "forward" => InputTag, ForwardTag);
category!(BidirectionalTag, 2, "bidirectional" => InputTag, ForwardTag, BidirectionalTag);
category!(
    RandomAccessTag, 3, "random access" => InputTag, ForwardTag, BidirectionalTag, RandomAccessTag
);

/// Returns whether the category of cursor `C` is at least as strong as `Tag`. This is the value
/// form of the bound `C::Category: HasCategory<Tag>` and is always evaluated at compile time.
///
/// # Examples
/// ```
/// # use standard_containers::cursor::{has_category, BidirectionalTag, RandomAccessTag, Reverse};
/// assert!(has_category::<*const u8, RandomAccessTag>());
/// assert!(has_category::<*mut u8, BidirectionalTag>());
/// assert!(!has_category::<Reverse<*const u8>, RandomAccessTag>());
/// ```
pub const fn has_category<C: Cursor, Tag: Category>() -> bool {
    <C::Category as Category>::RANK >= Tag::RANK
}

/// Returns the name of the category of cursor `C`.
pub const fn category_name<C: Cursor>() -> &'static str {
    <C::Category as Category>::NAME
}

