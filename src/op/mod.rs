mod filter;
mod inspect;
mod limit;
mod map;
mod skip;
mod skip_while;
mod take_while;

pub use filter::Filter;
pub use inspect::Inspect;
pub use limit::Limit;
pub use map::Map;
pub use skip::Skip;
pub use skip_while::SkipWhile;
pub use take_while::TakeWhile;

use crate::pipe::{CursorExt, Pipe};
use std::hash::Hash;

/// 以数据描述的、不改变元素类型的操作，可逐个套用到[`Pipe`]上。
#[derive(Debug, Clone, PartialEq)]
pub enum Op<T> {
    /* **************************************** 减少 **************************************** */
    /// 丢弃前N个数据，保留后续的其他数据。
    Skip(usize),
    /// 保留前N个数据，丢弃后续的其他数据。
    Limit(usize),
    /// 只保留等于给定值的数据。
    FilterEq(T),
    /// 丢弃等于给定值的数据。
    FilterNeq(T),
    /// 保留数据直到遇到给定值（不包含）。
    UntilEq(T),
    /// 保留与给定值相等的前导数据。
    UntilNeq(T),
    /// 去重。
    Uniq,
}

impl<T> Op<T>
where
    T: Hash + Eq + Clone,
{
    pub fn wrap<'a>(self, pipe: Pipe<'a, T>) -> Pipe<'a, T>
    where
        T: 'a,
    {
        match self {
            Op::Skip(0) => pipe,
            Op::Skip(count) => pipe.skip(count).boxed(),
            Op::Limit(count) => pipe.take(count).boxed(),
            Op::FilterEq(value) => pipe.filter_eq(value).boxed(),
            Op::FilterNeq(value) => pipe.filter_neq(value).boxed(),
            Op::UntilEq(value) => pipe.until_eq(value).boxed(),
            Op::UntilNeq(value) => pipe.until_neq(value).boxed(),
            Op::Uniq => pipe.uniq().boxed(),
        }
    }
}
