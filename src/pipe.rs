use crate::PipeRes;
use crate::config::Config;
use crate::cursor::Cursor;
use crate::err::PipeErr;
use crate::op::{Filter, Inspect, Limit, Map, Skip, SkipWhile, TakeWhile};
use crate::output::{self, Values};
use itertools::Itertools;
use log::debug;
use rustc_hash::FxHashSet;
use std::fmt::Display;
use std::hash::Hash;
use std::io::Write;

/// 统一类型的流水线，通过动态分发包装任意游标链。
pub struct Pipe<'a, T> {
    cursor: Box<dyn Cursor<Item = T> + 'a>,
}

impl<'a, T> Pipe<'a, T> {
    pub fn new(cursor: impl Cursor<Item = T> + 'a) -> Self {
        Pipe { cursor: Box::new(cursor) }
    }
}

impl<T> Cursor for Pipe<'_, T> {
    type Item = T;

    fn has_current(&mut self) -> bool {
        self.cursor.has_current()
    }

    fn current(&mut self) -> Result<&Self::Item, PipeErr> {
        self.cursor.current()
    }

    fn advance(&mut self) {
        self.cursor.advance()
    }
}

/// 链式组合：所有游标都可以使用的装饰与终结操作。
///
/// 装饰操作获取上游的所有权并返回新的游标；终结操作耗尽游标。
pub trait CursorExt: Cursor + Sized {
    /* **************************************** 装饰 **************************************** */

    /// 丢弃前`count`个元素。
    fn skip(self, count: usize) -> Skip<Self> {
        Skip::new(self, count)
    }

    /// 最多保留前`count`个元素。
    fn take(self, count: usize) -> Limit<Self> {
        Limit::new(self, count)
    }

    /// 映射每个元素，可通过`map::<T, _>`显式指定目标类型。
    fn map<T, F>(self, mapper: F) -> Map<Self, F, T>
    where
        F: FnMut(&Self::Item) -> T,
    {
        Map::new(self, mapper)
    }

    /// 保留谓词成立的前导元素。
    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        TakeWhile::new(self, predicate)
    }

    /// 保留等于`value`的前导元素，等价于`until_neq(value)`。
    fn take_while_eq(self, value: Self::Item) -> TakeWhile<Self, impl FnMut(&Self::Item) -> bool>
    where
        Self::Item: PartialEq,
    {
        TakeWhile::new(self, move |item: &Self::Item| *item == value)
    }

    /// 保留不等于`value`的前导元素，等价于`until_eq(value)`。
    fn take_while_neq(self, value: Self::Item) -> TakeWhile<Self, impl FnMut(&Self::Item) -> bool>
    where
        Self::Item: PartialEq,
    {
        TakeWhile::new(self, move |item: &Self::Item| *item != value)
    }

    /// 在第一个谓词成立的元素处停止（不包含该元素）。
    fn until<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        TakeWhile::until(self, predicate)
    }

    fn until_eq(self, value: Self::Item) -> TakeWhile<Self, impl FnMut(&Self::Item) -> bool>
    where
        Self::Item: PartialEq,
    {
        TakeWhile::until(self, move |item: &Self::Item| *item == value)
    }

    fn until_neq(self, value: Self::Item) -> TakeWhile<Self, impl FnMut(&Self::Item) -> bool>
    where
        Self::Item: PartialEq,
    {
        TakeWhile::until(self, move |item: &Self::Item| *item != value)
    }

    /// 只保留谓词成立的元素。
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    fn filter_eq(self, value: Self::Item) -> Filter<Self, impl FnMut(&Self::Item) -> bool>
    where
        Self::Item: PartialEq,
    {
        Filter::new(self, move |item: &Self::Item| *item == value)
    }

    fn filter_neq(self, value: Self::Item) -> Filter<Self, impl FnMut(&Self::Item) -> bool>
    where
        Self::Item: PartialEq,
    {
        Filter::new(self, move |item: &Self::Item| *item != value)
    }

    /// 丢弃谓词成立的前导元素。
    fn skip_while<P>(self, predicate: P) -> SkipWhile<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        SkipWhile::new(self, predicate)
    }

    /// 元素首次被读取时调用`observer`。
    fn inspect<F>(self, observer: F) -> Inspect<Self, F>
    where
        F: FnMut(&Self::Item),
    {
        Inspect::new(self, observer)
    }

    /// 去重，只保留每个元素的首次出现。
    fn uniq(self) -> Filter<Self, impl FnMut(&Self::Item) -> bool>
    where
        Self::Item: Hash + Eq + Clone,
    {
        let mut seen = FxHashSet::default();
        // 依赖Filter对每个元素只求值一次
        Filter::new(self, move |item: &Self::Item| seen.insert(item.clone()))
    }

    /// 擦除具体类型，得到统一的[`Pipe`]。
    fn boxed<'a>(self) -> Pipe<'a, Self::Item>
    where
        Self: 'a,
    {
        Pipe::new(self)
    }

    /* **************************************** 终结 **************************************** */

    /// 耗尽游标，产出元素副本的迭代器。
    fn into_values(self) -> Values<Self> {
        Values::new(self)
    }

    /// 耗尽游标，按顺序收集到新的集合中。
    fn to_collection<B>(self) -> B
    where
        Self::Item: Clone,
        B: FromIterator<Self::Item>,
    {
        self.into_values().collect()
    }

    fn to_vec(self) -> Vec<Self::Item>
    where
        Self::Item: Clone,
    {
        let values: Vec<_> = self.to_collection();
        debug!("collected {} elements", values.len());
        values
    }

    /// 耗尽游标，按顺序追加到`sink`。
    fn copy_to<E>(self, sink: &mut E)
    where
        Self::Item: Clone,
        E: Extend<Self::Item>,
    {
        sink.extend(self.into_values());
    }

    /// 耗尽游标，每个元素写为一行。
    fn write_to<W: Write>(self, writer: &mut W, configs: &[Config]) -> PipeRes<()>
    where
        Self::Item: Display,
    {
        output::write_lines(self, writer, configs)
    }

    /// 耗尽游标，以`sep`连接为字符串。
    fn join(self, sep: &str) -> String
    where
        Self::Item: Clone + Display,
    {
        self.into_values().join(sep)
    }

    /// 耗尽游标，返回元素数量。
    fn count(self) -> usize {
        output::count(self)
    }
}

impl<C: Cursor> CursorExt for C {}
