use crate::cursor::Cursor;
use crate::err::PipeErr;

/// 对上游的每个元素应用映射函数，元素类型可以改变。
///
/// 每个位置的映射结果在首次读取时计算并缓存，直到下一次`advance`，
/// 因此映射函数对每个被读取的元素恰好调用一次。
pub struct Map<C, F, T> {
    upstream: C,
    mapper: F,
    cached: Option<T>,
}

impl<C, F, T> Map<C, F, T>
where
    C: Cursor,
    F: FnMut(&C::Item) -> T,
{
    pub fn new(upstream: C, mapper: F) -> Self {
        Map { upstream, mapper, cached: None }
    }
}

impl<C, F, T> Cursor for Map<C, F, T>
where
    C: Cursor,
    F: FnMut(&C::Item) -> T,
{
    type Item = T;

    fn has_current(&mut self) -> bool {
        self.upstream.has_current()
    }

    fn current(&mut self) -> Result<&Self::Item, PipeErr> {
        let value = match self.cached.take() {
            Some(value) => value,
            None => (self.mapper)(self.upstream.current()?),
        };
        Ok(self.cached.insert(value))
    }

    fn advance(&mut self) {
        self.cached = None;
        self.upstream.advance();
    }
}
