use crate::cursor::Cursor;
use crate::err::PipeErr;

/// 观察经过的元素，不做修改。
///
/// 每个位置在首次被读取时调用一次观察函数，只被跳过而未被读取的元素不会被观察。
pub struct Inspect<C, F> {
    upstream: C,
    observer: F,
    seen: bool,
}

impl<C, F> Inspect<C, F>
where
    C: Cursor,
    F: FnMut(&C::Item),
{
    pub fn new(upstream: C, observer: F) -> Self {
        Inspect { upstream, observer, seen: false }
    }
}

impl<C, F> Cursor for Inspect<C, F>
where
    C: Cursor,
    F: FnMut(&C::Item),
{
    type Item = C::Item;

    fn has_current(&mut self) -> bool {
        self.upstream.has_current()
    }

    fn current(&mut self) -> Result<&Self::Item, PipeErr> {
        let item = self.upstream.current()?;
        if !self.seen {
            (self.observer)(item);
            self.seen = true;
        }
        Ok(item)
    }

    fn advance(&mut self) {
        self.seen = false;
        self.upstream.advance();
    }
}
