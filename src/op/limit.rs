use crate::cursor::Cursor;
use crate::err::PipeErr;

/// 最多保留上游的前N个元素。
///
/// 预算耗尽后永久结束，即使上游仍有元素。
/// 消耗最后一个预算时不再推进上游，因此上游最多只会被推进到第N个元素。
#[derive(Debug)]
pub struct Limit<C> {
    upstream: C,
    remaining: usize,
    exhausted: bool,
}

impl<C: Cursor> Limit<C> {
    pub fn new(upstream: C, count: usize) -> Self {
        Limit { upstream, remaining: count, exhausted: count == 0 }
    }
}

impl<C: Cursor> Cursor for Limit<C> {
    type Item = C::Item;

    fn has_current(&mut self) -> bool {
        !self.exhausted && self.upstream.has_current()
    }

    fn current(&mut self) -> Result<&Self::Item, PipeErr> {
        if self.exhausted {
            return Err(PipeErr::illegal_state("limit"));
        }
        self.upstream.current()
    }

    fn advance(&mut self) {
        if !self.has_current() {
            return;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            self.exhausted = true;
        } else {
            self.upstream.advance();
        }
    }
}
