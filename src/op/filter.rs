use crate::cursor::Cursor;
use crate::err::PipeErr;
use log::trace;

/// 只保留满足谓词的元素。
///
/// 构造时以及每次`advance`后，从上游向前查找直到找到满足谓词的元素或上游耗尽，
/// 谓词对每个经过的元素只求值一次。
pub struct Filter<C, P> {
    upstream: C,
    predicate: P,
}

impl<C, P> Filter<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    pub fn new(upstream: C, predicate: P) -> Self {
        let mut filter = Filter { upstream, predicate };
        filter.seek();
        filter
    }

    fn seek(&mut self) {
        while self.upstream.has_current() {
            let hit = match self.upstream.current() {
                Ok(item) => (self.predicate)(item),
                Err(_) => return,
            };
            if hit {
                return;
            }
            trace!("filter: skip element");
            self.upstream.advance();
        }
    }
}

impl<C, P> Cursor for Filter<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    type Item = C::Item;

    fn has_current(&mut self) -> bool {
        self.upstream.has_current()
    }

    fn current(&mut self) -> Result<&Self::Item, PipeErr> {
        if !self.upstream.has_current() {
            return Err(PipeErr::illegal_state("filter"));
        }
        self.upstream.current()
    }

    fn advance(&mut self) {
        if !self.upstream.has_current() {
            return;
        }
        self.upstream.advance();
        self.seek();
    }
}
