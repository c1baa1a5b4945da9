use crate::cursor::Cursor;
use crate::err::PipeErr;
use log::trace;

/// 保留上游的前导元素，直到遇到第一个停止元素（不包含）。
///
/// 停止条件为`predicate(x) == stop_on`：`until`在谓词成立时停止，`take_while`在谓词不成立时停止。
/// 构造时以及每次`advance`后预先检查上游当前元素，谓词对每个元素只求值一次，
/// 上游已耗尽时不会求值。一旦停止便永久结束。
pub struct TakeWhile<C, P> {
    upstream: C,
    predicate: P,
    stop_on: bool,
    done: bool,
}

impl<C, P> TakeWhile<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    /// 谓词成立时停止。
    pub fn until(upstream: C, predicate: P) -> Self {
        Self::with_stop_on(upstream, predicate, true)
    }

    /// 谓词不成立时停止。
    pub fn new(upstream: C, predicate: P) -> Self {
        Self::with_stop_on(upstream, predicate, false)
    }

    fn with_stop_on(upstream: C, predicate: P, stop_on: bool) -> Self {
        let mut take_while = TakeWhile { upstream, predicate, stop_on, done: false };
        take_while.look_ahead();
        take_while
    }

    fn look_ahead(&mut self) {
        if self.done {
            return;
        }
        if !self.upstream.has_current() {
            self.done = true;
            return;
        }
        let stop = match self.upstream.current() {
            Ok(item) => (self.predicate)(item) == self.stop_on,
            Err(_) => true,
        };
        if stop {
            trace!("take_while: stop element reached");
            self.done = true;
        }
    }
}

impl<C, P> Cursor for TakeWhile<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    type Item = C::Item;

    fn has_current(&mut self) -> bool {
        !self.done
    }

    fn current(&mut self) -> Result<&Self::Item, PipeErr> {
        if self.done {
            return Err(PipeErr::illegal_state("take_while"));
        }
        self.upstream.current()
    }

    fn advance(&mut self) {
        if self.done {
            return;
        }
        self.upstream.advance();
        self.look_ahead();
    }
}
