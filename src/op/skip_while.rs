use crate::cursor::Cursor;
use crate::err::PipeErr;

/// 持续丢弃满足谓词的前导元素，直到谓词首次不满足，之后的元素全部保留。
///
/// 丢弃在首次访问时进行，谓词只对前导元素以及第一个被保留的元素求值。
pub struct SkipWhile<C, P> {
    upstream: C,
    predicate: P,
    skipping: bool,
}

impl<C, P> SkipWhile<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    pub fn new(upstream: C, predicate: P) -> Self {
        SkipWhile { upstream, predicate, skipping: true }
    }

    fn discard(&mut self) {
        while self.skipping && self.upstream.has_current() {
            let skip = match self.upstream.current() {
                Ok(item) => (self.predicate)(item),
                Err(_) => false,
            };
            if skip {
                self.upstream.advance();
            } else {
                self.skipping = false;
            }
        }
        self.skipping = false;
    }
}

impl<C, P> Cursor for SkipWhile<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    type Item = C::Item;

    fn has_current(&mut self) -> bool {
        self.discard();
        self.upstream.has_current()
    }

    fn current(&mut self) -> Result<&Self::Item, PipeErr> {
        self.discard();
        if !self.upstream.has_current() {
            return Err(PipeErr::illegal_state("skip_while"));
        }
        self.upstream.current()
    }

    fn advance(&mut self) {
        self.discard();
        self.upstream.advance();
    }
}
