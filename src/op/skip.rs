use crate::cursor::Cursor;
use crate::err::PipeErr;
use log::debug;

/// 丢弃上游的前N个元素。
///
/// 丢弃发生在首次访问时且只发生一次，只使用`has_current`和`advance`，从不读取被丢弃的元素。
#[derive(Debug)]
pub struct Skip<C> {
    upstream: C,
    remaining: usize,
}

impl<C: Cursor> Skip<C> {
    pub fn new(upstream: C, count: usize) -> Self {
        Skip { upstream, remaining: count }
    }

    fn discard(&mut self) {
        if self.remaining == 0 {
            return;
        }
        while self.remaining > 0 && self.upstream.has_current() {
            self.upstream.advance();
            self.remaining -= 1;
        }
        if self.remaining > 0 {
            debug!("skip: upstream ended with {} elements left to discard", self.remaining);
            self.remaining = 0;
        }
    }
}

impl<C: Cursor> Cursor for Skip<C> {
    type Item = C::Item;

    fn has_current(&mut self) -> bool {
        self.discard();
        self.upstream.has_current()
    }

    fn current(&mut self) -> Result<&Self::Item, PipeErr> {
        self.discard();
        if !self.upstream.has_current() {
            return Err(PipeErr::illegal_state("skip"));
        }
        self.upstream.current()
    }

    fn advance(&mut self) {
        self.discard();
        self.upstream.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::from;
    use crate::pipe::CursorExt;
    use std::cell::Cell;

    #[test]
    fn test_skip() {
        assert_eq!(from(vec![1, 2, 3, 4, 4]).skip(2).to_vec(), vec![3, 4, 4]);
        assert_eq!(from(vec![1, 2, 3]).skip(1).skip(1).to_vec(), vec![3]);
    }

    #[test]
    fn test_skip_zero_is_identity() {
        assert_eq!(from(vec![1, 2, 3, 4, 4]).skip(0).to_vec(), vec![1, 2, 3, 4, 4]);
    }

    #[test]
    fn test_skip_past_end() {
        let mut cursor = from(vec![1, 2]).skip(5);
        assert!(!cursor.has_current());
        assert_eq!(cursor.current(), Err(PipeErr::IllegalState { stage: "skip" }));
        cursor.advance();
        assert!(!cursor.has_current());
    }

    #[test]
    fn test_skip_never_reads_discarded_values() {
        let mapped = Cell::new(0);
        let mut cursor = from(vec![1, 2, 3])
            .map(|x| {
                mapped.set(mapped.get() + 1);
                x * 10
            })
            .skip(3);
        assert!(!cursor.has_current());
        assert_eq!(mapped.get(), 0);
    }

    #[test]
    fn test_skip_discards_once() {
        let mut cursor = from(vec![1, 2, 3, 4, 5]).skip(2);
        assert!(cursor.has_current());
        assert!(cursor.has_current());
        assert_eq!(cursor.current(), Ok(&3));
        assert_eq!(cursor.current(), Ok(&3));
        cursor.advance();
        assert_eq!(cursor.current(), Ok(&4));
    }

    #[test]
    fn test_skip_advance_first() {
        let mut cursor = from(vec![1, 2, 3, 4]).skip(1);
        cursor.advance();
        assert_eq!(cursor.current(), Ok(&3));
    }
}
