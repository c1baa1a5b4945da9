use crate::config::{Config, skip_err};
use crate::cursor::Cursor;
use crate::err::PipeErr;
use log::{debug, warn};
use nom::bytes::complete::take_while1;
use nom::character::complete::multispace0;
use nom::sequence::preceded;
use nom::{IResult, Parser};
use std::fmt::Display;
use std::io::BufRead;
use std::marker::PhantomData;
use std::str::FromStr;

/// 从任意可迭代对象构造数据源游标。
///
/// 对单遍数据源（如[`Tokens`]）传入`by_ref()`，流水线结束后仍可从原数据源读取未消费的元素。
pub fn from<I: IntoIterator>(iter: I) -> Source<I::IntoIter> {
    Source::new(iter.into_iter())
}

/// 数据源游标，迭代器本身即是`[begin, end)`区间。
#[derive(Debug)]
pub struct Source<I: Iterator> {
    iter: I,
    /// `None`：尚未读取；`Some(None)`：已到末尾；`Some(Some(x))`：当前元素
    peeked: Option<Option<I::Item>>,
}

impl<I: Iterator> Source<I> {
    pub fn new(iter: I) -> Self {
        Source { iter, peeked: None }
    }

    fn peek(&mut self) -> Option<&I::Item> {
        let iter = &mut self.iter;
        self.peeked.get_or_insert_with(|| iter.next()).as_ref()
    }
}

impl<I: Iterator> Cursor for Source<I> {
    type Item = I::Item;

    fn has_current(&mut self) -> bool {
        self.peek().is_some()
    }

    fn current(&mut self) -> Result<&Self::Item, PipeErr> {
        self.peek().ok_or(PipeErr::illegal_state("source"))
    }

    fn advance(&mut self) {
        match self.peeked.take() {
            Some(Some(_)) => {}
            // 末尾是粘滞的，不再拉取底层迭代器
            Some(None) => self.peeked = Some(None),
            None => {
                if self.iter.next().is_none() {
                    self.peeked = Some(None);
                }
            }
        }
    }
}

/// 从`BufRead`中惰性读取以空白分隔的词元并解析为`T`。
///
/// 每次只缓冲一行。遇到无法解析的词元时停止（配置了[`Config::SkipErr`]则跳过），
/// 读取错误总是停止，停止原因可通过[`Tokens::take_err`]取得。
pub struct Tokens<R, T> {
    reader: R,
    line: String,
    pos: usize,
    line_no: usize,
    skip_err: bool,
    finished: bool,
    err: Option<PipeErr>,
    _marker: PhantomData<fn() -> T>,
}

impl<R: BufRead, T> Tokens<R, T> {
    pub fn new(reader: R, configs: &[Config]) -> Self {
        Tokens {
            reader,
            line: String::new(),
            pos: 0,
            line_no: 0,
            skip_err: skip_err(configs),
            finished: false,
            err: None,
            _marker: PhantomData,
        }
    }

    /// 取出导致词法流停止的错误，正常读到末尾时为`None`。
    pub fn take_err(&mut self) -> Option<PipeErr> {
        self.err.take()
    }

    fn stop(&mut self, err: Option<PipeErr>) {
        self.finished = true;
        self.err = err;
    }

    /// 读取下一行到缓冲区，返回是否读到了内容。
    fn fill_line(&mut self) -> bool {
        self.line.clear();
        self.pos = 0;
        match self.reader.read_line(&mut self.line) {
            Ok(0) => {
                self.stop(None);
                false
            }
            Ok(_) => {
                self.line_no += 1;
                true
            }
            Err(err) => {
                let line_no = self.line_no + 1;
                self.stop(Some(PipeErr::ReadTokenErr { line_no, err: err.to_string() }));
                false
            }
        }
    }
}

impl<R, T> Iterator for Tokens<R, T>
where
    R: BufRead,
    T: FromStr,
    T::Err: Display,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            let rest = &self.line[self.pos..];
            let Ok((remaining, token)) = next_token(rest) else {
                self.fill_line();
                continue;
            };
            let consumed = rest.len() - remaining.len();
            let parsed = token.parse::<T>().map_err(|err| (token.to_owned(), err.to_string()));
            self.pos += consumed;
            match parsed {
                Ok(value) => return Some(value),
                Err((token, err)) => {
                    if self.skip_err {
                        warn!("skip malformed token `{token}` at line {}: {err}", self.line_no);
                    } else {
                        debug!("token stream stopped at malformed token `{token}`");
                        let line_no = self.line_no;
                        self.stop(Some(PipeErr::ParseTokenErr { token, line_no, err }));
                    }
                }
            }
        }
        None
    }
}

/// 解析器，跳过前导空白后取出一个非空白词元。
fn next_token(input: &str) -> IResult<&str, &str> {
    preceded(multispace0, take_while1(|c: char| !c.is_whitespace())).parse(input)
}
