use crate::PipeRes;
use crate::config::{Config, is_crlf};
use crate::cursor::Cursor;
use crate::err::PipeErr;
use log::{debug, warn};
use std::fmt::Display;
use std::io::Write;

/// 耗尽游标的迭代器，逐个产出当前元素的副本。
///
/// 游标声称存在当前元素却读取失败时，记录警告并结束迭代。
#[derive(Debug)]
pub struct Values<C> {
    cursor: C,
}

impl<C: Cursor> Values<C> {
    pub(crate) fn new(cursor: C) -> Self {
        Values { cursor }
    }

    /// 取回尚未耗尽的游标。
    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C> Iterator for Values<C>
where
    C: Cursor,
    C::Item: Clone,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.cursor.has_current() {
            return None;
        }
        let value = match self.cursor.current() {
            Ok(item) => item.clone(),
            Err(err) => {
                warn!("values: cursor broke its contract, iteration stopped: {err}");
                return None;
            }
        };
        self.cursor.advance();
        Some(value)
    }
}

/// 将游标的每个元素写出并追加换行符，配置了[`Config::CrLf`]时使用`CRLF`，否则使用`LF`。
pub(crate) fn write_lines<C, W>(mut cursor: C, writer: &mut W, configs: &[Config]) -> PipeRes<()>
where
    C: Cursor,
    C::Item: Display,
    W: Write,
{
    let postfix = if is_crlf(configs) { "\r\n" } else { "\n" };
    let mut written = 0usize;
    while cursor.has_current() {
        let item = cursor.current()?;
        if let Err(err) = write!(writer, "{item}{postfix}") {
            return Err(PipeErr::WriteErr { item: item.to_string(), err: err.to_string() });
        }
        written += 1;
        cursor.advance();
    }
    writer.flush().map_err(|err| PipeErr::WriteErr { item: String::new(), err: err.to_string() })?;
    debug!("wrote {written} lines");
    Ok(())
}

/// 统计游标剩余元素数量，不读取元素。
pub(crate) fn count<C: Cursor>(mut cursor: C) -> usize {
    let mut count = 0;
    while cursor.has_current() {
        count += 1;
        cursor.advance();
    }
    count
}
