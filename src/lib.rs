//! 惰性、拉取式的游标流水线。
//!
//! 数据源被包装为[`Source`]游标，随后通过[`CursorExt`]逐层套上装饰器（`skip`、`take`、`map`、
//! `take_while`/`until`、`filter`……），最后由终结操作（`to_vec`、`copy_to`、`write_to`……）驱动整条链。
//! 每个装饰器拥有其唯一的上游，按需拉取，最多预读一个元素，因此可以安全地用于只能遍历一次的数据源。
//!
//! ```
//! use lpipe::{CursorExt, Tokens, from};
//!
//! let res = from([1, 2, 3, 4, 5]).map(|x| x * x).filter_neq(25).filter(|x| *x > 3).skip(2).to_vec();
//! assert_eq!(res, vec![16]);
//!
//! let mut tokens = Tokens::<_, i32>::new("1 2 3 -1 4".as_bytes(), &[]);
//! assert_eq!(from(tokens.by_ref()).take(4).take_while_neq(-1).to_vec(), vec![1, 2, 3]);
//! assert_eq!(tokens.next(), Some(4));
//! ```

mod config;
mod cursor;
mod err;
mod input;
mod op;
mod output;
mod pipe;

pub use config::{Config, is_crlf, skip_err};
pub use cursor::Cursor;
pub use err::PipeErr;
pub use input::{Source, Tokens, from};
pub use op::{Filter, Inspect, Limit, Map, Op, Skip, SkipWhile, TakeWhile};
pub use output::Values;
pub use pipe::{CursorExt, Pipe};

pub type PipeRes<T> = Result<T, PipeErr>;
