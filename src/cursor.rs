use crate::err::PipeErr;

/// 游标：序列上只能向前移动的逻辑位置。
///
/// 流水线中的数据源和每个装饰器都实现此特征，下游按需从唯一的上游拉取元素。
pub trait Cursor {
    /// 元素类型
    type Item;

    /// 是否存在当前元素。
    ///
    /// 可重复调用，结果只随`advance`变化。需要`&mut`是因为数据源在首次询问时才读取元素。
    fn has_current(&mut self) -> bool;

    /// 获取当前元素。
    ///
    /// 仅当`has_current`为真时返回`Ok`，否则返回[`PipeErr::IllegalState`]。
    /// 两次`advance`之间多次调用返回同一个值，且不会重复调用用户函数或重复读取数据源。
    fn current(&mut self) -> Result<&Self::Item, PipeErr>;

    /// 前进一个逻辑元素，使缓存的当前值失效。
    ///
    /// 没有当前元素时不做任何事，绝不越过数据源末尾读取。
    fn advance(&mut self);
}
