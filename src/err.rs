use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum PipeErr {
    #[error("[Illegal State] No current element available in stage `{stage}`")]
    IllegalState { stage: &'static str },

    #[error("[Input] Read line `{line_no}` of token stream error: {err}")]
    ReadTokenErr { line_no: usize, err: String },

    #[error("[Input] Unable to parse token `{token}` at line `{line_no}`, error: {err}")]
    ParseTokenErr { token: String, line_no: usize, err: String },

    #[error("[Output] Write item `{item}` error: {err}")]
    WriteErr { item: String, err: String },
}

impl PipeErr {
    pub(crate) fn illegal_state(stage: &'static str) -> PipeErr {
        PipeErr::IllegalState { stage }
    }

    /// 是否为游标契约违例（而非输入输出错误）。
    pub fn is_illegal_state(&self) -> bool {
        matches!(self, PipeErr::IllegalState { .. })
    }
}
