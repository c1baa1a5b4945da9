#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum Config {
    /// 词法流遇到无法解析的词元时跳过而不是终止
    SkipErr,
    /// 写出时使用`CRLF`换行
    CrLf,
}

#[inline]
pub fn skip_err(configs: &[Config]) -> bool {
    configs.contains(&Config::SkipErr)
}

#[inline]
pub fn is_crlf(configs: &[Config]) -> bool {
    configs.contains(&Config::CrLf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_err() {
        assert!(skip_err(&[Config::CrLf, Config::SkipErr]));
        assert!(!skip_err(&[Config::CrLf]));
        assert!(!skip_err(&[]));
    }

    #[test]
    fn test_is_crlf() {
        assert!(is_crlf(&[Config::SkipErr, Config::CrLf]));
        assert!(!is_crlf(&[Config::SkipErr]));
    }
}
