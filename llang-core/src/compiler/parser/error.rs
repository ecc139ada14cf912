use crate::compiler::lexer::types::Coordinate;

/// 语法错误，包含位置信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserError {
    /// 错误类型
    pub kind: ParserErrorKind,
    /// 错误发生的位置
    pub location: ErrorLocation,
}

/// 错误位置信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorLocation {
    /// 特定位置
    At(Coordinate),
    /// 语句末尾
    Eof,
}

/// 语法错误类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserErrorKind {
    /// 意外的token
    UnexpectedToken {
        found: String,
        expected: Vec<String>,
    },
    /// 无效的数字格式（超出范围）
    InvalidNumberFormat(String),
    /// 意外的输入结束
    UnexpectedEndOfInput { expected: Vec<String> },
}

impl ParserError {
    pub fn here(kind: ParserErrorKind, coordinate: Coordinate) -> Self {
        Self {
            kind,
            location: ErrorLocation::At(coordinate),
        }
    }

    pub fn at_eof(kind: ParserErrorKind) -> Self {
        Self {
            kind,
            location: ErrorLocation::Eof,
        }
    }

    pub fn line(&self) -> Option<usize> {
        match &self.location {
            ErrorLocation::At(coord) => Some(coord.line),
            ErrorLocation::Eof => None,
        }
    }

    pub fn column(&self) -> Option<usize> {
        match &self.location {
            ErrorLocation::At(coord) => Some(coord.column),
            ErrorLocation::Eof => None,
        }
    }
}

impl std::fmt::Display for ParserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let location_prefix = match &self.location {
            ErrorLocation::At(coord) => coord.to_string(),
            ErrorLocation::Eof => "EOF".to_string(),
        };

        let message = match &self.kind {
            ParserErrorKind::UnexpectedToken { found, expected } => {
                if expected.is_empty() {
                    format!("Unexpected token '{found}'")
                } else {
                    format!(
                        "Unexpected token '{}', expected: {}",
                        found,
                        expected.join(", ")
                    )
                }
            }
            ParserErrorKind::InvalidNumberFormat(s) => format!("Invalid number format: '{s}'"),
            ParserErrorKind::UnexpectedEndOfInput { expected } => {
                format!("Unexpected end of statement, expected: {}", expected.join(", "))
            }
        };

        write!(f, "[{location_prefix}] {message}")
    }
}

impl std::error::Error for ParserError {}

pub type ParseResult<T> = Result<T, ParserError>;

pub fn unexpected_token(
    found: impl Into<String>,
    expected: Vec<impl Into<String>>,
) -> ParserErrorKind {
    ParserErrorKind::UnexpectedToken {
        found: found.into(),
        expected: expected.into_iter().map(Into::into).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_at_location() {
        let err = ParserError::here(
            unexpected_token("BLOCK(3001.dat)", vec!["NUMBER"]),
            Coordinate::new(10, 5),
        );
        assert_eq!(err.line(), Some(10));
        assert_eq!(err.column(), Some(5));
        assert!(matches!(err.kind, ParserErrorKind::UnexpectedToken { .. }));
    }

    #[test]
    fn test_error_display_with_location() {
        let err = ParserError::here(
            unexpected_token("ASSIGN(3023.dat)", vec!["STRING", "NUMBER"]),
            Coordinate::new(5, 10),
        );
        let display = format!("{err}");
        assert!(display.contains("5:10"));
        assert!(display.contains("expected: STRING, NUMBER"));
    }

    #[test]
    fn test_error_display_eof() {
        let err = ParserError::at_eof(ParserErrorKind::UnexpectedEndOfInput {
            expected: vec!["IDENTIFIER".into()],
        });
        assert_eq!(err.line(), None);
        assert!(format!("{err}").contains("EOF"));
    }
}
