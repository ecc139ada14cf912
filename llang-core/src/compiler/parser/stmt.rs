use crate::compiler::lexer::types::Coordinate;

/// 解析后的一条语句
///
/// `PRINT PRINT x = 5` 可以任意深度嵌套，因此打印前缀保存为包在单个语句体外的
/// 扁平列表，而不是一串装箱的语句。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stmt {
    /// 打印包装，最外层在前
    pub prints: Vec<PrintTarget>,
    pub body: StmtKind,
}

impl Stmt {
    pub fn new(body: StmtKind) -> Self {
        Self {
            prints: Vec::new(),
            body,
        }
    }

    /// 打印包装的嵌套深度
    pub fn depth(&self) -> usize {
        self.prints.len()
    }
}

/// 最内层语句
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StmtKind {
    // 赋值语句（如 `x = 5`）
    Assign(AssignStmt),
    // 裸值表达式
    Expr(Expr),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignStmt {
    pub name: String,
    pub value: Expr,
}

/// 打印包装输出值的位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintTarget {
    // `print <statement>`：在光标处输出，之后光标下移一行
    Cursor,
    // `print_position <column> <line> <statement>`
    At { column: Expr, line: Expr },
}

/// 表达式：字面量或变量引用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Number(i64),
    String(String),
    Identifier { name: String, coordinate: Coordinate },
}
