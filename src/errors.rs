use thiserror::Error;

/// All fatal error kinds the assembler can report, each carrying the
/// source line number where the spec calls for one.
#[derive(Error, Debug)]
pub enum AssemblyError {
    #[error("Syntax error: {0}")]
    Syntax(#[from] Box<pest::error::Error<crate::parser::Rule>>),

    #[error("line {line}: duplicate label '{name}'")]
    DuplicateLabel { line: usize, name: String },

    #[error("line {line}: undefined label '{name}'")]
    UndefinedLabel { line: usize, name: String },

    #[error("line {line}: unknown mnemonic '{name}'")]
    UnknownMnemonic { line: usize, name: String },

    #[error("line {line}: missing operand for '{context}'")]
    MissingOperand { line: usize, context: String },

    #[error("line {line}: invalid register '{token}'")]
    InvalidRegister { line: usize, token: String },

    #[error("line {line}: {kind} offset {offset} out of range")]
    OffsetOutOfRange {
        line: usize,
        kind: &'static str,
        offset: i32,
    },

    #[error("I/O error on \"{path}\": {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<pest::error::Error<crate::parser::Rule>> for AssemblyError {
    fn from(err: pest::error::Error<crate::parser::Rule>) -> Self {
        AssemblyError::Syntax(Box::new(err))
    }
}
