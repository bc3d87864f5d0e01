use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("{} not found!", .path.display())]
    MissingInput { path: PathBuf },

    #[error("{tool} not found")]
    ToolMissing { tool: String },

    #[error("{tool} exited with {}: {stderr}", .code.map_or_else(|| "signal".to_string(), |c| c.to_string()))]
    ToolFailed {
        tool: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("{0}")]
    Unexpected(#[from] std::io::Error),
}

impl ConvertError {
    /// Short outcome label, without any captured tool output.
    pub fn kind(&self) -> &'static str {
        match self {
            ConvertError::MissingInput { .. } => "missing input",
            ConvertError::ToolMissing { .. } => "tool missing",
            ConvertError::ToolFailed { .. } => "tool failed",
            ConvertError::Unexpected(_) => "unexpected error",
        }
    }
}

#[derive(Error, Debug)]
pub enum RunError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_leaves_out_tool_output() {
        let err = ConvertError::ToolFailed {
            tool: "ffmpeg".to_string(),
            code: Some(1),
            stderr: "boom".to_string(),
        };
        assert_eq!(err.kind(), "tool failed");
        assert_eq!(err.to_string(), "ffmpeg exited with 1: boom");
    }
}
