use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 源文本文件不存在
    #[error("源文件不存在: {path}")]
    SourceNotFound { path: String },

    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 配置文件解析失败
    #[error("配置文件解析失败 ({path}): {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// 每个练习的题目数必须 >= 1
    #[error("无效的分组大小: {0} (必须 >= 1)")]
    InvalidGroupSize(usize),

    /// JSON 序列化失败
    #[error("JSON序列化失败: {0}")]
    Serialize(#[from] serde_json::Error),
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::ReadFailed {
            path: path.into(),
            source,
        }
    }

    /// 创建文件写入错误
    pub fn write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::WriteFailed {
            path: path.into(),
            source,
        }
    }
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
