//! Error type shared by every component.
//!
//! Messages are fixed, user-facing strings. `main` decides how to terminate
//! based on [`TransError::exit_code`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Upstream reference listing the language codes the endpoint accepts.
pub const API_REFERENCE_URL: &str =
    "https://developers.deepl.com/docs/api-reference/translate/openapi-spec-for-text-translation";

#[derive(Error, Debug)]
pub enum TransError {
    /// First run: the config file was just created and must be filled in.
    #[error("成功创建配置文件, 请填写后重新运行此程序: {}", .path.display())]
    ConfigMissing { path: PathBuf },

    #[error("配置文件为空, 输入-h查看格式后填写在 {}", .path.display())]
    ConfigEmpty { path: PathBuf },

    #[error("无法读取配置文件 {}: {source}", .path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("配置文件缺少必填项 API (DeepLX的URL), 请填写在 {}", .path.display())]
    MissingApi { path: PathBuf },

    #[error("无法确定用户主目录")]
    HomeDirUnavailable,

    #[error("无法连接翻译接口 {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("无法序列化翻译请求: {0}")]
    Encoding(#[source] serde_json::Error),

    #[error("无法解析翻译接口的响应: {source}")]
    Decoding {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    #[error("翻译接口返回错误状态 {status}: {body}")]
    Status { status: u16, body: String },

    #[error("错误的语言代码, 你可以去看{}", API_REFERENCE_URL)]
    UnsupportedLanguage,

    #[error("无法读取文件 {}: {source}", .path.display())]
    InputFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("无法读取标准输入: {0}")]
    Stdin(#[source] io::Error),

    #[error("无法写入标准输出: {0}")]
    Output(#[source] io::Error),
}

impl TransError {
    /// Process exit status for this error, following `sysexits.h`.
    pub const fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            Self::ConfigMissing { .. } => exitcode::OK,
            Self::ConfigEmpty { .. }
            | Self::ConfigIo { .. }
            | Self::MissingApi { .. }
            | Self::HomeDirUnavailable => exitcode::CONFIG,
            Self::Network { .. } | Self::Status { .. } => exitcode::UNAVAILABLE,
            Self::Decoding { .. } => exitcode::DATAERR,
            Self::UnsupportedLanguage => exitcode::USAGE,
            Self::InputFile { .. } | Self::Stdin(_) | Self::Output(_) => exitcode::IOERR,
            Self::Encoding(_) => exitcode::SOFTWARE,
        }
    }

    /// Returns `true` for the guided first-run flow, which is not a failure.
    pub const fn is_first_run(&self) -> bool {
        matches!(self, Self::ConfigMissing { .. })
    }
}

pub type Result<T> = std::result::Result<T, TransError>;
