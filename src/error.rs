//! 错误类型定义模块
//!
//! 引擎的所有错误共享同一个基础形状：传输层状态码、稳定的机器可读代码、
//! 可本地化的标题以及结构化的上下文元数据
//! 校验类错误使用状态码400，传输层错误使用404/405/422/500

use crate::types::DataValue;
use serde_json::{json, Value as JsonValue};
use thiserror::Error;

/// rat_schema 统一错误类型
///
/// 分为两个家族：模型校验错误（400）与传输边界错误（404/405/422/500）
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    /// 必填字段缺失
    #[error("必填字段缺失: {key}")]
    FieldRequired {
        key: String,
    },

    /// 值的类型与字段不匹配
    #[error("字段类型不匹配: {key} - 收到 {given_type}")]
    InvalidType {
        key: String,
        given_type: &'static str,
    },

    /// 值的形状正确但格式校验失败
    #[error("字段格式不正确: {key} - 期望格式 {expected_format}")]
    InvalidFormat {
        key: String,
        given_value: String,
        expected_format: String,
    },

    /// 值既不是枚举的键名也不是枚举值
    #[error("无效的枚举值: {key} - {given_value}")]
    InvalidEnumValue {
        key: String,
        given_value: DataValue,
    },

    /// 通过键访问了模型未声明的字段
    #[error("未声明的字段: {key}")]
    UnknownField {
        key: String,
    },

    /// 请求的页面不存在
    #[error("页面不存在: {url}")]
    PageNotFound {
        url: String,
    },

    /// 请求方法不被允许
    #[error("方法不被允许: {method} {url}")]
    MethodNotAllowed {
        url: String,
        method: String,
    },

    /// 请求体无法解析为JSON实体
    #[error("请求体必须是JSON实体")]
    JsonBodyRequired,

    /// 请求体中缺少data字段
    #[error("请求体中缺少data字段")]
    DataFieldRequired,

    /// 服务器内部错误
    #[error("服务器内部错误")]
    ServerError,
}

impl SchemaError {
    /// 获取传输层状态码
    pub fn status(&self) -> u16 {
        match self {
            SchemaError::FieldRequired { .. }
            | SchemaError::InvalidType { .. }
            | SchemaError::InvalidFormat { .. }
            | SchemaError::InvalidEnumValue { .. }
            | SchemaError::UnknownField { .. } => 400,
            SchemaError::PageNotFound { .. } => 404,
            SchemaError::MethodNotAllowed { .. } => 405,
            SchemaError::JsonBodyRequired | SchemaError::DataFieldRequired => 422,
            SchemaError::ServerError => 500,
        }
    }

    /// 获取稳定的机器可读错误代码
    pub fn code(&self) -> &'static str {
        match self {
            SchemaError::FieldRequired { .. } => "fieldRequired",
            SchemaError::InvalidType { .. } => "invalidType",
            SchemaError::InvalidFormat { .. } => "invalidFormat",
            SchemaError::InvalidEnumValue { .. } => "invalidEnumValue",
            SchemaError::UnknownField { .. } => "unknownField",
            SchemaError::PageNotFound { .. } => "pageNotFound",
            SchemaError::MethodNotAllowed { .. } => "methodNotAllowed",
            SchemaError::JsonBodyRequired => "jsonBodyRequired",
            SchemaError::DataFieldRequired => "dataFieldRequired",
            SchemaError::ServerError => "serverError",
        }
    }

    /// 获取可本地化的错误标题
    ///
    /// 标题文本通过多语言系统解析，语言由 `crate::i18n` 的当前设置决定
    pub fn title(&self) -> String {
        let i18n_key = match self {
            SchemaError::FieldRequired { .. } => "error.field_required",
            SchemaError::InvalidType { .. } => "error.invalid_type",
            SchemaError::InvalidFormat { .. } => "error.invalid_format",
            SchemaError::InvalidEnumValue { .. } => "error.invalid_enum_value",
            SchemaError::UnknownField { .. } => "error.unknown_field",
            SchemaError::PageNotFound { .. } => "error.page_not_found",
            SchemaError::MethodNotAllowed { .. } => "error.method_not_allowed",
            SchemaError::JsonBodyRequired => "error.json_body_required",
            SchemaError::DataFieldRequired => "error.data_field_required",
            SchemaError::ServerError => "error.server_error",
        };
        crate::i18n::t(i18n_key)
    }

    /// 获取结构化上下文元数据
    ///
    /// 每个条目是一个上下文对象，携带足以重建诊断信息的键值
    pub fn meta(&self) -> Vec<JsonValue> {
        match self {
            SchemaError::FieldRequired { key } => vec![json!({ "key": key })],
            SchemaError::InvalidType { key, given_type } => {
                vec![json!({ "key": key, "givenType": given_type })]
            }
            SchemaError::InvalidFormat { key, given_value, expected_format } => {
                vec![json!({
                    "key": key,
                    "givenValue": given_value,
                    "expectedFormat": expected_format,
                })]
            }
            SchemaError::InvalidEnumValue { key, given_value } => {
                vec![json!({ "key": key, "givenValue": given_value.to_json_value() })]
            }
            SchemaError::UnknownField { key } => vec![json!({ "key": key })],
            SchemaError::PageNotFound { url } => vec![json!({ "url": url })],
            SchemaError::MethodNotAllowed { url, method } => {
                vec![json!({ "url": url, "method": method })]
            }
            SchemaError::JsonBodyRequired
            | SchemaError::DataFieldRequired
            | SchemaError::ServerError => Vec::new(),
        }
    }

    /// 转换为线路格式的错误对象
    ///
    /// 输出形状为 `{code, title, status, meta}`，供错误信封使用
    pub fn to_wire(&self) -> JsonValue {
        json!({
            "code": self.code(),
            "title": self.title(),
            "status": self.status(),
            "meta": self.meta(),
        })
    }
}

/// 创建必填字段缺失错误
pub fn field_required(key: impl Into<String>) -> SchemaError {
    SchemaError::FieldRequired { key: key.into() }
}

/// 创建类型不匹配错误，上下文记录实际收到的类型名
pub fn invalid_type(key: impl Into<String>, given: &DataValue) -> SchemaError {
    SchemaError::InvalidType {
        key: key.into(),
        given_type: given.type_name(),
    }
}

/// 创建格式校验失败错误
pub fn invalid_format(
    key: impl Into<String>,
    given_value: impl Into<String>,
    expected_format: impl Into<String>,
) -> SchemaError {
    SchemaError::InvalidFormat {
        key: key.into(),
        given_value: given_value.into(),
        expected_format: expected_format.into(),
    }
}

/// 创建无效枚举值错误
pub fn invalid_enum_value(key: impl Into<String>, given: &DataValue) -> SchemaError {
    SchemaError::InvalidEnumValue {
        key: key.into(),
        given_value: given.clone(),
    }
}

/// 创建未声明字段错误
pub fn unknown_field(key: impl Into<String>) -> SchemaError {
    SchemaError::UnknownField { key: key.into() }
}

/// 创建页面不存在错误
pub fn page_not_found(url: impl Into<String>) -> SchemaError {
    SchemaError::PageNotFound { url: url.into() }
}

/// 创建方法不被允许错误
pub fn method_not_allowed(url: impl Into<String>, method: impl Into<String>) -> SchemaError {
    SchemaError::MethodNotAllowed {
        url: url.into(),
        method: method.into(),
    }
}

/// 创建请求体缺失JSON实体错误
pub fn json_body_required() -> SchemaError {
    SchemaError::JsonBodyRequired
}

/// 创建data字段缺失错误
pub fn data_field_required() -> SchemaError {
    SchemaError::DataFieldRequired
}

/// 创建服务器内部错误
pub fn server_error() -> SchemaError {
    SchemaError::ServerError
}

/// rat_schema 统一结果类型
pub type SchemaResult<T> = Result<T, SchemaError>;
