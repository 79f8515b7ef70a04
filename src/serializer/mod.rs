//! 数据序列化边界模块
//!
//! 负责线路信封的生成与解析：成功响应为`{"data": ...}`，
//! 错误响应为`{"errors": [...]}`
//! 核心引擎自身从不解析原始文本，结构化输入只在这里产生

use std::collections::HashMap;
use std::sync::Arc;

use rat_logger::debug;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};

use crate::error::{self, SchemaError, SchemaResult};
use crate::model::{ModelInstance, ModelSchema};
use crate::types::{json_value_to_data_value, DataValue};

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// 两空格缩进的格式化输出
    Pretty,
    /// 紧凑输出
    Compact,
}

/// 序列化配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializerConfig {
    /// 输出格式
    pub output_format: OutputFormat,
}

impl Default for SerializerConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Pretty,
        }
    }
}

impl SerializerConfig {
    /// 创建默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置输出格式
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }
}

/// 数据序列化器
///
/// 持有输出配置，负责把模型与错误包装进线路信封
pub struct DataSerializer {
    config: SerializerConfig,
}

impl DataSerializer {
    /// 创建使用默认配置的序列化器
    pub fn new() -> Self {
        Self {
            config: SerializerConfig::default(),
        }
    }

    /// 创建使用给定配置的序列化器
    pub fn with_config(config: SerializerConfig) -> Self {
        Self { config }
    }

    /// 按配置把JSON值输出为字符串
    pub fn stringify(&self, value: &JsonValue) -> String {
        match self.config.output_format {
            OutputFormat::Pretty => serde_json::to_string_pretty(value).unwrap_or_default(),
            OutputFormat::Compact => serde_json::to_string(value).unwrap_or_default(),
        }
    }

    /// 生成单个模型的成功信封 `{"data": {...}}`
    ///
    /// 序列化前先经过模型自身的校验
    pub fn make_json_body(&self, model: &mut ModelInstance) -> SchemaResult<String> {
        let data = properties_to_json(model.serialize()?);
        Ok(self.stringify(&json!({ "data": data })))
    }

    /// 生成模型列表的成功信封 `{"data": [...]}`
    pub fn make_json_body_list(&self, models: &mut [ModelInstance]) -> SchemaResult<String> {
        let mut data = Vec::with_capacity(models.len());
        for model in models.iter_mut() {
            data.push(properties_to_json(model.serialize()?));
        }
        Ok(self.stringify(&json!({ "data": data })))
    }

    /// 生成错误信封 `{"errors": [...]}`
    pub fn make_json_error(&self, error: &SchemaError) -> String {
        self.stringify(&json!({ "errors": [error.to_wire()] }))
    }
}

impl Default for DataSerializer {
    fn default() -> Self {
        Self::new()
    }
}

/// 将序列化结果转换为JSON对象
fn properties_to_json(properties: HashMap<String, DataValue>) -> JsonValue {
    let object: serde_json::Map<String, JsonValue> = properties
        .iter()
        .map(|(key, value)| (key.clone(), value.to_json_value()))
        .collect();
    JsonValue::Object(object)
}

/// 使用默认配置生成单个模型的成功信封
pub fn make_json_body(model: &mut ModelInstance) -> SchemaResult<String> {
    DataSerializer::new().make_json_body(model)
}

/// 使用默认配置生成模型列表的成功信封
pub fn make_json_body_list(models: &mut [ModelInstance]) -> SchemaResult<String> {
    DataSerializer::new().make_json_body_list(models)
}

/// 使用默认配置生成错误信封
pub fn make_json_error(error: &SchemaError) -> String {
    DataSerializer::new().make_json_error(error)
}

/// 尝试把字符串解析为JSON，解析失败时返回None
pub fn try_parse_json(data: &str) -> Option<JsonValue> {
    match serde_json::from_str(data) {
        Ok(value) => Some(value),
        Err(parse_error) => {
            debug!("无法解析JSON数据: {} ({})", data, parse_error);
            None
        }
    }
}

/// 解析请求体中的模型
///
/// 请求体无法解析时返回`jsonBodyRequired`，
/// `data`字段缺失、为空或不是键值结构时返回`dataFieldRequired`
pub fn parse_model(
    body: &str,
    schema: &Arc<ModelSchema>,
    validate: bool,
) -> SchemaResult<ModelInstance> {
    let Some(parsed) = try_parse_json(body) else {
        return Err(error::json_body_required());
    };
    let properties: HashMap<String, DataValue> = match parsed.get("data") {
        Some(JsonValue::Object(data)) => data
            .iter()
            .map(|(key, value)| (key.clone(), json_value_to_data_value(value.clone())))
            .collect(),
        _ => return Err(error::data_field_required()),
    };
    let mut instance = ModelInstance::from_properties(schema.clone(), properties)?;
    if validate {
        instance.validate()?;
    }
    Ok(instance)
}
