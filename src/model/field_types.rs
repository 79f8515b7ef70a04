//! 字段类型定义模块
//!
//! 定义模型字段的类型、校验与内外部表示的双向转换策略
//! 每个字段变体只拥有一种转换策略，复合字段委托给内部字段

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, SecondsFormat};
use rat_logger::debug;
use regex::Regex;

use crate::error::{self, SchemaResult};
use crate::model::instance::ModelInstance;
use crate::types::DataValue;

/// 嵌入字段的模式提供函数
///
/// 目标模式延迟到使用时才解析，因此模型可以嵌入自身类型
pub type SchemaProvider = fn() -> Arc<ModelSchema>;

/// URL格式校验的固定正则
pub const URL_REGEX: &str =
    r"https?://(www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_+.~#?&/=]*)";

/// 日期字段的期望格式说明，随invalidFormat错误一起返回
const ISO_8601_FORMAT: &str = r#"ISO 8601 (e.g. "2019-08-30T23:59:00.171Z")"#;

/// 字段类型枚举
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// 字符串类型
    String {
        regex: Option<String>,
    },
    /// 数字类型
    Number,
    /// 对象类型
    Object,
    /// 日期时间类型，序列化时原样返回内部值
    Date,
    /// 日期时间类型，序列化为ISO-8601字符串
    IsoDate,
    /// 枚举类型
    Enum {
        /// 枚举定义（按声明顺序的键值对）
        variants: Vec<(String, DataValue)>,
        /// 值到键名的反查表，构建后不可变
        value_to_key: HashMap<String, String>,
    },
    /// 数组类型，元素委托给内部字段
    List {
        item: Box<FieldDefinition>,
    },
    /// 联合类型，值满足两个分支之一即可
    Union {
        first: Box<FieldDefinition>,
        second: Box<FieldDefinition>,
    },
    /// 嵌入模型类型
    Embedded {
        model: SchemaProvider,
    },
}

/// 字段定义
///
/// 字段实例被所属模型类型的全部实例共享，自身不持有任何实例状态
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDefinition {
    /// 字段类型
    pub kind: FieldKind,
    /// 字段描述
    pub description: String,
    /// 是否必填
    pub required: bool,
    /// 默认值，写入实例时仍会经过set转换
    pub default: Option<DataValue>,
}

impl FieldDefinition {
    /// 创建新的字段定义
    pub fn new(kind: FieldKind, description: &str) -> Self {
        Self {
            kind,
            description: description.to_string(),
            required: false,
            default: None,
        }
    }

    /// 设置为必填字段
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// 设置默认值
    pub fn default_value(mut self, value: DataValue) -> Self {
        self.default = Some(value);
        self
    }

    /// 读取字段值
    ///
    /// 必填字段在值缺失或为空时返回`fieldRequired`，
    /// 否则原样返回当前值，无值且非必填时返回空值
    pub fn get(&self, key: &str, current: Option<&DataValue>) -> SchemaResult<DataValue> {
        match current {
            Some(value) if !value.is_null() => Ok(value.clone()),
            _ => {
                if self.required {
                    return Err(error::field_required(key));
                }
                Ok(DataValue::Null)
            }
        }
    }

    /// 解析并校验给定值
    ///
    /// 接受外部或内部表示，返回内部表示；不可接受的值返回校验错误
    pub fn set(&self, key: &str, value: DataValue) -> SchemaResult<DataValue> {
        match &self.kind {
            FieldKind::String { regex } => match value {
                DataValue::String(text) => {
                    let trimmed = text.trim().to_string();
                    if let Some(pattern) = regex {
                        let compiled = Regex::new(pattern).map_err(|compile_error| {
                            debug!("字段 {} 的正则无法编译: {}", key, compile_error);
                            error::invalid_format(key, trimmed.clone(), pattern.clone())
                        })?;
                        if !compiled.is_match(&trimmed) {
                            return Err(error::invalid_format(key, trimmed, pattern.clone()));
                        }
                    }
                    Ok(DataValue::String(trimmed))
                }
                other => Err(error::invalid_type(key, &other)),
            },
            FieldKind::Number => match value {
                DataValue::Int(_) | DataValue::UInt(_) | DataValue::Float(_) => Ok(value),
                other => Err(error::invalid_type(key, &other)),
            },
            FieldKind::Object => match value {
                DataValue::Object(_) | DataValue::Model(_) => Ok(value),
                other => Err(error::invalid_type(key, &other)),
            },
            FieldKind::Date | FieldKind::IsoDate => match value {
                DataValue::DateTime(_) => Ok(value),
                DataValue::String(text) => match DateTime::parse_from_rfc3339(&text) {
                    Ok(parsed) => Ok(DataValue::DateTime(parsed)),
                    Err(parse_error) => {
                        debug!("字段 {} 的日期解析失败: {} ({})", key, text, parse_error);
                        Err(error::invalid_format(key, text, ISO_8601_FORMAT))
                    }
                },
                other => Err(error::invalid_type(key, &other)),
            },
            FieldKind::Enum { variants, value_to_key } => {
                if value_to_key.contains_key(&value.to_string()) {
                    return Ok(value);
                }
                if let DataValue::String(name) = &value {
                    if let Some((_, resolved)) = variants.iter().find(|(k, _)| k == name) {
                        return Ok(resolved.clone());
                    }
                }
                Err(error::invalid_enum_value(key, &value))
            }
            FieldKind::List { item } => match value {
                DataValue::Array(elements) => {
                    let mut converted = Vec::with_capacity(elements.len());
                    for (index, element) in elements.into_iter().enumerate() {
                        converted.push(item.set(&format!("{}[{}]", key, index), element)?);
                    }
                    Ok(DataValue::Array(converted))
                }
                other => Err(error::invalid_type(key, &other)),
            },
            FieldKind::Union { first, second } => match first.set(key, value.clone()) {
                Ok(converted) => Ok(converted),
                Err(first_error) => {
                    debug!("联合字段 {} 的第一分支拒绝: {}", key, first_error);
                    second.set(key, value)
                }
            },
            FieldKind::Embedded { model } => match value {
                DataValue::Model(instance) => {
                    let target = (model)();
                    if Arc::ptr_eq(instance.schema(), &target) {
                        Ok(DataValue::Model(instance))
                    } else {
                        Err(error::invalid_type(key, &DataValue::Model(instance)))
                    }
                }
                DataValue::Object(properties) => {
                    let instance = ModelInstance::from_properties((model)(), properties)?;
                    Ok(DataValue::Model(Box::new(instance)))
                }
                other => Err(error::invalid_type(key, &other)),
            },
        }
    }

    /// 将内部表示转换为外部表示
    ///
    /// 值只能经由set进入存储，因此这里假定值已合法，不再校验
    pub fn serialize(&self, key: &str, value: &DataValue) -> SchemaResult<DataValue> {
        match &self.kind {
            FieldKind::String { .. }
            | FieldKind::Number
            | FieldKind::Object
            | FieldKind::Date => Ok(value.clone()),
            FieldKind::IsoDate => match value {
                DataValue::DateTime(dt) => Ok(DataValue::String(
                    dt.to_rfc3339_opts(SecondsFormat::Millis, true),
                )),
                other => Ok(other.clone()),
            },
            FieldKind::Enum { value_to_key, .. } => match value_to_key.get(&value.to_string()) {
                Some(name) => Ok(DataValue::String(name.clone())),
                None => Err(error::invalid_enum_value(key, value)),
            },
            FieldKind::List { item } => match value {
                DataValue::Array(elements) => {
                    let mut serialized = Vec::with_capacity(elements.len());
                    for (index, element) in elements.iter().enumerate() {
                        serialized.push(item.serialize(&format!("{}[{}]", key, index), element)?);
                    }
                    Ok(DataValue::Array(serialized))
                }
                other => Ok(other.clone()),
            },
            // set在此只用于选择序列化分支，不是对已存数据的二次校验
            FieldKind::Union { first, second } => match first.set(key, value.clone()) {
                Ok(converted) => first.serialize(key, &converted),
                Err(_) => second.serialize(key, value),
            },
            FieldKind::Embedded { .. } => match value {
                DataValue::Model(instance) => {
                    let mut instance = (**instance).clone();
                    Ok(DataValue::Object(instance.serialize()?))
                }
                other => Ok(other.clone()),
            },
        }
    }
}

/// 模型模式
///
/// 属性到字段的有序映射，每个模型类型构建一次，
/// 全部实例共享只读引用，构建完成后不可变
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSchema {
    /// 模型名称
    name: String,
    /// 字段定义（按声明顺序）
    fields: Vec<(String, FieldDefinition)>,
    /// 模型描述
    description: Option<String>,
}

impl ModelSchema {
    /// 创建模式构建器
    pub fn builder(name: &str) -> ModelSchemaBuilder {
        ModelSchemaBuilder {
            name: name.to_string(),
            fields: Vec::new(),
            description: None,
        }
    }

    /// 获取模型名称
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 获取模型描述
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// 按声明顺序遍历字段
    pub fn fields(&self) -> &[(String, FieldDefinition)] {
        &self.fields
    }

    /// 按名称查找字段
    pub fn field(&self, key: &str) -> Option<&FieldDefinition> {
        self.fields
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, definition)| definition)
    }

    /// 判断模式是否声明了给定字段
    pub fn contains(&self, key: &str) -> bool {
        self.fields.iter().any(|(name, _)| name == key)
    }
}

/// 模式构建器
///
/// 属性注册只在模型类型定义时发生一次，build之后模式不再变化
pub struct ModelSchemaBuilder {
    name: String,
    fields: Vec<(String, FieldDefinition)>,
    description: Option<String>,
}

impl ModelSchemaBuilder {
    /// 注册一个属性及其字段定义
    ///
    /// 属性名在模型内唯一，重复注册时保留最新的定义
    pub fn field(mut self, key: &str, definition: FieldDefinition) -> Self {
        if let Some(existing) = self.fields.iter_mut().find(|(name, _)| name == key) {
            debug!("字段 {} 重复注册，使用最新定义", key);
            existing.1 = definition;
        } else {
            self.fields.push((key.to_string(), definition));
        }
        self
    }

    /// 设置模型描述
    pub fn description(mut self, text: &str) -> Self {
        self.description = Some(text.to_string());
        self
    }

    /// 完成构建，返回共享的不可变模式
    pub fn build(self) -> Arc<ModelSchema> {
        Arc::new(ModelSchema {
            name: self.name,
            fields: self.fields,
            description: self.description,
        })
    }
}
