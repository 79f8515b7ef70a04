use chrono::{DateTime, FixedOffset, Utc};
use std::collections::HashMap;

use crate::model::ModelInstance;

/// 通用数据值类型 - 同时承载外部（JSON兼容）与内部表示
///
/// 外部表示只会出现JSON兼容的变体；`DateTime`与`Model`是内部表示，
/// 分别由日期字段与嵌入字段的`set`产生
#[derive(Clone, PartialEq)]
pub enum DataValue {
    /// 空值
    Null,
    /// 布尔值
    Bool(bool),
    /// 整数
    Int(i64),
    /// 无符号整数
    UInt(u64),
    /// 浮点数
    Float(f64),
    /// 字符串
    String(String),
    /// 日期时间
    DateTime(DateTime<FixedOffset>),
    /// 数组
    Array(Vec<DataValue>),
    /// 对象/文档
    Object(HashMap<String, DataValue>),
    /// 嵌入的模型实例（仅内部表示）
    Model(Box<ModelInstance>),
}

impl std::fmt::Display for DataValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataValue::Null => write!(f, "null"),
            DataValue::Bool(b) => write!(f, "{}", b),
            DataValue::Int(i) => write!(f, "{}", i),
            DataValue::UInt(u) => write!(f, "{}", u),
            DataValue::Float(fl) => write!(f, "{}", fl),
            DataValue::String(s) => write!(f, "{}", s),
            DataValue::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
            DataValue::Array(arr) => {
                let json_str = serde_json::to_string(
                    &arr.iter().map(|v| v.to_json_value()).collect::<Vec<_>>(),
                )
                .unwrap_or_default();
                write!(f, "{}", json_str)
            }
            DataValue::Object(obj) => {
                let json_str = serde_json::to_string(
                    &obj.iter()
                        .map(|(k, v)| (k.clone(), v.to_json_value()))
                        .collect::<HashMap<_, _>>(),
                )
                .unwrap_or_default();
                write!(f, "{}", json_str)
            }
            DataValue::Model(instance) => write!(f, "[model {}]", instance.model_name()),
        }
    }
}

impl std::fmt::Debug for DataValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Debug trait 和 Display 保持一致，显示实际值而不是类型构造函数
        write!(f, "{}", self)
    }
}

impl DataValue {
    /// 获取数据类型名称
    pub fn type_name(&self) -> &'static str {
        match self {
            DataValue::Null => "null",
            DataValue::Bool(_) => "boolean",
            DataValue::Int(_) => "integer",
            DataValue::UInt(_) => "unsigned_integer",
            DataValue::Float(_) => "float",
            DataValue::String(_) => "string",
            DataValue::DateTime(_) => "datetime",
            DataValue::Array(_) => "array",
            DataValue::Object(_) => "object",
            DataValue::Model(_) => "model",
        }
    }

    /// 判断是否为空值
    pub fn is_null(&self) -> bool {
        matches!(self, DataValue::Null)
    }

    /// 转换为 JSON 值
    ///
    /// 内部表示按其外部形式输出：日期时间输出RFC3339字符串，
    /// 嵌入模型输出其序列化结果
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            DataValue::Null => serde_json::Value::Null,
            DataValue::Bool(b) => serde_json::Value::Bool(*b),
            DataValue::Int(i) => serde_json::Value::Number(serde_json::Number::from(*i)),
            DataValue::UInt(u) => serde_json::Value::Number(serde_json::Number::from(*u)),
            DataValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            DataValue::String(s) => serde_json::Value::String(s.clone()),
            DataValue::DateTime(dt) => serde_json::Value::String(dt.to_rfc3339()),
            DataValue::Array(arr) => {
                let json_array: Vec<serde_json::Value> =
                    arr.iter().map(|item| item.to_json_value()).collect();
                serde_json::Value::Array(json_array)
            }
            DataValue::Object(obj) => {
                let json_object: serde_json::Map<String, serde_json::Value> = obj
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json_value()))
                    .collect();
                serde_json::Value::Object(json_object)
            }
            DataValue::Model(instance) => {
                let mut instance = (**instance).clone();
                instance
                    .serialize()
                    .map(|properties| {
                        let json_object: serde_json::Map<String, serde_json::Value> = properties
                            .iter()
                            .map(|(k, v)| (k.clone(), v.to_json_value()))
                            .collect();
                        serde_json::Value::Object(json_object)
                    })
                    .unwrap_or(serde_json::Value::Null)
            }
        }
    }

    /// 从 JSON 值解析
    pub fn from_json_value(value: serde_json::Value) -> Self {
        json_value_to_data_value(value)
    }
}

/// 将 serde_json::Value 转换为对应的 DataValue 类型
pub fn json_value_to_data_value(value: serde_json::Value) -> DataValue {
    match value {
        serde_json::Value::Null => DataValue::Null,
        serde_json::Value::Bool(b) => DataValue::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                DataValue::Int(i)
            } else if let Some(u) = n.as_u64() {
                DataValue::UInt(u)
            } else if let Some(f) = n.as_f64() {
                DataValue::Float(f)
            } else {
                DataValue::Null
            }
        }
        serde_json::Value::String(s) => DataValue::String(s),
        serde_json::Value::Array(arr) => {
            // 递归转换数组元素为DataValue
            let data_array: Vec<DataValue> =
                arr.into_iter().map(json_value_to_data_value).collect();
            DataValue::Array(data_array)
        }
        serde_json::Value::Object(obj) => {
            // 递归转换对象为HashMap<String, DataValue>
            let data_object: HashMap<String, DataValue> = obj
                .into_iter()
                .map(|(k, v)| (k, json_value_to_data_value(v)))
                .collect();
            DataValue::Object(data_object)
        }
    }
}

impl From<bool> for DataValue {
    fn from(value: bool) -> Self {
        DataValue::Bool(value)
    }
}

impl From<i32> for DataValue {
    fn from(value: i32) -> Self {
        DataValue::Int(value as i64)
    }
}

impl From<i64> for DataValue {
    fn from(value: i64) -> Self {
        DataValue::Int(value)
    }
}

impl From<u64> for DataValue {
    fn from(value: u64) -> Self {
        DataValue::UInt(value)
    }
}

impl From<f32> for DataValue {
    fn from(value: f32) -> Self {
        DataValue::Float(value as f64)
    }
}

impl From<f64> for DataValue {
    fn from(value: f64) -> Self {
        DataValue::Float(value)
    }
}

impl From<String> for DataValue {
    fn from(value: String) -> Self {
        DataValue::String(value)
    }
}

impl From<&str> for DataValue {
    fn from(value: &str) -> Self {
        DataValue::String(value.to_string())
    }
}

impl From<DateTime<Utc>> for DataValue {
    fn from(value: DateTime<Utc>) -> Self {
        DataValue::DateTime(value.fixed_offset())
    }
}

impl From<DateTime<FixedOffset>> for DataValue {
    fn from(value: DateTime<FixedOffset>) -> Self {
        DataValue::DateTime(value)
    }
}

impl From<Vec<DataValue>> for DataValue {
    fn from(value: Vec<DataValue>) -> Self {
        DataValue::Array(value)
    }
}

impl From<HashMap<String, DataValue>> for DataValue {
    fn from(value: HashMap<String, DataValue>) -> Self {
        DataValue::Object(value)
    }
}

impl From<ModelInstance> for DataValue {
    fn from(value: ModelInstance) -> Self {
        DataValue::Model(Box::new(value))
    }
}

impl<T> From<Option<T>> for DataValue
where
    T: Into<DataValue>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => DataValue::Null,
        }
    }
}
