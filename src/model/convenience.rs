//! 模型便捷函数模块
//!
//! 提供创建各种字段类型的便捷函数

use crate::model::field_types::{FieldDefinition, FieldKind, URL_REGEX};
use crate::model::traits::Model;
use crate::types::DataValue;

/// 便捷函数：创建字符串字段
pub fn string_field(description: &str) -> FieldDefinition {
    FieldDefinition::new(FieldKind::String { regex: None }, description)
}

/// 便捷函数：创建带正则约束的字符串字段
pub fn regex_string_field(description: &str, pattern: &str) -> FieldDefinition {
    FieldDefinition::new(
        FieldKind::String {
            regex: Some(pattern.to_string()),
        },
        description,
    )
}

/// 便捷函数：创建URL字段
///
/// 复用字符串字段的转换策略，附加固定的URL正则
pub fn url_field(description: &str) -> FieldDefinition {
    regex_string_field(description, URL_REGEX)
}

/// 便捷函数：创建数字字段
pub fn number_field(description: &str) -> FieldDefinition {
    FieldDefinition::new(FieldKind::Number, description)
}

/// 便捷函数：创建对象字段
pub fn object_field(description: &str) -> FieldDefinition {
    FieldDefinition::new(FieldKind::Object, description)
}

/// 便捷函数：创建日期时间字段
pub fn date_field(description: &str) -> FieldDefinition {
    FieldDefinition::new(FieldKind::Date, description)
}

/// 便捷函数：创建序列化为ISO-8601字符串的日期时间字段
pub fn iso_date_field(description: &str) -> FieldDefinition {
    FieldDefinition::new(FieldKind::IsoDate, description)
}

/// 便捷函数：创建枚举字段
///
/// 键值双向映射表在构建时一次性生成，此后不再变化
pub fn enum_field(variants: &[(&str, DataValue)], description: &str) -> FieldDefinition {
    let variants: Vec<(String, DataValue)> = variants
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect();
    let value_to_key = variants
        .iter()
        .map(|(key, value)| (value.to_string(), key.clone()))
        .collect();
    FieldDefinition::new(
        FieldKind::Enum {
            variants,
            value_to_key,
        },
        description,
    )
}

/// 便捷函数：创建数组字段
///
/// 元素字段强制必填，数组中的空元素会在带下标的键上失败
pub fn list_field(item: FieldDefinition) -> FieldDefinition {
    let description = item.description.clone();
    FieldDefinition::new(
        FieldKind::List {
            item: Box::new(item.required()),
        },
        &description,
    )
}

/// 便捷函数：创建联合字段
///
/// 未提供描述时由两个分支的描述拼合而成
pub fn union_field(
    first: FieldDefinition,
    second: FieldDefinition,
    description: Option<&str>,
) -> FieldDefinition {
    let description = description.map(str::to_string).unwrap_or_else(|| {
        format!(
            "Either {} or {}",
            first.description.to_lowercase(),
            second.description.to_lowercase()
        )
    });
    FieldDefinition::new(
        FieldKind::Union {
            first: Box::new(first),
            second: Box::new(second),
        },
        &description,
    )
}

/// 便捷函数：创建嵌入模型字段
pub fn embedded_field<M: Model>(description: &str) -> FieldDefinition {
    FieldDefinition::new(FieldKind::Embedded { model: M::schema }, description)
}
