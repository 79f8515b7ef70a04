//! 模型实例运行时模块
//!
//! 实例持有共享模式的只读引用与私有的内部值存储，
//! 读写、批量填充、校验与序列化全部经由字段的转换策略

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{self, SchemaResult};
use crate::model::field_types::ModelSchema;
use crate::types::DataValue;

/// 模型实例
#[derive(Debug, Clone)]
pub struct ModelInstance {
    /// 共享模式
    schema: Arc<ModelSchema>,
    /// 内部表示的数据存储，实例私有
    data: HashMap<String, DataValue>,
}

impl PartialEq for ModelInstance {
    fn eq(&self, other: &Self) -> bool {
        self.schema.name() == other.schema.name() && self.data == other.data
    }
}

impl ModelInstance {
    /// 创建空实例
    ///
    /// 声明了默认值的字段经过set路径写入，与普通写入同样被校验和转换
    pub fn new(schema: Arc<ModelSchema>) -> SchemaResult<Self> {
        let mut instance = Self {
            schema: schema.clone(),
            data: HashMap::new(),
        };
        for (key, field) in schema.fields() {
            if let Some(default) = &field.default {
                instance.set(key, default.clone())?;
            }
        }
        Ok(instance)
    }

    /// 从外部属性创建实例
    pub fn from_properties(
        schema: Arc<ModelSchema>,
        properties: HashMap<String, DataValue>,
    ) -> SchemaResult<Self> {
        let mut instance = Self::new(schema)?;
        instance.populate(properties)?;
        Ok(instance)
    }

    /// 获取实例的共享模式
    pub fn schema(&self) -> &Arc<ModelSchema> {
        &self.schema
    }

    /// 获取模型名称
    pub fn model_name(&self) -> &str {
        self.schema.name()
    }

    /// 读取字段值
    ///
    /// 委托字段的get，缺失的必填字段在此返回`fieldRequired`
    pub fn get(&self, key: &str) -> SchemaResult<DataValue> {
        let field = self
            .schema
            .field(key)
            .ok_or_else(|| error::unknown_field(key))?;
        field.get(key, self.data.get(key))
    }

    /// 写入字段值
    ///
    /// 空值改走字段的get路径，以触发必填检查
    pub fn set(&mut self, key: &str, value: DataValue) -> SchemaResult<()> {
        let schema = self.schema.clone();
        let field = schema.field(key).ok_or_else(|| error::unknown_field(key))?;
        let stored = if value.is_null() {
            field.get(key, None)?
        } else {
            field.set(key, value)?
        };
        self.data.insert(key.to_string(), stored);
        Ok(())
    }

    /// 批量填充外部属性
    ///
    /// 只处理模式中声明过的键，未声明的键被静默忽略
    pub fn populate(&mut self, properties: HashMap<String, DataValue>) -> SchemaResult<&mut Self> {
        for (key, value) in properties {
            if self.schema.contains(&key) {
                self.set(&key, value)?;
            } else {
                crate::debug_log!("填充时忽略未声明的键: {}", key);
            }
        }
        Ok(self)
    }

    /// 校验全部字段
    ///
    /// 每个字段先经过get再写回set路径，缺失的必填字段在此暴露；
    /// 失败时已写回的字段保持原样，由调用方决定后续处理
    pub fn validate(&mut self) -> SchemaResult<&mut Self> {
        let schema = self.schema.clone();
        for (key, field) in schema.fields() {
            let current = field.get(key, self.data.get(key))?;
            let normalized = if current.is_null() {
                DataValue::Null
            } else {
                field.set(key, current)?
            };
            self.data.insert(key.clone(), normalized);
        }
        Ok(self)
    }

    /// 校验并序列化为外部表示
    ///
    /// 值为空的字段从输出中省略，而不是输出null
    pub fn serialize(&mut self) -> SchemaResult<HashMap<String, DataValue>> {
        self.validate()?;
        let schema = self.schema.clone();
        let mut output = HashMap::new();
        for (key, field) in schema.fields() {
            let value = self.data.get(key).cloned().unwrap_or(DataValue::Null);
            if value.is_null() {
                continue;
            }
            output.insert(key.clone(), field.serialize(key, &value)?);
        }
        Ok(output)
    }
}
