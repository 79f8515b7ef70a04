//! Model trait 定义模块
//!
//! 定义模型类型的核心接口：一次性构建、全体实例共享的模式

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::SchemaResult;
use crate::model::field_types::ModelSchema;
use crate::model::instance::ModelInstance;
use crate::types::DataValue;

/// 模型特征
///
/// 所有模型类型都必须实现这个特征，通常通过`define_model!`宏生成
pub trait Model {
    /// 获取模型模式
    fn schema() -> Arc<ModelSchema>;

    /// 获取模型名称
    fn model_name() -> String {
        Self::schema().name().to_string()
    }

    /// 创建空实例
    fn new_instance() -> SchemaResult<ModelInstance> {
        ModelInstance::new(Self::schema())
    }

    /// 从外部属性创建实例
    fn from_properties(properties: HashMap<String, DataValue>) -> SchemaResult<ModelInstance> {
        ModelInstance::from_properties(Self::schema(), properties)
    }
}
