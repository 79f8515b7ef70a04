//! 模型定义系统模块
//!
//! 通过共享模式声明数据模型的结构，
//! 提供字段类型、校验与双向序列化功能

pub mod convenience;
pub mod field_types;
pub mod instance;
pub mod macros;
pub mod traits;

// 重新导出核心类型（保持向后兼容）
pub use convenience::*;
pub use field_types::{
    FieldDefinition, FieldKind, ModelSchema, ModelSchemaBuilder, SchemaProvider, URL_REGEX,
};
pub use instance::ModelInstance;
pub use traits::Model;
