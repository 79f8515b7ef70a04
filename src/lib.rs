//! rat_schema - 声明式数据模型引擎
//!
//! 通过共享模式定义类型化的数据模型：字段负责校验与
//! 内外部表示的双向转换，模型实例按需序列化回外部形式
//! 核心完全同步，不含任何I/O

// 导出所有公共模块
pub mod error;
pub mod i18n;
pub mod model;
pub mod serializer;
pub mod types;

// 重新导出常用类型和函数
pub use error::{
    data_field_required, field_required, invalid_enum_value, invalid_format, invalid_type,
    json_body_required, method_not_allowed, page_not_found, server_error, unknown_field,
    SchemaError, SchemaResult,
};
pub use model::{
    date_field, embedded_field, enum_field, iso_date_field, list_field, number_field,
    object_field, regex_string_field, string_field, union_field, url_field, FieldDefinition,
    FieldKind, Model, ModelInstance, ModelSchema, ModelSchemaBuilder, SchemaProvider, URL_REGEX,
};
pub use serializer::{
    make_json_body, make_json_body_list, make_json_error, parse_model, try_parse_json,
    DataSerializer, OutputFormat, SerializerConfig,
};
pub use types::{json_value_to_data_value, DataValue};

// 条件编译调试宏 - 只有在 debug 模式下才输出调试信息
#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        rat_logger::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        // 在 release 模式下不输出调试信息
    };
}

/// 初始化rat_schema库
///
/// 这个函数会初始化多语言错误消息系统
///
/// 注意：日志系统由调用者自行初始化，本库不负责初始化日志
pub fn init() {
    // 初始化多语言错误消息系统
    i18n::ErrorMessageI18n::init();
}

/// 库版本信息
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 库名称
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// 获取库信息
pub fn get_info() -> String {
    format!("{} v{}", NAME, VERSION)
}
