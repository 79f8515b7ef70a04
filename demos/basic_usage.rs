//! rat_schema 基础用法示例
//!
//! 展示如何声明模型、填充外部属性、校验并序列化回外部表示

use rat_logger::{handler::term::TermConfig, LevelFilter, LoggerBuilder};
use rat_schema::{
    define_model, enum_field, iso_date_field, list_field, string_field, url_field, DataValue,
    Model, SchemaResult,
};
use serde_json::json;
use std::collections::HashMap;

// 定义故事模型
define_model! {
    /// 故事模型
    struct Story {
        model_name = "story",
        fields = {
            title: string_field("标题").required(),
            link: url_field("原文链接"),
            tags: list_field(string_field("标签")),
            state: enum_field(&[("DRAFT", "draft".into()), ("PUBLISHED", "published".into())], "状态")
                .default_value("DRAFT".into()),
            published_at: iso_date_field("发布时间"),
        }
    }
}

fn main() -> SchemaResult<()> {
    // 初始化日志系统（由调用者负责）
    init_logging_system().expect("日志初始化失败");

    // 初始化多语言错误消息系统
    rat_schema::init();
    println!("=== rat_schema 基本使用示例 ===");
    println!("库版本: {}", rat_schema::get_info());

    // 从外部属性创建实例，未声明的键被忽略
    let properties = match rat_schema::json_value_to_data_value(json!({
        "title": "  rat_schema 发布了  ",
        "link": "https://example.com/rat-schema",
        "tags": ["rust", "schema"],
        "published_at": "2026-08-07T08:00:00.000Z",
        "ignored": "未声明的键",
    })) {
        DataValue::Object(map) => map,
        _ => HashMap::new(),
    };
    let mut story = Story::from_properties(properties)?;

    // 读取经过字段转换后的内部值（标题已被修剪）
    println!("标题: {}", story.get("title")?);
    println!("状态: {}", story.get("state")?);

    // 校验并序列化，空字段被省略
    let serialized = story.serialize()?;
    println!("序列化结果:");
    for (key, value) in &serialized {
        println!("  {} = {}", key, value);
    }

    // 校验失败时返回带结构化上下文的类型化错误
    let mut incomplete = Story::new_instance()?;
    if let Err(error) = incomplete.validate() {
        println!(
            "校验失败: status={} code={} title={}",
            error.status(),
            error.code(),
            error.title()
        );
    }

    println!("✅ 示例运行完成");
    Ok(())
}

/// 初始化日志系统
fn init_logging_system() -> Result<(), Box<dyn std::error::Error>> {
    LoggerBuilder::new()
        .with_level(LevelFilter::Debug)
        .add_terminal_with_config(TermConfig::default())
        .init()?;
    Ok(())
}
