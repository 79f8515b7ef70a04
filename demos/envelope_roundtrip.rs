//! 线路信封往返示例
//!
//! 展示请求体解析与成功/错误信封的生成

use rat_schema::{
    define_model, make_json_body, make_json_error, parse_model, string_field, Model, SchemaResult,
};

define_model! {
    /// 评论请求模型
    struct CommentRequest {
        model_name = "comment_request",
        fields = {
            author: string_field("作者").required(),
            content: string_field("内容").required(),
        }
    }
}

fn main() -> SchemaResult<()> {
    rat_schema::init();
    println!("=== 线路信封往返示例 ===");

    // 解析合法请求体
    let body = r#"{"data": {"author": "0ldm0s", "content": "  很好用  "}}"#;
    let mut comment = parse_model(body, &CommentRequest::schema(), true)?;
    println!("作者: {}", comment.get("author")?);

    // 生成成功信封
    println!("成功信封:\n{}", make_json_body(&mut comment)?);

    // 请求体缺少data字段时产生422错误，并包装进错误信封
    if let Err(error) = parse_model(r#"{"author": "x"}"#, &CommentRequest::schema(), true) {
        println!("错误信封:\n{}", make_json_error(&error));
    }

    // 请求体无法解析时同样产生422错误
    if let Err(error) = parse_model("...", &CommentRequest::schema(), true) {
        println!("错误信封:\n{}", make_json_error(&error));
    }

    println!("✅ 示例运行完成");
    Ok(())
}
