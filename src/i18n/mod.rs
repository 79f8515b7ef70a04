//! 多语言错误消息模块
//!
//! 使用rat_embed_lang框架提供统一的错误标题多语言支持
//! en-US文本是线路格式的规范标题

use std::collections::HashMap;
use rat_embed_lang::register_translations;

/// 错误消息翻译注册器
pub struct ErrorMessageI18n;

impl ErrorMessageI18n {
    /// 注册所有错误标题翻译
    pub fn register_all_translations() {
        let mut translations = HashMap::new();

        // 必填字段缺失
        let mut field_required = HashMap::new();
        field_required.insert("zh-CN".to_string(), "该字段为必填项。".to_string());
        field_required.insert("en-US".to_string(), "The field is required.".to_string());
        field_required.insert("ja-JP".to_string(), "このフィールドは必須です。".to_string());
        translations.insert("error.field_required".to_string(), field_required);

        // 类型不匹配
        let mut invalid_type = HashMap::new();
        invalid_type.insert("zh-CN".to_string(), "给定值的类型无效。".to_string());
        invalid_type.insert("en-US".to_string(), "The given value has an invalid type.".to_string());
        invalid_type.insert("ja-JP".to_string(), "指定された値の型が無効です。".to_string());
        translations.insert("error.invalid_type".to_string(), invalid_type);

        // 格式校验失败
        let mut invalid_format = HashMap::new();
        invalid_format.insert("zh-CN".to_string(), "给定值的格式无效。".to_string());
        invalid_format.insert("en-US".to_string(), "The given value has an invalid format.".to_string());
        invalid_format.insert("ja-JP".to_string(), "指定された値の形式が無効です。".to_string());
        translations.insert("error.invalid_format".to_string(), invalid_format);

        // 无效枚举值
        let mut invalid_enum_value = HashMap::new();
        invalid_enum_value.insert("zh-CN".to_string(), "给定的枚举值无效。".to_string());
        invalid_enum_value.insert("en-US".to_string(), "The given enum value is not valid.".to_string());
        invalid_enum_value.insert("ja-JP".to_string(), "指定された列挙値が無効です。".to_string());
        translations.insert("error.invalid_enum_value".to_string(), invalid_enum_value);

        // 未声明字段
        let mut unknown_field = HashMap::new();
        unknown_field.insert("zh-CN".to_string(), "该字段未在模式中声明。".to_string());
        unknown_field.insert("en-US".to_string(), "The field is not defined in the schema.".to_string());
        unknown_field.insert("ja-JP".to_string(), "このフィールドはスキーマで宣言されていません。".to_string());
        translations.insert("error.unknown_field".to_string(), unknown_field);

        // 页面不存在
        let mut page_not_found = HashMap::new();
        page_not_found.insert("zh-CN".to_string(), "请求的页面不存在。".to_string());
        page_not_found.insert("en-US".to_string(), "The requested page could not be found.".to_string());
        page_not_found.insert("ja-JP".to_string(), "要求されたページが見つかりません。".to_string());
        translations.insert("error.page_not_found".to_string(), page_not_found);

        // 方法不被允许
        let mut method_not_allowed = HashMap::new();
        method_not_allowed.insert("zh-CN".to_string(), "请求的方法不被允许。".to_string());
        method_not_allowed.insert("en-US".to_string(), "The requested method is not allowed.".to_string());
        method_not_allowed.insert("ja-JP".to_string(), "要求されたメソッドは許可されていません。".to_string());
        translations.insert("error.method_not_allowed".to_string(), method_not_allowed);

        // 请求体缺少JSON实体
        let mut json_body_required = HashMap::new();
        json_body_required.insert("zh-CN".to_string(), "请求的responseBody中应包含一个JSON实体。".to_string());
        json_body_required.insert("en-US".to_string(), "A JSON entity is expected in the responseBody of the request.".to_string());
        json_body_required.insert("ja-JP".to_string(), "リクエストのresponseBodyにJSONエンティティが必要です。".to_string());
        translations.insert("error.json_body_required".to_string(), json_body_required);

        // data字段缺失
        let mut data_field_required = HashMap::new();
        data_field_required.insert("zh-CN".to_string(), "data字段中应包含一个JSON实体。".to_string());
        data_field_required.insert("en-US".to_string(), "A JSON entity is expected in the data field.".to_string());
        data_field_required.insert("ja-JP".to_string(), "dataフィールドにJSONエンティティが必要です。".to_string());
        translations.insert("error.data_field_required".to_string(), data_field_required);

        // 服务器内部错误
        let mut server_error = HashMap::new();
        server_error.insert("zh-CN".to_string(), "服务器遇到意外情况，我们的团队已收到通知。".to_string());
        server_error.insert("en-US".to_string(), "The server encountered an unexpected situation, our team has been informed.".to_string());
        server_error.insert("ja-JP".to_string(), "サーバーで予期しない状況が発生しました。担当チームに通知済みです。".to_string());
        translations.insert("error.server_error".to_string(), server_error);

        // 注册所有翻译
        register_translations(translations);
    }

    /// 初始化错误标题多语言支持
    pub fn init() {
        Self::register_all_translations();

        // 从环境变量获取语言设置，默认为zh-CN
        let lang = std::env::var("RAT_LANG")
            .or_else(|_| std::env::var("LANG"))
            .unwrap_or_else(|_| "zh-CN".to_string());

        // 标准化语言代码
        use rat_embed_lang::normalize_language_code;
        let normalized_lang = normalize_language_code(&lang);
        set_language(&normalized_lang);
    }
}


/// 重新导出rat_embed_lang的核心函数
pub use rat_embed_lang::{t, tf, set_language, current_language};
