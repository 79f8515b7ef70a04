//! 线路信封测试
//!
//! 覆盖成功/错误信封的生成与请求体解析

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rat_schema::{
        data_field_required, define_model, enum_field, field_required, json_body_required,
        make_json_body, make_json_body_list, make_json_error, method_not_allowed, page_not_found,
        parse_model, server_error, string_field, try_parse_json, DataSerializer, DataValue, Model,
        OutputFormat, SerializerConfig,
    };
    use serde_json::json;

    define_model! {
        /// 故事请求模型
        struct StoryRequest {
            model_name = "story_request",
            fields = {
                title: string_field("The title").required(),
                state: enum_field(&[("ONE", "one".into()), ("TWO", "two".into())], "An enum")
                    .default_value("TWO".into()),
            }
        }
    }

    /// 信封标题使用规范的en-US文本
    fn setup() {
        rat_schema::init();
        rat_schema::i18n::set_language("en-US");
    }

    /// 把JSON字面量转换为外部属性映射
    fn props(value: serde_json::Value) -> HashMap<String, DataValue> {
        match DataValue::from_json_value(value) {
            DataValue::Object(map) => map,
            other => panic!("期望JSON对象，收到: {:?}", other),
        }
    }

    /// 单个模型的成功信封，默认两空格缩进
    #[test]
    fn test_make_json_body() {
        setup();
        let mut model = StoryRequest::from_properties(props(json!({ "title": "title" }))).unwrap();
        let body = make_json_body(&mut model).unwrap();
        assert_eq!(
            body,
            "{\n  \"data\": {\n    \"state\": \"TWO\",\n    \"title\": \"title\"\n  }\n}"
        );
    }

    /// 模型列表的成功信封
    #[test]
    fn test_make_json_body_list() {
        setup();
        let mut models =
            vec![StoryRequest::from_properties(props(json!({ "title": "title" }))).unwrap()];
        let body = make_json_body_list(&mut models).unwrap();
        assert_eq!(
            try_parse_json(&body).unwrap(),
            json!({ "data": [{ "state": "TWO", "title": "title" }] })
        );
    }

    /// 紧凑输出配置
    #[test]
    fn test_compact_output() {
        setup();
        let serializer = DataSerializer::with_config(
            SerializerConfig::new().with_output_format(OutputFormat::Compact),
        );
        let mut model = StoryRequest::from_properties(props(json!({ "title": "t" }))).unwrap();
        let body = serializer.make_json_body(&mut model).unwrap();
        assert!(!body.contains('\n'));
        assert_eq!(
            try_parse_json(&body).unwrap(),
            json!({ "data": { "state": "TWO", "title": "t" } })
        );
    }

    /// 校验失败的模型无法生成信封
    #[test]
    fn test_make_json_body_requires_valid_model() {
        setup();
        let mut model = StoryRequest::new_instance().unwrap();
        assert_eq!(
            make_json_body(&mut model).unwrap_err(),
            field_required("title")
        );
    }

    /// pageNotFound错误信封
    #[test]
    fn test_page_not_found_envelope() {
        setup();
        let body = make_json_error(&page_not_found("url"));
        assert_eq!(
            try_parse_json(&body).unwrap(),
            json!({
                "errors": [{
                    "code": "pageNotFound",
                    "meta": [{ "url": "url" }],
                    "status": 404,
                    "title": "The requested page could not be found.",
                }]
            })
        );
    }

    /// methodNotAllowed错误信封
    #[test]
    fn test_method_not_allowed_envelope() {
        setup();
        let body = make_json_error(&method_not_allowed("url", "get"));
        assert_eq!(
            try_parse_json(&body).unwrap(),
            json!({
                "errors": [{
                    "code": "methodNotAllowed",
                    "meta": [{ "url": "url", "method": "get" }],
                    "status": 405,
                    "title": "The requested method is not allowed.",
                }]
            })
        );
    }

    /// jsonBodyRequired错误信封
    #[test]
    fn test_json_body_required_envelope() {
        setup();
        let body = make_json_error(&json_body_required());
        assert_eq!(
            try_parse_json(&body).unwrap(),
            json!({
                "errors": [{
                    "code": "jsonBodyRequired",
                    "meta": [],
                    "status": 422,
                    "title": "A JSON entity is expected in the responseBody of the request.",
                }]
            })
        );
    }

    /// dataFieldRequired错误信封
    #[test]
    fn test_data_field_required_envelope() {
        setup();
        let body = make_json_error(&data_field_required());
        assert_eq!(
            try_parse_json(&body).unwrap(),
            json!({
                "errors": [{
                    "code": "dataFieldRequired",
                    "meta": [],
                    "status": 422,
                    "title": "A JSON entity is expected in the data field.",
                }]
            })
        );
    }

    /// serverError错误信封
    #[test]
    fn test_server_error_envelope() {
        setup();
        let body = make_json_error(&server_error());
        assert_eq!(
            try_parse_json(&body).unwrap(),
            json!({
                "errors": [{
                    "code": "serverError",
                    "meta": [],
                    "status": 500,
                    "title": "The server encountered an unexpected situation, our team has been informed.",
                }]
            })
        );
    }

    /// 校验错误信封携带结构化上下文
    #[test]
    fn test_validation_error_envelope() {
        setup();
        let body = make_json_error(&field_required("title"));
        assert_eq!(
            try_parse_json(&body).unwrap(),
            json!({
                "errors": [{
                    "code": "fieldRequired",
                    "meta": [{ "key": "title" }],
                    "status": 400,
                    "title": "The field is required.",
                }]
            })
        );
    }

    /// 请求体缺少data字段
    #[test]
    fn test_parse_model_requires_data_field() {
        setup();
        let result = parse_model("{\"title\": \"title\"}", &StoryRequest::schema(), true);
        assert_eq!(result.unwrap_err(), data_field_required());
    }

    /// 请求体不是合法JSON
    #[test]
    fn test_parse_model_requires_json_body() {
        setup();
        let result = parse_model("...", &StoryRequest::schema(), true);
        assert_eq!(result.unwrap_err(), json_body_required());
    }

    /// 合法请求体解析出已填充的实例
    #[test]
    fn test_parse_model_success() {
        setup();
        let instance = parse_model(
            "{\"data\": {\"title\": \"Example\", \"state\": \"ONE\"}}",
            &StoryRequest::schema(),
            true,
        )
        .unwrap();
        assert_eq!(
            instance.get("title").unwrap(),
            DataValue::String("Example".to_string())
        );
        assert_eq!(
            instance.get("state").unwrap(),
            DataValue::String("one".to_string())
        );
    }

    /// validate开关控制解析时是否检查必填字段
    #[test]
    fn test_parse_model_validate_flag() {
        setup();
        let body = "{\"data\": {}}";
        assert_eq!(
            parse_model(body, &StoryRequest::schema(), true).unwrap_err(),
            field_required("title")
        );

        let instance = parse_model(body, &StoryRequest::schema(), false).unwrap();
        assert_eq!(
            instance.get("title").unwrap_err(),
            field_required("title")
        );
    }
}
