//! 字段类型行为测试
//!
//! 覆盖每种字段的set/serialize转换策略与失败路径

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use rat_schema::{
        date_field, enum_field, field_required, invalid_enum_value, invalid_format, invalid_type,
        iso_date_field, list_field, number_field, object_field, regex_string_field, string_field,
        union_field, url_field, DataValue,
    };

    /// 字符串字段：修剪空白并原样返回
    #[test]
    fn test_string_field_trims_whitespace() {
        let field = string_field("标题");
        let value = field.set("title", "  Example  ".into()).unwrap();
        assert_eq!(value, DataValue::String("Example".to_string()));
        // 序列化是恒等转换
        assert_eq!(field.serialize("title", &value).unwrap(), value);
    }

    /// 字符串字段：非字符串值返回invalidType
    #[test]
    fn test_string_field_rejects_non_string() {
        let field = string_field("标题");
        let given = DataValue::Int(2);
        let result = field.set("title", given.clone());
        assert_eq!(result.unwrap_err(), invalid_type("title", &given));
    }

    /// 带正则的字符串字段：不匹配时返回invalidFormat
    #[test]
    fn test_regex_string_field_checks_format() {
        let field = regex_string_field("编号", r"^[A-Z]{3}-\d+$");
        assert_eq!(
            field.set("code", "ABC-42".into()).unwrap(),
            DataValue::String("ABC-42".to_string())
        );
        let result = field.set("code", "abc".into());
        assert_eq!(
            result.unwrap_err(),
            invalid_format("code", "abc", r"^[A-Z]{3}-\d+$")
        );
    }

    /// URL字段：委托字符串字段并附加固定正则
    #[test]
    fn test_url_field() {
        let field = url_field("主页");
        let value = field.set("homepage", "https://www.example.com/path".into()).unwrap();
        assert_eq!(
            value,
            DataValue::String("https://www.example.com/path".to_string())
        );
        assert!(field.set("homepage", "不是URL".into()).is_err());
    }

    /// 数字字段：接受整数与浮点数
    #[test]
    fn test_number_field() {
        let field = number_field("数量");
        assert_eq!(field.set("count", DataValue::Int(42)).unwrap(), DataValue::Int(42));
        assert_eq!(
            field.set("ratio", DataValue::Float(0.5)).unwrap(),
            DataValue::Float(0.5)
        );
        let given = DataValue::String("42".to_string());
        assert_eq!(
            field.set("count", given.clone()).unwrap_err(),
            invalid_type("count", &given)
        );
    }

    /// 对象字段：只接受键值结构
    #[test]
    fn test_object_field() {
        let field = object_field("附加信息");
        let value = DataValue::Object(std::collections::HashMap::new());
        assert_eq!(field.set("extra", value.clone()).unwrap(), value);
        assert_eq!(field.serialize("extra", &value).unwrap(), value);

        let given = DataValue::Array(vec![]);
        assert_eq!(
            field.set("extra", given.clone()).unwrap_err(),
            invalid_type("extra", &given)
        );
        let given = DataValue::Int(1);
        assert_eq!(
            field.set("extra", given.clone()).unwrap_err(),
            invalid_type("extra", &given)
        );
    }

    /// 日期字段：接受内部日期值或ISO-8601字符串
    #[test]
    fn test_date_field_parses_iso_string() {
        let field = date_field("创建时间");
        let parsed = field
            .set("created_at", "2019-01-30T01:01:02.123Z".into())
            .unwrap();
        let expected = DateTime::parse_from_rfc3339("2019-01-30T01:01:02.123Z").unwrap();
        assert_eq!(parsed, DataValue::DateTime(expected));
        // 内部值直接通过
        assert_eq!(field.set("created_at", parsed.clone()).unwrap(), parsed);
        // 日期字段序列化原样返回内部值
        assert_eq!(field.serialize("created_at", &parsed).unwrap(), parsed);
    }

    /// 日期字段：格式错误与类型错误分别报告
    #[test]
    fn test_date_field_failures() {
        let field = date_field("创建时间");
        let error = field.set("created_at", "昨天".into()).unwrap_err();
        assert_eq!(error.code(), "invalidFormat");
        assert_eq!(error.status(), 400);

        let given = DataValue::Bool(true);
        assert_eq!(
            field.set("created_at", given.clone()).unwrap_err(),
            invalid_type("created_at", &given)
        );
    }

    /// ISO日期字段：内外部表示往返一致
    #[test]
    fn test_iso_date_field_round_trip() {
        let field = iso_date_field("发布时间");
        let internal = field
            .set("published_at", "2019-01-30T01:01:02.123Z".into())
            .unwrap();
        assert!(matches!(internal, DataValue::DateTime(_)));
        let external = field.serialize("published_at", &internal).unwrap();
        assert_eq!(
            external,
            DataValue::String("2019-01-30T01:01:02.123Z".to_string())
        );
    }

    /// 枚举字段：键名与枚举值都可接受，序列化总是返回键名
    #[test]
    fn test_enum_field_accepts_name_and_value() {
        let field = enum_field(&[("ONE", "one".into()), ("TWO", "two".into())], "状态");
        // 键名解析为枚举值
        assert_eq!(
            field.set("state", "ONE".into()).unwrap(),
            DataValue::String("one".to_string())
        );
        // 枚举值直接通过
        assert_eq!(
            field.set("state", "two".into()).unwrap(),
            DataValue::String("two".to_string())
        );
        // 序列化回键名
        assert_eq!(
            field.serialize("state", &"one".into()).unwrap(),
            DataValue::String("ONE".to_string())
        );
    }

    /// 枚举字段：既非键名也非枚举值返回invalidEnumValue
    #[test]
    fn test_enum_field_rejects_unknown() {
        let field = enum_field(&[("ONE", "one".into()), ("TWO", "two".into())], "状态");
        let given = DataValue::String("invalid".to_string());
        assert_eq!(
            field.set("state", given.clone()).unwrap_err(),
            invalid_enum_value("state", &given)
        );
    }

    /// 数组字段：逐元素校验，错误键带下标
    #[test]
    fn test_list_field_reports_element_index() {
        let field = list_field(string_field("Some strings"));
        let value = field
            .set("strings", DataValue::Array(vec!["one".into(), "two".into()]))
            .unwrap();
        assert_eq!(
            value,
            DataValue::Array(vec!["one".into(), "two".into()])
        );

        let given = DataValue::Int(2);
        let error = field
            .set(
                "strings",
                DataValue::Array(vec!["valid".into(), given.clone()]),
            )
            .unwrap_err();
        assert_eq!(error, invalid_type("strings[1]", &given));
    }

    /// 数组字段：非数组值返回invalidType
    #[test]
    fn test_list_field_rejects_non_array() {
        let field = list_field(string_field("Some strings"));
        let given = DataValue::Int(2);
        assert_eq!(
            field.set("strings", given.clone()).unwrap_err(),
            invalid_type("strings", &given)
        );
    }

    /// 联合字段：满足任一分支即通过，两个分支都失败时返回第二分支的错误
    #[test]
    fn test_union_field_accepts_either_branch() {
        let field = union_field(number_field("数量"), string_field("文本"), None);
        assert_eq!(field.set("value", DataValue::Int(7)).unwrap(), DataValue::Int(7));
        assert_eq!(
            field.set("value", "seven".into()).unwrap(),
            DataValue::String("seven".to_string())
        );

        let given = DataValue::Bool(true);
        assert_eq!(
            field.set("value", given.clone()).unwrap_err(),
            invalid_type("value", &given)
        );
    }

    /// 联合字段：序列化由第一分支的set选择分支，失败时回退第二分支
    #[test]
    fn test_union_field_serialize_dispatch() {
        let field = union_field(iso_date_field("时间"), string_field("文本"), None);
        let internal = field
            .set("value", "2019-01-30T01:01:02.123Z".into())
            .unwrap();
        assert_eq!(
            field.serialize("value", &internal).unwrap(),
            DataValue::String("2019-01-30T01:01:02.123Z".to_string())
        );

        // 无法按日期解析的字符串落入第二分支
        let internal = field.set("value", "plain text".into()).unwrap();
        assert_eq!(
            field.serialize("value", &internal).unwrap(),
            DataValue::String("plain text".to_string())
        );
    }

    /// 联合字段：默认描述由两个分支拼合
    #[test]
    fn test_union_field_default_description() {
        let field = union_field(number_field("A number"), string_field("A string"), None);
        assert_eq!(field.description, "Either a number or a string");
    }

    /// 必填字段在无值时读取返回fieldRequired
    #[test]
    fn test_required_field_get() {
        let field = string_field("标题").required();
        assert_eq!(field.get("title", None).unwrap_err(), field_required("title"));
        // 非必填字段无值时返回空值
        let optional = string_field("副标题");
        assert_eq!(optional.get("subtitle", None).unwrap(), DataValue::Null);
    }
}
