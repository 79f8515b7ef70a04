//! 模型相关的宏定义
//!
//! 提供便捷的宏来声明模型类型及其字段

/// 便捷宏：声明模型
///
/// 每个模型类型声明一次，字段注册生成共享模式，
/// 模式在首次访问时构建，此后全体实例共享
///
/// ```ignore
/// define_model! {
///     /// 故事请求模型
///     struct StoryRequest {
///         model_name = "story_request",
///         fields = {
///             title: string_field("标题").required(),
///             state: enum_field(&[("OPEN", "open".into())], "状态"),
///         }
///     }
/// }
/// ```
#[macro_export]
macro_rules! define_model {
    (
        $(#[$meta:meta])*
        struct $name:ident {
            model_name = $model_name:expr,
            $( description = $description:expr, )?
            fields = {
                $(
                    $field_name:ident: $field_def:expr,
                )*
            }
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        impl $crate::model::traits::Model for $name {
            fn schema() -> std::sync::Arc<$crate::model::field_types::ModelSchema> {
                static SCHEMA: std::sync::OnceLock<
                    std::sync::Arc<$crate::model::field_types::ModelSchema>,
                > = std::sync::OnceLock::new();
                SCHEMA
                    .get_or_init(|| {
                        let builder =
                            $crate::model::field_types::ModelSchema::builder($model_name);
                        $(
                            let builder = builder.description($description);
                        )?
                        $(
                            let builder =
                                builder.field(stringify!($field_name), $field_def);
                        )*
                        builder.build()
                    })
                    .clone()
            }
        }
    };
}
