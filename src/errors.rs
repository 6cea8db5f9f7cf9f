//! 统一错误处理模块
//!
//! 存储层的错误类型。数据库操作错误保留原始的 `DbErr`，
//! 服务层据此区分约束冲突与其他故障。

use std::fmt;

use sea_orm::{DbErr, SqlErr};

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义（结构体形式的变体）
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - 便捷构造函数，字段参数接受 `impl Into<T>`
macro_rules! define_catalog_errors {
    ($(
        $variant:ident { $($field:ident: $ty:ty),* $(,)? } => ($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug)]
        pub enum CatalogError {
            $($variant { $($field: $ty),* },)*
        }

        impl CatalogError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(CatalogError::$variant { .. } => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(CatalogError::$variant { .. } => $type_name,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl CatalogError {
                $(
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                        CatalogError::$variant { $($field: $field.into()),* }
                    }
                )*
            }
        }
    };
}

define_catalog_errors! {
    DatabaseConfig { detail: String } => ("E001", "Database Configuration Error"),
    DatabaseConnection { detail: String } => ("E002", "Database Connection Error"),
    Migration { source: DbErr } => ("E003", "Schema Migration Error"),
    Query { action: String, source: DbErr } => ("E004", "Database Operation Error"),
}

impl CatalogError {
    /// 数据库返回的约束错误（唯一约束、外键等）
    pub fn sql_err(&self) -> Option<SqlErr> {
        match self {
            CatalogError::Migration { source } | CatalogError::Query { source, .. } => {
                source.sql_err()
            }
            _ => None,
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::DatabaseConfig { detail }
            | CatalogError::DatabaseConnection { detail } => {
                write!(f, "{}: {}", self.error_type(), detail)
            }
            CatalogError::Migration { source } => write!(f, "{}: {}", self.error_type(), source),
            CatalogError::Query { action, source } => {
                write!(f, "{}: {}: {}", self.error_type(), action, source)
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Migration { source } | CatalogError::Query { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_codes() {
        assert_eq!(CatalogError::database_config("bad url").code(), "E001");
        assert_eq!(CatalogError::database_connection("refused").code(), "E002");
        assert_eq!(
            CatalogError::migration(DbErr::Custom("boom".to_string())).code(),
            "E003"
        );
        assert_eq!(
            CatalogError::query("查询课程失败", DbErr::Custom("boom".to_string())).code(),
            "E004"
        );
    }

    #[test]
    fn test_query_error_display_keeps_action_and_source() {
        let err = CatalogError::query("创建课程失败", DbErr::Custom("disk full".to_string()));
        let text = err.to_string();
        assert!(text.starts_with("Database Operation Error"));
        assert!(text.contains("创建课程失败"));
        assert!(text.contains("disk full"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_plain_errors_have_no_sql_err() {
        assert!(CatalogError::database_config("x").sql_err().is_none());
        assert!(
            CatalogError::query("x", DbErr::Custom("not a constraint".to_string()))
                .sql_err()
                .is_none()
        );
    }
}
