use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // 首先加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖
            .add_source(
                Environment::with_prefix("CATALOG")
                    .separator("_")
                    .try_parsing(true),
            );

        // 支持从环境变量加载
        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("server.unix_socket_path", std::env::var("UNIX_SOCKET").ok())?
            .set_override_option("server.workers", std::env::var("CPU_COUNT").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option(
                "courses.max_students_per_course",
                std::env::var("MAX_STUDENTS_PER_COURSE").ok(),
            )?;

        let config = builder.build()?;
        Self::from_config(config)
    }

    /// 从已构建的配置源反序列化并补全派生值
    pub fn from_config(config: Config) -> Result<Self, ConfigError> {
        let mut app_config: AppConfig = config.try_deserialize()?;

        // 处理工作线程数
        if app_config.server.workers == 0 {
            app_config.server.workers = num_cpus::get().min(app_config.server.max_workers);
        }

        Ok(app_config)
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 检查是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    /// 获取服务器绑定地址
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// 获取 Unix 套接字路径 (如果配置了)
    #[cfg(unix)]
    pub fn unix_socket_path(&self) -> Option<&str> {
        if self.server.unix_socket_path.is_empty() {
            None
        } else {
            Some(&self.server.unix_socket_path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    const SAMPLE: &str = r#"
[app]
system_name = "Course Catalog"
environment = "production"
log_level = "info"

[server]
host = "0.0.0.0"
port = 8080
unix_socket_path = ""
workers = 0
max_workers = 2

[server.timeouts]
client_request = 5000
client_disconnect = 1000
keep_alive = 30

[server.limits]
max_payload_size = 1048576

[database]
url = "catalog.db"
pool_size = 4
timeout = 5

[cors]
allowed_origins = ["*"]
allowed_methods = ["GET", "POST"]
allowed_headers = ["Content-Type"]
max_age = 3600
"#;

    fn sample_config(extra: &str) -> AppConfig {
        let config = Config::builder()
            .add_source(File::from_str(&format!("{SAMPLE}{extra}"), FileFormat::Toml))
            .build()
            .unwrap();
        AppConfig::from_config(config).unwrap()
    }

    #[test]
    fn test_workers_fall_back_to_cpu_count() {
        let config = sample_config("");
        assert!(config.server.workers >= 1);
        assert!(config.server.workers <= 2);
    }

    #[test]
    fn test_course_rules_default() {
        let config = sample_config("");
        assert_eq!(config.courses.max_students_per_course, 20);

        let config = sample_config("\n[courses]\nmax_students_per_course = 3\n");
        assert_eq!(config.courses.max_students_per_course, 3);
    }

    #[test]
    fn test_environment_helpers() {
        let config = sample_config("");
        assert!(config.is_production());
        assert!(!config.is_development());
        assert_eq!(config.server_bind_address(), "0.0.0.0:8080");
    }

    #[cfg(unix)]
    #[test]
    fn test_unix_socket_path_empty_is_none() {
        let config = sample_config("");
        assert_eq!(config.unix_socket_path(), None);
    }
}
