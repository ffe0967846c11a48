use std::env;
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

use ::config::{Config, ConfigBuilder, Environment, File, FileFormat, Map, builder::DefaultState};

use super::AppConfig;
use crate::errors::{LinkpaneError, Result};
use crate::utils::validate_url;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// 未指定 `--config` 时读取的配置文件，靠后的优先
const DEFAULT_CONFIG_PATHS: &[&str] = &["config/linkpane.toml", "linkpane.toml"];

/// 通用环境变量前缀，如 `LINKPANE__UI__TICK_MS=50`
const ENV_PREFIX: &str = "LINKPANE";

/// 常用的短环境变量名 → 配置键
const ENV_ALIASES: &[(&str, &str)] = &[
    ("API_URL", "api.base_url"),
    ("HTTP_TIMEOUT", "api.timeout_secs"),
    ("PREVIEW_API_URL", "preview.endpoint"),
    ("MAP_ACCESS_TOKEN", "map.access_token"),
    ("DEBOUNCE_MS", "ui.debounce_ms"),
    ("LOG_LEVEL", "logging.level"),
    ("LOG_FORMAT", "logging.format"),
    ("LOG_FILE", "logging.file"),
];

impl AppConfig {
    /// Load configuration from TOML files and environment variables
    ///
    /// 优先级：短环境变量 > `LINKPANE__*` > 配置文件 > 默认值。
    /// `--config` 指定的文件必须存在；默认路径可选，但存在时必须能解析。
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let vars: Map<String, String> = env::vars().collect();
        let defaults: Vec<&Path> = DEFAULT_CONFIG_PATHS.iter().map(Path::new).collect();
        let config = Self::load_layers(explicit, &defaults, vars)?;
        if let Some(path) = explicit {
            eprintln!("[INFO] Configuration loaded from: {}", path.display());
        }
        Ok(config)
    }

    /// 从 TOML 文本解析
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::from_str(content, FileFormat::Toml))
            .build()?;
        Ok(settings.try_deserialize::<AppConfig>()?.normalized())
    }

    /// 示例配置文件内容（全部默认值）
    pub fn sample_toml() -> Result<String> {
        toml::to_string_pretty(&Self::default())
            .map_err(|e| LinkpaneError::config(format!("Failed to render sample config: {}", e)))
    }

    /// 组装所有配置层；`vars` 是环境变量快照，测试里可以直接传入
    fn load_layers(
        explicit: Option<&Path>,
        defaults: &[&Path],
        vars: Map<String, String>,
    ) -> Result<Self> {
        let mut builder = Config::builder();

        builder = match explicit {
            Some(path) => builder.add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(true),
            ),
            None => defaults.iter().fold(builder, |builder, path| {
                builder.add_source(
                    File::from(*path)
                        .format(FileFormat::Toml)
                        .required(false),
                )
            }),
        };

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .source(Some(vars.clone())),
        );
        builder = Self::apply_env_aliases(builder, &vars)?;

        let settings = builder.build()?;
        Ok(settings.try_deserialize::<AppConfig>()?.normalized())
    }

    fn apply_env_aliases(
        mut builder: ConfigBuilder<DefaultState>,
        vars: &Map<String, String>,
    ) -> Result<ConfigBuilder<DefaultState>> {
        for (var, key) in ENV_ALIASES {
            builder = builder.set_override_option(*key, vars.get(*var).cloned())?;
        }
        Ok(builder)
    }

    /// 空的地图 token 等同于未配置
    fn normalized(mut self) -> Self {
        if self
            .map
            .access_token
            .as_deref()
            .is_some_and(|t| t.trim().is_empty())
        {
            self.map.access_token = None;
        }
        self
    }

    /// 启动前检查：两个服务地址都必须是 http(s) 绝对地址
    pub fn validate(&self) -> Result<()> {
        validate_url(&self.api.base_url).map_err(|e| {
            LinkpaneError::validation(format!("api.base_url {:?}: {}", self.api.base_url, e))
        })?;
        validate_url(&self.preview.endpoint).map_err(|e| {
            LinkpaneError::validation(format!(
                "preview.endpoint {:?}: {}",
                self.preview.endpoint, e
            ))
        })?;
        Ok(())
    }

    /// API base URL without a trailing slash
    pub fn api_base(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs.max(1))
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.ui.debounce_ms)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.ui.tick_ms.max(10))
    }
}

/// 初始化全局配置，只有第一次调用生效
pub fn init_config(config: AppConfig) -> &'static AppConfig {
    CONFIG.get_or_init(|| config)
}
