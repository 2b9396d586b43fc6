//! # 통합 설정 레코드 모듈
//!
//! 모든 설정 섹션을 하나의 불변 레코드로 묶는 모듈입니다.
//! Spring의 `Environment` + `@ConfigurationProperties` 집합체와 유사한
//! 역할을 수행합니다.
//!
//! ## 생명주기
//!
//! 설정 레코드는 프로세스 시작 시 환경 변수와 리터럴로부터 한 번
//! 생성되고, 프로세스 수명 동안 불변이며, 저장되거나 변경되지 않습니다.
//! 순수한 시작 입력이지 런타임 상태가 아닙니다.
//!
//! ## 접근 방식
//!
//! 1. **싱글톤 접근** (권장): [`Settings::instance`]는 프로세스 전역
//!    인스턴스를 반환합니다. 첫 접근 시점에 한 번만 생성되며, 동시 첫
//!    접근에도 정확히 한 번만 생성됨이 보장됩니다.
//! 2. **직접 생성**: [`Settings::load`]는 호출 시점의 환경에서 새
//!    레코드를 만듭니다. 테스트에서 사용합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::Settings;
//!
//! let settings = Settings::instance();
//! println!("Site: {}", settings.site.name);
//! println!("Cache: {}", settings.cache.location);
//! ```

use once_cell::sync::Lazy;
use serde_json::json;

use crate::config::bridge_config::BridgeConfig;
use crate::config::cache_config::CacheConfig;
use crate::config::cdn_config::CdnConfig;
use crate::config::database_config::DatabaseConfig;
use crate::config::email_config::EmailConfig;
use crate::config::features_config::FeaturesConfig;
use crate::config::logging_config::LoggingConfig;
use crate::config::security_config::SecurityConfig;
use crate::config::site_config::SiteConfig;
use crate::config::static_config::StaticFilesConfig;
use crate::config::task_queue_config::TaskQueueConfig;

/// 프로세스 전역 설정 인스턴스
static SETTINGS: Lazy<Settings> = Lazy::new(Settings::load);

/// 배포 설정 전체를 담는 불변 레코드
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// 보안 설정
    pub security: SecurityConfig,
    /// 데이터베이스 연결 설정
    pub database: DatabaseConfig,
    /// 캐시 연결 설정
    pub cache: CacheConfig,
    /// 작업 큐 설정
    pub task_queue: TaskQueueConfig,
    /// 사이트 식별 정보 및 국제화 설정
    pub site: SiteConfig,
    /// 이메일 설정
    pub email: EmailConfig,
    /// 정적 자산 설정
    pub static_files: StaticFilesConfig,
    /// 저지 브리지 리스너 설정
    pub bridge: BridgeConfig,
    /// 기능 플래그 설정
    pub features: FeaturesConfig,
    /// CDN 자산 URL 설정
    pub cdn: CdnConfig,
    /// 로깅 설정
    pub logging: LoggingConfig,
}

impl Settings {
    /// 현재 환경에서 설정 레코드를 생성합니다.
    ///
    /// 각 섹션이 자신의 환경 변수를 읽고 기본값을 적용합니다.
    /// 로딩은 실패하지 않으며, 동일한 환경 입력은 동일한 레코드를
    /// 만들어 냅니다.
    pub fn load() -> Self {
        let security = SecurityConfig::load();
        // 콘솔 핸들러 레벨은 디버그 플래그를 따른다
        let logging = LoggingConfig::for_debug(security.debug);

        Self {
            security,
            database: DatabaseConfig::load(),
            cache: CacheConfig::load(),
            task_queue: TaskQueueConfig::load(),
            site: SiteConfig::load(),
            email: EmailConfig::load(),
            static_files: StaticFilesConfig::load(),
            bridge: BridgeConfig::load(),
            features: FeaturesConfig::load(),
            cdn: CdnConfig::load(),
            logging,
        }
    }

    /// 프로세스 전역 설정 인스턴스를 반환합니다.
    ///
    /// 첫 호출 시점에 [`Settings::load`]로 생성되며, 이후 호출은 항상
    /// 동일한 인스턴스를 반환합니다.
    pub fn instance() -> &'static Settings {
        &SETTINGS
    }

    /// 민감값을 제외한 유효 설정 요약을 JSON으로 렌더링합니다.
    ///
    /// 시크릿 키와 데이터베이스 비밀번호는 포함하지 않습니다.
    /// 시작 로그와 진단 출력에 사용합니다.
    pub fn summary_json(&self) -> serde_json::Value {
        json!({
            "site": {
                "name": self.site.name,
                "long_name": self.site.long_name,
                "admin_email": self.site.admin_email,
            },
            "security": {
                "debug": self.security.debug,
                "allowed_hosts": self.security.allowed_hosts,
                "placeholder_secret": self.security.is_placeholder_secret(),
            },
            "database": {
                "engine": self.database.engine,
                "name": self.database.name,
                "host": self.database.host,
                "port": self.database.port,
            },
            "cache": {
                "backend": self.cache.backend,
                "location": self.cache.location,
                "session_engine": self.cache.session_engine,
            },
            "task_queue": {
                "broker_url": self.task_queue.broker_url,
                "result_backend": self.task_queue.result_backend,
            },
            "features": {
                "full_text_search": self.features.full_text_search,
                "event_daemon": self.features.event_daemon.enabled,
                "pdf_selenium": self.features.pdf.use_selenium,
                "user_data_download": self.features.user_data.download_enabled,
            },
            "logging": {
                "env_filter": self.logging.env_filter(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_support;

    /// 로더가 읽는 모든 환경 변수를 제거한다
    fn clear_all_env() {
        for name in [
            "SECRET_KEY",
            "DEBUG",
            "ALLOWED_HOSTS",
            "MYSQL_DATABASE",
            "MYSQL_USER",
            "MYSQL_PASSWORD",
            "MYSQL_HOST",
            "MYSQL_PORT",
            "REDIS_HOST",
            "ADMIN_EMAIL",
            "SITE_NAME",
            "SITE_LONG_NAME",
            "SITE_ADMIN_EMAIL",
        ] {
            test_support::remove_var(name);
        }
    }

    #[test]
    fn test_identical_environment_yields_identical_record() {
        let _guard = test_support::lock();
        clear_all_env();
        test_support::set_var("MYSQL_HOST", "prod-db");
        test_support::set_var("REDIS_HOST", "prod-redis");

        let first = Settings::load();
        let second = Settings::load();
        assert_eq!(first, second);

        clear_all_env();
    }

    #[test]
    fn test_instance_returns_same_record() {
        let first = Settings::instance();
        let second = Settings::instance();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_logging_follows_debug_flag() {
        let _guard = test_support::lock();
        clear_all_env();

        test_support::set_var("DEBUG", "true");
        let settings = Settings::load();
        assert_eq!(
            settings.logging,
            crate::config::LoggingConfig::for_debug(true)
        );

        clear_all_env();
    }

    #[test]
    fn test_summary_json_excludes_secrets() {
        let _guard = test_support::lock();
        clear_all_env();
        test_support::set_var("SECRET_KEY", "super-secret-value");
        test_support::set_var("MYSQL_PASSWORD", "db-password");

        let summary = Settings::load().summary_json().to_string();
        assert!(!summary.contains("super-secret-value"));
        assert!(!summary.contains("db-password"));
        assert!(summary.contains("\"host\":\"db\""));

        clear_all_env();
    }
}
