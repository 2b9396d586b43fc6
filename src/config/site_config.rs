//! 사이트 식별 정보 및 국제화 설정 모듈
//!
//! 사이트 이름, 긴 이름, 관리자 연락 이메일과 고정 국제화 블록을
//! 관리합니다.
//!
//! # 환경 변수 설정
//!
//! ```bash
//! export SITE_NAME="DMOJ"
//! export SITE_LONG_NAME="DMOJ: Modern Online Judge"
//! export SITE_ADMIN_EMAIL="admin@example.com"
//! ```

use crate::config::env::env_or;

/// 국제화 설정값 (고정 리터럴)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct I18nConfig {
    /// 기본 언어 코드
    pub language_code: String,
    /// 신규 사용자의 기본 시간대
    pub default_user_time_zone: String,
    /// 번역 활성화 여부
    pub use_i18n: bool,
    /// 지역화 포맷 활성화 여부
    pub use_l10n: bool,
    /// 시간대 인식 날짜/시간 활성화 여부
    pub use_tz: bool,
}

/// 사이트 식별 정보 설정값
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// 사이트 짧은 이름
    pub name: String,
    /// 사이트 전체 이름
    pub long_name: String,
    /// 사이트 관리자 연락 이메일
    pub admin_email: String,
    /// 국제화 설정
    pub i18n: I18nConfig,
}

impl SiteConfig {
    /// 환경 변수에서 사이트 식별 정보를 읽어옵니다.
    ///
    /// ## 환경 변수
    ///
    /// - `SITE_NAME` (기본값: `DMOJ`)
    /// - `SITE_LONG_NAME` (기본값: `DMOJ: Modern Online Judge`)
    /// - `SITE_ADMIN_EMAIL` (기본값: `admin@example.com`)
    pub fn load() -> Self {
        Self {
            name: env_or("SITE_NAME", "DMOJ"),
            long_name: env_or("SITE_LONG_NAME", "DMOJ: Modern Online Judge"),
            admin_email: env_or("SITE_ADMIN_EMAIL", "admin@example.com"),
            i18n: I18nConfig {
                language_code: "en-ca".to_string(),
                default_user_time_zone: "America/Toronto".to_string(),
                use_i18n: true,
                use_l10n: true,
                use_tz: true,
            },
        }
    }
}
