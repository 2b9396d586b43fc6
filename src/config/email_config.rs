//! # 이메일 설정 모듈
//!
//! 이메일 발송 백엔드 선택, 관리자 명단, 서버 발신자 주소를 관리하는
//! 모듈입니다. Spring의 `spring.mail.*` 프로퍼티와 유사한 역할을
//! 수행합니다.
//!
//! ## 지원하는 백엔드
//!
//! 1. **콘솔 백엔드** (기본값): 메시지를 프로세스 로그에 기록합니다.
//!    SMTP 인프라 없이 배포를 검증할 때 사용합니다.
//! 2. **SMTP 백엔드**: 실제 메일 서버로 발송합니다 (향후 전환용).
//!
//! ## 환경 변수 설정
//!
//! ```bash
//! export ADMIN_EMAIL="admin@example.com"  # 에러 통지를 받을 관리자
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::env::env_or;
use crate::errors::{AppError, AppResult};

/// 지원하는 이메일 발송 백엔드
///
/// `serde`를 통해 JSON 직렬화/역직렬화를 지원하므로 설정 요약 출력이나
/// 관리 API 응답에 사용할 수 있습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmailBackend {
    /// 메시지를 프로세스 로그에 기록 (기본값)
    Console,
    /// SMTP 서버로 발송 (향후 전환용)
    Smtp,
}

impl EmailBackend {
    /// 문자열에서 EmailBackend를 생성합니다.
    ///
    /// # 인자
    ///
    /// * `s` - 백엔드 이름 (대소문자 무관)
    ///
    /// # 반환값
    ///
    /// * `Ok(EmailBackend)` - 유효한 백엔드인 경우
    /// * `Err(AppError::ValidationError)` - 지원하지 않는 백엔드인 경우
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// use crate::config::EmailBackend;
    ///
    /// assert_eq!(EmailBackend::from_str("console")?, EmailBackend::Console);
    /// assert!(EmailBackend::from_str("carrier-pigeon").is_err());
    /// ```
    pub fn from_str(s: &str) -> AppResult<Self> {
        match s.to_lowercase().as_str() {
            "console" => Ok(EmailBackend::Console),
            "smtp" => Ok(EmailBackend::Smtp),
            _ => Err(AppError::ValidationError(format!(
                "Unsupported email backend: {}",
                s
            ))),
        }
    }

    /// EmailBackend의 문자열 표현을 반환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmailBackend::Console => "console",
            EmailBackend::Smtp => "smtp",
        }
    }
}

/// 에러 통지를 받는 관리자 항목
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admin {
    /// 관리자 표시 이름
    pub name: String,
    /// 관리자 이메일 주소
    pub email: String,
}

/// 이메일 설정값
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    /// 발송 백엔드
    pub backend: EmailBackend,
    /// 에러 통지를 받는 관리자 명단
    pub admins: Vec<Admin>,
    /// 서버 발신자 주소
    pub server_email: String,
    /// 가입을 거부할 메일 제공자 도메인 집합
    pub bad_mail_providers: HashSet<String>,
}

impl EmailConfig {
    /// 환경 변수에서 이메일 설정을 읽어옵니다.
    ///
    /// ## 환경 변수
    ///
    /// - `ADMIN_EMAIL`: 관리자 이메일 (기본값: `admin@example.com`)
    pub fn load() -> Self {
        Self {
            backend: EmailBackend::Console,
            admins: vec![Admin {
                name: "Admin".to_string(),
                email: env_or("ADMIN_EMAIL", "admin@example.com"),
            }],
            server_email: "DMOJ <noreply@dmoj.ca>".to_string(),
            bad_mail_providers: HashSet::new(),
        }
    }
}
