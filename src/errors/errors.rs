//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 설정 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`를 사용하여 타입 안전하고 일관된 에러 처리를 제공합니다.
//!
//! 설정 로딩 자체는 항상 성공합니다. 환경 변수가 없거나 값이 비어 있으면
//! 기본값으로 대체되기 때문입니다. 에러는 설정값의 해석(알 수 없는 열거형
//! 문자열)과 프로덕션 안전성 점검에서만 발생합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! fn check_secret(settings: &Settings) -> Result<(), AppError> {
//!     settings.security.ensure_production_safe()?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 설정 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 설정값 해석 에러 (알 수 없는 열거형 문자열 등)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 프로덕션 환경에 부적합한 설정값 에러
    #[error("Insecure configuration: {0}")]
    InsecureConfig(String),
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_message() {
        let error = AppError::ValidationError("Unsupported log level: chatty".to_string());
        assert_eq!(
            error.to_string(),
            "Validation error: Unsupported log level: chatty"
        );
    }

    #[test]
    fn test_insecure_config_error_message() {
        let error = AppError::InsecureConfig("placeholder secret key".to_string());
        assert!(error.to_string().starts_with("Insecure configuration:"));
    }
}
