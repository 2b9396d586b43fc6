//! # 로깅 설정 모듈
//!
//! 로깅 하위 시스템의 선언적 구성(포맷터, 핸들러, 로거 매핑)을 관리하는
//! 모듈입니다. Spring Boot의 `logging.level.*` 프로퍼티 트리와 유사한
//! 역할을 수행하며, 레벨 비교와 `env_logger` 필터 표현식 렌더링을
//! 제공합니다.
//!
//! ## 레벨 전순서
//!
//! 로거 레벨은 방출 시점에 참조되는 전순서(total order)입니다:
//!
//! ```text
//! Error > Warning > Info > Debug
//! ```
//!
//! 레벨 `L`로 구성된 로거는 `L` 이상의 레코드만 방출합니다.
//! 예를 들어 `Info` 로거는 `Error` 레코드를 방출하고 `Debug` 레코드를
//! 버립니다.
//!
//! ## 기본 로거 매핑
//!
//! | 로거 이름 | 레벨 | 전파 |
//! |-----------|------|------|
//! | `site.request` | Error | 아니오 |
//! | `judge.bridge` | Info | 예 |
//! | (루트) | Info | 예 |
//!
//! 콘솔 핸들러의 레벨은 디버그 플래그를 따릅니다.
//! 디버그 모드에서는 `Debug`, 아니면 `Info`입니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{LogLevel, LoggingConfig};
//!
//! let logging = LoggingConfig::for_debug(false);
//!
//! // env_logger 초기화에 사용할 필터 표현식
//! // "info,site.request=error,judge.bridge=info"
//! let filter = logging.env_filter();
//!
//! // 방출 여부 판단
//! let root = logging.root().unwrap();
//! assert!(root.should_emit(LogLevel::Error));
//! assert!(!root.should_emit(LogLevel::Debug));
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// 로그 레벨
///
/// 선언 순서가 곧 전순서입니다 (`Debug < Info < Warning < Error`).
/// `serde`를 통해 JSON 직렬화/역직렬화를 지원하므로 설정 요약 출력이나
/// 관리 API 응답에 사용할 수 있습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    /// 개발 진단용 상세 로그
    Debug,
    /// 정상 동작 기록
    Info,
    /// 잠재적 문제 경고
    Warning,
    /// 동작 실패 보고
    Error,
}

impl LogLevel {
    /// 문자열에서 LogLevel을 생성합니다.
    ///
    /// # 인자
    ///
    /// * `s` - 레벨 이름 (대소문자 무관)
    ///
    /// # 반환값
    ///
    /// * `Ok(LogLevel)` - 유효한 레벨 이름인 경우
    /// * `Err(AppError::ValidationError)` - 지원하지 않는 이름인 경우
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// use crate::config::LogLevel;
    ///
    /// assert_eq!(LogLevel::from_str("ERROR")?, LogLevel::Error);
    /// assert!(LogLevel::from_str("chatty").is_err());
    /// ```
    pub fn from_str(s: &str) -> AppResult<Self> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warning" | "warn" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            _ => Err(AppError::ValidationError(format!(
                "Unsupported log level: {}",
                s
            ))),
        }
    }

    /// `env_logger` 필터 표현식에서 사용하는 소문자 표현을 반환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// 로그 레코드 포맷터 정의
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterConfig {
    /// 포맷터 이름 (핸들러가 참조)
    pub name: String,
    /// 레코드 렌더링 패턴
    pub pattern: String,
}

/// 로그 출력 핸들러 정의
///
/// 현재는 콘솔(표준 에러 스트림) 핸들러만 사용합니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerConfig {
    /// 핸들러 이름 (로거가 참조)
    pub name: String,
    /// 이 핸들러가 받는 최소 레벨
    pub level: LogLevel,
    /// 사용할 포맷터 이름
    pub formatter: String,
}

/// 이름 있는 로거 정의
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// 로거 이름 (빈 문자열은 루트 로거)
    pub name: String,
    /// 레코드를 전달할 핸들러 이름 목록
    pub handlers: Vec<String>,
    /// 방출 최소 레벨
    pub level: LogLevel,
    /// 상위 로거로의 전파 여부
    pub propagate: bool,
}

impl LoggerConfig {
    /// 주어진 레벨의 레코드를 이 로거가 방출하는지 판단합니다.
    ///
    /// 레벨 전순서를 참조합니다. 구성된 레벨 이상의 레코드만 방출됩니다.
    pub fn should_emit(&self, level: LogLevel) -> bool {
        level >= self.level
    }
}

/// 로깅 하위 시스템 선언적 구성
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// 기존 로거 비활성화 여부
    pub disable_existing_loggers: bool,
    /// 포맷터 정의 목록
    pub formatters: Vec<FormatterConfig>,
    /// 핸들러 정의 목록
    pub handlers: Vec<HandlerConfig>,
    /// 로거 매핑 (마지막의 빈 이름 항목이 루트 로거)
    pub loggers: Vec<LoggerConfig>,
}

impl LoggingConfig {
    /// 디버그 플래그에 맞는 로깅 구성을 생성합니다.
    ///
    /// 콘솔 핸들러의 레벨은 디버그 모드에서 `Debug`, 아니면 `Info`입니다.
    /// 로거 매핑 자체는 디버그 플래그와 무관하게 고정입니다.
    pub fn for_debug(debug: bool) -> Self {
        let console_level = if debug { LogLevel::Debug } else { LogLevel::Info };

        Self {
            disable_existing_loggers: false,
            formatters: vec![FormatterConfig {
                name: "verbose".to_string(),
                pattern: "{level} {timestamp} {module} {message}".to_string(),
            }],
            handlers: vec![HandlerConfig {
                name: "console".to_string(),
                level: console_level,
                formatter: "verbose".to_string(),
            }],
            loggers: vec![
                LoggerConfig {
                    name: "site.request".to_string(),
                    handlers: vec!["console".to_string()],
                    level: LogLevel::Error,
                    propagate: false,
                },
                LoggerConfig {
                    name: "judge.bridge".to_string(),
                    handlers: vec!["console".to_string()],
                    level: LogLevel::Info,
                    propagate: true,
                },
                LoggerConfig {
                    name: String::new(),
                    handlers: vec!["console".to_string()],
                    level: LogLevel::Info,
                    propagate: true,
                },
            ],
        }
    }

    /// 루트 로거(빈 이름)를 찾습니다.
    pub fn root(&self) -> Option<&LoggerConfig> {
        self.loggers.iter().find(|logger| logger.name.is_empty())
    }

    /// `env_logger` 초기화에 사용할 필터 표현식을 렌더링합니다.
    ///
    /// 루트 레벨이 먼저 오고, 이름 있는 로거들이 선언 순서대로
    /// `이름=레벨` 형태로 이어집니다.
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// let logging = LoggingConfig::for_debug(false);
    /// assert_eq!(
    ///     logging.env_filter(),
    ///     "info,site.request=error,judge.bridge=info"
    /// );
    /// ```
    pub fn env_filter(&self) -> String {
        let root_level = self.root().map(|logger| logger.level).unwrap_or(LogLevel::Info);

        let mut parts = vec![root_level.as_str().to_string()];
        for logger in &self.loggers {
            if !logger.name.is_empty() {
                parts.push(format!("{}={}", logger.name, logger.level.as_str()));
            }
        }
        parts.join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_total_order() {
        assert!(LogLevel::Error > LogLevel::Warning);
        assert!(LogLevel::Warning > LogLevel::Info);
        assert!(LogLevel::Info > LogLevel::Debug);
    }

    #[test]
    fn test_level_from_string() {
        assert_eq!(LogLevel::from_str("debug").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("INFO").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("warn").unwrap(), LogLevel::Warning);
        assert_eq!(LogLevel::from_str("Error").unwrap(), LogLevel::Error);
        assert!(LogLevel::from_str("chatty").is_err());
    }

    #[test]
    fn test_level_serialization() {
        // JSON 직렬화/역직렬화 테스트
        let level = LogLevel::Error;
        let json = serde_json::to_string(&level).unwrap();
        let deserialized: LogLevel = serde_json::from_str(&json).unwrap();
        assert_eq!(level, deserialized);
    }

    #[test]
    fn test_should_emit_consults_order() {
        let logging = LoggingConfig::for_debug(false);
        let root = logging.root().unwrap();

        assert!(root.should_emit(LogLevel::Error));
        assert!(root.should_emit(LogLevel::Info));
        assert!(!root.should_emit(LogLevel::Debug));

        let request_logger = &logging.loggers[0];
        assert_eq!(request_logger.name, "site.request");
        assert!(request_logger.should_emit(LogLevel::Error));
        assert!(!request_logger.should_emit(LogLevel::Warning));
    }

    #[test]
    fn test_console_handler_level_follows_debug_flag() {
        assert_eq!(LoggingConfig::for_debug(true).handlers[0].level, LogLevel::Debug);
        assert_eq!(LoggingConfig::for_debug(false).handlers[0].level, LogLevel::Info);
    }

    #[test]
    fn test_logger_mapping() {
        let logging = LoggingConfig::for_debug(false);
        assert!(!logging.disable_existing_loggers);

        let request_logger = &logging.loggers[0];
        assert_eq!(request_logger.level, LogLevel::Error);
        assert!(!request_logger.propagate);

        let bridge_logger = &logging.loggers[1];
        assert_eq!(bridge_logger.name, "judge.bridge");
        assert_eq!(bridge_logger.level, LogLevel::Info);
        assert!(bridge_logger.propagate);

        let root = logging.root().unwrap();
        assert_eq!(root.level, LogLevel::Info);
    }

    #[test]
    fn test_env_filter_rendering() {
        let logging = LoggingConfig::for_debug(false);
        assert_eq!(
            logging.env_filter(),
            "info,site.request=error,judge.bridge=info"
        );
    }
}
