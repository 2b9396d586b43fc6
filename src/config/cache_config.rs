//! # Redis 캐시 설정 모듈
//!
//! Redis를 백엔드로 하는 캐시 연결 설정과 세션 저장 엔진 선택을
//! 관리합니다. Spring의 `spring.cache.*` / `spring.session.*` 프로퍼티와
//! 유사한 역할입니다.
//!
//! 로딩 시점에 Redis 서버에 연결하지 않습니다. 위치 URI가 프로세스 시작
//! 시 도달 가능해야 캐시 의존 기능이 동작하지만, 그 확인은 캐시
//! 클라이언트가 첫 사용 시점에 수행합니다.
//!
//! ## 위치 URI 형식
//!
//! ```bash
//! REDIS_HOST=redis   # 기본값. 캐시는 redis://redis:6379/1 을 사용
//! ```
//!
//! 캐시는 데이터베이스 `1`을 사용합니다. 작업 큐가 사용하는
//! 데이터베이스 `0`과 분리되어 있습니다
//! ([`task_queue_config`](crate::config::task_queue_config) 참고).

use serde::{Deserialize, Serialize};

use crate::config::env::env_or;
use crate::errors::{AppError, AppResult};

/// 캐시 위치 URI가 사용하는 Redis 데이터베이스 번호
const CACHE_REDIS_DB: u8 = 1;

/// 지원하는 캐시 백엔드 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CacheBackend {
    /// Redis 분산 캐시
    Redis,
}

impl CacheBackend {
    /// 백엔드 종류의 문자열 표현을 반환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheBackend::Redis => "redis",
        }
    }
}

/// 캐시 클라이언트 옵션
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CacheClient {
    /// 기본 클라이언트 (단일 노드)
    Default,
}

/// 세션 저장 엔진 종류
///
/// 세션 데이터를 어디에 보관할지 결정합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEngine {
    /// 캐시를 앞단에 두고 데이터베이스에 기록 (기본값)
    CachedDb,
    /// 캐시에만 보관 (재시작 시 세션 소실)
    Cache,
    /// 데이터베이스에만 보관
    Db,
}

impl SessionEngine {
    /// 문자열에서 SessionEngine을 생성합니다.
    ///
    /// # 인자
    ///
    /// * `s` - 엔진 이름 (대소문자 무관)
    ///
    /// # 반환값
    ///
    /// * `Ok(SessionEngine)` - 유효한 엔진 이름인 경우
    /// * `Err(AppError::ValidationError)` - 지원하지 않는 이름인 경우
    pub fn from_str(s: &str) -> AppResult<Self> {
        match s.to_lowercase().as_str() {
            "cached_db" => Ok(SessionEngine::CachedDb),
            "cache" => Ok(SessionEngine::Cache),
            "db" => Ok(SessionEngine::Db),
            _ => Err(AppError::ValidationError(format!(
                "Unsupported session engine: {}",
                s
            ))),
        }
    }

    /// SessionEngine의 문자열 표현을 반환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionEngine::CachedDb => "cached_db",
            SessionEngine::Cache => "cache",
            SessionEngine::Db => "db",
        }
    }
}

/// 캐시 연결 설정값
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// 캐시 백엔드 종류
    pub backend: CacheBackend,
    /// 캐시 위치 URI (예: `redis://redis:6379/1`)
    pub location: String,
    /// 클라이언트 옵션
    pub client: CacheClient,
    /// 세션 저장 엔진
    pub session_engine: SessionEngine,
}

impl CacheConfig {
    /// 환경 변수에서 캐시 설정을 읽어옵니다.
    ///
    /// ## 환경 변수
    ///
    /// - `REDIS_HOST`: Redis 호스트 (기본값: `redis`)
    pub fn load() -> Self {
        let redis_host = env_or("REDIS_HOST", "redis");

        Self {
            backend: CacheBackend::Redis,
            location: format!("redis://{}:6379/{}", redis_host, CACHE_REDIS_DB),
            client: CacheClient::Default,
            session_engine: SessionEngine::CachedDb,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_support;

    #[test]
    fn test_location_default() {
        let _guard = test_support::lock();
        test_support::remove_var("REDIS_HOST");

        let cache = CacheConfig::load();
        assert_eq!(cache.backend, CacheBackend::Redis);
        assert_eq!(cache.location, "redis://redis:6379/1");
        assert_eq!(cache.client, CacheClient::Default);
    }

    #[test]
    fn test_location_reflects_redis_host() {
        let _guard = test_support::lock();
        test_support::set_var("REDIS_HOST", "prod-redis");

        assert_eq!(CacheConfig::load().location, "redis://prod-redis:6379/1");

        test_support::remove_var("REDIS_HOST");
    }

    #[test]
    fn test_session_engine_default_is_cached_db() {
        let _guard = test_support::lock();
        test_support::remove_var("REDIS_HOST");

        assert_eq!(CacheConfig::load().session_engine, SessionEngine::CachedDb);
    }

    #[test]
    fn test_session_engine_from_string() {
        assert_eq!(
            SessionEngine::from_str("cached_db").unwrap(),
            SessionEngine::CachedDb
        );
        assert_eq!(SessionEngine::from_str("CACHE").unwrap(), SessionEngine::Cache);
        assert_eq!(SessionEngine::from_str("db").unwrap(), SessionEngine::Db);
        assert!(SessionEngine::from_str("file").is_err());
    }

    #[test]
    fn test_session_engine_roundtrip() {
        for engine in [SessionEngine::CachedDb, SessionEngine::Cache, SessionEngine::Db] {
            assert_eq!(SessionEngine::from_str(engine.as_str()).unwrap(), engine);
        }
    }
}
