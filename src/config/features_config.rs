//! # 기능 플래그 설정 모듈
//!
//! 선택적 하위 시스템(전문 검색, 이벤트 데몬, PDF 생성, 사용자 데이터
//! 내보내기, 수식 렌더링)을 켜고 끄는 플래그들을 관리하는 모듈입니다.
//!
//! 각 플래그는 서로 독립적인 하위 시스템을 게이트합니다. 어떤 플래그도
//! 조용히 무시되지 않습니다. 모든 플래그는 타입화된 필드로 노출되고
//! 시작 요약에 보고됩니다.
//!
//! ## 하위 시스템 개요
//!
//! | 플래그 그룹 | 게이트하는 하위 시스템 |
//! |-------------|------------------------|
//! | `full_text_search` | 문제/제출 전문 검색 |
//! | `event_daemon` | WebSocket 실시간 알림 릴레이 |
//! | `pdf` | 문제 지문 PDF 생성 |
//! | `user_data` | 사용자 데이터 내보내기 및 재다운로드 제한 |
//! | `mathoid_url` / `texoid_url` | 수식/TeX 렌더링 서비스 (비활성) |

use std::path::PathBuf;

use chrono::Duration;

/// 이벤트 데몬 연결 설정값
///
/// WebSocket 알림 릴레이의 엔드포인트 URL입니다. 로딩 시점에 연결하지
/// 않으며, 이벤트 발행자가 첫 발행 시점에 도달 가능성을 확인합니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDaemonConfig {
    /// 이벤트 데몬 사용 여부
    pub enabled: bool,
    /// 이벤트 게시(post) 엔드포인트 URL
    pub post_url: String,
    /// 이벤트 수신(get) 엔드포인트 URL
    pub get_url: String,
    /// 폴링 폴백 경로
    pub poll_path: String,
}

/// PDF 생성 설정값
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfConfig {
    /// 브라우저 자동화 기반 PDF 생성 사용 여부
    pub use_selenium: bool,
    /// 생성된 문제 PDF 캐시 디렉터리
    pub cache_dir: PathBuf,
}

/// 사용자 데이터 내보내기 설정값
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDataConfig {
    /// 사용자 데이터 다운로드 허용 여부
    pub download_enabled: bool,
    /// 생성된 아카이브 캐시 디렉터리
    pub cache_dir: PathBuf,
    /// 웹 서버가 내부적으로 서빙하는 경로
    pub internal_dir: PathBuf,
    /// 재다운로드 요청 간 최소 간격
    pub download_ratelimit: Duration,
}

/// 선택적 하위 시스템 기능 플래그 모음
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturesConfig {
    /// 전문 검색 활성화 여부
    pub full_text_search: bool,
    /// 이벤트 데몬 설정
    pub event_daemon: EventDaemonConfig,
    /// PDF 생성 설정
    pub pdf: PdfConfig,
    /// 문제 데이터 루트 디렉터리
    pub problem_data_root: PathBuf,
    /// 사용자 데이터 내보내기 설정
    pub user_data: UserDataConfig,
    /// 수식 렌더링 서비스 URL (비활성: `None`)
    pub mathoid_url: Option<String>,
    /// TeX 렌더링 서비스 URL (비활성: `None`)
    pub texoid_url: Option<String>,
}

impl FeaturesConfig {
    /// 고정 리터럴로 기능 플래그를 구성합니다.
    ///
    /// 수식/TeX 렌더링 서비스는 배포에 포함되어 있지 않으므로 `None`으로
    /// 고정됩니다. 플래그를 생략하는 대신 명시적으로 비활성 상태를
    /// 드러냅니다.
    pub fn load() -> Self {
        Self {
            full_text_search: true,
            event_daemon: EventDaemonConfig {
                enabled: true,
                post_url: "ws://wsevent:15101/".to_string(),
                get_url: "ws://wsevent:15100/".to_string(),
                poll_path: "/channels/".to_string(),
            },
            pdf: PdfConfig {
                use_selenium: false,
                cache_dir: PathBuf::from("/site/pdfcache"),
            },
            problem_data_root: PathBuf::from("/problems"),
            user_data: UserDataConfig {
                download_enabled: true,
                cache_dir: PathBuf::from("/site/datacache"),
                internal_dir: PathBuf::from("/datacache"),
                download_ratelimit: Duration::days(1),
            },
            mathoid_url: None,
            texoid_url: None,
        }
    }
}
