//! 저지 사이트 설정 서비스 메인 애플리케이션
//!
//! 플랫폼 시작 시퀀스 중 설정이 존재하게 되는 지점까지를 수행합니다.
//! 프로필별 .env 파일을 로드하고, 로깅을 초기화한 뒤, 불변 설정
//! 레코드를 생성하여 유효 설정 요약을 출력합니다.

use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};

use judge_site_settings::config::env::env_bool;
use judge_site_settings::config::{LoggingConfig, Settings};
use judge_site_settings::utils::display_terminal::{print_boxed_title, print_sub_task};

fn main() {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 저지 사이트 설정 로딩 중...");

    // 설정 레코드는 여기서 한 번 생성되고 이후 불변이다
    let settings = Settings::instance();

    info!("✅ 설정 레코드 생성 완료: {}", settings.site.name);

    print_startup_summary(settings);

    // 디버그 모드에서는 유효 설정 전체를 JSON으로 남긴다 (민감값 제외)
    if settings.security.debug {
        info!("유효 설정(JSON): {}", settings.summary_json());
    }

    // 프로덕션 안전성 점검은 권고 수준이다. 시작을 중단하지 않는다.
    if let Err(e) = settings.security.ensure_production_safe() {
        warn!("⚠️ {}", e);
    }
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
/// 개발환경과 운영환경을 구분하여 설정을 관리합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// # Examples
///
/// ```bash
/// # 개발 환경
/// PROFILE=dev cargo run
///
/// # 운영 환경
/// PROFILE=prod cargo run
/// ```
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// 로깅 설정이 렌더링한 필터 표현식을 기본값으로 사용하며,
/// RUST_LOG 환경변수가 설정된 경우 그 값이 우선합니다.
/// 콘솔 핸들러 레벨은 DEBUG 플래그를 따릅니다.
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 필터 재정의
/// * `DEBUG` - 콘솔 핸들러 레벨 결정 (debug / info)
///
/// # Examples
///
/// ```bash
/// # 전체 debug 모드
/// RUST_LOG=debug cargo run
///
/// # 특정 로거만 조정
/// RUST_LOG=info,judge.bridge=debug cargo run
/// ```
fn init_logging() {
    let logging = LoggingConfig::for_debug(env_bool("DEBUG"));
    env_logger::init_from_env(Env::default().default_filter_or(logging.env_filter()));
}

/// 유효 설정 요약을 터미널에 출력합니다
///
/// 민감값(시크릿 키, 데이터베이스 비밀번호)은 출력하지 않습니다.
///
/// # Arguments
///
/// * `settings` - 출력할 설정 레코드
fn print_startup_summary(settings: &Settings) {
    let database = &settings.database;
    let bridge_judge = settings
        .bridge
        .judge_listen
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let bridge_site = settings
        .bridge
        .site_listen
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    print_boxed_title("⚙️ SITE SETTINGS LOADED");
    print_sub_task(
        "Site",
        &format!("{} ({})", settings.site.name, settings.site.long_name),
    );
    print_sub_task("Debug", &settings.security.debug.to_string());
    print_sub_task("Allowed hosts", &settings.security.allowed_hosts.join(", "));
    print_sub_task(
        "Database",
        &format!(
            "{}://{}:{}/{}",
            database.engine.as_str(),
            database.host,
            database.port,
            database.name
        ),
    );
    print_sub_task("Cache", &settings.cache.location);
    print_sub_task("Task queue broker", &settings.task_queue.broker_url);
    print_sub_task(
        "Static root",
        &settings.static_files.static_root.display().to_string(),
    );
    print_sub_task("Bridge (judge)", &bridge_judge);
    print_sub_task("Bridge (site)", &bridge_site);
    print_sub_task(
        "Full-text search",
        &settings.features.full_text_search.to_string(),
    );
    print_sub_task(
        "Event daemon",
        &settings.features.event_daemon.enabled.to_string(),
    );
    print_sub_task(
        "User data export",
        &settings.features.user_data.download_enabled.to_string(),
    );
    print_sub_task("Log filter", &settings.logging.env_filter());
}
