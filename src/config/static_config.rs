//! 정적 자산 파이프라인 설정 모듈
//!
//! 정적 파일/미디어 경로와 압축 파이프라인 옵션을 관리합니다.
//! 모든 값은 고정 리터럴이며 환경 변수의 영향을 받지 않습니다.
//!
//! 압축 필터 체인은 순서가 있습니다. CSS 필터는 나열된 순서대로
//! 적용됩니다 (URL 절대화 → 최소화). 순서를 바꾸면 최소화된 출력의
//! 상대 URL이 깨집니다.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// CSS 자산에 적용되는 압축 필터
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CssFilter {
    /// 상대 URL을 절대 URL로 재작성
    AbsoluteUrls,
    /// 공백/주석 제거 최소화
    Minify,
}

impl CssFilter {
    /// 필터의 문자열 표현을 반환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            CssFilter::AbsoluteUrls => "absolute_urls",
            CssFilter::Minify => "minify",
        }
    }
}

/// JS 자산에 적용되는 압축 필터
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JsFilter {
    /// 공백/주석 제거 최소화
    Minify,
}

impl JsFilter {
    /// 필터의 문자열 표현을 반환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            JsFilter::Minify => "minify",
        }
    }
}

/// 압축 결과물 저장 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompressStorage {
    /// gzip 사본을 함께 기록하는 저장소
    Gzip,
}

/// 정적 자산 압축 파이프라인 설정값
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressConfig {
    /// 정적 루트 하위의 압축 결과물 디렉터리
    pub output_dir: String,
    /// CSS 필터 체인 (나열 순서대로 적용)
    pub css_filters: Vec<CssFilter>,
    /// JS 필터 체인 (나열 순서대로 적용)
    pub js_filters: Vec<JsFilter>,
    /// 결과물 저장 방식
    pub storage: CompressStorage,
    /// 정적 파일 탐색 체인에 압축기를 포함할지 여부
    pub enabled_in_finders: bool,
}

/// 정적 자산 경로 설정값
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticFilesConfig {
    /// 수집된 정적 파일의 루트 디렉터리
    pub static_root: PathBuf,
    /// 정적 파일이 서빙되는 URL 접두사
    pub static_url: String,
    /// 업로드 미디어의 루트 디렉터리
    pub media_root: PathBuf,
    /// 미디어가 서빙되는 URL 접두사
    pub media_url: String,
    /// 압축 파이프라인 설정
    pub compress: CompressConfig,
}

impl StaticFilesConfig {
    /// 고정 리터럴로 정적 자산 설정을 구성합니다.
    pub fn load() -> Self {
        Self {
            static_root: PathBuf::from("/site/static_root"),
            static_url: "/static/".to_string(),
            media_root: PathBuf::from("/site/media"),
            media_url: "/media/".to_string(),
            compress: CompressConfig {
                output_dir: "cache".to_string(),
                css_filters: vec![CssFilter::AbsoluteUrls, CssFilter::Minify],
                js_filters: vec![JsFilter::Minify],
                storage: CompressStorage::Gzip,
                enabled_in_finders: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_paths() {
        let assets = StaticFilesConfig::load();
        assert_eq!(assets.static_root, PathBuf::from("/site/static_root"));
        assert_eq!(assets.static_url, "/static/");
        assert_eq!(assets.media_root, PathBuf::from("/site/media"));
        assert_eq!(assets.media_url, "/media/");
    }

    #[test]
    fn test_css_filter_chain_order() {
        let compress = StaticFilesConfig::load().compress;

        // URL 절대화가 최소화보다 먼저 적용되어야 한다
        assert_eq!(
            compress.css_filters,
            vec![CssFilter::AbsoluteUrls, CssFilter::Minify]
        );
        assert_eq!(compress.js_filters, vec![JsFilter::Minify]);
    }

    #[test]
    fn test_compress_options() {
        let compress = StaticFilesConfig::load().compress;
        assert_eq!(compress.output_dir, "cache");
        assert_eq!(compress.storage, CompressStorage::Gzip);
        assert!(compress.enabled_in_finders);
    }
}
