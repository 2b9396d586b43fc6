//! CDN 자산 URL 설정 모듈
//!
//! 프론트엔드가 참조하는 서드파티 자산의 CDN URL을 관리합니다.
//! 프로토콜 상대(`//`) URL을 사용하여 HTTP/HTTPS 양쪽에서 동작합니다.

/// CDN 자산 URL 설정값 (고정 리터럴)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CdnConfig {
    /// 코드 에디터 자산 베이스 URL
    pub ace_url: String,
    /// jQuery 스크립트 URL
    pub jquery_js: String,
    /// select2 스크립트 URL
    pub select2_js_url: String,
    /// select2 스타일시트 URL
    pub select2_css_url: String,
}

impl CdnConfig {
    /// 고정 리터럴로 CDN 설정을 구성합니다.
    pub fn load() -> Self {
        Self {
            ace_url: "//cdnjs.cloudflare.com/ajax/libs/ace/1.2.3/".to_string(),
            jquery_js: "//cdnjs.cloudflare.com/ajax/libs/jquery/2.2.4/jquery.min.js".to_string(),
            select2_js_url: "//cdnjs.cloudflare.com/ajax/libs/select2/4.0.3/js/select2.min.js"
                .to_string(),
            select2_css_url: "//cdnjs.cloudflare.com/ajax/libs/select2/4.0.3/css/select2.min.css"
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_are_protocol_relative() {
        let cdn = CdnConfig::load();
        for url in [
            &cdn.ace_url,
            &cdn.jquery_js,
            &cdn.select2_js_url,
            &cdn.select2_css_url,
        ] {
            assert!(url.starts_with("//cdnjs.cloudflare.com/"));
        }
    }
}
