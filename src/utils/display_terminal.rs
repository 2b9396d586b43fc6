//! 터미널 출력 포맷팅 유틸리티
//! 
//! 시작 과정에서 유효 설정 요약을 출력할 때 사용하는 터미널 출력
//! 함수들을 제공합니다. 박스 형태의 제목과 트리 형태의 항목 표시를
//! 시각적으로 표현합니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
/// 
/// Unicode 박스 문자를 사용하여 시각적으로 눈에 띄는 제목을 출력합니다.
/// 텍스트는 자동으로 중앙 정렬됩니다.
/// 
/// # Arguments
/// 
/// * `title` - 출력할 제목 문자열
/// 
/// # Examples
/// 
/// ```rust,ignore
/// use crate::utils::display_terminal::print_boxed_title;
/// 
/// print_boxed_title("Settings Loaded");
/// ```
/// 
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                 Settings Loaded                  ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);  // ^49로 49칸 중앙 정렬
    println!("╚{}╝", border);
}

/// 설정 항목의 값을 표시합니다
/// 
/// 들여쓰기된 트리 구조로 항목 이름과 값을 출력합니다.
/// 
/// # Arguments
/// 
/// * `name` - 항목 이름
/// * `value` - 표시할 값
/// 
/// # Examples
/// 
/// ```rust,ignore
/// use crate::utils::display_terminal::print_sub_task;
/// 
/// print_sub_task("Database", "mysql://db:3306/dmoj");
/// print_sub_task("Cache", "redis://redis:6379/1");
/// ```
/// 
/// Output:
/// ```text
///    ├─ Database: mysql://db:3306/dmoj
///    ├─ Cache: redis://redis:6379/1
/// ```
pub fn print_sub_task(name: &str, value: &str) {
    println!("   ├─ {}: {}", name, value);
}
