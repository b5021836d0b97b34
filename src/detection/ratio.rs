//! 영문 알파벳 비율 계산
//!
//! 마크다운 코드 블록과 URL을 걸러낸 뒤 남은 문자 중 ASCII 알파벳 비율을 구한다.

use regex::Regex;
use std::sync::LazyLock;

/// 코드 블록 경계
const CODE_FENCE: &str = "```";

static HTTP_URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://\S+").unwrap());
static WWW_URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"www\.\S+").unwrap());

/// 코드 블록(``` ... ```) 제거
///
/// 경계 표시도 함께 제거하며, 닫히지 않은 블록은 입력 끝까지로 본다.
pub fn strip_code_blocks(text: &str) -> String {
    let mut filtered = String::with_capacity(text.len());
    let mut in_code_block = false;
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        if let Some(after) = rest.strip_prefix(CODE_FENCE) {
            in_code_block = !in_code_block;
            rest = after;
            continue;
        }
        if !in_code_block {
            filtered.push(c);
        }
        rest = &rest[c.len_utf8()..];
    }

    filtered
}

/// URL(http://, https://, www.) 제거
pub fn strip_urls(text: &str) -> String {
    let without_http = HTTP_URL.replace_all(text, "");
    WWW_URL.replace_all(&without_http, "").into_owned()
}

/// 코드 블록과 URL을 제외한 문자 중 영문 알파벳 비율 (0.0 ~ 1.0)
/// 남은 문자가 없으면 0.0
pub fn alphabetic_ratio(text: &str) -> f64 {
    let filtered = strip_urls(&strip_code_blocks(text));

    let mut total = 0usize;
    let mut alphabetic = 0usize;
    for c in filtered.chars() {
        total += 1;
        if c.is_ascii_alphabetic() {
            alphabetic += 1;
        }
    }

    if total == 0 {
        return 0.0;
    }

    alphabetic as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_blocks() {
        assert_eq!(strip_code_blocks("a```code```b"), "ab");
        assert_eq!(strip_code_blocks("```x``` y ```z```"), " y ");
        // 닫히지 않은 블록은 끝까지
        assert_eq!(strip_code_blocks("keep```drop"), "keep");
        assert_eq!(strip_code_blocks("한글 ```abc``` 끝"), "한글  끝");
        assert_eq!(strip_code_blocks("no fences"), "no fences");
    }

    #[test]
    fn test_strip_urls() {
        assert_eq!(strip_urls("see https://example.com/test now"), "see  now");
        assert_eq!(strip_urls("go www.example.com"), "go ");
        assert_eq!(strip_urls("http://a.b"), "");
        // www 뒤에 점이 없으면 URL 아님
        assert_eq!(strip_urls("wwwx"), "wwwx");
    }

    #[test]
    fn test_alphabetic_ratio() {
        assert_eq!(alphabetic_ratio(""), 0.0);
        assert_eq!(alphabetic_ratio("abcd"), 1.0);
        assert_eq!(alphabetic_ratio("ab12"), 0.5);
        assert_eq!(alphabetic_ratio("안녕"), 0.0);
        assert!((alphabetic_ratio("dkssud 안녕") - 6.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_ratio_ignores_code_blocks() {
        assert_eq!(
            alphabetic_ratio("```abc123``` 한글"),
            alphabetic_ratio(" 한글")
        );
    }

    #[test]
    fn test_ratio_ignores_urls() {
        assert_eq!(
            alphabetic_ratio("see https://example.com/test now"),
            alphabetic_ratio("see  now")
        );
        assert_eq!(alphabetic_ratio("https://example.com"), 0.0);
    }

    #[test]
    fn test_non_ascii_letters_not_counted() {
        assert_eq!(alphabetic_ratio("éé"), 0.0);
    }
}
