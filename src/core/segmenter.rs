//! 혼합 문자열 구간 분리
//!
//! 입력을 한글 음절 구간, 영문(그 밖의 문자) 구간, 기타 문자로 나누고
//! 구간마다 알맞은 변환을 적용해 원래 순서대로 이어 붙인다.

use crate::core::hangul_fsm::HangulFsm;
use crate::core::keymap::korean_to_eng_upper;
use crate::core::unicode::is_hangul_syllable;

/// 문자 구분
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptClass {
    /// 완성형 한글 음절
    Hangul,
    /// 한글 음절이 아닌 문자 (영문 등)
    Latin,
    /// 숫자, 공백, 기호 등
    Other,
}

impl ScriptClass {
    pub fn of(c: char) -> Self {
        if !c.is_alphabetic() {
            ScriptClass::Other
        } else if is_hangul_syllable(c) {
            ScriptClass::Hangul
        } else {
            ScriptClass::Latin
        }
    }
}

/// 같은 구분이 이어지는 최대 구간
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run<'a> {
    pub class: ScriptClass,
    pub text: &'a str,
}

impl Run<'_> {
    /// 구간 변환: 영문 -> 한글, 한글 -> 대문자 키, 기타 -> 그대로
    pub fn convert(&self) -> String {
        match self.class {
            ScriptClass::Latin => HangulFsm::new(self.text).run(),
            ScriptClass::Hangul => korean_to_eng_upper(self.text),
            ScriptClass::Other => self.text.to_string(),
        }
    }
}

/// 문자열을 구간으로 분리
///
/// 기타 문자는 한 글자씩 독립 구간이 된다.
/// 모든 구간을 이어 붙이면 원래 문자열과 같다.
pub fn split_runs(text: &str) -> Vec<Run<'_>> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut current: Option<ScriptClass> = None;

    for (i, c) in text.char_indices() {
        let class = ScriptClass::of(c);
        if current == Some(class) && class != ScriptClass::Other {
            continue;
        }
        if let Some(prev) = current {
            runs.push(Run {
                class: prev,
                text: &text[start..i],
            });
        }
        start = i;
        current = Some(class);
    }

    if let Some(prev) = current {
        runs.push(Run {
            class: prev,
            text: &text[start..],
        });
    }

    runs
}

/// 혼합 문자열 변환
pub fn convert_runs(text: &str) -> String {
    let mut output = String::with_capacity(text.len() * 2);
    for run in split_runs(text) {
        output.push_str(&run.convert());
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_class() {
        assert_eq!(ScriptClass::of('a'), ScriptClass::Latin);
        assert_eq!(ScriptClass::of('Z'), ScriptClass::Latin);
        assert_eq!(ScriptClass::of('가'), ScriptClass::Hangul);
        assert_eq!(ScriptClass::of(' '), ScriptClass::Other);
        assert_eq!(ScriptClass::of('1'), ScriptClass::Other);
        // 호환용 자모는 음절이 아니므로 영문 구간으로 분류
        assert_eq!(ScriptClass::of('ㄱ'), ScriptClass::Latin);
    }

    #[test]
    fn test_split_runs() {
        let runs = split_runs("dkssud 안녕!!");
        let classes: Vec<ScriptClass> = runs.iter().map(|r| r.class).collect();
        let texts: Vec<&str> = runs.iter().map(|r| r.text).collect();
        assert_eq!(
            classes,
            vec![
                ScriptClass::Latin,
                ScriptClass::Other,
                ScriptClass::Hangul,
                ScriptClass::Other,
                ScriptClass::Other,
            ]
        );
        assert_eq!(texts, vec!["dkssud", " ", "안녕", "!", "!"]);
    }

    #[test]
    fn test_adjacent_scripts() {
        let texts: Vec<&str> = split_runs("rk가나sk").iter().map(|r| r.text).collect();
        assert_eq!(texts, vec!["rk", "가나", "sk"]);
    }

    #[test]
    fn test_split_runs_empty() {
        assert!(split_runs("").is_empty());
    }

    #[test]
    fn test_runs_partition_input() {
        let input = "hello, 세상! 123 wnrrk 가";
        let joined: String = split_runs(input).iter().map(|r| r.text).collect();
        assert_eq!(joined, input);
    }

    #[test]
    fn test_convert_runs() {
        assert_eq!(convert_runs("dkssud"), "안녕");
        assert_eq!(convert_runs("안녕"), "DKSSUD");
        assert_eq!(convert_runs("rk 가"), "가 RK");
        assert_eq!(convert_runs("1+1=2"), "1+1=2");
    }
}
