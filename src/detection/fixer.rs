//! 영문 자판으로 잘못 입력한 한글 메시지 교정
//!
//! 두 단계로 판정한다:
//! 1. 코드 블록/URL을 뺀 영문 알파벳 비율이 기준 미만이면 제외
//! 2. 한국어 척도가 기준을 넘으면 혼합 문자열 변환 결과를 돌려줌

use crate::config::KonglishConfig;
use crate::core::converter::{convert_keystrokes_to_hangul, convert_mixed_script};

use super::ratio::{alphabetic_ratio, strip_code_blocks, strip_urls};
use super::validator::{has_any_hangul, incomplete_jamo_ratio};

/// 텍스트가 "영문으로 쓴 한국어"일 가능성 (0.0 ~ 1.0)
///
/// 사전/불용어/언어 감지기 등 외부 신호를 이 트레이트 뒤에 연결한다.
pub trait KoreanScale: Send + Sync {
    fn korean_scale(&self, text: &str) -> f64;
}

impl<F> KoreanScale for F
where
    F: Fn(&str) -> f64 + Send + Sync,
{
    fn korean_scale(&self, text: &str) -> f64 {
        self(text)
    }
}

/// 기본 척도: 두벌식 변환 결과가 완성형 음절로 깔끔하게 조합되는 정도
///
/// 실제 영어 단어는 낱자모를 많이 남기고, 잘못 입력한 한글은 음절로 조합된다.
/// 코드 블록과 URL은 평가에서 제외한다.
#[derive(Debug, Clone, Copy, Default)]
pub struct JamoIntegrityScale;

impl KoreanScale for JamoIntegrityScale {
    fn korean_scale(&self, text: &str) -> f64 {
        let prose = strip_urls(&strip_code_blocks(text));
        let converted = convert_keystrokes_to_hangul(&prose);
        if !has_any_hangul(&converted) {
            return 0.0;
        }
        1.0 - f64::from(incomplete_jamo_ratio(&converted))
    }
}

/// 판정 결과
#[derive(Debug, Clone, PartialEq)]
pub enum FixDecision {
    /// 교정 비활성화
    Disabled,
    /// 영문 비율 부족
    NotEnoughLatin { ratio: f64 },
    /// 한국어 척도 부족
    NotKorean { ratio: f64, scale: f64 },
    /// 변환 대상
    Convert {
        ratio: f64,
        scale: f64,
        converted: String,
    },
}

/// 메시지 교정기
pub struct KoreanFixer {
    config: KonglishConfig,
    scale: Box<dyn KoreanScale>,
}

impl KoreanFixer {
    /// 설정과 한국어 척도로 생성
    pub fn new(config: KonglishConfig, scale: impl KoreanScale + 'static) -> Self {
        Self {
            config,
            scale: Box::new(scale),
        }
    }

    /// 기본 설정 + 낱자모 척도로 생성
    pub fn with_defaults() -> Self {
        Self::new(KonglishConfig::default(), JamoIntegrityScale)
    }

    /// 교정 활성화/비활성화
    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
    }

    /// 교정 활성화 여부
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    pub fn config(&self) -> &KonglishConfig {
        &self.config
    }

    /// 메시지 판정
    pub fn evaluate(&self, text: &str) -> FixDecision {
        if !self.config.enabled {
            return FixDecision::Disabled;
        }

        let ratio = alphabetic_ratio(text);
        if ratio < self.config.prescreen_threshold {
            log::debug!("영문 비율 부족: {:.3} < {:.3}", ratio, self.config.prescreen_threshold);
            return FixDecision::NotEnoughLatin { ratio };
        }

        let scale = self.scale.korean_scale(text);
        if scale <= self.config.korean_scale_threshold {
            log::debug!(
                "한국어 척도 부족: {:.3} <= {:.3}",
                scale,
                self.config.korean_scale_threshold
            );
            return FixDecision::NotKorean { ratio, scale };
        }

        let converted = convert_mixed_script(text);
        log::debug!("변환: '{}' -> '{}'", text, converted);
        FixDecision::Convert {
            ratio,
            scale,
            converted,
        }
    }

    /// 교정 대상이면 변환된 문자열 반환
    pub fn fix(&self, text: &str) -> Option<String> {
        match self.evaluate(text) {
            FixDecision::Convert { converted, .. } => Some(converted),
            _ => None,
        }
    }
}

impl Default for KoreanFixer {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for KoreanFixer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KoreanFixer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
