//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 설정 파일 경로를 덮어쓰는 환경 변수
pub const CONFIG_ENV: &str = "KONGLISH_CONFIG";

/// Konglish 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct KonglishConfig {
    /// 교정 대상이 되기 위한 최소 영문 알파벳 비율
    #[serde(default = "default_prescreen_threshold")]
    pub prescreen_threshold: f64,
    /// 한국어 척도가 이 값을 넘어야 변환
    #[serde(default = "default_korean_scale_threshold")]
    pub korean_scale_threshold: f64,
    /// 교정 활성화 여부
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_prescreen_threshold() -> f64 {
    0.7
}

fn default_korean_scale_threshold() -> f64 {
    0.9
}

fn default_enabled() -> bool {
    true
}

impl Default for KonglishConfig {
    fn default() -> Self {
        Self {
            prescreen_threshold: default_prescreen_threshold(),
            korean_scale_threshold: default_korean_scale_threshold(),
            enabled: default_enabled(),
        }
    }
}

/// 설정 로드/저장 에러
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 읽기/쓰기 실패
    Io(std::io::Error),
    /// JSON 파싱/직렬화 실패
    Parse(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "설정 파일 입출력 오류: {}", e),
            ConfigError::Parse(e) => write!(f, "설정 JSON 오류: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// 설정 파일 경로: $KONGLISH_CONFIG 또는 ~/.config/konglish/config.json
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    home.join(".config").join("konglish").join("config.json")
}

/// 지정한 경로에서 설정 로드
pub fn load_config_from(path: &Path) -> Result<KonglishConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> KonglishConfig {
    let path = config_path();
    match load_config_from(&path) {
        Ok(config) => config,
        Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            KonglishConfig::default()
        }
        Err(e) => {
            log::warn!("설정 로드 실패 ({}), 기본값 사용: {}", path.display(), e);
            KonglishConfig::default()
        }
    }
}

/// 지정한 경로에 설정 저장
pub fn save_config_to(config: &KonglishConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}

/// 설정 파일 저장
pub fn save_config(config: &KonglishConfig) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(config, &path)?;
    Ok(path)
}
