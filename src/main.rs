//! Konglish - 표준 입력을 한 줄씩 두벌식 변환

use konglish::config::{load_config, save_config, KonglishConfig};
use konglish::{
    alphabetic_ratio, convert_hangul_to_keystrokes, convert_keystrokes_to_hangul,
    convert_mixed_script, JamoIntegrityScale, KoreanFixer,
};
use std::io::{self, BufRead, BufWriter, Write};
use std::process::ExitCode;

const USAGE: &str = "usage: konglish [mixed|keys|hangul|ratio|fix|init-config] < input";

/// 실행 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// 혼합 문자열 변환 (기본)
    Mixed,
    /// 영문 키 -> 한글
    Keys,
    /// 한글 -> 대문자 키
    Hangul,
    /// 영문 알파벳 비율 출력
    Ratio,
    /// 오입력 교정
    Fix,
}

/// 명령
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// 표준 입력 변환
    Convert(Mode),
    /// 기본 설정 파일 생성
    InitConfig,
}

impl Command {
    fn parse(arg: Option<&str>) -> Option<Self> {
        let mode = match arg {
            None | Some("mixed") => Mode::Mixed,
            Some("keys") => Mode::Keys,
            Some("hangul") => Mode::Hangul,
            Some("ratio") => Mode::Ratio,
            Some("fix") => Mode::Fix,
            Some("init-config") => return Some(Command::InitConfig),
            Some(_) => return None,
        };
        Some(Command::Convert(mode))
    }
}

fn run(mode: Mode) -> io::Result<()> {
    let fixer = match mode {
        Mode::Fix => Some(KoreanFixer::new(load_config(), JamoIntegrityScale)),
        _ => None,
    };

    let stdin = io::stdin();
    let mut out = BufWriter::new(io::stdout().lock());

    for line in stdin.lock().lines() {
        let line = line?;
        let result = match mode {
            Mode::Mixed => convert_mixed_script(&line),
            Mode::Keys => convert_keystrokes_to_hangul(&line),
            Mode::Hangul => convert_hangul_to_keystrokes(&line),
            Mode::Ratio => format!("{:.4}", alphabetic_ratio(&line)),
            Mode::Fix => fixer
                .as_ref()
                .and_then(|f| f.fix(&line))
                .unwrap_or(line),
        };
        writeln!(out, "{}", result)?;
    }

    out.flush()
}

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let arg = std::env::args().nth(1);
    let mode = match Command::parse(arg.as_deref()) {
        Some(Command::Convert(mode)) => mode,
        Some(Command::InitConfig) => {
            return match save_config(&KonglishConfig::default()) {
                Ok(path) => {
                    println!("{}", path.display());
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    log::error!("설정 저장 실패: {}", e);
                    ExitCode::FAILURE
                }
            };
        }
        None => {
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };

    if let Err(e) = run(mode) {
        log::error!("입출력 오류: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
