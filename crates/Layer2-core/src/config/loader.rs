//! Configuration Loader
//!
//! Atelier 설정 로더 (`.atelier` 폴더만 지원)
//!
//! ## 검색 우선순위
//!
//! 1. User-level: `~/.atelier/config.json`
//! 2. Project-level: `.atelier/config.json`
//! 3. Local (gitignored): `.atelier/config.local.json`
//!
//! 각 레벨의 설정이 이전 레벨을 오버라이드합니다. 읽을 수 없는 파일은
//! 경고만 남기고 건너뜁니다. 폴더 위치는 `JsonStore`가 정합니다.

use atelier_foundation::{AtelierConfig, Error, JsonStore, Result, ATELIER_CONFIG_FILE};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// 로컬 설정 파일명 (gitignore 대상)
pub const LOCAL_CONFIG_FILE: &str = "config.local.json";

// ============================================================================
// ConfigLoader - 설정 로더
// ============================================================================

/// 설정 로더
pub struct ConfigLoader {
    /// 검색 경로
    search_paths: Vec<ConfigPath>,
    /// 저장 대상 프로젝트 폴더 (커스텀 경로 로더는 없음)
    project: Option<JsonStore>,
}

/// 설정 파일 경로 정보
#[derive(Debug, Clone)]
struct ConfigPath {
    path: PathBuf,
    /// 우선순위 (높을수록 우선)
    priority: u8,
    description: &'static str,
}

impl ConfigLoader {
    /// 새 로더 생성 (기본 검색 경로)
    pub fn new(working_dir: &Path) -> Self {
        let mut paths = Vec::new();

        // 1. User-level (가장 낮은 우선순위)
        match JsonStore::user() {
            Ok(user) => paths.push(ConfigPath {
                path: user.file_path(ATELIER_CONFIG_FILE),
                priority: 10,
                description: "User settings",
            }),
            Err(e) => debug!("Skipping user settings: {}", e),
        }

        // 2. Project-level
        let project = JsonStore::project(working_dir);
        paths.push(ConfigPath {
            path: project.file_path(ATELIER_CONFIG_FILE),
            priority: 20,
            description: "Project settings",
        });

        // 3. Local (gitignored, 가장 높은 우선순위)
        paths.push(ConfigPath {
            path: project.file_path(LOCAL_CONFIG_FILE),
            priority: 30,
            description: "Local settings",
        });

        paths.sort_by_key(|p| p.priority);

        Self {
            search_paths: paths,
            project: Some(project),
        }
    }

    /// 커스텀 검색 경로로 생성 (뒤에 있을수록 우선)
    pub fn with_paths(paths: Vec<PathBuf>) -> Self {
        let search_paths = paths
            .into_iter()
            .enumerate()
            .map(|(i, path)| ConfigPath {
                path,
                priority: i as u8,
                description: "Custom",
            })
            .collect();

        Self {
            search_paths,
            project: None,
        }
    }

    /// 모든 경로에서 설정 로드하여 병합
    pub fn load_all(&self) -> AtelierConfig {
        let mut merged = AtelierConfig::new();

        for config_path in &self.search_paths {
            if !config_path.path.exists() {
                continue;
            }
            match load_config_from_file(&config_path.path) {
                Ok(config) => {
                    info!(
                        "Loaded {} from: {}",
                        config_path.description,
                        config_path.path.display()
                    );
                    merged.merge(config);
                }
                Err(e) => {
                    warn!(
                        "Failed to load settings from {}: {}",
                        config_path.path.display(),
                        e
                    );
                }
            }
        }

        merged
    }

    /// 프로젝트 설정 저장 (`.atelier/config.json`)
    pub fn save_project(&self, config: &AtelierConfig) -> Result<PathBuf> {
        let project = self
            .project
            .as_ref()
            .ok_or_else(|| Error::Config("loader has no project directory".to_string()))?;
        config.save_to(project)?;
        Ok(project.file_path(ATELIER_CONFIG_FILE))
    }

    /// 존재하는 설정 파일 목록
    pub fn existing_files(&self) -> Vec<PathBuf> {
        self.search_paths
            .iter()
            .filter(|p| p.path.exists())
            .map(|p| p.path.clone())
            .collect()
    }
}

// ============================================================================
// 유틸리티 함수
// ============================================================================

/// 파일에서 설정 로드
pub fn load_config_from_file(path: &Path) -> Result<AtelierConfig> {
    let content = std::fs::read_to_string(path)?;

    // JSONC 파일일 수 있음 (주석 제거)
    let content = strip_json_comments(&content)
        .map_err(|e| Error::Config(format!("Invalid config.json at {}: {}", path.display(), e)))?;

    let config: AtelierConfig = serde_json::from_str(&content).map_err(|e| {
        Error::Config(format!("Invalid config.json at {}: {}", path.display(), e))
    })?;

    debug!(
        "Loaded config from {}: {} discipline overrides, {} named capabilities",
        path.display(),
        config.disciplines.len(),
        config.capabilities.len()
    );

    Ok(config)
}

/// JSON 주석 제거 (// 및 /* */)
///
/// 닫히지 않은 블록 주석은 에러입니다.
pub fn strip_json_comments(input: &str) -> Result<String> {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            output.push(c);
            match c {
                // 이스케이프된 문자는 그대로 복사
                '\\' => output.extend(chars.next()),
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match (c, chars.peek().copied()) {
            ('"', _) => {
                in_string = true;
                output.push(c);
            }
            ('/', Some('/')) => {
                // 라인 주석: 줄바꿈은 유지
                for c in chars.by_ref() {
                    if c == '\n' {
                        output.push(c);
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut closed = false;
                while let Some(c) = chars.next() {
                    if c == '*' && chars.peek() == Some(&'/') {
                        chars.next();
                        closed = true;
                        break;
                    }
                }
                if !closed {
                    return Err(Error::Config("unterminated block comment".to_string()));
                }
            }
            _ => output.push(c),
        }
    }

    Ok(output)
}

// ============================================================================
// 테스트
// ============================================================================
