//! # Configuration System
//!
//! 계층형 AtelierConfig 로더
//!
//! ## 설정 우선순위 (낮은 → 높은)
//!
//! 1. User-level: `~/.atelier/config.json`
//! 2. Project-level: `.atelier/config.json`
//! 3. Local: `.atelier/config.local.json` (gitignore됨)
//!
//! ## 사용 예시
//!
//! ```ignore
//! use atelier_core::config::ConfigLoader;
//!
//! let config = ConfigLoader::new(Path::new(".")).load_all()?;
//! let features = config.features_for(Discipline::Scenography);
//! ```

mod loader;

pub use loader::{load_config_from_file, strip_json_comments, ConfigLoader, LOCAL_CONFIG_FILE};
