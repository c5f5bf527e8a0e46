//! Application constants
//!
//! Single source of truth for endpoints, fixed strings, and defaults.

/// Default configuration file path
pub const CONFIG_PATH: &str = "config/noor.toml";

/// Default environment file path
pub const ENV_PATH: &str = "config/.env";

/// Environment variable holding the Gemini API credential
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Default Gemini endpoint
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Default Gemini API path (fallback when not specified in config)
pub const DEFAULT_GEMINI_API_PATH: &str = "v1beta/models";

/// Default model identifier
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Persona directive attached to every request
pub const SYSTEM_INSTRUCTION: &str = "أنت مساعد ذكي، لبق، ومفيد. \
تجيب على أسئلة المستخدم بوضوح ودقة. \
إذا سألك المستخدم عن أمور دينية (إسلامية أو مسيحية)، قدم له إجابات موثقة ومحترمة تدعو للتسامح والمحبة. \
استخدم لغة عربية فصحى وجميلة. \
ركز على تقديم الفائدة والمعرفة في كافة المجالات.";

/// Shown when the model answers with no text
pub const FALLBACK_EMPTY: &str = "عذراً، لم أتمكن من العثور على إجابة حالياً.";

/// Shown when the call fails for any reason
pub const FALLBACK_ERROR: &str = "حدث خطأ أثناء الاتصال بالخادم. يرجى المحاولة مرة أخرى لاحقاً.";
