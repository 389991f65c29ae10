//! 常量定义

/// 报时开关在 `NSUserDefaults` 中的键名，外部工具可直接读取
pub const PREF_KEY_CHIME_ENABLED: &str = "beepEnabled";

/// 随应用打包的提示音资源名
pub const CHIME_SOUND_RESOURCE: &str = "glass-004";
pub const CHIME_SOUND_EXTENSION: &str = "mp3";

/// 资源缺失时回退的系统提示音
pub const FALLBACK_SYSTEM_SOUND: &str = "Glass";

/// 状态栏图标（SF Symbols）
pub const ICON_SYMBOL_ENABLED: &str = "bell.fill";
pub const ICON_SYMBOL_DISABLED: &str = "bell.slash.fill";
