//! 配置管理模块
//!
//! 负责应用配置的加载和保存。

use objc2::msg_send;
use objc2::rc::Retained;
use objc2::runtime::AnyObject;
use objc2_foundation::{NSString, NSUserDefaults};

use super::constants::PREF_KEY_CHIME_ENABLED;

/// 应用配置
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub chime_enabled: bool,
}

impl Config {
    pub const DEFAULT_CHIME_ENABLED: bool = true;

    /// 从 `NSUserDefaults` 加载配置
    pub fn load() -> Self {
        let defaults = NSUserDefaults::standardUserDefaults();
        let key = NSString::from_str(PREF_KEY_CHIME_ENABLED);

        // boolForKey 对缺失的键返回 false，无法与显式写入的 false 区分，
        // 所以先用 objectForKey 探测键是否存在过。
        let existing: Option<Retained<AnyObject>> =
            unsafe { msg_send![&*defaults, objectForKey: &*key] };
        let chime_enabled = if existing.is_some() {
            defaults.boolForKey(&key)
        } else {
            Self::DEFAULT_CHIME_ENABLED
        };

        Self { chime_enabled }
    }

    /// 保存配置到 `NSUserDefaults`
    pub fn save(&self) {
        let defaults = NSUserDefaults::standardUserDefaults();
        let key = NSString::from_str(PREF_KEY_CHIME_ENABLED);
        defaults.setBool_forKey(self.chime_enabled, &key);
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chime_enabled: Self::DEFAULT_CHIME_ENABLED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        assert!(Config::default().chime_enabled);
    }
}
