//! 工具函数模块

use std::ffi::c_void;
use std::process::{Child, Command};

use objc2_foundation::{NSBundle, NSString};

use super::constants::{CHIME_SOUND_EXTENSION, CHIME_SOUND_RESOURCE, FALLBACK_SYSTEM_SOUND};
use super::error::{AppError, AppResult};

#[link(name = "CoreFoundation", kind = "framework")]
extern "C" {
    fn CFDictionaryCreate(
        allocator: *const c_void,
        keys: *const *const c_void,
        values: *const *const c_void,
        num_values: isize,
        key_call_backs: *const c_void,
        value_call_backs: *const c_void,
    ) -> *const c_void;
    fn CFRelease(cf: *const c_void);
    static kCFBooleanTrue: *const c_void;
}

#[link(name = "ApplicationServices", kind = "framework")]
extern "C" {
    fn AXIsProcessTrustedWithOptions(options: *const c_void) -> bool;
    static kAXTrustedCheckOptionPrompt: *const c_void;
}

/// 请求辅助功能授权（未授权时弹出系统提示）。
/// 授权与否不影响启动，这里不检查结果也不重试。
pub fn request_accessibility_trust() {
    unsafe {
        let keys = [kAXTrustedCheckOptionPrompt];
        let values = [kCFBooleanTrue];
        let options = CFDictionaryCreate(
            std::ptr::null(),
            keys.as_ptr(),
            values.as_ptr(),
            1,
            std::ptr::null(),
            std::ptr::null(),
        );
        let _ = AXIsProcessTrustedWithOptions(options);
        if !options.is_null() {
            CFRelease(options);
        }
    }
}

/// 播放报时提示音，返回播放进程的句柄。
///
/// 优先使用随应用打包的音频资源，缺失时回退到系统提示音。
pub fn spawn_chime_sound() -> AppResult<Child> {
    let path = bundled_sound_path()
        .unwrap_or_else(|| format!("/System/Library/Sounds/{FALLBACK_SYSTEM_SOUND}.aiff"));
    Command::new("afplay")
        .arg(&path)
        .spawn()
        .map_err(|e| AppError::System(format!("afplay 启动失败: {e}")))
}

/// 在应用 bundle 中查找打包的提示音
fn bundled_sound_path() -> Option<String> {
    let bundle = NSBundle::mainBundle();
    let name = NSString::from_str(CHIME_SOUND_RESOURCE);
    let ext = NSString::from_str(CHIME_SOUND_EXTENSION);
    let path = unsafe { bundle.pathForResource_ofType(Some(&name), Some(&ext)) }?;
    Some(path.to_string())
}
