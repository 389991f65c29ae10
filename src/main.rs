//! `Chime` - macOS 菜单栏整点报时应用
//!
//! 纯 Rust 实现的 macOS 菜单栏整点报时应用：每到整点播放提示音，
//! 支持固定时长的倒计时提醒，并在光标旁短暂浮现当前时间。

#[cfg(any(target_os = "macos", test))]
mod alert;
#[cfg(any(target_os = "macos", test))]
mod clock;
#[cfg(any(target_os = "macos", test))]
mod menu;

#[cfg(not(target_os = "macos"))]
fn main() {
    eprintln!("Chime 仅支持 macOS。");
}

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "macos")]
fn main() {
    macos::run();
}
