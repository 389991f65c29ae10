//! 应用状态管理模块
//!
//! 使用线程本地存储管理全局应用状态。

use std::cell::RefCell;
use std::process::Child;
use std::time::Instant;

use objc2::rc::Retained;
use objc2_app_kit::{NSStatusItem, NSWindow};
use objc2_foundation::NSTimer;

use super::config::Config;

/// 应用状态
#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    pub status_item: Option<Retained<NSStatusItem>>,
    /// 整点报时定时器（一次性，触发后自行重新调度）
    pub chime_timer: Option<Retained<NSTimer>>,
    // Countdown state：句柄和截止时刻要么同时存在要么同时为空
    pub countdown_timer: Option<Retained<NSTimer>>,
    pub countdown_end: Option<Instant>,
    // Blink state
    pub blink_timer: Option<Retained<NSTimer>>,
    pub blink_step: u32,
    // Overlay state
    pub overlay_window: Option<Retained<NSWindow>>,
    pub overlay_hold_timer: Option<Retained<NSTimer>>,
    /// 悬浮窗代数计数：动画完成回调据此识别自己已被取代
    pub overlay_generation: u64,
    /// 最近一次播放的子进程句柄，保留到下次触发
    pub chime_sound: Option<Child>,
}

impl AppState {
    pub const fn new(config: Config) -> Self {
        Self {
            config,
            status_item: None,
            chime_timer: None,
            countdown_timer: None,
            countdown_end: None,
            blink_timer: None,
            blink_step: 0,
            overlay_window: None,
            overlay_hold_timer: None,
            overlay_generation: 0,
            chime_sound: None,
        }
    }
}

thread_local! {
    static STATE: RefCell<Option<AppState>> = const { RefCell::new(None) };
}

/// 初始化全局状态
pub fn init_state(config: Config) {
    STATE.with(|cell| {
        *cell.borrow_mut() = Some(AppState::new(config));
    });
}

/// 清理全局状态（应用终止时调用）
pub fn teardown_state() {
    STATE.with(|cell| {
        *cell.borrow_mut() = None;
    });
}

/// 可变访问全局状态
pub fn with_state<R>(f: impl FnOnce(&mut AppState) -> R) -> R {
    STATE.with(|cell| {
        let mut state = cell.borrow_mut();
        let state = state.as_mut().expect("STATE not initialized");
        f(state)
    })
}

/// 只读访问全局状态
pub fn with_state_ref<R>(f: impl FnOnce(&AppState) -> R) -> R {
    STATE.with(|cell| {
        let state = cell.borrow();
        let state = state.as_ref().expect("STATE not initialized");
        f(state)
    })
}
