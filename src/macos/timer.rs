//! 定时调度模块
//!
//! 整点报时、倒计时到期与手动测试共用同一个告警入口 `trigger_alert`。
//! 整点定时器与倒计时相互独立，互不干扰。

use std::time::{Duration, Instant, SystemTime};

use objc2::sel;
use objc2_foundation::NSTimer;

use crate::clock::seconds_until_next_hour;
use crate::{log_debug, log_info, log_warn};

use super::delegate::ChimeDelegate;
use super::state::{with_state, with_state_ref};
use super::ui::{rebuild_menu, refresh_icon, show_time_overlay, start_blink, target_anyobject};
use super::utils::spawn_chime_sound;

/// 调度下一次整点报时
///
/// 无法确定下一个整点时仅记录日志，不再重新调度。
pub fn schedule_next_chime(delegate: &ChimeDelegate) {
    let Some(delay) = seconds_until_next_hour(SystemTime::now()) else {
        log_warn!("无法计算下一个整点，报时调度停止");
        return;
    };

    let target = target_anyobject(delegate);
    let timer = unsafe {
        NSTimer::scheduledTimerWithTimeInterval_target_selector_userInfo_repeats(
            delay as f64,
            target,
            sel!(chimeFired:),
            None,
            false,
        )
    };
    timer.setTolerance(1.0);

    with_state(|state| {
        state.chime_timer = Some(timer);
    });
    log_debug!("下一次整点报时在 {delay} 秒后");
}

/// 整点定时器触发：先告警，再按当前时间重新调度。
/// 系统休眠会推迟触发；唤醒后补发这一次，不追偿错过的整点。
pub fn chime_fired(delegate: &ChimeDelegate) {
    trigger_alert(delegate);
    schedule_next_chime(delegate);
}

/// 使倒计时失效并清空截止时刻；两者在所有退出路径上同时清理
fn invalidate_countdown() {
    with_state(|state| {
        if let Some(timer) = state.countdown_timer.take() {
            timer.invalidate();
        }
        state.countdown_end = None;
    });
}

/// 启动倒计时（已有的倒计时先被取消）
pub fn start_countdown(delegate: &ChimeDelegate, minutes: u64) {
    invalidate_countdown();

    let end = Instant::now() + Duration::from_secs(minutes * 60);
    let target = target_anyobject(delegate);
    let timer = unsafe {
        NSTimer::scheduledTimerWithTimeInterval_target_selector_userInfo_repeats(
            1.0,
            target,
            sel!(countdownTick:),
            None,
            true,
        )
    };
    timer.setTolerance(0.1);

    with_state(|state| {
        state.countdown_timer = Some(timer);
        state.countdown_end = Some(end);
    });

    log_info!("倒计时开始: {minutes} 分钟");
    refresh_icon();
    rebuild_menu(delegate);
}

/// 取消倒计时；未在倒计时时调用也安全
pub fn cancel_countdown(delegate: &ChimeDelegate) {
    invalidate_countdown();
    refresh_icon();
    rebuild_menu(delegate);
}

/// 倒计时每秒触发：到期时取消自身并告警，否则刷新剩余分钟显示
pub fn countdown_tick(delegate: &ChimeDelegate) {
    let remaining = with_state_ref(|state| {
        state
            .countdown_end
            .map(|end| end.saturating_duration_since(Instant::now()))
    });
    // 定时器失效后的迟到回调直接忽略
    let Some(remaining) = remaining else {
        return;
    };

    if remaining.is_zero() {
        cancel_countdown(delegate);
        trigger_alert(delegate);
    } else {
        refresh_icon();
    }
}

/// 告警入口：开关打开时播放提示音，视觉提示始终执行
pub fn trigger_alert(delegate: &ChimeDelegate) {
    let chime_enabled = with_state_ref(|state| state.config.chime_enabled);
    if chime_enabled {
        match spawn_chime_sound() {
            Ok(child) => with_state(|state| {
                // 回收上一次播放的进程，再保留新句柄直到播放结束
                if let Some(mut finished) = state.chime_sound.take() {
                    let _ = finished.try_wait();
                }
                state.chime_sound = Some(child);
            }),
            Err(err) => log_warn!("提示音播放失败: {err}"),
        }
    }

    start_blink(delegate);
    show_time_overlay(delegate);
}
