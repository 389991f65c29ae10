//! 图标闪烁模块
//!
//! 告警时让状态栏图标按固定步数明暗交替，结束后恢复完全不透明。

use objc2::{msg_send, sel};
use objc2_foundation::NSTimer;

use crate::alert::{blink_alpha, BLINK_INTERVAL_SECS, BLINK_STEPS};

use super::super::delegate::ChimeDelegate;
use super::super::state::with_state;
use super::status_bar::{status_button, target_anyobject};

/// 启动一次闪烁序列
///
/// 上一次序列尚未结束时直接取代：旧定时器失效后不再产生任何效果。
pub fn start_blink(delegate: &ChimeDelegate) {
    with_state(|state| {
        if let Some(timer) = state.blink_timer.take() {
            timer.invalidate();
        }
        state.blink_step = 0;
    });

    apply_alpha(blink_alpha(0, BLINK_STEPS));

    let target = target_anyobject(delegate);
    let timer = unsafe {
        NSTimer::scheduledTimerWithTimeInterval_target_selector_userInfo_repeats(
            BLINK_INTERVAL_SECS,
            target,
            sel!(blinkTick:),
            None,
            true,
        )
    };

    with_state(|state| {
        state.blink_timer = Some(timer);
    });
}

/// 闪烁定时器的每一步；最后一步强制恢复完全不透明并结束序列
pub fn blink_tick() {
    let step = with_state(|state| {
        state.blink_step += 1;
        state.blink_step
    });

    apply_alpha(blink_alpha(step, BLINK_STEPS));

    if step >= BLINK_STEPS {
        with_state(|state| {
            if let Some(timer) = state.blink_timer.take() {
                timer.invalidate();
            }
        });
    }
}

fn apply_alpha(alpha: f64) {
    let Some(button) = status_button() else {
        return;
    };
    unsafe {
        let _: () = msg_send![&*button, setAlphaValue: alpha];
    }
}
