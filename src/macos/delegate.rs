//! 应用委托模块
//!
//! 定义 `NSApplicationDelegate` 实现。

use objc2::rc::Retained;
use objc2::runtime::{AnyObject, NSObject};
use objc2::{define_class, msg_send, MainThreadMarker, MainThreadOnly};

use objc2_app_kit::{NSApplication, NSApplicationDelegate};
use objc2_foundation::{NSNotification, NSObjectProtocol, NSTimer};

use crate::menu::TIMER_MINUTES;

use super::state::{teardown_state, with_state};
use super::timer::{
    cancel_countdown, chime_fired, countdown_tick, schedule_next_chime, start_countdown,
    trigger_alert,
};
use super::ui::{blink_tick, install_status_item, overlay_hold_expired, rebuild_menu, refresh_icon};
use super::utils::request_accessibility_trust;

define_class!(
    #[unsafe(super(NSObject))]
    #[thread_kind = MainThreadOnly]
    pub struct ChimeDelegate;

    unsafe impl NSObjectProtocol for ChimeDelegate {}
    unsafe impl NSApplicationDelegate for ChimeDelegate {}

    impl ChimeDelegate {
        #[unsafe(method(applicationDidFinishLaunching:))]
        fn application_did_finish_launching(&self, _notification: &NSNotification) {
            request_accessibility_trust();
            install_status_item();
            refresh_icon();
            rebuild_menu(self);
            schedule_next_chime(self);
        }

        #[unsafe(method(applicationShouldTerminateAfterLastWindowClosed:))]
        fn application_should_terminate_after_last_window_closed(
            &self,
            _app: &NSApplication,
        ) -> bool {
            // 悬浮窗销毁后不要退出应用
            false
        }

        #[unsafe(method(applicationWillTerminate:))]
        fn application_will_terminate(&self, _notification: &NSNotification) {
            teardown_state();
        }

        #[unsafe(method(chimeFired:))]
        fn on_chime_fired(&self, _timer: &NSTimer) {
            chime_fired(self);
        }

        #[unsafe(method(countdownTick:))]
        fn on_countdown_tick(&self, _timer: &NSTimer) {
            countdown_tick(self);
        }

        #[unsafe(method(blinkTick:))]
        fn on_blink_tick(&self, _timer: &NSTimer) {
            blink_tick();
        }

        #[unsafe(method(overlayHoldExpired:))]
        fn on_overlay_hold_expired(&self, _timer: &NSTimer) {
            overlay_hold_expired();
        }

        #[unsafe(method(toggleChime:))]
        fn toggle_chime(&self, _sender: Option<&AnyObject>) {
            with_state(|state| {
                state.config.chime_enabled = !state.config.chime_enabled;
                state.config.save();
            });
            refresh_icon();
            rebuild_menu(self);
        }

        #[unsafe(method(startTimer:))]
        fn start_timer(&self, sender: Option<&AnyObject>) {
            let Some(sender) = sender else {
                return;
            };
            // 菜单项的 tag 携带分钟数
            let tag: isize = unsafe { msg_send![sender, tag] };
            let Ok(minutes) = u64::try_from(tag) else {
                return;
            };
            if TIMER_MINUTES.contains(&minutes) {
                start_countdown(self, minutes);
            }
        }

        #[unsafe(method(cancelTimer:))]
        fn cancel_timer(&self, _sender: Option<&AnyObject>) {
            cancel_countdown(self);
        }

        #[unsafe(method(testChime:))]
        fn test_chime(&self, _sender: Option<&AnyObject>) {
            trigger_alert(self);
        }

        #[unsafe(method(quit:))]
        fn quit(&self, _sender: Option<&AnyObject>) {
            with_state(|state| {
                if let Some(timer) = state.chime_timer.take() {
                    timer.invalidate();
                }
                if let Some(timer) = state.countdown_timer.take() {
                    timer.invalidate();
                }
                state.countdown_end = None;
                if let Some(timer) = state.blink_timer.take() {
                    timer.invalidate();
                }
                if let Some(timer) = state.overlay_hold_timer.take() {
                    timer.invalidate();
                }
                if let Some(window) = state.overlay_window.take() {
                    window.orderOut(None);
                }
            });

            if let Some(mtm) = MainThreadMarker::new() {
                let app = NSApplication::sharedApplication(mtm);
                app.terminate(None);
            }
        }
    }
);

/// 创建并返回 delegate 实例
pub fn create_delegate(mtm: MainThreadMarker) -> Retained<ChimeDelegate> {
    unsafe { msg_send![ChimeDelegate::alloc(mtm), init] }
}
