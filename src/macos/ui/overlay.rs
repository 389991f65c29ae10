//! 光标时间悬浮窗模块
//!
//! 在光标上方短暂浮现当前时间：淡入放大、停留、淡出缩放后销毁。
//! 窗口不响应任何输入，在所有工作空间可见，也不参与窗口切换循环。

use std::time::SystemTime;

use block2::RcBlock;
use objc2::rc::Retained;
use objc2::runtime::AnyObject;
use objc2::{class, msg_send, sel, ClassType, MainThreadMarker, MainThreadOnly};
use objc2_app_kit::{
    NSAnimationContext, NSBackingStoreType, NSColor, NSEvent, NSFont, NSScreenSaverWindowLevel,
    NSTextAlignment, NSTextField, NSView, NSWindow, NSWindowCollectionBehavior, NSWindowStyleMask,
};
use objc2_foundation::{NSNumber, NSPoint, NSRect, NSSize, NSString, NSTimer};

use crate::alert::{OVERLAY_FADE_IN_SECS, OVERLAY_FADE_OUT_SECS, OVERLAY_HOLD_SECS};
use crate::clock::format_hhmm;

use super::super::delegate::ChimeDelegate;
use super::super::state::with_state;
use super::status_bar::target_anyobject;

// 悬浮窗几何参数
const OVERLAY_WIDTH: f64 = 140.0;
const OVERLAY_HEIGHT: f64 = 50.0;
/// 悬浮窗下沿与光标的垂直间距
const CURSOR_OFFSET: f64 = 20.0;
/// 入场起始缩放与退场终点缩放
const SCALE_FROM: f64 = 0.8;
const SCALE_TO: f64 = 1.1;

/// 显示当前时间悬浮窗
///
/// 已有的悬浮窗（含退场动画中的）被立即取代；代数计数让被取代的
/// 动画完成回调不再产生效果。
pub fn show_time_overlay(delegate: &ChimeDelegate) {
    let mtm = delegate.mtm();

    with_state(|state| {
        if let Some(timer) = state.overlay_hold_timer.take() {
            timer.invalidate();
        }
        if let Some(window) = state.overlay_window.take() {
            window.orderOut(None);
        }
        state.overlay_generation += 1;
    });

    let time_text = format_hhmm(SystemTime::now());
    let window = build_overlay_window(mtm, &time_text);

    window.setAlphaValue(0.0);
    window.orderFrontRegardless();

    // 入场：淡入并从 80% 放大到原始大小
    unsafe {
        let _: () = msg_send![NSAnimationContext::class(), beginGrouping];
        let context: Retained<NSAnimationContext> =
            msg_send![NSAnimationContext::class(), currentContext];
        let _: () = msg_send![&*context, setDuration: OVERLAY_FADE_IN_SECS];
        set_timing_function(&context, "easeOut");

        let animator: Retained<NSWindow> = msg_send![&*window, animator];
        animator.setAlphaValue(1.0);
        let _: () = msg_send![NSAnimationContext::class(), endGrouping];
    }
    animate_content_scale(&window, SCALE_FROM, 1.0, OVERLAY_FADE_IN_SECS, "easeOut");

    // 停留计时：到期后开始退场；新的悬浮窗出现时会被取消
    let target = target_anyobject(delegate);
    let hold = unsafe {
        NSTimer::scheduledTimerWithTimeInterval_target_selector_userInfo_repeats(
            OVERLAY_FADE_IN_SECS + OVERLAY_HOLD_SECS,
            target,
            sel!(overlayHoldExpired:),
            None,
            false,
        )
    };

    with_state(|state| {
        state.overlay_window = Some(window);
        state.overlay_hold_timer = Some(hold);
    });
}

/// 停留计时到期：执行退场动画，动画完成后销毁窗口并清空引用
pub fn overlay_hold_expired() {
    let (window, generation) = with_state(|state| {
        state.overlay_hold_timer = None;
        (state.overlay_window.clone(), state.overlay_generation)
    });
    let Some(window) = window else {
        return;
    };

    let completion = RcBlock::new(move || {
        with_state(|state| {
            // 已被新的悬浮窗取代时跳过清理
            if state.overlay_generation != generation {
                return;
            }
            if let Some(window) = state.overlay_window.take() {
                window.orderOut(None);
            }
        });
    });

    // 退场：淡出并放大到 110%
    unsafe {
        let _: () = msg_send![NSAnimationContext::class(), beginGrouping];
        let context: Retained<NSAnimationContext> =
            msg_send![NSAnimationContext::class(), currentContext];
        let _: () = msg_send![&*context, setDuration: OVERLAY_FADE_OUT_SECS];
        set_timing_function(&context, "easeIn");
        let _: () = msg_send![&*context, setCompletionHandler: &*completion];

        let animator: Retained<NSWindow> = msg_send![&*window, animator];
        animator.setAlphaValue(0.0);
        let _: () = msg_send![NSAnimationContext::class(), endGrouping];
    }
    animate_content_scale(&window, 1.0, SCALE_TO, OVERLAY_FADE_OUT_SECS, "easeIn");
}

/// 构建无边框时间悬浮窗：光标上方居中、全空间可见、不响应输入
fn build_overlay_window(mtm: MainThreadMarker, time_text: &str) -> Retained<NSWindow> {
    let mouse: NSPoint = unsafe { msg_send![NSEvent::class(), mouseLocation] };
    let frame = NSRect::new(
        NSPoint::new(mouse.x - OVERLAY_WIDTH / 2.0, mouse.y + CURSOR_OFFSET),
        NSSize::new(OVERLAY_WIDTH, OVERLAY_HEIGHT),
    );

    let window: Retained<NSWindow> = unsafe {
        msg_send![
            NSWindow::alloc(mtm),
            initWithContentRect: frame
            styleMask: NSWindowStyleMask::Borderless
            backing: NSBackingStoreType::Buffered
            defer: false
        ]
    };

    window.setOpaque(false);
    window.setBackgroundColor(Some(&NSColor::clearColor()));
    window.setHasShadow(false);
    window.setLevel(NSScreenSaverWindowLevel);
    window.setIgnoresMouseEvents(true);
    window.setCollectionBehavior(
        NSWindowCollectionBehavior::CanJoinAllSpaces
            | NSWindowCollectionBehavior::Stationary
            | NSWindowCollectionBehavior::IgnoresCycle,
    );
    // 使用 orderOut 销毁，窗口对象的生命周期交给 Retained
    window.setReleasedWhenClosed(false);

    let view_frame = NSRect::new(NSPoint::new(0.0, 0.0), frame.size);
    let container = NSView::initWithFrame(NSView::alloc(mtm), view_frame);
    container.setWantsLayer(true);
    unsafe {
        let layer: Option<Retained<AnyObject>> = msg_send![&*container, layer];
        if let Some(layer) = layer {
            let background = NSColor::colorWithSRGBRed_green_blue_alpha(0.0, 0.0, 0.0, 0.75);
            let cg_color: *const std::ffi::c_void = msg_send![&*background, CGColor];
            let _: () = msg_send![&*layer, setBackgroundColor: cg_color];
            let _: () = msg_send![&*layer, setCornerRadius: OVERLAY_HEIGHT / 2.0];
        }
    }

    let label_frame = NSRect::new(
        NSPoint::new(0.0, (OVERLAY_HEIGHT - 30.0) / 2.0),
        NSSize::new(OVERLAY_WIDTH, 30.0),
    );
    let label = NSTextField::initWithFrame(NSTextField::alloc(mtm), label_frame);
    label.setStringValue(&NSString::from_str(time_text));
    label.setBezeled(false);
    label.setDrawsBackground(false);
    label.setEditable(false);
    label.setSelectable(false);
    label.setFont(Some(&NSFont::boldSystemFontOfSize(22.0)));
    label.setTextColor(Some(&NSColor::whiteColor()));
    label.setAlignment(NSTextAlignment::Center);
    container.addSubview(&label);

    window.setContentView(Some(&container));
    window
}

/// 为当前动画分组设置时间曲线
fn set_timing_function(context: &NSAnimationContext, name: &str) {
    unsafe {
        let timing: Retained<AnyObject> = msg_send![
            class!(CAMediaTimingFunction),
            functionWithName: &*NSString::from_str(name)
        ];
        let _: () = msg_send![context, setTimingFunction: &*timing];
    }
}

/// 对内容视图的 layer 做 transform.scale 动画
fn animate_content_scale(window: &NSWindow, from: f64, to: f64, duration: f64, timing: &str) {
    let Some(content) = window.contentView() else {
        return;
    };
    unsafe {
        let layer: Option<Retained<AnyObject>> = msg_send![&*content, layer];
        let Some(layer) = layer else {
            return;
        };

        let animation: Retained<AnyObject> = msg_send![
            class!(CABasicAnimation),
            animationWithKeyPath: &*NSString::from_str("transform.scale")
        ];
        let _: () = msg_send![&*animation, setFromValue: &*NSNumber::new_f64(from)];
        let _: () = msg_send![&*animation, setToValue: &*NSNumber::new_f64(to)];
        let _: () = msg_send![&*animation, setDuration: duration];
        let timing_fn: Retained<AnyObject> = msg_send![
            class!(CAMediaTimingFunction),
            functionWithName: &*NSString::from_str(timing)
        ];
        let _: () = msg_send![&*animation, setTimingFunction: &*timing_fn];
        // 退场时保持在结束值，避免销毁前闪回原始大小
        let _: () = msg_send![&*animation, setRemovedOnCompletion: false];
        let _: () = msg_send![&*animation, setFillMode: &*NSString::from_str("forwards")];
        let _: () = msg_send![
            &*layer,
            addAnimation: &*animation
            forKey: &*NSString::from_str("scale")
        ];
    }
}
