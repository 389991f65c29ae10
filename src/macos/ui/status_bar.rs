//! 状态栏 UI 模块

use std::time::Instant;

use objc2::rc::Retained;
use objc2::runtime::{AnyObject, Sel};
use objc2::{msg_send, sel, MainThreadOnly};
use objc2_app_kit::{
    NSImage, NSMenu, NSMenuItem, NSStatusBar, NSStatusBarButton, NSVariableStatusItemLength,
};
use objc2_foundation::NSString;

use crate::clock::countdown_suffix;
use crate::menu::{render_menu, MenuAction, MenuEntry};

use super::super::constants::{ICON_SYMBOL_DISABLED, ICON_SYMBOL_ENABLED};
use super::super::delegate::ChimeDelegate;
use super::super::state::{with_state, with_state_ref};

/// 获取 delegate 的 `AnyObject` 引用
pub fn target_anyobject(delegate: &ChimeDelegate) -> &AnyObject {
    delegate.as_super().as_super()
}

/// 创建状态栏项
pub fn install_status_item() {
    let status_item =
        NSStatusBar::systemStatusBar().statusItemWithLength(NSVariableStatusItemLength);
    with_state(|state| {
        state.status_item = Some(status_item);
    });
}

/// 获取状态栏按钮；状态栏项尚未创建或没有按钮时返回 `None`
pub(crate) fn status_button() -> Option<Retained<NSStatusBarButton>> {
    with_state_ref(|state| {
        let status_item = state.status_item.as_ref()?;
        unsafe { msg_send![&**status_item, button] }
    })
}

/// 刷新状态栏图标与倒计时后缀
pub fn refresh_icon() {
    let Some(button) = status_button() else {
        return;
    };

    let (chime_enabled, suffix) = with_state_ref(|state| {
        let suffix = state
            .countdown_end
            .map(|end| countdown_suffix(end.saturating_duration_since(Instant::now())))
            .unwrap_or_default();
        (state.config.chime_enabled, suffix)
    });

    let symbol = if chime_enabled {
        ICON_SYMBOL_ENABLED
    } else {
        ICON_SYMBOL_DISABLED
    };
    let name = NSString::from_str(symbol);
    let description = NSString::from_str("Chime");
    let image =
        unsafe { NSImage::imageWithSystemSymbolName_accessibilityDescription(&name, Some(&description)) };

    unsafe {
        let _: () = msg_send![&*button, setImage: image.as_deref()];
        let _: () = msg_send![&*button, setTitle: &*NSString::from_str(&suffix)];
    }
}

/// 根据当前状态整体重建菜单
pub fn rebuild_menu(delegate: &ChimeDelegate) {
    let mtm = delegate.mtm();

    let (chime_enabled, timer_active) =
        with_state_ref(|state| (state.config.chime_enabled, state.countdown_end.is_some()));

    let menu = NSMenu::new(mtm);
    menu.setAutoenablesItems(false);
    for entry in render_menu(chime_enabled, timer_active) {
        add_entry(&menu, &entry, delegate);
    }

    with_state(|state| {
        if let Some(status_item) = state.status_item.as_ref() {
            status_item.setMenu(Some(&menu));
        }
    });
}

fn add_entry(menu: &NSMenu, entry: &MenuEntry, delegate: &ChimeDelegate) {
    let mtm = delegate.mtm();
    match entry {
        MenuEntry::Separator => menu.addItem(&NSMenuItem::separatorItem(mtm)),
        MenuEntry::Action { title, action, key } => {
            let item = unsafe {
                menu.addItemWithTitle_action_keyEquivalent(
                    &NSString::from_str(title),
                    Some(selector_for(*action)),
                    &NSString::from_str(key),
                )
            };
            if let MenuAction::StartTimer(minutes) = action {
                let tag = isize::try_from(*minutes).unwrap_or_default();
                unsafe {
                    let _: () = msg_send![&*item, setTag: tag];
                }
            }
            unsafe { item.setTarget(Some(target_anyobject(delegate))) };
        }
        MenuEntry::Submenu { title, entries } => {
            let item = unsafe {
                menu.addItemWithTitle_action_keyEquivalent(
                    &NSString::from_str(title),
                    None,
                    &NSString::from_str(""),
                )
            };
            let submenu = NSMenu::new(mtm);
            submenu.setAutoenablesItems(false);
            for sub in entries {
                add_entry(&submenu, sub, delegate);
            }
            unsafe {
                let _: () = msg_send![&*item, setSubmenu: &*submenu];
            }
        }
    }
}

fn selector_for(action: MenuAction) -> Sel {
    match action {
        MenuAction::ToggleChime => sel!(toggleChime:),
        MenuAction::StartTimer(_) => sel!(startTimer:),
        MenuAction::CancelTimer => sel!(cancelTimer:),
        MenuAction::TestChime => sel!(testChime:),
        MenuAction::Quit => sel!(quit:),
    }
}
