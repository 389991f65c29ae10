//! Status-bar menu description, kept as plain data.
//!
//! `render_menu` produces the whole menu for a given state; the AppKit
//! layer materializes it into an `NSMenu` after every state change. The
//! menu is small and only changes on user actions, so a full rebuild is
//! simpler than patching items in place.

/// Countdown durations offered in the "Start Timer" submenu, in minutes.
pub const TIMER_MINUTES: [u64; 6] = [5, 15, 30, 60, 90, 120];

/// Action attached to a menu entry, mapped to a delegate selector by the
/// status-bar layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    ToggleChime,
    StartTimer(u64),
    CancelTimer,
    TestChime,
    Quit,
}

/// One rendered menu entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuEntry {
    Action {
        title: String,
        action: MenuAction,
        key: &'static str,
    },
    Submenu {
        title: &'static str,
        entries: Vec<MenuEntry>,
    },
    Separator,
}

impl MenuEntry {
    fn action(title: impl Into<String>, action: MenuAction) -> Self {
        Self::Action {
            title: title.into(),
            action,
            key: "",
        }
    }

    fn action_with_key(title: impl Into<String>, action: MenuAction, key: &'static str) -> Self {
        Self::Action {
            title: title.into(),
            action,
            key,
        }
    }
}

/// Render the full menu for the current state.
pub fn render_menu(chime_enabled: bool, timer_active: bool) -> Vec<MenuEntry> {
    let toggle_title = if chime_enabled {
        "Disable Chime"
    } else {
        "Enable Chime"
    };

    let mut entries = vec![
        MenuEntry::action(toggle_title, MenuAction::ToggleChime),
        MenuEntry::Separator,
        MenuEntry::Submenu {
            title: "Start Timer",
            entries: TIMER_MINUTES
                .iter()
                .map(|&minutes| {
                    MenuEntry::action(
                        format!("{minutes} Minutes"),
                        MenuAction::StartTimer(minutes),
                    )
                })
                .collect(),
        },
    ];

    if timer_active {
        entries.push(MenuEntry::action("Cancel Timer...", MenuAction::CancelTimer));
    }

    entries.push(MenuEntry::Separator);
    entries.push(MenuEntry::action_with_key(
        "Test Chime",
        MenuAction::TestChime,
        "t",
    ));
    entries.push(MenuEntry::Separator);
    entries.push(MenuEntry::action_with_key("Quit Chime", MenuAction::Quit, "q"));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find_action(entries: &[MenuEntry], wanted: MenuAction) -> Option<&MenuEntry> {
        entries.iter().find(|entry| match entry {
            MenuEntry::Action { action, .. } => *action == wanted,
            _ => false,
        })
    }

    #[test]
    fn test_toggle_title_reflects_state() {
        let enabled = render_menu(true, false);
        let disabled = render_menu(false, false);
        assert!(matches!(
            &enabled[0],
            MenuEntry::Action { title, .. } if title == "Disable Chime"
        ));
        assert!(matches!(
            &disabled[0],
            MenuEntry::Action { title, .. } if title == "Enable Chime"
        ));
    }

    #[test]
    fn test_cancel_entry_only_while_timer_active() {
        let idle = render_menu(true, false);
        let active = render_menu(true, true);
        assert!(find_action(&idle, MenuAction::CancelTimer).is_none());
        assert!(find_action(&active, MenuAction::CancelTimer).is_some());
        // The rest of the menu is unchanged by the timer state.
        assert_eq!(idle.len() + 1, active.len());
    }

    #[test]
    fn test_timer_submenu_lists_fixed_durations() {
        let entries = render_menu(true, false);
        let submenu = entries
            .iter()
            .find_map(|entry| match entry {
                MenuEntry::Submenu { title, entries } if *title == "Start Timer" => Some(entries),
                _ => None,
            })
            .expect("timer submenu");

        assert_eq!(submenu.len(), TIMER_MINUTES.len());
        for (entry, minutes) in submenu.iter().zip(TIMER_MINUTES) {
            match entry {
                MenuEntry::Action { title, action, .. } => {
                    assert_eq!(*action, MenuAction::StartTimer(minutes));
                    assert_eq!(*title, format!("{minutes} Minutes"));
                }
                other => panic!("unexpected submenu entry: {other:?}"),
            }
        }
    }

    #[test]
    fn test_key_equivalents() {
        let entries = render_menu(false, true);
        let test_chime = find_action(&entries, MenuAction::TestChime).unwrap();
        let quit = find_action(&entries, MenuAction::Quit).unwrap();
        assert!(matches!(test_chime, MenuEntry::Action { key: "t", .. }));
        assert!(matches!(quit, MenuEntry::Action { key: "q", .. }));
    }
}
