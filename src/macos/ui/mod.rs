//! UI 模块
//!
//! 包含所有用户界面相关的子模块。

pub mod blink;
pub mod overlay;
pub mod status_bar;

pub use blink::{blink_tick, start_blink};
pub use overlay::{overlay_hold_expired, show_time_overlay};
pub use status_bar::{install_status_item, rebuild_menu, refresh_icon, target_anyobject};
