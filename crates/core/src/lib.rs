pub mod error;
pub mod notification;
pub mod record;
pub mod sink;

pub use error::{Result, TrayError};
pub use notification::{Notification, NotificationKind};
pub use record::{BatteryRecord, BatteryState};
pub use sink::{IconSink, NotificationSink, StatusSource};
