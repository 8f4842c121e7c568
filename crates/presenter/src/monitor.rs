use crate::{icon::icon_for, notify::notification_for, NotificationGate};
use futures::stream::{self, SelectAll, StreamExt};
use std::time::Duration;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info, warn};
use tray_core::{BatteryRecord, IconSink, NotificationSink, Result, StatusSource};

/// Polling periods shared by every monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    /// Icon and tooltip refresh.
    pub icon:   Duration,
    /// Threshold notification check.
    pub notify: Duration,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            icon:   Duration::from_secs(5),
            notify: Duration::from_secs(120),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tick {
    Icon,
    Notify,
}

/// Watches one physical battery and owns its tray icon and notification
/// surface.
pub struct BatteryMonitor<S, I, N> {
    index:    usize,
    source:   S,
    icon:     I,
    notifier: N,
    gate:     NotificationGate,
    last:     Option<BatteryRecord>,
}

impl<S, I, N> BatteryMonitor<S, I, N>
where
    S: StatusSource,
    I: IconSink,
    N: NotificationSink,
{
    pub fn new(index: usize, source: S, icon: I, notifier: N, gate: NotificationGate) -> Self {
        Self { index, source, icon, notifier, gate, last: None }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Record computed by the most recent poll.
    pub fn last_record(&self) -> Option<&BatteryRecord> {
        self.last.as_ref()
    }

    /// Re-read the battery and push icon and tooltip to the tray, even when
    /// nothing changed.
    pub async fn refresh_icon(&mut self) -> Result<()> {
        let record = tray_system::read(&self.source, self.index).await?;
        let icon = icon_for(&record);
        debug!(battery = self.index, state = %record.state, pct = record.percentage, icon, "refresh");

        if let Err(e) = self.icon.set_icon(icon).await {
            warn!("battery {}: cannot set tray icon: {e}", self.index);
        }
        if let Err(e) = self.icon.set_tooltip(&record.tooltip).await {
            warn!("battery {}: cannot set tray tooltip: {e}", self.index);
        }

        self.last = Some(record);
        Ok(())
    }

    /// Re-read the battery and deliver a threshold notification if one is due.
    pub async fn check_notify(&mut self) -> Result<()> {
        let record = tray_system::read(&self.source, self.index).await?;

        if let Some(notification) = self.gate.admit(notification_for(&record)) {
            info!(battery = self.index, kind = ?notification.kind, "{}", notification.title);
            if let Err(e) = self.notifier.notify(&notification).await {
                warn!("battery {}: cannot send notification: {e}", self.index);
            }
        }

        self.last = Some(record);
        Ok(())
    }

    async fn handle(&mut self, tick: Tick) -> Result<()> {
        match tick {
            Tick::Icon   => self.refresh_icon().await,
            Tick::Notify => self.check_notify().await,
        }
    }
}

fn ticker(index: usize, tick: Tick, period: Duration) -> impl futures::Stream<Item = (usize, Tick)> {
    let mut interval = time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    stream::unfold(interval, move |mut interval| async move {
        interval.tick().await;
        Some(((index, tick), interval))
    })
}

/// Run every monitor's icon and notification timers until a poll fails.
///
/// Ticks from all monitors are merged into one stream and handled one at a
/// time; each poll runs to completion before the next starts.  The first
/// tick of each timer fires immediately.  Only a status command failure ends
/// the loop.
pub async fn drive<S, I, N>(monitors: &mut [BatteryMonitor<S, I, N>], schedule: Schedule) -> Result<()>
where
    S: StatusSource,
    I: IconSink,
    N: NotificationSink,
{
    let mut ticks = SelectAll::new();
    for index in 0..monitors.len() {
        ticks.push(ticker(index, Tick::Icon, schedule.icon).boxed());
        ticks.push(ticker(index, Tick::Notify, schedule.notify).boxed());
    }

    info!(
        "monitoring {} battery(ies): icon every {:?}, notifications every {:?}",
        monitors.len(),
        schedule.icon,
        schedule.notify
    );

    while let Some((index, tick)) = ticks.next().await {
        monitors[index].handle(tick).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use tray_core::{BatteryState, Notification, NotificationKind, TrayError};

    /// Replays outputs in order; fails once the script runs out.
    struct Script(RefCell<VecDeque<&'static str>>);

    impl Script {
        fn new(outputs: &[&'static str]) -> Self {
            Self(RefCell::new(outputs.iter().copied().collect()))
        }
    }

    impl StatusSource for Script {
        async fn output(&self) -> Result<String> {
            self.0
                .borrow_mut()
                .pop_front()
                .map(str::to_string)
                .ok_or_else(|| TrayError::Command("acpi: not found".into()))
        }
    }

    #[derive(Default)]
    struct FakeTray {
        icons:    Vec<String>,
        tooltips: Vec<String>,
        broken:   bool,
    }

    impl IconSink for FakeTray {
        async fn set_icon(&mut self, icon: &str) -> Result<()> {
            if self.broken {
                return Err(TrayError::DBus("no session bus".into()));
            }
            self.icons.push(icon.to_string());
            Ok(())
        }

        async fn set_tooltip(&mut self, text: &str) -> Result<()> {
            self.tooltips.push(text.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeNotifier {
        sent:     Vec<Notification>,
        attempts: usize,
        broken:   bool,
    }

    impl NotificationSink for FakeNotifier {
        async fn notify(&mut self, notification: &Notification) -> Result<()> {
            self.attempts += 1;
            if self.broken {
                return Err(TrayError::DBus("no notification daemon".into()));
            }
            self.sent.push(notification.clone());
            Ok(())
        }
    }

    const LOW: &str = "Battery 0: Discharging, 15%, 01:23:45 remaining\n";
    const CHARGING: &str = "Battery 0: Discharging, 60%, 03:00:00 remaining\n\
                            Battery 1: Charging, 85%, 00:10:00 until charged\n";

    fn monitor(
        index: usize,
        outputs: &[&'static str],
        repeat: bool,
    ) -> BatteryMonitor<Script, FakeTray, FakeNotifier> {
        BatteryMonitor::new(
            index,
            Script::new(outputs),
            FakeTray::default(),
            FakeNotifier::default(),
            NotificationGate::new(repeat),
        )
    }

    #[tokio::test]
    async fn low_battery_scenario() {
        let mut m = monitor(0, &[LOW, LOW], false);
        m.refresh_icon().await.unwrap();
        m.check_notify().await.unwrap();

        assert_eq!(m.icon.icons, ["battery-020"]);
        assert_eq!(m.icon.tooltips, ["Discharging, 15%, 01:23:45 remaining"]);
        assert_eq!(m.notifier.sent.len(), 1);
        assert_eq!(m.notifier.sent[0].kind, NotificationKind::Low);
        assert_eq!(m.notifier.sent[0].body, "Discharging, 15%, 01:23:45 remaining");
    }

    #[tokio::test]
    async fn charging_second_battery_scenario() {
        let mut m = monitor(1, &[CHARGING, CHARGING], false);
        m.refresh_icon().await.unwrap();
        m.check_notify().await.unwrap();

        assert_eq!(m.icon.icons, ["battery-090-charging"]);
        assert_eq!(m.notifier.sent[0].kind, NotificationKind::Full);
        assert_eq!(m.last_record().map(|r| r.percentage), Some(85));
    }

    #[tokio::test]
    async fn absent_battery_shows_missing() {
        let mut m = monitor(1, &["Battery 0: Full, 100%\n\n"], false);
        m.refresh_icon().await.unwrap();

        assert_eq!(m.icon.icons, ["battery-missing"]);
        assert_eq!(m.icon.tooltips, ["Battery not found"]);
        assert_eq!(m.last_record(), Some(&BatteryRecord::missing()));
    }

    #[tokio::test]
    async fn unchanged_icon_is_pushed_every_tick() {
        let mut m = monitor(0, &[LOW, LOW, LOW], false);
        for _ in 0..3 {
            m.refresh_icon().await.unwrap();
        }
        assert_eq!(m.icon.icons.len(), 3);
        assert_eq!(m.icon.tooltips.len(), 3);
    }

    #[tokio::test]
    async fn repeated_low_checks_notify_once() {
        let mut m = monitor(0, &[LOW, LOW, LOW], false);
        for _ in 0..3 {
            m.check_notify().await.unwrap();
        }
        assert_eq!(m.notifier.sent.len(), 1);
    }

    #[tokio::test]
    async fn repeat_mode_notifies_every_check() {
        let mut m = monitor(0, &[LOW, LOW, LOW], true);
        for _ in 0..3 {
            m.check_notify().await.unwrap();
        }
        assert_eq!(m.notifier.sent.len(), 3);
    }

    #[tokio::test]
    async fn sink_failures_are_not_fatal() {
        let mut m = monitor(0, &[LOW, LOW], false);
        m.icon.broken = true;
        m.notifier.broken = true;

        m.refresh_icon().await.unwrap();
        m.check_notify().await.unwrap();

        assert!(m.icon.icons.is_empty());
        assert_eq!(m.icon.tooltips.len(), 1);
        assert_eq!(m.notifier.attempts, 1);
        assert_eq!(m.last_record().map(|r| r.state), Some(BatteryState::Discharging));
    }

    #[tokio::test]
    async fn command_failure_is_fatal() {
        let mut m = monitor(0, &[], false);
        assert!(matches!(m.refresh_icon().await, Err(TrayError::Command(_))));
        assert!(matches!(m.check_notify().await, Err(TrayError::Command(_))));
    }

    #[tokio::test]
    async fn drive_stops_on_command_failure() {
        let mut monitors = vec![monitor(0, &[LOW, LOW, LOW, LOW], false)];
        let schedule = Schedule {
            icon:   Duration::from_millis(1),
            notify: Duration::from_secs(3600),
        };

        let result = time::timeout(Duration::from_secs(5), drive(&mut monitors, schedule))
            .await
            .expect("driver should stop once the command fails");

        assert!(matches!(result, Err(TrayError::Command(_))));
        let m = &monitors[0];
        // One immediate notification check, the rest went to icon refreshes.
        assert_eq!(m.notifier.sent.len(), 1);
        assert_eq!(m.icon.icons.len(), 3);
    }
}
