use std::time::{Duration, Instant};

use chrono::{DateTime, Datelike, Local, NaiveDateTime, TimeZone, Timelike};

use crate::{mapping::linear_map, ClockError, Result};

/// Wall-clock reading taken once per frame. Every value drawn in a frame
/// derives from a single snapshot so the hands never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSnapshot {
    /// 0..=23
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl TimeSnapshot {
    pub fn from_datetime<Tz: TimeZone>(at: &DateTime<Tz>) -> Self {
        Self::from_naive(&at.naive_local())
    }

    pub fn from_naive(at: &NaiveDateTime) -> Self {
        Self {
            hour: at.hour(),
            minute: at.minute(),
            second: at.second(),
            day: at.day(),
            month: at.month(),
            year: at.year(),
        }
    }

    /// Parses `YYYY-MM-DDTHH:MM:SS`.
    pub fn parse(raw: &str) -> Result<Self> {
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
            .map(|at| Self::from_naive(&at))
            .map_err(|_| ClockError::InvalidTime(raw.to_string()))
    }

    /// Zero-padded 24 hour `HH:MM:SS`.
    pub fn clock_text(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }

    /// Unpadded `D/M/YYYY`.
    pub fn date_text(&self) -> String {
        format!("{}/{}/{}", self.day, self.month, self.year)
    }
}

/// Port for reading the current local time.
pub trait TimeSource {
    fn now(&self) -> TimeSnapshot;
}

impl<T: TimeSource + ?Sized> TimeSource for Box<T> {
    fn now(&self) -> TimeSnapshot {
        (**self).now()
    }
}

/// Local time from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> TimeSnapshot {
        TimeSnapshot::from_datetime(&Local::now())
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedTimeSource(pub TimeSnapshot);

impl TimeSource for FixedTimeSource {
    fn now(&self) -> TimeSnapshot {
        self.0
    }
}

/// Hand directions in degrees, screen orientation, -90 being 12 o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}

impl HandAngles {
    /// Minutes carry into the hour hand and seconds into the minute hand,
    /// so both creep forward instead of stepping.
    pub fn from_time(time: &TimeSnapshot) -> Self {
        let hour = (time.hour % 12) as f32;
        let minute = time.minute as f32;
        let second = time.second as f32;

        Self {
            hour: linear_map(hour, 0.0, 12.0, -90.0, 270.0)
                + linear_map(minute, 0.0, 60.0, 0.0, 30.0),
            minute: linear_map(minute, 0.0, 60.0, -90.0, 270.0)
                + linear_map(second, 0.0, 60.0, 0.0, 6.0),
            second: linear_map(second, 0.0, 60.0, -90.0, 270.0),
        }
    }
}

/// Fixed-cadence tick trigger for hosts without their own frame scheduler.
#[derive(Debug, Clone, Copy)]
pub struct Ticker {
    interval: Duration,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Calls `on_tick` with the frame index, `frames` times or forever when
    /// `None`. Time spent inside the callback counts towards the interval.
    pub fn run<F>(&self, frames: Option<u64>, mut on_tick: F) -> Result<()>
    where
        F: FnMut(u64) -> Result<()>,
    {
        let mut frame = 0;
        while frames.map_or(true, |limit| frame < limit) {
            let started = Instant::now();
            on_tick(frame)?;
            frame += 1;

            if frames.map_or(true, |limit| frame < limit) {
                std::thread::sleep(self.interval.saturating_sub(started.elapsed()));
            }
        }
        Ok(())
    }
}
