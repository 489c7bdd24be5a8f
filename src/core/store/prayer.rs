use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrayerKey {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
    Qiyam,
}

impl PrayerKey {
    /// In order of the day.
    pub const ALL: [PrayerKey; 6] = [
        PrayerKey::Fajr,
        PrayerKey::Dhuhr,
        PrayerKey::Asr,
        PrayerKey::Maghrib,
        PrayerKey::Isha,
        PrayerKey::Qiyam,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrayerKey::Fajr => "fajr",
            PrayerKey::Dhuhr => "dhuhr",
            PrayerKey::Asr => "asr",
            PrayerKey::Maghrib => "maghrib",
            PrayerKey::Isha => "isha",
            PrayerKey::Qiyam => "qiyam",
        }
    }
}

impl fmt::Display for PrayerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrayerKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrayerKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow::anyhow!("Invalid prayer: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrayerTime {
    pub name: String,
    pub short_code: String,
    /// "HH:MM", stored as given.
    pub time: String,
}

impl PrayerTime {
    fn new(name: &str, short_code: &str, time: &str) -> Self {
        Self {
            name: name.to_string(),
            short_code: short_code.to_string(),
            time: time.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrayerTimes {
    pub fajr: PrayerTime,
    pub dhuhr: PrayerTime,
    pub asr: PrayerTime,
    pub maghrib: PrayerTime,
    pub isha: PrayerTime,
    pub qiyam: PrayerTime,
}

impl Default for PrayerTimes {
    fn default() -> Self {
        Self {
            fajr: PrayerTime::new("Fajr", "F", "05:00"),
            dhuhr: PrayerTime::new("Dhuhr", "D", "12:00"),
            asr: PrayerTime::new("Asr", "A", "15:00"),
            maghrib: PrayerTime::new("Maghrib", "M", "18:00"),
            isha: PrayerTime::new("Isha", "I", "20:00"),
            qiyam: PrayerTime::new("Qiyam", "Q", "23:00"),
        }
    }
}

impl PrayerTimes {
    pub fn get(&self, key: PrayerKey) -> &PrayerTime {
        match key {
            PrayerKey::Fajr => &self.fajr,
            PrayerKey::Dhuhr => &self.dhuhr,
            PrayerKey::Asr => &self.asr,
            PrayerKey::Maghrib => &self.maghrib,
            PrayerKey::Isha => &self.isha,
            PrayerKey::Qiyam => &self.qiyam,
        }
    }

    pub(super) fn get_mut(&mut self, key: PrayerKey) -> &mut PrayerTime {
        match key {
            PrayerKey::Fajr => &mut self.fajr,
            PrayerKey::Dhuhr => &mut self.dhuhr,
            PrayerKey::Asr => &mut self.asr,
            PrayerKey::Maghrib => &mut self.maghrib,
            PrayerKey::Isha => &mut self.isha,
            PrayerKey::Qiyam => &mut self.qiyam,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (PrayerKey, &PrayerTime)> {
        PrayerKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }
}

pub trait PrayerRepository {
    fn prayer_times(&self) -> &PrayerTimes;
    fn update_prayer_time(&mut self, prayer: PrayerKey, time: &str);
    /// String-keyed variant for hosts that only have the prayer's name.
    /// An unknown name is an error and changes nothing.
    fn update_prayer_time_by_name(&mut self, prayer: &str, time: &str) -> anyhow::Result<()> {
        let key: PrayerKey = prayer.parse()?;
        self.update_prayer_time(key, time);
        Ok(())
    }
}
