//! Display units

/// Units the reading can be shown in, in button cycling order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpeedUnit {
    #[default]
    MetersPerSecond,
    MilesPerHour,
    KilometersPerHour,
    InchesPerSecond,
    FeetPerSecond,
    CentimetersPerSecond,
}

impl SpeedUnit {
    /// Number of units
    pub const COUNT: usize = 6;

    /// All units in cycling order
    pub const ALL: [SpeedUnit; Self::COUNT] = [
        SpeedUnit::MetersPerSecond,
        SpeedUnit::MilesPerHour,
        SpeedUnit::KilometersPerHour,
        SpeedUnit::InchesPerSecond,
        SpeedUnit::FeetPerSecond,
        SpeedUnit::CentimetersPerSecond,
    ];

    /// Short label shown next to the value
    pub const fn label(self) -> &'static str {
        match self {
            SpeedUnit::MetersPerSecond => "m/s",
            SpeedUnit::MilesPerHour => "mph",
            SpeedUnit::KilometersPerHour => "km/h",
            SpeedUnit::InchesPerSecond => "in/s",
            SpeedUnit::FeetPerSecond => "ft/s",
            SpeedUnit::CentimetersPerSecond => "cm/s",
        }
    }

    /// Factor from m/s into this unit
    pub const fn multiplier(self) -> f64 {
        match self {
            SpeedUnit::MetersPerSecond => 1.0,
            SpeedUnit::MilesPerHour => 2.23694,
            SpeedUnit::KilometersPerHour => 3.6,
            SpeedUnit::InchesPerSecond => 39.3701,
            SpeedUnit::FeetPerSecond => 3.28084,
            SpeedUnit::CentimetersPerSecond => 100.0,
        }
    }

    /// Position in cycling order, always below [`SpeedUnit::COUNT`]
    pub const fn index(self) -> u8 {
        match self {
            SpeedUnit::MetersPerSecond => 0,
            SpeedUnit::MilesPerHour => 1,
            SpeedUnit::KilometersPerHour => 2,
            SpeedUnit::InchesPerSecond => 3,
            SpeedUnit::FeetPerSecond => 4,
            SpeedUnit::CentimetersPerSecond => 5,
        }
    }

    /// Unit at `index`, or `None` if out of range
    pub const fn from_index(index: u8) -> Option<SpeedUnit> {
        if (index as usize) < Self::COUNT {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Next unit in cycling order, wrapping after cm/s
    pub const fn next(self) -> SpeedUnit {
        Self::ALL[(self.index() as usize + 1) % Self::COUNT]
    }

    /// Convert a speed in m/s into this unit
    pub fn convert(self, speed_m_s: f64) -> f64 {
        speed_m_s * self.multiplier()
    }
}

/// Steps through [`SpeedUnit`] on each button press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnitCycler {
    current: SpeedUnit,
}

impl UnitCycler {
    pub const fn new(start: SpeedUnit) -> Self {
        Self { current: start }
    }

    pub const fn current(&self) -> SpeedUnit {
        self.current
    }

    /// Move to the next unit and return it
    pub fn advance(&mut self) -> SpeedUnit {
        self.current = self.current.next();
        self.current
    }

    pub fn set(&mut self, unit: SpeedUnit) {
        self.current = unit;
    }
}
