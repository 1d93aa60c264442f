//! Published concentration-to-index breakpoint tables (μg/m³).

use crate::models::Pollutant;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PollutantBreakpoint {
    pub concentration_low: f64,
    pub concentration_high: f64,
    pub index_low: u32,
    pub index_high: u32,
}

impl PollutantBreakpoint {
    const fn new(concentration_low: f64, concentration_high: f64, index_low: u32, index_high: u32) -> Self {
        Self {
            concentration_low,
            concentration_high,
            index_low,
            index_high,
        }
    }

    pub fn contains(&self, concentration: f64) -> bool {
        concentration >= self.concentration_low && concentration <= self.concentration_high
    }

    /// Linear interpolation inside the band, rounded to the nearest index
    pub fn interpolate(&self, concentration: f64) -> u32 {
        let slope = (self.index_high - self.index_low) as f64
            / (self.concentration_high - self.concentration_low);
        let index = slope * (concentration - self.concentration_low) + self.index_low as f64;
        index.round() as u32
    }
}

/// Index reported for concentrations above the last band
pub const INDEX_CEILING: u32 = 500;

static PM25: [PollutantBreakpoint; 6] = [
    PollutantBreakpoint::new(0.0, 12.0, 0, 50),
    PollutantBreakpoint::new(12.1, 35.4, 51, 100),
    PollutantBreakpoint::new(35.5, 55.4, 101, 150),
    PollutantBreakpoint::new(55.5, 150.4, 151, 200),
    PollutantBreakpoint::new(150.5, 250.4, 201, 300),
    PollutantBreakpoint::new(250.5, 500.4, 301, 500),
];

static PM10: [PollutantBreakpoint; 6] = [
    PollutantBreakpoint::new(0.0, 54.0, 0, 50),
    PollutantBreakpoint::new(55.0, 154.0, 51, 100),
    PollutantBreakpoint::new(155.0, 254.0, 101, 150),
    PollutantBreakpoint::new(255.0, 354.0, 151, 200),
    PollutantBreakpoint::new(355.0, 424.0, 201, 300),
    PollutantBreakpoint::new(425.0, 604.0, 301, 500),
];

static NO2: [PollutantBreakpoint; 6] = [
    PollutantBreakpoint::new(0.0, 53.0, 0, 50),
    PollutantBreakpoint::new(54.0, 100.0, 51, 100),
    PollutantBreakpoint::new(101.0, 360.0, 101, 150),
    PollutantBreakpoint::new(361.0, 649.0, 151, 200),
    PollutantBreakpoint::new(650.0, 1249.0, 201, 300),
    PollutantBreakpoint::new(1250.0, 2049.0, 301, 500),
];

static SO2: [PollutantBreakpoint; 6] = [
    PollutantBreakpoint::new(0.0, 35.0, 0, 50),
    PollutantBreakpoint::new(36.0, 75.0, 51, 100),
    PollutantBreakpoint::new(76.0, 185.0, 101, 150),
    PollutantBreakpoint::new(186.0, 304.0, 151, 200),
    PollutantBreakpoint::new(305.0, 604.0, 201, 300),
    PollutantBreakpoint::new(605.0, 1004.0, 301, 500),
];

static CO: [PollutantBreakpoint; 6] = [
    PollutantBreakpoint::new(0.0, 4400.0, 0, 50),
    PollutantBreakpoint::new(4401.0, 9400.0, 51, 100),
    PollutantBreakpoint::new(9401.0, 12400.0, 101, 150),
    PollutantBreakpoint::new(12401.0, 15400.0, 151, 200),
    PollutantBreakpoint::new(15401.0, 30400.0, 201, 300),
    PollutantBreakpoint::new(30401.0, 50400.0, 301, 500),
];

static O3: [PollutantBreakpoint; 6] = [
    PollutantBreakpoint::new(0.0, 54.0, 0, 50),
    PollutantBreakpoint::new(55.0, 70.0, 51, 100),
    PollutantBreakpoint::new(71.0, 85.0, 101, 150),
    PollutantBreakpoint::new(86.0, 105.0, 151, 200),
    PollutantBreakpoint::new(106.0, 200.0, 201, 300),
    PollutantBreakpoint::new(201.0, 504.0, 301, 500),
];

/// Breakpoint table for a pollutant, ascending by concentration
pub fn breakpoints(pollutant: Pollutant) -> &'static [PollutantBreakpoint] {
    match pollutant {
        Pollutant::Pm25 => &PM25,
        Pollutant::Pm10 => &PM10,
        Pollutant::No2 => &NO2,
        Pollutant::So2 => &SO2,
        Pollutant::Co => &CO,
        Pollutant::O3 => &O3,
    }
}
