/// Unit family of the local measurement system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitType {
    Imperial,
    Metric,
}

/// Locale-specific number formatting used when working with margin
/// measurements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasurementSystem {
    thousands_delimiter: String,
    decimal_delimiter: String,
    unit_type: UnitType,
}

impl MeasurementSystem {
    pub fn new(
        thousands_delimiter: impl Into<String>,
        decimal_delimiter: impl Into<String>,
        unit_type: UnitType,
    ) -> Self {
        Self {
            thousands_delimiter: thousands_delimiter.into(),
            decimal_delimiter: decimal_delimiter.into(),
            unit_type,
        }
    }

    pub fn set_system(
        &mut self,
        thousands_delimiter: impl Into<String>,
        decimal_delimiter: impl Into<String>,
        unit_type: UnitType,
    ) {
        self.thousands_delimiter = thousands_delimiter.into();
        self.decimal_delimiter = decimal_delimiter.into();
        self.unit_type = unit_type;
    }

    pub fn thousands_delimiter(&self) -> &str {
        &self.thousands_delimiter
    }

    pub fn decimal_delimiter(&self) -> &str {
        &self.decimal_delimiter
    }

    pub fn unit_type(&self) -> UnitType {
        self.unit_type
    }
}

impl Default for MeasurementSystem {
    fn default() -> Self {
        Self::new(",", ".", UnitType::Imperial)
    }
}
