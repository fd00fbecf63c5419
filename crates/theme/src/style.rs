/// Values at or above this level are drawn in the critical color.
pub const CRITICAL_LEVEL: f64 = 80.0;

/// Color class of a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Normal,
    Critical,
}

impl Severity {
    pub fn of(value: f64) -> Self {
        if value < CRITICAL_LEVEL {
            Self::Normal
        } else {
            Self::Critical
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_inclusive() {
        assert_eq!(Severity::of(45.0), Severity::Normal);
        assert_eq!(Severity::of(79.9), Severity::Normal);
        assert_eq!(Severity::of(80.0), Severity::Critical);
    }
}
