/// Generator of step value series.
use crate::field::FieldValue;

/// Generator (iterator) state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct StepSeries {
    max: FieldValue,
    step: FieldValue,
    next: FieldValue,
}

impl StepSeries {
    /// Caller is responsible to ensure that
    /// maximum serial value (max+step) fits the value type.
    ///
    /// Panics if the step is 0.
    #[inline]
    pub(crate) fn new(start: FieldValue, max: FieldValue, step: FieldValue) -> Self {
        if step == 0 {
            panic!("step value is 0");
        }

        Self { next: start, max, step }
    }
}

impl Iterator for StepSeries {
    type Item = FieldValue;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.max {
            None
        } else {
            let current = self.next;
            self.next += self.step;
            Some(current)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 5, 1, vec![0, 1, 2, 3, 4, 5])]
    #[case(0, 5, 2, vec![0, 2, 4])]
    #[case(0, 5, 5, vec![0, 5])]
    #[case(0, 5, 6, vec![0])]
    #[case(3, 59, 11, vec![3, 14, 25, 36, 47, 58])]
    #[case(0, 59, 18, vec![0, 18, 36, 54])]
    #[case(59, 59, 1, vec![59])]
    #[case(15, 12, 5, vec![])]
    fn step_series(
        #[case] start: FieldValue,
        #[case] max: FieldValue,
        #[case] step: FieldValue,
        #[case] expected: Vec<FieldValue>,
    ) {
        assert_eq!(StepSeries::new(start, max, step).collect::<Vec<_>>(), expected);
    }

    #[test]
    #[should_panic]
    fn step_series_should_panic_on_zero_step() {
        StepSeries::new(0, 59, 0);
    }
}
