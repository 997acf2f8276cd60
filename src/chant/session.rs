use super::BEADS_PER_ROUND;

/// Where a chanting session stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChantState {
    #[default]
    Idle,
    Chanting,
    Done,
}

/// Requested number of rounds, always at least one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rounds(u32);

impl Rounds {
    pub const MIN: Rounds = Rounds(1);

    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(1, i64::from(u32::MAX)) as u32)
    }

    /// Lenient parse of a rounds field: fractions truncate, anything
    /// non-numeric or below one becomes one.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if let Ok(value) = input.parse::<i64>() {
            return Self::clamped(value);
        }
        match input.parse::<f64>() {
            Ok(value) if value.is_finite() => Self::clamped(value.trunc() as i64),
            _ => Self::MIN,
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn total_units(self) -> u64 {
        u64::from(self.0) * BEADS_PER_ROUND
    }
}

impl Default for Rounds {
    fn default() -> Self {
        Self::MIN
    }
}

/// Progress of one chanting session. Copied out to observers on every change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Session {
    rounds: Option<Rounds>,
    total_units: u64,
    completed_units: u64,
    state: ChantState,
}

impl Session {
    pub fn state(&self) -> ChantState {
        self.state
    }

    pub fn rounds(&self) -> Option<Rounds> {
        self.rounds
    }

    pub fn total_units(&self) -> u64 {
        self.total_units
    }

    pub fn completed_units(&self) -> u64 {
        self.completed_units
    }

    pub fn current_bead_index(&self) -> usize {
        (self.completed_units % BEADS_PER_ROUND) as usize
    }

    pub fn is_chanting(&self) -> bool {
        self.state == ChantState::Chanting
    }

    pub(crate) fn begin(&mut self, rounds: Rounds) {
        *self = Self {
            rounds: Some(rounds),
            total_units: rounds.total_units(),
            completed_units: 0,
            state: ChantState::Chanting,
        };
    }

    /// Count one finished chant. Ignored outside `Chanting` or once the
    /// total is reached.
    pub(crate) fn record_unit(&mut self) -> bool {
        if self.state != ChantState::Chanting || self.completed_units >= self.total_units {
            return false;
        }
        self.completed_units += 1;
        true
    }

    pub(crate) fn complete(&mut self) {
        if self.state == ChantState::Chanting {
            self.state = ChantState::Done;
        }
    }

    /// Back to `Idle`, keeping the progress reached so far.
    pub(crate) fn halt(&mut self) {
        self.state = ChantState::Idle;
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_clamp_to_one() {
        assert_eq!(Rounds::clamped(0).get(), 1);
        assert_eq!(Rounds::clamped(-3).get(), 1);
        assert_eq!(Rounds::clamped(4).get(), 4);
    }

    #[test]
    fn rounds_parse_is_lenient() {
        assert_eq!(Rounds::parse(" 3 ").get(), 3);
        assert_eq!(Rounds::parse("2.9").get(), 2);
        assert_eq!(Rounds::parse("abc").get(), 1);
        assert_eq!(Rounds::parse("").get(), 1);
        assert_eq!(Rounds::parse("-7").get(), 1);
        assert_eq!(Rounds::parse("NaN").get(), 1);
    }

    #[test]
    fn record_unit_stops_at_total() {
        let mut session = Session::default();
        session.begin(Rounds::MIN);
        for _ in 0..BEADS_PER_ROUND {
            assert!(session.record_unit());
        }
        assert!(!session.record_unit());
        assert_eq!(session.completed_units(), BEADS_PER_ROUND);
    }

    #[test]
    fn record_unit_ignored_when_idle() {
        let mut session = Session::default();
        session.begin(Rounds::MIN);
        session.halt();
        assert!(!session.record_unit());
        assert_eq!(session.completed_units(), 0);
    }

    #[test]
    fn complete_only_from_chanting() {
        let mut session = Session::default();
        session.complete();
        assert_eq!(session.state(), ChantState::Idle);
    }
}
