/// A finite-state machine that can be simulated.
pub trait Simulatable {
    type Simulator<'a>: Simulate
    where
        Self: 'a;

    /// Creates a simulator positioned at the start of the finite-state
    /// machine.
    fn to_simulator(&self) -> Self::Simulator<'_>;
}

/// A simulation of a finite-state machine over some input.
pub trait Simulate {
    /// Simulates the finite-state machine from start to finish and returns
    /// whether it accepts the input.
    fn run(mut self, input: &str) -> bool
    where
        Self: Sized,
    {
        self.feed_str(input)
    }

    /// Returns whether the finite-state machine accepts the input fed so far.
    fn is_accepting(&self) -> bool;

    /// Feeds a single character to the finite-state machine and returns whether
    /// it has reached an accepting state.
    fn feed(&mut self, input: char) -> bool;

    /// Feeds an entire string to the finite-state machine at once and returns
    /// whether it has reached an accepting state. Feeding an empty string
    /// leaves the machine as it is.
    fn feed_str(&mut self, input: &str) -> bool {
        let accepting = self.is_accepting();
        input.chars().fold(accepting, |_, c| self.feed(c))
    }
}
