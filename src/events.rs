/// What the driver does after showing a generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Show the next generation
    Advance,

    /// Exit the application
    Exit,
}
