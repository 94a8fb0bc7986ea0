#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Clears the terminal before every round and before the results are shown.
    pub clear_screen: bool,
    /// Waits for a single key press after every round.
    ///
    /// Needs an interactive terminal on stdin.
    pub pause: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clear_screen: true,
            pause: true,
        }
    }
}
