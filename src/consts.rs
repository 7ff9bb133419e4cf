pub mod cli_consts {
    //! Application constants, grouped by the part of the program that uses them.

    /// API base URL used when neither the flag, the environment nor the config file set one.
    pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

    /// Directory under `$HOME` holding the config file.
    pub const CONFIG_DIR: &str = ".reviews-dashboard";

    /// The maximum number of events to keep in the activity log.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Capacity of the channel carrying fetch results back to the UI loop.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    pub mod ui {
        use std::time::Duration;

        /// How long the UI loop waits for a key press before redrawing.
        pub const INPUT_POLL_MS: u64 = 100;

        /// Rows taken by one review card, borders included.
        pub const CARD_HEIGHT: u16 = 7;

        /// Minimum width of a review card before the grid drops a column.
        pub const MIN_CARD_WIDTH: u16 = 38;

        /// Maximum number of card columns.
        pub const MAX_CARD_COLUMNS: u16 = 3;

        pub const fn input_poll_interval() -> Duration {
            Duration::from_millis(INPUT_POLL_MS)
        }
    }

    pub mod report {
        /// Width of the longest bar in headless output.
        pub const BAR_WIDTH: usize = 40;
    }
}
