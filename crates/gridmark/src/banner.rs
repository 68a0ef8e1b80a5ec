//! Welcome and rules text.

/// Printed once at startup.
pub const WELCOME: &str = "*** Welcome to TicTacToe! ***";

/// How to play, for boards between `min_size` and `max_size`.
pub fn rules(min_size: usize, max_size: usize) -> String {
    format!(
        "How to play:\n\
         1) Choose the battlefield size by typing a number from {min_size} to {max_size};\n\
         * Note: On fields larger than 3x3, a winning combination requires 4 marks in a row, column, or diagonal.\n\
         2) To place a mark in a cell, enter two digits separated by a comma, like this: row, column.\n\
         * Note: Row and column indices start from 0. For example, to place a mark in the center of a 3x3 field, enter: 1, 1.\n\
         3) After setting up the battlefield, you can type 'r' to restart or 'q' to quit the game.\n\
         \n\
         *** Enjoy the game! ***\n"
    )
}
