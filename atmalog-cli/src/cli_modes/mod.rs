mod atmalog_cli;

pub use atmalog_cli::AtmaLogCli;

pub enum CliModeResult {
    Finish,
    /// The mode ran but surfaced an error to the user.
    Failed,
    NothingToDo,
}
