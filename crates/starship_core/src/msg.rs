#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Frontend came up; kicks off the first load.
    Start,
    /// User asked to fetch the catalog again after a failure or to refresh it.
    RetryClicked,
    /// Loader finished one page.
    LoadProgress {
        load_id: crate::LoadId,
        url: String,
        loaded: usize,
        total: u64,
    },
    /// Loader settled. The error side carries the message shown to the user.
    LoadFinished {
        load_id: crate::LoadId,
        result: Result<Vec<crate::Starship>, String>,
    },
    /// User edited the distance input.
    DistanceChanged(String),
    /// No engine event arrived within the poll interval.
    Tick,
}
